//! Text and JSON rendering for the content-generation commands.

use std::path::Path;

use hellocomp_content::{
    filter_gaming_pcs, hookmaster, load_inventory, omnichannel, seo, GeminiClient,
};
use hellocomp_core::AppConfig;

use crate::OutputFormat;

/// Builds a Gemini client when an API key is configured; `None` selects
/// template mode.
fn build_gemini_client(config: &AppConfig) -> anyhow::Result<Option<GeminiClient>> {
    config
        .gemini_api_key
        .as_deref()
        .map(|key| {
            GeminiClient::with_base_url(
                key,
                &config.gemini_model,
                config.http_timeout_secs,
                &config.gemini_base_url,
            )
        })
        .transpose()
        .map_err(Into::into)
}

pub(crate) async fn run_hooks(
    config: &AppConfig,
    gpu: &str,
    audience: &str,
    json: bool,
) -> anyhow::Result<()> {
    let client = build_gemini_client(config)?;
    let result = hookmaster::generate(gpu, audience, client.as_ref()).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_content_items())?
        );
        return Ok(());
    }

    let bar = "=".repeat(60);
    println!("{bar}");
    println!("  HOOK-MASTER — {} | {}", result.gpu, result.target_audience);
    println!("{bar}");
    println!();
    for (i, hook) in result.hooks.iter().enumerate() {
        println!("  🎣 Hook #{}: {hook}", i + 1);
    }
    println!();
    println!("  🎬 Scénář (9:16 vertical):");
    println!("  {}", "-".repeat(40));
    for line in result.script.trim().lines() {
        println!("    {line}");
    }
    println!();
    println!("  🔍 SEO popisek:");
    println!("    {}", result.seo_description);
    println!();
    println!("{bar}");
    Ok(())
}

pub(crate) async fn run_posts(
    config: &AppConfig,
    gpu: &str,
    audience: &str,
    json: bool,
) -> anyhow::Result<()> {
    let client = build_gemini_client(config)?;
    let result = omnichannel::distribute(gpu, audience, client.as_ref()).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_content_items())?
        );
        return Ok(());
    }

    let bar = "=".repeat(60);
    println!("{bar}");
    println!(
        "  OMNICHANNEL — {} | {}",
        result.gpu, result.target_audience
    );
    println!("{bar}");
    for (platform, body) in [
        ("📱 TikTok", &result.tiktok),
        ("📸 Instagram", &result.instagram),
        ("👥 Facebook", &result.facebook),
    ] {
        println!();
        println!("  {platform}:");
        for line in body.lines() {
            println!("    {line}");
        }
    }
    println!();
    println!("{bar}");
    Ok(())
}

pub(crate) fn run_seo(
    config: &AppConfig,
    gpu: Option<&str>,
    tier: Option<&str>,
    csv: Option<&Path>,
    format: OutputFormat,
    keywords: bool,
) -> anyhow::Result<()> {
    let path = csv.unwrap_or(&config.inventory_csv);
    let products = filter_gaming_pcs(load_inventory(path)?);
    let content = seo::generate_full_seo_content(&products, gpu, tier);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&content)?),
        OutputFormat::Markdown => {
            println!("{}", content.table_md);
            println!();
            println!("{}", content.paragraph);
        }
        OutputFormat::Html => {
            println!("{}", content.table_html);
            println!();
            println!("<p>{}</p>", content.paragraph);
        }
        OutputFormat::Text => {
            let bar = "=".repeat(60);
            println!("{bar}");
            println!("  LOOT-BOX SEO — HelloComp Dynamic Content Generator");
            println!("{bar}");
            println!();
            println!("{}", content.table_md);
            println!();
            println!("  📝 SEO odstavec:");
            println!("    {}", content.paragraph);
            println!();
        }
    }

    if keywords {
        println!();
        println!("  🔑 Doporučená klíčová slova:");
        println!("  {}", "-".repeat(40));
        for kw in seo::keyword_suggestions() {
            println!("    • {} → {}", kw.keyword, kw.tip);
        }
        println!();
    }

    Ok(())
}
