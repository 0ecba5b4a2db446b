use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod content_cmd;
mod feed;
mod report;

#[derive(Debug, Parser)]
#[command(name = "hellocomp")]
#[command(about = "HelloComp marketing-content toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert the Heureka XML feed into the JSON catalogue.
    Feed {
        /// Local feed path; downloaded from the configured feed URL when
        /// the file does not exist yet.
        #[arg(default_value = "/tmp/heureka-products.xml")]
        input: PathBuf,
        /// Catalogue output path.
        #[arg(default_value = "public/data/heureka-products.json")]
        output: PathBuf,
    },
    /// Summarize an existing catalogue: price tiers, lineups, GPU series.
    Report {
        #[arg(default_value = "public/data/heureka-products.json")]
        catalogue: PathBuf,
    },
    /// Generate TikTok hooks, a 9:16 video script, and an SEO description.
    Hooks {
        /// GPU model, e.g. "RTX 5080".
        gpu: String,
        /// Target audience, e.g. "hráč Warzone".
        audience: String,
        /// Print dashboard-compatible ContentItem JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Generate platform posts for TikTok, Instagram, and Facebook.
    Posts {
        /// GPU model, e.g. "RTX 5080".
        gpu: String,
        /// Target audience, e.g. "hráč Warzone".
        audience: String,
        /// Print dashboard-compatible ContentItem JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Generate SEO comparison tables and copy from the inventory CSV.
    Seo {
        /// Keep only products whose name contains this GPU string.
        #[arg(long)]
        gpu: Option<String>,
        /// Keep only products of this tier (SE, Pro, Max, Extreme, …).
        #[arg(long)]
        tier: Option<String>,
        /// Inventory CSV path; defaults to the configured location.
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Also print trending keyword suggestions.
        #[arg(long)]
        keywords: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Html,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = hellocomp_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Feed { input, output }) => feed::run_feed(&config, &input, &output).await,
        Some(Commands::Report { catalogue }) => report::run_report(&catalogue),
        Some(Commands::Hooks {
            gpu,
            audience,
            json,
        }) => content_cmd::run_hooks(&config, &gpu, &audience, json).await,
        Some(Commands::Posts {
            gpu,
            audience,
            json,
        }) => content_cmd::run_posts(&config, &gpu, &audience, json).await,
        Some(Commands::Seo {
            gpu,
            tier,
            csv,
            format,
            keywords,
        }) => content_cmd::run_seo(
            &config,
            gpu.as_deref(),
            tier.as_deref(),
            csv.as_deref(),
            format,
            keywords,
        ),
        None => {
            println!("hellocomp toolkit — try `hellocomp feed` or `hellocomp hooks --help`");
            Ok(())
        }
    }
}
