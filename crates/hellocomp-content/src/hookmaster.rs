//! Hook-Master — video script engine for HelloComp gaming PCs.
//!
//! Generates TikTok hooks, a 9:16 vertical video script, and an
//! SEO-optimised description for a GPU/audience pair. With a configured
//! [`GeminiClient`] the copy comes from the generative API; without one —
//! or on **any** API failure — it comes from deterministic Czech
//! templates, so the tool is always usable offline.

use hellocomp_core::{ContentItem, ContentType};

use crate::gemini::GeminiClient;

/// Shared brand-voice system instruction.
const BRAND_VOICE: &str = "Jsi kreativní copywriter pro HelloComp — českou značku herních PC. \
     Píšeš drzým, sebevědomým, ale profesionálním tónem. Cílovka jsou \
     mladí hráči (18–35) v ČR. Používáš emoji střídmě. Vždy zmiň \
     konkrétní GPU a výhody pro hráče. Výstup vždy česky.";

const HOOK_TEMPLATES: [&str; 3] = [
    "POV: Právě sis dal {gpu} do svého nového HelloComp a {audience} lobby se třese 🔥",
    "Když ti řeknou, že {gpu} nestačí na {audience}… *ukazuje 240 FPS* 😤💪",
    "3 sekundy, které změní tvůj gaming navždy — HelloComp s {gpu} 🎮🚀",
];

const SCRIPT_TEMPLATE: &str = "[0:00] HOOK — Otevření záběrem na rozsvícený HelloComp PC s {gpu}.
[0:03] „Víš, co odlišuje průměrného hráče od TOHO hráče? Technika.\"
[0:07] Střih na gameplay ({audience}) — ultra nastavení, FPS counter v rohu.
[0:12] „{gpu} v HelloComp GAMER — tohle není jen PC, tohle je unfair advantage.\"
[0:18] B-roll: detail komponentů, RGB, kabeláž.
[0:22] CTA — „Odkaz v biu. HelloComp — Hraj bez kompromisů.\"
[0:25] Logo + end screen.";

const SEO_TEMPLATE: &str = "HelloComp gaming PC s {gpu} — {audience} sestava pro maximální FPS \
     a bezkompromisní herní zážitek. Česká značka herních počítačů \
     HelloComp nabízí prémiové konfigurace s {gpu} pro náročné hráče. \
     Objednej online na hellocomp.cz.";

/// Complete output from a Hook-Master generation run.
#[derive(Debug, Clone)]
pub struct HookMasterResult {
    pub hooks: Vec<String>,
    pub script: String,
    pub seo_description: String,
    pub gpu: String,
    pub target_audience: String,
}

impl HookMasterResult {
    /// Converts the run into dashboard-compatible [`ContentItem`] drafts:
    /// one per hook, one video script, one SEO description.
    #[must_use]
    pub fn to_content_items(&self) -> Vec<ContentItem> {
        let mut items = Vec::with_capacity(self.hooks.len() + 2);
        for (i, hook) in self.hooks.iter().enumerate() {
            items.push(ContentItem::draft(
                format!("TikTok Hook #{} — {}", i + 1, self.gpu),
                hook.clone(),
                ContentType::TiktokHook,
            ));
        }
        items.push(ContentItem::draft(
            format!("Video Script 9:16 — {} ({})", self.gpu, self.target_audience),
            self.script.clone(),
            ContentType::VideoScript,
        ));
        items.push(ContentItem::draft(
            format!("SEO Popisek — {}", self.gpu),
            self.seo_description.clone(),
            ContentType::SeoMeta,
        ));
        items
    }
}

/// Generates Hook-Master content for a GPU and target audience.
///
/// When `client` is `Some`, the Gemini API is tried first; any error is
/// logged at warn and the deterministic templates take over. Never fails.
pub async fn generate(
    gpu: &str,
    target_audience: &str,
    client: Option<&GeminiClient>,
) -> HookMasterResult {
    if let Some(client) = client {
        match generate_with_gemini(gpu, target_audience, client).await {
            Ok(result) => return result,
            Err(e) => {
                tracing::warn!(error = %e, "hookmaster API generation failed, using templates");
            }
        }
    }
    generate_from_templates(gpu, target_audience)
}

/// Deterministic template rendering — no API key required.
#[must_use]
pub fn generate_from_templates(gpu: &str, target_audience: &str) -> HookMasterResult {
    let render = |template: &str| {
        template
            .replace("{gpu}", gpu)
            .replace("{audience}", target_audience)
    };
    HookMasterResult {
        hooks: HOOK_TEMPLATES.iter().map(|t| render(t)).collect(),
        script: render(SCRIPT_TEMPLATE),
        seo_description: render(SEO_TEMPLATE),
        gpu: gpu.to_string(),
        target_audience: target_audience.to_string(),
    }
}

async fn generate_with_gemini(
    gpu: &str,
    target_audience: &str,
    client: &GeminiClient,
) -> Result<HookMasterResult, crate::ContentError> {
    let user_prompt = format!(
        "GPU: {gpu}\n\
         Cílovka: {target_audience}\n\n\
         Vygeneruj přesně:\n\
         1. Tři krátké TikTok hooky (každý max 15 slov, drzý tón).\n\
         2. Stručný scénář pro 9:16 vertikální video (max 25 s, s timestampy).\n\
         3. SEO popisek (max 160 znaků) optimalizovaný na klíčová slova.\n\n\
         Formát odpovědi — platný JSON:\n\
         {{\"hooks\": [\"…\",\"…\",\"…\"], \"script\": \"…\", \"seo_description\": \"…\"}}"
    );

    let data = client.generate_json(BRAND_VOICE, &user_prompt).await?;

    let hooks: Vec<String> = data
        .get("hooks")
        .and_then(serde_json::Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .take(3)
                .collect()
        })
        .unwrap_or_default();
    let script = data
        .get("script")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string();
    let seo_description = data
        .get("seo_description")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(HookMasterResult {
        hooks,
        script,
        seo_description,
        gpu: gpu.to_string(),
        target_audience: target_audience.to_string(),
    })
}
