//! Omnichannel distributor — platform-specific social copy from a single
//! product brief.
//!
//! Same degradation contract as [`crate::hookmaster`]: Gemini when a
//! client is provided and healthy, deterministic Czech templates
//! otherwise.

use hellocomp_core::{ContentItem, ContentType};

use crate::gemini::GeminiClient;

/// Shared brand-voice system instruction.
const BRAND_VOICE: &str = "Jsi sociální media copywriter pro HelloComp — českou značku herních PC. \
     Píšeš drzým, sebevědomým, ale profesionálním tónem. Cílovka jsou \
     mladí hráči (18–35) v ČR. Výstup vždy česky.";

const TIKTOK_TEMPLATE: &str = "POV: Právě sis dal {gpu} do svého nového HelloComp a {audience} lobby \
     se třese 🔥 #gaming #HelloComp #{gpu_tag} #hernipc";

const INSTAGRAM_TEMPLATE: &str = "✨ Nový level odemčen.\n\n\
     {gpu} v HelloComp GAMER sérii — pro hráče jako jsi ty. \
     Žádné kompromisy, jen čistý výkon.\n\n\
     Cílová skupina: {audience} 🎮\n\n\
     #HelloComp #HerníPC #Gaming #{gpu_tag} #CzechGaming";

const FACEBOOK_TEMPLATE: &str = "🎮 HelloComp GAMER s {gpu} — ideální volba pro {audience}.\n\n\
     Hledáš výkonný herní PC postavený v Česku? Naše GAMER sestava s {gpu} \
     ti dá náskok, který potřebuješ. Česká záruka, expresní doručení, \
     podpora od skutečných hráčů.\n\n\
     👉 Zjisti více na hellocomp.cz";

/// Complete output from a single omnichannel distribution run.
#[derive(Debug, Clone)]
pub struct OmnichannelResult {
    pub gpu: String,
    pub target_audience: String,
    pub tiktok: String,
    pub instagram: String,
    pub facebook: String,
}

impl OmnichannelResult {
    /// Converts the run into three social-post [`ContentItem`] drafts.
    #[must_use]
    pub fn to_content_items(&self) -> Vec<ContentItem> {
        [
            ("TikTok", &self.tiktok),
            ("Instagram", &self.instagram),
            ("Facebook", &self.facebook),
        ]
        .into_iter()
        .map(|(platform, body)| {
            ContentItem::draft(
                format!("{platform} post — {}", self.gpu),
                body.clone(),
                ContentType::SocialPost,
            )
        })
        .collect()
    }
}

/// Generates platform-specific social posts for a GPU and target audience.
///
/// Degrades to templates on any API failure; never fails.
pub async fn distribute(
    gpu: &str,
    target_audience: &str,
    client: Option<&GeminiClient>,
) -> OmnichannelResult {
    if let Some(client) = client {
        match distribute_with_gemini(gpu, target_audience, client).await {
            Ok(result) => return result,
            Err(e) => {
                tracing::warn!(error = %e, "omnichannel API generation failed, using templates");
            }
        }
    }
    distribute_from_templates(gpu, target_audience)
}

/// Deterministic template rendering — no API key required.
#[must_use]
pub fn distribute_from_templates(gpu: &str, target_audience: &str) -> OmnichannelResult {
    let tag = gpu_tag(gpu);
    let render = |template: &str| {
        template
            .replace("{gpu_tag}", &tag)
            .replace("{gpu}", gpu)
            .replace("{audience}", target_audience)
    };
    OmnichannelResult {
        gpu: gpu.to_string(),
        target_audience: target_audience.to_string(),
        tiktok: render(TIKTOK_TEMPLATE),
        instagram: render(INSTAGRAM_TEMPLATE),
        facebook: render(FACEBOOK_TEMPLATE),
    }
}

/// Converts a GPU name to a hashtag-safe token (no spaces or dashes).
fn gpu_tag(gpu: &str) -> String {
    gpu.replace([' ', '-'], "")
}

async fn distribute_with_gemini(
    gpu: &str,
    target_audience: &str,
    client: &GeminiClient,
) -> Result<OmnichannelResult, crate::ContentError> {
    let user_prompt = format!(
        "GPU: {gpu}\n\
         Cílovka: {target_audience}\n\n\
         Vygeneruj platformně specifické posty pro:\n\
         1. TikTok — krátký, virální, max 150 znaků, emoji, hashtagy\n\
         2. Instagram — vizuálně orientovaný, 2–3 odstavce, emoji, hashtagy\n\
         3. Facebook — informativnější, 3–4 věty, CTA na hellocomp.cz\n\n\
         Formát odpovědi — platný JSON:\n\
         {{\"tiktok\": \"…\", \"instagram\": \"…\", \"facebook\": \"…\"}}"
    );

    let data = client.generate_json(BRAND_VOICE, &user_prompt).await?;
    let field = |key: &str| {
        data.get(key)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(OmnichannelResult {
        gpu: gpu.to_string(),
        target_audience: target_audience.to_string(),
        tiktok: field("tiktok"),
        instagram: field("instagram"),
        facebook: field("facebook"),
    })
}
