//! Loot-Box SEO — dynamic comparison tables and marketing copy from the
//! inventory catalogue.
//!
//! Pure string building over [`InventoryProduct`] rows; the only inputs
//! are the pre-loaded product list and the optional GPU/tier filters, so
//! everything here is deterministic and offline.

use std::collections::BTreeSet;

use serde::Serialize;

use hellocomp_core::{ContentItem, ContentType};

use crate::inventory::InventoryProduct;

/// Trending keyword seed for content planning. Static until a trends API
/// integration lands.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordSuggestion {
    pub keyword: &'static str,
    pub tip: &'static str,
}

static TRENDING_KEYWORDS: &[KeywordSuggestion] = &[
    KeywordSuggestion {
        keyword: "GTA VI požadavky",
        tip: "Napiš článek: Jaké PC potřebuješ na GTA VI?",
    },
    KeywordSuggestion {
        keyword: "nejlepší PC pro CS2",
        tip: "Srovnání FPS na HelloComp sestavách v CS2.",
    },
    KeywordSuggestion {
        keyword: "RTX 5090 recenze",
        tip: "Benchmark RTX 5090 v HelloComp Extreme sestavě.",
    },
    KeywordSuggestion {
        keyword: "herní PC do 30 000",
        tip: "Top 3 HelloComp GAMER SE sestavy pod 30 000 Kč.",
    },
    KeywordSuggestion {
        keyword: "RTX 5070 vs RX 9070 XT",
        tip: "Srovnávací tabulka obou GPU v HelloComp PC.",
    },
    KeywordSuggestion {
        keyword: "nejlepší herní PC 2025",
        tip: "Kompletní průvodce HelloComp řadami GAMER.",
    },
];

/// Single row in an SEO comparison table. Absent derived values render
/// as an em dash.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub product_name: String,
    pub gpu: String,
    pub tier: String,
    pub platform: String,
}

/// Markdown/HTML comparison table for a set of products.
#[derive(Debug, Clone)]
pub struct SeoComparisonTable {
    pub title: String,
    pub rows: Vec<ComparisonRow>,
}

impl SeoComparisonTable {
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![
            format!("## {}", self.title),
            String::new(),
            "| Produkt | GPU | Řada | Platforma |".to_string(),
            "|---------|-----|------|-----------|".to_string(),
        ];
        for r in &self.rows {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                r.product_name, r.gpu, r.tier, r.platform
            ));
        }
        lines.join("\n")
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let header = "<tr><th>Produkt</th><th>GPU</th><th>Řada</th><th>Platforma</th></tr>";
        let rows: String = self
            .rows
            .iter()
            .map(|r| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    r.product_name, r.gpu, r.tier, r.platform
                )
            })
            .collect();
        format!(
            "<h2>{}</h2>\n<table>\n<thead>{header}</thead>\n<tbody>{rows}</tbody>\n</table>",
            self.title
        )
    }
}

/// Builds an SEO comparison table from product data.
///
/// `gpu_filter` keeps products whose name contains the string
/// (case-insensitive); `tier_filter` keeps products whose derived tier
/// equals it (case-insensitive). Rows are deduplicated by name. The title
/// is auto-generated from the filters unless `title` overrides it.
#[must_use]
pub fn build_comparison_table(
    products: &[InventoryProduct],
    gpu_filter: Option<&str>,
    tier_filter: Option<&str>,
    title: Option<&str>,
) -> SeoComparisonTable {
    let gpu_lower = gpu_filter.map(str::to_lowercase);
    let tier_lower = tier_filter.map(str::to_lowercase);

    let mut seen = BTreeSet::new();
    let rows: Vec<ComparisonRow> = products
        .iter()
        .filter(|p| {
            gpu_lower
                .as_ref()
                .is_none_or(|g| p.name.to_lowercase().contains(g))
        })
        .filter(|p| {
            tier_lower
                .as_ref()
                .is_none_or(|t| p.tier().unwrap_or_default().to_lowercase() == *t)
        })
        .filter(|p| seen.insert(p.name.clone()))
        .map(|p| ComparisonRow {
            product_name: p.name.clone(),
            gpu: p.gpu().unwrap_or_else(|| "—".to_string()),
            tier: p.tier().unwrap_or_else(|| "—".to_string()),
            platform: p.platform().unwrap_or("—").to_string(),
        })
        .collect();

    let auto_title = match (gpu_filter, tier_filter) {
        (Some(g), Some(t)) => format!("Srovnání HelloComp herních PC — {g} ({t})"),
        (Some(g), None) => format!("Srovnání HelloComp herních PC — {g}"),
        (None, Some(t)) => format!("Srovnání HelloComp herních PC ({t})"),
        (None, None) => "Srovnání HelloComp herních PC".to_string(),
    };

    SeoComparisonTable {
        title: title.map_or(auto_title, str::to_string),
        rows,
    }
}

/// Generates an SEO-ready marketing paragraph for a GPU lineup.
#[must_use]
pub fn generate_seo_paragraph(products: &[InventoryProduct], gpu_filter: Option<&str>) -> String {
    let gpu_lower = gpu_filter.map(str::to_lowercase);
    let filtered: Vec<&InventoryProduct> = products
        .iter()
        .filter(|p| {
            gpu_lower
                .as_ref()
                .is_none_or(|g| p.name.to_lowercase().contains(g))
        })
        .collect();

    let mut seen = std::collections::HashSet::new();
    let count = filtered
        .iter()
        .filter(|p| seen.insert(p.name.as_str()))
        .count();

    let gpu_label = gpu_filter.unwrap_or("herní GPU");
    if count == 0 {
        return format!("Pro GPU \"{gpu_label}\" aktuálně nemáme žádné sestavy v nabídce.");
    }

    let tiers: BTreeSet<String> = filtered.iter().filter_map(|p| p.tier()).collect();
    let tier_text = if tiers.is_empty() {
        "různých řadách".to_string()
    } else {
        tiers.into_iter().collect::<Vec<_>>().join(", ")
    };

    format!(
        "HelloComp nabízí {count} unikátních konfigurací s {gpu_label} v řadách {tier_text}. \
         Ať hledáš vstupní sestavu nebo prémiový stroj pro kompetitivní gaming, HelloComp má \
         řešení na míru. Všechny sestavy jsou dostupné na hellocomp.cz s českou zárukou a \
         expresním doručením po celé ČR."
    )
}

/// Returns the trending keyword suggestions for content planning.
#[must_use]
pub fn keyword_suggestions() -> &'static [KeywordSuggestion] {
    TRENDING_KEYWORDS
}

/// Bundle of everything the `seo` command renders.
#[derive(Debug, Clone, Serialize)]
pub struct SeoContent {
    pub table_md: String,
    pub table_html: String,
    pub paragraph: String,
    pub keywords: Vec<KeywordSuggestion>,
    pub content_items: Vec<ContentItem>,
}

/// High-level entry point: filtered table + paragraph + keywords +
/// dashboard drafts from a pre-loaded (already gaming-PC-filtered)
/// product list.
#[must_use]
pub fn generate_full_seo_content(
    products: &[InventoryProduct],
    gpu_filter: Option<&str>,
    tier_filter: Option<&str>,
) -> SeoContent {
    let table = build_comparison_table(products, gpu_filter, tier_filter, None);
    let paragraph = generate_seo_paragraph(products, gpu_filter);
    let table_md = table.to_markdown();

    let content_items = vec![
        ContentItem::draft(
            table.title.clone(),
            table_md.clone(),
            ContentType::ProductDescription,
        ),
        ContentItem::draft(
            format!("SEO text — {}", gpu_filter.unwrap_or("celá nabídka")),
            paragraph.clone(),
            ContentType::SeoMeta,
        ),
    ];

    SeoContent {
        table_md,
        table_html: table.to_html(),
        paragraph,
        keywords: TRENDING_KEYWORDS.to_vec(),
        content_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: &str, name: &str) -> InventoryProduct {
        InventoryProduct {
            code: code.to_string(),
            pair_code: None,
            name: name.to_string(),
            xml_feed_name: None,
        }
    }

    fn sample_products() -> Vec<InventoryProduct> {
        vec![
            product("A", "HelloComp AMD GAMER Pro 5070"),
            product("B", "HelloComp Intel GAMER Max RTX 5090"),
            product("C", "HelloComp AMD GAMER SE 5060"),
            // Duplicate name, must collapse in tables and counts.
            product("D", "HelloComp AMD GAMER Pro 5070"),
        ]
    }

    #[test]
    fn table_includes_derived_columns() {
        let table = build_comparison_table(&sample_products(), None, None, None);
        assert_eq!(table.rows.len(), 3);
        let pro = &table.rows[0];
        assert_eq!(pro.product_name, "HelloComp AMD GAMER Pro 5070");
        assert_eq!(pro.gpu, "5070");
        assert_eq!(pro.tier, "Pro");
        assert_eq!(pro.platform, "AMD");
    }

    #[test]
    fn table_gpu_filter_is_substring_on_name() {
        let table = build_comparison_table(&sample_products(), Some("5090"), None, None);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].platform, "Intel");
        assert_eq!(table.title, "Srovnání HelloComp herních PC — 5090");
    }

    #[test]
    fn table_tier_filter_is_exact_case_insensitive() {
        let table = build_comparison_table(&sample_products(), None, Some("pro"), None);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].tier, "Pro");
    }

    #[test]
    fn table_missing_values_render_as_dash() {
        let products = vec![product("X", "HelloComp GAMER bez grafiky")];
        let table = build_comparison_table(&products, None, None, None);
        assert_eq!(table.rows[0].gpu, "—");
        assert_eq!(table.rows[0].platform, "—");
    }

    #[test]
    fn markdown_has_header_and_rows() {
        let md = build_comparison_table(&sample_products(), None, None, None).to_markdown();
        assert!(md.starts_with("## Srovnání HelloComp herních PC"));
        assert!(md.contains("| Produkt | GPU | Řada | Platforma |"));
        assert!(md.contains("| HelloComp AMD GAMER Pro 5070 | 5070 | Pro | AMD |"));
    }

    #[test]
    fn html_wraps_rows_in_table() {
        let html = build_comparison_table(&sample_products(), Some("5090"), None, None).to_html();
        assert!(html.starts_with("<h2>"));
        assert!(html.contains("<td>HelloComp Intel GAMER Max RTX 5090</td>"));
        assert!(html.contains("<tbody>"));
    }

    #[test]
    fn custom_title_overrides_auto_title() {
        let table =
            build_comparison_table(&sample_products(), None, None, Some("Vlastní titulek"));
        assert_eq!(table.title, "Vlastní titulek");
    }

    #[test]
    fn paragraph_counts_unique_names_and_sorts_tiers() {
        let text = generate_seo_paragraph(&sample_products(), None);
        assert!(text.contains("3 unikátních konfigurací"));
        assert!(text.contains("Max, Pro, SE"));
        assert!(text.contains("hellocomp.cz"));
    }

    #[test]
    fn paragraph_empty_result_has_dedicated_sentence() {
        let text = generate_seo_paragraph(&sample_products(), Some("4090"));
        assert_eq!(
            text,
            "Pro GPU \"4090\" aktuálně nemáme žádné sestavy v nabídce."
        );
    }

    #[test]
    fn keyword_suggestions_are_static_six() {
        assert_eq!(keyword_suggestions().len(), 6);
        assert_eq!(keyword_suggestions()[0].keyword, "GTA VI požadavky");
    }

    #[test]
    fn full_content_bundles_table_paragraph_and_drafts() {
        let content = generate_full_seo_content(&sample_products(), Some("5070"), None);
        assert!(content.table_md.contains("5070"));
        assert!(content.table_html.contains("5070"));
        assert!(content.paragraph.contains("5070"));
        assert_eq!(content.keywords.len(), 6);
        assert_eq!(content.content_items.len(), 2);
        assert_eq!(
            content.content_items[0].content_type,
            ContentType::ProductDescription
        );
        assert_eq!(content.content_items[1].content_type, ContentType::SeoMeta);
        assert_eq!(content.content_items[1].title, "SEO text — 5070");
    }
}
