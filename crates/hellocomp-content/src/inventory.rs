//! Loader for the flat inventory CSV and name-mining accessors.
//!
//! The inventory export is a semicolon-delimited file with columns
//! `code;pairCode;name;xmlFeedName`. It is a different shape from the
//! Heureka feed and is consumed only by the content generators. Rows that
//! cannot identify a product (fewer than three fields, empty code or
//! name) are skipped individually; loading continues.

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ContentError;

/// GPU model grammar seen in HelloComp product names: `RTX 5080`,
/// `RTX 4070 Ti SUPER`, `RX 9070 XT`, bare `5070 Ti`, Intel Arc
/// `A580`/`B580`, `VEGA 56`.
static GPU_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(RTX\s*\d{4}\s*(?:Ti\s*)?(?:SUPER)?|RX\s*\d{4}\s*(?:XT(?:X)?)?|\d{4}\s*(?:Ti\s*)?(?:SUPER)?|A\d{3}|B\d{3}|VEGA\s*\d+)",
    )
    .expect("GPU regex is valid")
});

/// Tier tokens used across the GAMER lineup and special editions.
static TIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(SE\d*|Pro|Max|Extreme|Individual|Ultra\d*)\b").expect("tier regex is valid")
});

/// Product record loaded from the inventory CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryProduct {
    pub code: String,
    pub pair_code: Option<String>,
    pub name: String,
    pub xml_feed_name: Option<String>,
}

impl InventoryProduct {
    /// Extracts the GPU model from the product name (e.g. `"RTX 5080"`).
    #[must_use]
    pub fn gpu(&self) -> Option<String> {
        GPU_RE
            .find(&self.name)
            .map(|m| m.as_str().trim().to_string())
    }

    /// Extracts the tier token (SE, Pro, Max, Extreme, Individual, Ultra).
    #[must_use]
    pub fn tier(&self) -> Option<String> {
        TIER_RE.find(&self.name).map(|m| m.as_str().to_string())
    }

    /// Extracts the platform — `"AMD"` or `"Intel"` — from the name.
    #[must_use]
    pub fn platform(&self) -> Option<&'static str> {
        let lower = self.name.to_lowercase();
        if lower.contains("amd") {
            Some("AMD")
        } else if lower.contains("intel") {
            Some("Intel")
        } else {
            None
        }
    }
}

/// Loads products from a semicolon-delimited CSV file.
///
/// The first row is treated as a header and skipped. Malformed rows are
/// skipped with a warning; only failing to open the file is an error.
///
/// # Errors
///
/// Returns [`ContentError::Io`] when the file cannot be opened.
pub fn load_inventory(path: &Path) -> Result<Vec<InventoryProduct>, ContentError> {
    let file = std::fs::File::open(path).map_err(|e| ContentError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_inventory(file))
}

/// Parses inventory rows from any reader. See [`load_inventory`].
pub fn parse_inventory<R: Read>(reader: R) -> Vec<InventoryProduct> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut products = Vec::new();
    for record in csv_reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed inventory row");
                continue;
            }
        };
        if record.len() < 3 {
            continue;
        }

        let code = clean_field(record.get(0));
        let pair_code = non_empty(clean_field(record.get(1)));
        let name = clean_field(record.get(2));
        let xml_feed_name = non_empty(clean_field(record.get(3)));

        if code.is_empty() || name.is_empty() {
            continue;
        }

        products.push(InventoryProduct {
            code,
            pair_code,
            name,
            xml_feed_name,
        });
    }
    products
}

/// Returns only HelloComp GAMER PCs (excludes peripherals, vouchers, etc.).
#[must_use]
pub fn filter_gaming_pcs(products: Vec<InventoryProduct>) -> Vec<InventoryProduct> {
    products
        .into_iter()
        .filter(|p| p.name.contains("GAMER") && p.name.contains("HelloComp"))
        .collect()
}

/// Returns deduplicated product names, preserving first-seen order.
#[must_use]
pub fn unique_product_names(products: &[InventoryProduct]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut names = Vec::new();
    for product in products {
        if seen.insert(product.name.as_str()) {
            names.push(product.name.clone());
        }
    }
    names
}

/// Trims whitespace and stray surrounding quotes from a CSV field.
fn clean_field(field: Option<&str>) -> String {
    field.unwrap_or("").trim().trim_matches('"').to_string()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv_text: &str) -> Vec<InventoryProduct> {
        parse_inventory(csv_text.as_bytes())
    }

    const HEADER: &str = "code;pairCode;name;xmlFeedName\n";

    #[test]
    fn loads_full_row() {
        let rows = parse(&format!(
            "{HEADER}PC-1358;PC-1358-W;HelloComp AMD GAMER Pro 5070;HelloComp GAMER Pro RTX 5070\n"
        ));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "PC-1358");
        assert_eq!(rows[0].pair_code.as_deref(), Some("PC-1358-W"));
        assert_eq!(rows[0].name, "HelloComp AMD GAMER Pro 5070");
        assert_eq!(
            rows[0].xml_feed_name.as_deref(),
            Some("HelloComp GAMER Pro RTX 5070")
        );
    }

    #[test]
    fn contract_row_mines_gpu_tier_platform() {
        let rows = parse(&format!("{HEADER}A;;HelloComp AMD GAMER Pro 5070;\n"));
        assert_eq!(rows.len(), 1);
        let p = &rows[0];
        assert_eq!(p.gpu().as_deref(), Some("5070"));
        assert_eq!(p.tier().as_deref(), Some("Pro"));
        assert_eq!(p.platform(), Some("AMD"));
        assert!(p.pair_code.is_none());
        assert!(p.xml_feed_name.is_none());
    }

    #[test]
    fn short_rows_are_skipped() {
        let rows = parse(&format!("{HEADER}A;B\nC;;HelloComp GAMER SE 5060;\n"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "C");
    }

    #[test]
    fn rows_missing_code_or_name_are_skipped() {
        let rows = parse(&format!("{HEADER};;No code;\nA;;;\nB;;Valid name;\n"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "B");
    }

    #[test]
    fn quoted_fields_are_unwrapped() {
        let rows = parse(&format!(
            "{HEADER}\"PC-1\";;\"HelloComp Intel GAMER Max RTX 5090\";\n"
        ));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "PC-1");
        assert_eq!(rows[0].platform(), Some("Intel"));
    }

    #[test]
    fn empty_file_yields_no_products() {
        assert!(parse("").is_empty());
        assert!(parse(HEADER).is_empty());
    }

    #[test]
    fn gpu_recognizes_rtx_with_suffixes() {
        let p = |name: &str| InventoryProduct {
            code: "X".to_string(),
            pair_code: None,
            name: name.to_string(),
            xml_feed_name: None,
        };
        assert_eq!(p("HelloComp RTX 5080").gpu().as_deref(), Some("RTX 5080"));
        assert_eq!(
            p("HelloComp RTX 4070 Ti SUPER").gpu().as_deref(),
            Some("RTX 4070 Ti SUPER")
        );
        assert_eq!(
            p("HelloComp RX 9070 XT").gpu().as_deref(),
            Some("RX 9070 XT")
        );
        assert_eq!(p("HelloComp Arc B580").gpu().as_deref(), Some("B580"));
        assert_eq!(p("HelloComp VEGA 56").gpu().as_deref(), Some("VEGA 56"));
        assert!(p("HelloComp Office").gpu().is_none());
    }

    #[test]
    fn tier_recognizes_numbered_editions() {
        let p = |name: &str| InventoryProduct {
            code: "X".to_string(),
            pair_code: None,
            name: name.to_string(),
            xml_feed_name: None,
        };
        assert_eq!(p("HelloComp GAMER SE2 5060").tier().as_deref(), Some("SE2"));
        assert_eq!(p("HelloComp Extreme 5090").tier().as_deref(), Some("Extreme"));
        assert_eq!(p("HelloComp Ultra7 build").tier().as_deref(), Some("Ultra7"));
        assert!(p("HelloComp Office 3000").tier().is_none());
    }

    #[test]
    fn filter_gaming_pcs_requires_both_tokens() {
        let rows = parse(&format!(
            "{HEADER}A;;HelloComp AMD GAMER Pro 5070;\nB;;HelloComp Office 3000;\nC;;Jiná značka GAMER 5070;\n"
        ));
        let gaming = filter_gaming_pcs(rows);
        assert_eq!(gaming.len(), 1);
        assert_eq!(gaming[0].code, "A");
    }

    #[test]
    fn unique_names_preserve_order() {
        let rows = parse(&format!(
            "{HEADER}A;;HelloComp GAMER Pro 5070;\nB;;HelloComp GAMER SE 5060;\nC;;HelloComp GAMER Pro 5070;\n"
        ));
        let names = unique_product_names(&rows);
        assert_eq!(
            names,
            vec!["HelloComp GAMER Pro 5070", "HelloComp GAMER SE 5060"]
        );
    }
}
