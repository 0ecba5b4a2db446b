//! The `report` command: read-only summary of a published catalogue.
//!
//! Consumes the `feed` command's output schema and prints price tiers,
//! lineup counts, GPU-series buckets, and the most expensive builds.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;

use hellocomp_core::{Catalogue, Product};

pub(crate) fn run_report(path: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalogue {}", path.display()))?;
    let catalogue: Catalogue = serde_json::from_str(&json)
        .with_context(|| format!("catalogue {} is not valid JSON", path.display()))?;
    print!("{}", render_report(&catalogue));
    Ok(())
}

/// Price-tier bucket labels in display order.
const PRICE_TIERS: [&str; 4] = ["under_10k", "10k_20k", "20k_35k", "over_35k"];

fn price_tier(price: f64) -> &'static str {
    if price < 10_000.0 {
        "under_10k"
    } else if price < 20_000.0 {
        "10k_20k"
    } else if price < 35_000.0 {
        "20k_35k"
    } else {
        "over_35k"
    }
}

/// Buckets a GPU spec string into a marketing series label. Empty specs
/// return `None`; unrecognized non-empty specs land in `"other"`.
fn gpu_series(gpu: &str) -> Option<&'static str> {
    const SERIES: [(&str, &str); 9] = [
        ("RTX 50", "RTX 50xx"),
        ("RTX 40", "RTX 40xx"),
        ("RTX 30", "RTX 30xx"),
        ("RTX 20", "RTX 20xx"),
        ("GTX 16", "GTX 16xx"),
        ("GTX 10", "GTX 10xx"),
        ("RX 7", "RX 7xxx"),
        ("RX 6", "RX 6xxx"),
        ("RX 5", "RX 5xxx"),
    ];
    if gpu.is_empty() {
        return None;
    }
    SERIES
        .iter()
        .find(|(needle, _)| gpu.contains(needle))
        .map_or(Some("other"), |(_, label)| Some(label))
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn render_report(catalogue: &Catalogue) -> String {
    let products = &catalogue.products;
    let priced: Vec<&Product> = products.iter().filter(|p| p.price > 0.0).collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total: {}, With price: {}",
        products.len(),
        priced.len()
    );
    if priced.is_empty() {
        let _ = writeln!(out, "No priced products in catalogue.");
        return out;
    }

    let min = priced.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max = priced
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);
    let _ = writeln!(out, "Range: {min:.0} - {max:.0} CZK");

    let mut tier_counts: HashMap<&str, usize> = HashMap::new();
    for p in &priced {
        *tier_counts.entry(price_tier(p.price)).or_insert(0) += 1;
    }
    let _ = writeln!(out, "\nPRICE TIERS:");
    for tier in PRICE_TIERS {
        let _ = writeln!(out, "  {tier}: {}", tier_counts.get(tier).unwrap_or(&0));
    }

    let mut lineup_counts: HashMap<&str, usize> = HashMap::new();
    for p in products {
        let label = if p.lineup.is_empty() {
            "(none)"
        } else {
            p.lineup.as_str()
        };
        *lineup_counts.entry(label).or_insert(0) += 1;
    }
    let mut lineups: Vec<(&str, usize)> = lineup_counts.into_iter().collect();
    lineups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let _ = writeln!(out, "\nLINEUPS:");
    for (label, count) in lineups {
        let _ = writeln!(out, "  {label}: {count}");
    }

    let mut series_counts: HashMap<&str, usize> = HashMap::new();
    for p in &priced {
        if let Some(series) = p.specs.gpu.as_deref().and_then(gpu_series) {
            *series_counts.entry(series).or_insert(0) += 1;
        }
    }
    let mut series: Vec<(&str, usize)> = series_counts.into_iter().collect();
    series.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let _ = writeln!(out, "\nGPU SERIES:");
    for (label, count) in series {
        let _ = writeln!(out, "  {label}: {count}");
    }

    let mut by_price: Vec<&Product> = priced.clone();
    by_price.sort_by(|a, b| {
        b.price
            .partial_cmp(&a.price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let _ = writeln!(out, "\nTOP 5 EXPENSIVE:");
    for p in by_price.iter().take(5) {
        let _ = writeln!(
            out,
            "  {:.0} CZK - {} [{}]",
            p.price,
            truncate_chars(&p.name, 60),
            p.lineup
        );
    }

    out
}
