//! Catalogue assembly: per-item normalization plus document-level
//! ordering and statistics.
//!
//! Classification, spec extraction, lineup detection, and price parsing
//! are delegated to their modules; this module only composes them and
//! owns the output ordering contract.

use std::cmp::Ordering;

use indexmap::IndexMap;

use hellocomp_core::{Catalogue, CatalogueMeta, CategorySlug, Product};

use crate::classify::classify_category;
use crate::lineup::detect_lineup;
use crate::price::{format_czk, parse_price};
use crate::specs::extract_specs;
use crate::types::RawFeedItem;

/// Fixed source tag in the catalogue metadata.
const SOURCE_TAG: &str = "heureka";

/// The delivery code meaning "available for immediate dispatch".
const IN_STOCK_CODE: &str = "0";

/// Normalizes one raw feed item into an output [`Product`].
///
/// Total — every degenerate input degrades to a well-formed record
/// (price 0, slug `other`, empty lineup) rather than an error.
#[must_use]
pub fn build_product(item: RawFeedItem) -> Product {
    let price = parse_price(&item.price_vat);
    let category = classify_category(&item.category_text);
    let lineup = detect_lineup(&item.name, item.param("Typ PC"));
    let specs = extract_specs(&item.params);
    let in_stock = item.delivery_date == IN_STOCK_CODE;

    Product {
        id: item.id,
        name: item.name,
        url: item.url,
        img: item.img,
        price,
        price_formatted: format_czk(price),
        manufacturer: item.manufacturer,
        category,
        lineup: lineup.to_string(),
        specs,
        ean: item.ean,
        in_stock,
        alt_imgs: if item.alt_imgs.is_empty() {
            None
        } else {
            Some(item.alt_imgs)
        },
    }
}

/// Builds the full catalogue document from the parsed feed.
///
/// Products are stable-sorted by category rank (see
/// [`CategorySlug::sort_rank`]) and then by price descending; items with a
/// fully equal key keep their relative feed order. The per-category counts
/// are tallied from the sorted output list so the metadata can never drift
/// from the emitted products.
#[must_use]
pub fn build_catalogue(items: Vec<RawFeedItem>, feed_url: &str) -> Catalogue {
    let mut products: Vec<Product> = items.into_iter().map(build_product).collect();

    products.sort_by(|a, b| {
        a.category
            .slug
            .sort_rank()
            .cmp(&b.category.slug.sort_rank())
            // Prices are finite by construction (parse failure yields 0),
            // so the Equal fallback only keeps the comparator total.
            .then_with(|| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal))
    });

    let mut categories: IndexMap<CategorySlug, usize> = IndexMap::new();
    for product in &products {
        *categories.entry(product.category.slug).or_insert(0) += 1;
    }

    Catalogue {
        meta: CatalogueMeta {
            source: SOURCE_TAG.to_string(),
            feed_url: feed_url.to_string(),
            total_products: products.len(),
            categories,
        },
        products,
    }
}
