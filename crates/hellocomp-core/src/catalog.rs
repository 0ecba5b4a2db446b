//! Catalogue output types shared by the feed pipeline and its consumers.
//!
//! Field names serialize in lowerCamelCase because the JSON document is the
//! contract with the static-site generator: key names, the slug vocabulary,
//! and product ordering are all part of the external interface.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical category identifier. Closed vocabulary — unmatched category
/// paths classify to [`CategorySlug::Other`], never to an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySlug {
    Pc,
    Gpu,
    Notebook,
    Cpu,
    Phone,
    Monitor,
    Headset,
    Peripheral,
    Psu,
    Case,
    Cooler,
    Mobo,
    Ram,
    Storage,
    Tablet,
    Drone,
    Speaker,
    Mic,
    Watch,
    Voucher,
    Other,
}

impl CategorySlug {
    /// Primary sort rank for the catalogue ordering. Lower ranks sort
    /// first; slugs outside the priority table share rank 99 and are
    /// ordered among themselves by the secondary price key only.
    #[must_use]
    pub fn sort_rank(self) -> u8 {
        match self {
            CategorySlug::Pc => 0,
            CategorySlug::Gpu => 1,
            CategorySlug::Notebook => 2,
            CategorySlug::Cpu => 3,
            CategorySlug::Monitor => 4,
            CategorySlug::Phone => 5,
            _ => 99,
        }
    }

    /// The lowercase token used in JSON and log output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategorySlug::Pc => "pc",
            CategorySlug::Gpu => "gpu",
            CategorySlug::Notebook => "notebook",
            CategorySlug::Cpu => "cpu",
            CategorySlug::Phone => "phone",
            CategorySlug::Monitor => "monitor",
            CategorySlug::Headset => "headset",
            CategorySlug::Peripheral => "peripheral",
            CategorySlug::Psu => "psu",
            CategorySlug::Case => "case",
            CategorySlug::Cooler => "cooler",
            CategorySlug::Mobo => "mobo",
            CategorySlug::Ram => "ram",
            CategorySlug::Storage => "storage",
            CategorySlug::Tablet => "tablet",
            CategorySlug::Drone => "drone",
            CategorySlug::Speaker => "speaker",
            CategorySlug::Mic => "mic",
            CategorySlug::Watch => "watch",
            CategorySlug::Voucher => "voucher",
            CategorySlug::Other => "other",
        }
    }
}

impl std::fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simplified category information derived from a raw Heureka path like
/// `"Heureka.cz | Počítače a notebooky | Notebooky"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Human-readable path minus the root segment, joined with `" > "`.
    pub full: String,
    pub slug: CategorySlug,
    /// Most specific path segment in its original casing. Used during
    /// classification; retained for display/debugging only.
    pub last: String,
}

/// Sparse spec attributes projected from the vendor parameter list.
///
/// Absent fields are omitted from JSON entirely — "not provided by the
/// vendor" must stay distinguishable from an explicitly empty value.
/// Field declaration order is the serialization order the downstream
/// generator's fixtures expect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_freq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pc_type: Option<String>,
    /// `case` is a Rust keyword; the JSON key stays `case`.
    #[serde(rename = "case", skip_serializing_if = "Option::is_none")]
    pub chassis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
}

impl SpecMap {
    /// Returns `true` when no spec attribute is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cpu.is_none()
            && self.cpu_freq.is_none()
            && self.cpu_cores.is_none()
            && self.ram.is_none()
            && self.gpu.is_none()
            && self.gpu_brand.is_none()
            && self.vram.is_none()
            && self.storage.is_none()
            && self.os.is_none()
            && self.gpu_type.is_none()
            && self.usage.is_none()
            && self.pc_type.is_none()
            && self.chassis.is_none()
            && self.color.is_none()
            && self.socket.is_none()
            && self.capacity.is_none()
            && self.power.is_none()
    }
}

/// One normalized product record in the output catalogue.
///
/// Constructed once per feed item during assembly, immutable thereafter.
/// Every run is a full rebuild from the source feed; there is no
/// update-in-place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub url: String,
    pub img: String,
    /// Numeric VAT-inclusive price. `0.0` when the feed value is absent or
    /// unparsable.
    pub price: f64,
    /// Display string like `"12 990 Kč"`. Empty when `price` is zero.
    pub price_formatted: String,
    pub manufacturer: String,
    pub category: CategoryInfo,
    /// Marketing tier label (`"SE"` / `"Pro"` / `"Max"`), empty for
    /// non-lineup items such as peripherals.
    pub lineup: String,
    pub specs: SpecMap,
    pub ean: String,
    /// Derived from the feed's delivery-date code: `"0"` means available
    /// now; every other value (including absent) counts as out of stock.
    pub in_stock: bool,
    /// Alternate image URLs. Omitted from JSON when the feed has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_imgs: Option<Vec<String>>,
}

/// Metadata header of the catalogue document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueMeta {
    /// Fixed source tag, `"heureka"`.
    pub source: String,
    pub feed_url: String,
    pub total_products: usize,
    /// Per-slug product counts in first-seen order over the sorted product
    /// list. Always computed from `products`, never tracked independently.
    pub categories: IndexMap<CategorySlug, usize>,
}

/// The full output document: metadata plus the ordered product list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    pub meta: CatalogueMeta,
    pub products: Vec<Product>,
}
