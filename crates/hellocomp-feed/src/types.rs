//! Raw Heureka feed item as parsed from the vendor's XML export.
//!
//! ## Observed shape from the live export
//!
//! The document root wraps repeated `<SHOPITEM>` elements. Per item:
//!
//! - `ITEM_ID`, `PRODUCTNAME`, `URL`, `IMGURL`, `MANUFACTURER`,
//!   `CATEGORYTEXT`, `EAN` — plain text children. Any of them may be
//!   missing on individual items; missing means empty string, never an
//!   error.
//! - `IMGURL_ALTERNATIVE` — zero or more additional image URLs.
//! - `PRICE_VAT` — VAT-inclusive price as a Czech-formatted decimal
//!   string, e.g. `"12 990,00"`. Thousands separators are ASCII spaces or
//!   non-breaking spaces; the decimal separator is a comma.
//! - `PARAM` — repeated sub-records, each with a `PARAM_NAME` and a `VAL`
//!   child. Names are Czech marketing labels ("Typ procesoru",
//!   "Model grafické karty", …); pairs with an empty name or value are
//!   dropped during parsing.
//! - `DELIVERY_DATE` — delivery code. The literal `"0"` means available
//!   for immediate dispatch; the meaning of other codes is the feed
//!   provider's and is deliberately not interpreted here, so anything
//!   else counts as out of stock.

/// One product record from the vendor XML export. Ephemeral — exists only
/// between parsing and assembly, never serialized.
#[derive(Debug, Clone, Default)]
pub struct RawFeedItem {
    pub id: String,
    pub name: String,
    pub url: String,
    pub img: String,
    /// Additional image URLs from `IMGURL_ALTERNATIVE` elements, in feed
    /// order.
    pub alt_imgs: Vec<String>,
    /// Raw Czech-formatted price string, e.g. `"12 990,00"`.
    pub price_vat: String,
    pub manufacturer: String,
    /// Raw pipe-delimited category path, e.g.
    /// `"Heureka.cz | Počítače a notebooky | Stolní počítače"`.
    pub category_text: String,
    /// Vendor parameter pairs in feed order. Duplicate names keep the
    /// last value on lookup, matching the flat-dict behavior downstream
    /// consumers rely on.
    pub params: Vec<(String, String)>,
    pub ean: String,
    /// Delivery code; `"0"` means in stock.
    pub delivery_date: String,
}

impl RawFeedItem {
    /// Looks up a vendor parameter by exact name. Later duplicates win.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
