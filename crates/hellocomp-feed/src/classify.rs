//! Category classification from the raw Heureka category path.
//!
//! The vendor's paths are Czech marketing strings with overlapping
//! substrings, so two constraints are load-bearing:
//!
//! - classification looks at the **last** (most specific) path segment
//!   only — the ancestor "Počítače a notebooky" would otherwise classify
//!   every descendant as `notebook`;
//! - the rule list is evaluated in order, first match wins. Narrower
//!   equality rules sit above broad `contains` rules that would subsume
//!   them.

use hellocomp_core::{CategoryInfo, CategorySlug};

/// One classification predicate over the lower-cased last path segment.
enum Match {
    Contains(&'static str),
    ContainsAny(&'static [&'static str]),
    Equals(&'static str),
    EqualsAny(&'static [&'static str]),
}

impl Match {
    fn is_match(&self, segment: &str) -> bool {
        match self {
            Match::Contains(needle) => segment.contains(needle),
            Match::ContainsAny(needles) => needles.iter().any(|n| segment.contains(n)),
            Match::Equals(exact) => segment == *exact,
            Match::EqualsAny(exacts) => exacts.contains(&segment),
        }
    }
}

/// Ordered rule chain. Order is semantically load-bearing; do not sort or
/// dedupe.
static RULES: &[(Match, CategorySlug)] = &[
    (Match::Contains("stolní počítače"), CategorySlug::Pc),
    (Match::Equals("grafické karty"), CategorySlug::Gpu),
    (Match::EqualsAny(&["notebooky", "notebook"]), CategorySlug::Notebook),
    (Match::Equals("procesory"), CategorySlug::Cpu),
    (
        Match::ContainsAny(&["mobilní telefony", "telefon"]),
        CategorySlug::Phone,
    ),
    (Match::Equals("monitory"), CategorySlug::Monitor),
    (Match::Contains("sluchátka"), CategorySlug::Headset),
    (
        Match::EqualsAny(&[
            "klávesnice",
            "myši",
            "podložky pod myš",
            "sety klávesnic a myší",
        ]),
        CategorySlug::Peripheral,
    ),
    (Match::Equals("zdroje"), CategorySlug::Psu),
    (Match::Contains("pc skříně"), CategorySlug::Case),
    (Match::Equals("skříně"), CategorySlug::Case),
    (Match::Contains("chladiče"), CategorySlug::Cooler),
    (Match::Contains("základní desky"), CategorySlug::Mobo),
    (Match::Contains("paměti"), CategorySlug::Ram),
    (
        Match::ContainsAny(&["pevné disky", "ssd"]),
        CategorySlug::Storage,
    ),
    (Match::Contains("tablet"), CategorySlug::Tablet),
    (Match::Contains("dron"), CategorySlug::Drone),
    (
        Match::ContainsAny(&["reprodukt", "soundbar"]),
        CategorySlug::Speaker,
    ),
    (Match::Contains("mikrofon"), CategorySlug::Mic),
    (Match::Contains("hodin"), CategorySlug::Watch),
    (
        Match::ContainsAny(&["dárkové poukazy", "voucher"]),
        CategorySlug::Voucher,
    ),
    (
        Match::ContainsAny(&["paměťové karty", "usb flash"]),
        CategorySlug::Storage,
    ),
    (Match::Contains("grafické tablety"), CategorySlug::Tablet),
];

/// Classifies a raw pipe-delimited category path into a [`CategoryInfo`].
///
/// Total: malformed or empty input yields slug `other` with degenerate
/// `full`/`last` fields, never an error.
#[must_use]
pub fn classify_category(cat_text: &str) -> CategoryInfo {
    let parts: Vec<&str> = if cat_text.is_empty() {
        Vec::new()
    } else {
        cat_text.split('|').map(str::trim).collect()
    };

    let full = if parts.len() > 1 {
        parts[1..].join(" > ")
    } else {
        cat_text.to_string()
    };

    let last = parts.last().map_or_else(|| cat_text.to_string(), |s| (*s).to_string());
    let last_lower = last.to_lowercase();

    let slug = RULES
        .iter()
        .find(|(m, _)| m.is_match(&last_lower))
        .map_or(CategorySlug::Other, |(_, slug)| *slug);

    CategoryInfo { full, slug, last }
}
