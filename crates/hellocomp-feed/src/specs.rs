//! Projection of vendor parameters into the canonical [`SpecMap`].
//!
//! This is a pure projection, not a parser: values pass through trimmed
//! but otherwise untouched, unknown vendor parameter names never leak into
//! the output, and empty values count as absent.

use hellocomp_core::SpecMap;

/// Maps the vendor's Czech parameter names onto [`SpecMap`] fields.
///
/// The 17-entry table is fixed; duplicated parameter names keep the last
/// value, matching flat-dict semantics of downstream consumers.
#[must_use]
pub fn extract_specs(params: &[(String, String)]) -> SpecMap {
    let mut specs = SpecMap::default();
    for (name, val) in params {
        let val = val.trim();
        if val.is_empty() {
            continue;
        }
        let slot = match name.as_str() {
            "Typ procesoru" => &mut specs.cpu,
            "Frekvence procesoru" => &mut specs.cpu_freq,
            "Počet jader procesoru" => &mut specs.cpu_cores,
            "Velikost operační paměti" => &mut specs.ram,
            "Model grafické karty" => &mut specs.gpu,
            "Značka grafického čipu" => &mut specs.gpu_brand,
            "Velikost grafické paměti" => &mut specs.vram,
            "Velikost pevného disku" => &mut specs.storage,
            "Operační systém (OS)" => &mut specs.os,
            "Druh grafické karty" => &mut specs.gpu_type,
            "Dle použití" => &mut specs.usage,
            "Typ PC" => &mut specs.pc_type,
            "Skříň" => &mut specs.chassis,
            "Barva" => &mut specs.color,
            "Socket" => &mut specs.socket,
            "Kapacita" => &mut specs.capacity,
            "Výkon" => &mut specs.power,
            _ => continue,
        };
        *slot = Some(val.to_string());
    }
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(n, v)| ((*n).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn maps_known_names_to_canonical_keys() {
        let specs = extract_specs(&pairs(&[
            ("Typ procesoru", "AMD Ryzen 5 7500F"),
            ("Model grafické karty", "NVIDIA GeForce RTX 5070"),
            ("Velikost operační paměti", "32 GB"),
            ("Operační systém (OS)", "Windows 11 Home"),
        ]));
        assert_eq!(specs.cpu.as_deref(), Some("AMD Ryzen 5 7500F"));
        assert_eq!(specs.gpu.as_deref(), Some("NVIDIA GeForce RTX 5070"));
        assert_eq!(specs.ram.as_deref(), Some("32 GB"));
        assert_eq!(specs.os.as_deref(), Some("Windows 11 Home"));
        assert!(specs.storage.is_none());
    }

    #[test]
    fn unknown_names_are_ignored() {
        let specs = extract_specs(&pairs(&[
            ("Záruka", "3 roky"),
            ("Hmotnost", "12 kg"),
        ]));
        assert!(specs.is_empty());
    }

    #[test]
    fn empty_values_stay_absent() {
        let specs = extract_specs(&pairs(&[("Barva", "   ")]));
        assert!(specs.color.is_none());
        assert!(specs.is_empty());
    }

    #[test]
    fn values_are_trimmed() {
        let specs = extract_specs(&pairs(&[("Skříň", "  Midi Tower  ")]));
        assert_eq!(specs.chassis.as_deref(), Some("Midi Tower"));
    }

    #[test]
    fn duplicate_names_keep_last_value() {
        let specs = extract_specs(&pairs(&[("Barva", "černá"), ("Barva", "bílá")]));
        assert_eq!(specs.color.as_deref(), Some("bílá"));
    }

    #[test]
    fn full_table_round_trip() {
        let specs = extract_specs(&pairs(&[
            ("Typ procesoru", "Intel Core i5-14400F"),
            ("Frekvence procesoru", "2,5 GHz"),
            ("Počet jader procesoru", "10"),
            ("Velikost operační paměti", "32 GB"),
            ("Model grafické karty", "RTX 5070"),
            ("Značka grafického čipu", "NVIDIA"),
            ("Velikost grafické paměti", "12 GB"),
            ("Velikost pevného disku", "1 TB"),
            ("Operační systém (OS)", "Windows 11"),
            ("Druh grafické karty", "dedikovaná"),
            ("Dle použití", "herní"),
            ("Typ PC", "Herní PC"),
            ("Skříň", "Midi Tower"),
            ("Barva", "černá"),
            ("Socket", "AM5"),
            ("Kapacita", "650 Wh"),
            ("Výkon", "650 W"),
        ]));
        assert_eq!(specs.cpu_freq.as_deref(), Some("2,5 GHz"));
        assert_eq!(specs.cpu_cores.as_deref(), Some("10"));
        assert_eq!(specs.gpu_brand.as_deref(), Some("NVIDIA"));
        assert_eq!(specs.vram.as_deref(), Some("12 GB"));
        assert_eq!(specs.gpu_type.as_deref(), Some("dedikovaná"));
        assert_eq!(specs.usage.as_deref(), Some("herní"));
        assert_eq!(specs.pc_type.as_deref(), Some("Herní PC"));
        assert_eq!(specs.socket.as_deref(), Some("AM5"));
        assert_eq!(specs.capacity.as_deref(), Some("650 Wh"));
        assert_eq!(specs.power.as_deref(), Some("650 W"));
    }
}
