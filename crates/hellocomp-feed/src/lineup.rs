//! Marketing lineup detection from the product display name.
//!
//! HelloComp encodes its GAMER sub-brands in display names
//! ("HelloComp GAMER Pro RTX 5070"). The substring rules run in strict
//! precedence — Max before Pro before SE — because the broader patterns
//! would otherwise swallow the narrower ones.

/// Returns the lineup label: `"Max"`, `"Pro"`, `"SE"`, or `""` for items
/// outside the lineup (peripherals, vouchers, …).
///
/// `pc_type_param` is the value of the vendor's "Typ PC" parameter, used
/// as a fallback when the name carries no lineup token: a gaming-type PC
/// without an explicit tier is an SE.
#[must_use]
pub fn detect_lineup(name: &str, pc_type_param: Option<&str>) -> &'static str {
    let n = name.to_lowercase();
    if n.contains("gamer max") || n.contains(" max ") {
        return "Max";
    }
    if n.contains("gamer pro") || n.contains(" pro ") {
        return "Pro";
    }
    if n.contains("gamer se") || n.contains("gamer ") {
        return "SE";
    }

    if let Some(typ) = pc_type_param {
        let typ = typ.to_lowercase();
        if typ.contains("herní") || typ.contains("gaming") {
            return "SE";
        }
    }
    ""
}
