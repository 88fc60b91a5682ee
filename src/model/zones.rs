/// FEMA flood zone designations and their plain-language meaning.
///
/// Keys are the designations as FEMA groups them; several carry more than
/// one code ("C, X") or a numbered range ("A1-A30").

const FLOOD_ZONE_EXPLANATIONS: [(&str, &str); 11] = [
    ("A", "An area with a 1% annual chance of flood; does not have base flood elevations (BFEs) available."),
    ("AE", "An area with a 1% annual chance of flood; base flood elevations BFEs are available."),
    ("AH", "An area with a 1% annual chance of flood with flood depths ranging from 1 to 3 feet, generally near pond or pooling areas. BFEs are available."),
    ("AO", "An area with a 1% annual chance of flood with flood depths ranging from 1 to 3 feet, generally sheet flow on sloping terrain. BFEs are available."),
    ("AR", "An area inundated by flooding, for which BFEs or average depths have been determined. This is an area that was previously, and will again, be protected from the 1% annual chance flood by a Federal flood protection system whose restoration is Federally funded and underway."),
    ("A1-A30", "An area with a 1% annual chance flooding, for which BFEs have been determined."),
    ("B, X500", "An area with at least a 0.2% chance of annual flood or with a 1% annual chance of flood with average depths less than one foot or with drainage area less than one square mile. (C is the older designation and X500 is the current designation.)"),
    ("C, X", "An area outside the 0.2% and 1% annual chance of flood regions. (C is the older designation and X500 is the current designation.)"),
    ("D", "An area where flooding is possible but has not been studied."),
    ("V", "An area with a 1% annual chance flooding with velocity hazard due to waves; BFEs have are not available."),
    ("VE, V1-V30", "An area with a 1% annual chance flooding with velocity hazard due to waves; BFEs have are available."),
];

/// All designations with their explanation, in table order.
pub fn flood_zone_explanations() -> impl Iterator<Item = (&'static str, &'static str)> {
    FLOOD_ZONE_EXPLANATIONS.iter().copied()
}

/// Explanation for a zone code such as `"AE"`, `"X500"`, `"A12"` or a full
/// table key such as `"C, X"`. Case-insensitive.
pub fn flood_zone_explanation(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_uppercase();
    if code.is_empty() {
        return None;
    }

    FLOOD_ZONE_EXPLANATIONS
        .iter()
        .find(|(key, _)| {
            *key == code || key.split(", ").any(|part| designation_matches(part, &code))
        })
        .map(|(_, explanation)| *explanation)
}

/// Matches a single designation, expanding numbered ranges like `A1-A30`.
fn designation_matches(designation: &str, code: &str) -> bool {
    if designation == code {
        return true;
    }
    let Some((low, high)) = designation.split_once('-') else {
        return false;
    };
    let prefix: String = low.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    let (Some(low), Some(high), Some(n)) = (
        low.strip_prefix(&prefix).and_then(|n| n.parse::<u32>().ok()),
        high.strip_prefix(&prefix).and_then(|n| n.parse::<u32>().ok()),
        code.strip_prefix(&prefix).and_then(|n| n.parse::<u32>().ok()),
    ) else {
        return false;
    };
    (low..=high).contains(&n)
}
