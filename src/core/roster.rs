//! Reconciliation of subject folder names with grade-report identifiers.
//!
//! The corpus folders are named `S1`, `S2`, ..., `S10` while the grade
//! report writes `S01`, `S02`, ..., `S10`. The canonical form is the
//! report's: `S` plus a zero-padded two-digit number.

/// Known corpus folders mapped to their canonical subject ids.
///
/// Consulted before the general rule. The two always agree for these
/// inputs, but the table is not assumed to be exhaustive.
const FOLDER_ALIASES: &[(&str, &str)] = &[
    ("S1", "S01"),
    ("S2", "S02"),
    ("S3", "S03"),
    ("S4", "S04"),
    ("S5", "S05"),
    ("S6", "S06"),
    ("S7", "S07"),
    ("S8", "S08"),
    ("S9", "S09"),
    ("S10", "S10"),
];

/// Map a corpus folder name to the canonical subject id, preferring the
/// fixed alias table and falling back to [`canonicalize`].
pub fn subject_id(folder_name: &str) -> String {
    for (alias, id) in FOLDER_ALIASES {
        if *alias == folder_name {
            return (*id).to_string();
        }
    }
    canonicalize(folder_name)
}

/// General reconciliation rule.
///
/// A name that starts with `S` (either case) followed entirely by digits
/// is re-rendered as `S` plus the number, zero-padded to two digits when
/// below 10. Anything else is returned unchanged; the caller decides
/// whether such a name is already canonical or should be skipped.
pub fn canonicalize(folder_name: &str) -> String {
    let mut chars = folder_name.chars();
    if let Some('S') | Some('s') = chars.next() {
        let digits = chars.as_str();
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(num) = digits.parse::<u32>() {
                if num < 10 {
                    return format!("S0{num}");
                }
                return format!("S{num}");
            }
        }
    }
    folder_name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_pads_single_digits() {
        assert_eq!(canonicalize("S7"), "S07");
        assert_eq!(canonicalize("S1"), "S01");
        assert_eq!(canonicalize("S9"), "S09");
    }

    #[test]
    fn test_canonicalize_keeps_two_digit_numbers() {
        assert_eq!(canonicalize("S12"), "S12");
        assert_eq!(canonicalize("S10"), "S10");
    }

    #[test]
    fn test_canonicalize_strips_leading_zeros() {
        assert_eq!(canonicalize("S007"), "S07");
        assert_eq!(canonicalize("S012"), "S12");
    }

    #[test]
    fn test_canonicalize_is_case_insensitive_on_the_prefix() {
        assert_eq!(canonicalize("s3"), "S03");
    }

    #[test]
    fn test_unrecognized_shapes_pass_through() {
        assert_eq!(canonicalize("Team4"), "Team4");
        assert_eq!(canonicalize("S"), "S");
        assert_eq!(canonicalize("S4b"), "S4b");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for name in ["S7", "S12", "Team4", "S007"] {
            let once = canonicalize(name);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_alias_table_agrees_with_the_rule() {
        for (alias, id) in super::FOLDER_ALIASES {
            assert_eq!(subject_id(alias), *id);
            assert_eq!(canonicalize(alias), *id);
        }
    }

    #[test]
    fn test_subject_id_falls_back_to_the_rule() {
        assert_eq!(subject_id("S11"), "S11");
        assert_eq!(subject_id("Team4"), "Team4");
    }
}
