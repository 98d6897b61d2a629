/// Canonical key space for every lookup table and cache key.
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, strip diacritical marks (NFKD, drop combining marks) and trim.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    // Compatibility decomposition can surface uppercase base letters.
    folded.to_lowercase().trim().to_string()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_diacritics_and_case() {
        assert_eq!(normalize("Ávila"), "avila");
        assert_eq!(normalize("Ávila"), normalize("avila"));
        assert_eq!(normalize("  Jazmín "), "jazmin");
        assert_eq!(normalize("NÚÑEZ"), "nunez");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(normalize(" La Verna "), "la verna");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n"), "");
    }

    #[test]
    fn compatibility_forms_fold() {
        assert_eq!(normalize("ﬁlomena"), "filomena");
        assert_eq!(normalize("Ⅳ"), "iv");
    }

    #[test]
    fn capitalize_and_lower_first() {
        assert_eq!(capitalize("sofía"), "Sofía");
        assert_eq!(capitalize(""), "");
        assert_eq!(lower_first("Grace, compassion"), "grace, compassion");
        assert_eq!(lower_first(""), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "[a-zA-ZáéíóúüñÁÉÍÓÚÜÑçÇàèòÀÈÒ \\-]{0,32}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_ignores_case(s in "[a-zA-ZáéíóúñÁÉÍÓÚÑ]{0,16}") {
            prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
        }
    }
}
