use unicode_normalization::UnicodeNormalization;

/// Produce the lookup key for a term or query: trim, NFKC, case fold.
///
/// Load, add, and search all key through this one function, so an entry
/// saved as "Куче" is found by "куче" and full-width input keys the same
/// as its ASCII form.
pub fn normalize(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    text.nfkc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize("  Kuce "), "kuce");
    }

    #[test]
    fn folds_cyrillic_case() {
        assert_eq!(normalize("Куче"), "куче");
        assert_eq!(normalize("МАЧКА"), "мачка");
    }

    #[test]
    fn applies_nfkc() {
        // Full-width latin compatibility forms collapse to ASCII.
        assert_eq!(normalize("ｄｏｇ"), "dog");
    }

    #[test]
    fn empty_after_trim_stays_empty() {
        assert_eq!(normalize("   "), "");
    }
}
