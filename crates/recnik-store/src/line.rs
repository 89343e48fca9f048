use recnik_types::Entry;

/// Parse one stored line into an entry.
///
/// The first colon is the delimiter; text after it belongs to the
/// translation even if it contains more colons. Blank lines and lines
/// without a colon yield `None` and are skipped by the loader.
pub(crate) fn parse_line(line: &str) -> Option<Entry> {
    if line.trim().is_empty() {
        return None;
    }

    let (term, translation) = line.split_once(':')?;
    Some(Entry::new(term.trim(), translation.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon() {
        let entry = parse_line("pas:dog").unwrap();
        assert_eq!(entry, Entry::new("pas", "dog"));

        let entry = parse_line("vreme: time: weather").unwrap();
        assert_eq!(entry.term, "vreme");
        assert_eq!(entry.translation, "time: weather");
    }

    #[test]
    fn trims_both_sides() {
        let entry = parse_line("  мачка :  cat ").unwrap();
        assert_eq!(entry, Entry::new("мачка", "cat"));
    }

    #[test]
    fn skips_blank_and_delimiterless_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("invalidline"), None);
    }
}
