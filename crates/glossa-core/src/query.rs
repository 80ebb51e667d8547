//! Pure query functions over dictionary entries: type-code expansion,
//! palindrome and rhyme predicates, and definition tokenization.

use crate::entry::Entry;

/// Sentinel label returned by [`expand_type`] for unrecognized codes.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Expand a short type code to its display label.
///
/// The mapping is total and case-sensitive on the code as given; anything
/// but `n`, `v`, or `adj` yields [`UNKNOWN_TYPE`].
pub fn expand_type(code: &str) -> &'static str {
    match code {
        "n" => "Noun",
        "v" => "Verb",
        "adj" => "Adjective",
        _ => UNKNOWN_TYPE,
    }
}

/// Whether a word reads the same forwards and backwards, ignoring ASCII
/// case. Empty and single-character strings are trivially palindromes.
pub fn is_palindrome(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    if bytes.is_empty() {
        return true;
    }
    let mut i = 0;
    let mut j = bytes.len() - 1;
    while i < j {
        if bytes[i] != bytes[j] {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}

/// Palindromic entries whose name starts in the inclusive three-letter
/// window `[start_letter, start_letter + 2]`, compared uppercased.
///
/// Results keep the store's insertion order; no alphabetical sort. A
/// start letter outside A-Z matches nothing.
pub fn palindromes_in_range(entries: &[Entry], start_letter: char) -> Vec<&Entry> {
    if !start_letter.is_ascii_alphabetic() {
        return Vec::new();
    }
    let start = start_letter.to_ascii_uppercase();
    let end = (start as u8).saturating_add(2) as char;
    entries
        .iter()
        .filter(|entry| {
            let in_window = entry
                .name()
                .chars()
                .next()
                .is_some_and(|first| (start..=end).contains(&first.to_ascii_uppercase()));
            in_window && is_palindrome(entry.name())
        })
        .collect()
}

/// Entries whose name shares the exact last-three-character suffix of
/// `word`, compared case-sensitively as stored.
///
/// Returns nothing for inputs shorter than three characters. A word rhymes
/// with itself if it is present in the store.
pub fn find_rhymes<'a>(entries: &'a [Entry], word: &str) -> Vec<&'a Entry> {
    if word.len() < 3 {
        return Vec::new();
    }
    let suffix = &word.as_bytes()[word.len() - 3..];
    entries
        .iter()
        .filter(|entry| entry.name().len() >= 3 && entry.name().as_bytes().ends_with(suffix))
        .collect()
}

/// Split a definition on runs of whitespace, discarding empty tokens.
pub fn tokenize(definition: &str) -> Vec<&str> {
    definition.split_whitespace().collect()
}

/// Number of whitespace-delimited words in a definition.
pub fn word_count(definition: &str) -> usize {
    definition.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_type_maps_known_codes() {
        assert_eq!(expand_type("n"), "Noun");
        assert_eq!(expand_type("v"), "Verb");
        assert_eq!(expand_type("adj"), "Adjective");
        assert_eq!(expand_type("xyz"), "Unknown");
        // The code is matched case-sensitively.
        assert_eq!(expand_type("N"), "Unknown");
    }

    #[test]
    fn palindrome_truth_table() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("RaceCar"));
        assert!(!is_palindrome("hello"));
        assert!(is_palindrome("a"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("deed"));
    }

    fn sample_entries() -> Vec<Entry> {
        vec![
            Entry::new("deed", "n", "an act"),
            Entry::new("apple", "n", "a fruit"),
            Entry::new("eve", "n", "the evening before"),
            Entry::new("cat", "n", "a small domesticated feline"),
            Entry::new("scat", "v", "to go away quickly"),
        ]
    }

    #[test]
    fn palindromes_in_range_filters_by_window_and_predicate() {
        let entries = sample_entries();
        let found = palindromes_in_range(&entries, 'D');
        let names: Vec<&str> = found.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["deed", "eve"]);

        // apple starts in A-C but is not a palindrome.
        assert!(palindromes_in_range(&entries, 'A').is_empty());
        assert!(palindromes_in_range(&entries, 'J').is_empty());
    }

    #[test]
    fn palindromes_in_range_rejects_non_alphabetic_start() {
        let entries = sample_entries();
        assert!(palindromes_in_range(&entries, 'é').is_empty());
        assert!(palindromes_in_range(&entries, '3').is_empty());
        assert!(palindromes_in_range(&entries, ' ').is_empty());
    }

    #[test]
    fn rhymes_match_last_three_characters() {
        let entries = sample_entries();
        let found = find_rhymes(&entries, "cat");
        let names: Vec<&str> = found.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["cat", "scat"]);
    }

    #[test]
    fn rhymes_empty_for_short_input() {
        let entries = sample_entries();
        assert!(find_rhymes(&entries, "at").is_empty());
        assert!(find_rhymes(&entries, "").is_empty());
    }

    #[test]
    fn tokenize_splits_on_whitespace_runs() {
        assert_eq!(
            tokenize("a  small \t domesticated\nfeline"),
            vec!["a", "small", "domesticated", "feline"]
        );
        assert!(tokenize("   ").is_empty());
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count(""), 0);
    }
}
