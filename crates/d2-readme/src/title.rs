//! Title formatting for file and directory names.
//!
//! Names such as `01-high-level` become display titles such as
//! `High Level`. The same rules apply to diagram headings, directory
//! headings, navigation labels, and image alternate text.

/// Characters treated as word separators in names.
const SEPARATORS: [char; 2] = ['-', '_'];

/// Splits a two-digit ordering prefix from `base`.
///
/// Returns `Some((prefix, rest))` when `base` starts with two ASCII digits
/// followed by `-`, and `None` otherwise.
///
/// # Examples
///
/// ```
/// # use d2_readme::title::split_numeric_prefix;
/// assert_eq!(split_numeric_prefix("01-overview"), Some(("01", "overview")));
/// assert_eq!(split_numeric_prefix("1-overview"), None);
/// assert_eq!(split_numeric_prefix("overview"), None);
/// ```
pub fn split_numeric_prefix(base: &str) -> Option<(&str, &str)> {
    let bytes = base.as_bytes();
    if bytes.len() >= 3
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'-'
    {
        Some((&base[..2], &base[3..]))
    } else {
        None
    }
}

/// Returns `true` if `base` carries a two-digit ordering prefix.
pub fn has_numeric_prefix(base: &str) -> bool {
    split_numeric_prefix(base).is_some()
}

/// Formats a file or directory base name as a display title.
///
/// The numeric prefix is stripped, separator runs become single spaces, and
/// every word is capitalized.
///
/// # Examples
///
/// ```
/// # use d2_readme::title::format_title;
/// assert_eq!(format_title("01-high-level"), "High Level");
/// assert_eq!(format_title("data_flow"), "Data Flow");
/// assert_eq!(format_title("API--gateway"), "Api Gateway");
/// ```
pub fn format_title(base: &str) -> String {
    let rest = split_numeric_prefix(base).map_or(base, |(_, rest)| rest);

    rest.split(SEPARATORS)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_split_numeric_prefix() {
        assert_eq!(split_numeric_prefix("01-a"), Some(("01", "a")));
        assert_eq!(split_numeric_prefix("99-"), Some(("99", "")));
        assert_eq!(split_numeric_prefix("001-a"), None);
        assert_eq!(split_numeric_prefix("01_a"), None);
        assert_eq!(split_numeric_prefix("0a-b"), None);
        assert_eq!(split_numeric_prefix("01"), None);
        assert_eq!(split_numeric_prefix(""), None);
    }

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("overview"), "Overview");
        assert_eq!(format_title("01-overview"), "Overview");
        assert_eq!(format_title("02-request-flow"), "Request Flow");
        assert_eq!(format_title("system-CONTEXT"), "System Context");
        assert_eq!(format_title("-leading-"), "Leading");
        assert_eq!(format_title(""), "");
    }

    #[test]
    fn test_non_prefixed_digits_are_kept() {
        assert_eq!(format_title("2024-roadmap"), "2024 Roadmap");
        assert_eq!(format_title("1-step"), "1 Step");
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(format_title("évolution-système"), "Évolution Système");
    }

    proptest! {
        #[test]
        fn prop_prefix_and_separator_runs_are_ignored(
            prefix in 0u8..100,
            words in prop::collection::vec("[a-z]{1,8}", 1..5),
            runs in prop::collection::vec(1usize..4, 5),
        ) {
            let single = words.join("-");
            let mut repeated = String::new();
            for (i, word) in words.iter().enumerate() {
                if i > 0 {
                    repeated.push_str(&"-".repeat(runs[i]));
                }
                repeated.push_str(word);
            }

            let expected = format_title(&single);
            prop_assert_eq!(format_title(&format!("{prefix:02}-{single}")), expected.clone());
            prop_assert_eq!(format_title(&format!("{prefix:02}-{repeated}")), expected.clone());
            prop_assert_eq!(format_title(&format!("{prefix:02}--{repeated}")), expected);
        }

        #[test]
        fn prop_words_are_capitalized(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
            let title = format_title(&words.join("_"));
            for (word, formatted) in words.iter().zip(title.split(' ')) {
                prop_assert_eq!(formatted.len(), word.len());
                prop_assert!(formatted.starts_with(|c: char| c.is_ascii_uppercase()));
            }
        }
    }
}
