/// Words per minute used when the language is unknown.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 228;

// Average silent reading speed per ISO 639-1 code.
const READING_SPEED: &[(&str, u32)] = &[
    ("en", DEFAULT_WORDS_PER_MINUTE),
    ("ar", 138),
    ("de", 179),
    ("es", 218),
    ("fi", 161),
    ("fr", 195),
    ("he", 187),
    ("it", 188),
    ("ja", 193),
    ("nl", 202),
    ("pl", 166),
    ("pt", 181),
    ("ru", 184),
    ("sk", 190),
    ("sl", 180),
    ("sv", 199),
    ("tr", 166),
    ("zh", 158),
];

/// Reading speed for a language tag such as `de` or `pt-BR`.
pub fn words_per_minute(lang: Option<&str>) -> u32 {
    let primary = lang
        .and_then(|tag| tag.trim().split(['-', '_']).next())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    READING_SPEED
        .iter()
        .find(|(code, _)| *code == primary)
        .map(|(_, speed)| *speed)
        .unwrap_or(DEFAULT_WORDS_PER_MINUTE)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, rounded up.
pub fn reading_time_minutes(text: &str, lang: Option<&str>) -> u32 {
    let words = word_count(text) as u32;
    words.div_ceil(words_per_minute(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_uses_english_speed() {
        assert_eq!(words_per_minute(Some("xx")), 228);
        assert_eq!(words_per_minute(None), 228);
        assert_eq!(words_per_minute(Some("")), 228);
    }

    #[test]
    fn region_subtag_is_ignored() {
        assert_eq!(words_per_minute(Some("de-AT")), 179);
        assert_eq!(words_per_minute(Some("ZH_cn")), 158);
    }

    #[test]
    fn three_hundred_words_take_two_minutes() {
        let text = vec!["word"; 300].join(" ");
        assert_eq!(reading_time_minutes(&text, Some("xx")), 2);
    }

    #[test]
    fn whitespace_runs_count_as_one_separator() {
        assert_eq!(word_count("  a \n\t b   c  "), 3);
        assert_eq!(reading_time_minutes("", None), 0);
    }
}
