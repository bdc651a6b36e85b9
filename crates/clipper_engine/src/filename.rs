const MAX_FILENAME_LEN: usize = 200;

/// Filesystem-safe note name (without extension).
///
/// Forbidden characters become `_`, runs of `_` collapse, reserved Windows
/// device names get a trailing `_`, and the result is capped in length.
pub fn sanitize_filename(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();

    // Collapse multiple underscores
    let mut compacted = String::with_capacity(cleaned.len());
    let mut prev_underscore = false;
    for c in cleaned.chars() {
        if c == '_' {
            if !prev_underscore {
                compacted.push(c);
            }
            prev_underscore = true;
        } else {
            compacted.push(c);
            prev_underscore = false;
        }
    }

    let mut final_name = compacted.trim_matches(&['_', ' ', '.'][..]).to_string();
    if final_name.is_empty() {
        final_name = "untitled".to_string();
    }
    if final_name.len() > MAX_FILENAME_LEN {
        let mut end = MAX_FILENAME_LEN;
        while !final_name.is_char_boundary(end) {
            end -= 1;
        }
        final_name.truncate(end);
        final_name = final_name.trim_end().to_string();
    }
    if is_reserved_windows_name(&final_name) {
        final_name.push('_');
    }
    final_name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '#' | '^' | '[' | ']' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::sanitize_filename;

    #[test]
    fn replaces_forbidden_characters() {
        assert_eq!(sanitize_filename("My: Title?/Bad"), "My_ Title_Bad");
        assert_eq!(sanitize_filename("[[link]] #tag"), "link_ _tag");
    }

    #[test]
    fn empty_and_reserved_names() {
        assert_eq!(sanitize_filename("  ..  "), "untitled");
        assert_eq!(sanitize_filename("con"), "con_");
    }

    #[test]
    fn long_names_are_cut_on_char_boundary() {
        let name = sanitize_filename(&"é".repeat(150));
        assert!(name.len() <= 200);
        assert!(name.chars().all(|c| c == 'é'));
    }
}
