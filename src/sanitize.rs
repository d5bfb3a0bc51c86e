//! Map video titles to filesystem-safe file names.

const FORBIDDEN: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Replace whitespace with `_`, then drop characters that are illegal in file names.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| !FORBIDDEN.contains(c))
        .collect()
}

pub fn output_filename(title: &str, only_audio: bool) -> String {
    let ext = if only_audio { "mp3" } else { "mp4" };
    format!("{}.{ext}", sanitize_filename(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: &[&str] = &[
        "",
        "Me at the zoo",
        "My Video: Part 1",
        "a\tb\nc\r\nd",
        "what?!? <live> | \"official\"",
        r"C:\Users\me\clip*.mp4",
        "already_clean-name",
        "  leading and trailing  ",
        "unicode\u{00a0}space and 日本語 タイトル",
        "//::**??",
    ];

    #[test]
    fn title_with_colon() {
        assert_eq!(sanitize_filename("My Video: Part 1"), "My_Video_Part_1");
    }

    #[test]
    fn output_has_no_forbidden_or_whitespace() {
        for title in TITLES {
            let name = sanitize_filename(title);
            assert!(
                !name.chars().any(|c| c.is_whitespace() || FORBIDDEN.contains(&c)),
                "{title:?} sanitized to {name:?}"
            );
        }
    }

    #[test]
    fn idempotent() {
        for title in TITLES {
            let once = sanitize_filename(title);
            assert_eq!(sanitize_filename(&once), once, "title: {title:?}");
        }
    }

    #[test]
    fn only_forbidden_chars_yields_empty() {
        assert_eq!(sanitize_filename("//::**??"), "");
    }

    #[test]
    fn extension_follows_audio_flag() {
        assert_eq!(output_filename("Me at the zoo", false), "Me_at_the_zoo.mp4");
        assert_eq!(output_filename("Me at the zoo", true), "Me_at_the_zoo.mp3");
    }
}
