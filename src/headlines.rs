use serde::Serialize;

/// Bodies longer than this scroll instead of fitting on the ticker
pub const MAX_STATIC_BODY_CHARS: usize = 100;

/// One entry of the headline ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub title: String,
    pub body: String,
}

impl Headline {
    pub fn needs_scroll(&self) -> bool {
        self.body.chars().count() > MAX_STATIC_BODY_CHARS
    }
}

/// Parse the operator's headline text: one headline per line, `title | body`.
///
/// Blank lines are skipped. Anything after a second `|` is dropped.
pub fn parse_headlines(text: &str) -> Vec<Headline> {
    text.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut parts = line.split('|').map(str::trim);
            Headline {
                title: parts.next().unwrap_or_default().to_string(),
                body: parts.next().unwrap_or_default().to_string(),
            }
        })
        .collect()
}

/// Index of the headline shown after `current`, wrapping around
pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headline() {
        let headlines = parse_headlines("Broadcast News | You're watching season 12 XBL baseball!");
        assert_eq!(
            headlines,
            vec![Headline {
                title: "Broadcast News".into(),
                body: "You're watching season 12 XBL baseball!".into(),
            }]
        );
    }

    #[test]
    fn test_blank_lines_collapse() {
        let headlines = parse_headlines("\n A | one \n\n\nB|two\n");
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[1].title, "B");
        assert_eq!(headlines[1].body, "two");
    }

    #[test]
    fn test_line_without_separator_has_empty_body() {
        let headlines = parse_headlines("Just a title");
        assert_eq!(headlines[0].title, "Just a title");
        assert_eq!(headlines[0].body, "");
    }

    #[test]
    fn test_extra_separators_are_dropped() {
        let headlines = parse_headlines("a | b | c");
        assert_eq!(headlines[0].body, "b");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_headlines("").is_empty());
        assert!(parse_headlines("  \n\n ").is_empty());
    }

    #[test]
    fn test_needs_scroll() {
        let short = Headline { title: "t".into(), body: "x".repeat(100) };
        let long = Headline { title: "t".into(), body: "x".repeat(101) };
        assert!(!short.needs_scroll());
        assert!(long.needs_scroll());
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(5, 0), 0);
    }
}
