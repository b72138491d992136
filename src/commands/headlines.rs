use anyhow::Result;

use crate::headlines::{parse_headlines, Headline};

pub fn format_headlines(headlines: &[Headline]) -> String {
    if headlines.is_empty() {
        return "No headlines\n".to_string();
    }

    let mut output = String::new();
    for headline in headlines {
        output.push_str(&format!("[{}] {}", headline.title, headline.body));
        if headline.needs_scroll() {
            output.push_str("  (scrolls)");
        }
        output.push('\n');
    }
    output
}

pub fn run(text: &str) -> Result<()> {
    print!("{}", format_headlines(&parse_headlines(text)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_headlines() {
        let headlines = parse_headlines("Trade | Kmart to the Otters\nScores");
        assert_eq!(format_headlines(&headlines), "[Trade] Kmart to the Otters\n[Scores] \n");
    }

    #[test]
    fn test_long_body_is_flagged() {
        let text = format!("News | {}", "x".repeat(120));
        assert!(format_headlines(&parse_headlines(&text)).contains("(scrolls)"));
        assert_eq!(format_headlines(&[]), "No headlines\n");
    }
}
