//! # Tag Text Processing
//!
//! Turns the raw genre/discipline descriptor of a record into the lines and
//! styled words drawn on a label.
//!
//! ```text
//! raw text ──► sanitize ──► wrap ──► classify each line
//!              (denylist)   (≤ 2)    (#word = emphasized)
//! ```

mod sanitize;
mod wrap;

pub use sanitize::{is_denied, sanitize};
pub use wrap::wrap;

/// How a word is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStyle {
    /// Default color and weight
    Plain,
    /// Word starting with `#`: emphasis color, bold face
    Emphasized,
}

/// A whitespace-delimited word of a tag line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub style: WordStyle,
}

impl Word {
    pub fn new(text: &str) -> Self {
        let style = if text.starts_with('#') {
            WordStyle::Emphasized
        } else {
            WordStyle::Plain
        };
        Self {
            text: text.to_string(),
            style,
        }
    }

    #[inline]
    pub fn is_emphasized(&self) -> bool {
        self.style == WordStyle::Emphasized
    }
}

/// Split a line on whitespace and classify each word.
pub fn classify(line: &str) -> Vec<Word> {
    line.split_whitespace().map(Word::new).collect()
}

/// Sanitize, wrap and classify tag text in one pass.
pub fn layout_lines(tag_text: &str, chars_per_line: usize, max_lines: usize) -> Vec<Vec<Word>> {
    wrap(&sanitize(tag_text), chars_per_line, max_lines)
        .iter()
        .map(|line| classify(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hash_words_are_emphasized() {
        let words = classify("#rock fusion #jazz");
        let styles: Vec<_> = words.iter().map(|w| w.style).collect();
        assert_eq!(
            styles,
            vec![WordStyle::Emphasized, WordStyle::Plain, WordStyle::Emphasized]
        );
    }

    #[test]
    fn test_inner_hash_is_plain() {
        assert_eq!(Word::new("c#").style, WordStyle::Plain);
        assert_eq!(Word::new("#").style, WordStyle::Emphasized);
    }

    #[test]
    fn test_classify_collapses_whitespace() {
        let words = classify("  #dj \t house  ");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "#dj");
        assert_eq!(words[1].text, "house");
    }

    #[test]
    fn test_emphasis_holds_on_every_line() {
        let tag = (0..30)
            .map(|i| if i % 2 == 0 { format!("#t{:02}", i) } else { format!("p{:03}", i) })
            .collect::<Vec<_>>()
            .join(" ");
        let lines = layout_lines(&tag, 80, 2);
        assert_eq!(lines.len(), 2);
        for word in lines.iter().flatten() {
            assert_eq!(word.is_emphasized(), word.text.starts_with('#'));
        }
    }

    #[test]
    fn test_layout_lines_strips_emoji_before_wrapping() {
        let lines = layout_lines("#música 🎶 #danza", 80, 2);
        assert_eq!(lines.len(), 1);
        let texts: Vec<_> = lines[0].iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["#música", "#danza"]);
    }
}
