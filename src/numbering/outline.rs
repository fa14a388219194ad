//! Numbering plain-text outlines
//!
//! An outline is text where each non-blank line is an item and its nesting
//! level comes from leading indentation: a tab, or `indent_width` spaces,
//! is one unit, and level = units + 1.
//!
//! ```text
//! Introduction          →  A. Introduction
//!     Scope             →      1. Scope
//!     Terms             →      2. Terms
//! Design                →  B. Design
//! ```

use super::error::Result;
use super::sequencer::Sequencer;
use serde::Serialize;

/// One line of a numbered outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineItem {
    /// Nesting level, starting at 1
    pub level: usize,
    /// Label produced by the sequencer
    pub label: String,
    /// Line text with indentation stripped
    pub text: String,
}

impl OutlineItem {
    /// Label and text separated by a space
    pub fn render(&self) -> String {
        format!("{} {}", self.label, self.text)
    }
}

/// A line of input: either an item or a blank line kept for layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineLine {
    Item(OutlineItem),
    Blank,
}

/// Nesting level of a line from its leading whitespace
pub fn line_level(line: &str, indent_width: usize) -> usize {
    let width = indent_width.max(1);
    let mut tabs = 0;
    let mut spaces = 0;
    for c in line.chars() {
        match c {
            '\t' => tabs += 1,
            ' ' => spaces += 1,
            _ => break,
        }
    }
    tabs + spaces / width + 1
}

/// Number every non-blank line of `source`
///
/// In strict mode (per the sequencer's options) a line nested deeper than the
/// styled levels is an error; otherwise it is numbered in decimal.
pub fn number_outline(
    source: &str,
    sequencer: &mut Sequencer,
    indent_width: usize,
) -> Result<Vec<OutlineLine>> {
    let strict = sequencer.options().strict;
    let mut lines = Vec::new();

    for line in source.lines() {
        let text = line.trim();
        if text.is_empty() {
            lines.push(OutlineLine::Blank);
            continue;
        }

        let level = line_level(line, indent_width);
        let label = if strict {
            sequencer.try_new_item(level)?
        } else {
            sequencer.new_item(level)
        };
        lines.push(OutlineLine::Item(OutlineItem {
            level,
            label,
            text: text.to_string(),
        }));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::error::NumberingError;
    use crate::numbering::options::NumberingOptions;

    #[test]
    fn test_line_level() {
        assert_eq!(line_level("Top", 4), 1);
        assert_eq!(line_level("    Child", 4), 2);
        assert_eq!(line_level("\t\tGrandchild", 4), 3);
        assert_eq!(line_level("  Two spaces", 2), 2);
        assert_eq!(line_level("   Three spaces", 4), 1);
        assert_eq!(line_level("  x", 0), 3);
    }

    #[test]
    fn test_number_outline() {
        let source = "Introduction\n    Scope\n    Terms\n\nDesign\n";
        let mut seq = Sequencer::new(NumberingOptions::outline().without_indentation());
        let lines = number_outline(source, &mut seq, 4).unwrap();

        let rendered: Vec<String> = lines
            .iter()
            .map(|line| match line {
                OutlineLine::Item(item) => item.render(),
                OutlineLine::Blank => String::new(),
            })
            .collect();
        assert_eq!(
            rendered,
            vec!["A. Introduction", "1. Scope", "2. Terms", "", "B. Design"]
        );
    }

    #[test]
    fn test_strict_outline_rejects_deep_lines() {
        let source = "a\n\t\t\t\t\tf\n";
        let mut seq = Sequencer::new(NumberingOptions::default().with_strict(true));
        assert_eq!(
            number_outline(source, &mut seq, 4),
            Err(NumberingError::InvalidLevel { level: 6, max: 5 })
        );
    }
}
