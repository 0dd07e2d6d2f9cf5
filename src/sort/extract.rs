//! Reading a document into per-character style records.

use crate::error::Result;
use crate::host::StyledText;
use crate::model::StyleAttributes;

/// The line-break unit.
pub const LINE_BREAK: char = '\n';

/// One character of the document with its full style.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// The character itself
    pub character: char,

    /// Style read from the host over `[i, i+1)`
    pub style: StyleAttributes,
}

impl Character {
    /// Create a character record.
    pub fn new(character: char, style: StyleAttributes) -> Self {
        Self { character, style }
    }

    /// Check if this is a line break.
    pub fn is_line_break(&self) -> bool {
        self.character == LINE_BREAK
    }

    /// A line break carrying this character's style.
    pub fn to_line_break(&self) -> Self {
        Self {
            character: LINE_BREAK,
            style: self.style.clone(),
        }
    }
}

/// A line: characters between two line breaks. May be empty.
pub type Line = Vec<Character>;

/// Read every position of `doc`, in order.
pub fn extract_characters<D: StyledText + ?Sized>(doc: &D) -> Result<Vec<Character>> {
    doc.content()
        .chars()
        .enumerate()
        .map(|(i, c)| -> Result<Character> { Ok(Character::new(c, read_style(doc, i)?)) })
        .collect()
}

/// Query all nine attributes of a single position.
pub fn read_style<D: StyledText + ?Sized>(doc: &D, index: usize) -> Result<StyleAttributes> {
    let range = index..index + 1;
    Ok(StyleAttributes {
        font_size: doc.range_font_size(range.clone())?,
        font_name: doc.range_font_name(range.clone())?,
        text_case: doc.range_text_case(range.clone())?,
        text_decoration: doc.range_text_decoration(range.clone())?,
        letter_spacing: doc.range_letter_spacing(range.clone())?,
        line_height: doc.range_line_height(range.clone())?,
        fills: doc.range_fills(range.clone())?,
        text_style_id: doc.range_text_style_id(range.clone())?,
        fill_style_id: doc.range_fill_style_id(range)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attribute, FontName, TextNode};

    #[test]
    fn test_extract_one_record_per_char() {
        let mut node = TextNode::new("1:2");
        node.push_styled("hé", &StyleAttributes::default());
        node.push_styled("\nx", &StyleAttributes::default().with_font_size(20.0));

        let chars = extract_characters(&node).unwrap();
        assert_eq!(chars.len(), 4);
        assert_eq!(chars[1].character, 'é');
        assert!(chars[2].is_line_break());
        assert_eq!(chars[3].style.font_size, Attribute::Concrete(20.0));
    }

    #[test]
    fn test_extract_keeps_indeterminate() {
        let mut node = TextNode::with_text("1:2", "ab");
        node.style_at_mut(0).unwrap().font_name = Attribute::Indeterminate;

        let chars = extract_characters(&node).unwrap();
        assert!(chars[0].style.font_name.is_indeterminate());
        assert_eq!(
            chars[1].style.font_name,
            Attribute::Concrete(FontName::default())
        );
    }

    #[test]
    fn test_extract_empty() {
        let node = TextNode::new("1:2");
        assert!(extract_characters(&node).unwrap().is_empty());
    }

    #[test]
    fn test_line_break_clone() {
        let first = Character::new('z', StyleAttributes::default().with_font_size(9.0));
        let lb = first.to_line_break();
        assert!(lb.is_line_break());
        assert_eq!(lb.style, first.style);
    }
}
