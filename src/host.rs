//! The host capability the sorter works against.
//!
//! Implement [`StyledText`] to sort documents that live outside this crate.
//! [`TextNode`] is the in-memory implementation.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::model::{
    Attribute, AttributeKind, FontName, LetterSpacing, LineHeight, Paint, StyleId, TextCase,
    TextDecoration, TextNode,
};

/// A text document with per-range style attributes.
///
/// Ranges are half-open `char` index ranges. Getters return
/// [`Attribute::Indeterminate`] when the range does not resolve to a single
/// value; setters always take a concrete value.
pub trait StyledText {
    /// Identifier used when reporting progress.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Number of characters.
    fn len(&self) -> usize;

    /// Check if the document has no characters.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full text content.
    fn content(&self) -> String;

    /// Replace the whole text content.
    fn set_content(&mut self, text: &str) -> Result<()>;

    /// Font size over `range`.
    fn range_font_size(&self, range: Range<usize>) -> Result<Attribute<f32>>;
    /// Font over `range`.
    fn range_font_name(&self, range: Range<usize>) -> Result<Attribute<FontName>>;
    /// Case transform over `range`.
    fn range_text_case(&self, range: Range<usize>) -> Result<Attribute<TextCase>>;
    /// Decoration over `range`.
    fn range_text_decoration(&self, range: Range<usize>) -> Result<Attribute<TextDecoration>>;
    /// Letter spacing over `range`.
    fn range_letter_spacing(&self, range: Range<usize>) -> Result<Attribute<LetterSpacing>>;
    /// Line height over `range`.
    fn range_line_height(&self, range: Range<usize>) -> Result<Attribute<LineHeight>>;
    /// Fills over `range`.
    fn range_fills(&self, range: Range<usize>) -> Result<Attribute<Vec<Paint>>>;
    /// Text style reference over `range`.
    fn range_text_style_id(&self, range: Range<usize>) -> Result<Attribute<StyleId>>;
    /// Fill style reference over `range`.
    fn range_fill_style_id(&self, range: Range<usize>) -> Result<Attribute<StyleId>>;

    /// Set the font size over `range`.
    fn set_range_font_size(&mut self, range: Range<usize>, value: f32) -> Result<()>;
    /// Set the font over `range`.
    fn set_range_font_name(&mut self, range: Range<usize>, value: FontName) -> Result<()>;
    /// Set the case transform over `range`.
    fn set_range_text_case(&mut self, range: Range<usize>, value: TextCase) -> Result<()>;
    /// Set the decoration over `range`.
    fn set_range_text_decoration(
        &mut self,
        range: Range<usize>,
        value: TextDecoration,
    ) -> Result<()>;
    /// Set the letter spacing over `range`.
    fn set_range_letter_spacing(&mut self, range: Range<usize>, value: LetterSpacing)
        -> Result<()>;
    /// Set the line height over `range`.
    fn set_range_line_height(&mut self, range: Range<usize>, value: LineHeight) -> Result<()>;
    /// Set the fills over `range`.
    fn set_range_fills(&mut self, range: Range<usize>, value: Vec<Paint>) -> Result<()>;
    /// Set the text style reference over `range`.
    fn set_range_text_style_id(&mut self, range: Range<usize>, value: StyleId) -> Result<()>;
    /// Set the fill style reference over `range`.
    fn set_range_fill_style_id(&mut self, range: Range<usize>, value: StyleId) -> Result<()>;

    /// Concrete fonts used in `range`, one entry per position.
    fn range_font_names(&self, range: Range<usize>) -> Result<Vec<FontName>> {
        let mut fonts = Vec::with_capacity(range.len());
        for i in range {
            if let Attribute::Concrete(font) = self.range_font_name(i..i + 1)? {
                fonts.push(font);
            }
        }
        Ok(fonts)
    }
}

impl StyledText for TextNode {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn len(&self) -> usize {
        TextNode::len(self)
    }

    fn content(&self) -> String {
        self.text()
    }

    fn set_content(&mut self, text: &str) -> Result<()> {
        self.replace_text(text);
        Ok(())
    }

    fn range_font_size(&self, range: Range<usize>) -> Result<Attribute<f32>> {
        self.resolve(range, |s| &s.font_size)
    }

    fn range_font_name(&self, range: Range<usize>) -> Result<Attribute<FontName>> {
        self.resolve(range, |s| &s.font_name)
    }

    fn range_text_case(&self, range: Range<usize>) -> Result<Attribute<TextCase>> {
        self.resolve(range, |s| &s.text_case)
    }

    fn range_text_decoration(&self, range: Range<usize>) -> Result<Attribute<TextDecoration>> {
        self.resolve(range, |s| &s.text_decoration)
    }

    fn range_letter_spacing(&self, range: Range<usize>) -> Result<Attribute<LetterSpacing>> {
        self.resolve(range, |s| &s.letter_spacing)
    }

    fn range_line_height(&self, range: Range<usize>) -> Result<Attribute<LineHeight>> {
        self.resolve(range, |s| &s.line_height)
    }

    fn range_fills(&self, range: Range<usize>) -> Result<Attribute<Vec<Paint>>> {
        self.resolve(range, |s| &s.fills)
    }

    fn range_text_style_id(&self, range: Range<usize>) -> Result<Attribute<StyleId>> {
        self.resolve(range, |s| &s.text_style_id)
    }

    fn range_fill_style_id(&self, range: Range<usize>) -> Result<Attribute<StyleId>> {
        self.resolve(range, |s| &s.fill_style_id)
    }

    fn set_range_font_size(&mut self, range: Range<usize>, value: f32) -> Result<()> {
        if !value.is_finite() || value < 1.0 {
            return Err(Error::invalid_value(
                AttributeKind::FontSize,
                format!("{value} is not a font size (must be at least 1)"),
            ));
        }
        self.assign(range, value, |s| &mut s.font_size)
    }

    fn set_range_font_name(&mut self, range: Range<usize>, value: FontName) -> Result<()> {
        self.assign(range, value, |s| &mut s.font_name)
    }

    fn set_range_text_case(&mut self, range: Range<usize>, value: TextCase) -> Result<()> {
        self.assign(range, value, |s| &mut s.text_case)
    }

    fn set_range_text_decoration(
        &mut self,
        range: Range<usize>,
        value: TextDecoration,
    ) -> Result<()> {
        self.assign(range, value, |s| &mut s.text_decoration)
    }

    fn set_range_letter_spacing(
        &mut self,
        range: Range<usize>,
        value: LetterSpacing,
    ) -> Result<()> {
        if !value.value.is_finite() {
            return Err(Error::invalid_value(
                AttributeKind::LetterSpacing,
                "spacing must be finite",
            ));
        }
        self.assign(range, value, |s| &mut s.letter_spacing)
    }

    fn set_range_line_height(&mut self, range: Range<usize>, value: LineHeight) -> Result<()> {
        self.assign(range, value, |s| &mut s.line_height)
    }

    fn set_range_fills(&mut self, range: Range<usize>, value: Vec<Paint>) -> Result<()> {
        self.assign(range, value, |s| &mut s.fills)
    }

    fn set_range_text_style_id(&mut self, range: Range<usize>, value: StyleId) -> Result<()> {
        self.assign(range, value, |s| &mut s.text_style_id)
    }

    fn set_range_fill_style_id(&mut self, range: Range<usize>, value: StyleId) -> Result<()> {
        self.assign(range, value, |s| &mut s.fill_style_id)
    }
}
