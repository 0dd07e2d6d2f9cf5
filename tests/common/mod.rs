//! Shared mock host for integration tests.

#![allow(dead_code)]

use std::ops::Range;

use sortlines::error::{Error, Result};
use sortlines::model::{
    Attribute, AttributeKind, FontName, LetterSpacing, LineHeight, Paint, StyleId, TextCase,
    TextDecoration, TextNode,
};
use sortlines::StyledText;

/// Wraps a [`TextNode`], records every write and can be told to fail.
#[derive(Debug, Clone)]
pub struct MockDoc {
    pub inner: TextNode,
    /// Setter calls as `(kind, range)`
    pub writes: Vec<(AttributeKind, Range<usize>)>,
    pub content_writes: usize,
    /// Fail the setter for this attribute at this position
    pub fail_on: Option<(AttributeKind, usize)>,
    /// Fail the getter for this attribute when its range starts here
    pub fail_get: Option<(AttributeKind, usize)>,
}

impl MockDoc {
    pub fn new(inner: TextNode) -> Self {
        Self {
            inner,
            writes: Vec::new(),
            content_writes: 0,
            fail_on: None,
            fail_get: None,
        }
    }

    pub fn text(id: &str, text: &str) -> Self {
        Self::new(TextNode::with_text(id, text))
    }

    pub fn failing_on(mut self, kind: AttributeKind, index: usize) -> Self {
        self.fail_on = Some((kind, index));
        self
    }

    pub fn failing_get(mut self, kind: AttributeKind, index: usize) -> Self {
        self.fail_get = Some((kind, index));
        self
    }

    pub fn writes_of(&self, kind: AttributeKind) -> usize {
        self.writes.iter().filter(|(k, _)| *k == kind).count()
    }

    fn record(&mut self, kind: AttributeKind, range: &Range<usize>) -> Result<()> {
        if self.fail_on == Some((kind, range.start)) {
            return Err(Error::Other(format!("host rejected {} at {}", kind, range.start)));
        }
        self.writes.push((kind, range.clone()));
        Ok(())
    }

    fn query(&self, kind: AttributeKind, range: &Range<usize>) -> Result<()> {
        if self.fail_get == Some((kind, range.start)) {
            return Err(Error::Other(format!("host could not read {} at {}", kind, range.start)));
        }
        Ok(())
    }
}

impl StyledText for MockDoc {
    fn id(&self) -> Option<&str> {
        Some(&self.inner.id)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn content(&self) -> String {
        self.inner.text()
    }

    fn set_content(&mut self, text: &str) -> Result<()> {
        self.content_writes += 1;
        self.inner.set_content(text)
    }

    fn range_font_size(&self, range: Range<usize>) -> Result<Attribute<f32>> {
        self.query(AttributeKind::FontSize, &range)?;
        self.inner.range_font_size(range)
    }

    fn range_font_name(&self, range: Range<usize>) -> Result<Attribute<FontName>> {
        self.query(AttributeKind::FontName, &range)?;
        self.inner.range_font_name(range)
    }

    fn range_text_case(&self, range: Range<usize>) -> Result<Attribute<TextCase>> {
        self.query(AttributeKind::TextCase, &range)?;
        self.inner.range_text_case(range)
    }

    fn range_text_decoration(&self, range: Range<usize>) -> Result<Attribute<TextDecoration>> {
        self.query(AttributeKind::TextDecoration, &range)?;
        self.inner.range_text_decoration(range)
    }

    fn range_letter_spacing(&self, range: Range<usize>) -> Result<Attribute<LetterSpacing>> {
        self.query(AttributeKind::LetterSpacing, &range)?;
        self.inner.range_letter_spacing(range)
    }

    fn range_line_height(&self, range: Range<usize>) -> Result<Attribute<LineHeight>> {
        self.query(AttributeKind::LineHeight, &range)?;
        self.inner.range_line_height(range)
    }

    fn range_fills(&self, range: Range<usize>) -> Result<Attribute<Vec<Paint>>> {
        self.query(AttributeKind::Fills, &range)?;
        self.inner.range_fills(range)
    }

    fn range_text_style_id(&self, range: Range<usize>) -> Result<Attribute<StyleId>> {
        self.query(AttributeKind::TextStyleId, &range)?;
        self.inner.range_text_style_id(range)
    }

    fn range_fill_style_id(&self, range: Range<usize>) -> Result<Attribute<StyleId>> {
        self.query(AttributeKind::FillStyleId, &range)?;
        self.inner.range_fill_style_id(range)
    }

    fn set_range_font_size(&mut self, range: Range<usize>, value: f32) -> Result<()> {
        self.record(AttributeKind::FontSize, &range)?;
        self.inner.set_range_font_size(range, value)
    }

    fn set_range_font_name(&mut self, range: Range<usize>, value: FontName) -> Result<()> {
        self.record(AttributeKind::FontName, &range)?;
        self.inner.set_range_font_name(range, value)
    }

    fn set_range_text_case(&mut self, range: Range<usize>, value: TextCase) -> Result<()> {
        self.record(AttributeKind::TextCase, &range)?;
        self.inner.set_range_text_case(range, value)
    }

    fn set_range_text_decoration(
        &mut self,
        range: Range<usize>,
        value: TextDecoration,
    ) -> Result<()> {
        self.record(AttributeKind::TextDecoration, &range)?;
        self.inner.set_range_text_decoration(range, value)
    }

    fn set_range_letter_spacing(
        &mut self,
        range: Range<usize>,
        value: LetterSpacing,
    ) -> Result<()> {
        self.record(AttributeKind::LetterSpacing, &range)?;
        self.inner.set_range_letter_spacing(range, value)
    }

    fn set_range_line_height(&mut self, range: Range<usize>, value: LineHeight) -> Result<()> {
        self.record(AttributeKind::LineHeight, &range)?;
        self.inner.set_range_line_height(range, value)
    }

    fn set_range_fills(&mut self, range: Range<usize>, value: Vec<Paint>) -> Result<()> {
        self.record(AttributeKind::Fills, &range)?;
        self.inner.set_range_fills(range, value)
    }

    fn set_range_text_style_id(&mut self, range: Range<usize>, value: StyleId) -> Result<()> {
        self.record(AttributeKind::TextStyleId, &range)?;
        self.inner.set_range_text_style_id(range, value)
    }

    fn set_range_fill_style_id(&mut self, range: Range<usize>, value: StyleId) -> Result<()> {
        self.record(AttributeKind::FillStyleId, &range)?;
        self.inner.set_range_fill_style_id(range, value)
    }
}
