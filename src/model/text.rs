//! In-memory styled text node.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::{Attribute, StyleAttributes};
use crate::error::{Error, Result};

/// A text layer: a string plus one style per character.
///
/// Positions are `char` indices. Writing new content resets every position
/// to the node's `default_style`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TextNodeRepr", into = "TextNodeRepr")]
pub struct TextNode {
    /// Node identifier
    pub id: String,

    /// Layer name
    pub name: String,

    /// Whether the layer is visible
    pub visible: bool,

    /// Style applied to freshly written characters
    pub default_style: StyleAttributes,

    text: Vec<char>,
    styles: Vec<StyleAttributes>,
}

impl TextNode {
    /// Create an empty text node.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            visible: true,
            default_style: StyleAttributes::default(),
            text: Vec::new(),
            styles: Vec::new(),
        }
    }

    /// Create a text node whose characters all carry the default style.
    pub fn with_text(id: impl Into<String>, text: &str) -> Self {
        let mut node = Self::new(id);
        node.replace_text(text);
        node
    }

    /// Set the layer name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Append text with an explicit style.
    pub fn push_styled(&mut self, text: &str, style: &StyleAttributes) {
        for c in text.chars() {
            self.text.push(c);
            self.styles.push(style.clone());
        }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the node has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text content.
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// The stored style of a single position.
    pub fn style_at(&self, index: usize) -> Option<&StyleAttributes> {
        self.styles.get(index)
    }

    /// Mutable access to the stored style of a single position.
    pub fn style_at_mut(&mut self, index: usize) -> Option<&mut StyleAttributes> {
        self.styles.get_mut(index)
    }

    /// Iterate over `(character, style)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (char, &StyleAttributes)> {
        self.text.iter().copied().zip(self.styles.iter())
    }

    /// The text split on line breaks.
    pub fn lines(&self) -> Vec<String> {
        self.text().split('\n').map(str::to_string).collect()
    }

    pub(crate) fn replace_text(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.styles = vec![self.default_style.clone(); self.text.len()];
    }

    pub(crate) fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start >= range.end {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > self.text.len() {
            return Err(Error::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len: self.text.len(),
            });
        }
        Ok(())
    }

    /// Resolve one attribute over a range: concrete only if every position
    /// holds the same concrete value.
    pub(crate) fn resolve<T, F>(&self, range: Range<usize>, field: F) -> Result<Attribute<T>>
    where
        T: Clone + PartialEq,
        F: Fn(&StyleAttributes) -> &Attribute<T>,
    {
        self.check_range(&range)?;
        let mut values = self.styles[range].iter().map(&field);
        let first = match values.next() {
            Some(Attribute::Concrete(value)) => value,
            _ => return Ok(Attribute::Indeterminate),
        };
        for value in values {
            match value {
                Attribute::Concrete(other) if other == first => {}
                _ => return Ok(Attribute::Indeterminate),
            }
        }
        Ok(Attribute::Concrete(first.clone()))
    }

    /// Write one attribute over a range.
    pub(crate) fn assign<T, F>(&mut self, range: Range<usize>, value: T, field: F) -> Result<()>
    where
        T: Clone,
        F: Fn(&mut StyleAttributes) -> &mut Attribute<T>,
    {
        self.check_range(&range)?;
        for style in &mut self.styles[range] {
            *field(style) = Attribute::Concrete(value.clone());
        }
        Ok(())
    }
}

/// A run of consecutive characters sharing one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRun {
    /// Number of characters covered
    pub length: usize,

    /// Style of those characters
    pub style: StyleAttributes,
}

/// Serialized form of a [`TextNode`]: text plus run-length encoded styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextNodeRepr {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default = "default_visible")]
    visible: bool,
    characters: String,
    #[serde(default)]
    default_style: StyleAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    runs: Vec<StyleRun>,
}

fn default_visible() -> bool {
    true
}

impl TryFrom<TextNodeRepr> for TextNode {
    type Error = Error;

    fn try_from(repr: TextNodeRepr) -> Result<Self> {
        let text: Vec<char> = repr.characters.chars().collect();
        let styles = if repr.runs.is_empty() {
            vec![repr.default_style.clone(); text.len()]
        } else {
            let covered: usize = repr.runs.iter().map(|run| run.length).sum();
            if covered != text.len() {
                return Err(Error::RunMismatch {
                    covered,
                    len: text.len(),
                });
            }
            repr.runs
                .into_iter()
                .flat_map(|run| std::iter::repeat(run.style).take(run.length))
                .collect()
        };

        Ok(Self {
            id: repr.id,
            name: repr.name,
            visible: repr.visible,
            default_style: repr.default_style,
            text,
            styles,
        })
    }
}

impl From<TextNode> for TextNodeRepr {
    fn from(node: TextNode) -> Self {
        let mut runs: Vec<StyleRun> = Vec::new();
        for style in node.styles {
            match runs.last_mut() {
                Some(run) if run.style == style => run.length += 1,
                _ => runs.push(StyleRun { length: 1, style }),
            }
        }

        Self {
            id: node.id,
            name: node.name,
            visible: node.visible,
            characters: node.text.into_iter().collect(),
            default_style: node.default_style,
            runs,
        }
    }
}
