//! Character-level style types.

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the object that stands in for [`Attribute::Indeterminate`].
///
/// Indeterminate values serialize as `{"mixed": true}`. No attribute payload
/// is an object with that single key, so the marker never collides with a
/// concrete value such as a style id spelled `"mixed"`.
pub const MIXED: &str = "mixed";

/// A style attribute value read from the host over some range.
///
/// `Indeterminate` means the host could not resolve the range to a single
/// value. It carries no payload and is never written back.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute<T> {
    /// A single, directly settable value
    Concrete(T),
    /// The value varies (or is otherwise unresolvable) over the range
    Indeterminate,
}

impl<T> Attribute<T> {
    /// Check if the value is concrete.
    pub fn is_concrete(&self) -> bool {
        matches!(self, Attribute::Concrete(_))
    }

    /// Check if the value is indeterminate.
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Attribute::Indeterminate)
    }

    /// Borrow the concrete value, if any.
    pub fn as_concrete(&self) -> Option<&T> {
        match self {
            Attribute::Concrete(value) => Some(value),
            Attribute::Indeterminate => None,
        }
    }

    /// Convert into the concrete value, if any.
    pub fn into_concrete(self) -> Option<T> {
        match self {
            Attribute::Concrete(value) => Some(value),
            Attribute::Indeterminate => None,
        }
    }
}

impl<T> From<T> for Attribute<T> {
    fn from(value: T) -> Self {
        Attribute::Concrete(value)
    }
}

impl<T: Serialize> Serialize for Attribute<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Attribute::Concrete(value) => value.serialize(serializer),
            Attribute::Indeterminate => MixedMarker { mixed: true }.serialize(serializer),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct MixedMarker {
    mixed: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeRepr<T> {
    Mixed(MixedMarker),
    Concrete(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Attribute<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match AttributeRepr::deserialize(deserializer)? {
            AttributeRepr::Mixed(MixedMarker { mixed: true }) => Ok(Attribute::Indeterminate),
            AttributeRepr::Mixed(MixedMarker { mixed: false }) => Err(D::Error::custom(
                "`mixed` must be true; write the concrete value instead",
            )),
            AttributeRepr::Concrete(value) => Ok(Attribute::Concrete(value)),
        }
    }
}

/// The nine per-character style attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Font size in points
    FontSize,
    /// Font family and style
    FontName,
    /// Text case transform
    TextCase,
    /// Underline / strikethrough
    TextDecoration,
    /// Letter spacing
    LetterSpacing,
    /// Line height
    LineHeight,
    /// Fill paints
    Fills,
    /// Text style reference
    TextStyleId,
    /// Fill style reference
    FillStyleId,
}

impl AttributeKind {
    /// Every attribute, in write order.
    pub const ALL: [AttributeKind; 9] = [
        AttributeKind::FontSize,
        AttributeKind::FontName,
        AttributeKind::TextCase,
        AttributeKind::TextDecoration,
        AttributeKind::LetterSpacing,
        AttributeKind::LineHeight,
        AttributeKind::Fills,
        AttributeKind::TextStyleId,
        AttributeKind::FillStyleId,
    ];

    /// Host-facing attribute name.
    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::FontSize => "fontSize",
            AttributeKind::FontName => "fontName",
            AttributeKind::TextCase => "textCase",
            AttributeKind::TextDecoration => "textDecoration",
            AttributeKind::LetterSpacing => "letterSpacing",
            AttributeKind::LineHeight => "lineHeight",
            AttributeKind::Fills => "fills",
            AttributeKind::TextStyleId => "textStyleId",
            AttributeKind::FillStyleId => "fillStyleId",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A font descriptor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontName {
    /// Font family (e.g., "Inter")
    pub family: String,

    /// Font style within the family (e.g., "Bold Italic")
    pub style: String,
}

impl FontName {
    /// Create a new font descriptor.
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl Default for FontName {
    fn default() -> Self {
        Self::new("Inter", "Regular")
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Text case transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    /// As typed
    #[default]
    Original,
    /// UPPER CASE
    Upper,
    /// lower case
    Lower,
    /// Title Case
    Title,
    /// Small caps where the font supports them
    SmallCaps,
    /// Small caps, synthesized if needed
    SmallCapsForced,
}

/// Text decoration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    /// No decoration
    #[default]
    None,
    /// Underlined
    Underline,
    /// Struck through
    Strikethrough,
}

/// Unit for spacing values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpacingUnit {
    /// Absolute pixels
    Pixels,
    /// Percentage of the font size
    #[default]
    Percent,
}

/// Letter spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LetterSpacing {
    /// Spacing amount
    pub value: f32,

    /// Unit of `value`
    pub unit: SpacingUnit,
}

impl LetterSpacing {
    /// Spacing in pixels.
    pub fn pixels(value: f32) -> Self {
        Self {
            value,
            unit: SpacingUnit::Pixels,
        }
    }

    /// Spacing as a percentage of the font size.
    pub fn percent(value: f32) -> Self {
        Self {
            value,
            unit: SpacingUnit::Percent,
        }
    }
}

/// Line height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    /// Derived from the font metrics
    #[default]
    Auto,
    /// Absolute pixels
    Pixels {
        /// Line height in pixels
        value: f32,
    },
    /// Percentage of the font size
    Percent {
        /// Line height percentage
        value: f32,
    },
}

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Rgb {
    /// Create a colour.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// A fill paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    /// Solid colour fill
    Solid {
        /// Fill colour
        color: Rgb,
        /// Opacity in `0.0..=1.0`
        #[serde(default = "default_opacity")]
        opacity: f32,
        /// Whether the paint is shown
        #[serde(default = "default_visible")]
        visible: bool,
    },
    /// Image fill
    Image {
        /// Host image hash
        #[serde(rename = "imageHash")]
        image_hash: String,
        /// Whether the paint is shown
        #[serde(default = "default_visible")]
        visible: bool,
    },
}

impl Paint {
    /// A fully opaque, visible solid fill.
    pub fn solid(color: Rgb) -> Self {
        Paint::Solid {
            color,
            opacity: 1.0,
            visible: true,
        }
    }
}

fn default_opacity() -> f32 {
    1.0
}

fn default_visible() -> bool {
    true
}

/// Reference to a shared style; empty when the text is not linked to one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub String);

impl StyleId {
    /// Create a style reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Check if no style is referenced.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The complete style of a single character position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleAttributes {
    /// Font size in points
    pub font_size: Attribute<f32>,

    /// Font family and style
    pub font_name: Attribute<FontName>,

    /// Case transform
    pub text_case: Attribute<TextCase>,

    /// Decoration
    pub text_decoration: Attribute<TextDecoration>,

    /// Letter spacing
    pub letter_spacing: Attribute<LetterSpacing>,

    /// Line height
    pub line_height: Attribute<LineHeight>,

    /// Fill paints
    pub fills: Attribute<Vec<Paint>>,

    /// Text style reference
    pub text_style_id: Attribute<StyleId>,

    /// Fill style reference
    pub fill_style_id: Attribute<StyleId>,
}

impl StyleAttributes {
    /// Check if the given attribute is indeterminate.
    pub fn is_indeterminate(&self, kind: AttributeKind) -> bool {
        match kind {
            AttributeKind::FontSize => self.font_size.is_indeterminate(),
            AttributeKind::FontName => self.font_name.is_indeterminate(),
            AttributeKind::TextCase => self.text_case.is_indeterminate(),
            AttributeKind::TextDecoration => self.text_decoration.is_indeterminate(),
            AttributeKind::LetterSpacing => self.letter_spacing.is_indeterminate(),
            AttributeKind::LineHeight => self.line_height.is_indeterminate(),
            AttributeKind::Fills => self.fills.is_indeterminate(),
            AttributeKind::TextStyleId => self.text_style_id.is_indeterminate(),
            AttributeKind::FillStyleId => self.fill_style_id.is_indeterminate(),
        }
    }

    /// Attributes that are indeterminate, in write order.
    pub fn indeterminate_kinds(&self) -> Vec<AttributeKind> {
        AttributeKind::ALL
            .into_iter()
            .filter(|kind| self.is_indeterminate(*kind))
            .collect()
    }

    /// Check if every attribute is concrete.
    pub fn is_fully_concrete(&self) -> bool {
        AttributeKind::ALL
            .into_iter()
            .all(|kind| !self.is_indeterminate(kind))
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Attribute::Concrete(size);
        self
    }

    /// Set the font.
    pub fn with_font_name(mut self, font: FontName) -> Self {
        self.font_name = Attribute::Concrete(font);
        self
    }

    /// Set the decoration.
    pub fn with_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = Attribute::Concrete(decoration);
        self
    }

    /// Set the fills.
    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Attribute::Concrete(fills);
        self
    }
}

impl Default for StyleAttributes {
    fn default() -> Self {
        Self {
            font_size: Attribute::Concrete(12.0),
            font_name: Attribute::Concrete(FontName::default()),
            text_case: Attribute::Concrete(TextCase::Original),
            text_decoration: Attribute::Concrete(TextDecoration::None),
            letter_spacing: Attribute::Concrete(LetterSpacing::percent(0.0)),
            line_height: Attribute::Concrete(LineHeight::Auto),
            fills: Attribute::Concrete(vec![Paint::solid(Rgb::default())]),
            text_style_id: Attribute::Concrete(StyleId::default()),
            fill_style_id: Attribute::Concrete(StyleId::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_serializes_mixed() {
        let mixed: Attribute<f32> = Attribute::Indeterminate;
        assert_eq!(serde_json::to_string(&mixed).unwrap(), r#"{"mixed":true}"#);

        let size = Attribute::Concrete(14.0f32);
        assert_eq!(serde_json::to_string(&size).unwrap(), "14.0");
    }

    #[test]
    fn test_attribute_deserializes_mixed() {
        let fills: Attribute<Vec<Paint>> = serde_json::from_str(r#"{"mixed":true}"#).unwrap();
        assert!(fills.is_indeterminate());

        let font: Attribute<FontName> =
            serde_json::from_str(r#"{"family":"Roboto","style":"Bold"}"#).unwrap();
        assert_eq!(font.as_concrete(), Some(&FontName::new("Roboto", "Bold")));

        let id: Attribute<StyleId> = serde_json::from_str("\"S:1234\"").unwrap();
        assert_eq!(id, Attribute::Concrete(StyleId::new("S:1234")));
    }

    #[test]
    fn test_style_id_named_mixed_stays_concrete() {
        let id: Attribute<StyleId> = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(id, Attribute::Concrete(StyleId::new("mixed")));

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"mixed\"");
    }

    #[test]
    fn test_mixed_false_is_rejected() {
        let result: std::result::Result<Attribute<f32>, _> =
            serde_json::from_str(r#"{"mixed":false}"#);
        assert!(result.is_err());

        let result: std::result::Result<Attribute<f32>, _> =
            serde_json::from_str(r#"{"mixed":true,"value":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_line_height_format() {
        let json = serde_json::to_string(&LineHeight::Pixels { value: 20.0 }).unwrap();
        assert_eq!(json, r#"{"unit":"PIXELS","value":20.0}"#);

        let auto: LineHeight = serde_json::from_str(r#"{"unit":"AUTO"}"#).unwrap();
        assert_eq!(auto, LineHeight::Auto);
    }

    #[test]
    fn test_paint_defaults() {
        let paint: Paint =
            serde_json::from_str(r#"{"type":"SOLID","color":{"r":1.0,"g":0.0,"b":0.0}}"#).unwrap();
        assert_eq!(paint, Paint::solid(Rgb::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_style_partial_json_uses_defaults() {
        let style: StyleAttributes = serde_json::from_str(r#"{"fontSize":18.0}"#).unwrap();
        assert_eq!(style.font_size, Attribute::Concrete(18.0));
        assert_eq!(style.font_name, Attribute::Concrete(FontName::default()));
        assert!(style.is_fully_concrete());
    }

    #[test]
    fn test_indeterminate_kinds() {
        let mut style = StyleAttributes::default();
        assert!(style.indeterminate_kinds().is_empty());

        style.fills = Attribute::Indeterminate;
        style.text_style_id = Attribute::Indeterminate;
        assert_eq!(
            style.indeterminate_kinds(),
            vec![AttributeKind::Fills, AttributeKind::TextStyleId]
        );
        assert!(!style.is_fully_concrete());
    }
}
