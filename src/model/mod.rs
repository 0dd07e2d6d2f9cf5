//! Model types for styled text and the scene it lives in.
//!
//! [`TextNode`] is the in-memory host document the sorter reads from and
//! writes to. Every style value is wrapped in an [`Attribute`], which is
//! either concrete or indeterminate.

mod scene;
mod style;
mod text;

pub use scene::{ContainerNode, NodeMut, Scene, SceneNode, ShapeNode};
pub use style::{
    Attribute, AttributeKind, FontName, LetterSpacing, LineHeight, Paint, Rgb, SpacingUnit,
    StyleAttributes, StyleId, TextCase, TextDecoration, MIXED,
};
pub use text::{StyleRun, TextNode};
