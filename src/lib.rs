//! # sortlines
//!
//! Alphabetical line sorting for rich-text layers that keeps every
//! character's styling attached to it.
//!
//! A text layer is a sequence of characters where each character carries
//! nine style attributes (font size, font name, case, decoration, letter
//! spacing, line height, fills, and two style ids). Any attribute may be
//! *mixed* when the host cannot report a single value for it. Sorting
//! reorders whole lines and writes every attribute back at its new
//! position; mixed attributes are left to the host.
//!
//! ## Quick Start
//!
//! ```
//! use sortlines::{sort_lines, TextNode};
//!
//! let mut node = TextNode::with_text("1:2", "banana\napple\n\ncherry");
//! let report = sort_lines(&mut node)?;
//!
//! assert_eq!(node.text(), "apple\nbanana\ncherry\n");
//! assert_eq!(report.lines, 4);
//! # Ok::<(), sortlines::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Style preservation**: every attribute travels with its character
//! - **Mixed attributes**: indeterminate values are skipped, never invented
//! - **Batches**: flatten a selection, confirm, preload fonts, sort
//! - **Scene files**: JSON snapshots of a page selection for the CLI

pub mod batch;
pub mod error;
pub mod host;
pub mod model;
pub mod sort;

// Re-export commonly used types
pub use batch::{
    BatchOptions, BatchOutcome, BatchStats, ChannelConfirmation, ConfirmationGate, FixedAnswer,
    FontCatalog, FontLoader, NotificationLog, Notifier, SortBatch, UiMessage, UiSurface,
    Viewport,
};
pub use error::{Error, Result};
pub use host::StyledText;
pub use model::{
    Attribute, AttributeKind, FontName, LetterSpacing, LineHeight, Paint, Rgb, Scene, SceneNode,
    StyleAttributes, StyleId, TextCase, TextDecoration, TextNode,
};
pub use sort::{sort_lines, Character, SortReport};

use std::path::Path;

/// Sort every text layer in a scene's selection.
///
/// Fonts are checked against `scene.fonts` when the scene lists them.
///
/// # Example
///
/// ```
/// use sortlines::{sort_scene, BatchOptions, FixedAnswer, NotificationLog, Scene, SceneNode, TextNode};
///
/// let mut scene = Scene::new()
///     .select(SceneNode::Text(TextNode::with_text("1:1", "b\na")));
/// let mut notes = NotificationLog::new();
///
/// let outcome = sort_scene(&mut scene, &BatchOptions::default(), &mut FixedAnswer(true), &mut notes)?;
/// assert!(!outcome.is_cancelled());
/// assert_eq!(scene.selection[0].as_text().unwrap().text(), "a\nb");
/// # Ok::<(), sortlines::Error>(())
/// ```
pub fn sort_scene(
    scene: &mut Scene,
    options: &BatchOptions,
    gate: &mut dyn ConfirmationGate,
    notifier: &mut dyn Notifier,
) -> Result<BatchOutcome> {
    let fonts = scene_fonts(scene);
    let mut nodes = batch::collect_text_nodes(&mut scene.selection, options.only_visible);
    log::debug!("scene '{}': {} text layers selected", scene.page, nodes.len());

    SortBatch::new(gate, &fonts, notifier)
        .with_options(options.clone())
        .run(&mut nodes)
}

/// Sort a scene file in place without asking for confirmation.
///
/// # Example
///
/// ```no_run
/// use sortlines::sort_file;
///
/// let outcome = sort_file("selection.json").unwrap();
/// println!("{:?}", outcome.stats());
/// ```
pub fn sort_file<P: AsRef<Path>>(path: P) -> Result<BatchOutcome> {
    let path = path.as_ref();
    let mut scene = Scene::load(path)?;
    let options = BatchOptions::new().without_confirmation();
    let outcome = sort_scene(
        &mut scene,
        &options,
        &mut FixedAnswer(true),
        &mut NotificationLog::new(),
    )?;
    scene.save(path, true)?;
    Ok(outcome)
}

/// Sort the lines of plain text.
///
/// # Example
///
/// ```
/// use sortlines::sort_text;
///
/// assert_eq!(sort_text("  zeta\nAlpha\n\nbeta")?, "Alpha\nbeta\n  zeta\n");
/// # Ok::<(), sortlines::Error>(())
/// ```
pub fn sort_text(text: &str) -> Result<String> {
    let mut node = TextNode::with_text("", text);
    sort_lines(&mut node)?;
    Ok(node.text())
}

/// The font loader for a scene.
pub fn scene_fonts(scene: &Scene) -> FontCatalog {
    match &scene.fonts {
        Some(fonts) => FontCatalog::new(fonts.iter().cloned()),
        None => FontCatalog::permissive(),
    }
}
