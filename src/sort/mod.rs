//! The line sorting pipeline.
//!
//! A document is read into [`Character`] records, split into lines, ordered,
//! and written back:
//!
//! ```
//! use sortlines::model::TextNode;
//! use sortlines::sort::sort_lines;
//!
//! let mut node = TextNode::with_text("1:2", "banana\napple\ncherry");
//! sort_lines(&mut node)?;
//! assert_eq!(node.text(), "apple\nbanana\ncherry");
//! # Ok::<(), sortlines::Error>(())
//! ```

mod extract;
mod order;
mod partition;
mod rebuild;

pub use extract::{extract_characters, read_style, Character, Line, LINE_BREAK};
pub use order::{compare_lines, compare_trimmed, order_lines, trimmed_text};
pub use partition::{join_with, split_on};
pub use rebuild::{join_lines, write_characters, WriteStats};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::host::StyledText;

/// What a single [`sort_lines`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport {
    /// Characters in the document
    pub characters: usize,

    /// Lines, including blank ones
    pub lines: usize,

    /// Lines that are empty after trimming
    pub blank_lines: usize,

    /// Attribute setter calls made
    pub attributes_applied: usize,

    /// Indeterminate attributes left to the host default
    pub attributes_skipped: usize,
}

/// Read, split and order the lines of `doc` without writing anything.
///
/// Returns `None` for an empty document. The returned sequence is exactly
/// what [`sort_lines`] would write.
pub fn sorted_characters<D: StyledText + ?Sized>(doc: &D) -> Result<Option<Vec<Character>>> {
    Ok(plan(doc)?.map(|(characters, _)| characters))
}

/// Sort the lines of `doc` in place, keeping every character's style.
///
/// Empty documents are left untouched.
///
/// Sorting twice yields the same text, but styles are not always stable:
///
/// - Indeterminate attributes are never written, so those positions take
///   whatever the host assigns after the content changes. A second pass
///   reads and writes that host value instead.
/// - Line breaks take the style of position 0. When the first line moves,
///   the next pass restyles every line break from the new first character.
pub fn sort_lines<D: StyledText + ?Sized>(doc: &mut D) -> Result<SortReport> {
    let Some((characters, mut report)) = plan(doc)? else {
        log::debug!("{}: empty, nothing to sort", doc.id().unwrap_or("document"));
        return Ok(SortReport::default());
    };

    let written = write_characters(doc, &characters)?;
    report.attributes_applied = written.applied;
    report.attributes_skipped = written.skipped;

    if written.skipped > 0 {
        log::warn!(
            "{}: {} mixed attributes were left at the host default",
            doc.id().unwrap_or("document"),
            written.skipped
        );
    }
    log::debug!(
        "{}: sorted {} lines ({} characters)",
        doc.id().unwrap_or("document"),
        report.lines,
        report.characters
    );

    Ok(report)
}

fn plan<D: StyledText + ?Sized>(doc: &D) -> Result<Option<(Vec<Character>, SortReport)>> {
    if doc.is_empty() {
        return Ok(None);
    }

    let characters = extract_characters(doc)?;
    let Some(first) = characters.first() else {
        return Ok(None);
    };
    let line_break = first.to_line_break();

    let lines = split_on(characters, Character::is_line_break);
    let report = SortReport {
        characters: doc.len(),
        lines: lines.len(),
        blank_lines: lines.iter().filter(|l| trimmed_text(l).is_empty()).count(),
        ..Default::default()
    };
    log::trace!("split into {} lines", report.lines);

    let sorted = order_lines(lines);
    Ok(Some((join_lines(sorted, &line_break), report)))
}
