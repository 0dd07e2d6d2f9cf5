//! Writing sorted characters back onto the host.

use crate::error::Result;
use crate::host::StyledText;
use crate::model::Attribute;

use super::extract::{Character, Line};
use super::partition::join_with;

/// Counters from writing a character sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Positions written
    pub positions: usize,

    /// Attribute setter calls made
    pub applied: usize,

    /// Indeterminate attributes left to the host default
    pub skipped: usize,
}

/// Join lines with `line_break` between each adjacent pair.
pub fn join_lines(lines: Vec<Line>, line_break: &Character) -> Vec<Character> {
    join_with(lines, line_break)
}

/// Write `characters` onto `doc`: content first, then styles per position.
///
/// Indeterminate attributes are not written. The first setter error stops
/// the write; positions already styled keep their new style.
pub fn write_characters<D: StyledText + ?Sized>(
    doc: &mut D,
    characters: &[Character],
) -> Result<WriteStats> {
    let text: String = characters.iter().map(|c| c.character).collect();
    doc.set_content(&text)?;

    let mut stats = WriteStats::default();
    for (i, character) in characters.iter().enumerate() {
        apply_style(doc, i, character, &mut stats)?;
        stats.positions += 1;
    }
    Ok(stats)
}

/// Apply the concrete attributes of one record at position `index`.
fn apply_style<D: StyledText + ?Sized>(
    doc: &mut D,
    index: usize,
    character: &Character,
    stats: &mut WriteStats,
) -> Result<()> {
    let style = &character.style;
    let range = index..index + 1;

    macro_rules! apply {
        ($field:ident, $setter:ident) => {
            match &style.$field {
                Attribute::Concrete(value) => {
                    doc.$setter(range.clone(), value.clone())?;
                    stats.applied += 1;
                }
                Attribute::Indeterminate => {
                    log::trace!(
                        "position {}: {} is mixed, leaving host default",
                        index,
                        stringify!($field)
                    );
                    stats.skipped += 1;
                }
            }
        };
    }

    apply!(font_size, set_range_font_size);
    apply!(font_name, set_range_font_name);
    apply!(text_case, set_range_text_case);
    apply!(text_decoration, set_range_text_decoration);
    apply!(letter_spacing, set_range_letter_spacing);
    apply!(line_height, set_range_line_height);
    apply!(fills, set_range_fills);
    apply!(text_style_id, set_range_text_style_id);
    apply!(fill_style_id, set_range_fill_style_id);

    Ok(())
}
