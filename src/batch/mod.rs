//! Sorting a whole selection.
//!
//! A batch runs in fixed order: optional confirmation, font preload for all
//! documents, then each document's sort in turn, then one summary
//! notification.
//!
//! # Example
//!
//! ```
//! use sortlines::batch::{BatchOutcome, FixedAnswer, FontCatalog, NotificationLog, SortBatch};
//! use sortlines::model::TextNode;
//!
//! let mut a = TextNode::with_text("1:1", "b\na");
//! let mut b = TextNode::with_text("1:2", "d\nc");
//!
//! let mut gate = FixedAnswer(true);
//! let fonts = FontCatalog::permissive();
//! let mut notes = NotificationLog::new();
//!
//! let outcome = SortBatch::new(&mut gate, &fonts, &mut notes).run(&mut [&mut a, &mut b])?;
//! assert!(matches!(outcome, BatchOutcome::Sorted(_)));
//! assert_eq!(b.text(), "c\nd");
//! assert_eq!(notes.last(), Some("Sorted 2 text components!"));
//! # Ok::<(), sortlines::Error>(())
//! ```

mod confirm;
mod fonts;
mod notify;
mod options;
mod selection;

pub use confirm::{
    format_count, ChannelConfirmation, ConfirmPrompt, ConfirmationGate, FixedAnswer,
    SurfaceGuard, UiMessage, UiSurface,
};
pub use fonts::{preload_fonts, required_fonts, FontCatalog, FontLoader};
pub use notify::{NoViewport, NotificationLog, Notifier, Viewport};
pub use options::{BatchOptions, DEFAULT_CONFIRM_THRESHOLD};
pub use selection::collect_text_nodes;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::host::StyledText;
use crate::sort::{sort_lines, SortReport};

/// Shown when nothing sortable is selected.
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select a text node before sorting";

/// The summary shown after a batch.
pub fn summary_message(count: usize) -> String {
    format!("Sorted {} text components!", format_count(count))
}

/// How a batch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every document was sorted
    Sorted(BatchStats),

    /// The user declined; nothing was loaded or modified
    Cancelled,
}

impl BatchOutcome {
    /// Check if the batch was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, BatchOutcome::Cancelled)
    }

    /// Statistics, if the batch ran.
    pub fn stats(&self) -> Option<&BatchStats> {
        match self {
            BatchOutcome::Sorted(stats) => Some(stats),
            BatchOutcome::Cancelled => None,
        }
    }
}

/// Totals over a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Documents sorted (empty ones included)
    pub documents: usize,

    /// Fonts loaded before sorting
    pub fonts_loaded: usize,

    /// Characters across all documents
    pub characters: usize,

    /// Lines across all documents
    pub lines: usize,

    /// Blank lines across all documents
    pub blank_lines: usize,

    /// Attribute setter calls made
    pub attributes_applied: usize,

    /// Indeterminate attributes left to the host default
    pub attributes_skipped: usize,
}

impl BatchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's report.
    pub fn add_report(&mut self, report: &SortReport) {
        self.documents += 1;
        self.characters += report.characters;
        self.lines += report.lines;
        self.blank_lines += report.blank_lines;
        self.attributes_applied += report.attributes_applied;
        self.attributes_skipped += report.attributes_skipped;
    }
}

/// Drives one batch over its collaborators.
pub struct SortBatch<'a> {
    options: BatchOptions,
    gate: &'a mut dyn ConfirmationGate,
    fonts: &'a dyn FontLoader,
    notifier: &'a mut dyn Notifier,
    viewport: Option<&'a mut dyn Viewport>,
    progress: Option<&'a mut dyn FnMut(usize, usize)>,
}

impl<'a> SortBatch<'a> {
    /// Create a batch with default options.
    pub fn new(
        gate: &'a mut dyn ConfirmationGate,
        fonts: &'a dyn FontLoader,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self {
            options: BatchOptions::default(),
            gate,
            fonts,
            notifier,
            viewport: None,
            progress: None,
        }
    }

    /// Set batch options.
    pub fn with_options(mut self, options: BatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Focus sorted layers in `viewport` after success.
    pub fn with_viewport(mut self, viewport: &'a mut dyn Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Call `progress(done, total)` after each document.
    pub fn with_progress(mut self, progress: &'a mut dyn FnMut(usize, usize)) -> Self {
        self.progress = Some(progress);
        self
    }

    /// The options in use.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Sort every document in `documents`.
    ///
    /// An empty selection is reported but still runs to the summary. Font
    /// and setter errors abort the batch; documents sorted before the error
    /// keep their new order.
    pub fn run<D: StyledText + ?Sized>(&mut self, documents: &mut [&mut D]) -> Result<BatchOutcome> {
        let total = documents.len();
        if total == 0 {
            self.notifier.notify(EMPTY_SELECTION_MESSAGE);
        }

        if self.options.needs_confirmation(total) && !self.gate.confirm(total)? {
            log::info!("sorting {} documents cancelled", total);
            return Ok(BatchOutcome::Cancelled);
        }

        let mut stats = BatchStats::new();
        if self.options.preload_fonts {
            let fonts = required_fonts(documents)?;
            preload_fonts(self.fonts, &fonts, self.options.parallel_fonts)?;
            stats.fonts_loaded = fonts.len();
        }

        for (i, doc) in documents.iter_mut().enumerate() {
            let report = sort_lines(&mut **doc)?;
            stats.add_report(&report);
            if let Some(progress) = self.progress.as_mut() {
                progress(i + 1, total);
            }
        }

        self.notifier.notify(&summary_message(total));
        if let Some(viewport) = self.viewport.as_mut() {
            let ids: Vec<String> = documents
                .iter()
                .filter_map(|doc| doc.id().map(str::to_string))
                .collect();
            viewport.focus(&ids);
        }

        log::info!(
            "sorted {} documents: {} lines, {} characters",
            stats.documents,
            stats.lines,
            stats.characters
        );
        Ok(BatchOutcome::Sorted(stats))
    }
}
