//! Batch options and configuration.

/// Number of documents at which the user is asked before sorting.
pub const DEFAULT_CONFIRM_THRESHOLD: usize = 2;

/// Options for sorting a selection of documents.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Ask for confirmation when at least this many documents are selected
    pub confirm_threshold: usize,

    /// Load every required font before any document is modified
    pub preload_fonts: bool,

    /// Load fonts in parallel
    pub parallel_fonts: bool,

    /// Only sort visible text layers
    pub only_visible: bool,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confirmation threshold.
    pub fn with_confirm_threshold(mut self, threshold: usize) -> Self {
        self.confirm_threshold = threshold;
        self
    }

    /// Never ask for confirmation.
    pub fn without_confirmation(mut self) -> Self {
        self.confirm_threshold = usize::MAX;
        self
    }

    /// Enable or disable font preloading.
    pub fn with_font_preload(mut self, preload: bool) -> Self {
        self.preload_fonts = preload;
        self
    }

    /// Load fonts one after another.
    pub fn sequential(mut self) -> Self {
        self.parallel_fonts = false;
        self
    }

    /// Include hidden text layers.
    pub fn include_hidden(mut self) -> Self {
        self.only_visible = false;
        self
    }

    /// Check if `count` documents need confirmation.
    pub fn needs_confirmation(&self, count: usize) -> bool {
        count >= self.confirm_threshold
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            confirm_threshold: DEFAULT_CONFIRM_THRESHOLD,
            preload_fonts: true,
            parallel_fonts: true,
            only_visible: true,
        }
    }
}
