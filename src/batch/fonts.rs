//! Font preloading.
//!
//! Every font used by any selected document is loaded before the first
//! document is rewritten, so a missing font fails the batch up front.

use rayon::prelude::*;
use std::collections::BTreeSet;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::host::StyledText;
use crate::model::FontName;

/// Loads fonts so that text using them can be written.
pub trait FontLoader: Sync {
    /// Load `font`, failing if it is not available.
    fn load(&self, font: &FontName) -> Result<()>;
}

/// In-memory font loader backed by a list of installed fonts.
#[derive(Debug, Default)]
pub struct FontCatalog {
    available: Option<BTreeSet<FontName>>,
    loaded: Mutex<BTreeSet<FontName>>,
}

impl FontCatalog {
    /// A catalog where only `fonts` can be loaded.
    pub fn new(fonts: impl IntoIterator<Item = FontName>) -> Self {
        Self {
            available: Some(fonts.into_iter().collect()),
            loaded: Mutex::default(),
        }
    }

    /// A catalog that loads any font.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Check if `font` can be loaded.
    pub fn is_available(&self, font: &FontName) -> bool {
        self.available
            .as_ref()
            .map_or(true, |available| available.contains(font))
    }

    /// Fonts loaded so far, in sorted order.
    pub fn loaded(&self) -> Vec<FontName> {
        match self.loaded.lock() {
            Ok(loaded) => loaded.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }
}

impl FontLoader for FontCatalog {
    fn load(&self, font: &FontName) -> Result<()> {
        if !self.is_available(font) {
            return Err(Error::FontUnavailable(font.clone()));
        }
        let mut loaded = self
            .loaded
            .lock()
            .map_err(|_| Error::Other("font catalog lock poisoned".into()))?;
        loaded.insert(font.clone());
        Ok(())
    }
}

/// Every concrete font used by `documents`, deduplicated.
pub fn required_fonts<D: StyledText + ?Sized>(documents: &[&mut D]) -> Result<BTreeSet<FontName>> {
    let mut fonts = BTreeSet::new();
    for doc in documents {
        fonts.extend(doc.range_font_names(0..doc.len())?);
    }
    Ok(fonts)
}

/// Load every font in `fonts`, returning the first failure.
pub fn preload_fonts<L: FontLoader + ?Sized>(
    loader: &L,
    fonts: &BTreeSet<FontName>,
    parallel: bool,
) -> Result<()> {
    log::debug!("loading {} fonts", fonts.len());
    if parallel {
        fonts.par_iter().try_for_each(|font| loader.load(font))
    } else {
        fonts.iter().try_for_each(|font| loader.load(font))
    }
}
