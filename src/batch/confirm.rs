//! Asking the user before a large batch.
//!
//! [`ChannelConfirmation`] shows a prompt on a [`UiSurface`] and waits for
//! exactly one decision on a channel. Resize requests may arrive first and
//! are applied without resolving the exchange. The surface is closed on
//! every exit path.

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};

/// Something that can approve or reject sorting `count` documents.
pub trait ConfirmationGate {
    /// Ask whether `count` documents should be sorted.
    fn confirm(&mut self, count: usize) -> Result<bool>;
}

/// A gate that always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmationGate for FixedAnswer {
    fn confirm(&mut self, count: usize) -> Result<bool> {
        log::debug!("auto-answering confirmation for {} documents: {}", count, self.0);
        Ok(self.0)
    }
}

/// Group digits in threes: `1234567` becomes `"1,234,567"`.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Contents of the confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmPrompt {
    /// Number of documents about to be sorted
    pub count: usize,

    /// First line of the prompt
    pub message: String,

    /// The question
    pub question: String,

    /// Label of the accept button
    pub yes_label: String,

    /// Label of the decline button
    pub no_label: String,

    /// Initial surface width
    pub width: u32,

    /// Initial surface height
    pub height: u32,
}

impl ConfirmPrompt {
    /// Build the prompt for `count` documents.
    pub fn new(count: usize) -> Self {
        let (yes_label, no_label) = if count > 10 {
            ("Yes, Do It! 🤪", "Nevermind 😵")
        } else {
            ("Yep!", "Nevermind")
        };
        Self {
            count,
            message: format!("This will sort {} text components.", format_count(count)),
            question: "Are you sure you want to do that?".to_string(),
            yes_label: yes_label.to_string(),
            no_label: no_label.to_string(),
            width: 400,
            height: 170,
        }
    }
}

/// A message sent back from the prompt surface.
///
/// Either field group may be present; a message can carry both a size and
/// a decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiMessage {
    /// Requested width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Requested height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// The user's answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
}

impl UiMessage {
    /// A resize request.
    pub fn resize(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            confirm: None,
        }
    }

    /// A decision.
    pub fn decision(confirm: bool) -> Self {
        Self {
            confirm: Some(confirm),
            ..Default::default()
        }
    }

    /// Parse a message from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The requested size, if both dimensions are present.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }
}

/// A transient UI surface that displays the prompt.
pub trait UiSurface {
    /// Display the prompt.
    fn show(&mut self, prompt: &ConfirmPrompt) -> Result<()>;

    /// Resize the surface.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Close the surface.
    fn close(&mut self);
}

/// Closes the wrapped surface when dropped.
#[derive(Debug)]
pub struct SurfaceGuard<'a, S: UiSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: UiSurface + ?Sized> SurfaceGuard<'a, S> {
    /// Take responsibility for closing `surface`.
    pub fn new(surface: &'a mut S) -> Self {
        Self { surface }
    }
}

impl<S: UiSurface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: UiSurface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: UiSurface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.close();
    }
}

/// Single-shot confirmation over a message channel.
#[derive(Debug)]
pub struct ChannelConfirmation<S: UiSurface> {
    surface: S,
    messages: Receiver<UiMessage>,
}

impl<S: UiSurface> ChannelConfirmation<S> {
    /// Use `surface` for display and `messages` for its replies.
    pub fn new(surface: S, messages: Receiver<UiMessage>) -> Self {
        Self { surface, messages }
    }

    /// Create a gate with a fresh channel; the sender goes to the surface.
    pub fn with_channel<F>(make_surface: F) -> Self
    where
        F: FnOnce(Sender<UiMessage>) -> S,
    {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self::new(make_surface(sender), receiver)
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give back the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: UiSurface> ConfirmationGate for ChannelConfirmation<S> {
    fn confirm(&mut self, count: usize) -> Result<bool> {
        let prompt = ConfirmPrompt::new(count);
        let mut surface = SurfaceGuard::new(&mut self.surface);
        surface.show(&prompt)?;

        loop {
            let message = self
                .messages
                .recv()
                .map_err(|_| Error::ConfirmationClosed)?;
            if let Some((width, height)) = message.size() {
                surface.resize(width, height)?;
            }
            if let Some(decision) = message.confirm {
                log::debug!("confirmation for {} documents: {}", count, decision);
                return Ok(decision);
            }
        }
    }
}
