use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod hover;

pub use hover::{BindingId, HOVERED_CLASS, HoverBinding, HoverCoordinator, NOT_HOVERED_CLASS};

/// Hover protocol state of one category binding.
///
/// Lives only for the duration of a pointer-over/pointer-out cycle; a
/// pointer-out always returns the binding to `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        group: Value,
    },
}

impl HoverState {
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        matches!(self, HoverState::Hovering { .. })
    }
}

/// The single floating label surface shared by all bindings of one
/// coordinator.
///
/// The surface is an explicit resource handle mutated only through
/// [`show`](FloatingLabel::show), [`move_to`](FloatingLabel::move_to),
/// [`set_content`](FloatingLabel::set_content), and
/// [`hide`](FloatingLabel::hide). Its observable state is serializable so
/// host applications can mirror it onto whatever overlay widget they embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingLabel {
    visible: bool,
    display: String,
    left_px: f64,
    top_px: f64,
    content: String,
}

impl Default for FloatingLabel {
    fn default() -> Self {
        Self {
            visible: false,
            display: "none".to_owned(),
            left_px: 0.0,
            top_px: 0.0,
            content: String::new(),
        }
    }
}

impl FloatingLabel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Display mode applied on reveal, `"none"` while hidden.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn left_px(&self) -> f64 {
        self.left_px
    }

    #[must_use]
    pub fn top_px(&self) -> f64 {
        self.top_px
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn show(&mut self, display_mode: &str) {
        self.visible = true;
        self.display = display_mode.to_owned();
    }

    pub fn move_to(&mut self, left_px: f64, top_px: f64) {
        self.left_px = left_px;
        self.top_px = top_px;
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.display = "none".to_owned();
    }
}
