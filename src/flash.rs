//! The single status banner shared by every operation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashStyle {
    Success,
    Error,
    /// Signup transport failures carry only `error`, without the `message`
    /// base class the other paths use. Kept so existing stylesheets render
    /// it the same way they always have.
    BareError,
}

impl FlashStyle {
    pub fn class(self) -> &'static str {
        match self {
            FlashStyle::Success => "message success",
            FlashStyle::Error => "message error",
            FlashStyle::BareError => "error",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, FlashStyle::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub style: FlashStyle,
    pub hide_after_ms: u32,
}

impl Flash {
    pub fn success(text: impl Into<String>, hide_after_ms: u32) -> Self {
        Self { text: text.into(), style: FlashStyle::Success, hide_after_ms }
    }

    pub fn error(text: impl Into<String>, hide_after_ms: u32) -> Self {
        Self { text: text.into(), style: FlashStyle::Error, hide_after_ms }
    }

    pub fn bare_error(text: impl Into<String>, hide_after_ms: u32) -> Self {
        Self { text: text.into(), style: FlashStyle::BareError, hide_after_ms }
    }
}
