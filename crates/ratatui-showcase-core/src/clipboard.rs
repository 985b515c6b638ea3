use thiserror::Error;

/// Failure reported by a clipboard collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// No clipboard is reachable in this environment.
    #[error("clipboard unavailable")]
    Unavailable,
    /// The clipboard refused the payload.
    #[error("clipboard rejected the text: {0}")]
    Rejected(String),
}

/// External clipboard access. The widget decides when to copy and what to
/// pass; how the text reaches an actual clipboard is the host's business.
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), CopyError>;
}

impl<F> Clipboard for F
where
    F: FnMut(&str) -> Result<(), CopyError>,
{
    fn copy_text(&mut self, text: &str) -> Result<(), CopyError> {
        self(text)
    }
}
