use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimationError {
    /// Shifting by one copy's width needs a second copy behind it
    #[error("marquee needs at least 2 copies of its content, got {copies}")]
    InsufficientCopies { copies: usize },

    #[error("animation duration must be greater than zero")]
    ZeroDuration,
}
