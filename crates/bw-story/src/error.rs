//! Error types for the story engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while advancing a story session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Menu selection outside the offered range.
    #[error("invalid choice: {choice} (expected a number between 1 and {max})")]
    InvalidChoice {
        /// The selection the player made.
        choice: usize,
        /// The highest offered option.
        max: usize,
    },

    /// `Continue` was sent to a scene that offers menu choices.
    #[error("a menu choice is required here")]
    ChoiceRequired,

    /// The session already reached an ending.
    #[error("the story has already ended")]
    SessionEnded,
}
