//! CardSink port - receives the post-run summary card
//!
//! The CI system picks the card up from stdout/stderr or a file. Writing it
//! is a side effect only; nothing in the pipeline reads it back.

use thiserror::Error;

use crate::domain::entities::Card;

/// Card could not be written
#[derive(Debug, Error)]
pub enum CardError {
    #[error("could not serialize card: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write card: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for receiving the summary card
///
/// `CardWriter` frames it for a terminal stream or writes it to a file.
pub trait CardSink {
    fn write_card(&self, card: &Card) -> Result<(), CardError>;
}

impl<T: CardSink + ?Sized> CardSink for &T {
    fn write_card(&self, card: &Card) -> Result<(), CardError> {
        (**self).write_card(card)
    }
}

