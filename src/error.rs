use std::fmt::{Display, Formatter, Result as FmtResult};

/// failure to parse a card string into a `Card`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    InvalidCard(String),
}

impl Display for CardError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidCard(s) => write!(f, "invalid card: '{s}'"),
        }
    }
}
impl std::error::Error for CardError {}

/// the deck ran out of cards. this is a bug: callers must never draw more
/// than the number of cards remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckEmpty;

impl Display for DeckEmpty {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "deck is empty")
    }
}
impl std::error::Error for DeckEmpty {}

/// errors surfaced at the live-game event boundary (see `live::event`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Card(CardError),
    /// caller sent an event kind we don't recognize.
    UnknownEvent(String),
    /// an action that violates the current betting state: checking a bet,
    /// betting above the stack, betting below the call price, or a raise
    /// that doesn't exceed the existing call price.
    IllegalAction(String),
    /// `request_analysis` fired before hole cards were ever observed.
    MissingHoleCards,
}

impl From<CardError> for GameError {
    fn from(e: CardError) -> Self {
        Self::Card(e)
    }
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Card(e) => write!(f, "{e}"),
            Self::UnknownEvent(kind) => write!(f, "unknown event kind: '{kind}'"),
            Self::IllegalAction(reason) => write!(f, "illegal action: {reason}"),
            Self::MissingHoleCards => write!(f, "analysis requested before hole cards are known"),
        }
    }
}
impl std::error::Error for GameError {}
