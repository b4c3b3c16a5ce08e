use crate::cards::street::Street;
use crate::cfr::Action;
use crate::Chips;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Hero,
    Villain,
}

/// the events consumed by the live state machine, one struct per wire kind.
/// `Event::parse` is the single place that turns an untyped `{event_type,
/// ...}` payload into one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum Event {
    HandStart {
        hero_stack: Chips,
        villain_stack: Chips,
        #[serde(default = "default_small_blind")]
        small_blind: Chips,
        #[serde(default = "default_big_blind")]
        big_blind: Chips,
        #[serde(default = "default_true")]
        hero_is_button: bool,
    },
    HoleCards {
        cards: [String; 2],
    },
    BoardUpdate {
        cards: Vec<String>,
        street: Street,
    },
    Action {
        player: Player,
        #[serde(rename = "type")]
        action_type: Action,
        amount: Option<Chips>,
        street: Street,
    },
    HandEnd {
        winner: Option<Player>,
        #[serde(default)]
        showdown: bool,
    },
    RequestAnalysis,
    /// catch-all for an `event_type` none of the above match; serde discards
    /// the actual unrecognized tag string.
    #[serde(other)]
    Unknown,
}

fn default_small_blind() -> Chips {
    1
}
fn default_big_blind() -> Chips {
    2
}
fn default_true() -> bool {
    true
}
