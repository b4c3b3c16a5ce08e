use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Street {
    #[serde(rename = "preflop")]
    Pref = 0,
    #[serde(rename = "flop")]
    Flop = 1,
    #[serde(rename = "turn")]
    Turn = 2,
    #[serde(rename = "river")]
    Rive = 3,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::Pref => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::Rive,
            Self::Rive => panic!("river is terminal"),
        }
    }
    /// number of board cards visible once this street is reached
    pub const fn n_board(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// how many new cards this street reveals relative to the previous one
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 1,
            Self::Rive => 1,
        }
    }
    /// size of the postflop cluster alphabet configured for this street
    pub const fn n_clusters(&self) -> usize {
        match self {
            Self::Pref => 169,
            Self::Flop => crate::abstraction::postflop::FLOP_CLUSTERS,
            Self::Turn => crate::abstraction::postflop::TURN_CLUSTERS,
            Self::Rive => crate::abstraction::postflop::RIVER_CLUSTERS,
        }
    }
}

impl Display for Street {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
