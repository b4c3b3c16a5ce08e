use super::hand::Hand;

/// a hand's kicker cards, kept as a rank-bitstring. structurally identical
/// to `Hand` but semantically distinct: comparison here is purely about
/// breaking ties between two hands of the same `Ranking`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl From<u16> for Kickers {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<Kickers> for Hand {
    fn from(k: Kickers) -> Self {
        Hand::from(k.0 as u64)
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:013b}", self.0)
    }
}
