use super::rank::Rank;

/// the value of a hand's best-5 grouping, ignoring kicker cards.
/// variants are declared weakest-first so that the derived `Ord`
/// orders hands the way poker does: stronger hands compare greater.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 0 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..) | Ranking::StraightFlush(..) | Ranking::Straight(..) | Ranking::Flush(..) => {
                unreachable!("no kickers for this ranking")
            }
        }
    }

    /// the spec's 1..10 hand category, where 1 = Royal Flush and 10 = High Card
    /// (lower category wins). A straight flush topping out at the Ace is a
    /// Royal Flush and gets its own category.
    pub fn category(&self) -> u8 {
        match self {
            Ranking::StraightFlush(Rank::Ace) => 1,
            Ranking::StraightFlush(_) => 2,
            Ranking::FourOAK(_) => 3,
            Ranking::FullHouse(..) => 4,
            Ranking::Flush(_) => 5,
            Ranking::Straight(_) => 6,
            Ranking::ThreeOAK(_) => 7,
            Ranking::TwoPair(..) => 8,
            Ranking::OnePair(_) => 9,
            Ranking::HighCard(_) => 10,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {r1}{r2}"),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {r1}{r2}"),
            Ranking::HighCard(r) => write!(f, "HighCard      {r} "),
            Ranking::OnePair(r) => write!(f, "OnePair       {r} "),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {r} "),
            Ranking::Straight(r) => write!(f, "Straight      {r} "),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {r} "),
            Ranking::Flush(r) => write!(f, "Flush         {r} "),
            Ranking::StraightFlush(Rank::Ace) => write!(f, "RoyalFlush    A "),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {r} "),
        }
    }
}
