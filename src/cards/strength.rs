use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// a hand's complete strength: constructed from an unordered set of 5-7
/// cards, and ordered first by `Ranking` then by kicker cards so two
/// `Strength`s compare exactly the way two poker hands do.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn category(&self) -> u8 {
        self.ranking.category()
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let ranking = e.find_ranking();
        let kickers = e.find_kickers(ranking);
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.ranking, self.kickers)
    }
}

/// a 5-7 card hand, evaluated on demand into a `Strength`. `compare`
/// implements the spec's winner-set semantics: a non-empty subset of the
/// indices into `hands`, all tied for best.
#[derive(Debug, Clone, Copy)]
pub struct CombinedHand(Hand);

impl From<Vec<super::card::Card>> for CombinedHand {
    fn from(cards: Vec<super::card::Card>) -> Self {
        assert!((5..=7).contains(&cards.len()), "hand must have 5-7 cards");
        Self(Hand::from(cards))
    }
}

impl CombinedHand {
    pub fn strength(&self) -> Strength {
        Strength::from(self.0)
    }

    /// indices of every hand tied for the win, lowest category + lexicographically
    /// greatest tie-break vector wins. never empty.
    pub fn winners(hands: &[CombinedHand]) -> Vec<usize> {
        assert!(!hands.is_empty());
        let strengths: Vec<Strength> = hands.iter().map(CombinedHand::strength).collect();
        let best = strengths.iter().max().expect("non-empty");
        strengths
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == best)
            .map(|(i, _)| i)
            .collect()
    }
}
