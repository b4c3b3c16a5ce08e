use crate::cards::card::Card;
use crate::cards::strength::CombinedHand;
use crate::Probability;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Monte-Carlo win probability of a hero hand against a random opponent,
/// given 0-5 known community cards. Ties count as wins: the solver measures
/// showdown value, and a split pot is worth half the pot to each player,
/// which over many trials is well approximated by counting it as a win.
pub struct Estimator {
    rng: SmallRng,
}

impl Estimator {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn equity(&mut self, hero: [Card; 2], board: &[Card], n: usize) -> Probability {
        assert!(board.len() <= 5);
        let known: Vec<Card> = hero.iter().copied().chain(board.iter().copied()).collect();
        let remaining = 5 - board.len();
        let mut pool: Vec<Card> = (0..52u8)
            .map(Card::from)
            .filter(|c| !known.contains(c))
            .collect();

        let mut wins = 0usize;
        for _ in 0..n {
            pool.shuffle(&mut self.rng);
            let villain = [pool[0], pool[1]];
            let runout: Vec<Card> = board.iter().copied().chain(pool[2..2 + remaining].iter().copied()).collect();

            let mut hero_cards = hero.to_vec();
            hero_cards.extend_from_slice(&runout);
            let mut villain_cards = villain.to_vec();
            villain_cards.extend_from_slice(&runout);

            let hands = [CombinedHand::from(hero_cards), CombinedHand::from(villain_cards)];
            if CombinedHand::winners(&hands).contains(&0) {
                wins += 1;
            }
        }
        wins as Probability / n as Probability
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;

    fn card(s: &str) -> Card {
        Card::parse(s).unwrap()
    }

    #[test]
    fn aa_preflop_is_a_heavy_favorite() {
        let mut est = Estimator::seeded(11);
        let equity = est.equity([card("Ah"), card("As")], &[], 50_000);
        assert!((0.84..=0.86).contains(&equity), "equity was {equity}");
    }

    #[test]
    fn weak_hand_on_a_scary_flop_is_an_underdog() {
        let mut est = Estimator::seeded(5);
        let board = [card("Ah"), card("Kd"), card("Qs")];
        let equity = est.equity([card("7h"), card("2d")], &board, 20_000);
        assert!(equity < 0.15, "equity was {equity}");
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Estimator::seeded(42);
        let mut b = Estimator::seeded(42);
        let board = [card("2c"), card("7d"), card("9h")];
        let ea = a.equity([card("Ah"), card("Kh")], &board, 2_000);
        let eb = b.equity([card("Ah"), card("Kh")], &board, 2_000);
        assert_eq!(ea, eb);
    }
}
