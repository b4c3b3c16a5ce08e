use super::card::Card;
use crate::error::DeckEmpty;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// a permutation of the 52 distinct cards, drawn from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: SmallRng,
}

impl Deck {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// a deck whose shuffles are reproducible given the same seed.
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self {
            cards: (0u8..52).map(Card::from).collect(),
            rng: SmallRng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// remove a set of known cards before dealing, e.g. the hero's hole
    /// cards and any visible board, so they can never be redealt.
    pub fn excluding(seed: u64, known: &[Card]) -> Self {
        let mut deck = Self::seeded(seed);
        deck.cards.retain(|c| !known.contains(c));
        deck
    }

    pub fn draw(&mut self) -> std::result::Result<Card, DeckEmpty> {
        self.cards.pop().ok_or(DeckEmpty)
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn reset(&mut self) {
        self.cards = (0u8..52).map(Card::from).collect();
        self.shuffle();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
