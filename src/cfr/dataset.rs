use crate::abstraction;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hole::Hole;
use crate::cards::strength::CombinedHand;
use crate::equity::Estimator;

/// one i.i.d. sampled deal: both holdings, the full board, and the showdown
/// winner. chance is not enumerated during training; instead a dataset of
/// these is built once and indexed by iteration number, wrapping around.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hero: [Card; 2],
    pub villain: [Card; 2],
    pub board: [Card; 5],
    /// 1 if hero wins at showdown, -1 if villain wins, 0 on a tie
    pub winner: i8,
    pub hero_flop_cluster: usize,
    pub hero_turn_cluster: usize,
    pub hero_river_cluster: usize,
    pub villain_flop_cluster: usize,
    pub villain_turn_cluster: usize,
    pub villain_river_cluster: usize,
}

/// the precomputed chance dataset shared by a training run. built once up
/// front so that the CFR recursion never shuffles a deck itself.
pub struct Dataset {
    deals: Vec<Deal>,
}

impl Dataset {
    pub fn generate(n: usize, estimator: &mut Estimator) -> Self {
        let mut deals = Vec::with_capacity(n);
        for _ in 0..n {
            let mut deck = Deck::new();
            let hero = [deck.draw().expect("fresh deck"), deck.draw().expect("fresh deck")];
            let villain = [deck.draw().expect("fresh deck"), deck.draw().expect("fresh deck")];
            let board: [Card; 5] = std::array::from_fn(|_| deck.draw().expect("fresh deck"));

            let winner = showdown_winner(hero, villain, &board);

            let hero_hole = Hole::new(hero[0], hero[1]);
            let villain_hole = Hole::new(villain[0], villain[1]);
            let hero_flop_cluster = abstraction::assign(estimator, hero_hole, &board[..3], crate::cards::street::Street::Flop).index();
            let hero_turn_cluster = abstraction::assign(estimator, hero_hole, &board[..4], crate::cards::street::Street::Turn).index();
            let hero_river_cluster = abstraction::assign(estimator, hero_hole, &board[..5], crate::cards::street::Street::Rive).index();
            let villain_flop_cluster = abstraction::assign(estimator, villain_hole, &board[..3], crate::cards::street::Street::Flop).index();
            let villain_turn_cluster = abstraction::assign(estimator, villain_hole, &board[..4], crate::cards::street::Street::Turn).index();
            let villain_river_cluster = abstraction::assign(estimator, villain_hole, &board[..5], crate::cards::street::Street::Rive).index();

            deals.push(Deal {
                hero,
                villain,
                board,
                winner,
                hero_flop_cluster,
                hero_turn_cluster,
                hero_river_cluster,
                villain_flop_cluster,
                villain_turn_cluster,
                villain_river_cluster,
            });
        }
        Self { deals }
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// wraps around: `t mod |dataset|` is expected, not an error.
    pub fn sample(&self, t: usize) -> &Deal {
        &self.deals[t % self.deals.len()]
    }
}

fn showdown_winner(hero: [Card; 2], villain: [Card; 2], board: &[Card; 5]) -> i8 {
    let mut hero_cards = hero.to_vec();
    hero_cards.extend_from_slice(board);
    let mut villain_cards = villain.to_vec();
    villain_cards.extend_from_slice(board);

    let hands = [CombinedHand::from(hero_cards), CombinedHand::from(villain_cards)];
    let winners = CombinedHand::winners(&hands);
    match winners.as_slice() {
        [0] => 1,
        [1] => -1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut est = Estimator::seeded(3);
        let dataset = Dataset::generate(4, &mut est);
        assert_eq!(dataset.sample(0).hero, dataset.sample(4).hero);
    }

    #[test]
    fn winner_is_in_range() {
        let mut est = Estimator::seeded(3);
        let dataset = Dataset::generate(8, &mut est);
        for deal in &dataset.deals {
            assert!((-1..=1).contains(&deal.winner));
        }
    }
}
