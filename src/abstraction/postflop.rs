use crate::cards::card::Card;
use crate::cards::street::Street;
use crate::equity::Estimator;

pub const FLOP_CLUSTERS: usize = 50;
pub const TURN_CLUSTERS: usize = 50;
pub const RIVER_CLUSTERS: usize = 10;

/// trials used to seed the fast equity bucket; within the §4.4 budget of
/// 500-2000.
const FAST_BUCKET_TRIALS: usize = 1_000;

pub fn n_clusters(street: Street) -> usize {
    match street {
        Street::Pref => 169,
        Street::Flop => FLOP_CLUSTERS,
        Street::Turn => TURN_CLUSTERS,
        Street::Rive => RIVER_CLUSTERS,
    }
}

/// fast-mode postflop bucketing: run a small Monte-Carlo equity estimate
/// and quantize it into the stage's configured number of clusters. training
/// and inference must agree on this choice of strategy (vs. a k-means
/// histogram classifier), which is why it's a free function rather than a
/// pluggable trait: this repo only ships the fast strategy.
pub fn cluster(estimator: &mut Estimator, hero: [Card; 2], board: &[Card], street: Street) -> usize {
    let k = n_clusters(street);
    let equity = estimator.equity(hero, board, FAST_BUCKET_TRIALS);
    (equity * k as f32).floor().min(k as f32 - 1.0).max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;

    fn card(s: &str) -> Card {
        Card::parse(s).unwrap()
    }

    #[test]
    fn bucket_is_in_range_for_every_street() {
        let mut est = Estimator::seeded(9);
        for street in [Street::Flop, Street::Turn, Street::Rive] {
            let board: Vec<Card> = match street {
                Street::Flop => vec![card("2c"), card("7d"), card("9h")],
                Street::Turn => vec![card("2c"), card("7d"), card("9h"), card("Kc")],
                Street::Rive => vec![card("2c"), card("7d"), card("9h"), card("Kc"), card("Qs")],
                Street::Pref => unreachable!(),
            };
            let bucket = cluster(&mut est, [card("Ah"), card("As")], &board, street);
            assert!(bucket < n_clusters(street));
        }
    }

    #[test]
    fn strong_hand_lands_in_a_high_bucket() {
        let mut est = Estimator::seeded(9);
        let board = [card("2c"), card("7d"), card("9h")];
        let bucket = cluster(&mut est, [card("Ah"), card("As")], &board, Street::Flop);
        assert!(bucket >= FLOP_CLUSTERS / 2, "bucket was {bucket}");
    }
}
