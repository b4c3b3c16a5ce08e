use crate::cards::hole::Hole;
use crate::cards::rank::Rank;

/// the lossless preflop abstraction: every one of the 1326 ordered two-card
/// deals collapses to one of 169 canonical classes (13 pairs, 78 unsuited
/// combos, 78 suited combos), a bijection fixed once and embedded in every
/// trained key.
pub fn cluster(hole: Hole) -> u16 {
    let [a, b] = hole.cards();
    let ra = a.rank().index();
    let rb = b.rank().index();
    let suited = a.suit() == b.suit();

    let lo = ra.min(rb);
    let hi = ra.max(rb);

    if lo == hi {
        lo as u16
    } else if !suited {
        13 + pair_index(lo, hi)
    } else {
        91 + pair_index(lo, hi)
    }
}

/// index of the unordered rank pair `(lo, hi)`, `lo < hi`, both in `1..=13`,
/// among the 78 canonical pairs. `sum_to(n)` is the count of pairs whose low
/// rank is strictly below `n`; it's a triangular number running downward
/// from 12, not the more familiar `n*(n-1)/2` — this exact offset is load
/// bearing because every trained strategy key embeds it.
fn pair_index(lo: u8, hi: u8) -> u16 {
    fn sum_to(n: u8) -> u16 {
        if n <= 1 {
            return 0;
        }
        let count = (n - 1) as u16;
        count * (12 + 12 - (n as u16 - 2)) / 2
    }
    sum_to(lo) + (hi - lo) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;

    fn hole(a: &str, b: &str) -> Hole {
        Hole::new(Card::parse(a).unwrap(), Card::parse(b).unwrap())
    }

    #[test]
    fn suited_combos_are_suit_invariant() {
        assert_eq!(cluster(hole("Ah", "Kh")), cluster(hole("As", "Ks")));
    }

    #[test]
    fn suited_and_offsuit_of_same_ranks_differ() {
        assert_ne!(cluster(hole("Ah", "Kh")), cluster(hole("Ah", "Kd")));
    }

    #[test]
    fn card_order_does_not_matter() {
        assert_eq!(cluster(hole("Ah", "Kh")), cluster(hole("Kh", "Ah")));
    }

    #[test]
    fn clusters_fall_in_the_documented_ranges() {
        assert!((1..=169).contains(&cluster(hole("Ah", "As"))));
        let offsuit = cluster(hole("Ah", "Kd"));
        assert!((14..=91).contains(&offsuit));
        let suited = cluster(hole("Ah", "Kh"));
        assert!((92..=169).contains(&suited));
    }

    #[test]
    fn pairs_map_to_the_first_thirteen_clusters() {
        for rank in 1..=13u8 {
            let r = Rank::from(rank - 1);
            let hole = Hole::new(
                Card::new(r, crate::cards::suit::Suit::Club),
                Card::new(r, crate::cards::suit::Suit::Diamond),
            );
            assert_eq!(cluster(hole), rank as u16);
        }
    }

    #[test]
    fn is_a_bijection_on_canonical_classes() {
        use crate::cards::suit::Suit;
        let ranks: Vec<Rank> = (0..13u8).map(Rank::from).collect();
        let mut seen = std::collections::HashSet::new();
        for &ra in &ranks {
            for &rb in &ranks {
                for suited in [true, false] {
                    if ra == rb && !suited {
                        continue; // pairs have no offsuit/suited distinction
                    }
                    let sb = if suited { Suit::Club } else { Suit::Diamond };
                    let hole = Hole::new(Card::new(ra, Suit::Club), Card::new(rb, sb));
                    seen.insert(cluster(hole));
                }
            }
        }
        assert_eq!(seen.len(), 169);
    }
}
