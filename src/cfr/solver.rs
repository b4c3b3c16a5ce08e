use crate::cfr::dataset::Dataset;
use crate::cfr::history::History;
use crate::cfr::infoset::InfoSet;
use crate::cfr::strategy::Strategy;
use crate::Probability;
use std::collections::HashMap;

/// trains one of the two abstract trees (preflop or postflop) against a
/// precomputed chance dataset. owns the infoset table during training; at
/// export time an immutable snapshot is produced.
pub struct Solver<H: History> {
    dataset: Dataset,
    infosets: HashMap<String, InfoSet>,
    _marker: std::marker::PhantomData<H>,
}

impl<H: History> Solver<H> {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, infosets: HashMap::new(), _marker: std::marker::PhantomData }
    }

    pub fn len(&self) -> usize {
        self.infosets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infosets.is_empty()
    }

    /// run `iterations` rounds of vanilla CFR, two passes per round so both
    /// players update their information sets.
    pub fn train(&mut self, iterations: usize, build_root: &impl Fn(usize) -> H) {
        for t in 0..iterations {
            for player in 0..crate::N {
                let root = build_root(t);
                self.cfr(&root, player, 1.0, 1.0);
            }
        }
    }

    fn cfr(&mut self, h: &H, player: usize, pi0: Probability, pi1: Probability) -> Probability {
        if h.is_terminal() {
            return h.terminal_utility(&self.dataset, player);
        }
        if h.is_chance() {
            let outcome = h.sample_chance_outcome();
            return self.cfr(&outcome, player, pi0, pi1);
        }

        let acting = h.player().expect("not chance, not terminal");
        let key = h.infoset_key(&self.dataset);
        let actions = h.actions();
        self.infosets.entry(key.clone()).or_insert_with(|| InfoSet::new(actions.clone()));

        let strategy = self.infosets[&key].strategy();

        let mut v = 0.0;
        let mut va = HashMap::with_capacity(actions.len());
        for &a in &actions {
            let sigma = strategy[&a];
            let child = h.extend(a);
            let value = if acting == 0 {
                self.cfr(&child, player, sigma * pi0, pi1)
            } else {
                self.cfr(&child, player, pi0, sigma * pi1)
            };
            va.insert(a, value);
            v += sigma * value;
        }

        if acting == player {
            let (opponent_reach, own_reach) = if player == 0 { (pi1, pi0) } else { (pi0, pi1) };
            let info = self.infosets.get_mut(&key).expect("just inserted");
            for &a in &actions {
                info.add_regret(a, opponent_reach * (va[&a] - v));
                info.add_cumulative_strategy(a, own_reach * strategy[&a]);
            }
        }

        v
    }

    /// freeze the trained table into a read-only export. the in-memory
    /// regret values are never exported, only the time-averaged strategy.
    pub fn export(&self) -> Strategy {
        Strategy::from_infosets(&self.infosets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfr::history::PostflopHistory;
    use crate::equity::Estimator;

    #[test]
    fn training_populates_infosets_and_converges_in_sign() {
        let mut est = Estimator::seeded(1);
        let dataset = Dataset::generate(64, &mut est);
        let mut solver: Solver<PostflopHistory> = Solver::new(dataset);
        solver.train(200, &PostflopHistory::new);
        assert!(!solver.is_empty());
        let strategy = solver.export();
        for dist in strategy.distributions() {
            let sum: Probability = dist.values().sum();
            assert!((sum - 1.0).abs() < 1e-4);
        }
    }
}
