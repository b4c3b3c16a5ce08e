use crate::cfr::action::Action;
use crate::Probability;
use std::collections::HashMap;

/// what a player knows at a decision point: their private cluster plus the
/// public abstract action sequence so far. created lazily on first visit
/// during training, mutated only by the acting player's CFR update, never
/// destroyed.
pub struct InfoSet {
    actions: Vec<Action>,
    regret: HashMap<Action, Probability>,
    cumulative_strategy: HashMap<Action, Probability>,
}

impl InfoSet {
    pub fn new(actions: Vec<Action>) -> Self {
        let regret = actions.iter().map(|&a| (a, 0.0)).collect();
        let cumulative_strategy = actions.iter().map(|&a| (a, 0.0)).collect();
        Self { actions, regret, cumulative_strategy }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// regret matching: every regret floored at `POLICY_MIN` before
    /// normalizing, so the strategy is always well-defined without a
    /// separate uniform-fallback branch.
    pub fn strategy(&self) -> HashMap<Action, Probability> {
        let total: Probability = self.regret.values().map(|&r| r.max(crate::POLICY_MIN)).sum();
        self.regret.iter().map(|(&a, &r)| (a, r.max(crate::POLICY_MIN) / total)).collect()
    }

    pub fn add_regret(&mut self, action: Action, amount: Probability) {
        let slot = self.regret.get_mut(&action).expect("action in infoset");
        *slot = (*slot + amount).max(crate::REGRET_MIN);
    }

    pub fn add_cumulative_strategy(&mut self, action: Action, amount: Probability) {
        *self.cumulative_strategy.get_mut(&action).expect("action in infoset") += amount;
    }

    /// the time-averaged strategy: the CFR equilibrium approximation. this
    /// is the only view ever exported to a strategy artifact.
    pub fn average_strategy(&self) -> HashMap<Action, Probability> {
        let total: Probability = self.cumulative_strategy.values().map(|&s| s.max(crate::POLICY_MIN)).sum();
        self.cumulative_strategy.iter().map(|(&a, &s)| (a, s.max(crate::POLICY_MIN) / total)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_strategy_with_no_regret() {
        let info = InfoSet::new(vec![Action::Check, Action::BetMin]);
        let s = info.strategy();
        assert!((s[&Action::Check] - 0.5).abs() < 1e-6);
        assert!((s[&Action::BetMin] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn negative_regret_floors_to_zero_weight() {
        let mut info = InfoSet::new(vec![Action::Check, Action::BetMin]);
        info.add_regret(Action::Check, -5.0);
        info.add_regret(Action::BetMin, 5.0);
        let s = info.strategy();
        assert!(s[&Action::Check] < 1e-6);
        assert!((s[&Action::BetMin] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn average_strategy_sums_to_one() {
        let mut info = InfoSet::new(vec![Action::Check, Action::BetMin, Action::BetMax]);
        info.add_cumulative_strategy(Action::Check, 3.0);
        info.add_cumulative_strategy(Action::BetMin, 1.0);
        let avg = info.average_strategy();
        let sum: Probability = avg.values().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }
}
