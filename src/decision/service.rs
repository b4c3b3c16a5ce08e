use crate::abstraction;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cfr::{canonical_key, Action, Strategy};
use crate::equity::Estimator;
use crate::error::GameError;
use crate::live::state::State;
use crate::{Chips, Equity, Probability};
use rand::Rng;
use std::collections::HashMap;

/// the two trained strategy tables, loaded once per process and read-only
/// thereafter. either may be absent: a missing model is not fatal, it just
/// means every lookup on that street falls back to the equity heuristic.
#[derive(Debug, Clone, Default)]
pub struct Strategies {
    pub preflop: Option<Strategy>,
    pub postflop: Option<Strategy>,
}

#[derive(Debug, Clone)]
pub struct Decision {
    pub action: String,
    pub amount: Option<Chips>,
    pub equity: Equity,
    pub strategy: HashMap<String, Probability>,
}

pub fn recommend(state: &State, strategies: &Strategies, estimator: &mut Estimator, rng: &mut impl Rng) -> Result<Decision, GameError> {
    if state.hero_cards.len() != 2 {
        return Err(GameError::MissingHoleCards);
    }
    let hero = [state.hero_cards[0], state.hero_cards[1]];
    let equity = estimator.equity(hero, &state.board_cards, 1000);

    let to_call = state.to_call();
    let pot = state.pot;
    let stack = state.hero_stack;

    let stored = lookup_trained_strategy(state, strategies, hero);
    let strategy = stored.unwrap_or_else(|| equity_heuristic(equity, to_call, pot));

    let (action, amount) = sample_action(&strategy, rng.random(), to_call, pot, stack);

    Ok(Decision { action, amount, equity, strategy })
}

fn lookup_trained_strategy(state: &State, strategies: &Strategies, hero: [crate::cards::card::Card; 2]) -> Option<HashMap<String, Probability>> {
    let is_preflop = state.street == Street::Pref;
    let table = if is_preflop { strategies.preflop.as_ref()? } else { strategies.postflop.as_ref()? };

    // `assign` only touches the estimator on its postflop branch; preflop is
    // the lossless 169-class lookup and never samples.
    let hole = Hole::new(hero[0], hero[1]);
    let cluster = abstraction::assign(&mut Estimator::new(), hole, &state.board_cards, state.street);
    let actions: Vec<Action> = state.action_history.iter().filter(|a| a.street == state.street).map(|a| a.action).collect();
    let key = canonical_key(cluster, &actions);

    table.get(&key).map(|entry| entry.strategy.clone())
}

/// §4.8 step 4: the equity-heuristic fallback used when no trained strategy
/// covers this infoset.
fn equity_heuristic(equity: Equity, to_call: Chips, pot: Chips) -> HashMap<String, Probability> {
    let mut m = HashMap::new();
    if to_call == 0 {
        m.insert("check".to_string(), 1.0 - equity);
        m.insert("raise".to_string(), equity);
        return m;
    }

    let pot_odds = to_call as Probability / (pot + to_call) as Probability;
    if equity > pot_odds + 0.1 {
        m.insert("fold".to_string(), 0.0);
        m.insert("call".to_string(), 0.6);
        m.insert("raise".to_string(), 0.4);
    } else if equity > pot_odds {
        m.insert("fold".to_string(), 0.2);
        m.insert("call".to_string(), 0.7);
        m.insert("raise".to_string(), 0.1);
    } else {
        m.insert("fold".to_string(), 0.8);
        m.insert("call".to_string(), 0.2);
    }
    m
}

/// sample a concrete action from a (possibly abstract-token-keyed) strategy
/// distribution and translate it to a chip amount per §4.8 step 5.
fn sample_action(strategy: &HashMap<String, Probability>, roll: Probability, to_call: Chips, pot: Chips, stack: Chips) -> (String, Option<Chips>) {
    let total: Probability = strategy.values().sum();
    let mut items: Vec<(&String, Probability)> = strategy.iter().map(|(k, &v)| (k, v)).collect();
    items.sort_by(|a, b| a.0.cmp(b.0));

    let chosen = if total <= 0.0 {
        items.first().map(|(k, _)| k.as_str()).unwrap_or("call")
    } else {
        let target = roll * total;
        let mut acc = 0.0;
        let mut pick = items.last().map(|(k, _)| k.as_str()).unwrap_or("call");
        for (k, p) in &items {
            acc += p;
            if acc >= target {
                pick = k;
                break;
            }
        }
        pick
    };

    translate(chosen, to_call, pot, stack)
}

fn translate(token: &str, to_call: Chips, pot: Chips, stack: Chips) -> (String, Option<Chips>) {
    match token {
        "f" | "fold" => ("fold".to_string(), None),
        "k" | "check" => ("check".to_string(), None),
        "c" | "call" => ("call".to_string(), Some(to_call.min(stack))),
        "bMIN" | "raise" => {
            let amount = (to_call * 2).max(pot / 3).min(stack);
            ("raise".to_string(), Some(amount))
        }
        "bMID" => ("raise".to_string(), Some(pot.min(stack))),
        "bMAX" | "all-in" => ("raise".to_string(), Some(stack)),
        _ => ("call".to_string(), Some(to_call.min(stack))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::event::{Event, Player};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn missing_hole_cards_is_an_error_not_a_panic() {
        let state = State::new();
        let strategies = Strategies::default();
        let mut est = Estimator::seeded(1);
        let mut rng = SmallRng::seed_from_u64(1);
        let err = recommend(&state, &strategies, &mut est, &mut rng).unwrap_err();
        assert_eq!(err, GameError::MissingHoleCards);
    }

    #[test]
    fn falls_back_to_heuristic_with_no_trained_model() {
        let mut state = State::new();
        state.apply(Event::HandStart { hero_stack: 100, villain_stack: 100, small_blind: 1, big_blind: 2, hero_is_button: true }).unwrap();
        state.apply(Event::HoleCards { cards: ["Ah".into(), "As".into()] }).unwrap();
        state.apply(Event::Action { player: Player::Villain, action_type: Action::BetMax, amount: Some(98), street: crate::cards::street::Street::Pref }).unwrap();

        let strategies = Strategies::default();
        let mut est = Estimator::seeded(2);
        let mut rng = SmallRng::seed_from_u64(2);
        let decision = recommend(&state, &strategies, &mut est, &mut rng).unwrap();
        assert!(decision.equity > 0.5);
        assert!(!decision.strategy.is_empty());
    }
}
