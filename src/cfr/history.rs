use crate::abstraction::Cluster;
use crate::cards::street::Street;
use crate::cfr::action::Action;
use crate::cfr::dataset::{Deal, Dataset};
use crate::{Chips, Utility};

/// a token in an abstract history. chance tokens don't carry the actual
/// dealt cards: the real cards for a given training iteration live in the
/// `Dataset`, indexed by the sample id. the token only marks *that* a chance
/// event of this kind occurred, which is all `actions`/`is_terminal`/`player`
/// need to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Hero,
    Villain,
    Sep,
    Flop,
    Turn,
    River,
    Board,
    Act(Action),
}

/// the abstract game a CFR solver trains against. preflop and postflop play
/// are different trees with different token vocabularies and pot math, so
/// each gets its own implementing type rather than one history parameterized
/// by street.
pub trait History: Sized + Clone {
    fn sample_id(&self) -> usize;
    fn tokens(&self) -> &[Token];
    fn push(&self, token: Token) -> Self;

    fn is_chance(&self) -> bool {
        self.player().is_none()
    }

    fn player(&self) -> Option<usize>;
    fn is_terminal(&self) -> bool;
    fn actions(&self) -> Vec<Action>;

    /// append the next deterministic chance token for the pending event.
    fn sample_chance_outcome(&self) -> Self;

    fn extend(&self, action: Action) -> Self {
        self.push(Token::Act(action))
    }

    fn terminal_utility(&self, dataset: &Dataset, player: usize) -> Utility;
    fn infoset_key(&self, dataset: &Dataset) -> String;
}

fn stage_count(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| **t == Token::Sep).count()
}

fn last_stage(tokens: &[Token]) -> &[Token] {
    match tokens.iter().rposition(|t| *t == Token::Sep) {
        Some(i) => &tokens[i + 1..],
        None => tokens,
    }
}

fn action_token(t: &Token) -> Option<Action> {
    match t {
        Token::Act(a) => Some(*a),
        _ => None,
    }
}

fn street_of_stage(stage: &[Token]) -> Option<Street> {
    stage.iter().find_map(|t| match t {
        Token::Flop => Some(Street::Flop),
        Token::Turn => Some(Street::Turn),
        Token::River => Some(Street::Rive),
        _ => None,
    })
}

/// the canonical infoset key: the acting player's cluster for the street
/// currently being contested, followed by this street's abstract action
/// tokens so far. shared by every `History` impl and by the decision
/// service's inference-time lookup, so a trained key and a live lookup key
/// are built identically.
pub fn canonical_key(cluster: Cluster, actions: &[Action]) -> String {
    let mut key = cluster.to_string();
    for a in actions {
        key.push_str(a.token());
    }
    key
}

#[derive(Debug, Clone)]
pub struct PreflopHistory {
    tokens: Vec<Token>,
    sample_id: usize,
}

impl PreflopHistory {
    pub fn new(sample_id: usize) -> Self {
        Self { tokens: Vec::new(), sample_id }
    }

    fn stage_ended(&self) -> bool {
        let t = &self.tokens;
        let last = t.last();
        let is_call = matches!(last, Some(Token::Act(Action::Call))) && t.len() > 3;
        let is_fold = matches!(last, Some(Token::Act(Action::Fold)));
        let is_check_after_call = t.len() >= 2
            && matches!(t[t.len() - 2], Token::Act(Action::Call))
            && matches!(t[t.len() - 1], Token::Act(Action::Check));
        is_call || is_fold || is_check_after_call
    }

    /// pot-size rules for the preflop tree: stake doubling on `bMIN`/`bMID`,
    /// stack-sized `bMAX`, call matches, starting from 1 SB + 1 BB.
    fn pot_size(tokens: &[Token]) -> (Chips, Chips) {
        let mut stage_total: Chips = 3;
        let mut latest_bet: Chips = 2;
        for tok in tokens {
            match action_token(tok) {
                Some(Action::BetMin) => {
                    let old = stage_total;
                    stage_total = latest_bet + stage_total;
                    latest_bet = old;
                }
                Some(Action::BetMid) => {
                    let old = stage_total;
                    stage_total = latest_bet + 2 * stage_total;
                    latest_bet = 2 * old;
                }
                Some(Action::BetMax) => {
                    stage_total = latest_bet + crate::STACK;
                    latest_bet = crate::STACK;
                }
                Some(Action::Call) => {
                    stage_total = 2 * latest_bet;
                }
                _ => {}
            }
        }
        (stage_total, latest_bet)
    }
}

impl History for PreflopHistory {
    fn sample_id(&self) -> usize {
        self.sample_id
    }

    fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn push(&self, token: Token) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Self { tokens, sample_id: self.sample_id }
    }

    fn player(&self) -> Option<usize> {
        if self.tokens.len() < 2 {
            return None;
        }
        if self.stage_ended() {
            return None;
        }
        if matches!(self.tokens.last(), Some(Token::Sep)) {
            return None;
        }
        Some((self.tokens.len() + 1) % 2)
    }

    fn is_terminal(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::Board))
    }

    fn actions(&self) -> Vec<Action> {
        if self.is_chance() || self.is_terminal() {
            return Vec::new();
        }
        if self.tokens.len() == 2 {
            return vec![Action::Call, Action::BetMin, Action::BetMid, Action::BetMax, Action::Fold];
        }
        match self.tokens.last() {
            Some(Token::Act(Action::BetMin)) => vec![Action::BetMid, Action::BetMax, Action::Fold, Action::Call],
            Some(Token::Act(Action::BetMid)) => vec![Action::BetMax, Action::Fold, Action::Call],
            Some(Token::Act(Action::BetMax)) => vec![Action::Fold, Action::Call],
            _ => vec![Action::Check, Action::BetMin, Action::BetMid, Action::BetMax],
        }
    }

    fn sample_chance_outcome(&self) -> Self {
        let token = if self.tokens.is_empty() {
            Token::Hero
        } else if self.tokens.len() == 1 {
            Token::Villain
        } else if !matches!(self.tokens.last(), Some(Token::Sep)) {
            Token::Sep
        } else {
            Token::Board
        };
        self.push(token)
    }

    fn terminal_utility(&self, dataset: &Dataset, player: usize) -> Utility {
        let deal = dataset.sample(self.sample_id);
        let (pot_size, _) = Self::pot_size(&self.tokens);

        if let Some(fold_idx) = self.tokens.iter().position(|t| matches!(t, Token::Act(Action::Fold))) {
            let (mut pot_size, latest_bet) = Self::pot_size(&self.tokens[..fold_idx - 1]);
            if matches!(self.tokens[fold_idx - 2], Token::Act(Action::BetMin) | Token::Act(Action::BetMid)) {
                pot_size += latest_bet;
            }
            return if self.tokens.len() % 2 == player {
                -(pot_size as Utility) / 2.0
            } else {
                pot_size as Utility / 2.0
            };
        }

        if deal.winner == 0 {
            return 0.0;
        }
        if (deal.winner > 0 && player == 0) || (deal.winner < 0 && player == 1) {
            pot_size as Utility / 2.0
        } else {
            -(pot_size as Utility) / 2.0
        }
    }

    fn infoset_key(&self, dataset: &Dataset) -> String {
        let player = self.player().unwrap_or(0);
        let deal = dataset.sample(self.sample_id);
        let hole = if player == 0 {
            crate::cards::hole::Hole::new(deal.hero[0], deal.hero[1])
        } else {
            crate::cards::hole::Hole::new(deal.villain[0], deal.villain[1])
        };
        let cluster = Cluster::Preflop(crate::abstraction::preflop::cluster(hole));
        let actions: Vec<Action> = self.tokens.iter().filter_map(action_token).collect();
        canonical_key(cluster, &actions)
    }
}

#[derive(Debug, Clone)]
pub struct PostflopHistory {
    tokens: Vec<Token>,
    sample_id: usize,
}

impl PostflopHistory {
    pub fn new(sample_id: usize) -> Self {
        Self { tokens: Vec::new(), sample_id }
    }

    fn stage_ended(&self) -> bool {
        let t = &self.tokens;
        match t.last() {
            Some(Token::Act(Action::Call)) | Some(Token::Act(Action::Fold)) => true,
            _ => {
                t.len() >= 2
                    && matches!(t[t.len() - 2], Token::Act(Action::Check))
                    && matches!(t[t.len() - 1], Token::Act(Action::Check))
            }
        }
    }

    /// pot-size rules for the postflop tree: a street-separator folds the
    /// running stage total into the pot and resets the latest bet, starting
    /// the board from 1 SB + 1 BB already committed preflop.
    fn pot_size(tokens: &[Token]) -> (Chips, Chips) {
        let mut total: Chips = 0;
        let mut stage_total: Chips = 4;
        let mut latest_bet: Chips = 0;
        for tok in tokens {
            match tok {
                Token::Sep => {
                    total += stage_total;
                    stage_total = 0;
                    latest_bet = 0;
                }
                Token::Act(Action::BetMin) => {
                    latest_bet = (total / 3).max(2);
                    stage_total += latest_bet;
                }
                Token::Act(Action::BetMax) => {
                    latest_bet = total;
                    stage_total += latest_bet;
                }
                Token::Act(Action::Call) => {
                    stage_total = 2 * latest_bet;
                }
                _ => {}
            }
        }
        total += stage_total;
        (total, latest_bet)
    }
}

impl History for PostflopHistory {
    fn sample_id(&self) -> usize {
        self.sample_id
    }

    fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn push(&self, token: Token) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Self { tokens, sample_id: self.sample_id }
    }

    fn player(&self) -> Option<usize> {
        if self.tokens.len() <= 3 {
            return None;
        }
        if self.stage_ended() {
            return None;
        }
        if matches!(self.tokens.last(), Some(Token::Sep)) {
            return None;
        }
        Some((last_stage(&self.tokens).len() + 1) % 2)
    }

    fn is_terminal(&self) -> bool {
        let folded = matches!(self.tokens.last(), Some(Token::Act(Action::Fold)));
        let showdown = stage_count(&self.tokens) == 3 && self.stage_ended();
        folded || showdown
    }

    fn actions(&self) -> Vec<Action> {
        if self.is_chance() || self.is_terminal() {
            return Vec::new();
        }
        let t = &self.tokens;
        if matches!(t.last(), Some(Token::Act(Action::Check))) {
            vec![Action::Check, Action::BetMin, Action::BetMax]
        } else if t.len() >= 2
            && matches!(t[t.len() - 2], Token::Act(Action::Check))
            && matches!(t[t.len() - 1], Token::Act(Action::BetMin))
        {
            vec![Action::Fold, Action::Call]
        } else if matches!(t.last(), Some(Token::Act(Action::BetMin))) {
            vec![Action::BetMax, Action::Fold, Action::Call]
        } else if matches!(t.last(), Some(Token::Act(Action::BetMax))) {
            vec![Action::Fold, Action::Call]
        } else {
            vec![Action::Check, Action::BetMin, Action::BetMax]
        }
    }

    fn sample_chance_outcome(&self) -> Self {
        let token = if self.tokens.is_empty() {
            Token::Hero
        } else if self.tokens.len() == 1 {
            Token::Villain
        } else if !matches!(self.tokens.last(), Some(Token::Sep)) {
            Token::Sep
        } else {
            match stage_count(&self.tokens) {
                1 => Token::Flop,
                2 => Token::Turn,
                _ => Token::River,
            }
        };
        self.push(token)
    }

    fn terminal_utility(&self, dataset: &Dataset, player: usize) -> Utility {
        let deal = dataset.sample(self.sample_id);
        let (pot_size, _) = Self::pot_size(&self.tokens);

        if matches!(self.tokens.last(), Some(Token::Act(Action::Fold))) {
            let cut = self.tokens.len() - 2;
            let (mut pot_size, latest_bet) = Self::pot_size(&self.tokens[..cut]);
            if matches!(self.tokens[self.tokens.len() - 3], Token::Act(Action::BetMin)) {
                pot_size += latest_bet;
            }
            return if last_stage(&self.tokens).len() % 2 == player {
                -(pot_size as Utility) / 2.0
            } else {
                pot_size as Utility / 2.0
            };
        }

        if deal.winner == 0 {
            return 0.0;
        }
        if (deal.winner > 0 && player == 0) || (deal.winner < 0 && player == 1) {
            pot_size as Utility / 2.0
        } else {
            -(pot_size as Utility) / 2.0
        }
    }

    fn infoset_key(&self, dataset: &Dataset) -> String {
        let player = self.player().unwrap_or(0);
        let deal = dataset.sample(self.sample_id);
        let stage = last_stage(&self.tokens);
        let street = street_of_stage(stage).unwrap_or(Street::Flop);
        let cluster = Cluster::Postflop(street_cluster(deal, street, player));
        let actions: Vec<Action> = stage.iter().filter_map(action_token).collect();
        canonical_key(cluster, &actions)
    }
}

fn street_cluster(deal: &Deal, street: Street, player: usize) -> usize {
    match (street, player) {
        (Street::Flop, 0) => deal.hero_flop_cluster,
        (Street::Flop, _) => deal.villain_flop_cluster,
        (Street::Turn, 0) => deal.hero_turn_cluster,
        (Street::Turn, _) => deal.villain_turn_cluster,
        (_, 0) => deal.hero_river_cluster,
        (_, _) => deal.villain_river_cluster,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::Estimator;

    #[test]
    fn preflop_limp_check_reaches_showdown() {
        let h = PreflopHistory::new(0);
        let h = h.sample_chance_outcome(); // hero
        let h = h.sample_chance_outcome(); // villain
        assert_eq!(h.actions(), vec![Action::Call, Action::BetMin, Action::BetMid, Action::BetMax, Action::Fold]);
        let h = h.extend(Action::Call);
        assert!(!h.is_terminal());
        let h = h.extend(Action::Check);
        assert!(h.is_chance());
        let h = h.sample_chance_outcome(); // separator
        let h = h.sample_chance_outcome(); // board
        assert!(h.is_terminal());
    }

    #[test]
    fn postflop_bet_fold_is_terminal() {
        let h = PostflopHistory::new(0);
        let h = h.sample_chance_outcome();
        let h = h.sample_chance_outcome();
        let h = h.sample_chance_outcome();
        let h = h.sample_chance_outcome(); // flop
        let h = h.extend(Action::BetMin);
        let h = h.extend(Action::Fold);
        assert!(h.is_terminal());
    }

    #[test]
    fn terminal_utilities_are_zero_sum_on_a_fold() {
        let mut est = Estimator::seeded(1);
        let dataset = Dataset::generate(8, &mut est);
        let h = PostflopHistory::new(0);
        let h = h.sample_chance_outcome();
        let h = h.sample_chance_outcome();
        let h = h.sample_chance_outcome();
        let h = h.sample_chance_outcome();
        let h = h.extend(Action::BetMin);
        let h = h.extend(Action::Fold);
        let u0 = h.terminal_utility(&dataset, 0);
        let u1 = h.terminal_utility(&dataset, 1);
        assert!((u0 + u1).abs() < 1e-6);
    }
}
