use crate::cards::card::Card;
use crate::cards::street::Street;
use crate::cfr::Action;
use crate::error::GameError;
use crate::live::event::{Event, Player};
use crate::Chips;

/// one concrete action as recorded in the visible history, independent of
/// the abstract token stream used for infoset lookups.
#[derive(Debug, Clone, Copy)]
pub struct ConcreteAction {
    pub player: Player,
    pub action: Action,
    pub amount: Option<Chips>,
    pub street: Street,
}

/// one hand-in-progress. the state machine is the only writer of the
/// chip/bet fields; anything reading state (analysis, the iOS mirror) never
/// mutates it. a fresh `State` starts reset, waiting for `hand_start`.
#[derive(Debug, Clone)]
pub struct State {
    pub hand_number: u32,
    pub street: Street,
    pub hero_cards: Vec<Card>,
    pub board_cards: Vec<Card>,

    pub hero_stack: Chips,
    pub villain_stack: Chips,
    starting_hero_stack: Chips,
    starting_villain_stack: Chips,

    pub small_blind: Chips,
    pub big_blind: Chips,
    pub hero_is_button: bool,

    pub pot: Chips,
    pub hero_invested: Chips,
    pub villain_invested: Chips,

    pub hero_to_act: bool,
    pub hand_over: bool,

    pub action_history: Vec<ConcreteAction>,
    pub abstract_history: Vec<Action>,
}

impl State {
    pub fn new() -> Self {
        Self {
            hand_number: 0,
            street: Street::Pref,
            hero_cards: Vec::new(),
            board_cards: Vec::new(),
            hero_stack: 0,
            villain_stack: 0,
            starting_hero_stack: 0,
            starting_villain_stack: 0,
            small_blind: 1,
            big_blind: 2,
            hero_is_button: true,
            pot: 0,
            hero_invested: 0,
            villain_invested: 0,
            hero_to_act: false,
            hand_over: false,
            action_history: Vec::new(),
            abstract_history: Vec::new(),
        }
    }

    fn reset(&mut self) {
        let hand_number = self.hand_number;
        *self = Self::new();
        self.hand_number = hand_number;
    }

    /// dispatch one inference-boundary event. the only entry point callers
    /// should use; unknown event kinds are a caller bug, surfaced as an
    /// error rather than ignored.
    pub fn apply(&mut self, event: Event) -> Result<(), GameError> {
        match event {
            Event::HandStart { hero_stack, villain_stack, small_blind, big_blind, hero_is_button } => {
                self.start_hand(hero_stack, villain_stack, small_blind, big_blind, hero_is_button);
                Ok(())
            }
            Event::HoleCards { cards } => self.set_hole_cards(cards),
            Event::BoardUpdate { cards, street } => self.update_board(cards, street),
            Event::Action { player, action_type, amount, street } => {
                self.process_action(player, action_type, amount, street)
            }
            Event::HandEnd { winner, .. } => {
                self.end_hand(winner);
                Ok(())
            }
            Event::RequestAnalysis => Ok(()),
            Event::Unknown => Err(GameError::UnknownEvent("unrecognized event_type".into())),
        }
    }

    fn start_hand(&mut self, hero_stack: Chips, villain_stack: Chips, small_blind: Chips, big_blind: Chips, hero_is_button: bool) {
        self.reset();
        self.hand_number += 1;

        self.hero_stack = hero_stack;
        self.villain_stack = villain_stack;
        self.starting_hero_stack = hero_stack;
        self.starting_villain_stack = villain_stack;
        self.small_blind = small_blind;
        self.big_blind = big_blind;
        self.hero_is_button = hero_is_button;

        if hero_is_button {
            let sb = small_blind.min(self.hero_stack);
            let bb = big_blind.min(self.villain_stack);
            self.hero_invested = sb;
            self.villain_invested = bb;
            self.hero_stack -= sb;
            self.villain_stack -= bb;
            self.hero_to_act = true;
        } else {
            let sb = small_blind.min(self.villain_stack);
            let bb = big_blind.min(self.hero_stack);
            self.villain_invested = sb;
            self.hero_invested = bb;
            self.villain_stack -= sb;
            self.hero_stack -= bb;
            self.hero_to_act = false;
        }

        self.pot = self.hero_invested + self.villain_invested;
    }

    fn set_hole_cards(&mut self, cards: [String; 2]) -> Result<(), GameError> {
        let a = Card::parse(&cards[0])?;
        let b = Card::parse(&cards[1])?;
        self.hero_cards = vec![a, b];
        Ok(())
    }

    fn update_board(&mut self, cards: Vec<String>, street: Street) -> Result<(), GameError> {
        let parsed: Result<Vec<Card>, _> = cards.iter().map(|c| Card::parse(c)).collect();
        self.board_cards = parsed?;
        self.street = street;
        if street != Street::Pref {
            self.hero_to_act = !self.hero_is_button;
        }
        Ok(())
    }

    fn process_action(&mut self, player: Player, action_type: Action, amount: Option<Chips>, street: Street) -> Result<(), GameError> {
        let is_hero = player == Player::Hero;
        self.validate_action(is_hero, action_type, amount)?;

        self.action_history.push(ConcreteAction { player, action: action_type, amount, street });
        self.abstract_history.push(action_type);

        match action_type {
            Action::Fold => {
                self.hand_over = true;
                return Ok(());
            }
            Action::Check => {}
            Action::Call => {
                if is_hero {
                    let call = (self.villain_invested - self.hero_invested).min(self.hero_stack);
                    self.hero_invested += call;
                    self.hero_stack -= call;
                } else {
                    let call = (self.hero_invested - self.villain_invested).min(self.villain_stack);
                    self.villain_invested += call;
                    self.villain_stack -= call;
                }
            }
            Action::BetMin | Action::BetMid | Action::BetMax => {
                let amount = amount.unwrap_or(0).max(0);
                if is_hero {
                    let amount = amount.min(self.hero_stack);
                    self.hero_invested += amount;
                    self.hero_stack -= amount;
                } else {
                    let amount = amount.min(self.villain_stack);
                    self.villain_invested += amount;
                    self.villain_stack -= amount;
                }
            }
        }

        self.pot = self.hero_invested + self.villain_invested;
        self.hero_to_act = !is_hero;
        Ok(())
    }

    fn validate_action(&self, is_hero: bool, action_type: Action, amount: Option<Chips>) -> Result<(), GameError> {
        let to_call = if is_hero {
            self.villain_invested - self.hero_invested
        } else {
            self.hero_invested - self.villain_invested
        };
        let stack = if is_hero { self.hero_stack } else { self.villain_stack };

        match action_type {
            Action::Check if to_call > 0 => {
                Err(GameError::IllegalAction("cannot check while facing a bet".into()))
            }
            Action::BetMin | Action::BetMid | Action::BetMax => {
                let amount = amount.unwrap_or(0);
                if amount > stack {
                    Err(GameError::IllegalAction("bet exceeds stack".into()))
                } else if amount < to_call {
                    Err(GameError::IllegalAction("bet below call price".into()))
                } else if to_call > 0 && amount == to_call {
                    Err(GameError::IllegalAction("bet equal to existing call price, use call instead".into()))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    fn end_hand(&mut self, winner: Option<Player>) {
        self.hand_over = true;
        match winner {
            Some(Player::Hero) => self.hero_stack += self.pot,
            Some(Player::Villain) => self.villain_stack += self.pot,
            None => {
                self.hero_stack += self.pot / 2;
                self.villain_stack += self.pot - self.pot / 2;
            }
        }
    }

    pub fn to_call(&self) -> Chips {
        (self.villain_invested - self.hero_invested).max(0)
    }

    pub fn starting_stacks(&self) -> (Chips, Chips) {
        (self.starting_hero_stack, self.starting_villain_stack)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pot_bookkeeping_scenario() {
        let mut state = State::new();
        state.apply(Event::HandStart {
            hero_stack: 500,
            villain_stack: 500,
            small_blind: 1,
            big_blind: 2,
            hero_is_button: true,
        }).unwrap();
        state.apply(Event::HoleCards { cards: ["Ah".into(), "Kd".into()] }).unwrap();
        state.apply(Event::Action {
            player: Player::Hero,
            action_type: Action::BetMax,
            amount: Some(500),
            street: Street::Pref,
        }).unwrap();
        state.apply(Event::Action {
            player: Player::Villain,
            action_type: Action::Call,
            amount: Some(499),
            street: Street::Pref,
        }).unwrap();

        assert_eq!(state.pot, 1000);
        assert_eq!(state.hero_invested, 500);
        assert_eq!(state.villain_invested, 500);
    }

    #[test]
    fn checking_into_a_bet_is_rejected() {
        let mut state = State::new();
        state.apply(Event::HandStart {
            hero_stack: 100,
            villain_stack: 100,
            small_blind: 1,
            big_blind: 2,
            hero_is_button: true,
        }).unwrap();
        let before = state.hero_invested;
        let err = state
            .apply(Event::Action { player: Player::Hero, action_type: Action::Check, amount: None, street: Street::Pref })
            .unwrap_err();
        assert!(matches!(err, GameError::IllegalAction(_)));
        assert_eq!(state.hero_invested, before);
    }
}
