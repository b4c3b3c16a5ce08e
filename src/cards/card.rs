use super::{rank::Rank, suit::Suit};
use crate::error::CardError;
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn to_int(&self) -> u8 {
        (self.rank as u8) * 4 + (self.suit as u8)
    }
    pub fn to_bits(&self) -> u64 {
        1 << u8::from(*self)
    }
    /// parse a canonical 2-char card string; `10x` is accepted as a synonym for `Tx`.
    pub fn parse(s: &str) -> std::result::Result<Self, CardError> {
        let s = if s.starts_with("10") {
            format!("T{}", &s[2..])
        } else {
            s.to_string()
        };
        let mut chars = s.chars();
        let rank = chars
            .next()
            .ok_or_else(|| CardError::InvalidCard(s.clone()))?;
        let suit = chars
            .next()
            .ok_or_else(|| CardError::InvalidCard(s.clone()))?;
        if chars.next().is_some() {
            return Err(CardError::InvalidCard(s));
        }
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl FromStr for Card {
    type Err = CardError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (c.rank as u8) * 4 + (c.suit as u8)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

// u64 isomorphism, single set bit at the card's index
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self {
            rank: Rank::from((n.trailing_zeros() / 4) as u8),
            suit: Suit::from((n.trailing_zeros() % 4) as u8),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_form() {
        let card = Card::parse("Ah").unwrap();
        assert_eq!(card.rank(), Rank::Ace);
        assert_eq!(card.suit(), Suit::Heart);
    }

    #[test]
    fn ten_prefix_is_synonym_for_t() {
        assert_eq!(Card::parse("10s").unwrap(), Card::parse("Ts").unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Card::parse("Zx").is_err());
        assert!(Card::parse("A").is_err());
    }

    #[test]
    fn round_trips_all_52() {
        for i in 0..52u8 {
            let card = Card::from(i);
            let text = card.to_string();
            assert_eq!(Card::parse(&text).unwrap(), card);
        }
    }

    #[test]
    fn u8_isomorphism_round_trips() {
        for i in 0..52u8 {
            assert_eq!(u8::from(Card::from(i)), i);
        }
    }
}
