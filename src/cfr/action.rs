use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// the abstract action alphabet. preflop trees use all six; postflop trees
/// never produce `BetMid` (see §4.5/§6 of the design).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Check,
    Call,
    Fold,
    BetMin,
    BetMid,
    BetMax,
}

impl Action {
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Check => "k",
            Self::Call => "c",
            Self::Fold => "f",
            Self::BetMin => "bMIN",
            Self::BetMid => "bMID",
            Self::BetMax => "bMAX",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "k" => Some(Self::Check),
            "c" => Some(Self::Call),
            "f" => Some(Self::Fold),
            "bMIN" => Some(Self::BetMin),
            "bMID" => Some(Self::BetMid),
            "bMAX" => Some(Self::BetMax),
            _ => None,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.token())
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Action::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown action token: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for a in [Action::Check, Action::Call, Action::Fold, Action::BetMin, Action::BetMid, Action::BetMax] {
            assert_eq!(Action::parse(a.token()), Some(a));
        }
    }
}
