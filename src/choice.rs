use super::*;
use rand::Rng;

/// One of the three hands a player can throw.
///
/// The discriminants index the rows and columns of the rule table in
/// [`Outcome::resolve`], so the order here is load-bearing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Stone = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    pub const fn all() -> [Self; 3] {
        [Choice::Stone, Choice::Paper, Choice::Scissors]
    }
    /// Whether this hand defeats the other under cyclic dominance.
    pub fn beats(&self, other: &Self) -> bool {
        Outcome::resolve(*self, *other) == Outcome::UserWins
    }
    /// The lowercase token typed at the prompt.
    pub const fn token(&self) -> &'static str {
        match self {
            Choice::Stone => "stone",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Choice {
    fn from(n: u8) -> Self {
        match n {
            0 => Choice::Stone,
            1 => Choice::Paper,
            2 => Choice::Scissors,
            _ => panic!("invalid choice index {}", n),
        }
    }
}
impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}

/// str isomorphism, case-insensitive and whitespace-tolerant
impl TryFrom<&str> for Choice {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "stone" => Ok(Choice::Stone),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(Error::InvalidChoice(s.trim().to_string())),
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        Self::from(rand::rng().random_range(0..3u8))
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
