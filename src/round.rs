use super::*;

/// Both hands of a single round and how it resolved.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Round {
    user: Choice,
    computer: Choice,
    outcome: Outcome,
}

impl Round {
    pub fn user(&self) -> Choice {
        self.user
    }
    pub fn computer(&self) -> Choice {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// (user, computer) resolution
impl From<(Choice, Choice)> for Round {
    fn from((user, computer): (Choice, Choice)) -> Self {
        Self {
            user,
            computer,
            outcome: Outcome::resolve(user, computer),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self.outcome {
            Outcome::UserWins => "You won",
            Outcome::ComputerWins => "Computer won",
            Outcome::Draw => "Draw",
        };
        write!(f, "{} ({} vs {})", label, self.user, self.computer)
    }
}
