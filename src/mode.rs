use super::*;

/// How a session ends.
///
/// Endless play runs until the player declines another round. A best-of-n
/// series also ends as soon as either side has won a majority of n rounds
/// in this session; earlier sessions do not count toward it.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Endless,
    BestOf(u32),
}

impl Mode {
    /// Round wins needed to take the series.
    pub fn target(&self) -> Option<u32> {
        match self {
            Mode::Endless => None,
            Mode::BestOf(n) => Some(n / 2 + 1),
        }
    }
    /// Series winner, if the wins gained since `start` decide it.
    pub fn winner(&self, start: &Score, now: &Score) -> Option<Outcome> {
        let target = self.target()?;
        let gained = now.since(start);
        match (gained.user() >= target, gained.computer() >= target) {
            (true, _) => Some(Outcome::UserWins),
            (_, true) => Some(Outcome::ComputerWins),
            _ => None,
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "endless" => Ok(Mode::Endless),
            "bo3" => Ok(Mode::BestOf(3)),
            "bo5" => Ok(Mode::BestOf(5)),
            "bo7" => Ok(Mode::BestOf(7)),
            other => Err(format!(
                "unknown mode {:?} (expected endless, bo3, bo5 or bo7)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Endless => write!(f, "endless"),
            Mode::BestOf(n) => write!(f, "bo{}", n),
        }
    }
}
