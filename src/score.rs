use super::*;

/// Cumulative round wins for each side, persisted across sessions.
///
/// Draws are not counted. Both counters are unsigned, so the record can
/// never go negative, and increments saturate rather than wrap.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Score {
    user: u32,
    computer: u32,
}

impl Score {
    pub const fn new(user: u32, computer: u32) -> Self {
        Self { user, computer }
    }
    pub fn user(&self) -> u32 {
        self.user
    }
    pub fn computer(&self) -> u32 {
        self.computer
    }
    /// Non-draw rounds recorded.
    pub fn total(&self) -> u32 {
        self.user.saturating_add(self.computer)
    }
    /// Credit the winning side. Draws leave the record unchanged.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::UserWins => self.user = self.user.saturating_add(1),
            Outcome::ComputerWins => self.computer = self.computer.saturating_add(1),
            Outcome::Draw => {}
        }
    }
    /// Who is ahead overall.
    pub fn verdict(&self) -> Outcome {
        match self.user.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Outcome::UserWins,
            std::cmp::Ordering::Less => Outcome::ComputerWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
    /// Wins gained since an earlier snapshot of the same record.
    pub fn since(&self, earlier: &Self) -> Self {
        Self {
            user: self.user.saturating_sub(earlier.user),
            computer: self.computer.saturating_sub(earlier.computer),
        }
    }
    /// On-disk form: one decimal counter per line, user first.
    pub fn encode(&self) -> String {
        format!("{}\n{}\n", self.user, self.computer)
    }
}

impl std::str::FromStr for Score {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.trim().lines().map(str::trim).collect::<Vec<_>>();
        match lines.as_slice() {
            [user, computer] => Ok(Self::new(counter(user)?, counter(computer)?)),
            lines => Err(Error::MalformedScore(format!(
                "expected 2 lines, found {}",
                lines.iter().filter(|l| !l.is_empty()).count()
            ))),
        }
    }
}

/// Bare decimal digits only. `u32::from_str` alone would take a leading `+`.
fn counter(line: &str) -> Result<u32, Error> {
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedScore(format!("{:?} is not a counter", line)));
    }
    line.parse::<u32>().map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => {
            log::warn!("score counter {} overflows u32, the record will be replaced", line);
            Error::MalformedScore(format!("{:?} overflows the counter", line))
        }
        _ => Error::MalformedScore(format!("{:?}: {}", line, e)),
    })
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "You {} - {} Computer", self.user, self.computer)
    }
}
