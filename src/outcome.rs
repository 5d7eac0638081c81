use super::*;
use colored::*;

/// Result of a single round, or of a whole session when comparing totals.
///
/// Older builds of the game reported the computer side as either
/// `"computer"` or `"desktop"`; both are [`Outcome::ComputerWins`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    UserWins,
    ComputerWins,
    Draw,
}

const U: Outcome = Outcome::UserWins;
const C: Outcome = Outcome::ComputerWins;
const D: Outcome = Outcome::Draw;

/// rows are the user's hand, columns the computer's, both in discriminant order
const TABLE: [[Outcome; 3]; 3] = [
    //  stone paper scissors
    [D, C, U], // stone
    [U, D, C], // paper
    [C, U, D], // scissors
];

impl Outcome {
    /// Stone beats Scissors, Scissors beats Paper, Paper beats Stone.
    pub fn resolve(user: Choice, computer: Choice) -> Self {
        TABLE[u8::from(user) as usize][u8::from(computer) as usize]
    }
    /// Line printed after a round is resolved.
    pub fn headline(&self) -> ColoredString {
        match self {
            Outcome::UserWins => "You win this round!".green().bold(),
            Outcome::ComputerWins => "Computer wins this round!".red().bold(),
            Outcome::Draw => "It's a draw!".yellow(),
        }
    }
    /// Line printed when the session ends, comparing cumulative totals.
    pub fn verdict(&self) -> ColoredString {
        match self {
            Outcome::UserWins => "Congratulations! You won the game!".green().bold(),
            Outcome::ComputerWins => "Better luck next time! The computer won.".red(),
            Outcome::Draw => "The game ended in a draw!".yellow(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::UserWins => write!(f, "user"),
            Outcome::ComputerWins => write!(f, "computer"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
