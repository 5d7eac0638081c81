use super::*;
use colored::*;
use std::io::Write;
use std::time::Duration;

/// Presentation collaborator. Every call is fire-and-forget: nothing here
/// can fail the session or feed back into the game.
pub trait Screen {
    fn clear(&mut self);
    fn render(&mut self, user: Choice, computer: Choice);
    fn animate(&mut self);
}

/// Screen that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blank;

impl Screen for Blank {
    fn clear(&mut self) {}
    fn render(&mut self, _: Choice, _: Choice) {}
    fn animate(&mut self) {}
}

const STONE: &str = r"
    _______
---'   ____)
      (_____)
      (_____)
      (____)
---.__(___)
";

const PAPER: &str = r"
    _______
---'   ____)____
          ______)
          _______)
         _______)
---.__________)
";

const SCISSORS: &str = r"
    _______
---'   ____)____
          ______)
       __________)
      (____)
---.__(___)
";

const CLEAR: &str = "\x1b[2J\x1b[H";
const BEATS: [&str; 3] = ["Stone...", "Paper...", "Scissors..."];

/// ASCII-art hands with a short countdown before the reveal.
#[derive(Debug)]
pub struct Ascii<W> {
    out: W,
    beat: Duration,
    plain: bool,
}

impl<W> Ascii<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self {
            out,
            beat: ANIMATION_BEAT,
            plain: false,
        }
    }
    /// Pause between countdown beats. Zero skips the pauses entirely.
    pub fn beat(self, beat: Duration) -> Self {
        Self { beat, ..self }
    }
    /// Plain output never clears the terminal.
    pub fn plain(self, plain: bool) -> Self {
        Self { plain, ..self }
    }
    pub fn into_inner(self) -> W {
        self.out
    }

    fn art(choice: Choice) -> &'static str {
        match choice {
            Choice::Stone => STONE,
            Choice::Paper => PAPER,
            Choice::Scissors => SCISSORS,
        }
    }
    fn name(choice: Choice) -> ColoredString {
        match choice {
            Choice::Stone => choice.token().yellow().bold(),
            Choice::Paper => choice.token().white().bold(),
            Choice::Scissors => choice.token().cyan().bold(),
        }
    }
    fn draw(&mut self, text: std::fmt::Arguments) {
        if let Err(e) = self.out.write_fmt(text).and_then(|_| self.out.flush()) {
            log::warn!("screen write failed: {}", e);
        }
    }
}

impl<W> Screen for Ascii<W>
where
    W: Write,
{
    fn clear(&mut self) {
        if !self.plain {
            self.draw(format_args!("{}", CLEAR));
        }
    }
    fn render(&mut self, user: Choice, computer: Choice) {
        self.draw(format_args!(
            "\nYour choice: {}{}\nComputer's choice: {}{}\n",
            Self::name(user),
            Self::art(user),
            Self::name(computer),
            Self::art(computer),
        ));
    }
    fn animate(&mut self) {
        for beat in BEATS {
            self.draw(format_args!("{} ", beat));
            if !self.beat.is_zero() {
                std::thread::sleep(self.beat);
            }
        }
        self.draw(format_args!("{}\n", "Shoot!".bold()));
    }
}
