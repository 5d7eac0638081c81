//! Stone, paper, scissors against a randomized computer opponent.
//!
//! The crate is organized leaf first:
//!
//! - [`Choice`] and [`Outcome`] define the game and its total rule table
//! - [`Score`] is the cumulative record, persisted through a [`Store`]
//! - [`Player`] implementations supply choices ([`Human`], [`Robot`], [`Fixed`])
//! - [`Console`] and [`Screen`] are the text and presentation collaborators
//! - [`Session`] threads all of the above through the replay loop
mod choice;
mod console;
mod error;
mod history;
mod mode;
mod outcome;
mod players;
mod round;
mod score;
mod screen;
mod session;
mod store;

#[cfg(feature = "cli")]
mod args;

pub use choice::*;
pub use console::*;
pub use error::*;
pub use history::*;
pub use mode::*;
pub use outcome::*;
pub use players::*;
pub use round::*;
pub use score::*;
pub use screen::*;
pub use session::*;
pub use store::*;

#[cfg(feature = "cli")]
pub use args::*;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for the computer opponent and for tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of resolved rounds kept on screen between prompts.
pub const HISTORY_DEPTH: usize = 5;
/// Score file used when none is given on the command line.
pub const SCORE_PATH: &str = "scores.txt";
/// Pause between the beats of the round countdown.
pub const ANIMATION_BEAT: std::time::Duration = std::time::Duration::from_millis(400);
/// Directory for timestamped log files.
pub const LOG_DIR: &str = "logs";

// ============================================================================
// CONSOLE PROTOCOL
// ============================================================================
/// Prompt for the player's choice of hand.
pub const CHOICE_PROMPT: &str = "Enter your choice (stone/paper/scissors)";
/// Prompt for replaying another round.
pub const CONTINUE_PROMPT: &str = "Play another round? (yes/no)";
/// Horizontal rules framing the banners.
pub const HEAVY_RULE: &str = "===================================";
pub const LIGHT_RULE: &str = "-----------------------------------";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `logs/<unix-seconds>.log` and only WARN to the
/// terminal, so the game screen stays readable. If the log file cannot be
/// created the game still runs with terminal logging alone.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(term);
    match logfile() {
        Ok(file) => loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        )),
        Err(e) => eprintln!("logging to terminal only: {}", e),
    }
    if let Err(e) = simplelog::CombinedLogger::init(loggers) {
        eprintln!("logger already initialized: {}", e);
    }
}

#[cfg(feature = "cli")]
fn logfile() -> std::io::Result<std::fs::File> {
    std::fs::create_dir_all(LOG_DIR)?;
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    std::fs::File::create(format!("{}/{}.log", LOG_DIR, time))
}
