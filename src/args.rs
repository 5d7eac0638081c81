use super::*;
use clap::Parser;
use std::path::PathBuf;

/// Stone, paper, scissors against the computer. The score is kept between runs.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File holding the cumulative score
    #[arg(long, value_name = "PATH", default_value = SCORE_PATH)]
    pub scores: PathBuf,
    /// Name shown when you take a series
    #[arg(long, default_value = "Player")]
    pub name: String,
    /// endless, or a best-of series: bo3, bo5, bo7
    #[arg(long, default_value = "endless")]
    pub mode: Mode,
    /// Skip the countdown pauses
    #[arg(long)]
    pub fast: bool,
    /// Seed the computer's throws for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,
    /// Zero the saved score before playing
    #[arg(long)]
    pub reset: bool,
    /// No colors and no screen clearing
    #[arg(long)]
    pub plain: bool,
}

impl Args {
    pub fn store(&self) -> Disk {
        Disk::new(&self.scores)
    }
    pub fn robot(&self) -> Robot {
        self.seed.map(Robot::seeded).unwrap_or_default()
    }
    pub fn screen<W>(&self, out: W) -> Ascii<W>
    where
        W: std::io::Write,
    {
        let beat = match self.fast {
            true => std::time::Duration::ZERO,
            false => ANIMATION_BEAT,
        };
        Ascii::new(out).beat(beat).plain(self.plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_flagless_game() {
        let args = Args::try_parse_from(["roshambo"]).unwrap();
        assert_eq!(args.scores, PathBuf::from(SCORE_PATH));
        assert_eq!(args.mode, Mode::Endless);
        assert_eq!(args.name, "Player");
        assert!(!args.fast && !args.reset && !args.plain);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn parses_every_flag() {
        let args = Args::try_parse_from([
            "roshambo", "--scores", "/tmp/s.txt", "--name", "Ada", "--mode", "bo5", "--fast",
            "--seed", "42", "--reset", "--plain",
        ])
        .unwrap();
        assert_eq!(args.store().path(), std::path::Path::new("/tmp/s.txt"));
        assert_eq!(args.mode, Mode::BestOf(5));
        assert_eq!(args.seed, Some(42));
        assert!(args.fast && args.reset && args.plain);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Args::try_parse_from(["roshambo", "--mode", "bo4"]).is_err());
    }

    #[test]
    fn seeded_robot_is_reproducible() {
        let args = Args::try_parse_from(["roshambo", "--seed", "9"]).unwrap();
        let (mut a, mut b) = (args.robot(), args.robot());
        for _ in 0..32 {
            assert_eq!(a.throw(), b.throw());
        }
    }
}
