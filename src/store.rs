use super::*;
use std::path::Path;
use std::path::PathBuf;

/// Persistence for the cumulative [`Score`].
///
/// Loading never fails: a missing or malformed record starts the player
/// over at zero. Saving is a full overwrite, and any failure is fatal to
/// the session.
pub trait Store {
    /// Read the persisted record, or the default on any failure.
    fn load(&self) -> Score;
    /// Overwrite the persisted record.
    fn save(&mut self, score: &Score) -> Result<(), Error>;
}

impl<S> Store for &mut S
where
    S: Store + ?Sized,
{
    fn load(&self) -> Score {
        (**self).load()
    }
    fn save(&mut self, score: &Score) -> Result<(), Error> {
        (**self).save(score)
    }
}

/// Two-line text file on disk.
#[derive(Debug, Clone)]
pub struct Disk {
    path: PathBuf,
}

impl Disk {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// Sibling file written first and renamed over the record.
    fn staging(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self::new(SCORE_PATH)
    }
}

impl Store for Disk {
    fn load(&self) -> Score {
        match std::fs::read_to_string(&self.path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no score record at {}, starting fresh", self.path.display());
                Score::default()
            }
            Err(e) => {
                log::warn!("unreadable score record {}: {}", self.path.display(), e);
                Score::default()
            }
            Ok(text) => text
                .parse::<Score>()
                .inspect(|score| log::debug!("loaded {:?} from {}", score, self.path.display()))
                .inspect_err(|e| log::warn!("{} in {}, starting fresh", e, self.path.display()))
                .unwrap_or_default(),
        }
    }
    fn save(&mut self, score: &Score) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(Error::Persistence)?;
        }
        let ref staging = self.staging();
        std::fs::write(staging, score.encode()).map_err(Error::Persistence)?;
        std::fs::rename(staging, &self.path).map_err(Error::Persistence)?;
        log::debug!("saved {:?} to {}", score, self.path.display());
        Ok(())
    }
}

/// Record kept in memory, in the same text form as on disk.
///
/// A broken store rejects every save, which is how callers exercise
/// the fatal persistence path without a real filesystem.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    text: Option<String>,
    saves: usize,
    broken: bool,
}

impl Memory {
    /// Store holding arbitrary text, well-formed or not.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
    /// Store whose saves always fail.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }
    /// Current text of the record, if any was ever written.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl From<Score> for Memory {
    fn from(score: Score) -> Self {
        Self::raw(score.encode())
    }
}

impl Store for Memory {
    fn load(&self) -> Score {
        self.text
            .as_deref()
            .map(str::parse::<Score>)
            .and_then(Result::ok)
            .unwrap_or_default()
    }
    fn save(&mut self, score: &Score) -> Result<(), Error> {
        match self.broken {
            true => Err(Error::Persistence(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            ))),
            false => {
                self.text = Some(score.encode());
                self.saves += 1;
                Ok(())
            }
        }
    }
}
