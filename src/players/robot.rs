use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Computer opponent. Every throw is uniform over the three hands and
/// independent of everything that came before.
#[derive(Debug, Clone)]
pub struct Robot(SmallRng);

impl Robot {
    /// Reproducible opponent for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
    pub fn throw(&mut self) -> Choice {
        Choice::from(self.0.random_range(0..3u8))
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Player for Robot {
    fn choose<C>(&mut self, _: &mut C) -> Result<Choice, Error>
    where
        C: Console,
    {
        let choice = self.throw();
        log::debug!("robot throws {}", choice);
        Ok(choice)
    }
}
