//! Choice providers for either side of the table.
//!
//! - [`Human`]: Interactive player reading validated tokens from a [`Console`]
//! - [`Robot`]: Computer opponent throwing uniformly at random
//! - [`Fixed`]: Scripted player replaying a given sequence, for forcing rounds
mod fixed;
mod human;
mod robot;

pub use fixed::*;
pub use human::*;
pub use robot::*;

use super::*;

/// Anything that can throw a hand when asked.
///
/// The console is offered to every player so interactive and scripted
/// players share one signature; computer players simply ignore it.
pub trait Player {
    fn choose<C>(&mut self, console: &mut C) -> Result<Choice, Error>
    where
        C: Console;
}
