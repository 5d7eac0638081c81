use super::*;
use std::collections::VecDeque;

/// The most recent rounds of this session, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History(VecDeque<Round>);

impl History {
    pub fn push(&mut self, round: Round) {
        self.0.push_front(round);
        self.0.truncate(HISTORY_DEPTH);
    }
    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for round in self.iter() {
            writeln!(f, "  {}", round)?;
        }
        Ok(())
    }
}
