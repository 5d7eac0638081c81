use super::*;

/// Scripted player that replays its hands in order, cycling at the end.
/// Used to force the opponent's side of a round.
#[derive(Debug, Clone)]
pub struct Fixed {
    hands: Vec<Choice>,
    next: usize,
}

impl Fixed {
    /// `None` when there is no hand to replay.
    pub fn new(hands: impl IntoIterator<Item = Choice>) -> Option<Self> {
        let hands = hands.into_iter().collect::<Vec<_>>();
        match hands.is_empty() {
            true => None,
            false => Some(Self { hands, next: 0 }),
        }
    }
}

impl From<Choice> for Fixed {
    fn from(choice: Choice) -> Self {
        Self {
            hands: vec![choice],
            next: 0,
        }
    }
}

impl Player for Fixed {
    fn choose<C>(&mut self, _: &mut C) -> Result<Choice, Error>
    where
        C: Console,
    {
        let choice = self.hands[self.next % self.hands.len()];
        self.next += 1;
        Ok(choice)
    }
}
