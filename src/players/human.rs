use super::*;

/// Interactive player. Re-prompts on anything that is not a valid hand,
/// so the only error it surfaces is the input stream closing.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn choose<C>(&mut self, console: &mut C) -> Result<Choice, Error>
    where
        C: Console,
    {
        console
            .ask(CHOICE_PROMPT, |line| Choice::try_from(line))
            .inspect(|choice| log::debug!("human throws {}", choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn normalizes_case_variants() {
        let ref mut console = Lines::new(Cursor::new(b"STONE\nPaper\n".to_vec()), Vec::new());
        assert_eq!(Human.choose(console).unwrap(), Choice::Stone);
        assert_eq!(Human.choose(console).unwrap(), Choice::Paper);
    }

    #[test]
    fn reprompts_on_typos() {
        let ref mut console = Lines::new(Cursor::new(b"rockk\nscissors\n".to_vec()), Vec::new());
        assert_eq!(Human.choose(console).unwrap(), Choice::Scissors);
    }
}
