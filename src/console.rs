use super::*;
use std::io::BufRead;
use std::io::Write;

/// Line-oriented conversation with the player.
///
/// `ask` keeps prompting until `parse` accepts a line, printing the parse
/// error as the corrective message between attempts. The retry is unbounded;
/// the only way out without a valid answer is the input stream closing.
pub trait Console {
    fn ask<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, Error>
    where
        F: Fn(&str) -> Result<T, Error>;
    fn say(&mut self, line: &str);
}

impl<C> Console for &mut C
where
    C: Console + ?Sized,
{
    fn ask<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, Error>
    where
        F: Fn(&str) -> Result<T, Error>,
    {
        (**self).ask(prompt, parse)
    }
    fn say(&mut self, line: &str) {
        (**self).say(line)
    }
}

/// Console over any reader and writer: piped stdin, files, or test buffers.
#[derive(Debug)]
pub struct Lines<R, W> {
    input: R,
    output: W,
}

impl<R, W> Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
    fn emit(&mut self, text: std::fmt::Arguments) {
        if let Err(e) = self.output.write_fmt(text).and_then(|_| self.output.flush()) {
            log::warn!("console write failed: {}", e);
        }
    }
}

impl<R, W> Console for Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, Error>
    where
        F: Fn(&str) -> Result<T, Error>,
    {
        loop {
            self.emit(format_args!("{}: ", prompt));
            let ref mut bytes = Vec::new();
            match self.input.read_until(b'\n', bytes) {
                Ok(0) => return Err(Error::InputClosed),
                Err(e) => {
                    log::warn!("console read failed: {}", e);
                    return Err(Error::InputClosed);
                }
                Ok(_) => {}
            }
            // undecodable bytes become U+FFFD and fail the parse like any typo
            let line = String::from_utf8_lossy(bytes);
            match parse(line.trim_end_matches(['\r', '\n'])) {
                Ok(answer) => return Ok(answer),
                Err(e) => {
                    log::debug!("rejected {:?}: {:?}", line.trim(), e);
                    self.emit(format_args!("{}\n", e));
                }
            }
        }
    }
    fn say(&mut self, line: &str) {
        self.emit(format_args!("{}\n", line));
    }
}

/// Interactive terminal console with in-place validation.
#[cfg(feature = "cli")]
#[derive(Debug, Default)]
pub struct Terminal;

#[cfg(feature = "cli")]
impl Console for Terminal {
    fn ask<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, Error>
    where
        F: Fn(&str) -> Result<T, Error>,
    {
        let line = dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .report(false)
            .validate_with(|input: &String| -> Result<(), String> {
                parse(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .inspect_err(|e| log::warn!("terminal input failed: {}", e))
            .map_err(|_| Error::InputClosed)?;
        parse(&line)
    }
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Lines<Cursor<Vec<u8>>, Vec<u8>> {
        Lines::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Lines<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).expect("utf8")
    }

    #[test]
    fn accepts_first_valid_line() {
        let mut console = console("Paper\n");
        let choice = console.ask(CHOICE_PROMPT, |line| Choice::try_from(line)).unwrap();
        assert_eq!(choice, Choice::Paper);
        assert_eq!(transcript(console).matches(CHOICE_PROMPT).count(), 1);
    }

    #[test]
    fn reprompts_until_valid() {
        let mut console = console("rockk\n\nSTONE\n");
        let choice = console.ask(CHOICE_PROMPT, |line| Choice::try_from(line)).unwrap();
        assert_eq!(choice, Choice::Stone);
        let transcript = transcript(console);
        assert_eq!(transcript.matches(CHOICE_PROMPT).count(), 3);
        assert_eq!(transcript.matches("Invalid choice!").count(), 2);
    }

    #[test]
    fn closed_input_ends_the_retry() {
        let mut console = console("nope\n");
        assert!(matches!(
            console.ask(CHOICE_PROMPT, |line| Choice::try_from(line)),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn undecodable_line_is_just_a_typo() {
        let mut console = Lines::new(Cursor::new(b"st\xffone\nstone\n".to_vec()), Vec::new());
        let choice = console.ask(CHOICE_PROMPT, |line| Choice::try_from(line)).unwrap();
        assert_eq!(choice, Choice::Stone);
        let transcript = transcript(console);
        assert_eq!(transcript.matches(CHOICE_PROMPT).count(), 2);
        assert_eq!(transcript.matches("Invalid choice!").count(), 1);
    }

    #[test]
    fn handles_crlf_and_missing_final_newline() {
        let mut console = console("scissors\r\nstone");
        assert_eq!(console.ask("a", |line| Choice::try_from(line)).unwrap(), Choice::Scissors);
        assert_eq!(console.ask("b", |line| Choice::try_from(line)).unwrap(), Choice::Stone);
    }

    #[test]
    fn say_writes_whole_lines() {
        let mut console = console("");
        console.say("one");
        console.say("two");
        assert_eq!(transcript(console), "one\ntwo\n");
    }
}
