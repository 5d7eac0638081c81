#[derive(Debug)]
pub enum Error {
    /// Typed hand was not one of the three tokens. Recovered by re-prompting.
    InvalidChoice(String),
    /// Continue prompt answer was not yes/no. Recovered by re-prompting.
    InvalidContinuation(String),
    /// Score record could not be parsed. Recovered by starting from zero.
    MalformedScore(String),
    /// Score record could not be written. Fatal.
    Persistence(std::io::Error),
    /// Input stream ended while a prompt was waiting.
    InputClosed,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidChoice(_) => {
                write!(f, "Invalid choice! Please choose one of: ")?;
                write!(f, "{}.", crate::Choice::all().map(|c| c.token()).join(", "))
            }
            Error::InvalidContinuation(_) => write!(f, "Invalid input. Please enter 'yes' or 'no'."),
            Error::MalformedScore(reason) => write!(f, "malformed score record: {}", reason),
            Error::Persistence(_) => write!(f, "could not persist score"),
            Error::InputClosed => write!(f, "input closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Persistence(e) => Some(e),
            _ => None,
        }
    }
}
