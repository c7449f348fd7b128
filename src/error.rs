use std::error;
use std::fmt;
use std::io;
use std::result;

#[derive(Debug)]
pub enum HashTableError {
    IO(io::Error),
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    UnexpectedArgument(String),
    UnterminatedQuote,
    Line {
        number: usize,
        source: Box<HashTableError>,
    },
}

impl HashTableError {
    /// Attach the 1-based script line this error came from.
    pub fn at_line(self, number: usize) -> Self {
        Self::Line {
            number,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for HashTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO(err) => write!(f, "IO: {}", err),
            Self::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            Self::MissingArgument { command, argument } => {
                write!(f, "{} is missing its {} argument", command, argument)
            }
            Self::UnexpectedArgument(arg) => write!(f, "Unexpected argument: {}", arg),
            Self::UnterminatedQuote => write!(f, "Unterminated quote"),
            Self::Line { number, source } => write!(f, "line {}: {}", number, source),
        }
    }
}

impl error::Error for HashTableError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IO(source) => Some(source),
            Self::UnknownCommand(_) => None,
            Self::MissingArgument { .. } => None,
            Self::UnexpectedArgument(_) => None,
            Self::UnterminatedQuote => None,
            Self::Line { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<io::Error> for HashTableError {
    fn from(e: io::Error) -> Self {
        Self::IO(e)
    }
}

pub type Result<T> = result::Result<T, HashTableError>;
