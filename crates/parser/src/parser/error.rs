use def::row;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a line could not be prepared into a statement.
#[derive(Debug, PartialEq)]
pub enum Error {
    UnrecognizedStatement,
    SyntaxError(SyntaxError),
}

/// A recognized keyword with malformed arguments.
#[derive(Debug, PartialEq)]
pub enum SyntaxError {
    MissingArgument { name: &'static str },
    UnexpectedArgument { token: String },
    InvalidId { token: String },
    Field(row::Error),
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::SyntaxError(e)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnrecognizedStatement => write!(f, "unrecognized statement"),
            Self::SyntaxError(e) => write!(f, "syntax error: {}", e),
        }
    }
}

impl std::error::Error for SyntaxError {}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::MissingArgument { name } => format!("missing argument: {}", name),
                Self::UnexpectedArgument { token } => format!("unexpected argument: {}", token),
                Self::InvalidId { token } => format!("invalid id: {}", token),
                Self::Field(e) => e.to_string(),
            }
        )
    }
}
