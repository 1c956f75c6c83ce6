mod parser;

pub use self::parser::{Error, Parser, Result, SyntaxError};
