mod error;
mod insert;

pub use self::error::{Error, Result, SyntaxError};

use def::Statement;

const INSERT: &str = "insert";
const SELECT: &str = "select";

/// Prepares a single input line into a [`Statement`].
///
/// Keywords are matched as case-sensitive prefixes, `insert` before `select`.
pub struct Parser<'a> {
    src: &'a str,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src }
    }

    pub fn prepare(line: &'a str) -> Result<Statement> {
        Self::new(line).parse()
    }

    fn parse(&self) -> Result<Statement> {
        if let Some(args) = self.src.strip_prefix(INSERT) {
            return self.parse_insert(args);
        }

        // anything after the keyword is ignored
        if self.src.starts_with(SELECT) {
            return Ok(Statement::Select);
        }

        Err(Error::UnrecognizedStatement)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, def::Row};

    #[test]
    fn unrecognized_keywords() {
        let inputs = [
            "",
            " insert 1 a b",
            "INSERT 1 a b",
            "Select",
            "sel",
            "update",
            "delete from users",
            "ins 1 a b",
        ];

        for input in inputs {
            assert_eq!(Parser::prepare(input), Err(Error::UnrecognizedStatement), "{input:?}");
        }
    }

    #[test]
    fn select_ignores_trailing_content() {
        for input in ["select", "select * from users", "selectx", "select   "] {
            assert_eq!(Parser::prepare(input), Ok(Statement::Select), "{input:?}");
        }
    }

    #[test]
    fn insert_is_checked_before_select() {
        assert_eq!(
            Parser::prepare("insert 3 select select@example.com"),
            Ok(Statement::Insert(
                Row::new(3, "select", "select@example.com").unwrap()
            ))
        );
    }

    #[test]
    fn pure() {
        for input in ["insert 1 alice alice@example.com", "insert foo bar baz", "select", "drop"] {
            assert_eq!(Parser::prepare(input), Parser::prepare(input));
        }
    }
}
