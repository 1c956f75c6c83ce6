use {
    super::{
        error::{Result, SyntaxError},
        Parser,
    },
    def::{Row, Statement},
    std::str::SplitWhitespace,
};

impl<'a> Parser<'a> {
    /// `insert <id> <username> <email>`, with `args` being everything after the keyword.
    pub(super) fn parse_insert(&self, args: &'a str) -> Result<Statement> {
        let mut args = args.split_whitespace();

        let id = next_argument(&mut args, "id")?;
        let username = next_argument(&mut args, "username")?;
        let email = next_argument(&mut args, "email")?;

        if let Some(token) = args.next() {
            return Err(SyntaxError::UnexpectedArgument {
                token: token.to_string(),
            }
            .into());
        }

        let id = id.parse::<u32>().map_err(|_| SyntaxError::InvalidId {
            token: id.to_string(),
        })?;
        let row = Row::new(id, username, email).map_err(SyntaxError::Field)?;

        Ok(Statement::Insert(row))
    }
}

fn next_argument<'a>(args: &mut SplitWhitespace<'a>, name: &'static str) -> Result<&'a str> {
    Ok(args
        .next()
        .ok_or(SyntaxError::MissingArgument { name })?)
}
