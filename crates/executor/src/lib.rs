mod stmt;

use {
    def::{Row, Statement, Storage},
    snafu::prelude::*,
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}", source))]
    Storage { source: BoxedError },
}

pub type Result<T> = std::result::Result<T, Error>;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Inserted,
    Rows(Vec<Row>),
}

/// Dispatches prepared statements to a storage backend.
pub struct Executor<S> {
    storage: S,
}

impl<S: Storage> Executor<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn execute(&mut self, stmt: Statement) -> Result<Outcome> {
        match stmt {
            Statement::Insert(row) => self.insert(row),
            Statement::Select => self.select(),
        }
    }
}
