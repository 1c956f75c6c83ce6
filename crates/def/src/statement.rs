use crate::Row;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    Insert,
    Select,
}

/// One prepared data statement, built per input line and consumed by the executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

impl Statement {
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Insert(_) => StatementKind::Insert,
            Self::Select => StatementKind::Select,
        }
    }

    /// The row to insert, only present for `Insert`.
    pub const fn payload(&self) -> Option<&Row> {
        match self {
            Self::Insert(row) => Some(row),
            Self::Select => None,
        }
    }
}
