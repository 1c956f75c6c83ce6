pub mod row;
mod statement;
pub mod storage;

pub use {
    row::{Row, RowCodec},
    statement::{Statement, StatementKind},
    storage::Storage,
};
