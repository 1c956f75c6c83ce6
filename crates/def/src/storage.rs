mod codec;

use crate::Row;
pub use codec::{Decoder, Encoder};

/// The row store that prepared statements are forwarded to.
pub trait Storage {
    type Error: std::error::Error + Send + Sync + 'static;

    fn insert(&mut self, row: Row) -> Result<(), Self::Error>;

    /// Returns every stored row in insertion order.
    fn scan_all(&self) -> Result<Vec<Row>, Self::Error>;
}
