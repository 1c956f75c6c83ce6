pub mod table;

use def::row::ROW_SIZE;

pub use table::{Error, Result, Table};

pub const PAGE_SIZE: usize = 1 << 12;
pub const TABLE_MAX_PAGES: usize = 100;
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
