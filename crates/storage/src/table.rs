mod error;

pub use self::error::{Error, Result};

use {
    self::error::{CodecSnafu, TableFullSnafu},
    crate::{PAGE_SIZE, ROWS_PER_PAGE},
    def::{
        row::ROW_SIZE,
        storage::{Decoder, Encoder},
        Row, RowCodec, Storage,
    },
    snafu::{ensure, ResultExt},
    std::num::NonZeroUsize,
    tracing::trace,
};

/// An in-memory table of encoded rows, packed into pages that are
/// allocated on first use. Rows never span two pages.
pub struct Table {
    codec: RowCodec,
    num_rows: usize,
    max_pages: NonZeroUsize,
    pages: Vec<Box<[u8]>>,
}

impl Table {
    pub fn new(max_pages: NonZeroUsize) -> Self {
        Self {
            codec: RowCodec,
            num_rows: 0,
            max_pages,
            pages: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        ROWS_PER_PAGE * self.max_pages.get()
    }

    pub fn len(&self) -> usize {
        self.num_rows
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    pub fn allocated_pages(&self) -> usize {
        self.pages.len()
    }

    fn slot_position(row_num: usize) -> (usize, usize) {
        (row_num / ROWS_PER_PAGE, row_num % ROWS_PER_PAGE * ROW_SIZE)
    }

    // `row_num` must be below `num_rows`
    fn row_slot(&self, row_num: usize) -> &[u8] {
        let (page_num, offset) = Self::slot_position(row_num);
        &self.pages[page_num][offset..offset + ROW_SIZE]
    }

    // `row_num` must be at most `num_rows`
    fn row_slot_mut(&mut self, row_num: usize) -> &mut [u8] {
        let (page_num, offset) = Self::slot_position(row_num);

        if page_num == self.pages.len() {
            trace!(page_num, "allocating page");
            self.pages.push(vec![0u8; PAGE_SIZE].into_boxed_slice());
        }

        &mut self.pages[page_num][offset..offset + ROW_SIZE]
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(crate::TABLE_MAX_PAGES).unwrap_or(NonZeroUsize::MIN))
    }
}

impl Storage for Table {
    type Error = Error;

    fn insert(&mut self, row: Row) -> Result<()> {
        let capacity = self.capacity();
        ensure!(self.num_rows < capacity, TableFullSnafu { capacity });

        let codec = self.codec;
        codec
            .encode_into(&row, self.row_slot_mut(self.num_rows))
            .context(CodecSnafu)?;
        self.num_rows += 1;

        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<Row>> {
        (0..self.num_rows)
            .map(|i| {
                let (row, _) = self.codec.decode(self.row_slot(i)).context(CodecSnafu)?;
                Ok(row)
            })
            .collect()
    }
}
