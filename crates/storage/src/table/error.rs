use {def::row::CodecError, snafu::prelude::*};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Table full."))]
    TableFull { capacity: usize },

    #[snafu(display("Failed with row codec, source: {}", source))]
    Codec {
        #[snafu(backtrace)]
        source: CodecError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
