use {
    snafu::{prelude::*, Backtrace},
    std::io,
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Failed with reading input, source: {}", source))]
    ReadInput { source: io::Error },

    #[snafu(display("input stream closed"))]
    EndOfInput { backtrace: Backtrace },

    #[snafu(display("Failed with writing output, source: {}", source))]
    WriteOutput { source: io::Error },
}

impl Error {
    /// Whether the session ended because no further line could be read.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::ReadInput { .. } | Self::EndOfInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
