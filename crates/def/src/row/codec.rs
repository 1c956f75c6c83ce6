use {
    super::{Row, EMAIL_SIZE, ROW_SIZE, USERNAME_SIZE},
    crate::storage::{Decoder, Encoder},
    byteorder::{ReadBytesExt, WriteBytesExt, LE},
    snafu::{prelude::*, Backtrace},
    std::{
        io::{self, Cursor, Read, Write},
        str::Utf8Error,
    },
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("a row takes {} bytes, got {}", ROW_SIZE, len))]
    Truncated { len: usize, backtrace: Backtrace },

    Io {
        source: io::Error,
    },

    #[snafu(display("{} is not valid utf-8", field))]
    Utf8Encoding {
        field: &'static str,
        source: Utf8Error,
    },

    #[snafu(display("{} has data after its NUL padding", field))]
    Padding {
        field: &'static str,
        backtrace: Backtrace,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Encodes rows into the fixed `ROW_SIZE` layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowCodec;

impl Encoder for RowCodec {
    type Item = Row;
    type Error = Error;

    fn encoded_size(&self) -> usize {
        ROW_SIZE
    }

    fn encode_into(&self, row: &Row, dst: &mut [u8]) -> Result<usize> {
        ensure!(
            dst.len() >= self.encoded_size(),
            TruncatedSnafu { len: dst.len() }
        );

        let mut writer = Cursor::new(dst);

        writer.write_u32::<LE>(row.id).context(IoSnafu)?;
        writer.write_all(&row.username).context(IoSnafu)?;
        writer.write_all(&row.email).context(IoSnafu)?;

        Ok(writer.position() as usize)
    }
}

impl Decoder for RowCodec {
    type Item = Row;
    type Error = Error;

    fn decode(&self, src: &[u8]) -> Result<(Row, usize)> {
        ensure!(src.len() >= ROW_SIZE, TruncatedSnafu { len: src.len() });

        let mut reader = Cursor::new(src);

        let id = reader.read_u32::<LE>().context(IoSnafu)?;

        let mut username = [0u8; USERNAME_SIZE];
        reader.read_exact(&mut username).context(IoSnafu)?;
        check_text("username", &username)?;

        let mut email = [0u8; EMAIL_SIZE];
        reader.read_exact(&mut email).context(IoSnafu)?;
        check_text("email", &email)?;

        Ok((
            Row {
                id,
                username,
                email,
            },
            reader.position() as usize,
        ))
    }
}

fn check_text(field: &'static str, buf: &[u8]) -> Result<()> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let (text, padding) = buf.split_at(end);

    ensure!(padding.iter().all(|&b| b == 0), PaddingSnafu { field });
    std::str::from_utf8(text).context(Utf8EncodingSnafu { field })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, crate::row::USERNAME_OFFSET};

    #[test]
    fn id_is_little_endian() {
        let row = Row::new(0x0403_0201, "a", "b").unwrap();
        let bytes = RowCodec.encode(&row).unwrap();

        assert_eq!(bytes.len(), ROW_SIZE);
        assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
        assert_eq!(bytes[USERNAME_OFFSET], b'a');
    }

    #[test]
    fn decode_reads_one_row_from_the_front() {
        let first = Row::new(1, "alice", "alice@example.com").unwrap();
        let second = Row::new(2, "bob", "bob@example.com").unwrap();

        let mut bytes = RowCodec.encode(&first).unwrap();
        bytes.extend(RowCodec.encode(&second).unwrap());

        let (row, read) = RowCodec.decode(&bytes).unwrap();
        assert_eq!(row, first);
        assert_eq!(read, ROW_SIZE);

        let (row, _) = RowCodec.decode(&bytes[read..]).unwrap();
        assert_eq!(row, second);
    }

    #[test]
    fn encode_into_a_short_slot() {
        let row = Row::new(1, "a", "b").unwrap();
        let mut slot = [0u8; ROW_SIZE - 1];

        let result = RowCodec.encode_into(&row, &mut slot);
        assert!(matches!(result, Err(Error::Truncated { len, .. }) if len == ROW_SIZE - 1));
    }

    #[test]
    fn encode_into_a_larger_slot() {
        let row = Row::new(9, "alice", "alice@example.com").unwrap();
        let mut slot = [0xaau8; ROW_SIZE + 10];

        assert_eq!(RowCodec.encode_into(&row, &mut slot).unwrap(), RowCodec.encoded_size());
        assert_eq!(&slot[ROW_SIZE..], &[0xaa; 10]);
        assert_eq!(RowCodec.decode(&slot).unwrap(), (row, ROW_SIZE));
    }

    #[test]
    fn short_input() {
        let result = RowCodec.decode(&[0u8; ROW_SIZE - 1]);
        assert!(matches!(result, Err(Error::Truncated { len, .. }) if len == ROW_SIZE - 1));
    }

    #[test]
    fn garbage_after_padding() {
        let row = Row::new(1, "a", "b").unwrap();
        let mut bytes = RowCodec.encode(&row).unwrap();
        bytes[USERNAME_OFFSET + 5] = b'x';

        let result = RowCodec.decode(&bytes);
        assert!(matches!(result, Err(Error::Padding { field: "username", .. })));
    }

    #[test]
    fn invalid_utf8() {
        let row = Row::new(1, "a", "b").unwrap();
        let mut bytes = RowCodec.encode(&row).unwrap();
        bytes[USERNAME_OFFSET] = 0xff;

        let result = RowCodec.decode(&bytes);
        assert!(matches!(result, Err(Error::Utf8Encoding { field: "username", .. })));
    }
}
