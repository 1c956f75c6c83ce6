mod codec;

pub use codec::{Error as CodecError, RowCodec};

use {
    snafu::prelude::*,
    std::{borrow::Cow, fmt, mem::size_of},
};

pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;

// Fixed row layout: id (little endian) | username (NUL padded) | email (NUL padded)
pub const ID_SIZE: usize = size_of::<u32>();
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE;
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE;
pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

#[derive(Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "username is {} bytes long, the limit is {}",
        len,
        COLUMN_USERNAME_SIZE
    ))]
    UsernameTooLong { len: usize },

    #[snafu(display("email is {} bytes long, the limit is {}", len, COLUMN_EMAIL_SIZE))]
    EmailTooLong { len: usize },

    #[snafu(display("{} contains a NUL byte", field))]
    ContainsNul { field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A validated record. Text columns are stored NUL padded in fixed-width
/// buffers and never exceed their column size.
#[derive(Clone, PartialEq, Eq)]
pub struct Row {
    id: u32,
    username: [u8; COLUMN_USERNAME_SIZE],
    email: [u8; COLUMN_EMAIL_SIZE],
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Result<Self> {
        ensure!(
            username.len() <= COLUMN_USERNAME_SIZE,
            UsernameTooLongSnafu {
                len: username.len()
            }
        );
        ensure!(
            email.len() <= COLUMN_EMAIL_SIZE,
            EmailTooLongSnafu { len: email.len() }
        );

        Ok(Self {
            id,
            username: padded("username", username)?,
            email: padded("email", email)?,
        })
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub fn username(&self) -> Cow<'_, str> {
        unpadded(&self.username)
    }

    pub fn email(&self) -> Cow<'_, str> {
        unpadded(&self.email)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username(), self.email())
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("username", &self.username())
            .field("email", &self.email())
            .finish()
    }
}

// callers check the length first
fn padded<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N]> {
    let bytes = text.as_bytes();
    ensure!(!bytes.contains(&0), ContainsNulSnafu { field });

    let mut buf = [0u8; N];
    buf[..bytes.len()].copy_from_slice(bytes);

    Ok(buf)
}

fn unpadded(buf: &[u8]) -> Cow<'_, str> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end])
}
