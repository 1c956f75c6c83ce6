pub mod meta;
pub mod session;

pub use session::{Error, Session};
