mod decode;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use decode::{decode, strip_delimiter};
pub use error::DecodeError;
pub use types::Event;
