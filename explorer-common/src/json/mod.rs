//! JSON encoding that understands [`Timestamp`](crate::timestamp::Timestamp).
//!
//! Plain serde_json has no notion of a date, so every payload leaving the
//! services goes through [`JsonEncoder`]: timestamps are written as
//! `"YYYY-MM-DDTHH:MM:SSZ"` and everything else is emitted exactly as
//! serde_json would.

mod encoder;
mod finite;
mod value;

pub use encoder::JsonEncoder;
pub use value::JsonValue;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("value is not JSON serializable: {0}")]
    UnsupportedType(String),
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::UnsupportedType(err.to_string())
    }
}
