pub mod json;
pub mod timestamp;
pub mod tracing;

pub use json::{EncodeError, JsonEncoder, JsonValue};
pub use timestamp::{Timestamp, TimestampError};
