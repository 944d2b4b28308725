use serde::Serialize;

use crate::json::finite::ensure_finite;
use crate::json::value::Ordered;
use crate::json::{EncodeError, JsonValue};

/// Encodes [`JsonValue`]s and serializable payloads to compact JSON text.
///
/// The encoder holds no state besides its options, so it is `Copy` and can
/// be shared freely between request handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonEncoder {
    sort_keys: bool,
}

impl JsonEncoder {
    pub const fn new() -> Self {
        Self { sort_keys: false }
    }

    /// Emit object keys sorted instead of in insertion order.
    #[must_use]
    pub const fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    pub fn encode(&self, value: &JsonValue) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(&self.ordered(value))?)
    }

    pub fn encode_to_vec(&self, value: &JsonValue) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&self.ordered(value))?)
    }

    /// Encodes any serde payload.
    ///
    /// The payload is first lowered to a [`JsonValue`], so key ordering follows
    /// the same rules as [`JsonEncoder::encode`]. Types that serde_json cannot
    /// represent (maps with non-string keys, NaN or infinite floats,
    /// serializers that fail) are reported as [`EncodeError::UnsupportedType`].
    pub fn encode_serializable<T>(&self, value: &T) -> Result<String, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        self.encode(&lower(value)?)
    }

    pub fn encode_serializable_to_vec<T>(&self, value: &T) -> Result<Vec<u8>, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        self.encode_to_vec(&lower(value)?)
    }

    const fn ordered<'a>(&self, value: &'a JsonValue) -> Ordered<'a> {
        Ordered {
            value,
            sort_keys: self.sort_keys,
        }
    }
}

fn lower<T>(value: &T) -> Result<JsonValue, EncodeError>
where
    T: Serialize + ?Sized,
{
    ensure_finite(value)?;
    Ok(JsonValue::from(serde_json::to_value(value)?))
}
