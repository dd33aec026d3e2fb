//! Bundled adapter for serde_json's document model.
//!
//! Implements [`SourceNode`] and [`TargetNode`] for [`serde_json::Value`]
//! (no allocation context needed, so `Context = ()`), and ships
//! [`JsonScalar`], a ready-made scalar covering serde_json's leaf
//! repertoire. serde_json's number representation is preserved exactly
//! through a roundtrip: an integer-typed `5` stays an integer, a
//! float-typed `5.0` stays a float.
//!
//! ```
//! use docval_core::{export, import, JsonValue};
//!
//! let doc = serde_json::json!({"name": "mixer", "levels": [0.5, 0.75]});
//! let value: JsonValue = import(&doc)?;
//! let back: serde_json::Value = export(&value, &mut ())?;
//! assert_eq!(back, doc);
//! # Ok::<(), docval_core::ConvertError>(())
//! ```

use serde_json::{Number, Value};

use crate::error::{ConvertError, Result};
use crate::key::Ordinal;
use crate::node::{NodeClass, SourceNode, TargetNode};
use crate::scalar::{DecodeScalar, EncodeScalar, Scalar};
use crate::value::DocValue;

/// Document value specialized to the bundled JSON scalar type.
pub type JsonValue<P = Ordinal> = DocValue<JsonScalar, P>;

impl SourceNode for Value {
    fn class(&self) -> NodeClass {
        match self {
            Value::Object(_) => NodeClass::Object,
            Value::Array(_) => NodeClass::Array,
            Value::Null => NodeClass::Null,
            _ => NodeClass::Scalar,
        }
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a Self)> {
        self.as_object()
            .into_iter()
            .flat_map(|members| members.iter().map(|(key, value)| (key.as_str(), value)))
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a Self> {
        self.as_array().into_iter().flatten()
    }
}

impl TargetNode for Value {
    type Context = ();

    fn null(_cx: &mut ()) -> Self {
        Value::Null
    }

    fn object(_cx: &mut ()) -> Self {
        Value::Object(serde_json::Map::new())
    }

    fn array(_cx: &mut ()) -> Self {
        Value::Array(Vec::new())
    }

    fn insert_member(&mut self, key: &str, value: Self, _cx: &mut ()) {
        if let Value::Object(members) = self {
            members.insert(key.to_owned(), value);
        }
    }

    fn push_element(&mut self, value: Self, _cx: &mut ()) {
        if let Value::Array(elements) = self {
            elements.push(value);
        }
    }
}

/// A scalar covering serde_json's leaf values.
///
/// `Null` is the empty scalar. Integers keep serde_json's signed/unsigned
/// split so that values above `i64::MAX` survive a roundtrip.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum JsonScalar {
    /// The empty scalar; also what a JSON null decodes to.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer above `i64::MAX`.
    Uint(u64),
    /// A floating-point number. Finite when decoded from JSON; a non-finite
    /// value can be constructed directly but refuses to encode.
    Float(f64),
    /// A string.
    Text(String),
}

/// Type tag reported by [`JsonScalar::tag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonScalarTag {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    Text,
}

impl Scalar for JsonScalar {
    type Tag = JsonScalarTag;

    fn is_empty(&self) -> bool {
        matches!(self, JsonScalar::Null)
    }

    fn tag(&self) -> JsonScalarTag {
        match self {
            JsonScalar::Null => JsonScalarTag::Null,
            JsonScalar::Bool(_) => JsonScalarTag::Bool,
            JsonScalar::Int(_) => JsonScalarTag::Int,
            JsonScalar::Uint(_) => JsonScalarTag::Uint,
            JsonScalar::Float(_) => JsonScalarTag::Float,
            JsonScalar::Text(_) => JsonScalarTag::Text,
        }
    }
}

impl DecodeScalar<Value> for JsonScalar {
    fn decode(node: &Value) -> Self {
        match node {
            Value::Bool(flag) => JsonScalar::Bool(*flag),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    JsonScalar::Int(int)
                } else if let Some(uint) = number.as_u64() {
                    JsonScalar::Uint(uint)
                } else if let Some(float) = number.as_f64() {
                    JsonScalar::Float(float)
                } else {
                    JsonScalar::Null
                }
            }
            Value::String(text) => JsonScalar::Text(text.clone()),
            // Objects, arrays, and null are classified before scalar
            // decoding is reached.
            _ => JsonScalar::Null,
        }
    }
}

impl EncodeScalar<Value> for JsonScalar {
    fn encode(&self, _cx: &mut ()) -> Result<Value> {
        match self {
            JsonScalar::Null => Ok(Value::Null),
            JsonScalar::Bool(flag) => Ok(Value::Bool(*flag)),
            JsonScalar::Int(int) => Ok(Value::Number(Number::from(*int))),
            JsonScalar::Uint(uint) => Ok(Value::Number(Number::from(*uint))),
            JsonScalar::Float(float) => Number::from_f64(*float)
                .map(Value::Number)
                .ok_or_else(|| ConvertError::UnsupportedScalar(format!("non-finite float {float}"))),
            JsonScalar::Text(text) => Ok(Value::String(text.clone())),
        }
    }
}

impl From<bool> for JsonScalar {
    fn from(flag: bool) -> Self {
        JsonScalar::Bool(flag)
    }
}

impl From<i64> for JsonScalar {
    fn from(int: i64) -> Self {
        JsonScalar::Int(int)
    }
}

impl From<u64> for JsonScalar {
    fn from(uint: u64) -> Self {
        JsonScalar::Uint(uint)
    }
}

impl From<f64> for JsonScalar {
    fn from(float: f64) -> Self {
        JsonScalar::Float(float)
    }
}

impl From<&str> for JsonScalar {
    fn from(text: &str) -> Self {
        JsonScalar::Text(text.to_owned())
    }
}

impl From<String> for JsonScalar {
    fn from(text: String) -> Self {
        JsonScalar::Text(text)
    }
}
