//! # docval-core
//!
//! A generic, type-erased JSON-equivalent value container: a tagged union
//! representing a map, an array, a scalar ("variant"), or an empty state,
//! with deep-copy and move semantics and bidirectional conversion to/from an
//! external tree-structured document model.
//!
//! The container is parameterized over the scalar leaf type and the map key
//! comparison policy, and the conversion layer is an abstraction over
//! "document node" capabilities rather than a binding to one JSON library.
//! An adapter for `serde_json` ships behind the default-on `json` feature.
//!
//! ## Quick start
//!
//! ```rust
//! use docval_core::{export, import, JsonValue, Kind};
//!
//! let doc = serde_json::json!({
//!     "name": "reverb",
//!     "sends": [{"bus": "music", "gain": -6.0}],
//! });
//!
//! let value: JsonValue = import(&doc)?;
//! assert_eq!(value.kind(), Kind::Map);
//! assert!(value.get("sends")?.is_some());
//!
//! let back: serde_json::Value = export(&value, &mut ())?;
//! assert_eq!(back, doc);
//! # Ok::<(), docval_core::ConvertError>(())
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`DocValue`] container: states, transitions, accessors
//! - [`key`] — map keys with a pluggable comparison policy
//! - [`scalar`] — the opaque leaf contract and its codec traits
//! - [`node`] — the external document-model abstraction
//! - [`import`] — external tree → [`DocValue`]
//! - [`export`] — [`DocValue`] → external tree
//! - [`json`] — bundled serde_json adapter (feature `json`)
//! - [`error`] — contract-violation and conversion error types

pub mod error;
pub mod export;
pub mod import;
#[cfg(feature = "json")]
pub mod json;
pub mod key;
pub mod node;
pub mod scalar;
pub mod value;

pub use error::{ConvertError, Result, ValueError};
pub use export::{export, export_with_depth};
pub use import::{import, import_with_depth, MAX_DEPTH};
#[cfg(feature = "json")]
pub use json::{JsonScalar, JsonScalarTag, JsonValue};
pub use key::{CaseInsensitive, Key, KeyPolicy, Ordinal};
pub use node::{NodeClass, SourceNode, TargetNode};
pub use scalar::{DecodeScalar, EncodeScalar, Scalar};
pub use value::{Array, DocValue, Kind, Map};
