//! The tagged value container.
//!
//! [`DocValue`] is a recursive sum type with four states: empty, map, array,
//! and variant (an opaque scalar leaf). Exactly one state is active at any
//! time, which the enum guarantees structurally. The container owns its
//! payload outright; children of a map or array are owned by their slot, so
//! ownership always forms a tree and cycles cannot be built.
//!
//! Key design decisions:
//!
//! - **State transitions replace the whole value**: `set_kind` and the
//!   `set_*` mutators assign `*self`, so the previous payload is dropped
//!   before the new state becomes observable. There is no window in which
//!   two payloads exist.
//! - **Contract violations are reported, not asserted**: wrong-kind access,
//!   an attempted transition to the empty state, and empty children in a
//!   populated tree all return [`ValueError`] unconditionally, in debug and
//!   release builds alike.
//! - **Absence is not an error**: looking up a missing map key or an
//!   out-of-range array index on a value of the right kind yields
//!   `Ok(None)`. Only calling a lookup on the wrong kind is an error.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValueError;
use crate::key::{Key, KeyPolicy, Ordinal};

/// The map payload: keys unique under the policy `P`, entries ordered by it.
pub type Map<S, P = Ordinal> = BTreeMap<Key<P>, DocValue<S, P>>;

/// The array payload: an ordered sequence of values.
pub type Array<S, P = Ordinal> = Vec<DocValue<S, P>>;

/// Discriminant of a [`DocValue`] state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// No payload.
    Empty,
    /// A key-to-value mapping.
    Map,
    /// An ordered sequence.
    Array,
    /// A single opaque scalar.
    Variant,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Empty => "empty",
            Kind::Map => "map",
            Kind::Array => "array",
            Kind::Variant => "variant",
        };
        f.write_str(name)
    }
}

/// A generic in-memory JSON-equivalent document value.
///
/// `S` is the externally supplied scalar type stored under the variant state
/// (see [`Scalar`](crate::Scalar)); `P` is the map key comparison policy.
/// Cloning deep-copies the whole subtree; [`take`](DocValue::take) moves the
/// contents out in constant time and leaves the source empty.
///
/// # Example
///
/// ```
/// use docval_core::{DocValue, JsonScalar, Kind, Map};
///
/// let mut entries = Map::new();
/// entries.insert("port".into(), DocValue::variant(JsonScalar::from(8080_i64)));
/// let value: DocValue<JsonScalar> = DocValue::map(entries)?;
///
/// assert_eq!(value.kind(), Kind::Map);
/// assert!(value.get("port")?.is_some());
/// assert!(value.get("host")?.is_none());
/// # Ok::<(), docval_core::ValueError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum DocValue<S, P: KeyPolicy = Ordinal> {
    /// No payload. The default state, and the state left behind by
    /// [`clear`](DocValue::clear) and [`take`](DocValue::take).
    Empty,
    /// A mapping from policy-ordered keys to child values.
    Map(Map<S, P>),
    /// An ordered sequence of child values.
    Array(Array<S, P>),
    /// A single scalar leaf.
    Variant(S),
}

impl<S, P: KeyPolicy> Default for DocValue<S, P> {
    fn default() -> Self {
        DocValue::Empty
    }
}

impl<S, P: KeyPolicy> DocValue<S, P> {
    /// Construct a variant holding `scalar`.
    pub fn variant(scalar: S) -> Self {
        DocValue::Variant(scalar)
    }

    /// Construct an array from `elements`.
    ///
    /// Fails with [`ValueError::EmptyChild`] if any element is empty: a
    /// populated tree never contains empty slots.
    pub fn array(elements: Array<S, P>) -> Result<Self, ValueError> {
        if elements.iter().any(Self::is_empty) {
            return Err(ValueError::EmptyChild);
        }
        Ok(DocValue::Array(elements))
    }

    /// Construct a map from `entries`.
    ///
    /// Fails with [`ValueError::EmptyChild`] if any value is empty.
    pub fn map(entries: Map<S, P>) -> Result<Self, ValueError> {
        if entries.values().any(Self::is_empty) {
            return Err(ValueError::EmptyChild);
        }
        Ok(DocValue::Map(entries))
    }

    /// Construct a value of `kind` with a fresh, empty payload.
    ///
    /// Rejects `Kind::Empty` the same way [`set_kind`](DocValue::set_kind)
    /// does; use `DocValue::default()` for an empty value.
    pub fn of_kind(kind: Kind) -> Result<Self, ValueError>
    where
        S: Default,
    {
        let mut value = Self::default();
        value.set_kind(kind)?;
        Ok(value)
    }

    /// The active state's discriminant.
    pub fn kind(&self) -> Kind {
        match self {
            DocValue::Empty => Kind::Empty,
            DocValue::Map(_) => Kind::Map,
            DocValue::Array(_) => Kind::Array,
            DocValue::Variant(_) => Kind::Variant,
        }
    }

    /// Whether the empty state is active.
    pub fn is_empty(&self) -> bool {
        matches!(self, DocValue::Empty)
    }

    /// Whether the map state is active.
    pub fn is_map(&self) -> bool {
        matches!(self, DocValue::Map(_))
    }

    /// Whether the array state is active.
    pub fn is_array(&self) -> bool {
        matches!(self, DocValue::Array(_))
    }

    /// Whether the variant state is active.
    pub fn is_variant(&self) -> bool {
        matches!(self, DocValue::Variant(_))
    }

    /// Switch to `kind` with a fresh, empty payload.
    ///
    /// A no-op when `kind` is already active: the existing payload is kept
    /// untouched. Switching drops the old payload before installing the new
    /// one. `Kind::Empty` is rejected with [`ValueError::EmptyTransition`];
    /// the empty state is only reachable through [`clear`](DocValue::clear).
    pub fn set_kind(&mut self, kind: Kind) -> Result<(), ValueError>
    where
        S: Default,
    {
        if kind == Kind::Empty {
            return Err(ValueError::EmptyTransition);
        }
        if kind == self.kind() {
            return Ok(());
        }
        *self = match kind {
            Kind::Map => DocValue::Map(Map::new()),
            Kind::Array => DocValue::Array(Array::new()),
            Kind::Variant => DocValue::Variant(S::default()),
            Kind::Empty => unreachable!("rejected above"),
        };
        Ok(())
    }

    /// Replace the contents with the variant state holding `scalar`.
    pub fn set_variant(&mut self, scalar: S) {
        *self = DocValue::Variant(scalar);
    }

    /// Replace the contents with the array state holding `elements`.
    ///
    /// Fails with [`ValueError::EmptyChild`] (leaving `self` untouched) if
    /// any element is empty.
    pub fn set_array(&mut self, elements: Array<S, P>) -> Result<(), ValueError> {
        *self = Self::array(elements)?;
        Ok(())
    }

    /// Replace the contents with the map state holding `entries`.
    ///
    /// Fails with [`ValueError::EmptyChild`] (leaving `self` untouched) if
    /// any value is empty.
    pub fn set_map(&mut self, entries: Map<S, P>) -> Result<(), ValueError> {
        *self = Self::map(entries)?;
        Ok(())
    }

    /// Reset to the empty state, dropping any payload. A no-op when already
    /// empty.
    pub fn clear(&mut self) {
        *self = DocValue::Empty;
    }

    /// Move the contents out, leaving `self` empty.
    ///
    /// Constant time: the payload is transferred, not copied. Use
    /// [`std::mem::swap`] to exchange the contents of two values instead.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Borrow the scalar payload, or report [`ValueError::WrongKind`].
    pub fn as_variant(&self) -> Result<&S, ValueError> {
        match self {
            DocValue::Variant(scalar) => Ok(scalar),
            other => Err(other.wrong_kind(Kind::Variant)),
        }
    }

    /// Mutably borrow the scalar payload, or report [`ValueError::WrongKind`].
    pub fn as_variant_mut(&mut self) -> Result<&mut S, ValueError> {
        match self {
            DocValue::Variant(scalar) => Ok(scalar),
            other => Err(other.wrong_kind(Kind::Variant)),
        }
    }

    /// Borrow the array payload, or report [`ValueError::WrongKind`].
    pub fn as_array(&self) -> Result<&Array<S, P>, ValueError> {
        match self {
            DocValue::Array(elements) => Ok(elements),
            other => Err(other.wrong_kind(Kind::Array)),
        }
    }

    /// Mutably borrow the array payload, or report [`ValueError::WrongKind`].
    ///
    /// Supports building contents incrementally; run
    /// [`validate`](DocValue::validate) once the structure is complete.
    pub fn as_array_mut(&mut self) -> Result<&mut Array<S, P>, ValueError> {
        match self {
            DocValue::Array(elements) => Ok(elements),
            other => Err(other.wrong_kind(Kind::Array)),
        }
    }

    /// Borrow the map payload, or report [`ValueError::WrongKind`].
    pub fn as_map(&self) -> Result<&Map<S, P>, ValueError> {
        match self {
            DocValue::Map(entries) => Ok(entries),
            other => Err(other.wrong_kind(Kind::Map)),
        }
    }

    /// Mutably borrow the map payload, or report [`ValueError::WrongKind`].
    ///
    /// Supports building contents incrementally; run
    /// [`validate`](DocValue::validate) once the structure is complete.
    pub fn as_map_mut(&mut self) -> Result<&mut Map<S, P>, ValueError> {
        match self {
            DocValue::Map(entries) => Ok(entries),
            other => Err(other.wrong_kind(Kind::Map)),
        }
    }

    /// Whether the map contains `key` under the policy `P`.
    ///
    /// Calling this on anything but a map reports
    /// [`ValueError::WrongKind`].
    pub fn contains_key(&self, key: &str) -> Result<bool, ValueError> {
        Ok(self.as_map()?.contains_key(&Key::new(key)))
    }

    /// Look up a map entry by key.
    ///
    /// Wrong-kind access is the reported error; a missing key is the stable
    /// absent result `Ok(None)`. Check [`contains_key`](DocValue::contains_key)
    /// first when absence should be treated as a caller bug.
    pub fn get(&self, key: &str) -> Result<Option<&Self>, ValueError> {
        Ok(self.as_map()?.get(&Key::new(key)))
    }

    /// Mutable counterpart of [`get`](DocValue::get).
    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut Self>, ValueError> {
        Ok(self.as_map_mut()?.get_mut(&Key::new(key)))
    }

    /// Look up an array element by position.
    ///
    /// Wrong-kind access is the reported error; an out-of-range index is the
    /// stable absent result `Ok(None)`.
    pub fn at(&self, index: usize) -> Result<Option<&Self>, ValueError> {
        Ok(self.as_array()?.get(index))
    }

    /// Mutable counterpart of [`at`](DocValue::at).
    pub fn at_mut(&mut self, index: usize) -> Result<Option<&mut Self>, ValueError> {
        Ok(self.as_array_mut()?.get_mut(index))
    }

    /// Check that no map value or array element anywhere in the tree is
    /// empty.
    ///
    /// The fallible constructors enforce this on whole payloads; trees built
    /// incrementally through the mutable accessors should be validated once
    /// complete. The walk is iterative, so nesting depth is not limited by
    /// the thread's stack.
    pub fn validate(&self) -> Result<(), ValueError> {
        let mut stack: Vec<&Self> = vec![self];
        while let Some(value) = stack.pop() {
            match value {
                DocValue::Map(entries) => {
                    for child in entries.values() {
                        if child.is_empty() {
                            return Err(ValueError::EmptyChild);
                        }
                        stack.push(child);
                    }
                }
                DocValue::Array(elements) => {
                    for child in elements {
                        if child.is_empty() {
                            return Err(ValueError::EmptyChild);
                        }
                        stack.push(child);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn wrong_kind(&self, expected: Kind) -> ValueError {
        ValueError::WrongKind {
            expected,
            found: self.kind(),
        }
    }
}
