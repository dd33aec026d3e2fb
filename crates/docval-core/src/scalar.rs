//! The scalar (leaf) contract.
//!
//! The variant state of [`DocValue`](crate::DocValue) stores one value of an
//! externally supplied scalar type. The container treats it as opaque: it
//! only needs default construction (the empty scalar), equality, and a
//! queryable type tag. Conversion against a concrete document model is
//! expressed by the two companion traits, so a scalar type opts into each
//! representation it understands.

use crate::error::Result;
use crate::node::{SourceNode, TargetNode};

/// An opaque leaf value.
///
/// The default value must be the empty scalar, and
/// [`is_empty`](Scalar::is_empty) must hold for it. Equality is the scalar
/// type's own contract and is what variant equality of the container
/// delegates to.
pub trait Scalar: Clone + PartialEq + Default {
    /// Tag describing the underlying type of a scalar value.
    type Tag;

    /// Whether this is the empty (null) scalar.
    fn is_empty(&self) -> bool;

    /// The underlying type tag of this value.
    fn tag(&self) -> Self::Tag;
}

/// Decoding of source leaf nodes into scalars.
pub trait DecodeScalar<N: SourceNode>: Scalar {
    /// Decode a leaf node of the source representation.
    ///
    /// Returns the empty scalar when the node's representation is not
    /// recognized; [`import`](crate::import) turns that into a reported
    /// failure.
    fn decode(node: &N) -> Self;
}

/// Encoding of scalars into a target representation.
pub trait EncodeScalar<N: TargetNode>: Scalar {
    /// Encode this scalar as a node of the target representation.
    ///
    /// The target's allocation context is forwarded so the encoding can
    /// allocate through it. Fails when the value cannot be represented.
    fn encode(&self, cx: &mut N::Context) -> Result<N>;
}
