//! Outbound conversion: a [`DocValue`] into an external document tree.
//!
//! Mapping of container states:
//!
//! - map → object, each child exported before it is attached, attachment in
//!   the map's iteration order (the key policy's order)
//! - array → array, elements in order
//! - empty → null
//! - variant → the scalar's own encoding, which may fail
//!
//! The walk is fail-fast and makes no partial-output guarantee. The same
//! depth limit as the import side applies: values can be built arbitrarily
//! deep through the mutable accessors, so the outbound walk needs stack
//! protection too.

use crate::error::{ConvertError, Result};
use crate::import::MAX_DEPTH;
use crate::key::KeyPolicy;
use crate::node::TargetNode;
use crate::scalar::EncodeScalar;
use crate::value::DocValue;

/// Export a value into the target representation, with the
/// [`MAX_DEPTH`] nesting limit. `cx` is the representation's allocation
/// context, forwarded to every write.
pub fn export<N, S, P>(value: &DocValue<S, P>, cx: &mut N::Context) -> Result<N>
where
    N: TargetNode,
    S: EncodeScalar<N>,
    P: KeyPolicy,
{
    export_with_depth(value, cx, MAX_DEPTH)
}

/// Export a value nested at most `max_depth` levels deep.
///
/// A bare variant or empty value sits at depth 1. Deeper nesting fails with
/// [`ConvertError::DepthLimit`].
pub fn export_with_depth<N, S, P>(
    value: &DocValue<S, P>,
    cx: &mut N::Context,
    max_depth: usize,
) -> Result<N>
where
    N: TargetNode,
    S: EncodeScalar<N>,
    P: KeyPolicy,
{
    export_node(value, cx, max_depth, max_depth)
}

fn export_node<N, S, P>(
    value: &DocValue<S, P>,
    cx: &mut N::Context,
    remaining: usize,
    limit: usize,
) -> Result<N>
where
    N: TargetNode,
    S: EncodeScalar<N>,
    P: KeyPolicy,
{
    if remaining == 0 {
        return Err(ConvertError::DepthLimit { limit });
    }
    match value {
        DocValue::Map(entries) => {
            let mut object = N::object(cx);
            for (key, child) in entries {
                let node = export_node(child, cx, remaining - 1, limit)?;
                object.insert_member(key.as_str(), node, cx);
            }
            Ok(object)
        }
        DocValue::Array(elements) => {
            let mut array = N::array(cx);
            for child in elements {
                let node = export_node(child, cx, remaining - 1, limit)?;
                array.push_element(node, cx);
            }
            Ok(array)
        }
        DocValue::Empty => Ok(N::null(cx)),
        DocValue::Variant(scalar) => scalar.encode(cx),
    }
}
