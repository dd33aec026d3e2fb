//! Inbound conversion: external document tree into a [`DocValue`].
//!
//! The walk is fail-fast: the first unrecognized scalar or depth overrun
//! aborts the whole import, and the caller must discard the result. Mapping
//! of source shapes:
//!
//! - object → map, members converted in source order (under a folding key
//!   policy, a later duplicate member replaces the earlier one, the same as
//!   plain map insertion)
//! - array → array, elements in order
//! - null → a variant holding the empty scalar
//! - leaf → a variant holding the decoded scalar; decoding to the empty
//!   scalar means the representation was not recognized and the import fails
//!
//! Children produced this way are never in the empty state, so the
//! populated-tree invariant holds for imported values by construction.

use crate::error::{ConvertError, Result};
use crate::key::{Key, KeyPolicy};
use crate::node::{NodeClass, SourceNode};
use crate::scalar::DecodeScalar;
use crate::value::{Array, DocValue, Map};

/// Default nesting-depth limit for the conversion traversals, shared by
/// [`import`] and [`export`](crate::export). Deep enough for any sane
/// document, shallow enough to fail before adversarial nesting exhausts the
/// stack.
pub const MAX_DEPTH: usize = 128;

/// Import an external document tree, with the [`MAX_DEPTH`] nesting limit.
pub fn import<N, S, P>(node: &N) -> Result<DocValue<S, P>>
where
    N: SourceNode,
    S: DecodeScalar<N>,
    P: KeyPolicy,
{
    import_with_depth(node, MAX_DEPTH)
}

/// Import an external document tree nested at most `max_depth` levels deep.
///
/// A bare leaf or null sits at depth 1. Documents nesting deeper than
/// `max_depth` fail with [`ConvertError::DepthLimit`].
pub fn import_with_depth<N, S, P>(node: &N, max_depth: usize) -> Result<DocValue<S, P>>
where
    N: SourceNode,
    S: DecodeScalar<N>,
    P: KeyPolicy,
{
    import_node(node, max_depth, max_depth)
}

fn import_node<N, S, P>(node: &N, remaining: usize, limit: usize) -> Result<DocValue<S, P>>
where
    N: SourceNode,
    S: DecodeScalar<N>,
    P: KeyPolicy,
{
    if remaining == 0 {
        return Err(ConvertError::DepthLimit { limit });
    }
    match node.class() {
        NodeClass::Object => {
            let mut entries = Map::new();
            for (name, child) in node.members() {
                entries.insert(Key::new(name), import_node(child, remaining - 1, limit)?);
            }
            Ok(DocValue::Map(entries))
        }
        NodeClass::Array => {
            let mut elements = Array::new();
            for child in node.elements() {
                elements.push(import_node(child, remaining - 1, limit)?);
            }
            Ok(DocValue::Array(elements))
        }
        NodeClass::Null => Ok(DocValue::Variant(S::default())),
        NodeClass::Scalar => {
            let scalar = S::decode(node);
            if scalar.is_empty() {
                Err(ConvertError::UnrecognizedScalar)
            } else {
                Ok(DocValue::Variant(scalar))
            }
        }
    }
}
