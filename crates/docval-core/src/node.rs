//! Abstraction over an external tree-structured document model.
//!
//! The conversion walkers never name a concrete JSON library; they work
//! against these two capability traits. [`SourceNode`] is the read side used
//! by [`import`](crate::import): classification plus member/element
//! iteration. [`TargetNode`] is the write side used by
//! [`export`](crate::export): node construction and appending, with the
//! representation's allocator (or `()` when it has none) threaded through
//! every write as the associated `Context`.
//!
//! The bundled serde_json adapter lives in [`json`](crate::json); other
//! representations plug in the same way.

/// Classification of an external document node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeClass {
    /// A collection of named members.
    Object,
    /// An ordered sequence of elements.
    Array,
    /// The null/absent value.
    Null,
    /// A leaf value (string, number, boolean, or whatever else the
    /// representation treats as atomic).
    Scalar,
}

/// Read access to an external document tree.
pub trait SourceNode {
    /// Classify this node.
    fn class(&self) -> NodeClass;

    /// Iterate an object's members in source order.
    ///
    /// Must yield nothing when the node is not an object.
    fn members<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a Self)>;

    /// Iterate an array's elements in order.
    ///
    /// Must yield nothing when the node is not an array.
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a Self>;
}

/// Write access for building an external document tree.
pub trait TargetNode: Sized {
    /// Allocation context required by the representation's write operations.
    /// `()` for representations that allocate implicitly.
    type Context;

    /// Construct a null node.
    fn null(cx: &mut Self::Context) -> Self;

    /// Construct an empty object node.
    fn object(cx: &mut Self::Context) -> Self;

    /// Construct an empty array node.
    fn array(cx: &mut Self::Context) -> Self;

    /// Attach `value` to this object node under `key`.
    ///
    /// Only called on nodes created by [`object`](TargetNode::object).
    fn insert_member(&mut self, key: &str, value: Self, cx: &mut Self::Context);

    /// Append `value` to this array node.
    ///
    /// Only called on nodes created by [`array`](TargetNode::array).
    fn push_element(&mut self, value: Self, cx: &mut Self::Context);
}
