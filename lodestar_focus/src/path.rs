// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;

use lodestar_scene::NodeId;

/// The published focus chain: the focused leaf first, then each ancestor, root last.
///
/// A path is never mutated after it is built. Cloning is a reference-count bump,
/// so readers hold a consistent snapshot even if a newer path is published while
/// they iterate.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FocusPath(Rc<[NodeId]>);

impl FocusPath {
    /// The empty path (nothing focused).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from a leaf-first slice.
    pub fn from_slice(nodes: &[NodeId]) -> Self {
        Self(Rc::from(nodes))
    }

    /// The focused leaf, if any.
    pub fn leaf(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    /// The root of the focused chain, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    /// Elements of the path, leaf first.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    /// Whether `node` is on the path.
    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains(&node)
    }

    /// Whether both values share the same allocation (same publication).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl core::ops::Deref for FocusPath {
    type Target = [NodeId];

    fn deref(&self) -> &[NodeId] {
        &self.0
    }
}

impl core::fmt::Debug for FocusPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl FromIterator<NodeId> for FocusPath {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
