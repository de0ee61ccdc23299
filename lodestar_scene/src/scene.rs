// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core arena implementation: structure, state flags, queries.

use alloc::vec::Vec;

use crate::error::SceneError;
use crate::types::{NodeFlags, NodeId, States};

/// Generational arena of UI elements.
///
/// Structural changes take effect immediately. Queries on stale identifiers
/// return `None` (or an empty slice) rather than panicking.
///
/// ## Example
///
/// ```rust
/// use lodestar_scene::{NodeFlags, Scene};
///
/// let mut scene = Scene::new();
/// let root = scene.insert(None, NodeFlags::default()).unwrap();
/// let child = scene.insert(Some(root), NodeFlags::default()).unwrap();
/// assert_eq!(scene.parent_of(child), Some(root));
///
/// scene.remove(root);
/// assert!(!scene.is_alive(child));
/// ```
#[derive(Clone, Default)]
pub struct Scene {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Scene")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    states: States,
    flags: NodeFlags,
}

impl Node {
    fn new(generation: u32, flags: NodeFlags) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            states: States::empty(),
            flags,
        }
    }
}

/// Iterator over an element and its ancestors, leaf first.
///
/// Returned by [`Scene::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    scene: &'a Scene,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.scene.parent_of(current);
        Some(current)
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    ///
    /// Fails with [`SceneError::StaleNode`] if `parent` is not alive.
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        flags: NodeFlags,
    ) -> Result<NodeId, SceneError> {
        if let Some(p) = parent
            && !self.is_alive(p)
        {
            return Err(SceneError::StaleNode(p));
        }
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, flags));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, flags)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        Ok(id)
    }

    /// Remove an element and its subtree.
    ///
    /// Returns every removed id, `id` first. Stale ids are ignored and yield
    /// an empty list.
    pub fn remove(&mut self, id: NodeId) -> Vec<NodeId> {
        let mut removed = Vec::new();
        if !self.is_alive(id) {
            return removed;
        }
        if let Some(parent) = self.parent_of(id) {
            self.unlink_parent(id, parent);
        }
        // Iterative so deep subtrees cannot overflow the stack.
        let mut stack = Vec::from([id]);
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes[current.idx()].take() {
                stack.extend(node.children);
                self.free_list.push(current.idx());
                removed.push(current);
            }
        }
        removed
    }

    /// Move `id` under `new_parent` (or detach it as a root if `None`).
    ///
    /// The element is appended after the new parent's existing children.
    /// Fails if either id is stale, or with [`SceneError::Cycle`] if
    /// `new_parent` is `id` itself or one of its descendants.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> Result<(), SceneError> {
        if !self.is_alive(id) {
            return Err(SceneError::StaleNode(id));
        }
        if let Some(p) = new_parent {
            if !self.is_alive(p) {
                return Err(SceneError::StaleNode(p));
            }
            if self.ancestors(p).any(|a| a == id) {
                return Err(SceneError::Cycle {
                    node: id,
                    parent: p,
                });
            }
        }
        if let Some(parent) = self.parent_of(id) {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
        Ok(())
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// An id is live if its slot is occupied and the slot's generation matches.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Returns the parent of an element, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of an element, or an empty slice if it is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Position of `id` among its parent's children.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent_of(id)?;
        self.children_of(parent).iter().position(|&c| c == id)
    }

    /// Iterate `id` and its ancestors up to the root, leaf first.
    ///
    /// Yields nothing for a stale id.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            scene: self,
            next: self.is_alive(id).then_some(id),
        }
    }

    /// Style states of a live element.
    pub fn states(&self, id: NodeId) -> Option<States> {
        self.node_opt(id).map(|n| n.states)
    }

    /// Whether a live element carries all of `states`. False for stale ids.
    pub fn has_state(&self, id: NodeId, states: States) -> bool {
        self.node_opt(id).is_some_and(|n| n.states.contains(states))
    }

    /// Add `states` to an element. Returns true if anything changed.
    pub fn insert_state(&mut self, id: NodeId, states: States) -> bool {
        let Some(n) = self.node_opt_mut(id) else {
            return false;
        };
        let before = n.states;
        n.states.insert(states);
        before != n.states
    }

    /// Remove `states` from an element. Returns true if anything changed.
    pub fn remove_state(&mut self, id: NodeId, states: States) -> bool {
        let Some(n) = self.node_opt_mut(id) else {
            return false;
        };
        let before = n.states;
        n.states.remove(states);
        before != n.states
    }

    /// Behavioral flags of a live element.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.flags)
    }

    /// Update behavioral flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.flags = flags;
        }
    }

    // --- internals ---

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.push(id);
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = None;
        }
    }
}
