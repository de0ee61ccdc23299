// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear selection among a container's children.
//!
//! Row and column style containers keep one child "selected" and move the
//! selection with directional keys. This module holds the pure part of that:
//! given a container and the current child index, pick the next child that can
//! take focus.
//!
//! A child is selectable when it is alive, not flagged
//! [`NodeFlags::SKIP_FOCUS`], and not in state [`States::DISABLED`].
//!
//! ```rust
//! use lodestar_focus::nav::{next_selectable, Step, WrapMode};
//! use lodestar_scene::{NodeFlags, Scene};
//!
//! let mut scene = Scene::new();
//! let row = scene.insert(None, NodeFlags::default()).unwrap();
//! for flags in [NodeFlags::default(), NodeFlags::SKIP_FOCUS, NodeFlags::default()] {
//!     scene.insert(Some(row), flags).unwrap();
//! }
//!
//! // The spacer at index 1 is passed over.
//! assert_eq!(next_selectable(&scene, row, Some(0), Step::Forward, WrapMode::Never), Some(2));
//! assert_eq!(next_selectable(&scene, row, Some(2), Step::Forward, WrapMode::Never), None);
//! assert_eq!(next_selectable(&scene, row, Some(2), Step::Forward, WrapMode::Scope), Some(0));
//! ```

use lodestar_scene::{NodeFlags, NodeId, Scene, States};

/// Wrap mode for selection movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; moving past either end yields no candidate.
    #[default]
    Never,
    /// Wrap around within the container.
    Scope,
}

/// Direction of selection movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Towards higher child indices (right or down).
    Forward,
    /// Towards lower child indices (left or up).
    Backward,
}

/// Whether `node` can receive focus through navigation.
pub fn is_selectable(scene: &Scene, node: NodeId) -> bool {
    scene
        .flags(node)
        .is_some_and(|f| !f.contains(NodeFlags::SKIP_FOCUS))
        && !scene.has_state(node, States::DISABLED)
}

/// Index of the next selectable child of `container` after `from` in `step` direction.
///
/// With `from == None`, forward picks the first selectable child and backward
/// the last. Returns `None` when nothing else is selectable in that direction
/// (after wrapping, if enabled). The origin itself is never returned.
pub fn next_selectable(
    scene: &Scene,
    container: NodeId,
    from: Option<usize>,
    step: Step,
    wrap: WrapMode,
) -> Option<usize> {
    let children = scene.children_of(container);
    let selectable = |i: &usize| is_selectable(scene, children[*i]);

    match (step, from) {
        (Step::Forward, None) => (0..children.len()).find(selectable),
        (Step::Backward, None) => (0..children.len()).rev().find(selectable),
        (Step::Forward, Some(origin)) => (origin.saturating_add(1)..children.len())
            .find(selectable)
            .or_else(|| match wrap {
                WrapMode::Scope => (0..origin.min(children.len())).find(selectable),
                WrapMode::Never => None,
            }),
        (Step::Backward, Some(origin)) => (0..origin.min(children.len()))
            .rev()
            .find(selectable)
            .or_else(|| match wrap {
                WrapMode::Scope => (origin.saturating_add(1)..children.len())
                    .rev()
                    .find(selectable),
                WrapMode::Never => None,
            }),
    }
}
