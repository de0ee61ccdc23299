// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus path reconciliation.

use lodestar_scene::{NodeId, Scene, States};
use smallvec::SmallVec;

use crate::error::FocusError;
use crate::handlers::{FocusChange, FocusHandlers, FocusSlot};
use crate::path::FocusPath;

/// Recompute the focus path for `current` and fire the transitions.
///
/// ## Semantics
///
/// 1. Walk from `current` through its parents to the root, building the new
///    path leaf first. `None` yields an empty path.
/// 2. Every visited element not already carrying [`States::FOCUS`] gets the
///    flag, then its `on_focus` callback runs. Elements still flagged from an
///    earlier pass are not notified again.
/// 3. Every element of `previous_path` missing from the new path loses the
///    flag, then its `on_blur` callback runs. Removed elements only get the
///    callback.
/// 4. The new path is returned; publishing it is up to the caller.
///
/// All callbacks receive `(current, previous)`. Focus callbacks run leaf to
/// root and all of them complete before the first blur callback.
///
/// ## Errors
///
/// - [`FocusError::StaleNode`] if `current` is not alive; nothing is changed.
/// - [`FocusError::Handler`] for the first failing callback. The pass stops
///   there: flags already toggled stay toggled and later transitions do not fire.
///
/// ## Example
///
/// ```rust
/// use lodestar_focus::{reconcile, FocusHandlers, FocusPath};
/// use lodestar_scene::{NodeFlags, Scene};
///
/// let mut scene = Scene::new();
/// let root = scene.insert(None, NodeFlags::default()).unwrap();
/// let leaf = scene.insert(Some(root), NodeFlags::default()).unwrap();
/// let mut handlers = FocusHandlers::new();
///
/// let path = reconcile(&mut scene, &mut handlers, Some(leaf), None, &FocusPath::new()).unwrap();
/// assert_eq!(path.as_slice(), &[leaf, root]);
///
/// let path = reconcile(&mut scene, &mut handlers, None, Some(leaf), &path).unwrap();
/// assert!(path.is_empty());
/// ```
pub fn reconcile(
    scene: &mut Scene,
    handlers: &mut FocusHandlers,
    current: Option<NodeId>,
    previous: Option<NodeId>,
    previous_path: &FocusPath,
) -> Result<FocusPath, FocusError> {
    if let Some(node) = current
        && !scene.is_alive(node)
    {
        return Err(FocusError::StaleNode(node));
    }

    let mut chain: SmallVec<[NodeId; 8]> = SmallVec::new();
    let mut cursor = current;
    while let Some(node) = cursor {
        if scene.insert_state(node, States::FOCUS) {
            tracing::trace!(?node, "entered focus path");
            handlers.invoke(
                FocusSlot::Focus,
                &FocusChange {
                    scene: &*scene,
                    node,
                    current,
                    previous,
                },
            )?;
        }
        chain.push(node);
        cursor = scene.parent_of(node);
    }

    for &node in previous_path.iter() {
        if chain.contains(&node) {
            continue;
        }
        scene.remove_state(node, States::FOCUS);
        tracing::trace!(?node, "left focus path");
        handlers.invoke(
            FocusSlot::Blur,
            &FocusChange {
                scene: &*scene,
                node,
                current,
                previous,
            },
        )?;
    }

    Ok(FocusPath::from_slice(&chain))
}
