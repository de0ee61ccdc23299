// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key dispatch: walk the focus path leaf to root and honor stop outcomes.
//!
//! ## Semantics
//!
//! - The raw event is mapped to an [`Action`] once, before the walk. An
//!   unmapped key is not an error: handlers see `action == None`.
//! - The anchor is the leaf of the path snapshot and stays fixed for the
//!   whole walk, even if a handler requests focus elsewhere.
//! - At each element the action handler runs first, then `on_key_press`.
//!   Either returning [`Outcome::Stop`] ends the walk at once; later slots of
//!   the same element and all ancestors are skipped.
//! - Walking past the root means nobody consumed the key.
//! - The first handler error aborts the walk.
//!
//! ## Example
//!
//! ```rust
//! use lodestar_focus::FocusPath;
//! use lodestar_input::{dispatch, Action, KeyEvent, KeyHandlers, KeyMap, Outcome, Slot};
//! use lodestar_scene::{NodeFlags, Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.insert(None, NodeFlags::default()).unwrap();
//! let leaf = scene.insert(Some(root), NodeFlags::default()).unwrap();
//! let path: FocusPath = scene.ancestors(leaf).collect();
//!
//! let mut handlers = KeyHandlers::new();
//! handlers.on_action(root, Action::Back, |cx| {
//!     assert_eq!(cx.anchor, cx.path[0]);
//!     Ok(Outcome::Stop)
//! });
//!
//! let keymap = KeyMap::default();
//! let event = KeyEvent::new("Backspace", 8);
//! let done = dispatch(&event, &keymap, &scene, &path, &mut handlers).unwrap();
//!
//! assert_eq!(done.action, Some(Action::Back));
//! let stop = done.stopped_at.unwrap();
//! assert_eq!((stop.node, stop.slot), (root, Slot::Action(Action::Back)));
//! ```

use lodestar_focus::{FocusPath, HandlerError};
use lodestar_scene::{NodeId, Scene};

use crate::action::Action;
use crate::error::DispatchError;
use crate::event::KeyEvent;
use crate::handlers::{KeyContext, KeyHandler, KeyHandlers, Outcome, Slot};
use crate::keymap::KeyMap;

/// Where a dispatch pass was stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopPoint {
    /// Element whose handler returned [`Outcome::Stop`].
    pub node: NodeId,
    /// The slot that stopped.
    pub slot: Slot,
}

/// Result of a completed dispatch pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatched {
    /// Action the event mapped to.
    pub action: Option<Action>,
    /// `None` if the walk ran past the root.
    pub stopped_at: Option<StopPoint>,
    /// Last focus request made by a handler during the pass.
    pub focus_request: Option<NodeId>,
}

impl Dispatched {
    /// Whether some handler consumed the key.
    pub fn handled(&self) -> bool {
        self.stopped_at.is_some()
    }
}

/// Route `event` through `path`, leaf to root.
///
/// `path` is read as given; handlers cannot alter it during the walk. See the
/// [module docs](self) for the propagation rules.
pub fn dispatch(
    event: &KeyEvent,
    keymap: &KeyMap,
    scene: &Scene,
    path: &FocusPath,
    handlers: &mut KeyHandlers,
) -> Result<Dispatched, DispatchError> {
    let action = keymap.lookup(event).cloned();
    if action.is_none() {
        tracing::debug!(key = %event.key, key_code = event.key_code, "no action mapped for key");
    }

    let mut done = Dispatched {
        action,
        stopped_at: None,
        focus_request: None,
    };
    let Some(anchor) = path.leaf() else {
        return Ok(done);
    };

    for &node in path.iter() {
        if let Some(action) = &done.action
            && let Some(handler) = handlers.action_mut(node, action)
        {
            let slot = Slot::Action(action.clone());
            let outcome = invoke(
                handler,
                event,
                Some(action),
                node,
                anchor,
                scene,
                path,
                &mut done.focus_request,
            )
            .map_err(|source| DispatchError::Handler {
                node,
                slot: slot.clone(),
                source,
            })?;
            if outcome == Outcome::Stop {
                tracing::trace!(?node, %slot, "key consumed");
                done.stopped_at = Some(StopPoint { node, slot });
                return Ok(done);
            }
        }

        if let Some(handler) = handlers.key_press_mut(node) {
            let outcome = invoke(
                handler,
                event,
                done.action.as_ref(),
                node,
                anchor,
                scene,
                path,
                &mut done.focus_request,
            )
            .map_err(|source| DispatchError::Handler {
                node,
                slot: Slot::KeyPress,
                source,
            })?;
            if outcome == Outcome::Stop {
                tracing::trace!(?node, slot = %Slot::KeyPress, "key consumed");
                done.stopped_at = Some(StopPoint {
                    node,
                    slot: Slot::KeyPress,
                });
                return Ok(done);
            }
        }
    }

    Ok(done)
}

fn invoke(
    handler: &mut KeyHandler,
    event: &KeyEvent,
    action: Option<&Action>,
    node: NodeId,
    anchor: NodeId,
    scene: &Scene,
    path: &FocusPath,
    focus_request: &mut Option<NodeId>,
) -> Result<Outcome, HandlerError> {
    let mut cx = KeyContext {
        event,
        action,
        node,
        anchor,
        scene,
        path,
        focus_request: *focus_request,
    };
    let outcome = handler(&mut cx)?;
    *focus_request = cx.focus_request;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use lodestar_scene::NodeFlags;

    type Log = Rc<RefCell<Vec<(NodeId, &'static str)>>>;

    /// Root <- Mid <- Leaf, focused at Leaf.
    fn chain() -> (Scene, [NodeId; 3], FocusPath) {
        let mut scene = Scene::new();
        let root = scene.insert(None, NodeFlags::default()).unwrap();
        let mid = scene.insert(Some(root), NodeFlags::default()).unwrap();
        let leaf = scene.insert(Some(mid), NodeFlags::default()).unwrap();
        let path = scene.ancestors(leaf).collect();
        (scene, [leaf, mid, root], path)
    }

    fn logging(
        log: &Log,
        tag: &'static str,
        outcome: Outcome,
    ) -> impl FnMut(&mut KeyContext<'_>) -> Result<Outcome, HandlerError> + 'static {
        let log = log.clone();
        move |cx| {
            log.borrow_mut().push((cx.node, tag));
            Ok(outcome)
        }
    }

    #[test]
    fn enter_consumed_by_middle_element() {
        let (scene, [leaf, mid, root], path) = chain();
        let log: Log = Rc::default();
        let mut handlers = KeyHandlers::new();
        handlers.on_key_press(leaf, logging(&log, "key", Outcome::Continue));
        handlers.on_action(mid, Action::Enter, logging(&log, "enter", Outcome::Stop));
        handlers.on_action(root, Action::Enter, logging(&log, "enter", Outcome::Stop));
        handlers.on_key_press(root, logging(&log, "key", Outcome::Stop));

        let done = dispatch(
            &KeyEvent::new("Enter", 13),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap();

        assert_eq!(*log.borrow(), vec![(leaf, "key"), (mid, "enter")]);
        assert_eq!(
            done.stopped_at,
            Some(StopPoint {
                node: mid,
                slot: Slot::Action(Action::Enter)
            })
        );
        assert!(done.handled());
    }

    #[test]
    fn action_handler_runs_before_key_press_on_same_element() {
        let (scene, [leaf, ..], path) = chain();
        let log: Log = Rc::default();
        let mut handlers = KeyHandlers::new();
        handlers.on_key_press(leaf, logging(&log, "key", Outcome::Continue));
        handlers.on_action(leaf, Action::Left, logging(&log, "left", Outcome::Continue));

        dispatch(
            &KeyEvent::new("ArrowLeft", 37),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap();
        assert_eq!(*log.borrow(), vec![(leaf, "left"), (leaf, "key")]);
    }

    #[test]
    fn stop_in_action_slot_skips_key_press_of_same_element() {
        let (scene, [leaf, ..], path) = chain();
        let log: Log = Rc::default();
        let mut handlers = KeyHandlers::new();
        handlers.on_action(leaf, Action::Left, logging(&log, "left", Outcome::Stop));
        handlers.on_key_press(leaf, logging(&log, "key", Outcome::Continue));

        dispatch(
            &KeyEvent::new("ArrowLeft", 37),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap();
        assert_eq!(*log.borrow(), vec![(leaf, "left")]);
    }

    #[test]
    fn unmapped_key_still_reaches_key_press() {
        let (scene, [leaf, mid, root], path) = chain();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut handlers = KeyHandlers::new();
        for n in [leaf, mid, root] {
            let s = seen.clone();
            handlers.on_key_press(n, move |cx| {
                s.borrow_mut()
                    .push((cx.node, cx.action.cloned(), cx.event.key.clone()));
                Ok(Outcome::Continue)
            });
        }
        // Action handlers are never consulted without an action.
        handlers.on_action(mid, Action::from("F13"), |_| Err("unreachable".into()));

        let done = dispatch(
            &KeyEvent::new("F13", 124),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap();

        assert_eq!(done.action, None);
        assert!(!done.handled());
        let f13 = || String::from("F13");
        assert_eq!(
            *seen.borrow(),
            vec![(leaf, None, f13()), (mid, None, f13()), (root, None, f13())]
        );
    }

    #[test]
    fn key_code_fallback_selects_action() {
        let (scene, [leaf, ..], path) = chain();
        let log: Log = Rc::default();
        let mut handlers = KeyHandlers::new();
        handlers.on_action(leaf, Action::Enter, logging(&log, "enter", Outcome::Stop));
        let mut keymap = KeyMap::default();
        keymap.bind(13_u32, Action::Enter);

        let done = dispatch(&KeyEvent::from_code(13), &keymap, &scene, &path, &mut handlers)
            .unwrap();
        assert_eq!(done.action, Some(Action::Enter));
        assert_eq!(*log.borrow(), vec![(leaf, "enter")]);
    }

    #[test]
    fn anchor_is_fixed_and_focus_request_is_deferred() {
        let (scene, [leaf, mid, root], path) = chain();
        let anchors = Rc::new(RefCell::new(Vec::new()));
        let mut handlers = KeyHandlers::new();
        for n in [leaf, mid, root] {
            let a = anchors.clone();
            handlers.on_key_press(n, move |cx| {
                a.borrow_mut().push((cx.anchor, cx.focus_request()));
                // Every element asks for focus on itself; the last one wins.
                cx.request_focus(cx.node);
                Ok(Outcome::Continue)
            });
        }

        let done = dispatch(
            &KeyEvent::new("Escape", 27),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap();

        assert_eq!(
            *anchors.borrow(),
            vec![(leaf, None), (leaf, Some(leaf)), (leaf, Some(mid))]
        );
        assert_eq!(done.focus_request, Some(root));
    }

    #[test]
    fn empty_path_dispatches_nothing() {
        let (scene, [leaf, ..], _) = chain();
        let log: Log = Rc::default();
        let mut handlers = KeyHandlers::new();
        handlers.on_key_press(leaf, logging(&log, "key", Outcome::Stop));

        let done = dispatch(
            &KeyEvent::new("Enter", 13),
            &KeyMap::default(),
            &scene,
            &FocusPath::new(),
            &mut handlers,
        )
        .unwrap();
        assert_eq!(done.action, Some(Action::Enter));
        assert!(!done.handled());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn handler_error_aborts_walk() {
        let (scene, [leaf, mid, root], path) = chain();
        let log: Log = Rc::default();
        let mut handlers = KeyHandlers::new();
        handlers.on_key_press(leaf, logging(&log, "key", Outcome::Continue));
        handlers.on_action(mid, Action::Up, |_| Err("mid failed".into()));
        handlers.on_key_press(root, logging(&log, "key", Outcome::Continue));

        let err = dispatch(
            &KeyEvent::new("ArrowUp", 38),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap_err();

        let DispatchError::Handler { node, slot, source } = err;
        assert_eq!(node, mid);
        assert_eq!(slot, Slot::Action(Action::Up));
        assert_eq!(source.to_string(), "mid failed");
        assert_eq!(*log.borrow(), vec![(leaf, "key")]);
    }
}
