// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the leaf-to-root key walk.

use std::cell::RefCell;
use std::rc::Rc;

use lodestar_focus::FocusPath;
use lodestar_input::{Action, KeyEvent, KeyHandlers, KeyMap, Outcome, Slot, StopPoint, dispatch};
use lodestar_scene::{NodeFlags, NodeId, Scene};
use proptest::prelude::*;

/// What one element registers: (action handler outcome, key press outcome).
type Registration = (Option<Outcome>, Option<Outcome>);

fn outcome() -> impl Strategy<Value = Option<Outcome>> {
    prop::option::of(prop_oneof![Just(Outcome::Continue), Just(Outcome::Stop)])
}

fn chain_registrations() -> impl Strategy<Value = Vec<Registration>> {
    prop::collection::vec((outcome(), outcome()), 1..12)
}

/// A single chain root -> ... -> leaf; returns the leaf-to-root path.
fn chain(len: usize) -> (Scene, FocusPath) {
    let mut scene = Scene::new();
    let mut parent = None;
    for _ in 0..len {
        parent = Some(scene.insert(parent, NodeFlags::default()).unwrap());
    }
    let path = parent
        .map(|leaf| scene.ancestors(leaf).collect())
        .unwrap_or_default();
    (scene, path)
}

type Visits = Rc<RefCell<Vec<(NodeId, Slot, NodeId)>>>;

fn install(path: &FocusPath, regs: &[Registration], visits: &Visits) -> KeyHandlers {
    let mut handlers = KeyHandlers::new();
    for (&node, &(on_action, on_key)) in path.iter().zip(regs) {
        if let Some(out) = on_action {
            let v = visits.clone();
            handlers.on_action(node, Action::Enter, move |cx| {
                v.borrow_mut()
                    .push((cx.node, Slot::Action(Action::Enter), cx.anchor));
                Ok(out)
            });
        }
        if let Some(out) = on_key {
            let v = visits.clone();
            handlers.on_key_press(node, move |cx| {
                v.borrow_mut().push((cx.node, Slot::KeyPress, cx.anchor));
                Ok(out)
            });
        }
    }
    handlers
}

/// The visits a short-circuiting walk must make, and where it stops.
fn expected(path: &FocusPath, regs: &[Registration]) -> (Vec<(NodeId, Slot)>, Option<StopPoint>) {
    let mut seen = Vec::new();
    for (&node, &(on_action, on_key)) in path.iter().zip(regs) {
        for (slot, out) in [
            (Slot::Action(Action::Enter), on_action),
            (Slot::KeyPress, on_key),
        ] {
            if let Some(out) = out {
                seen.push((node, slot.clone()));
                if out == Outcome::Stop {
                    return (seen, Some(StopPoint { node, slot }));
                }
            }
        }
    }
    (seen, None)
}

proptest! {
    #[test]
    fn walk_short_circuits_at_first_stop(regs in chain_registrations()) {
        let (scene, path) = chain(regs.len());
        let visits: Visits = Rc::default();
        let mut handlers = install(&path, &regs, &visits);

        let done = dispatch(
            &KeyEvent::new("Enter", 13),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap();

        let (want, stop) = expected(&path, &regs);
        let got: Vec<(NodeId, Slot)> = visits
            .borrow()
            .iter()
            .map(|(n, s, _)| (*n, s.clone()))
            .collect();
        prop_assert_eq!(got, want);
        prop_assert_eq!(done.stopped_at, stop);
    }

    #[test]
    fn anchor_is_the_leaf_for_every_handler(regs in chain_registrations()) {
        let (scene, path) = chain(regs.len());
        let visits: Visits = Rc::default();
        let mut handlers = install(&path, &regs, &visits);

        dispatch(
            &KeyEvent::new("Enter", 13),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap();

        let leaf = path.leaf().unwrap();
        prop_assert!(visits.borrow().iter().all(|(_, _, anchor)| *anchor == leaf));
    }

    #[test]
    fn unmapped_keys_only_reach_key_press(regs in chain_registrations(), code in 200_u32..300) {
        let (scene, path) = chain(regs.len());
        let visits: Visits = Rc::default();
        let mut handlers = install(&path, &regs, &visits);

        let done = dispatch(
            &KeyEvent::from_code(code),
            &KeyMap::default(),
            &scene,
            &path,
            &mut handlers,
        )
        .unwrap();

        prop_assert_eq!(done.action, None);
        prop_assert!(visits.borrow().iter().all(|(_, slot, _)| *slot == Slot::KeyPress));
    }
}
