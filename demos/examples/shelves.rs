// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A TV-style home screen: a column of shelves, each a row of tiles.
//!
//! This example shows how to combine:
//! - `lodestar_scene` for the element tree and per-element states,
//! - `lodestar_focus` for focus/blur transitions along the focus path,
//! - `lodestar_input` for key mapping, leaf-to-root dispatch and row/column navigation.
//!
//! A scripted sequence of remote key presses is fed through the manager and
//! the resulting focus paths are printed.
//!
//! Run:
//! - `cargo run -p lodestar_demos --example shelves`
//! - `RUST_LOG=trace cargo run -p lodestar_demos --example shelves` to see every transition.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lodestar_focus::nav::WrapMode;
use lodestar_input::nav::Navigable;
use lodestar_input::{Action, FocusManager, KeyEvent, KeyOverrides, Outcome, RawKey};
use lodestar_scene::{NodeFlags, NodeId, Scene, States};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene = Scene::new();
    let mut names: HashMap<NodeId, String> = HashMap::new();
    let mut add = |scene: &mut Scene, parent: Option<NodeId>, flags: NodeFlags, name: &str| {
        let id = scene.insert(parent, flags).expect("parent is alive");
        names.insert(id, name.to_string());
        id
    };

    let home = add(&mut scene, None, NodeFlags::default(), "home");
    let mut shelves = Vec::new();
    for (shelf, tiles) in [("movies", 4), ("series", 3)] {
        let row = add(&mut scene, Some(home), NodeFlags::default(), shelf);
        for i in 0..tiles {
            add(&mut scene, Some(row), NodeFlags::default(), &format!("{shelf}/{i}"));
        }
        // A decorative divider that navigation passes over.
        add(&mut scene, Some(home), NodeFlags::SKIP_FOCUS, "divider");
        shelves.push(row);
    }
    let movies = shelves[0];
    // Not yet released.
    let locked = scene.children_of(movies)[2];
    scene.insert_state(locked, States::DISABLED);

    // Remotes that only report numeric codes: 4 is the red "back" button.
    let overrides = KeyOverrides::new()
        .bind(Action::Back, [RawKey::Code(4)])
        .bind(Action::from("Info"), ["i"]);
    let mut manager = FocusManager::new(Some(overrides));

    let names = Rc::new(names);
    let name = {
        let names = names.clone();
        move |id: NodeId| names.get(&id).cloned().unwrap_or_else(|| format!("{id:?}"))
    };

    Navigable::vertical().install(manager.key_handlers_mut(), home);
    for &row in &shelves {
        let name = name.clone();
        Navigable::horizontal()
            .with_wrap(WrapMode::Scope)
            .on_selected_changed(move |change| {
                println!(
                    "  {} selection {:?} -> {}",
                    name(change.container),
                    change.previous_index,
                    change.index
                );
            })
            .install(manager.key_handlers_mut(), row);
    }

    // Tiles highlight while on the path.
    for &row in &shelves {
        for &tile in scene.children_of(row) {
            let focus_name = name.clone();
            manager.focus_handlers_mut().on_focus(tile, move |cx| {
                println!("  highlight {}", focus_name(cx.node));
                Ok(())
            });
        }
    }

    let played = Rc::new(RefCell::new(Vec::new()));
    {
        let played = played.clone();
        let name = name.clone();
        manager
            .key_handlers_mut()
            .on_action(home, Action::Enter, move |cx| {
                played.borrow_mut().push(name(cx.anchor));
                Ok(Outcome::Stop)
            });
    }
    manager
        .key_handlers_mut()
        .on_action(home, Action::Back, move |cx| {
            // Back from anywhere returns to the first shelf.
            cx.request_focus(movies);
            Ok(Outcome::Stop)
        });
    manager.key_handlers_mut().on_key_press(home, |cx| {
        if cx.action.is_none() {
            println!("  ignored key {:?} ({})", cx.event.key, cx.event.key_code);
        }
        Ok(Outcome::Continue)
    });

    {
        let name = name.clone();
        manager.subscribe(move |path| {
            let chain: Vec<String> = path.iter().map(|&n| name(n)).collect();
            println!("focus path: {}", chain.join(" < "));
        });
    }

    let first_tile = scene.children_of(movies)[0];
    manager
        .focus(&mut scene, Some(first_tile))
        .expect("tile is alive");

    let script = [
        KeyEvent::new("ArrowRight", 39),
        KeyEvent::new("ArrowRight", 39),
        KeyEvent::new("Enter", 13),
        KeyEvent::new("ArrowDown", 40),
        KeyEvent::new("ArrowRight", 39),
        KeyEvent::new("ArrowLeft", 37),
        KeyEvent::new("Enter", 13),
        KeyEvent::new("F13", 124),
        KeyEvent::from_code(4),
    ];
    for event in &script {
        let label = if event.key.is_empty() {
            format!("code {}", event.key_code)
        } else {
            event.key.clone()
        };
        println!("key {label}");
        match manager.key_down(&mut scene, event) {
            Ok(done) if !done.handled() => println!("  unhandled"),
            Ok(_) => {}
            Err(err) => println!("  error: {err}"),
        }
    }

    println!("played: {:?}", played.borrow());
    println!("focused: {}", manager.focused().map(&name).unwrap_or_default());
}
