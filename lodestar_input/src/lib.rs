// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lodestar Input: route key presses along the focus path.
//!
//! Key events travel from the focused leaf up through its ancestors, the same
//! chain [`lodestar_focus`] keeps in sync. Every element on the way may consume
//! the key.
//!
//! This crate provides:
//! - [`Action`] and [`KeyMap`]: physical keys mapped to logical actions, with
//!   built-in arrow/enter/back bindings and host [`KeyOverrides`].
//! - [`KeyHandlers`]: per-element handlers, one per action plus a catch-all
//!   `on_key_press`, each returning an [`Outcome`].
//! - [`dispatch`]: the short-circuiting leaf-to-root walk.
//! - [`FocusManager`]: owns the key map, focus tracker and handler tables and
//!   ties focus changes and key presses together.
//! - [`nav`]: row and column containers that move focus with arrow keys.
//!
//! ## Example
//!
//! ```rust
//! use lodestar_input::{Action, FocusManager, KeyEvent, KeyOverrides, Outcome};
//! use lodestar_scene::{NodeFlags, Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.insert(None, NodeFlags::default()).unwrap();
//! let mid = scene.insert(Some(root), NodeFlags::default()).unwrap();
//! let leaf = scene.insert(Some(mid), NodeFlags::default()).unwrap();
//!
//! // Remote controls often send "Select" for OK.
//! let mut manager = FocusManager::new(Some(KeyOverrides::new().bind(Action::Enter, ["Select"])));
//! manager.key_handlers_mut().on_action(mid, Action::Enter, |_| Ok(Outcome::Stop));
//! manager.focus(&mut scene, Some(leaf)).unwrap();
//!
//! let done = manager.key_down(&mut scene, &KeyEvent::new("Select", 0)).unwrap();
//! assert_eq!(done.stopped_at.map(|s| s.node), Some(mid));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod dispatch;
mod error;
mod event;
mod handlers;
mod keymap;
mod manager;
pub mod nav;

pub use action::Action;
pub use dispatch::{Dispatched, StopPoint, dispatch};
pub use error::{DispatchError, Error};
pub use event::KeyEvent;
pub use handlers::{KeyContext, KeyHandler, KeyHandlers, Outcome, Slot};
pub use keymap::{KeyMap, KeyOverrides, RawKey};
pub use manager::FocusManager;
