// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lodestar Focus: keep the chain of focused ancestors in sync with the focused leaf.
//!
//! Focus in Lodestar is a *path*, not a single element. When a leaf is focused,
//! it and every ancestor up to the root are considered focused: they carry
//! [`States::FOCUS`](lodestar_scene::States::FOCUS) for styling, and they are
//! the elements key events are routed through.
//!
//! This crate provides:
//! - [`FocusPath`]: an immutable, cheaply clonable leaf-to-root snapshot of the chain.
//! - [`reconcile`]: diff the previous chain against the chain of a newly focused
//!   element, tagging and notifying only the elements that entered or left it.
//! - [`FocusHandlers`]: per-element `on_focus` / `on_blur` callbacks.
//! - [`FocusTracker`]: the publishing side. It remembers the focused element and
//!   the published path, reconciles only on genuine changes, and notifies observers.
//! - [`nav`]: a linear selection policy for row/column style containers.
//!
//! ## Example
//!
//! ```rust
//! use lodestar_focus::{FocusHandlers, FocusTracker};
//! use lodestar_scene::{NodeFlags, Scene, States};
//!
//! let mut scene = Scene::new();
//! let root = scene.insert(None, NodeFlags::default()).unwrap();
//! let a = scene.insert(Some(root), NodeFlags::default()).unwrap();
//! let b = scene.insert(Some(root), NodeFlags::default()).unwrap();
//!
//! let mut handlers = FocusHandlers::new();
//! let mut tracker = FocusTracker::new(None);
//!
//! tracker.set_focused(&mut scene, &mut handlers, Some(a)).unwrap();
//! assert_eq!(tracker.path().as_slice(), &[a, root]);
//!
//! // Moving to a sibling keeps the shared root focused.
//! tracker.set_focused(&mut scene, &mut handlers, Some(b)).unwrap();
//! assert_eq!(tracker.path().as_slice(), &[b, root]);
//! assert!(!scene.has_state(a, States::FOCUS));
//! assert!(scene.has_state(root, States::FOCUS));
//! ```
//!
//! ## Ordering
//!
//! Within one reconciliation, focus callbacks fire leaf to root while the new
//! chain is walked, and blur callbacks fire afterwards in the previous chain's
//! leaf-to-root order. Elements present in both chains receive neither.
//!
//! Handler failures are not isolated: the first error aborts the pass and is
//! returned to the caller.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod handlers;
pub mod nav;
mod path;
mod reconcile;
mod tracker;

pub use error::FocusError;
pub use handlers::{FocusCallback, FocusChange, FocusHandlers, FocusSlot, HandlerError};
pub use path::FocusPath;
pub use reconcile::reconcile;
pub use tracker::{FocusTracker, PathObserver, SubscriptionId};
