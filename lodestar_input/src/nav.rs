// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional key handlers for rows and columns.
//!
//! A [`Navigable`] turns a container into a row (handles `Left`/`Right`) or a
//! column (handles `Up`/`Down`). When the focused leaf lies inside the
//! container, a directional key moves focus to the next selectable child using
//! [`next_selectable`]. At an edge without wrapping the key is passed on, so a
//! column of rows works without extra wiring: `Left`/`Right` are consumed by
//! the row, `Up`/`Down` bubble to the column.
//!
//! When the newly selected child is itself a container, focus descends to its
//! first selectable child, repeatedly, so moving between rows lands on a leaf.
//!
//! ```rust
//! use lodestar_input::nav::Navigable;
//! use lodestar_input::{FocusManager, KeyEvent};
//! use lodestar_scene::{NodeFlags, Scene};
//!
//! let mut scene = Scene::new();
//! let row = scene.insert(None, NodeFlags::default()).unwrap();
//! let a = scene.insert(Some(row), NodeFlags::default()).unwrap();
//! let b = scene.insert(Some(row), NodeFlags::default()).unwrap();
//!
//! let mut manager = FocusManager::default();
//! Navigable::horizontal().install(manager.key_handlers_mut(), row);
//! manager.focus(&mut scene, Some(a)).unwrap();
//!
//! manager.key_down(&mut scene, &KeyEvent::new("ArrowRight", 39)).unwrap();
//! assert_eq!(manager.focused(), Some(b));
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use lodestar_focus::FocusPath;
use lodestar_focus::nav::{Step, WrapMode, next_selectable};
use lodestar_scene::{NodeId, Scene};

use crate::action::Action;
use crate::handlers::{KeyContext, KeyHandlers, Outcome};

/// Layout direction of a navigable container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A row: `Left` / `Right`.
    #[default]
    Horizontal,
    /// A column: `Up` / `Down`.
    Vertical,
}

impl Axis {
    /// The `(backward, forward)` actions for this axis.
    pub fn actions(self) -> (Action, Action) {
        match self {
            Self::Horizontal => (Action::Left, Action::Right),
            Self::Vertical => (Action::Up, Action::Down),
        }
    }
}

/// Reported after a container moved its selection.
#[derive(Copy, Clone, Debug)]
pub struct SelectionChange<'a> {
    /// Scene as of the key press.
    pub scene: &'a Scene,
    /// The navigable container.
    pub container: NodeId,
    /// The newly selected child.
    pub selected: NodeId,
    /// The element that receives focus: `selected` or its first selectable
    /// descendant.
    pub focused: NodeId,
    /// Index of `selected` among the container's children.
    pub index: usize,
    /// Index of the child that was on the focus path, if any.
    pub previous_index: Option<usize>,
}

/// Callback fired when the selection moves.
pub type SelectedChanged = Box<dyn FnMut(&SelectionChange<'_>)>;

/// Row or column behavior for a container.
pub struct Navigable {
    axis: Axis,
    wrap: WrapMode,
    on_selected_changed: Option<SelectedChanged>,
}

impl core::fmt::Debug for Navigable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigable")
            .field("axis", &self.axis)
            .field("wrap", &self.wrap)
            .field("on_selected_changed", &self.on_selected_changed.is_some())
            .finish()
    }
}

impl Navigable {
    /// A container laid out along `axis`, without wrapping.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            wrap: WrapMode::Never,
            on_selected_changed: None,
        }
    }

    /// A row.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// A column.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Set the wrap mode.
    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the selection change callback.
    #[must_use]
    pub fn on_selected_changed(
        mut self,
        callback: impl FnMut(&SelectionChange<'_>) + 'static,
    ) -> Self {
        self.on_selected_changed = Some(Box::new(callback));
        self
    }

    /// Register the directional handlers on `container`.
    ///
    /// Replaces any handlers `container` already had for the two actions.
    pub fn install(self, handlers: &mut KeyHandlers, container: NodeId) {
        let (backward, forward) = self.axis.actions();
        let wrap = self.wrap;
        let callback = Rc::new(RefCell::new(self.on_selected_changed));

        for (action, step) in [(backward, Step::Backward), (forward, Step::Forward)] {
            let callback = callback.clone();
            handlers.on_action(container, action, move |cx| {
                Ok(navigate(cx, container, step, wrap, &callback))
            });
        }
    }
}

/// The child of `container` on `path`, when `container` is on the path.
pub fn child_on_path(path: &FocusPath, container: NodeId) -> Option<NodeId> {
    let at = path.iter().position(|&n| n == container)?;
    path.get(at.checked_sub(1)?).copied()
}

/// Follow first selectable children down from `node` until a leaf.
fn first_leaf(scene: &Scene, mut node: NodeId) -> NodeId {
    while let Some(i) = next_selectable(scene, node, None, Step::Forward, WrapMode::Never) {
        node = scene.children_of(node)[i];
    }
    node
}

fn navigate(
    cx: &mut KeyContext<'_>,
    container: NodeId,
    step: Step,
    wrap: WrapMode,
    callback: &RefCell<Option<SelectedChanged>>,
) -> Outcome {
    let from = child_on_path(cx.path, container).and_then(|c| cx.scene.index_in_parent(c));
    let Some(index) = next_selectable(cx.scene, container, from, step, wrap) else {
        return Outcome::Continue;
    };
    let selected = cx.scene.children_of(container)[index];
    let focused = first_leaf(cx.scene, selected);
    tracing::trace!(?container, ?selected, ?focused, index, "selection moved");
    cx.request_focus(focused);
    if let Some(cb) = callback.borrow_mut().as_mut() {
        cb(&SelectionChange {
            scene: cx.scene,
            container,
            selected,
            focused,
            index,
            previous_index: from,
        });
    }
    Outcome::Stop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FocusManager, KeyEvent, Slot, StopPoint};
    use alloc::vec;
    use alloc::vec::Vec;
    use lodestar_scene::{NodeFlags, States};

    fn right() -> KeyEvent {
        KeyEvent::new("ArrowRight", 39)
    }

    fn left() -> KeyEvent {
        KeyEvent::new("ArrowLeft", 37)
    }

    fn row_of(scene: &mut Scene, parent: Option<NodeId>, n: usize) -> (NodeId, Vec<NodeId>) {
        let row = scene.insert(parent, NodeFlags::default()).unwrap();
        let items = (0..n)
            .map(|_| scene.insert(Some(row), NodeFlags::default()).unwrap())
            .collect();
        (row, items)
    }

    #[test]
    fn moves_along_row_and_reports_indices() {
        let mut scene = Scene::new();
        let (row, items) = row_of(&mut scene, None, 3);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let c = changes.clone();
        let mut manager = FocusManager::default();
        Navigable::horizontal()
            .on_selected_changed(move |ch| c.borrow_mut().push((ch.index, ch.previous_index)))
            .install(manager.key_handlers_mut(), row);
        manager.focus(&mut scene, Some(items[0])).unwrap();

        manager.key_down(&mut scene, &right()).unwrap();
        manager.key_down(&mut scene, &right()).unwrap();
        assert_eq!(manager.focused(), Some(items[2]));
        manager.key_down(&mut scene, &left()).unwrap();
        assert_eq!(manager.focused(), Some(items[1]));

        assert_eq!(
            *changes.borrow(),
            vec![(1, Some(0)), (2, Some(1)), (1, Some(2))]
        );
    }

    #[test]
    fn edge_without_wrap_passes_key_on() {
        let mut scene = Scene::new();
        let (row, items) = row_of(&mut scene, None, 2);
        let mut manager = FocusManager::default();
        Navigable::horizontal().install(manager.key_handlers_mut(), row);
        manager.focus(&mut scene, Some(items[1])).unwrap();

        let done = manager.key_down(&mut scene, &right()).unwrap();
        assert!(!done.handled());
        assert_eq!(done.focus_request, None);
        assert_eq!(manager.focused(), Some(items[1]));
    }

    #[test]
    fn wrap_scope_cycles_within_row() {
        let mut scene = Scene::new();
        let (row, items) = row_of(&mut scene, None, 3);
        let mut manager = FocusManager::default();
        Navigable::horizontal()
            .with_wrap(WrapMode::Scope)
            .install(manager.key_handlers_mut(), row);
        manager.focus(&mut scene, Some(items[0])).unwrap();

        manager.key_down(&mut scene, &left()).unwrap();
        assert_eq!(manager.focused(), Some(items[2]));
    }

    #[test]
    fn skips_disabled_children() {
        let mut scene = Scene::new();
        let (row, items) = row_of(&mut scene, None, 3);
        scene.insert_state(items[1], States::DISABLED);
        let mut manager = FocusManager::default();
        Navigable::horizontal().install(manager.key_handlers_mut(), row);
        manager.focus(&mut scene, Some(items[0])).unwrap();

        manager.key_down(&mut scene, &right()).unwrap();
        assert_eq!(manager.focused(), Some(items[2]));
    }

    #[test]
    fn column_of_rows_routes_each_axis() {
        // column -> [row0 -> [a0, a1], row1 -> [b0, b1]]
        let mut scene = Scene::new();
        let column = scene.insert(None, NodeFlags::default()).unwrap();
        let (row0, a) = row_of(&mut scene, Some(column), 2);
        let (row1, b) = row_of(&mut scene, Some(column), 2);
        let mut manager = FocusManager::default();
        Navigable::vertical().install(manager.key_handlers_mut(), column);
        for row in [row0, row1] {
            Navigable::horizontal().install(manager.key_handlers_mut(), row);
        }
        manager.focus(&mut scene, Some(a[0])).unwrap();

        let done = manager
            .key_down(&mut scene, &KeyEvent::new("ArrowDown", 40))
            .unwrap();
        // The column selects the next row and focus lands on its first tile.
        assert_eq!(
            done.stopped_at,
            Some(StopPoint {
                node: column,
                slot: Slot::Action(Action::Down)
            })
        );
        assert_eq!(manager.focused(), Some(b[0]));
        assert_eq!(manager.focus_path().as_slice(), &[b[0], row1, column]);

        manager.key_down(&mut scene, &right()).unwrap();
        assert_eq!(manager.focused(), Some(b[1]));
        // Up from the second tile of row1 goes back to row0's first tile.
        manager
            .key_down(&mut scene, &KeyEvent::new("ArrowUp", 38))
            .unwrap();
        assert_eq!(manager.focused(), Some(a[0]));
    }

    #[test]
    fn descent_skips_unselectable_grandchildren() {
        let mut scene = Scene::new();
        let column = scene.insert(None, NodeFlags::default()).unwrap();
        let (_, top) = row_of(&mut scene, Some(column), 1);
        let (row, tiles) = row_of(&mut scene, Some(column), 3);
        scene.insert_state(tiles[0], States::DISABLED);
        let reported = Rc::new(RefCell::new(Vec::new()));
        let r = reported.clone();
        let mut manager = FocusManager::default();
        Navigable::vertical()
            .on_selected_changed(move |ch| r.borrow_mut().push((ch.selected, ch.focused)))
            .install(manager.key_handlers_mut(), column);
        manager.focus(&mut scene, Some(top[0])).unwrap();

        manager
            .key_down(&mut scene, &KeyEvent::new("ArrowDown", 40))
            .unwrap();
        assert_eq!(manager.focused(), Some(tiles[1]));
        assert_eq!(*reported.borrow(), vec![(row, tiles[1])]);
    }

    #[test]
    fn container_off_path_is_ignored() {
        let mut scene = Scene::new();
        let root = scene.insert(None, NodeFlags::default()).unwrap();
        let (row, items) = row_of(&mut scene, Some(root), 2);
        let outside = scene.insert(Some(root), NodeFlags::default()).unwrap();
        let path: FocusPath = scene.ancestors(outside).collect();
        assert_eq!(child_on_path(&path, row), None);
        let inside: FocusPath = scene.ancestors(items[1]).collect();
        assert_eq!(child_on_path(&inside, row), Some(items[1]));
        assert_eq!(child_on_path(&inside, items[1]), None);
    }
}
