//! Step-through reveal of a packing solution.
//!
//! The reveal engine owns a cursor over one algorithm result's packed items
//! and drives an abstract scene backend in lockstep: every forward step adds
//! exactly one item box, every backward step removes exactly the last one.
//! The cursor strictly tracks how many leading items have a live visual
//! object; object `i` exists iff `i <= cursor`.
//!
//! Placement positions come from `geometry`: the solver reports coordinates
//! relative to a container corner, the scene draws the container centered at
//! the world origin and boxes centered at their position.

use crate::geometry::{container_origin_offset, placement_position};
use crate::model::{AlgorithmPackingResult, Container, PackedItem};
use crate::types::Vec3;

/// Scene object name of the container wireframe.
pub const WIREFRAME_NAME: &str = "container";

/// Deterministic scene object name for the item at a reveal index.
///
/// Names must be stable so a later backward step can remove the same object.
pub fn item_name(index: usize) -> String {
    format!("cube{}", index)
}

/// Command interface to the 3D rendering backend.
///
/// The engine only issues these commands as side effects; it never consumes a
/// return value. The backend owns the scene graph, camera and frame
/// scheduling, and is expected to tolerate removal of names that do not
/// currently exist.
pub trait SceneAdapter {
    /// Creates the container outline, sized in display axes.
    fn create_container_wireframe(&mut self, length: f64, height: f64, width: f64);

    /// Adds a box for one packed item, drawn centered at `position`.
    fn add_item_box(&mut self, name: &str, dims: Vec3, position: Vec3);

    /// Removes the object with the given name, if present.
    fn remove_object_by_name(&mut self, name: &str);
}

/// Stepping past either end of the reveal.
///
/// This is a caller bug, not a recoverable UI state: step controls must be
/// gated on the engine state before invoking them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    OutOfRange {
        cursor: i64,
        item_count: usize,
    },
}

impl std::fmt::Display for RevealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevealError::OutOfRange { cursor, item_count } => write!(
                f,
                "Reveal step out of range (cursor {}, {} packed items)",
                cursor, item_count
            ),
        }
    }
}

impl std::error::Error for RevealError {}

/// Observable state of the reveal cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Nothing revealed (cursor at -1).
    Empty,
    /// Some but not all items revealed.
    Revealing,
    /// All items revealed; also the immediate state for a zero-item result.
    Complete,
}

/// Drives the stepped reveal of one algorithm result.
///
/// Owns the scene backend and the reveal cursor for the currently active
/// result. A new session starts with `initialize`, which fully tears down the
/// previous session's visuals first, so calling it twice in a row leaks
/// nothing.
pub struct RevealEngine<S: SceneAdapter> {
    scene: S,
    items: Vec<PackedItem>,
    origin_offset: Vec3,
    cursor: i64,
    initialized: bool,
}

impl<S: SceneAdapter> RevealEngine<S> {
    /// Creates an engine with no active session.
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            items: Vec::new(),
            origin_offset: Vec3::zero(),
            cursor: -1,
            initialized: false,
        }
    }

    /// Starts a reveal session for one container and algorithm result.
    ///
    /// Tears down every visual of the prior session (all previous item
    /// indices plus the wireframe), recomputes the container origin offset,
    /// creates the new wireframe and resets the cursor to -1. A zero-item
    /// result is legal and leaves the session immediately `Complete`.
    pub fn initialize(&mut self, container: &Container, result: &AlgorithmPackingResult) {
        if self.initialized {
            for index in 0..self.items.len() {
                self.scene.remove_object_by_name(&item_name(index));
            }
            self.scene.remove_object_by_name(WIREFRAME_NAME);
        }

        self.origin_offset =
            container_origin_offset(container.length, container.height, container.width);
        self.scene
            .create_container_wireframe(container.length, container.height, container.width);

        self.items = result.packed_items.clone();
        self.cursor = -1;
        self.initialized = true;
    }

    /// Reveals the next packed item.
    ///
    /// Computes the item's absolute placement, issues an add command under a
    /// deterministic name and advances the cursor. Fails with `OutOfRange`
    /// when the session is already `Complete`, leaving cursor and visuals
    /// unchanged.
    pub fn step_forward(&mut self) -> Result<(), RevealError> {
        let index = (self.cursor + 1) as usize;
        if index >= self.items.len() {
            return Err(RevealError::OutOfRange {
                cursor: self.cursor,
                item_count: self.items.len(),
            });
        }

        let item = self.items[index];
        let position = placement_position(self.origin_offset, &item);
        self.scene
            .add_item_box(&item_name(index), item.packed_dims(), position);
        self.cursor = index as i64;
        Ok(())
    }

    /// Hides the most recently revealed item.
    ///
    /// Issues a remove command for the current cursor index and steps the
    /// cursor back. Fails with `OutOfRange` when nothing is revealed.
    pub fn step_backward(&mut self) -> Result<(), RevealError> {
        if self.cursor < 0 {
            return Err(RevealError::OutOfRange {
                cursor: self.cursor,
                item_count: self.items.len(),
            });
        }

        self.scene.remove_object_by_name(&item_name(self.cursor as usize));
        self.cursor -= 1;
        Ok(())
    }

    /// True once at least one item is revealed.
    pub fn is_revealing(&self) -> bool {
        self.cursor > -1
    }

    /// True when every item of a non-empty result is revealed.
    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.cursor == self.items.len() as i64 - 1
    }

    /// Current state of the reveal cursor.
    ///
    /// A zero-item result reports `Complete` straight after `initialize`;
    /// neither step direction is legal then.
    pub fn state(&self) -> RevealState {
        if self.cursor == self.items.len() as i64 - 1 {
            RevealState::Complete
        } else if self.cursor == -1 {
            RevealState::Empty
        } else {
            RevealState::Revealing
        }
    }

    /// Current cursor value, -1 when nothing is revealed.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Number of packed items in the active result.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Origin offset of the active session.
    pub fn origin_offset(&self) -> Vec3 {
        self.origin_offset
    }

    /// Read access to the scene backend.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Consumes the engine and returns the scene backend.
    pub fn into_scene(self) -> S {
        self.scene
    }
}
