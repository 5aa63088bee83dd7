//! Session state for the packing client.
//!
//! Holds the editable entity lists, the id counters and the algorithm
//! selection that the original UI kept in reactive observables. State changes
//! go through explicit methods; readers get plain slices plus a revision
//! counter that bumps on every mutation, so a view layer can cheaply detect
//! that it needs to re-render.

use crate::client::TaggedResponse;
use crate::model::{Container, ContainerDraft, Item, ItemDraft, ValidationError};
use crate::request::{RequestError, build_request};
use crate::response::{BindOutcome, bind_response};
use crate::wire::PackingRequest;

/// Result of offering a packing response to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The response was current and has been bound onto the containers.
    Bound(BindOutcome),
    /// The response was overtaken by a newer request and dropped unbound.
    Stale {
        request_id: u64,
        latest_request_id: u64,
    },
}

/// In-memory state of one user session.
///
/// Entities are never persisted; they are rebuilt by user action or by the
/// bulk sample generators. User-created entities get counter ids from 0,
/// sample entities use ids from 1000.
#[derive(Debug, Default)]
pub struct Session {
    items: Vec<Item>,
    containers: Vec<Container>,
    algorithms_to_use: Vec<i32>,
    item_draft: ItemDraft,
    container_draft: ContainerDraft,
    item_counter: i32,
    container_counter: i32,
    revision: u64,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session preloaded with the standard sample data.
    pub fn with_samples() -> Self {
        let mut session = Self::new();
        session.generate_sample_items();
        session.generate_sample_containers();
        session
    }

    /// Replaces the item list with the standard samples.
    pub fn generate_sample_items(&mut self) {
        self.items = crate::model::sample_items();
        self.touch();
    }

    /// Replaces the container list with the standard samples.
    pub fn generate_sample_containers(&mut self) {
        self.containers = crate::model::sample_containers();
        self.touch();
    }

    /// The editable draft for the next item.
    pub fn item_draft_mut(&mut self) -> &mut ItemDraft {
        &mut self.item_draft
    }

    /// The editable draft for the next container.
    pub fn container_draft_mut(&mut self) -> &mut ContainerDraft {
        &mut self.container_draft
    }

    /// Parses the item draft into the list and clears the form.
    ///
    /// On validation failure the draft keeps its input so the user can
    /// correct it.
    ///
    /// # Returns
    /// The id assigned to the new item.
    pub fn add_item(&mut self) -> Result<i32, ValidationError> {
        let id = self.item_counter;
        let item = self.item_draft.parse(id)?;
        self.items.push(item);
        self.item_counter += 1;
        self.item_draft.clear();
        self.touch();
        Ok(id)
    }

    /// Removes the item with the given id from the active list.
    pub fn remove_item(&mut self, id: i32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Parses the container draft into the list and clears the form.
    pub fn add_container(&mut self) -> Result<i32, ValidationError> {
        let id = self.container_counter;
        let container = self.container_draft.parse(id)?;
        self.containers.push(container);
        self.container_counter += 1;
        self.container_draft.clear();
        self.touch();
        Ok(id)
    }

    /// Removes the container with the given id from the active list.
    pub fn remove_container(&mut self, id: i32) -> bool {
        let before = self.containers.len();
        self.containers.retain(|container| container.id != id);
        let removed = self.containers.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Appends an algorithm id to the selection.
    ///
    /// The selection mirrors a list widget, so duplicates are allowed and
    /// order is preserved.
    pub fn add_algorithm(&mut self, algorithm_id: i32) {
        self.algorithms_to_use.push(algorithm_id);
        self.touch();
    }

    /// Removes the first occurrence of an algorithm id from the selection.
    pub fn remove_algorithm(&mut self, algorithm_id: i32) -> bool {
        match self.algorithms_to_use.iter().position(|&id| id == algorithm_id) {
            Some(index) => {
                self.algorithms_to_use.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Builds the wire request for the current session state.
    pub fn build_request(&self) -> Result<PackingRequest, RequestError> {
        build_request(&self.items, &self.containers, &self.algorithms_to_use)
    }

    /// Binds a packing response onto the containers, unless it is stale.
    ///
    /// `latest_request_id` is the id of the most recently issued request (the
    /// client knows it); a response from an older request is dropped without
    /// touching any container.
    pub fn apply_response(
        &mut self,
        response: TaggedResponse,
        latest_request_id: u64,
    ) -> ApplyOutcome {
        if response.request_id != latest_request_id {
            return ApplyOutcome::Stale {
                request_id: response.request_id,
                latest_request_id,
            };
        }

        let outcome = bind_response(response.results, &mut self.containers);
        self.touch();
        ApplyOutcome::Bound(outcome)
    }

    /// The active items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The active containers, in insertion order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// The selected algorithm ids, in selection order.
    pub fn algorithms_to_use(&self) -> &[i32] {
        &self.algorithms_to_use
    }

    /// Looks up a container by id.
    pub fn find_container(&self, id: i32) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Change counter; bumps on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
