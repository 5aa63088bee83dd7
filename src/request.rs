//! Building packing requests from session entities.
//!
//! `build_request` is a pure transform: it strips items and containers down
//! to their wire fields and passes the algorithm selection through untouched.
//! Invalid numerics are rejected up front so a malformed entity can never
//! leak onto the wire as 0 or NaN.

use crate::model::{Container, Item};
use crate::wire::{ContainerSpec, ItemToPack, PackingRequest};

/// Error raised while assembling a packing request.
///
/// Both variants are invalid-input conditions: the offending entity carries a
/// missing or non-numeric field. The error names the entity so the UI can
/// point the user at it.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    InvalidItem { id: i32, details: String },
    InvalidContainer { id: i32, details: String },
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::InvalidItem { id, details } => {
                write!(f, "Invalid input for item {}: {}", id, details)
            }
            RequestError::InvalidContainer { id, details } => {
                write!(f, "Invalid input for container {}: {}", id, details)
            }
        }
    }
}

impl std::error::Error for RequestError {}

fn check_numeric(value: f64, name: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} is not a number", name));
    }
    Ok(())
}

fn check_dimension(value: f64, name: &str) -> Result<(), String> {
    check_numeric(value, name)?;
    if value <= 0.0 {
        return Err(format!("{} must be positive, got: {}", name, value));
    }
    Ok(())
}

fn check_weight(value: f64, name: &str) -> Result<(), String> {
    check_numeric(value, name)?;
    if value < 0.0 {
        return Err(format!("{} must not be negative, got: {}", name, value));
    }
    Ok(())
}

fn item_to_wire(item: &Item) -> Result<ItemToPack, RequestError> {
    let map_err = |details: String| RequestError::InvalidItem {
        id: item.id,
        details,
    };

    check_dimension(item.length, "length").map_err(map_err)?;
    check_dimension(item.width, "width").map_err(map_err)?;
    check_dimension(item.height, "height").map_err(map_err)?;
    check_weight(item.weight, "weight").map_err(map_err)?;
    if item.quantity == 0 {
        return Err(map_err("quantity must be at least 1".to_string()));
    }

    Ok(ItemToPack {
        id: item.id,
        dim1: item.length,
        dim2: item.width,
        dim3: item.height,
        quantity: item.quantity,
        weight: item.weight,
    })
}

fn container_to_wire(container: &Container) -> Result<ContainerSpec, RequestError> {
    let map_err = |details: String| RequestError::InvalidContainer {
        id: container.id,
        details,
    };

    check_dimension(container.length, "length").map_err(map_err)?;
    check_dimension(container.width, "width").map_err(map_err)?;
    check_dimension(container.height, "height").map_err(map_err)?;
    check_weight(container.weight, "weight").map_err(map_err)?;
    check_weight(container.max_allowed_weight, "maxAllowedWeight").map_err(map_err)?;

    Ok(ContainerSpec {
        id: container.id,
        length: container.length,
        width: container.width,
        height: container.height,
        weight: container.weight,
        max_allowed_weight: container.max_allowed_weight,
    })
}

/// Builds a packing request from the session's items, containers and
/// algorithm selection.
///
/// Pure function, no side effects. Relative order of items and containers is
/// preserved; `algorithm_ids` is passed through unchanged, order and
/// duplicates included (deduplication is the caller's call, since the list
/// mirrors a selection widget). Fails without producing a partial request if
/// any entity carries a non-numeric or out-of-range field.
///
/// # Parameters
/// * `items` - Items to pack, one wire entry each
/// * `containers` - Candidate containers, stripped to their wire fields
/// * `algorithm_ids` - Selected algorithm ids, passed through as-is
pub fn build_request(
    items: &[Item],
    containers: &[Container],
    algorithm_ids: &[i32],
) -> Result<PackingRequest, RequestError> {
    let items_to_pack = items
        .iter()
        .map(item_to_wire)
        .collect::<Result<Vec<_>, _>>()?;

    let container_specs = containers
        .iter()
        .map(container_to_wire)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PackingRequest {
        containers: container_specs,
        items_to_pack,
        algorithm_type_ids: algorithm_ids.to_vec(),
    })
}
