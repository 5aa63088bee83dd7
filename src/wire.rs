//! Wire contract for the external packing service.
//!
//! Typed DTOs matching the service's JSON schema exactly. The request strips
//! session entities down to the fields the service consumes; the response is
//! an array of per-container results. Field names on the wire are camelCase
//! (and `algorithmTypeIDs` with capital "IDs", as the service expects).

use serde::{Deserialize, Serialize};

use crate::model::AlgorithmPackingResult;

/// A complete packing request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingRequest {
    pub containers: Vec<ContainerSpec>,
    pub items_to_pack: Vec<ItemToPack>,
    #[serde(rename = "algorithmTypeIDs")]
    pub algorithm_type_ids: Vec<i32>,
}

/// A container as sent on the wire, stripped to the packable fields.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub id: i32,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub max_allowed_weight: f64,
}

/// An item as sent on the wire.
///
/// The service names the dimensions `dim1`/`dim2`/`dim3`; they carry the
/// session item's length, width and height in that order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemToPack {
    pub id: i32,
    pub dim1: f64,
    pub dim2: f64,
    pub dim3: f64,
    pub quantity: u32,
    pub weight: f64,
}

/// One response entry: all algorithm results for a single container.
///
/// The full response is a JSON array of these.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPackingResult {
    pub container_id: i32,
    #[serde(default)]
    pub algorithm_packing_results: Vec<AlgorithmPackingResult>,
}
