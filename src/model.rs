//! Data models for the packing client session.
//!
//! This module defines the editable session entities and the packing results
//! attached to them:
//! - `Item`: an object the user wants packed, with dimensions and quantity
//! - `Container`: a candidate box, including the algorithm results bound to it
//! - `AlgorithmPackingResult` / `PackedItem`: one algorithm's solution as
//!   returned by the packing service, in solver order
//!
//! Entities live only in session memory; they are created by user action or
//! by the bulk sample generators and are never persisted.

use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// Validation error for entity data.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field was left empty.
    MissingField(&'static str),
    /// A field could not be parsed as a number.
    NotNumeric { field: &'static str, value: String },
    /// A dimension was zero, negative or not finite.
    InvalidDimension(String),
    /// A weight was negative or not finite.
    InvalidWeight(String),
    /// A quantity was zero or not a whole number.
    InvalidQuantity(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "Missing required field: {}", field)
            }
            ValidationError::NotNumeric { field, value } => {
                write!(f, "Field {} is not numeric: '{}'", field, value)
            }
            ValidationError::InvalidDimension(msg) => write!(f, "Invalid dimension: {}", msg),
            ValidationError::InvalidWeight(msg) => write!(f, "Invalid weight: {}", msg),
            ValidationError::InvalidQuantity(msg) => write!(f, "Invalid quantity: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Helper function to validate a single dimension.
fn validate_dimension(value: f64, name: &str) -> Result<(), ValidationError> {
    if value <= 0.0 || value.is_nan() || value.is_infinite() {
        return Err(ValidationError::InvalidDimension(format!(
            "{} must be positive, got: {}",
            name, value
        )));
    }
    Ok(())
}

/// Helper function to validate a weight. Zero is allowed.
fn validate_weight_value(value: f64) -> Result<(), ValidationError> {
    if value < 0.0 || value.is_nan() || value.is_infinite() {
        return Err(ValidationError::InvalidWeight(format!(
            "Weight must not be negative, got: {}",
            value
        )));
    }
    Ok(())
}

fn validate_dims(length: f64, width: f64, height: f64) -> Result<(), ValidationError> {
    validate_dimension(length, "Length")?;
    validate_dimension(width, "Width")?;
    validate_dimension(height, "Height")?;
    Ok(())
}

/// An item the user wants packed.
///
/// # Fields
/// * `id` - Unique identification number within the session
/// * `name` - Display name
/// * `length`, `width`, `height` - Dimensions in session units
/// * `quantity` - How many copies to pack, at least 1
/// * `weight` - Weight per copy, non-negative
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub quantity: u32,
    pub weight: f64,
}

impl Item {
    /// Creates a new item with validation.
    ///
    /// # Returns
    /// `Ok(Item)` for valid values, otherwise `Err(ValidationError)`
    ///
    /// # Examples
    /// ```
    /// use packview::model::Item;
    ///
    /// let item = Item::new(1, "Item1", 5.0, 4.0, 2.0, 1, 5.0);
    /// assert!(item.is_ok());
    ///
    /// let invalid = Item::new(1, "Item1", -5.0, 4.0, 2.0, 1, 5.0);
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(
        id: i32,
        name: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        quantity: u32,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        validate_dims(length, width, height)?;
        validate_weight_value(weight)?;
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity(
                "Quantity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: name.into(),
            length,
            width,
            height,
            quantity,
            weight,
        })
    }
}

/// A candidate container, including any packing results bound to it.
///
/// The result list starts empty and is populated only by the response binder.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub id: i32,
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub max_allowed_weight: f64,
    pub algorithm_packing_results: Vec<AlgorithmPackingResult>,
}

impl Container {
    /// Creates a new container with validation and an empty result list.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        weight: f64,
        max_allowed_weight: f64,
    ) -> Result<Self, ValidationError> {
        validate_dims(length, width, height)?;
        validate_weight_value(weight)?;
        validate_weight_value(max_allowed_weight)?;
        Ok(Self {
            id,
            name: name.into(),
            length,
            width,
            height,
            weight,
            max_allowed_weight,
            algorithm_packing_results: Vec::new(),
        })
    }
}

/// One algorithm's packing solution for a container.
///
/// `packed_items` is in solver order; that order is the reveal order and must
/// be preserved exactly as received.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmPackingResult {
    pub algorithm_id: i32,
    pub algorithm_name: String,
    #[serde(default)]
    pub packed_items: Vec<PackedItem>,
    #[serde(default, rename = "isCompletePack")]
    pub is_complete_pack: bool,
    #[serde(default)]
    pub pack_time_in_milliseconds: u64,
    #[serde(default)]
    pub percent_container_volume_packed: f64,
    #[serde(default)]
    pub percent_item_volume_packed: f64,
    #[serde(default)]
    pub unpacked_items: Vec<PackedItem>,
}

impl AlgorithmPackingResult {
    /// Number of packed items in this result. Zero is legal.
    pub fn packed_count(&self) -> usize {
        self.packed_items.len()
    }
}

/// A single placed item within an algorithm result.
///
/// `pack_dim_*` are the packed (possibly rotated) dimensions; `coord_*` are
/// the placement origin within the container's local frame. The remaining
/// fields reference the source item as echoed back by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackedItem {
    #[serde(default)]
    pub id: i32,
    pub pack_dim_x: f64,
    pub pack_dim_y: f64,
    pub pack_dim_z: f64,
    pub coord_x: f64,
    pub coord_y: f64,
    pub coord_z: f64,
    #[serde(default)]
    pub dim1: f64,
    #[serde(default)]
    pub dim2: f64,
    #[serde(default)]
    pub dim3: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub volume: f64,
}

impl PackedItem {
    /// Returns the packed dimensions as a vector.
    #[inline]
    pub fn packed_dims(&self) -> Vec3 {
        Vec3::new(self.pack_dim_x, self.pack_dim_y, self.pack_dim_z)
    }

    /// Returns the placement coordinates as a vector.
    #[inline]
    pub fn coords(&self) -> Vec3 {
        Vec3::new(self.coord_x, self.coord_y, self.coord_z)
    }
}

/// Known packing algorithms offered to the user.
///
/// The wire format carries raw integer ids, so unknown ids are still accepted
/// in requests and responses; this catalog only backs the selection list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// EB-AFIT ("largest area fit first" variant), the service's algorithm 1.
    EbAfit,
}

impl Algorithm {
    /// Wire id of the algorithm.
    pub const fn id(self) -> i32 {
        match self {
            Algorithm::EbAfit => 1,
        }
    }

    /// Human-readable name of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::EbAfit => "EB-AFIT",
        }
    }

    /// Looks up an algorithm by wire id.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Algorithm::EbAfit),
            _ => None,
        }
    }
}

/// Parses a numeric form field, rejecting empty input.
fn parse_numeric_field(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NotNumeric {
            field,
            value: raw.to_string(),
        })
}

fn parse_quantity_field(raw: &str, field: &'static str) -> Result<u32, ValidationError> {
    let value = parse_numeric_field(raw, field)?;
    if value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
        return Err(ValidationError::InvalidQuantity(format!(
            "Quantity must be a positive whole number, got: {}",
            raw.trim()
        )));
    }
    Ok(value as u32)
}

/// Editable form state for a new item.
///
/// Fields hold raw user input and may legally be empty until the draft is
/// parsed into an `Item`. Empty or non-numeric input is rejected at parse
/// time rather than silently coerced to 0.
#[derive(Clone, Debug, Default)]
pub struct ItemDraft {
    pub name: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub quantity: String,
    pub weight: String,
}

impl ItemDraft {
    /// Parses the draft into a validated item with the given id.
    pub fn parse(&self, id: i32) -> Result<Item, ValidationError> {
        Item::new(
            id,
            self.name.trim(),
            parse_numeric_field(&self.length, "length")?,
            parse_numeric_field(&self.width, "width")?,
            parse_numeric_field(&self.height, "height")?,
            parse_quantity_field(&self.quantity, "quantity")?,
            parse_numeric_field(&self.weight, "weight")?,
        )
    }

    /// Clears all fields, matching the form reset after a successful add.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Editable form state for a new container.
#[derive(Clone, Debug, Default)]
pub struct ContainerDraft {
    pub name: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
    pub max_allowed_weight: String,
}

impl ContainerDraft {
    /// Parses the draft into a validated container with the given id.
    pub fn parse(&self, id: i32) -> Result<Container, ValidationError> {
        Container::new(
            id,
            self.name.trim(),
            parse_numeric_field(&self.length, "length")?,
            parse_numeric_field(&self.width, "width")?,
            parse_numeric_field(&self.height, "height")?,
            parse_numeric_field(&self.weight, "weight")?,
            parse_numeric_field(&self.max_allowed_weight, "maxAllowedWeight")?,
        )
    }

    /// Clears all fields, matching the form reset after a successful add.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sample items generated on load: name, length, width, height, quantity.
const SAMPLE_ITEMS: [(&str, f64, f64, f64, u32); 6] = [
    ("Item1", 5.0, 4.0, 2.0, 1),
    ("Item2", 2.0, 1.0, 1.0, 3),
    ("Item3", 9.0, 7.0, 3.0, 4),
    ("Item4", 13.0, 6.0, 3.0, 8),
    ("Item5", 17.0, 8.0, 6.0, 1),
    ("Item6", 3.0, 3.0, 2.0, 2),
];

/// Sample containers generated on load: name, length, width, height.
const SAMPLE_CONTAINERS: [(&str, f64, f64, f64); 13] = [
    ("Box1", 15.0, 13.0, 9.0),
    ("Box2", 23.0, 9.0, 4.0),
    ("Box3", 16.0, 16.0, 6.0),
    ("Box4", 10.0, 8.0, 5.0),
    ("Box5", 40.0, 28.0, 20.0),
    ("Box6", 29.0, 19.0, 4.0),
    ("Box7", 18.0, 13.0, 1.0),
    ("Box8", 6.0, 6.0, 6.0),
    ("Box9", 8.0, 5.0, 5.0),
    ("Box10", 18.0, 13.0, 8.0),
    ("Box11", 17.0, 16.0, 15.0),
    ("Box12", 32.0, 10.0, 9.0),
    ("Box13", 60.0, 60.0, 60.0),
];

const SAMPLE_ID_BASE: i32 = 1000;
const SAMPLE_ITEM_WEIGHT: f64 = 5.0;
const SAMPLE_CONTAINER_WEIGHT: f64 = 5.0;
const SAMPLE_MAX_ALLOWED_WEIGHT: f64 = 100.0;

/// Bulk-generates the standard item set, ids from 1000.
pub fn sample_items() -> Vec<Item> {
    SAMPLE_ITEMS
        .iter()
        .enumerate()
        .map(|(i, &(name, length, width, height, quantity))| Item {
            id: SAMPLE_ID_BASE + i as i32,
            name: name.to_string(),
            length,
            width,
            height,
            quantity,
            weight: SAMPLE_ITEM_WEIGHT,
        })
        .collect()
}

/// Bulk-generates the standard container set, ids from 1000.
pub fn sample_containers() -> Vec<Container> {
    SAMPLE_CONTAINERS
        .iter()
        .enumerate()
        .map(|(i, &(name, length, width, height))| Container {
            id: SAMPLE_ID_BASE + i as i32,
            name: name.to_string(),
            length,
            width,
            height,
            weight: SAMPLE_CONTAINER_WEIGHT,
            max_allowed_weight: SAMPLE_MAX_ALLOWED_WEIGHT,
            algorithm_packing_results: Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_validation() {
        assert!(Item::new(1, "A", 5.0, 4.0, 2.0, 1, 5.0).is_ok());
        assert!(Item::new(1, "A", 0.0, 4.0, 2.0, 1, 5.0).is_err());
        assert!(Item::new(1, "A", 5.0, 4.0, f64::NAN, 1, 5.0).is_err());
        assert!(Item::new(1, "A", 5.0, 4.0, 2.0, 0, 5.0).is_err());
        assert!(Item::new(1, "A", 5.0, 4.0, 2.0, 1, -1.0).is_err());
        // Zero weight is legal.
        assert!(Item::new(1, "A", 5.0, 4.0, 2.0, 1, 0.0).is_ok());
    }

    #[test]
    fn test_container_starts_with_empty_results() {
        let container = Container::new(1, "Box", 15.0, 13.0, 9.0, 5.0, 100.0)
            .expect("Container should be valid");
        assert!(container.algorithm_packing_results.is_empty());
    }

    #[test]
    fn test_item_draft_rejects_empty_placeholder() {
        let mut draft = ItemDraft {
            name: "Thing".to_string(),
            length: "5".to_string(),
            width: "4".to_string(),
            height: "".to_string(),
            quantity: "1".to_string(),
            weight: "5".to_string(),
        };
        assert_eq!(
            draft.parse(7),
            Err(ValidationError::MissingField("height"))
        );

        draft.height = "2".to_string();
        let item = draft.parse(7).expect("Draft should parse");
        assert_eq!(item.id, 7);
        assert_eq!(item.height, 2.0);
    }

    #[test]
    fn test_item_draft_rejects_non_numeric_input() {
        let draft = ItemDraft {
            name: "Thing".to_string(),
            length: "abc".to_string(),
            width: "4".to_string(),
            height: "2".to_string(),
            quantity: "1".to_string(),
            weight: "5".to_string(),
        };
        assert!(matches!(
            draft.parse(0),
            Err(ValidationError::NotNumeric { field: "length", .. })
        ));
    }

    #[test]
    fn test_quantity_must_be_whole_and_positive() {
        let mut draft = ItemDraft {
            name: "Thing".to_string(),
            length: "5".to_string(),
            width: "4".to_string(),
            height: "2".to_string(),
            quantity: "1.5".to_string(),
            weight: "5".to_string(),
        };
        assert!(matches!(
            draft.parse(0),
            Err(ValidationError::InvalidQuantity(_))
        ));

        draft.quantity = "0".to_string();
        assert!(matches!(
            draft.parse(0),
            Err(ValidationError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_sample_generation_matches_expected_counts() {
        let items = sample_items();
        let containers = sample_containers();

        assert_eq!(items.len(), 6);
        assert_eq!(containers.len(), 13);
        assert_eq!(items[0].id, 1000);
        assert_eq!(containers[12].id, 1012);

        // Box1 is the reference container used by the reveal scenario tests.
        let box1 = &containers[0];
        assert_eq!((box1.length, box1.width, box1.height), (15.0, 13.0, 9.0));
        assert_eq!(box1.max_allowed_weight, 100.0);
    }

    #[test]
    fn test_algorithm_catalog() {
        assert_eq!(Algorithm::EbAfit.id(), 1);
        assert_eq!(Algorithm::from_id(1), Some(Algorithm::EbAfit));
        assert_eq!(Algorithm::from_id(99), None);
    }

    #[test]
    fn test_packed_item_deserializes_from_service_json() {
        let json = r#"{
            "id": 1000,
            "packDimX": 5.0,
            "packDimY": 2.0,
            "packDimZ": 4.0,
            "coordX": 0.0,
            "coordY": 0.0,
            "coordZ": 0.0,
            "quantity": 1,
            "weight": 5.0
        }"#;
        let item: PackedItem = serde_json::from_str(json).expect("Should parse valid JSON");
        assert_eq!(item.packed_dims().as_tuple(), (5.0, 2.0, 4.0));
        assert_eq!(item.coords(), Vec3::zero());
        assert_eq!(item.id, 1000);
    }

    #[test]
    fn test_algorithm_result_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "algorithmId": 1,
            "algorithmName": "EB-AFIT",
            "packedItems": []
        }"#;
        let result: AlgorithmPackingResult =
            serde_json::from_str(json).expect("Should parse valid JSON");
        assert_eq!(result.algorithm_id, 1);
        assert_eq!(result.packed_count(), 0);
        assert!(!result.is_complete_pack);
    }
}
