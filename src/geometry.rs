//! Placement math for the reveal visualization.
//!
//! The packing service reports item coordinates relative to one corner of the
//! container, while the scene backend draws the container centered at the
//! world origin and draws boxes centered at their position. These helpers
//! perform the two translations needed to bridge the conventions: the
//! container's negative half-extent (origin offset) and each item's own
//! half-extent.

use crate::model::PackedItem;
use crate::types::Vec3;

/// Computes the container origin offset for a reveal session.
///
/// The offset translates corner-anchored solver coordinates into the
/// center-anchored display frame. In display axes the container's length maps
/// to X, its height to Y and its width to Z.
///
/// # Parameters
/// * `length` - Container length (display X)
/// * `height` - Container height (display Y)
/// * `width` - Container width (display Z)
///
/// # Returns
/// The negative half-extent `(-length/2, -height/2, -width/2)`
pub fn container_origin_offset(length: f64, height: f64, width: f64) -> Vec3 {
    -Vec3::new(length, height, width).half()
}

/// Returns the half-extent of a packed item's rotated dimensions.
pub fn packed_half_extent(item: &PackedItem) -> Vec3 {
    item.packed_dims().half()
}

/// Computes the absolute placement position of a packed item.
///
/// The scene backend draws boxes centered at their position, so the item's
/// half-extent is added on top of the solver coordinates and the container
/// origin offset.
///
/// # Parameters
/// * `origin_offset` - Offset computed once per session from the container
/// * `item` - The packed item with rotated dimensions and solver coordinates
///
/// # Returns
/// The world-space center position for the item's box
pub fn placement_position(origin_offset: Vec3, item: &PackedItem) -> Vec3 {
    origin_offset + packed_half_extent(item) + item.coords()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EPSILON_GENERAL;

    #[test]
    fn test_origin_offset_is_negative_half_extent() {
        let offset = container_origin_offset(15.0, 9.0, 13.0);
        assert_eq!(offset, Vec3::new(-7.5, -4.5, -6.5));
    }

    #[test]
    fn test_placement_position_adds_all_three_parts() {
        let item = PackedItem {
            pack_dim_x: 5.0,
            pack_dim_y: 2.0,
            pack_dim_z: 4.0,
            coord_x: 1.0,
            coord_y: 2.0,
            coord_z: 3.0,
            ..PackedItem::default()
        };

        let offset = container_origin_offset(15.0, 9.0, 13.0);
        let position = placement_position(offset, &item);
        let expected = Vec3::new(-7.5 + 2.5 + 1.0, -4.5 + 1.0 + 2.0, -6.5 + 2.0 + 3.0);
        assert!(position.approx_eq(&expected, EPSILON_GENERAL));
    }
}
