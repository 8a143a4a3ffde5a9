//! Display shaping for stored designs
//!
//! Pure functions applied when designs are read back: the furniture
//! normalizer and the list formatter. Neither has an error path.

use crate::config;
use crate::database::{Design, DesignDetail, DesignSummary, FurnitureItem};
use chrono::{DateTime, Utc};

/// Fill in the defaults for every absent furniture field.
///
/// Consumers of a stored design can assume the returned item carries
/// all of type, position, rotation, color, scale, metalness and
/// roughness. `name` is passed through untouched. Fields that are
/// already present keep their value, so normalizing a fully-populated
/// item returns an equal item.
pub fn normalize_furniture(item: &FurnitureItem) -> FurnitureItem {
    FurnitureItem {
        item_type: Some(
            item.item_type
                .clone()
                .unwrap_or_else(|| config::DEFAULT_FURNITURE_TYPE.to_string()),
        ),
        name: item.name.clone(),
        position: Some(item.position.unwrap_or(config::DEFAULT_FURNITURE_POSITION)),
        rotation: Some(item.rotation.unwrap_or(config::DEFAULT_FURNITURE_ROTATION)),
        color: Some(
            item.color
                .clone()
                .unwrap_or_else(|| config::DEFAULT_FURNITURE_COLOR.to_string()),
        ),
        scale: Some(item.scale.unwrap_or(config::DEFAULT_FURNITURE_SCALE)),
        metalness: Some(item.metalness.unwrap_or(config::DEFAULT_FURNITURE_METALNESS)),
        roughness: Some(item.roughness.unwrap_or(config::DEFAULT_FURNITURE_ROUGHNESS)),
    }
}

/// Shape a stored design into the flat form returned by get-by-id.
///
/// Furniture is kept in stored order with each item normalized.
pub fn design_detail(design: Design) -> DesignDetail {
    DesignDetail {
        id: design.id,
        room_name: design.room_name,
        room_type: design.room_type,
        room_dimensions: design.room_dimensions,
        wall_color: design.wall_color,
        furniture: design.furniture.iter().map(normalize_furniture).collect(),
        scene_ambient_light: design.scene_ambient_light,
        scene_shadow_intensity: design.scene_shadow_intensity,
        show_shading: design.show_shading,
        thumbnail: design.thumbnail,
    }
}

/// Shape a stored design into one entry of the list view.
pub fn summarize(design: &Design) -> DesignSummary {
    DesignSummary {
        id: design.id.clone(),
        name: design.room_name.clone(),
        date: format_created_date(design.created_at),
        thumbnail: design
            .thumbnail
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(config::PLACEHOLDER_THUMBNAIL)
            .to_string(),
        room_type: display_room_type(&design.room_type),
    }
}

/// "LIVING_ROOM" becomes "Living Room"
fn display_room_type(room_type: &str) -> String {
    room_type
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Long en-US date, e.g. "March 3, 2025"
fn format_created_date(created_at: DateTime<Utc>) -> String {
    created_at.format("%B %-d, %Y").to_string()
}
