//! Database models
//!
//! Rust structs representing stored designs and the request/response
//! shapes derived from them. All models use serde with camelCase wire
//! names matching the stored document shape.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interior room dimensions, interpreted as meters by consumers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

/// One placed object within a design's furniture sequence.
///
/// Every field is optional at the storage level so partial items
/// round-trip exactly as the caller sent them; consumers go through
/// [`crate::services::view::normalize_furniture`] to get a fully
/// populated item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metalness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,
}

/// A persisted design: one room's layout, appearance and furniture
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub id: String,
    pub room_name: String,
    pub room_type: String,
    pub room_dimensions: RoomDimensions,
    pub wall_color: String,
    /// Order is display-significant and preserved as stored
    pub furniture: Vec<FurnitureItem>,
    pub scene_ambient_light: Option<f64>,
    pub scene_shadow_intensity: Option<f64>,
    pub show_shading: Option<bool>,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body accepted by the create and update routes.
///
/// All fields are optional at the deserialization boundary; required
/// fields are enforced by [`DesignPayload::validate`] so a missing
/// field maps to a validation failure rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPayload {
    pub room_name: Option<String>,
    pub room_type: Option<String>,
    pub room_dimensions: Option<RoomDimensions>,
    pub wall_color: Option<String>,
    pub furniture: Option<Vec<FurnitureItem>>,
    pub scene_ambient_light: Option<f64>,
    pub scene_shadow_intensity: Option<f64>,
    pub show_shading: Option<bool>,
    pub thumbnail: Option<String>,
}

/// A validated design write: required fields concrete, optional fields
/// passed through as the caller supplied them
#[derive(Debug, Clone)]
pub struct DesignInput {
    pub room_name: String,
    pub room_type: String,
    pub room_dimensions: RoomDimensions,
    pub wall_color: String,
    pub furniture: Option<Vec<FurnitureItem>>,
    pub scene_ambient_light: Option<f64>,
    pub scene_shadow_intensity: Option<f64>,
    pub show_shading: Option<bool>,
    pub thumbnail: Option<String>,
}

impl DesignPayload {
    /// Check the four required fields and produce a [`DesignInput`].
    ///
    /// Empty strings count as missing, matching how the original
    /// frontend treats blank form fields.
    pub fn validate(self) -> Result<DesignInput> {
        let room_name = self.room_name.filter(|s| !s.is_empty());
        let room_type = self.room_type.filter(|s| !s.is_empty());
        let wall_color = self.wall_color.filter(|s| !s.is_empty());

        match (room_name, room_type, self.room_dimensions, wall_color) {
            (Some(room_name), Some(room_type), Some(room_dimensions), Some(wall_color)) => {
                Ok(DesignInput {
                    room_name,
                    room_type,
                    room_dimensions,
                    wall_color,
                    furniture: self.furniture,
                    scene_ambient_light: self.scene_ambient_light,
                    scene_shadow_intensity: self.scene_shadow_intensity,
                    show_shading: self.show_shading,
                    thumbnail: self.thumbnail,
                })
            }
            _ => Err(AppError::missing_fields()),
        }
    }
}

/// Flat display form of one design, returned by the get-by-id route
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDetail {
    pub id: String,
    pub room_name: String,
    pub room_type: String,
    pub room_dimensions: RoomDimensions,
    pub wall_color: String,
    pub furniture: Vec<FurnitureItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_ambient_light: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_shadow_intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_shading: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// One entry of the design list view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignSummary {
    pub id: String,
    pub name: String,
    /// Long localized creation date, e.g. "March 3, 2025"
    pub date: String,
    pub thumbnail: String,
    /// Human room-type label, e.g. "Living Room"
    #[serde(rename = "type")]
    pub room_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> DesignPayload {
        DesignPayload {
            room_name: Some("Den".to_string()),
            room_type: Some("BEDROOM".to_string()),
            room_dimensions: Some(RoomDimensions {
                width: 4.0,
                length: 5.0,
                height: 2.8,
            }),
            wall_color: Some("#FFFFFF".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn validate_accepts_complete_payload() {
        let input = full_payload().validate().unwrap();
        assert_eq!(input.room_name, "Den");
        assert_eq!(input.room_dimensions.height, 2.8);
    }

    #[test]
    fn validate_rejects_each_missing_required_field() {
        for strip in 0..4 {
            let mut payload = full_payload();
            match strip {
                0 => payload.room_name = None,
                1 => payload.room_type = None,
                2 => payload.room_dimensions = None,
                _ => payload.wall_color = None,
            }
            let err = payload.validate().unwrap_err();
            assert_eq!(err.to_string(), "Missing required fields");
        }
    }

    #[test]
    fn validate_treats_empty_strings_as_missing() {
        let mut payload = full_payload();
        payload.room_name = Some(String::new());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn furniture_item_tolerates_partial_json() {
        let item: FurnitureItem = serde_json::from_str(r#"{"type":"sofa"}"#).unwrap();
        assert_eq!(item.item_type.as_deref(), Some("sofa"));
        assert!(item.position.is_none());

        // Partial items serialize back without invented fields.
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"type": "sofa"}));
    }
}
