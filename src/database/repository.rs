//! Repository layer for database operations
//!
//! CRUD operations for stored designs. Each operation is a single
//! document-level statement; there are no multi-step transactions.

use super::models::{Design, DesignInput, FurnitureItem, RoomDimensions};
use crate::config;
use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

/// Raw row shape of the designs table
#[derive(Debug, FromRow)]
struct DesignRow {
    id: String,
    room_name: String,
    room_type: String,
    room_width: f64,
    room_length: f64,
    room_height: f64,
    wall_color: String,
    furniture: Option<String>,
    scene_ambient_light: Option<f64>,
    scene_shadow_intensity: Option<f64>,
    show_shading: Option<bool>,
    thumbnail: Option<String>,
    created_at: DateTime<Utc>,
}

impl DesignRow {
    fn into_design(self) -> Result<Design> {
        let furniture: Vec<FurnitureItem> = match self.furniture {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };

        Ok(Design {
            id: self.id,
            room_name: self.room_name,
            room_type: self.room_type,
            room_dimensions: RoomDimensions {
                width: self.room_width,
                length: self.room_length,
                height: self.room_height,
            },
            wall_color: self.wall_color,
            furniture,
            scene_ambient_light: self.scene_ambient_light,
            scene_shadow_intensity: self.scene_shadow_intensity,
            show_shading: self.show_shading,
            thumbnail: self.thumbnail,
            created_at: self.created_at,
        })
    }
}

/// Repository for design documents
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new design with a fresh id and creation timestamp.
    ///
    /// Scene settings and the furniture array carry schema-level
    /// defaults, so a freshly created design always has concrete
    /// values for them. Individual furniture items are stored exactly
    /// as supplied; their fields are defaulted on read.
    pub async fn create_design(&self, input: DesignInput) -> Result<Design> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let design = Design {
            id,
            room_name: input.room_name,
            room_type: input.room_type,
            room_dimensions: input.room_dimensions,
            wall_color: input.wall_color,
            furniture: input.furniture.unwrap_or_default(),
            scene_ambient_light: Some(
                input
                    .scene_ambient_light
                    .unwrap_or(config::DEFAULT_AMBIENT_LIGHT),
            ),
            scene_shadow_intensity: Some(
                input
                    .scene_shadow_intensity
                    .unwrap_or(config::DEFAULT_SHADOW_INTENSITY),
            ),
            show_shading: Some(input.show_shading.unwrap_or(config::DEFAULT_SHOW_SHADING)),
            thumbnail: input.thumbnail,
            created_at: now,
        };

        let furniture_json = serde_json::to_string(&design.furniture)?;

        sqlx::query(
            r#"
            INSERT INTO designs (
                id, room_name, room_type, room_width, room_length, room_height,
                wall_color, furniture, scene_ambient_light, scene_shadow_intensity,
                show_shading, thumbnail, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&design.id)
        .bind(&design.room_name)
        .bind(&design.room_type)
        .bind(design.room_dimensions.width)
        .bind(design.room_dimensions.length)
        .bind(design.room_dimensions.height)
        .bind(&design.wall_color)
        .bind(&furniture_json)
        .bind(design.scene_ambient_light)
        .bind(design.scene_shadow_intensity)
        .bind(design.show_shading)
        .bind(design.thumbnail.as_deref())
        .bind(design.created_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Created design: {}", design.id);
        Ok(design)
    }

    /// Get a design by ID
    pub async fn get_design(&self, id: &str) -> Result<Design> {
        let row = sqlx::query_as::<_, DesignRow>(
            r#"
            SELECT * FROM designs WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::DesignNotFound(id.to_string()))?;

        row.into_design()
    }

    /// List all designs, most recently created first
    pub async fn list_designs(&self) -> Result<Vec<Design>> {
        let rows = sqlx::query_as::<_, DesignRow>(
            r#"
            SELECT * FROM designs ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DesignRow::into_design).collect()
    }

    /// Replace the stored fields of a design.
    ///
    /// Every column except `id` and `created_at` is rewritten from the
    /// input; optional fields the caller omitted are written as NULL
    /// rather than left at their previous value.
    pub async fn update_design(&self, id: &str, input: DesignInput) -> Result<()> {
        let furniture_json = input
            .furniture
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let rows_affected = sqlx::query(
            r#"
            UPDATE designs SET
                room_name = ?,
                room_type = ?,
                room_width = ?,
                room_length = ?,
                room_height = ?,
                wall_color = ?,
                furniture = ?,
                scene_ambient_light = ?,
                scene_shadow_intensity = ?,
                show_shading = ?,
                thumbnail = ?
            WHERE id = ?
            "#,
        )
        .bind(input.room_name)
        .bind(input.room_type)
        .bind(input.room_dimensions.width)
        .bind(input.room_dimensions.length)
        .bind(input.room_dimensions.height)
        .bind(input.wall_color)
        .bind(furniture_json)
        .bind(input.scene_ambient_light)
        .bind(input.scene_shadow_intensity)
        .bind(input.show_shading)
        .bind(input.thumbnail)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::DesignNotFound(id.to_string()));
        }

        tracing::debug!("Updated design: {}", id);
        Ok(())
    }

    /// Delete a design and its embedded furniture
    pub async fn delete_design(&self, id: &str) -> Result<()> {
        let rows_affected = sqlx::query("DELETE FROM designs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::DesignNotFound(id.to_string()));
        }

        tracing::debug!("Deleted design: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::initialize_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_repo() -> Repository {
        // A single connection keeps every query on the same in-memory
        // database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        Repository::new(pool)
    }

    fn sample_input() -> DesignInput {
        DesignInput {
            room_name: "Den".to_string(),
            room_type: "BEDROOM".to_string(),
            room_dimensions: RoomDimensions {
                width: 4.0,
                length: 5.0,
                height: 2.8,
            },
            wall_color: "#FFFFFF".to_string(),
            furniture: None,
            scene_ambient_light: None,
            scene_shadow_intensity: None,
            show_shading: None,
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_design() {
        let repo = create_test_repo().await;

        let created = repo.create_design(sample_input()).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = repo.get_design(&created.id).await.unwrap();
        assert_eq!(fetched.room_name, "Den");
        assert_eq!(fetched.room_dimensions.height, 2.8);
        // Schema-level defaults applied at creation
        assert_eq!(fetched.scene_ambient_light, Some(0.5));
        assert_eq!(fetched.scene_shadow_intensity, Some(0.8));
        assert_eq!(fetched.show_shading, Some(true));
        assert!(fetched.furniture.is_empty());
    }

    #[tokio::test]
    async fn test_furniture_round_trips_as_supplied() {
        let repo = create_test_repo().await;

        let partial = FurnitureItem {
            item_type: Some("sofa".to_string()),
            color: Some("#123456".to_string()),
            ..Default::default()
        };
        let mut input = sample_input();
        input.furniture = Some(vec![partial.clone()]);

        let created = repo.create_design(input).await.unwrap();
        let fetched = repo.get_design(&created.id).await.unwrap();

        // Items are stored verbatim: absent fields stay absent.
        assert_eq!(fetched.furniture, vec![partial]);
    }

    #[tokio::test]
    async fn test_get_unknown_design() {
        let repo = create_test_repo().await;

        let err = repo.get_design("no-such-id").await.unwrap_err();
        assert!(matches!(err, AppError::DesignNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let repo = create_test_repo().await;

        for name in ["first", "second", "third"] {
            let mut input = sample_input();
            input.room_name = name.to_string();
            repo.create_design(input).await.unwrap();
        }

        let designs = repo.list_designs().await.unwrap();
        let names: Vec<&str> = designs.iter().map(|d| d.room_name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_update_replaces_omitted_optionals() {
        let repo = create_test_repo().await;

        let mut input = sample_input();
        input.thumbnail = Some("data:image/png;base64,abc".to_string());
        input.scene_ambient_light = Some(0.9);
        let created = repo.create_design(input).await.unwrap();
        let before = repo.get_design(&created.id).await.unwrap();

        // Update with only the required fields: optionals are cleared,
        // not carried over.
        repo.update_design(&created.id, sample_input())
            .await
            .unwrap();

        let fetched = repo.get_design(&created.id).await.unwrap();
        assert_eq!(fetched.thumbnail, None);
        assert_eq!(fetched.scene_ambient_light, None);
        assert!(fetched.furniture.is_empty());
        // Creation time is immutable.
        assert_eq!(fetched.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_design() {
        let repo = create_test_repo().await;

        let err = repo
            .update_design("no-such-id", sample_input())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DesignNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_design() {
        let repo = create_test_repo().await;

        let created = repo.create_design(sample_input()).await.unwrap();
        repo.delete_design(&created.id).await.unwrap();

        let err = repo.get_design(&created.id).await.unwrap_err();
        assert!(matches!(err, AppError::DesignNotFound(_)));

        // Deleting again reports not found.
        let err = repo.delete_design(&created.id).await.unwrap_err();
        assert!(matches!(err, AppError::DesignNotFound(_)));
    }
}
