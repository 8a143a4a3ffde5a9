//! Designs service
//!
//! High-level business logic for design operations. Every operation
//! validates its input before any store access, then obtains the
//! shared pool from the connector and performs exactly one repository
//! operation.

use std::sync::Arc;

use crate::database::{
    Connector, DesignDetail, DesignPayload, DesignSummary, Repository,
};
use crate::error::{AppError, Result};
use crate::services::view;

/// Service for managing designs
#[derive(Clone)]
pub struct DesignService {
    connector: Arc<Connector>,
}

impl DesignService {
    pub fn new(connector: Arc<Connector>) -> Self {
        Self { connector }
    }

    async fn repo(&self) -> Result<Repository> {
        let pool = self.connector.get().await?;
        Ok(Repository::new(pool.clone()))
    }

    /// Persist a new design
    pub async fn create(&self, payload: DesignPayload) -> Result<()> {
        let input = payload.validate()?;

        tracing::info!("Saving design: {}", input.room_name);

        let repo = self.repo().await?;
        let design = repo.create_design(input).await?;

        tracing::info!("Design saved successfully: {}", design.id);
        Ok(())
    }

    /// Fetch one design in its flat display form
    pub async fn get(&self, id: &str) -> Result<DesignDetail> {
        if id.is_empty() {
            return Err(AppError::missing_id());
        }

        tracing::debug!("Fetching design: {}", id);

        let repo = self.repo().await?;
        let design = repo.get_design(id).await?;

        Ok(view::design_detail(design))
    }

    /// List every design for the dashboard, newest first
    pub async fn list(&self) -> Result<Vec<DesignSummary>> {
        tracing::debug!("Fetching design list");

        let repo = self.repo().await?;
        let designs = repo.list_designs().await?;

        Ok(designs.iter().map(view::summarize).collect())
    }

    /// Replace the stored fields of a design
    pub async fn update(&self, id: &str, payload: DesignPayload) -> Result<()> {
        if id.is_empty() {
            return Err(AppError::missing_id());
        }
        let input = payload.validate()?;

        tracing::info!("Updating design: {}", id);

        let repo = self.repo().await?;
        repo.update_design(id, input).await?;

        tracing::info!("Design updated successfully: {}", id);
        Ok(())
    }

    /// Delete a design
    pub async fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(AppError::missing_id());
        }

        tracing::info!("Deleting design: {}", id);

        let repo = self.repo().await?;
        repo.delete_design(id).await?;

        tracing::info!("Design deleted successfully: {}", id);
        Ok(())
    }
}
