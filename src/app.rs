//! Application state and initialization
//!
//! All services are initialized here and made available to the route
//! handlers through AppState.

use std::sync::Arc;

use crate::config::Config;
use crate::database::Connector;
use crate::services::DesignService;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub designs: DesignService,
}

impl AppState {
    /// Wire up the connector and services for the given configuration.
    ///
    /// The connector is lazy: no database connection is opened here.
    /// The first operation that needs the store establishes it.
    pub fn new(config: &Config) -> Self {
        let connector = Arc::new(Connector::new(config.database_path.clone()));

        Self {
            designs: DesignService::new(connector),
        }
    }
}
