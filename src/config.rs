//! Runtime configuration and default values
//!
//! Central location for environment-derived settings and the default
//! table applied to optional design and furniture fields.

use std::net::SocketAddr;
use std::path::PathBuf;

// ===== Furniture Item Defaults =====

/// Furniture category assumed when an item carries no type
pub const DEFAULT_FURNITURE_TYPE: &str = "chair";
/// Neutral tan applied to furniture without an explicit color
pub const DEFAULT_FURNITURE_COLOR: &str = "#A1887F";
/// Placement origin for items without a position, in meters
pub const DEFAULT_FURNITURE_POSITION: [f64; 3] = [0.0, 0.0, 0.0];
/// Orientation for items without a rotation, in radians
pub const DEFAULT_FURNITURE_ROTATION: [f64; 3] = [0.0, 0.0, 0.0];
/// Uniform scale factor for items without an explicit scale
pub const DEFAULT_FURNITURE_SCALE: f64 = 1.0;
/// Material metalness in [0, 1]
pub const DEFAULT_FURNITURE_METALNESS: f64 = 0.0;
/// Material roughness in [0, 1]
pub const DEFAULT_FURNITURE_ROUGHNESS: f64 = 0.5;

// ===== Scene Defaults =====

/// Ambient light level in [0, 1] for designs saved without one
pub const DEFAULT_AMBIENT_LIGHT: f64 = 0.5;
/// Shadow intensity in [0, 1] for designs saved without one
pub const DEFAULT_SHADOW_INTENSITY: f64 = 0.8;
/// Shading flag for designs saved without one
pub const DEFAULT_SHOW_SHADING: bool = true;

// ===== List View =====

/// Thumbnail shown in the design list when a design has none stored
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg?height=100&width=200";

// ===== Runtime Settings =====

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4000";
const DEFAULT_DATABASE_PATH: &str = "data/roomviz.db";

/// Runtime settings resolved from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Path of the SQLite database file
    pub database_path: PathBuf,
}

impl Config {
    /// Resolve configuration from `ROOMVIZ_LISTEN_ADDR` and
    /// `ROOMVIZ_DATABASE_PATH`, falling back to local-dev defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let listen_addr = std::env::var("ROOMVIZ_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()?;

        let database_path = std::env::var("ROOMVIZ_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH));

        Ok(Self {
            listen_addr,
            database_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_addr_parses() {
        let addr: SocketAddr = DEFAULT_LISTEN_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 4000);
    }
}
