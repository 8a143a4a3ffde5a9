//! Services module
//!
//! Business logic coordinating between the HTTP layer and repository.

pub mod designs;
pub mod view;

pub use designs::DesignService;
