//! VolunteerHub Core - Event models, configuration, and ports
//!
//! This crate contains the domain types shared by the geospatial queries and
//! the interfaces that event sources and location providers implement.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod sources;

pub use error::{Result, VolunteerHubError};
