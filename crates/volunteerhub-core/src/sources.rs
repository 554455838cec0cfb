//! Event source adapters

pub mod geojson;
pub mod json;
pub mod sample;

pub use self::json::JsonFileSource;
pub use self::sample::SampleEventSource;
