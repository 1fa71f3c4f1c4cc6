//! Mortar Core: content records, fallback merging, asset URLs and the
//! project catalog.
//!
//! This crate has no I/O beyond reading its own config file. The HTTP side
//! lives in `mortar-client`, page assembly in `mortar-site`.
//!
//! # Modules
//!
//! - [`endpoint`]: local vs. production address resolution
//! - [`merge`]: the fallback merge engine
//! - [`assets`]: asset URL normalization
//! - [`catalog`]: the in-memory project catalog
//! - [`types`]: profile, contact, project and enquiry records
//! - [`config`]: TOML site configuration
//! - [`error`]: error types and `Result` alias

#![doc = include_str!("../README.md")]

pub mod assets;
pub mod catalog;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod lenient;
pub mod merge;
pub mod types;

// Re-exports for convenience
pub use assets::{AssetNormalizer, AssetUrl};
pub use catalog::CatalogIndex;
pub use config::{ContentDefaults, SiteConfig};
pub use endpoint::{Endpoint, EndpointResolver, Environment};
pub use error::{Error, Result};
pub use merge::{FallbackMerge, merge, merge_value};
pub use types::{
    Category, CategoryFilter, ContactRecord, EnquiryField, EnquiryRecord, ProfileRecord,
    ProjectRecord, ProjectStats,
};
