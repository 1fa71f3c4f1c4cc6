//! Mortar Client: HTTP access to the content service.
//!
//! # Modules
//!
//! - [`client`]: the reqwest-backed [`ContentClient`]
//! - [`source`]: [`ContentSource`] and [`EnquirySink`] traits used by the
//!   page loaders

#![doc = include_str!("../README.md")]

pub mod client;
pub mod source;

pub use client::ContentClient;
pub use source::{ContentSource, EnquirySink};
