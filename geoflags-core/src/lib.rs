//! Core library for the `geoflags` CLI.
//!
//! This crate defines:
//! - Configuration of the remote endpoint
//! - The quality-flag client and its error type
//! - Shared domain models (queries, flags)
//!
//! It is used by `geoflags-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod model;

pub use client::{FetchError, FlagSource, QualityApiClient, request_url, strip_reserved};
pub use config::{Config, DEFAULT_BASE_URL};
pub use model::{Flags, Query, RESERVED_KEYS};
