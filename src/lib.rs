//! # GeoTZ Server
//!
//! An HTTP API that resolves geographic coordinates to IANA timezone
//! identifiers and their UTC offsets.
//!
//! ## Features
//! - Coordinate to timezone resolution backed by an embedded boundary index
//! - Current UTC offset for a resolved zone
//! - Date-specific UTC offset honoring the zone's DST rules
//! - Stateless request handling over a shared read-only index

/// HTTP routes, request handlers, and API error responses
pub mod api;
/// Configuration management and environment variables
pub mod config;
/// Timezone resolution collaborators
pub mod services;
/// Utility functions for coordinate validation and offset arithmetic
pub mod utils;
