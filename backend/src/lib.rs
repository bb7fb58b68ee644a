//! # Censusdash - postcode-level census statistics
//!
//! Censusdash extracts demographic statistics (population, income,
//! dwelling structure, ancestry) for a single postal area from the 2021
//! Australian Census GCP tables and serves fully computed view-models
//! to a dashboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  GCP CSVs   │────▶│   Loader    │────▶│  Accessors  │────▶│  View-model │
//! │ (G01..G37)  │     │ (one row /  │     │ (semantic   │     │  (JSON for  │
//! │             │     │  postcode)  │     │  regroup)   │     │   charts)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use censusdash::{area_profile, CensusStore};
//! use std::path::Path;
//!
//! let store = CensusStore::open(Path::new("data"))?;
//! let profile = area_profile(&store, "2000")?;
//! println!("{} people", profile.population.totals.total);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - per-concern error types
//! - [`record`] - tables and the single-row validation contract
//! - [`loader`] - reading the per-domain census CSVs
//! - [`domain`] - the four accessors (population, income, dwelling, ancestry)
//! - [`stats`] - shared derived statistics
//! - [`view`] - fully computed per-area view-models
//! - [`api`] - HTTP server

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod record;
pub mod stats;
pub mod view;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{AccessError, LoaderError, ProfileError, RecordError};

// =============================================================================
// Re-exports - Records and loading
// =============================================================================

pub use loader::{CensusStore, AREA_CODE_COLUMN};
pub use record::{Record, Table};

// =============================================================================
// Re-exports - Domain accessors
// =============================================================================

pub use domain::ancestry::Ancestry;
pub use domain::dwelling::Dwelling;
pub use domain::income::Income;
pub use domain::population::Population;
pub use domain::GenderCounts;

// =============================================================================
// Re-exports - Derived statistics
// =============================================================================

pub use stats::{band_midpoint, percentage, weighted_percentile};

// =============================================================================
// Re-exports - View-models
// =============================================================================

pub use view::{area_profile, AreaProfile};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
