//! # flowprint-core
//!
//! Core library for flowprint - a behavioral questionnaire scoring engine.
//!
//! This library provides:
//! - An immutable questionnaire catalog loaded once at startup
//! - A pure scoring engine: endorsements, per-category metrics, and
//!   deterministic tie-break selection of driver, creation sub-style, and
//!   growth edge
//! - A TTL-keyed in-memory profile store
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows strictly left to right:
//! Catalog → endorsements → raw totals → category metrics → selectors →
//! profile. Every stage is a pure transformation over immutable inputs; the
//! catalog is shared read-only across any number of concurrent scoring
//! calls.
//!
//! ## Example
//!
//! ```rust,no_run
//! use flowprint_core::{load_catalog, score_answers, Answer, Config};
//!
//! let config = Config::load().expect("failed to load config");
//! let catalog = load_catalog(&config.data_path()).expect("failed to load catalog");
//!
//! let answers = vec![Answer {
//!     slot: "ER-1".to_string(),
//!     token: "Strongly Agree".to_string(),
//! }];
//! let profile = score_answers(&catalog, &answers);
//! println!("{}", profile.headline);
//! ```

// Re-export commonly used items at the crate root
pub use catalog::{load_catalog, Catalog};
pub use config::Config;
pub use error::{Error, Result};
pub use scoring::score_answers;
pub use store::{MemoryProfileStore, ProfileStore};
pub use types::*;

// Public modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod scoring;
pub mod store;
pub mod types;
