// Anonymize - Swiss PII Review and Anonymization
// Copyright (c) 2026 Anonymize Contributors
// Licensed under the MIT License

//! # Anonymize - Swiss PII Review Engine
//!
//! Anonymize is the client-side review and re-annotation engine for the
//! Swiss PII anonymizer desktop app. Entity detection runs in an external
//! analysis service reached over local HTTP; this crate takes the detection
//! result (raw text plus a flat list of entity spans) and turns it into an
//! interactively editable, consistently anonymized rendering.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - [`core`] - Review engine (entity store, offset resolver, grouping,
//!   manual annotation, rendering)
//! - [`adapters`] - External integrations (analysis-service HTTP client)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```
//! use anonymize::core::EntityStore;
//! use anonymize::domain::{AnonymizationStyle, DetectedEntity};
//!
//! let mut store = EntityStore::new();
//! store.initialize(
//!     "Hans wohnt in Zürich",
//!     vec![
//!         DetectedEntity::new("PERSON", "Hans", 0, 4, 0.95),
//!         DetectedEntity::new("LOCATION", "Zürich", 14, 20, 0.9),
//!     ],
//! );
//!
//! assert_eq!(
//!     store.anonymized_text(AnonymizationStyle::Replace),
//!     "<PERSON> wohnt in <LOCATION>"
//! );
//! ```
//!
//! ## Edit Model
//!
//! All edits address entities by id but propagate by case-insensitive
//! surface text, so a decision made on one mention applies to every
//! identical mention:
//!
//! ```
//! use anonymize::core::EntityStore;
//! use anonymize::domain::{AnonymizationStyle, DetectedEntity};
//!
//! let mut store = EntityStore::new();
//! store.initialize(
//!     "Müller traf Müller",
//!     vec![
//!         DetectedEntity::new("PERSON", "Müller", 0, 6, 0.9),
//!         DetectedEntity::new("PERSON", "Müller", 12, 18, 0.9),
//!     ],
//! );
//!
//! let first = store.entities()[0].id;
//! store.exclude(first);
//! assert!(store.entities().iter().all(|e| e.excluded));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::AnonymizeError`]; entity edits are
//! infallible by design (unknown ids are silent no-ops, since stale
//! selections are routine in an interactive UI).
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate:
//!
//! ```no_run
//! tracing::info!(entity_count = 3, "Detection result loaded");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
