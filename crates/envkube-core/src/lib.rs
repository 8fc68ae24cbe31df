//! Envkube Core - .env to Kubernetes artifact conversion
//!
//! This crate turns `.env`-style key/value text into three output artifacts:
//! a ConfigMap manifest for plain configuration, an ExternalSecret manifest
//! for sensitive values, and a flat JSON document ready for import into a
//! secret-management backend.
//!
//! The pipeline is linear: [`parse`] produces an ordered list of classified
//! [`Entry`] values, and each renderer consumes that list independently.
//! Everything is a pure function of its inputs - no I/O, no shared state,
//! and no failure modes. Malformed input lines are silently skipped rather
//! than reported; this is a best-effort conversion tool, not a validator.
//!
//! # Example
//!
//! ```
//! use envkube_core::{parse, render_config_map, render_vault_json};
//!
//! let entries = parse("DB_PASSWORD=\"s3cr3t\"\nPORT=8080\n");
//! assert!(entries[0].is_secret);
//! assert!(!entries[1].is_secret);
//!
//! let configmap = render_config_map(&entries, "app-configmap", "default");
//! assert!(configmap.contains("  PORT: \"8080\""));
//!
//! let vault = render_vault_json(&entries);
//! assert_eq!(vault, "{\n  \"DB_PASSWORD\": \"s3cr3t\"\n}");
//! ```

pub mod configmap;
pub mod entry;
pub mod external_secret;
pub mod parser;
pub mod vault;

pub use configmap::render_config_map;
pub use entry::{Entry, is_sensitive_key};
pub use external_secret::render_external_secret;
pub use parser::parse;
pub use vault::render_vault_json;
