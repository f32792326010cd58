//! Element sets loaded from files, and the configuration for merging them.
//!
//! `setmerge-core` is generic over any element type. This crate supplies a
//! concrete one, [`Element`], able to represent the scalar and tuple values
//! found in JSON and TOML documents, together with loaders that read such
//! documents into any [`UniqueContainer`](setmerge_core::UniqueContainer).
//!
//! # Key Types
//!
//! - [`Element`] -- hashable, totally ordered value (null, bool, int, string, tuple)
//! - [`SetFormat`] -- on-disk document format (JSON or TOML)
//! - [`MergeConfig`] -- merge options read from a TOML file
//! - [`InputError`] -- everything that can go wrong while loading

pub mod config;
pub mod element;
pub mod error;
pub mod format;

pub use config::{MergeConfig, OutputFormat};
pub use element::{sorted, Element, ElementSet, OrderedElementSet};
pub use error::{InputError, InputResult};
pub use format::{load_set, parse_set, SetFormat};
