#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/alphalab-rs/alphalab/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for the AlphaLab research scaffold.
//!
//! This crate provides the building blocks shared by every AlphaLab crate:
//! the [`Alpha`] signal container, the [`SignalTable`] it produces, the
//! [`BacktestAdapter`] extension point and the common error type.

/// The version of the alphalab-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod adapter;
pub mod alpha;
pub mod error;
pub mod stats;
pub mod types;

// Re-exports
pub use adapter::{BacktestAdapter, EngineReport};
pub use alpha::{Alpha, AlphaMetadata};
pub use error::{AlphaLabError, Result};
pub use types::{SignalTable, Symbol};
