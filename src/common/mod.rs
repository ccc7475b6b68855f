//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SimulationConfig`]
//! - Error types
//! - Identifiers (PageId, FrameId) and the validated [`Capacity`]

mod capacity;
pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use capacity::Capacity;
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
