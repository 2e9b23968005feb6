//! Data models for the MSA flow walkthrough
//!
//! This module contains the core data structures:
//! - Flow, step and colour types
//! - The validated flow catalog and its JSON document form
//! - The navigation state machine
//! - Enums for rendering state

pub mod catalog;
pub mod enums;
pub mod flow;
pub mod navigation;

// Re-exports for convenient access
pub use catalog::{Architecture, Catalog, ServiceNode};
pub use enums::{HitTarget, StepState};
pub use flow::{FlowId, HexColor, Step};
pub use navigation::Navigator;
