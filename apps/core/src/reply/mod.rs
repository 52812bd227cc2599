//! # Reply Module
//!
//! Turns an analysis into reply text.
//!
//! - `picker`: injectable randomness for variant selection
//! - `dispatch`: (tier, intent) dispatch table and the low-tier fallback chain
//! - `generator`: template rendering per route

pub mod dispatch;
pub mod generator;
pub mod picker;

pub use dispatch::{FallbackStep, Route};
pub use generator::{format_rupees, Reply, ResponseGenerator};
pub use picker::{RngPicker, ScriptedPicker, VariantPicker};
