//! Application orchestration layer
//!
//! This module coordinates between the pure domain logic, the autoplay
//! ticker, and the observers registered by the owning view.

pub mod controller;
pub mod state;

mod ticker;
