//! Configuration module for showcase-carousel
//!
//! This module concentrates the construction-time options shared between
//! the owning view and the controller, along with their validation rules.

pub mod options;

pub use options::{CarouselOptions, OptionsError};
