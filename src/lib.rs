//! showcase-carousel: a deterministic active-index controller
//!
//! Showcase UIs (project grids, work-history decks, skill panels) keep
//! re-deriving the same piece of state inline: which item of a fixed
//! collection is currently active, advanced by a timer, scroll progress,
//! or keyboard and pointer input, with circular wraparound. This crate
//! owns that state once:
//!
//! - [`app::controller::CarouselController`] holds the active index,
//!   autoplay timer, and observer registry
//! - [`domain`] carries the pure index and autoplay state machines
//! - [`input`] adapts keyboard, scroll, and pointer events onto the
//!   controller
//! - [`ui`] computes per-item visual state for grid, sliding-panel, and
//!   stacked-deck renderers
//!
//! ```
//! use showcase_carousel::{CarouselController, CarouselOptions};
//!
//! let carousel = CarouselController::create(6, CarouselOptions::new()).unwrap();
//! carousel.next().unwrap();
//! assert_eq!(carousel.current_index().unwrap(), Some(1));
//! carousel.destroy().unwrap();
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use app::controller::{CarouselController, ChangeCause, ChangeObserver, IndexChange};
pub use app::state::CarouselError;
pub use config::options::CarouselOptions;
pub use domain::autoplay::AutoplayStatus;
