//! Render-facing view state computation
//!
//! Translates controller snapshots into per-item visual states for the
//! rendering strategies the carousel is consumed by. Drawing itself is
//! out of scope; renderers live with the owning view.

pub mod view_state;

pub use view_state::{
    IndicatorState, ItemFrame, ItemVisual, RenderStrategy, SlideMotion, StackPlacement,
};
