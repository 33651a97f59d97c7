//! Render-facing view state
//!
//! Pure functions from a carousel snapshot (collection size plus active
//! index) to the per-item visual state a renderer needs. Three strategies
//! cover the layouts the controller is consumed by: a grid that
//! highlights one cell, a sliding panel that shows one card at a time,
//! and a stacked deck that fans upcoming cards out behind the active one.
//! Nothing here draws; renderers are external.

use crate::app::controller::IndexChange;
use crate::domain::ring::Ring;

/// How the collection is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// All items visible, the active one emphasized
    GridHighlight,
    /// Only the active item visible, entering/exiting as a panel
    SlidingPanel,
    /// Active item in front, following items stacked behind with depth
    StackedDeck,
}

/// Placement of a card within a stacked deck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackPlacement {
    /// Circular distance behind the active card, starting at 1
    pub depth: usize,
    pub scale: f32,
    pub opacity: f32,
}

/// Visual state of a single item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemVisual {
    /// The item in focus
    Active,
    /// Visible but de-emphasized
    Dimmed,
    /// Not rendered at all
    Hidden,
    /// Stacked behind the active item
    Stacked(StackPlacement),
}

/// Visual state for one item of the collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    pub index: usize,
    pub visual: ItemVisual,
}

/// Deck cards at this depth and beyond are not rendered
pub const STACK_VISIBLE_DEPTH: usize = 3;

/// Scale/opacity lost per step of deck depth
const STACK_FALLOFF: f32 = 0.1;

/// Computes the visual state of every item under a strategy
///
/// Returns an empty list when there is no active item (empty collection).
pub fn frames(strategy: RenderStrategy, len: usize, active: Option<usize>) -> Vec<ItemFrame> {
    let Some(active) = active else {
        return Vec::new();
    };
    if len == 0 {
        return Vec::new();
    }

    (0..len)
        .map(|index| ItemFrame {
            index,
            visual: item_visual(strategy, len, active, index),
        })
        .collect()
}

fn item_visual(strategy: RenderStrategy, len: usize, active: usize, index: usize) -> ItemVisual {
    match strategy {
        RenderStrategy::GridHighlight => {
            if index == active {
                ItemVisual::Active
            } else {
                ItemVisual::Dimmed
            }
        }
        RenderStrategy::SlidingPanel => {
            if index == active {
                ItemVisual::Active
            } else {
                ItemVisual::Hidden
            }
        }
        RenderStrategy::StackedDeck => {
            // Circular distance from the active card to this one
            let depth = (index + len - active) % len;
            if depth == 0 {
                ItemVisual::Active
            } else if depth < STACK_VISIBLE_DEPTH {
                let falloff = 1.0 - STACK_FALLOFF * depth as f32;
                ItemVisual::Stacked(StackPlacement {
                    depth,
                    scale: falloff,
                    opacity: falloff,
                })
            } else {
                ItemVisual::Hidden
            }
        }
    }
}

/// Direction a sliding panel should animate for a given change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideMotion {
    /// New card enters from the trailing side
    Forward,
    /// New card enters from the leading side
    Backward,
    /// Direct jump; no directional slide
    Jump,
}

impl SlideMotion {
    /// Classifies an index change against the collection's ring
    ///
    /// Wraparound steps classify by their ring direction: 0 to the last
    /// index is one step backward, not a jump.
    pub fn classify(change: &IndexChange, len: usize) -> Self {
        let ring = Ring::new(len, true);
        if change.current == ring.advance(change.previous) {
            SlideMotion::Forward
        } else if change.current == ring.retreat(change.previous) {
            SlideMotion::Backward
        } else {
            SlideMotion::Jump
        }
    }
}

/// State for the dots / counter / progress footer
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorState {
    /// Which dot is filled
    pub active_dot: usize,
    /// Human-readable counter, e.g. "2 of 6"
    pub label: String,
    /// Fraction of the collection traversed, in `(0.0, 1.0]`
    pub progress: f64,
}

/// Computes the footer indicator, or None when there is no active item
pub fn indicator(len: usize, active: Option<usize>) -> Option<IndicatorState> {
    let active = active?;
    if len == 0 {
        return None;
    }

    Some(IndicatorState {
        active_dot: active,
        label: format!("{} of {}", active + 1, len),
        progress: (active + 1) as f64 / len as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::ChangeCause;

    fn change(previous: usize, current: usize) -> IndexChange {
        IndexChange {
            previous,
            current,
            cause: ChangeCause::Manual,
        }
    }

    #[test]
    fn grid_highlights_exactly_one_item() {
        let frames = frames(RenderStrategy::GridHighlight, 4, Some(2));
        assert_eq!(frames.len(), 4);
        for frame in &frames {
            if frame.index == 2 {
                assert_eq!(frame.visual, ItemVisual::Active);
            } else {
                assert_eq!(frame.visual, ItemVisual::Dimmed);
            }
        }
    }

    #[test]
    fn sliding_panel_shows_only_the_active_card() {
        let frames = frames(RenderStrategy::SlidingPanel, 3, Some(0));
        assert_eq!(frames[0].visual, ItemVisual::Active);
        assert_eq!(frames[1].visual, ItemVisual::Hidden);
        assert_eq!(frames[2].visual, ItemVisual::Hidden);
    }

    #[test]
    fn stacked_deck_fans_out_behind_the_active_card() {
        let frames = frames(RenderStrategy::StackedDeck, 5, Some(3));

        assert_eq!(frames[3].visual, ItemVisual::Active);
        assert_eq!(
            frames[4].visual,
            ItemVisual::Stacked(StackPlacement { depth: 1, scale: 0.9, opacity: 0.9 })
        );
        // Wraps around the end of the collection
        assert_eq!(
            frames[0].visual,
            ItemVisual::Stacked(StackPlacement { depth: 2, scale: 0.8, opacity: 0.8 })
        );
        // Depth 3 and beyond are hidden
        assert_eq!(frames[1].visual, ItemVisual::Hidden);
        assert_eq!(frames[2].visual, ItemVisual::Hidden);
    }

    #[test]
    fn empty_collection_renders_nothing() {
        assert!(frames(RenderStrategy::GridHighlight, 0, None).is_empty());
        assert!(frames(RenderStrategy::StackedDeck, 4, None).is_empty());
    }

    #[test]
    fn slide_motion_classification() {
        assert_eq!(SlideMotion::classify(&change(1, 2), 6), SlideMotion::Forward);
        assert_eq!(SlideMotion::classify(&change(2, 1), 6), SlideMotion::Backward);
        assert_eq!(SlideMotion::classify(&change(1, 4), 6), SlideMotion::Jump);

        // Wraparound steps keep their direction
        assert_eq!(SlideMotion::classify(&change(5, 0), 6), SlideMotion::Forward);
        assert_eq!(SlideMotion::classify(&change(0, 5), 6), SlideMotion::Backward);
    }

    #[test]
    fn indicator_counts_from_one() {
        let state = indicator(6, Some(1)).unwrap();
        assert_eq!(state.active_dot, 1);
        assert_eq!(state.label, "2 of 6");
        assert!((state.progress - 2.0 / 6.0).abs() < f64::EPSILON);

        assert_eq!(indicator(6, None), None);
    }

    #[test]
    fn indicator_reaches_full_progress_on_the_last_card() {
        let state = indicator(4, Some(3)).unwrap();
        assert_eq!(state.label, "4 of 4");
        assert!((state.progress - 1.0).abs() < f64::EPSILON);
    }
}
