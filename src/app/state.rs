//! Carousel lifecycle state machine
//!
//! Defines the controller's lifecycle phases and the pure transition
//! function over them. The phase is deliberately tiny: which item is
//! active, or the two edge phases for an empty collection and a destroyed
//! controller.

use crate::config::options::OptionsError;
use crate::domain::ring::Ring;

/// Errors raised by carousel operations
///
/// These are programmer/integration errors in the calling view code, not
/// runtime conditions an end user can trigger. They are raised
/// synchronously instead of being silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// Bad construction parameters
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Direct jump outside the valid range of a non-empty collection
    #[error("index {index} is out of range for a collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Any operation on a destroyed controller
    #[error("controller has been destroyed")]
    ControllerDisposed,
}

impl From<OptionsError> for CarouselError {
    fn from(err: OptionsError) -> Self {
        CarouselError::InvalidArgument(err.to_string())
    }
}

/// Lifecycle phase of a carousel controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// The collection has no items; there is no active index
    Empty,
    /// Normal operation with the contained index active
    Active(usize),
    /// Terminal phase after destroy; no transitions lead out of it
    Disposed,
}

impl CarouselPhase {
    /// Returns the active index, if any
    pub fn active_index(&self) -> Option<usize> {
        match self {
            CarouselPhase::Active(index) => Some(*index),
            CarouselPhase::Empty | CarouselPhase::Disposed => None,
        }
    }
}

/// Events that drive phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Step one position forward (manual or autoplay tick)
    Advance,
    /// Step one position backward
    Retreat,
    /// Jump directly to an index
    JumpTo(usize),
    /// Destroy the controller
    Dispose,
}

/// Applies an event to a phase, producing the next phase
///
/// Navigation on `Empty` is a no-op rather than an error, keeping call
/// sites in view code simple. `JumpTo` with an out-of-range index on a
/// non-empty collection fails without producing a new phase, so the
/// caller's current phase stays untouched. Every event on `Disposed`
/// fails, except `Dispose` itself, which stays terminal.
pub fn apply(
    phase: CarouselPhase,
    event: CarouselEvent,
    ring: &Ring,
) -> Result<CarouselPhase, CarouselError> {
    match (phase, event) {
        (CarouselPhase::Disposed, CarouselEvent::Dispose) => Ok(CarouselPhase::Disposed),
        (CarouselPhase::Disposed, _) => Err(CarouselError::ControllerDisposed),

        (_, CarouselEvent::Dispose) => Ok(CarouselPhase::Disposed),

        (CarouselPhase::Empty, _) => Ok(CarouselPhase::Empty),

        (CarouselPhase::Active(index), CarouselEvent::Advance) => {
            Ok(CarouselPhase::Active(ring.advance(index)))
        }

        (CarouselPhase::Active(index), CarouselEvent::Retreat) => {
            Ok(CarouselPhase::Active(ring.retreat(index)))
        }

        (CarouselPhase::Active(_), CarouselEvent::JumpTo(target)) => {
            if ring.contains(target) {
                Ok(CarouselPhase::Active(target))
            } else {
                Err(CarouselError::IndexOutOfRange {
                    index: target,
                    len: ring.len(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_steps_through_the_ring() {
        let ring = Ring::new(3, true);
        let phase = apply(CarouselPhase::Active(2), CarouselEvent::Advance, &ring).unwrap();
        assert_eq!(phase, CarouselPhase::Active(0));
    }

    #[test]
    fn retreat_wraps_backward() {
        let ring = Ring::new(3, true);
        let phase = apply(CarouselPhase::Active(0), CarouselEvent::Retreat, &ring).unwrap();
        assert_eq!(phase, CarouselPhase::Active(2));
    }

    #[test]
    fn jump_to_valid_index() {
        let ring = Ring::new(4, true);
        let phase = apply(CarouselPhase::Active(0), CarouselEvent::JumpTo(3), &ring).unwrap();
        assert_eq!(phase, CarouselPhase::Active(3));
    }

    #[test]
    fn jump_out_of_range_fails_without_transition() {
        let ring = Ring::new(3, true);
        let result = apply(CarouselPhase::Active(1), CarouselEvent::JumpTo(5), &ring);
        assert_eq!(
            result,
            Err(CarouselError::IndexOutOfRange { index: 5, len: 3 })
        );
    }

    #[test]
    fn empty_phase_ignores_navigation() {
        let ring = Ring::new(0, true);
        for event in [
            CarouselEvent::Advance,
            CarouselEvent::Retreat,
            CarouselEvent::JumpTo(0),
        ] {
            let phase = apply(CarouselPhase::Empty, event, &ring).unwrap();
            assert_eq!(phase, CarouselPhase::Empty);
        }
    }

    #[test]
    fn dispose_is_terminal() {
        let ring = Ring::new(3, true);
        let phase = apply(CarouselPhase::Active(1), CarouselEvent::Dispose, &ring).unwrap();
        assert_eq!(phase, CarouselPhase::Disposed);

        // Dispose again stays disposed, everything else fails
        let phase = apply(phase, CarouselEvent::Dispose, &ring).unwrap();
        assert_eq!(phase, CarouselPhase::Disposed);

        let result = apply(phase, CarouselEvent::Advance, &ring);
        assert_eq!(result, Err(CarouselError::ControllerDisposed));
    }

    #[test]
    fn clamped_ring_advance_stays_at_boundary() {
        let ring = Ring::new(3, false);
        let phase = apply(CarouselPhase::Active(2), CarouselEvent::Advance, &ring).unwrap();
        assert_eq!(phase, CarouselPhase::Active(2));
    }

    #[test]
    fn options_errors_map_to_invalid_argument() {
        let err: CarouselError = OptionsError::ZeroInterval.into();
        assert!(matches!(err, CarouselError::InvalidArgument(_)));
    }
}
