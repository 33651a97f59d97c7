//! Keyboard navigation adapter
//!
//! Maps arrow keys onto carousel navigation. The adapter reports whether
//! it consumed the key so callers can suppress the environment's default
//! handling for consumed keys and pass everything else through.

use crate::app::controller::CarouselController;
use crate::app::state::CarouselError;

/// Navigation keys the adapter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    /// Reserved for vertical layouts; currently unhandled
    Up,
    /// Reserved for vertical layouts; currently unhandled
    Down,
}

/// Binds arrow keys to a carousel controller
#[derive(Clone)]
pub struct KeyboardBinding {
    controller: CarouselController,
}

impl KeyboardBinding {
    pub fn new(controller: CarouselController) -> Self {
        Self { controller }
    }

    /// Routes a key press to the controller
    ///
    /// # Returns
    /// true if the key was consumed, false for keys the carousel does not
    /// handle
    pub fn handle(&self, key: NavKey) -> Result<bool, CarouselError> {
        match key {
            NavKey::Left => {
                log::trace!("keyboard: previous");
                self.controller.previous()?;
                Ok(true)
            }
            NavKey::Right => {
                log::trace!("keyboard: next");
                self.controller.next()?;
                Ok(true)
            }
            NavKey::Up | NavKey::Down => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::CarouselOptions;

    fn binding(size: usize) -> (KeyboardBinding, CarouselController) {
        let carousel = CarouselController::create(size, CarouselOptions::new()).unwrap();
        (KeyboardBinding::new(carousel.clone()), carousel)
    }

    #[test]
    fn left_and_right_navigate() {
        let (keys, carousel) = binding(3);

        assert!(keys.handle(NavKey::Right).unwrap());
        assert_eq!(carousel.current_index().unwrap(), Some(1));

        assert!(keys.handle(NavKey::Left).unwrap());
        assert_eq!(carousel.current_index().unwrap(), Some(0));

        // Backward across the wrap boundary
        assert!(keys.handle(NavKey::Left).unwrap());
        assert_eq!(carousel.current_index().unwrap(), Some(2));
    }

    #[test]
    fn vertical_keys_are_not_consumed() {
        let (keys, carousel) = binding(3);
        assert!(!keys.handle(NavKey::Up).unwrap());
        assert!(!keys.handle(NavKey::Down).unwrap());
        assert_eq!(carousel.current_index().unwrap(), Some(0));
    }

    #[test]
    fn keys_on_destroyed_controller_fail() {
        let (keys, carousel) = binding(3);
        carousel.destroy().unwrap();
        assert_eq!(
            keys.handle(NavKey::Right),
            Err(CarouselError::ControllerDisposed)
        );
    }
}
