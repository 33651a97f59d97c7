//! Carousel controller and coordination layer
//!
//! The controller owns the single source of truth for "which item is
//! active": the lifecycle phase, the autoplay sub-state, the ticker
//! thread, and the observer registry. All public methods are synchronous
//! and thread-safe; handles are cheap clones sharing one controller.
//!
//! Threading notes:
//! - The ticker thread holds only a weak reference, so dropping the last
//!   handle lets the thread wind itself down.
//! - Every cancel/spawn bumps a generation counter. A tick whose
//!   generation no longer matches is stale and does nothing, which is
//!   what makes `destroy` and `suspend` safe against a tick that was
//!   already queued.
//! - Observers are invoked after the state lock is released, so an
//!   observer may call back into the controller freely.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use crate::app::state::{self, CarouselError, CarouselEvent, CarouselPhase};
use crate::app::ticker::Ticker;
use crate::config::options::CarouselOptions;
use crate::domain::autoplay::{Autoplay, AutoplayStatus, TimerCommand};
use crate::domain::ring::Ring;

/// What triggered an index change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// User-driven navigation (keyboard, pointer, scroll, direct call)
    Manual,
    /// An autoplay tick
    Autoplay,
}

/// Notification payload delivered to observers
///
/// Observers only ever see actual changes; operations that leave the
/// active index where it was (a clamped boundary step, a jump onto the
/// current index) are silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
    pub cause: ChangeCause,
}

/// Callback type for index-change notifications
pub type ChangeObserver = Arc<dyn Fn(&IndexChange) + Send + Sync>;

/// Mutable controller state behind the lock
struct Core {
    phase: CarouselPhase,
    ring: Ring,
    autoplay: Autoplay,
    interval: Option<Duration>,
    reset_phase_on_manual_nav: bool,
    ticker: Option<Ticker>,
    // Bumped on every ticker cancel/spawn; a tick carrying an older value
    // is stale and must not act.
    generation: u64,
}

impl Core {
    fn ensure_live(&self) -> Result<(), CarouselError> {
        if matches!(self.phase, CarouselPhase::Disposed) {
            Err(CarouselError::ControllerDisposed)
        } else {
            Ok(())
        }
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.generation = self.generation.wrapping_add(1);
    }
}

struct Shared {
    core: Mutex<Core>,
    observers: Mutex<Vec<(u32, ChangeObserver)>>,
    next_observer_id: AtomicU32,
}

impl Shared {
    /// Called from the ticker thread once per interval
    ///
    /// Returns whether the ticker should keep running. The generation
    /// check runs under the state lock, so a tick that raced past its
    /// cancel flag still cannot act after being superseded.
    fn autoplay_tick(&self, generation: u64) -> bool {
        let change = {
            let Ok(mut core) = self.core.lock() else {
                return false;
            };
            if core.generation != generation {
                return false;
            }
            if core.autoplay.status() != AutoplayStatus::Running {
                return false;
            }
            let CarouselPhase::Active(index) = core.phase else {
                return false;
            };

            let next = core.ring.advance(index);
            if next == index {
                // Clamped at the boundary with wrap disabled; keep ticking
                // but there is nothing to report.
                None
            } else {
                core.phase = CarouselPhase::Active(next);
                Some(IndexChange {
                    previous: index,
                    current: next,
                    cause: ChangeCause::Autoplay,
                })
            }
        };

        if let Some(change) = change {
            log::trace!("autoplay tick: {} -> {}", change.previous, change.current);
            self.notify(&change);
        }
        true
    }

    fn notify(&self, change: &IndexChange) {
        let observers: Vec<ChangeObserver> = {
            let Ok(entries) = self.observers.lock() else {
                return;
            };
            entries.iter().map(|(_, observer)| Arc::clone(observer)).collect()
        };

        for observer in observers {
            observer(change);
        }
    }
}

/// Deterministic active-index controller for a fixed-size collection
///
/// Tracks which item of an ordered collection is active, with circular
/// wraparound (or clamping), optional timer-driven autoplay, and
/// pause-on-interaction suspension. Rendering is a consumer concern; the
/// controller only reports index changes.
///
/// # Example
/// ```
/// use showcase_carousel::app::controller::CarouselController;
/// use showcase_carousel::config::options::CarouselOptions;
///
/// let carousel = CarouselController::create(6, CarouselOptions::new()).unwrap();
/// assert_eq!(carousel.next().unwrap(), Some(1));
/// assert_eq!(carousel.previous().unwrap(), Some(0));
/// assert_eq!(carousel.previous().unwrap(), Some(5));
/// ```
#[derive(Clone)]
pub struct CarouselController {
    shared: Arc<Shared>,
}

impl CarouselController {
    /// Creates a controller for a collection of `collection_size` items
    ///
    /// # Returns
    /// The controller, or `InvalidArgument` when the options fail
    /// validation against the collection size (out-of-range initial
    /// index, zero autoplay interval).
    pub fn create(
        collection_size: usize,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        options.validate(collection_size)?;

        let ring = Ring::new(collection_size, options.wrap);
        let phase = if ring.is_empty() {
            CarouselPhase::Empty
        } else {
            CarouselPhase::Active(options.initial_index)
        };

        log::debug!(
            "carousel created: {collection_size} items, phase {phase:?}, wrap {}",
            options.wrap
        );

        Ok(Self {
            shared: Arc::new(Shared {
                core: Mutex::new(Core {
                    phase,
                    ring,
                    autoplay: Autoplay::new(),
                    interval: options.autoplay_interval,
                    reset_phase_on_manual_nav: options.reset_phase_on_manual_nav,
                    ticker: None,
                    generation: 0,
                }),
                observers: Mutex::new(Vec::new()),
                next_observer_id: AtomicU32::new(1),
            }),
        })
    }

    /// Advances the active index by one step
    ///
    /// Wraps past the last index or clamps there, per the construction
    /// options. On an empty collection this is a no-op returning
    /// `Ok(None)`.
    pub fn next(&self) -> Result<Option<usize>, CarouselError> {
        self.navigate(CarouselEvent::Advance)
    }

    /// Moves the active index one step backward
    ///
    /// Symmetric to [`next`](Self::next): wraps to the last index from 0,
    /// or clamps at 0.
    pub fn previous(&self) -> Result<Option<usize>, CarouselError> {
        self.navigate(CarouselEvent::Retreat)
    }

    /// Sets the active index directly
    ///
    /// # Returns
    /// `IndexOutOfRange` when `index` is invalid for a non-empty
    /// collection; the active index is left untouched in that case.
    pub fn go_to(&self, index: usize) -> Result<Option<usize>, CarouselError> {
        self.navigate(CarouselEvent::JumpTo(index))
    }

    /// Enables or disables autoplay
    ///
    /// Enabling is idempotent: there is never more than one live timer.
    /// Disabling cancels the pending tick immediately; the next enable
    /// starts the interval over from zero. Enabling a controller that was
    /// built without an autoplay interval is an error.
    pub fn set_autoplay(&self, enabled: bool) -> Result<(), CarouselError> {
        let mut core = self.lock_core()?;
        core.ensure_live()?;

        if enabled && core.interval.is_none() {
            return Err(CarouselError::InvalidArgument(
                "autoplay interval not configured".to_string(),
            ));
        }

        let command = if enabled {
            core.autoplay.enable()
        } else {
            core.autoplay.disable()
        };
        log::debug!("autoplay {}abled -> {:?}", if enabled { "en" } else { "dis" }, command);
        self.run_timer_command(&mut core, command);
        Ok(())
    }

    /// Halts autoplay ticking for the duration of a user interaction
    ///
    /// Keeps the autoplay enabled flag. Idempotent.
    pub fn suspend(&self) -> Result<(), CarouselError> {
        let mut core = self.lock_core()?;
        core.ensure_live()?;
        let command = core.autoplay.suspend();
        self.run_timer_command(&mut core, command);
        Ok(())
    }

    /// Ends a suspension, restarting a fresh full interval if autoplay is
    /// enabled. Idempotent.
    pub fn resume(&self) -> Result<(), CarouselError> {
        let mut core = self.lock_core()?;
        core.ensure_live()?;
        let command = core.autoplay.resume();
        self.run_timer_command(&mut core, command);
        Ok(())
    }

    /// Returns the active index, or `Ok(None)` for an empty collection
    pub fn current_index(&self) -> Result<Option<usize>, CarouselError> {
        let core = self.lock_core()?;
        core.ensure_live()?;
        Ok(core.phase.active_index())
    }

    /// Returns the size of the governed collection
    pub fn item_count(&self) -> Result<usize, CarouselError> {
        let core = self.lock_core()?;
        core.ensure_live()?;
        Ok(core.ring.len())
    }

    /// Returns true while a user interaction holds the carousel
    pub fn is_suspended(&self) -> Result<bool, CarouselError> {
        let core = self.lock_core()?;
        core.ensure_live()?;
        Ok(core.autoplay.is_suspended())
    }

    /// Returns the current autoplay status
    pub fn autoplay_status(&self) -> Result<AutoplayStatus, CarouselError> {
        let core = self.lock_core()?;
        core.ensure_live()?;
        Ok(core.autoplay.status())
    }

    /// Registers an observer for index changes
    ///
    /// Observers are invoked synchronously after every operation that
    /// actually changes the active index.
    ///
    /// # Returns
    /// An id usable with [`unsubscribe`](Self::unsubscribe)
    pub fn subscribe(&self, observer: ChangeObserver) -> Result<u32, CarouselError> {
        {
            let core = self.lock_core()?;
            core.ensure_live()?;
        }

        let id = self.shared.next_observer_id.fetch_add(1, Ordering::Relaxed);
        let mut observers = self
            .shared
            .observers
            .lock()
            .map_err(|_| CarouselError::ControllerDisposed)?;
        observers.push((id, observer));
        Ok(id)
    }

    /// Removes a previously registered observer
    pub fn unsubscribe(&self, id: u32) -> Result<(), CarouselError> {
        {
            let core = self.lock_core()?;
            core.ensure_live()?;
        }

        let mut observers = self
            .shared
            .observers
            .lock()
            .map_err(|_| CarouselError::ControllerDisposed)?;
        let before = observers.len();
        observers.retain(|(entry_id, _)| *entry_id != id);
        if observers.len() == before {
            return Err(CarouselError::InvalidArgument(format!(
                "unknown observer id {id}"
            )));
        }
        Ok(())
    }

    /// Destroys the controller
    ///
    /// Cancels the ticker, drops all observers, and moves to the terminal
    /// disposed phase. Idempotent; every other method fails with
    /// `ControllerDisposed` afterwards. A tick that was already queued
    /// when destroy ran is guaranteed not to act.
    pub fn destroy(&self) -> Result<(), CarouselError> {
        {
            let mut core = self.lock_core()?;
            if matches!(core.phase, CarouselPhase::Disposed) {
                return Ok(());
            }
            core.cancel_ticker();
            core.autoplay.disable();
            core.phase = CarouselPhase::Disposed;
        }

        if let Ok(mut observers) = self.shared.observers.lock() {
            observers.clear();
        }

        log::debug!("carousel destroyed");
        Ok(())
    }

    fn lock_core(&self) -> Result<std::sync::MutexGuard<'_, Core>, CarouselError> {
        // A poisoned lock means a peer panicked mid-operation; treat the
        // controller as gone rather than propagating the panic.
        self.shared
            .core
            .lock()
            .map_err(|_| CarouselError::ControllerDisposed)
    }

    /// Shared path for next/previous/go_to
    fn navigate(&self, event: CarouselEvent) -> Result<Option<usize>, CarouselError> {
        let (result, change) = {
            let mut core = self.lock_core()?;
            let before = core.phase.active_index();
            core.phase = state::apply(core.phase, event, &core.ring)?;
            let after = core.phase.active_index();

            let change = match (before, after) {
                (Some(previous), Some(current)) if previous != current => Some(IndexChange {
                    previous,
                    current,
                    cause: ChangeCause::Manual,
                }),
                _ => None,
            };

            if change.is_some() {
                let command = core.autoplay.manual_nav(core.reset_phase_on_manual_nav);
                self.run_timer_command(&mut core, command);
            }

            (after, change)
        };

        if let Some(change) = change {
            log::trace!("navigate: {} -> {}", change.previous, change.current);
            self.shared.notify(&change);
        }
        Ok(result)
    }

    /// Executes a timer command while the core lock is held
    ///
    /// Start and Restart both go through the cancel-then-spawn path, which
    /// is what upholds the at-most-one-live-ticker invariant.
    fn run_timer_command(&self, core: &mut Core, command: TimerCommand) {
        match command {
            TimerCommand::Noop => {}
            TimerCommand::Cancel => core.cancel_ticker(),
            TimerCommand::Start | TimerCommand::Restart => self.start_ticker(core),
        }
    }

    fn start_ticker(&self, core: &mut Core) {
        core.cancel_ticker();
        let Some(interval) = core.interval else {
            return;
        };

        let generation = core.generation;
        let weak: Weak<Shared> = Arc::downgrade(&self.shared);
        core.ticker = Some(Ticker::spawn(interval, move || match weak.upgrade() {
            Some(shared) => shared.autoplay_tick(generation),
            None => false,
        }));
    }
}
