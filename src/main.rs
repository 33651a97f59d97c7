//! Demo: drive a six-card showcase through every input path

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use showcase_carousel::input::{
    KeyboardBinding, NavKey, PointerBinding, PointerEvent, ScrollBinding,
};
use showcase_carousel::ui::{self, RenderStrategy};
use showcase_carousel::{CarouselController, CarouselError, CarouselOptions, IndexChange};

const CARDS: [&str; 6] = [
    "About",
    "Skills",
    "Projects",
    "Experience",
    "Open Source",
    "Contact",
];

fn main() -> Result<(), CarouselError> {
    env_logger::init();

    let options = CarouselOptions::new().with_autoplay_interval(Duration::from_millis(400));
    let carousel = CarouselController::create(CARDS.len(), options)?;

    carousel.subscribe(Arc::new(|change: &IndexChange| {
        println!(
            "  [{:?}] {} -> {}",
            change.cause, CARDS[change.previous], CARDS[change.current]
        );
    }))?;

    println!("Keyboard navigation:");
    let keys = KeyboardBinding::new(carousel.clone());
    keys.handle(NavKey::Right)?;
    keys.handle(NavKey::Right)?;
    keys.handle(NavKey::Left)?;

    println!("Scroll navigation:");
    let scroll = ScrollBinding::new(carousel.clone());
    scroll.handle_progress(0.7)?;

    print_deck(&carousel)?;

    println!("Autoplay for a second:");
    carousel.set_autoplay(true)?;
    thread::sleep(Duration::from_millis(1000));

    println!("Hover pauses autoplay:");
    let pointer = PointerBinding::new(carousel.clone());
    pointer.handle(PointerEvent::Enter)?;
    thread::sleep(Duration::from_millis(600));
    pointer.handle(PointerEvent::Leave)?;
    thread::sleep(Duration::from_millis(500));

    print_deck(&carousel)?;

    carousel.destroy()?;
    println!("Destroyed.");
    Ok(())
}

fn print_deck(carousel: &CarouselController) -> Result<(), CarouselError> {
    let active = carousel.current_index()?;
    println!("Deck view:");
    for frame in ui::view_state::frames(RenderStrategy::StackedDeck, CARDS.len(), active) {
        println!("  {:12} {:?}", CARDS[frame.index], frame.visual);
    }
    if let Some(state) = ui::view_state::indicator(CARDS.len(), active) {
        println!("  indicator: {} ({:.0}%)", state.label, state.progress * 100.0);
    }
    Ok(())
}
