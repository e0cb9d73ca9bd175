//! Rotary navigation: maps encoder steps to selection changes.

use orbit_types::input::{InputEvent, Rotation};

/// What a carousel should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Commit this selection index.
    Select(usize),
    /// Consume the event without changing anything (already at the edge).
    Absorb,
    /// Not a navigation event; hand it to the default handler.
    PassThrough,
}

/// Navigation for platforms with a rotary encoder.
///
/// Selection stops at both ends of the row; it does not wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotaryNavigation;

impl RotaryNavigation {
    pub fn new() -> Self {
        Self
    }

    /// Decide how `event` moves `selection` within `len` items.
    pub fn navigate(&self, event: &InputEvent, selection: usize, len: usize) -> Navigation {
        let decision = match event {
            InputEvent::Rotary(Rotation::Right) if len > 0 && selection < len - 1 => {
                Navigation::Select(selection + 1)
            },
            InputEvent::Rotary(Rotation::Left) if selection > 0 && len > 0 => {
                Navigation::Select(selection - 1)
            },
            InputEvent::Rotary(_) => Navigation::Absorb,
            _ => Navigation::PassThrough,
        };
        log::trace!("{event:?} at {selection}/{len} -> {decision:?}");
        decision
    }
}
