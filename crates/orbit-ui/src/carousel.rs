//! Carousel widget: a [`Body`] plus optional rotary navigation.

use orbit_types::config::CarouselConfig;
use orbit_types::input::InputEvent;
use orbit_types::window::{Window, WindowId};

use crate::body::Body;
use crate::navigation::{Navigation, RotaryNavigation};

/// Outcome of [`Carousel::on_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The carousel consumed the event.
    Handled,
    /// The event belongs to the enclosing widget's default handling.
    Forwarded,
}

/// A horizontal row of items with one selected item shown expanded.
///
/// Navigation exists only when the platform has directional hardware input;
/// without it every event is forwarded.
#[derive(Debug)]
pub struct Carousel<W> {
    body: Body<W>,
    navigation: Option<RotaryNavigation>,
}

impl<W: Window> Carousel<W> {
    /// Wrap `body`, enabling rotary navigation when `hardware_keys` is set.
    pub fn new(body: Body<W>, hardware_keys: bool) -> Self {
        Self {
            body,
            navigation: hardware_keys.then(RotaryNavigation::new),
        }
    }

    /// Build an empty carousel from `config`.
    pub fn from_config(id: WindowId, config: &CarouselConfig) -> Self {
        Self::new(Body::from_config(id, config), config.hardware_keys)
    }

    pub fn body(&self) -> &Body<W> {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body<W> {
        &mut self.body
    }

    pub fn has_navigation(&self) -> bool {
        self.navigation.is_some()
    }

    /// Currently selected index, `None` when empty.
    pub fn selected(&self) -> Option<usize> {
        self.body.selected()
    }

    /// Commit a selection and re-layout the body.
    pub fn select(&mut self, index: usize) {
        self.body.select(index);
    }

    /// Lay out the body with the current selection and geometry.
    pub fn update(&mut self) {
        self.body.update();
    }

    /// Handle one input event.
    pub fn on_event(&mut self, event: &InputEvent) -> EventResult {
        let Some(nav) = self.navigation else {
            return EventResult::Forwarded;
        };
        match nav.navigate(event, self.body.selection(), self.body.len()) {
            Navigation::Select(index) => {
                self.select(index);
                EventResult::Handled
            },
            Navigation::Absorb => EventResult::Handled,
            Navigation::PassThrough => EventResult::Forwarded,
        }
    }
}
