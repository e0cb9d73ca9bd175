//! Carousel item: an expanded and a collapsed face for one entry.

use orbit_types::window::{Window, WindowId};
use serde::Serialize;

/// Which face of an item is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveFace {
    /// Expanded form, shown by the selected item.
    Front,
    /// Collapsed form, shown by every other item.
    Back,
}

impl ActiveFace {
    /// Face an item at `index` shows when `selection` is selected.
    pub fn for_index(index: usize, selection: usize) -> Self {
        if index == selection {
            Self::Front
        } else {
            Self::Back
        }
    }

    /// The opposite face.
    pub fn other(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// One carousel entry. Both faces live as long as the item; only their
/// attachment changes.
#[derive(Debug, Clone)]
pub struct Item<W> {
    front: W,
    back: W,
}

impl<W: Window> Item<W> {
    pub fn new(front: W, back: W) -> Self {
        Self { front, back }
    }

    pub fn front(&self) -> &W {
        &self.front
    }

    pub fn back(&self) -> &W {
        &self.back
    }

    pub fn face(&self, face: ActiveFace) -> &W {
        match face {
            ActiveFace::Front => &self.front,
            ActiveFace::Back => &self.back,
        }
    }

    pub fn face_mut(&mut self, face: ActiveFace) -> &mut W {
        match face {
            ActiveFace::Front => &mut self.front,
            ActiveFace::Back => &mut self.back,
        }
    }

    /// Detach the other face and attach `face` to `parent`, returning it
    /// for placement.
    pub fn show(&mut self, face: ActiveFace, parent: WindowId) -> &mut W {
        self.face_mut(face.other()).detach();
        let window = self.face_mut(face);
        window.attach(parent);
        window
    }

    /// Detach both faces.
    pub fn hide(&mut self) {
        self.front.detach();
        self.back.detach();
    }

    /// The attached face, if exactly one is attached.
    pub fn active_face(&self) -> Option<ActiveFace> {
        match (self.front.is_attached(), self.back.is_attached()) {
            (true, false) => Some(ActiveFace::Front),
            (false, true) => Some(ActiveFace::Back),
            _ => None,
        }
    }

    /// Consume the item, returning `(front, back)`.
    pub fn into_faces(self) -> (W, W) {
        (self.front, self.back)
    }
}
