//! Outside-click detection for a rendered region.

use ratatui::layout::{Position, Rect};

/// Tracks the regions an owner occupies and whether presses outside them
/// should be acted on.
///
/// The root may span several disjoint rectangles; a press is inside when any
/// of them contains it. The guard is armed only while its owner is open.
/// Presses are ignored when disarmed or when nothing has been rendered yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutsideClick {
    root: Vec<Rect>,
    armed: bool,
}

impl OutsideClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Record the regions most recently rendered by the owner. An empty
    /// slice means the owner is not on screen.
    pub fn set_root(&mut self, root: &[Rect]) {
        self.root.clear();
        self.root
            .extend(root.iter().copied().filter(|rect| !rect.is_empty()));
    }

    /// Whether a press at `point` qualifies as an outside interaction.
    pub fn is_outside(&self, point: Position) -> bool {
        self.armed
            && !self.root.is_empty()
            && !self.root.iter().any(|rect| rect.contains(point))
    }
}
