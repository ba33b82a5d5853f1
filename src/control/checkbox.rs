//! Two-state toggle.
//!
//! Both looks are built on `update()`: the plain midground doubles as the
//! unchecked look, and a copy with the check mark stroked on top is kept
//! for the checked one. Toggling only flips which set `render` blits.

use crate::layer::{Border, LayerSet, VisualState};
use crate::types::{Rect, Rgba, Size};

/// CheckBox behavior.
pub struct CheckBox {
    value: bool,
    marks: [Border; 4],
    checked: LayerSet,
}

impl CheckBox {
    pub fn new(value: bool) -> Self {
        let mark = Border::new(Rgba::BLACK, 0);
        Self {
            value,
            marks: [mark; 4],
            checked: LayerSet::default(),
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    pub fn toggle(&mut self) {
        self.value = !self.value;
    }

    /// Check mark drawn for `state`. A width of 0 draws a solid square.
    pub fn mark(&self, state: VisualState) -> Border {
        self.marks[state.slot()]
    }

    /// Takes effect on the next `update()`.
    pub fn set_mark(&mut self, state: VisualState, mark: Border) {
        self.marks[state.slot()] = mark;
    }

    /// Box the mark is drawn in: the middle half of the control.
    pub fn mark_rect(size: Size) -> Rect {
        Rect::new(size.w / 4, size.h / 4, size.w / 2, size.h / 2)
    }

    pub(crate) fn rebuild_checked(&mut self, midground: &LayerSet, size: Size) {
        let rect = Self::mark_rect(size);
        let marks = self.marks;
        self.checked = midground.clone();
        self.checked
            .for_each_mut(|state, surface| marks[state.slot()].stroke(surface, rect));
    }

    /// Midground set matching the current value.
    pub(crate) fn displayed<'a>(&'a self, midground: &'a LayerSet) -> &'a LayerSet {
        if self.value { &self.checked } else { midground }
    }
}
