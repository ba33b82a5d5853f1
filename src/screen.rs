//! Screen - control membership, focus arbitration and composition
//!
//! A screen lists the controls attached to it (in attach order, which is
//! also render order) and tracks which one holds keyboard focus. Controls
//! themselves live in the [`Ui`](crate::ui::Ui) arena; every operation here
//! borrows that arena.
//!
//! # Focus rules
//!
//! - At most one member holds focus, and only while `focusable && enable`
//! - Focus orders are unique per screen; a conflicting order is replaced
//!   by the smallest unused non-negative integer on attach
//! - Traversal asks the focused control first (`change_focus`); a refusal
//!   keeps focus where it is

use std::collections::HashSet;
use std::time::Duration;

use spark_signals::{signal, Signal};
use tracing::{debug, warn};

use crate::canvas::{Canvas, PointerState};
use crate::control::{Control, ControlId, FocusDirection};
use crate::error::{Entity, Error, Result};
use crate::layer::Border;
use crate::surface::Surface;
use crate::types::{Point, Rgba};

/// Handle to a screen inside its [`Ui`](crate::ui::Ui) context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScreenId(pub(crate) usize);

impl ScreenId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a screen paints before its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenBackground {
    Color(Rgba),
    /// Blitted at the canvas origin.
    Image(Surface),
}

/// A named set of controls sharing one focus.
pub struct Screen {
    id: ScreenId,
    name: String,
    members: Vec<ControlId>,
    focus: Signal<Option<ControlId>>,
    pub background: ScreenBackground,
    /// Outline drawn around the focused control.
    pub focus_border: Border,
}

impl Screen {
    pub(crate) fn new(id: ScreenId, name: impl Into<String>, background: Rgba, focus_border: Border) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
            focus: signal(None),
            background: ScreenBackground::Color(background),
            focus_border,
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attached controls in attach (and render) order.
    pub fn members(&self) -> &[ControlId] {
        &self.members
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.members.contains(&id)
    }

    /// Member with the given name.
    pub fn find(&self, controls: &[Control], name: &str) -> Option<ControlId> {
        self.members
            .iter()
            .copied()
            .find(|id| controls[id.0].name() == name)
    }

    /// Reactive focus target. Reading it directly skips the eligibility
    /// filter [`Screen::focus`] applies.
    pub fn focus_signal(&self) -> Signal<Option<ControlId>> {
        self.focus.clone()
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Attach a detached control. The caller has already checked it is
    /// detached.
    pub(crate) fn add_control(&mut self, controls: &mut [Control], id: ControlId) -> Result<()> {
        let name = controls[id.0].name().to_string();
        if self.find(controls, &name).is_some() {
            warn!(screen = %self.name, control = %name, "attach refused: name taken");
            return Err(Error::duplicate(Entity::Control, name));
        }

        self.members.push(id);
        controls[id.0].attach(self.id);
        self.resolve_focus_order(controls, id);

        debug!(screen = %self.name, control = %name, order = controls[id.0].focus_order(), "control attached");
        Ok(())
    }

    /// Detach a member by name.
    pub(crate) fn remove_control(&mut self, controls: &mut [Control], name: &str) -> Result<ControlId> {
        let Some(pos) = self.members.iter().position(|id| controls[id.0].name() == name) else {
            return Err(Error::not_found(Entity::Control, name));
        };

        let id = self.members.remove(pos);
        controls[id.0].detach();
        if self.focus.get() == Some(id) {
            self.focus.set(None);
        }

        debug!(screen = %self.name, control = %name, "control detached");
        Ok(id)
    }

    /// Give `id` a focus order no other member uses, keeping its current
    /// one when it is free.
    pub(crate) fn resolve_focus_order(&self, controls: &mut [Control], id: ControlId) {
        let used: HashSet<u32> = self
            .members
            .iter()
            .filter(|&&m| m != id)
            .map(|m| controls[m.0].focus_order())
            .collect();

        let wanted = controls[id.0].focus_order();
        if !used.contains(&wanted) {
            return;
        }

        let free = (0..=used.len() as u32)
            .find(|n| !used.contains(n))
            .unwrap_or(used.len() as u32);
        controls[id.0].set_focus_order(free);
        debug!(
            screen = %self.name,
            control = %controls[id.0].name(),
            wanted,
            assigned = free,
            "focus order reassigned"
        );
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Focused member, if it is still allowed to hold focus.
    pub fn focus(&self, controls: &[Control]) -> Option<ControlId> {
        self.focus
            .get()
            .filter(|id| self.contains(*id) && controls[id.0].can_focus())
    }

    /// Focus `target`, or clear focus with `None`. Refuses (returning
    /// false) non-members and controls that are not `focusable && enable`.
    pub fn set_focus(&self, controls: &[Control], target: Option<ControlId>) -> bool {
        match target {
            None => {
                self.focus.set(None);
                true
            }
            Some(id) if self.contains(id) && controls[id.0].can_focus() => {
                if self.focus.get() != Some(id) {
                    debug!(screen = %self.name, control = %controls[id.0].name(), "focus set");
                    self.focus.set(Some(id));
                }
                true
            }
            Some(id) => {
                let member = self.contains(id);
                warn!(screen = %self.name, control = ?id, member, "focus refused");
                false
            }
        }
    }

    /// Candidates in traversal order for `dir`.
    fn candidates(&self, controls: &[Control], dir: FocusDirection) -> Vec<ControlId> {
        let mut list: Vec<ControlId> = self
            .members
            .iter()
            .copied()
            .filter(|id| controls[id.0].can_focus())
            .collect();
        list.sort_by_key(|id| controls[id.0].focus_order());
        if dir == FocusDirection::Prev {
            list.reverse();
        }
        list
    }

    /// Move focus one step in `dir`. Returns the focused member afterwards.
    pub(crate) fn step_focus(&self, controls: &mut [Control], dir: FocusDirection) -> Option<ControlId> {
        let candidates = self.candidates(controls, dir);
        let first = *candidates.first()?;

        let Some(current) = self.focus(controls) else {
            self.set_focus(controls, Some(first));
            return Some(first);
        };

        if !controls[current.0].change_focus(dir) {
            debug!(screen = %self.name, control = %controls[current.0].name(), ?dir, "focus held by control");
            return Some(current);
        }

        let order = controls[current.0].focus_order();
        let next = candidates
            .iter()
            .copied()
            .find(|id| {
                let o = controls[id.0].focus_order();
                match dir {
                    FocusDirection::Next => o > order,
                    FocusDirection::Prev => o < order,
                }
            })
            .unwrap_or(first);

        self.set_focus(controls, Some(next));
        Some(next)
    }

    // -------------------------------------------------------------------------
    // Frame
    // -------------------------------------------------------------------------

    /// Rebuild every member's layers.
    pub(crate) fn update(&self, controls: &mut [Control]) {
        for id in &self.members {
            controls[id.0].update();
        }
    }

    /// Paint the background, then every member in attach order. Returns the
    /// number of controls drawn.
    pub(crate) fn render(
        &self,
        controls: &mut [Control],
        canvas: &mut dyn Canvas,
        pointer: &PointerState,
        dt: Duration,
    ) -> usize {
        match &self.background {
            ScreenBackground::Color(color) => canvas.fill(*color),
            ScreenBackground::Image(image) => canvas.blit(image, Point::new(0, 0)),
        }

        let focused = self.focus(controls);
        let mut drawn = 0;
        for &id in &self.members {
            let border = (focused == Some(id)).then_some(&self.focus_border);
            if controls[id.0].render(canvas, pointer, border, dt) {
                drawn += 1;
            }
        }
        drawn
    }

    /// Topmost member under the pointer (the last one drawn wins).
    pub fn hit_test(&self, controls: &[Control], pointer: &PointerState) -> Option<ControlId> {
        self.members
            .iter()
            .rev()
            .copied()
            .find(|id| controls[id.0].is_hover(pointer) != 0)
    }
}
