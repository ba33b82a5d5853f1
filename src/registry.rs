//! Screen Registry - names and the current/previous screen
//!
//! Maps screen names to ids and tracks which screen the application shows.
//! `current` and `previous` are signals, so effects can follow screen
//! switches without polling.

use std::collections::HashMap;

use spark_signals::{signal, Signal};
use tracing::debug;

use crate::error::{Entity, Error, Result};
use crate::screen::ScreenId;

pub struct ScreenRegistry {
    by_name: HashMap<String, ScreenId>,
    current: Signal<Option<ScreenId>>,
    previous: Signal<Option<ScreenId>>,
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            current: signal(None),
            previous: signal(None),
        }
    }

    pub(crate) fn register(&mut self, name: &str, id: ScreenId) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(Error::duplicate(Entity::Screen, name));
        }
        self.by_name.insert(name.to_string(), id);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<ScreenId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::not_found(Entity::Screen, name))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn current(&self) -> Option<ScreenId> {
        self.current.get()
    }

    pub fn previous(&self) -> Option<ScreenId> {
        self.previous.get()
    }

    pub fn current_signal(&self) -> Signal<Option<ScreenId>> {
        self.current.clone()
    }

    pub fn previous_signal(&self) -> Signal<Option<ScreenId>> {
        self.previous.clone()
    }

    /// Make `id` current. The old current screen becomes previous unless it
    /// is `id` itself.
    pub(crate) fn set_current(&self, id: ScreenId) {
        let old = self.current.get();
        if old == Some(id) {
            return;
        }
        self.previous.set(old);
        self.current.set(Some(id));
        debug!(from = ?old, to = ?id, "screen switched");
    }

    /// Swap current and previous. False when there is no previous screen.
    pub fn go_back(&self) -> bool {
        let Some(prev) = self.previous.get() else {
            return false;
        };
        self.set_current(prev);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> ScreenRegistry {
        let mut reg = ScreenRegistry::new();
        reg.register("main", ScreenId(0)).unwrap();
        reg.register("settings", ScreenId(1)).unwrap();
        reg
    }

    #[test]
    fn test_register_and_lookup() {
        let mut reg = setup();
        assert_eq!(reg.lookup("settings"), Ok(ScreenId(1)));
        assert_eq!(
            reg.lookup("about"),
            Err(Error::not_found(Entity::Screen, "about"))
        );
        assert_eq!(
            reg.register("main", ScreenId(2)),
            Err(Error::duplicate(Entity::Screen, "main"))
        );
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_current_and_previous() {
        let reg = setup();
        assert_eq!(reg.current(), None);
        assert!(!reg.go_back());

        reg.set_current(ScreenId(0));
        reg.set_current(ScreenId(1));
        assert_eq!(reg.current(), Some(ScreenId(1)));
        assert_eq!(reg.previous(), Some(ScreenId(0)));

        // re-selecting the current screen keeps history
        reg.set_current(ScreenId(1));
        assert_eq!(reg.previous(), Some(ScreenId(0)));

        assert!(reg.go_back());
        assert_eq!(reg.current(), Some(ScreenId(0)));
        assert_eq!(reg.previous(), Some(ScreenId(1)));
    }

    #[test]
    fn test_current_signal_tracks_switches() {
        let reg = setup();
        let current = reg.current_signal();
        reg.set_current(ScreenId(1));
        assert_eq!(current.get(), Some(ScreenId(1)));
    }
}
