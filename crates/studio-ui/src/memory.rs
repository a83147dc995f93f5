use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Per-window UI state that survives the per-frame widget rebuild.
///
/// Widgets are rebuilt from application state every frame, so transient UI
/// facts that the application does not model (which popover is open) are
/// kept here under a caller-chosen key. Cloning shares the same store.
///
/// At most one popover is open at a time, matching native pickers and
/// dropdowns: opening one closes the others.
#[derive(Debug, Clone, Default)]
pub struct Memory(Rc<RefCell<MemoryInner>>);

#[derive(Debug, Default)]
struct MemoryInner {
    open: HashSet<String>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.0.borrow().open.contains(key)
    }

    /// Opens the popover under `key`, closing any other.
    pub fn open(&self, key: &str) {
        let mut inner = self.0.borrow_mut();
        inner.open.clear();
        inner.open.insert(key.to_string());
        log::trace!("popover `{key}` opened");
    }

    pub fn close(&self, key: &str) {
        if self.0.borrow_mut().open.remove(key) {
            log::trace!("popover `{key}` closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_popover_closes_the_other() {
        let mem = Memory::new();
        mem.open("color");
        mem.open("direction");
        assert!(!mem.is_open("color"));
        assert!(mem.is_open("direction"));
    }

    #[test]
    fn closing_an_unopened_key_keeps_the_open_one() {
        let mem = Memory::new();
        mem.open("a");
        mem.close("b");
        assert!(mem.is_open("a"));
        mem.close("a");
        assert!(!mem.is_open("a"));
    }

    #[test]
    fn clones_share_state() {
        let mem = Memory::new();
        let other = mem.clone();
        other.open("stop-0");
        assert!(mem.is_open("stop-0"));
        mem.close("stop-0");
        assert!(!other.is_open("stop-0"));
    }
}
