//! Page list data and its load phase

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Transient copy of a backend collection.
///
/// A failed reload keeps the previous items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    phase: LoadPhase,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn begin(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Replace the items wholesale
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.phase = LoadPhase::Loaded;
    }

    pub fn failed(&mut self) {
        self.phase = LoadPhase::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_reload_keeps_items() {
        let mut list = ListState::new();
        list.begin();
        assert!(list.is_loading());
        list.loaded(vec![1, 2, 3]);

        list.begin();
        list.failed();
        assert_eq!(list.items(), &[1, 2, 3]);
        assert_eq!(list.phase(), LoadPhase::Failed);
        assert!(!list.is_loading());
    }
}
