use serde::{Serialize, Deserialize};

use crate::question::{Level, Question};

/// The one persisted slot. Holds the JSON-encoded result history.
pub const STORAGE_KEY: &str = "gdg-dsa-lucky-draw-results";

/// Records one completed spin. Immutable after creation. The level is kept
/// as its raw tag so entries for retired levels still load and display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub level: String,
    pub question: Question,
    pub timestamp: f64,
}

/// Persistence capability the controller depends on. The frontend backs it
/// with `localStorage`; tests substitute an in-memory stub.
pub trait ResultStore {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

/// The selection controller's state: active level, displayed result, and the
/// result history. One explicit object, handed to the rendering layer.
///
/// Level/result flow: `NoLevel -> LevelChosen -> Spinning -> ResultShown`,
/// back to `LevelChosen` via `reset`, and to `NoLevel` from anywhere.
/// Re-opening a history entry jumps straight to `ResultShown`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawState {
    pub level: Option<Level>,
    pub result: Option<Question>,
    pub history: Vec<SpinResult>,
    /// Set only by a freshly completed spin; drives the one-time celebration.
    pub new_result: bool,
    pub show_history: bool,
}

impl DrawState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startup read of the persisted history. Fails soft: a missing or
    /// unparsable value behaves as an empty history and is only logged.
    pub fn load_history(&mut self, store: &dyn ResultStore) {
        self.history = match store.load() {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(history) => history,
                Err(e) => {
                    log::warn!("Failed to parse stored results, starting fresh: {e}");
                    Vec::new()
                }
            },
        };
    }

    /// Sets the active level. An explicit result (a re-opened history entry)
    /// is displayed without involving the spin engine; otherwise any shown
    /// result is cleared so the wheel can be spun.
    pub fn select_level(&mut self, level: Level, explicit_result: Option<Question>) {
        self.result = explicit_result;
        self.new_result = false;
        self.level = Some(level);
        self.show_history = false;
    }

    /// Records a completed spin: prepends to the history, persists the full
    /// updated list, and shows the question as a newly produced result.
    pub fn record_spin(
        &mut self,
        level: Level,
        question: Question,
        timestamp: f64,
        store: &dyn ResultStore,
    ) {
        self.history.insert(
            0,
            SpinResult {
                level: level.key().to_string(),
                question: question.clone(),
                timestamp,
            },
        );
        self.persist(store);
        self.new_result = true;
        self.result = Some(question);
    }

    /// Back to the level list. History is untouched.
    pub fn reset(&mut self) {
        self.level = None;
        self.result = None;
        self.new_result = false;
    }

    /// Empties the history in memory and erases the persisted value, then
    /// returns to the level list.
    pub fn clear_history(&mut self, store: &dyn ResultStore) {
        store.clear();
        self.history.clear();
        self.result = None;
        self.level = None;
        self.new_result = false;
        self.show_history = false;
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    fn persist(&self, store: &dyn ResultStore) {
        match serde_json::to_string(&self.history) {
            Ok(raw) => store.save(&raw),
            Err(e) => log::error!("Failed to serialize results: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        slot: RefCell<Option<String>>,
    }

    impl ResultStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.slot.borrow().clone()
        }
        fn save(&self, raw: &str) {
            *self.slot.borrow_mut() = Some(raw.to_string());
        }
        fn clear(&self) {
            *self.slot.borrow_mut() = None;
        }
    }

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            title: format!("Question {id}"),
            link: format!("https://example.com/{id}"),
        }
    }

    #[test]
    fn test_record_spin_prepends_and_persists() {
        let store = MemoryStore::default();
        let mut state = DrawState::new();

        state.record_spin(Level::Basic, question("1"), 100.0, &store);
        state.record_spin(Level::Medium, question("2"), 200.0, &store);
        state.record_spin(Level::Pro, question("3"), 300.0, &store);

        assert_eq!(state.history.len(), 3);
        assert_eq!(state.history[0].question.id, "3");
        assert_eq!(state.history[0].timestamp, 300.0);
        assert_eq!(state.history[2].question.id, "1");
        assert_eq!(state.history[2].level, "basic");
        assert!(state.new_result);
        assert!(store.load().is_some());
    }

    #[test]
    fn test_history_round_trips_through_store() {
        let store = MemoryStore::default();
        let mut state = DrawState::new();
        state.record_spin(Level::Advanced, question("7"), 1234.5, &store);
        state.record_spin(Level::Basic, question("8"), 2345.6, &store);

        let mut reloaded = DrawState::new();
        reloaded.load_history(&store);
        assert_eq!(reloaded.history, state.history);
    }

    #[test]
    fn test_load_history_with_missing_value() {
        let store = MemoryStore::default();
        let mut state = DrawState::new();
        state.load_history(&store);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_load_history_with_malformed_value() {
        let store = MemoryStore::default();
        store.save("{not valid json");
        let mut state = DrawState::new();
        state.load_history(&store);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_clear_history_erases_store_and_memory() {
        let store = MemoryStore::default();
        let mut state = DrawState::new();
        state.record_spin(Level::Basic, question("1"), 1.0, &store);
        state.select_level(Level::Basic, None);

        state.clear_history(&store);
        assert!(state.history.is_empty());
        assert!(state.level.is_none());
        assert!(state.result.is_none());
        assert!(store.load().is_none());

        let mut reloaded = DrawState::new();
        reloaded.load_history(&store);
        assert!(reloaded.history.is_empty());
    }

    #[test]
    fn test_select_level_clears_displayed_result() {
        let store = MemoryStore::default();
        let mut state = DrawState::new();
        state.record_spin(Level::Basic, question("1"), 1.0, &store);
        assert!(state.result.is_some());

        state.select_level(Level::Medium, None);
        assert_eq!(state.level, Some(Level::Medium));
        assert!(state.result.is_none());
        assert!(!state.new_result);
    }

    #[test]
    fn test_select_level_with_explicit_result_skips_spin() {
        let mut state = DrawState::new();
        state.select_level(Level::Pro, Some(question("9")));
        assert_eq!(state.level, Some(Level::Pro));
        assert_eq!(state.result.as_ref().map(|q| q.id.as_str()), Some("9"));
        assert!(!state.new_result);
    }

    #[test]
    fn test_reset_keeps_history() {
        let store = MemoryStore::default();
        let mut state = DrawState::new();
        state.record_spin(Level::Basic, question("1"), 1.0, &store);

        state.reset();
        assert!(state.level.is_none());
        assert!(state.result.is_none());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_stored_wire_format() {
        let store = MemoryStore::default();
        let mut state = DrawState::new();
        state.record_spin(Level::Basic, question("1"), 42.0, &store);

        let raw = store.load().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value.as_array().unwrap()[0];
        assert_eq!(entry["level"], "basic");
        assert_eq!(entry["question"]["id"], "1");
        assert_eq!(entry["timestamp"], 42.0);
    }
}
