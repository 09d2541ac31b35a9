use crate::shared::core::ids::IdGenerator;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Hands out the given ids in order, then panics; keeps id-collision tests deterministic.
pub struct ScriptedIdGenerator {
    ids: Mutex<VecDeque<String>>,
}

impl ScriptedIdGenerator {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
        }
    }
}

impl IdGenerator for ScriptedIdGenerator {
    fn next_id(&self) -> String {
        self.ids
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted ids exhausted")
    }
}
