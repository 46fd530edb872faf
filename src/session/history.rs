use std::collections::VecDeque;
use tracing::debug;
use crate::error::{Error, Result};
use crate::report::HistorySnapshot;

/// História analýz, najnovší záznam je prvý. Po prekročení kapacity sa
/// zahodí najstarší.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistorySnapshot>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.entries.push_front(snapshot);
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!(timestamp = %evicted.timestamp, "history entry evicted");
            }
        }
    }

    pub fn get(&self, index: usize) -> Result<&HistorySnapshot> {
        self.entries.get(index).ok_or(Error::HistoryIndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistorySnapshot> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Uloží celú históriu ako JSON pole
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Načíta históriu z JSON; záznamy nad kapacitu sa orežú
    pub fn from_json(json: &str, capacity: usize) -> Result<Self> {
        let entries: Vec<HistorySnapshot> = serde_json::from_str(json)?;
        let mut log = Self::new(capacity);
        log.entries = entries.into_iter().take(log.capacity).collect();
        Ok(log)
    }
}
