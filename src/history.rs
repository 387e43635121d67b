use heapless::Deque;

use crate::config::HISTORY_CAPACITY;
use crate::sync::TouchRecord;

/// Append-only record of everything drawn on the canvas, replayed to a peer
/// that joins late.
pub trait HistoryLog {
    fn append(&mut self, record: TouchRecord);
    fn clear(&mut self);
}

/// Fixed-capacity history. When full, the oldest record is evicted so the
/// most recent strokes always survive.
pub struct DrawingHistory<const N: usize = HISTORY_CAPACITY> {
    records: Deque<TouchRecord, N>,
    overflow: bool,
}

impl<const N: usize> Default for DrawingHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DrawingHistory<N> {
    pub const fn new() -> Self {
        Self {
            records: Deque::new(),
            overflow: false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True once a record has been evicted since the last clear.
    pub fn overflowed(&self) -> bool {
        self.overflow
    }

    pub fn iter(&self) -> impl Iterator<Item = &TouchRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TouchRecord> {
        self.records.back()
    }
}

impl<const N: usize> HistoryLog for DrawingHistory<N> {
    fn append(&mut self, record: TouchRecord) {
        if let Err(record) = self.records.push_back(record) {
            self.overflow = true;
            let _ = self.records.pop_front();
            let _ = self.records.push_back(record);
        }
    }

    fn clear(&mut self) {
        self.records.clear();
        self.overflow = false;
    }
}
