use std::collections::VecDeque;
use std::sync::Mutex;

use once_cell::sync::Lazy;

const CAPACITY: usize = 256;

/// Bounded in-memory diagnostics log. The oldest entries are dropped once it is full.
pub struct Log {
    entries: VecDeque<String>,
}

impl Log {
    fn new() -> Log {
        Log {
            entries: VecDeque::with_capacity(CAPACITY),
        }
    }

    pub fn log(&mut self, msg: String) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(msg);
    }

    pub fn last_n(&self, n: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static LOG: Lazy<Mutex<Log>> = Lazy::new(|| Mutex::new(Log::new()));

/// Most recent `n` diagnostics, oldest first.
pub fn recent(n: usize) -> Vec<String> {
    LOG.lock().map(|log| log.last_n(n)).unwrap_or_default()
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        let msg: String = format!($($arg)*);
        if let Ok(mut log) = $crate::log::LOG.lock() {
            log.log(msg);
        }
    }}
}
