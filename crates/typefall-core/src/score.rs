//! WPM arithmetic and the persisted high score.

use fnv::FnvHashMap;

/// Durable scalar store collaborator (browser `localStorage` on the web).
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for host runs and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.set(key, value);
        store
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

pub struct HighScore<S: ScoreStore> {
    store: S,
    key: String,
    best: u32,
}

impl<S: ScoreStore> HighScore<S> {
    /// Read the stored best. Missing or unreadable values count as 0.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let best = match store.get(&key) {
            None => 0,
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|e| {
                log::warn!("[score] ignoring stored high score {:?}: {}", raw, e);
                0
            }),
        };
        Self { store, key, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Offer a finished run's WPM. Returns true, and persists, only when it
    /// beats the current best.
    pub fn record(&mut self, wpm: u32) -> bool {
        if wpm <= self.best {
            return false;
        }
        self.best = wpm;
        self.store.set(&self.key, &wpm.to_string());
        log::info!("[score] new high score {} wpm", wpm);
        true
    }
}

#[inline]
pub fn word_count(phrase: &str) -> usize {
    phrase.split_whitespace().count()
}

/// Running estimate: the typed fraction of the phrase's words over typed time.
/// Non-finite results (no time elapsed yet) read as 0.
pub fn live_wpm(words: usize, cursor: usize, phrase_len: usize, elapsed_ms: f64) -> f64 {
    let typed_words = words as f64 * cursor as f64 / phrase_len as f64;
    let wpm = typed_words / elapsed_ms * 60_000.0;
    if wpm.is_finite() {
        wpm
    } else {
        0.0
    }
}

/// Completed-run WPM, rounded to the nearest integer.
pub fn final_wpm(words: usize, elapsed_ms: f64) -> u32 {
    let wpm = words as f64 / elapsed_ms * 60_000.0;
    if wpm.is_finite() {
        wpm.round().max(0.0) as u32
    } else {
        0
    }
}
