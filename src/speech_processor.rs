use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanResult {
    Keyword,
    NoMatch,
}

/// Case-insensitive substring scan of a recognized transcript.
pub struct KeywordScanner {
    keyword: String,
}

impl KeywordScanner {
    pub fn new(keyword: &str) -> Self {
        KeywordScanner {
            keyword: keyword.to_lowercase(),
        }
    }

    pub fn scan(&self, transcript: &str) -> ScanResult {
        if transcript.to_lowercase().contains(&self.keyword) {
            ScanResult::Keyword
        } else {
            ScanResult::NoMatch
        }
    }
}

/* Listening gate in front of the scanner. Transcripts can keep arriving from
whatever recognizer feeds us while the user has turned listening off; those
must not trigger anything. Both transitions are idempotent: start only takes
effect while stopped, stop only while listening. */
pub struct KeywordMonitor {
    scanner: KeywordScanner,
    listening: AtomicBool,
}

impl KeywordMonitor {
    pub fn new(keyword: &str) -> Self {
        KeywordMonitor {
            scanner: KeywordScanner::new(keyword),
            listening: AtomicBool::new(false),
        }
    }

    /// Returns whether the state actually changed.
    pub fn start_listening(&self) -> bool {
        let changed = !self.listening.swap(true, Ordering::SeqCst);
        if changed {
            debug!("[speech] listening started");
        }
        changed
    }

    /// Returns whether the state actually changed.
    pub fn stop_listening(&self) -> bool {
        let changed = self.listening.swap(false, Ordering::SeqCst);
        if changed {
            debug!("[speech] listening stopped");
        }
        changed
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Scans a transcript for the keyword. Always `NoMatch` while not
    /// listening.
    pub fn on_transcript(&self, transcript: &str) -> ScanResult {
        if !self.is_listening() {
            return ScanResult::NoMatch;
        }
        let result = self.scanner.scan(transcript);
        if result == ScanResult::Keyword {
            info!("[speech] keyword detected in transcript");
        }
        result
    }
}
