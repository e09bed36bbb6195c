use std::fmt;

/// One tool invocation as recorded in the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Joined argument vector, for display
    pub command: String,
    /// Captured standard output
    pub output: String,
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "COMMAND:\n{}\nOUTPUT:\n{}", self.command, self.output)
    }
}

type Observer = Box<dyn FnMut(&TranscriptEntry)>;

/// Append-only log of every tool invocation in this session.
///
/// Entries are only ever appended, never rewritten, so an observer always
/// sees a consistent snapshot after each append.
#[derive(Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    observer: Option<Observer>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback fired after every append. Replaces any previous
    /// observer.
    pub fn set_observer(&mut self, observer: impl FnMut(&TranscriptEntry) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn append(&mut self, command: String, output: String) {
        let entry = TranscriptEntry { command, output };
        if let Some(observer) = &mut self.observer {
            observer(&entry);
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
