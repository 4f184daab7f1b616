use crate::Count;

/// Line-level bookkeeping for one pass over (part of) a corpus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Census {
    pub files: Count,
    pub lines: Count,
    pub records: Count,
    pub rejected: Count,
    pub unselected: Count,
    pub fallbacks: Count,
}

impl Census {
    pub fn absorb(&mut self, other: &Self) {
        self.files += other.files;
        self.lines += other.lines;
        self.records += other.records;
        self.rejected += other.rejected;
        self.unselected += other.unselected;
        self.fallbacks += other.fallbacks;
    }
}

impl std::fmt::Display for Census {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<14}{:<16}{:<18}{:<16}{:<18}{:<16}",
            format!("files {}", self.files),
            format!("lines {}", self.lines),
            format!("records {}", self.records),
            format!("rejected {}", self.rejected),
            format!("unselected {}", self.unselected),
            format!("fallbacks {}", self.fallbacks),
        )
    }
}
