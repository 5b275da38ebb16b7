//! Bootstrap pipeline stages.

use std::fmt;

/// Where a bootstrap run has got to.
///
/// Transitions are strictly forward: `Start → Validated → DirectoryRenamed →
/// ContentsRewritten → HistoryReset → Done`. A failure leaves the run at the
/// last completed stage; nothing is undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    Validated,
    DirectoryRenamed,
    ContentsRewritten,
    HistoryReset,
    Done,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Validated => "validated",
            Self::DirectoryRenamed => "directory-renamed",
            Self::ContentsRewritten => "contents-rewritten",
            Self::HistoryReset => "history-reset",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
