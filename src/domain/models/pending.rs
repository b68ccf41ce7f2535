#[cfg(test)]
#[path = "pending_test.rs"]
mod tests;

use std::collections::HashMap;

use strum::EnumIter;
use strum::EnumString;
use strum::EnumVariantNames;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RequestKind {
    Upload,
    Ask,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumString, EnumVariantNames, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum BusyMode {
    /// One flag for every request. The first request to resolve clears it,
    /// even if another one is still in flight.
    Shared,
    /// Outstanding requests are counted per kind.
    PerRequest,
}

/// Tracks which requests are in flight and derives the busy flag from them.
pub struct PendingRequests {
    mode: BusyMode,
    shared: bool,
    counts: HashMap<RequestKind, usize>,
}

impl PendingRequests {
    pub fn new(mode: BusyMode) -> PendingRequests {
        return PendingRequests {
            mode,
            shared: false,
            counts: HashMap::new(),
        };
    }

    pub fn mode(&self) -> BusyMode {
        return self.mode;
    }

    pub fn begin(&mut self, kind: RequestKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
        self.shared = true;
    }

    pub fn finish(&mut self, kind: RequestKind) {
        let count = self.counts.entry(kind).or_insert(0);
        *count = count.saturating_sub(1);
        self.shared = false;
    }

    pub fn is_busy(&self) -> bool {
        if self.mode == BusyMode::Shared {
            return self.shared;
        }

        return self.counts.values().any(|count| return *count > 0);
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        if self.mode == BusyMode::Shared {
            return self.shared;
        }

        return self.counts.get(&kind).copied().unwrap_or(0) > 0;
    }

    /// Whether the send control accepts a new question.
    pub fn can_ask(&self) -> bool {
        return !self.is_pending(RequestKind::Ask);
    }
}
