use std::collections::HashMap;

/// Next suffix to try per base name, for the lifetime of one run.
///
/// Values only grow. The ledger saves re-probing names that this run already
/// handed out; the filesystem is still checked at the resumed suffix.
#[derive(Debug, Default)]
pub struct NameLedger {
    next: HashMap<String, u32>,
}

impl NameLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suffix to start searching from (0 for unseen base names).
    pub fn start_for(&self, base_name: &str) -> u32 {
        self.next.get(base_name).copied().unwrap_or(0)
    }

    /// Records that `suffix` was handed out for `base_name`.
    pub fn record_issued(&mut self, base_name: &str, suffix: u32) {
        let next = suffix.saturating_add(1);
        let entry = self.next.entry(base_name.to_string()).or_insert(0);
        if next > *entry {
            *entry = next;
        }
    }

    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }
}
