use std::collections::HashMap;

/// The old-atom-ID to new-atom-ID table built while renumbering atoms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMap {
    table: HashMap<u32, u32>,
}

impl IdMap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashMap::with_capacity(capacity),
        }
    }

    /// Records `old -> new`, returning the previous target for a repeated ID.
    pub fn insert(&mut self, old: u32, new: u32) -> Option<u32> {
        self.table.insert(old, new)
    }

    pub fn get(&self, old: u32) -> Option<u32> {
        self.table.get(&old).copied()
    }

    /// Looks up `old`, yielding 0 when no atom carried that ID.
    pub fn resolve(&self, old: u32) -> u32 {
        self.get(old).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
