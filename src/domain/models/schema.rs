use std::{fmt, sync::Arc};

use crate::domain::services::lifecycle_hook::{BeforeSaveHook, HashComparator};

/// Host-side registry that plugins attach their hooks and instance methods to
#[derive(Clone, Default)]
pub struct Schema {
    before_save: Vec<Arc<dyn BeforeSaveHook>>,
    comparator: Option<Arc<dyn HashComparator>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks run in registration order
    pub fn register_before_save(&mut self, hook: Arc<dyn BeforeSaveHook>) {
        self.before_save.push(hook);
    }

    pub fn before_save_hooks(&self) -> &[Arc<dyn BeforeSaveHook>] {
        &self.before_save
    }

    pub fn set_comparator(&mut self, comparator: Arc<dyn HashComparator>) {
        self.comparator = Some(comparator);
    }

    pub fn comparator(&self) -> Option<&Arc<dyn HashComparator>> {
        self.comparator.as_ref()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("before_save", &self.before_save.len())
            .field("comparator", &self.comparator.is_some())
            .finish()
    }
}
