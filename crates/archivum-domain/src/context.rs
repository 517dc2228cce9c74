//! Session context for store lookups

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One logical session against the repository store
///
/// A context belongs to a single caller for the duration of one resolution.
/// Services only ever borrow it.
#[derive(Debug)]
pub struct Context {
    id: Uuid,
    started_at: DateTime<Utc>,
    label: Option<String>,
}

impl Context {
    /// Open a new session
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            label: None,
        }
    }

    /// Open a session with a human-readable label for log lines
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contexts_are_distinct() {
        let a = Context::new();
        let b = Context::new();
        assert_ne!(a.id(), b.id());
        assert!(a.label().is_none());
    }

    #[test]
    fn test_context_label() {
        let ctx = Context::with_label("export");
        assert_eq!(ctx.label(), Some("export"));
        assert!(ctx.started_at() <= Utc::now());
    }
}
