use std::fmt;
use std::time::{Duration, Instant};

use super::data::ArtworkId;

/// Something worth telling the user about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A rating was accepted by the server
    Submitted { title: String },
    /// The rating endpoint rejected the submission or could not be reached
    SubmitFailed,
    /// An artwork was removed from the collection
    Removed(ArtworkId),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Submitted { title } => write!(f, "Submitted review for {}", title),
            Notice::SubmitFailed => write!(f, "ERROR: server error on review submission :<"),
            Notice::Removed(id) => write!(f, "Removed artwork {}", id),
        }
    }
}

/// A notice currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Queue of transient notifications
///
/// Toasts disappear on their own once `lifetime` has elapsed (see `expire`),
/// or earlier when dismissed.
#[derive(Debug)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            lifetime,
        }
    }

    /// Show a notice, returning the id of its toast
    pub fn push(&mut self, notice: Notice, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        tracing::debug!(toast = id, "{}", notice);
        self.entries.push(Toast {
            id,
            notice,
            shown_at: now,
        });
        id
    }

    /// Drop every toast that has been visible for at least `lifetime`
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let lifetime = self.lifetime;
        self.entries
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
        before - self.entries.len()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
