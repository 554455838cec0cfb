use serde::{Deserialize, Serialize};

use super::{Event, EventId};

/// Events the user has joined, in join order
///
/// This is presentation-layer state. Queries never read it; screens use it
/// to label results with Join/Leave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipSet {
    joined: Vec<EventId>,
}

impl MembershipSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join an event. Returns false if it was already joined.
    pub fn join(&mut self, id: impl Into<EventId>) -> bool {
        let id = id.into();
        if self.joined.contains(&id) {
            return false;
        }
        self.joined.push(id);
        true
    }

    /// Leave an event. Returns false if it was not joined.
    pub fn leave(&mut self, id: &EventId) -> bool {
        let before = self.joined.len();
        self.joined.retain(|joined| joined != id);
        self.joined.len() != before
    }

    /// Join if not joined, leave otherwise. Returns the new joined state.
    pub fn toggle(&mut self, id: &EventId) -> bool {
        if self.leave(id) {
            false
        } else {
            self.joined.push(id.clone());
            true
        }
    }

    pub fn is_joined(&self, id: &EventId) -> bool {
        self.joined.contains(id)
    }

    pub fn len(&self) -> usize {
        self.joined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventId> {
        self.joined.iter()
    }

    /// Resolve joined ids against a catalog, in join order
    ///
    /// Ids with no matching event are skipped.
    pub fn joined_events<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        self.joined
            .iter()
            .filter_map(|id| events.iter().find(|event| &event.id == id))
            .collect()
    }
}

impl<I: Into<EventId>> FromIterator<I> for MembershipSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.join(id);
        }
        set
    }
}
