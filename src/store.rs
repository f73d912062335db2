//! Injected meeting storage.
//!
//! Scheduling polls are kept behind the [`MeetingStore`] trait so the
//! backing store can be swapped or mocked; [`InMemoryMeetingStore`] is
//! the keyed-map implementation with clone-on-read/write semantics.
//! [`lookup_with_fallback`] tags which of two stores answered a lookup.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Opaque string id for a meeting.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize, Deserialize,
)]
pub struct MeetingId(String);

impl From<&str> for MeetingId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A clock time within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

/// The daily window in which slots may be marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// The span of candidate days for a meeting (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One participant's marked slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityEntry {
    pub user_id: String,
    pub user_name: String,
    pub slots: Vec<String>,
}

/// A scheduling poll: a shared link's worth of state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    pub description: String,
    pub date_range: DateRange,
    pub time_range: TimeRange,
    /// Slot duration in hours (e.g. 0.5, 1, 1.5, 2)
    pub duration: f64,
    pub created_by: String,
    pub availability: Vec<AvailabilityEntry>,
    pub created_at: DateTime<Utc>,
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A meeting with this id already exists.
    #[error("Meeting already exists: {0}")]
    DuplicateMeeting(MeetingId),

    /// No meeting with this id.
    #[error("Unknown meeting: {0}")]
    UnknownMeeting(MeetingId),
}

/// A record store keyed by meeting id.
///
/// `get` and `list` hand out owned copies, so callers can never mutate
/// stored state except through the trait.
pub trait MeetingStore {
    /// Stores a new meeting.
    ///
    /// # Errors
    /// Returns `StoreError::DuplicateMeeting` if the id is taken.
    fn create(&mut self, meeting: Meeting) -> Result<(), StoreError>;

    /// Point lookup by id.
    fn get(&self, id: &MeetingId) -> Option<Meeting>;

    /// All stored meetings, oldest first.
    fn list(&self) -> Vec<Meeting>;

    /// Replaces the slot list for `user_id` on the given meeting, or
    /// appends a new availability entry if the participant is new.
    /// Slots are deduplicated and sorted. Returns the updated meeting.
    ///
    /// # Errors
    /// Returns `StoreError::UnknownMeeting` if the id is unknown.
    fn upsert_availability(
        &mut self,
        id: &MeetingId,
        user_id: &str,
        user_name: &str,
        slots: &[String],
    ) -> Result<Meeting, StoreError>;
}

/// Process-local keyed map of meetings. Injected by the caller rather
/// than held as a module-level singleton.
#[derive(Debug, Default)]
pub struct InMemoryMeetingStore {
    meetings: HashMap<MeetingId, Meeting>,
}

impl InMemoryMeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

impl MeetingStore for InMemoryMeetingStore {
    fn create(&mut self, meeting: Meeting) -> Result<(), StoreError> {
        if self.meetings.contains_key(&meeting.id) {
            return Err(StoreError::DuplicateMeeting(meeting.id));
        }
        self.meetings.insert(meeting.id.clone(), meeting);
        Ok(())
    }

    fn get(&self, id: &MeetingId) -> Option<Meeting> {
        self.meetings.get(id).cloned()
    }

    fn list(&self) -> Vec<Meeting> {
        let mut meetings: Vec<Meeting> = self.meetings.values().cloned().collect();
        meetings.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        meetings
    }

    fn upsert_availability(
        &mut self,
        id: &MeetingId,
        user_id: &str,
        user_name: &str,
        slots: &[String],
    ) -> Result<Meeting, StoreError> {
        let meeting = self
            .meetings
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownMeeting(id.clone()))?;

        let unique_slots: Vec<String> = slots
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        match meeting
            .availability
            .iter_mut()
            .find(|entry| entry.user_id == user_id)
        {
            Some(entry) => entry.slots = unique_slots,
            None => meeting.availability.push(AvailabilityEntry {
                user_id: user_id.to_owned(),
                user_name: user_name.to_owned(),
                slots: unique_slots,
            }),
        }

        Ok(meeting.clone())
    }
}

/// Which store answered a point lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum MeetingLookup {
    /// Found in the primary store.
    Primary(Meeting),
    /// Primary missed; found in the fallback store.
    Fallback(Meeting),
    /// Neither store knows the id.
    NotFound,
}

impl MeetingLookup {
    /// The meeting regardless of origin, if any.
    pub fn into_meeting(self) -> Option<Meeting> {
        match self {
            Self::Primary(meeting) | Self::Fallback(meeting) => Some(meeting),
            Self::NotFound => None,
        }
    }
}

/// Consults `primary` first and `fallback` second, tagging the result
/// with its origin.
pub fn lookup_with_fallback(
    primary: &dyn MeetingStore,
    fallback: &dyn MeetingStore,
    id: &MeetingId,
) -> MeetingLookup {
    if let Some(meeting) = primary.get(id) {
        return MeetingLookup::Primary(meeting);
    }
    if let Some(meeting) = fallback.get(id) {
        return MeetingLookup::Fallback(meeting);
    }
    MeetingLookup::NotFound
}
