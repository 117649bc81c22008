// SPDX-License-Identifier: MPL-2.0
//! Community events listed on the events page.

use super::forms;
use super::store::{Record, RecordId};
use crate::config::DEFAULT_RECORD_IMAGE;

/// An event as shown on its card. Date and time are free text, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub image: String,
    pub attendees: u32,
}

impl Record for EventRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Contents of the create/edit event form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl EventDraft {
    /// Prefills the form from an existing event.
    #[must_use]
    pub fn from_record(record: &EventRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
            location: record.location.clone(),
        }
    }

    /// Every field of the event form is required.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        forms::all_filled(&[
            &self.title,
            &self.description,
            &self.date,
            &self.time,
            &self.location,
        ])
    }

    /// Builds a new event with no attendees and the default image.
    #[must_use]
    pub fn into_record(self, id: RecordId) -> EventRecord {
        EventRecord {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            image: DEFAULT_RECORD_IMAGE.to_string(),
            attendees: 0,
        }
    }

    /// Overwrites the editable fields of `record`, keeping id, image and
    /// attendee count.
    pub fn apply_to(self, record: &mut EventRecord) {
        record.title = self.title;
        record.description = self.description;
        record.date = self.date;
        record.time = self.time;
        record.location = self.location;
    }
}
