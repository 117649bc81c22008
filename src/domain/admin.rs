// SPDX-License-Identifier: MPL-2.0
//! Rows of the admin dashboard tables.
//!
//! The dashboard keeps its own copies of users, events and classifieds. They
//! are unrelated to the lists shown on the public pages.

use super::store::{Record, RecordId, RecordStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Activo,
    Inactivo,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Activo => "Activo",
            UserStatus::Inactivo => "Inactivo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub joined: String,
}

impl Record for UserRow {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Programado,
}

impl EventStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Programado => "Programado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminEventRow {
    pub id: RecordId,
    pub title: String,
    pub date: String,
    pub attendees: u32,
    pub status: EventStatus,
}

impl Record for AdminEventRow {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationStatus {
    Pendiente,
    Aprobado,
}

impl ModerationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModerationStatus::Pendiente => "Pendiente",
            ModerationStatus::Aprobado => "Aprobado",
        }
    }
}

/// A classified awaiting (or past) moderation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationRow {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub date: String,
    pub status: ModerationStatus,
}

impl Record for ModerationRow {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Marks a classified as approved. Returns `false` for an unknown id.
pub fn approve(rows: &mut RecordStore<ModerationRow>, id: RecordId) -> bool {
    rows.update(id, |row| row.status = ModerationStatus::Aprobado)
}

/// Rejecting a classified removes it from the moderation table.
pub fn reject(rows: &mut RecordStore<ModerationRow>, id: RecordId) -> Option<ModerationRow> {
    rows.remove(id)
}

/// Participation shown on the dashboard; not derived from any data.
pub const PARTICIPATION_PERCENT: u32 = 78;

/// Figures of the four stat cards at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub users: usize,
    pub events: usize,
    pub classifieds: usize,
    pub participation_percent: u32,
}

impl AdminStats {
    #[must_use]
    pub fn from_tables(
        users: &RecordStore<UserRow>,
        events: &RecordStore<AdminEventRow>,
        classifieds: &RecordStore<ModerationRow>,
    ) -> Self {
        Self {
            users: users.len(),
            events: events.len(),
            classifieds: classifieds.len(),
            participation_percent: PARTICIPATION_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    #[test]
    fn approve_turns_pending_into_approved() {
        let mut rows = RecordStore::from_seed(seed::admin_classifieds());
        let pending = rows
            .iter()
            .find(|r| r.status == ModerationStatus::Pendiente)
            .map(|r| r.id)
            .unwrap();

        assert!(approve(&mut rows, pending));

        assert_eq!(
            rows.get(pending).map(|r| r.status),
            Some(ModerationStatus::Aprobado)
        );
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn reject_removes_the_row() {
        let mut rows = RecordStore::from_seed(seed::admin_classifieds());
        let removed = reject(&mut rows, RecordId::new(3));
        assert_eq!(removed.map(|r| r.title), Some("Busco Compañero de Trote".to_string()));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn stats_count_table_rows() {
        let users = RecordStore::from_seed(seed::admin_users());
        let events = RecordStore::from_seed(seed::admin_events());
        let classifieds = RecordStore::from_seed(seed::admin_classifieds());

        let stats = AdminStats::from_tables(&users, &events, &classifieds);

        assert_eq!(stats.users, 4);
        assert_eq!(stats.events, 3);
        assert_eq!(stats.classifieds, 3);
        assert_eq!(stats.participation_percent, 78);
    }
}
