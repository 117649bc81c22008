// SPDX-License-Identifier: MPL-2.0
//! Mock records each page starts with.
//!
//! Every page declares its own list; the admin tables do not reference the
//! public pages' records.

use super::admin::{
    AdminEventRow, EventStatus, ModerationRow, ModerationStatus, UserRow, UserStatus,
};
use super::calendar::{CalendarEvent, EventColor};
use super::classified::{Category, ClassifiedRecord};
use super::event::EventRecord;
use super::store::RecordId;
use chrono::NaiveDate;

const IMAGE_PARK: &str = "https://images.unsplash.com/photo-1710696916697-f8c8c45b68e2?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMAGE_MEETING: &str = "https://images.unsplash.com/photo-1759753972050-839775c071e3?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMAGE_FESTIVAL: &str = "https://images.unsplash.com/photo-1758610840977-8ee55513281c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMAGE_GUITAR: &str = "https://images.unsplash.com/photo-1510915361894-db8b60106cb1?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMAGE_BICYCLE: &str = "https://images.unsplash.com/photo-1485965120184-e220f721d03e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMAGE_RUNNING: &str = "https://images.unsplash.com/photo-1476480862126-209bfaa8edc8?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    title: &str,
    description: &str,
    date: &str,
    time: &str,
    location: &str,
    image: &str,
    attendees: u32,
) -> EventRecord {
    EventRecord {
        id: RecordId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        image: image.to_string(),
        attendees,
    }
}

/// Events page.
#[must_use]
pub fn events() -> Vec<EventRecord> {
    vec![
        event(
            1,
            "Jornada de Limpieza Comunitaria",
            "Únete a la limpieza de nuestros espacios públicos. Trae guantes y bolsas de basura.",
            "28 de Octubre, 2025",
            "8:00 AM",
            "Parque Central",
            IMAGE_PARK,
            45,
        ),
        event(
            2,
            "Reunión Mensual de Vecinos",
            "Reunión mensual para discutir asuntos de la comunidad y próximos proyectos.",
            "2 de Noviembre, 2025",
            "6:00 PM",
            "Salón Comunal",
            IMAGE_MEETING,
            32,
        ),
        event(
            3,
            "Festival Cultural Comunitario",
            "Celebremos nuestra diversidad cultural con música, comida y actividades para toda la familia.",
            "15 de Noviembre, 2025",
            "10:00 AM",
            "Plaza Principal",
            IMAGE_FESTIVAL,
            120,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn classified(
    id: u32,
    title: &str,
    description: &str,
    category: Category,
    image: &str,
    contact: &str,
    email: &str,
    author: &str,
    date: &str,
) -> ClassifiedRecord {
    ClassifiedRecord {
        id: RecordId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        category,
        image: image.to_string(),
        contact: contact.to_string(),
        email: email.to_string(),
        author: author.to_string(),
        date: date.to_string(),
    }
}

/// Classifieds page.
#[must_use]
pub fn classifieds() -> Vec<ClassifiedRecord> {
    vec![
        classified(
            1,
            "Clases de Guitarra",
            "Ofrezco clases de guitarra para principiantes y nivel intermedio. Horarios flexibles.",
            Category::Servicios,
            IMAGE_GUITAR,
            "+57 300 123 4567",
            "musica@email.com",
            "Carlos Martínez",
            "20 de Octubre, 2025",
        ),
        classified(
            2,
            "Vendo Bicicleta",
            "Bicicleta de montaña en excelente estado, poco uso. Incluye casco y candado.",
            Category::Venta,
            IMAGE_BICYCLE,
            "+57 300 987 6543",
            "venta@email.com",
            "María López",
            "22 de Octubre, 2025",
        ),
        classified(
            3,
            "Busco Compañero de Trote",
            "Busco alguien para trotar en las mañanas por el parque. Horario: 6:00 AM.",
            Category::Otros,
            IMAGE_RUNNING,
            "+57 310 456 7890",
            "deporte@email.com",
            "Juan Pérez",
            "23 de Octubre, 2025",
        ),
    ]
}

fn calendar_event(
    id: u32,
    title: &str,
    (year, month, day): (i32, u32, u32),
    time: &str,
    location: &str,
    color: EventColor,
) -> Option<CalendarEvent> {
    Some(CalendarEvent {
        id: RecordId::new(id),
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day)?,
        time: time.to_string(),
        location: location.to_string(),
        color,
    })
}

/// Calendar page.
#[must_use]
pub fn calendar_events() -> Vec<CalendarEvent> {
    [
        calendar_event(
            1,
            "Jornada de Limpieza Comunitaria",
            (2025, 10, 28),
            "8:00 AM",
            "Parque Central",
            EventColor::Green,
        ),
        calendar_event(
            2,
            "Reunión Mensual de Vecinos",
            (2025, 11, 2),
            "6:00 PM",
            "Salón Comunal",
            EventColor::Blue,
        ),
        calendar_event(
            3,
            "Festival Cultural Comunitario",
            (2025, 11, 15),
            "10:00 AM",
            "Plaza Principal",
            EventColor::Green,
        ),
        calendar_event(
            4,
            "Taller de Reciclaje",
            (2025, 11, 20),
            "3:00 PM",
            "Biblioteca Comunitaria",
            EventColor::Blue,
        ),
        calendar_event(
            5,
            "Mercado Comunitario",
            (2025, 11, 25),
            "9:00 AM",
            "Plaza Principal",
            EventColor::Green,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn user(id: u32, name: &str, email: &str, status: UserStatus, joined: &str) -> UserRow {
    UserRow {
        id: RecordId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role: "Usuario".to_string(),
        status,
        joined: joined.to_string(),
    }
}

/// Admin dashboard, users tab.
#[must_use]
pub fn admin_users() -> Vec<UserRow> {
    vec![
        user(1, "Juan Pérez", "juan@email.com", UserStatus::Activo, "15 Mar 2025"),
        user(2, "María López", "maria@email.com", UserStatus::Activo, "20 Mar 2025"),
        user(3, "Carlos Martínez", "carlos@email.com", UserStatus::Inactivo, "10 Feb 2025"),
        user(4, "Ana García", "ana@email.com", UserStatus::Activo, "5 Abr 2025"),
    ]
}

fn admin_event(id: u32, title: &str, date: &str, attendees: u32) -> AdminEventRow {
    AdminEventRow {
        id: RecordId::new(id),
        title: title.to_string(),
        date: date.to_string(),
        attendees,
        status: EventStatus::Programado,
    }
}

/// Admin dashboard, events tab.
#[must_use]
pub fn admin_events() -> Vec<AdminEventRow> {
    vec![
        admin_event(1, "Jornada de Limpieza", "28 Oct 2025", 45),
        admin_event(2, "Reunión Mensual", "2 Nov 2025", 32),
        admin_event(3, "Festival Cultural", "15 Nov 2025", 120),
    ]
}

fn moderation(
    id: u32,
    title: &str,
    author: &str,
    category: Category,
    date: &str,
    status: ModerationStatus,
) -> ModerationRow {
    ModerationRow {
        id: RecordId::new(id),
        title: title.to_string(),
        author: author.to_string(),
        category: category.as_str().to_string(),
        date: date.to_string(),
        status,
    }
}

/// Admin dashboard, classifieds tab.
#[must_use]
pub fn admin_classifieds() -> Vec<ModerationRow> {
    vec![
        moderation(
            1,
            "Clases de Guitarra",
            "Carlos M.",
            Category::Servicios,
            "20 Oct 2025",
            ModerationStatus::Aprobado,
        ),
        moderation(
            2,
            "Vendo Bicicleta",
            "María L.",
            Category::Venta,
            "22 Oct 2025",
            ModerationStatus::Aprobado,
        ),
        moderation(
            3,
            "Busco Compañero de Trote",
            "Juan P.",
            Category::Otros,
            "23 Oct 2025",
            ModerationStatus::Pendiente,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_calendar_date_is_valid() {
        assert_eq!(calendar_events().len(), 5);
    }

    #[test]
    fn calendar_colors_alternate() {
        let colors: Vec<EventColor> = calendar_events().iter().map(|e| e.color).collect();
        assert!(colors.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn only_one_classified_awaits_moderation() {
        let pending = admin_classifieds()
            .into_iter()
            .filter(|r| r.status == ModerationStatus::Pendiente)
            .count();
        assert_eq!(pending, 1);
    }
}
