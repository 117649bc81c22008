// SPDX-License-Identifier: MPL-2.0
//! Classified ads and the search/category filter.

use super::dates;
use super::forms;
use super::store::{Record, RecordId};
use crate::config::{DEFAULT_CLASSIFIED_AUTHOR, DEFAULT_RECORD_IMAGE};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Servicios,
    Venta,
    Compra,
    Otros,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Servicios,
        Category::Venta,
        Category::Compra,
        Category::Otros,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Servicios => "Servicios",
            Category::Venta => "Venta",
            Category::Compra => "Compra",
            Category::Otros => "Otros",
        }
    }

    /// Parses the exact category name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector of the filter bar: one category or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image: String,
    pub contact: String,
    pub email: String,
    pub author: String,
    pub date: String,
}

impl Record for ClassifiedRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl ClassifiedRecord {
    /// `needle` must already be lowercase.
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Case-insensitive substring match on title or description, combined
    /// with the category filter.
    #[must_use]
    pub fn matches(&self, search: &str, filter: CategoryFilter) -> bool {
        filter.accepts(self.category) && self.matches_search(&search.to_lowercase())
    }
}

/// Returns the records visible for the current search text and category,
/// in store order.
#[must_use]
pub fn filter_classifieds<'a>(
    records: &'a [ClassifiedRecord],
    search: &str,
    filter: CategoryFilter,
) -> Vec<&'a ClassifiedRecord> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|r| filter.accepts(r.category) && r.matches_search(&needle))
        .collect()
}

/// Contents of the "publish classified" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedDraft {
    pub title: String,
    pub category: Option<Category>,
    pub description: String,
    pub contact: String,
    pub email: String,
}

impl ClassifiedDraft {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.category.is_some()
            && forms::all_filled(&[&self.title, &self.description, &self.contact, &self.email])
    }

    /// Builds the record published by the current user on `today`.
    ///
    /// Returns `None` while the draft is incomplete.
    #[must_use]
    pub fn into_record(self, id: RecordId, today: NaiveDate) -> Option<ClassifiedRecord> {
        if !self.is_complete() {
            return None;
        }
        let category = self.category?;
        Some(ClassifiedRecord {
            id,
            title: self.title,
            description: self.description,
            category,
            image: DEFAULT_RECORD_IMAGE.to_string(),
            contact: self.contact,
            email: self.email,
            author: DEFAULT_CLASSIFIED_AUTHOR.to_string(),
            date: dates::long_date(today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str, description: &str, category: Category) -> ClassifiedRecord {
        ClassifiedRecord {
            id: RecordId::new(id),
            title: title.into(),
            description: description.into(),
            category,
            image: String::new(),
            contact: "+57 300".into(),
            email: "a@b.co".into(),
            author: "Ana".into(),
            date: "1 de enero de 2025".into(),
        }
    }

    #[test]
    fn search_is_case_insensitive_on_title_and_description() {
        let r = record(1, "Clases de Guitarra", "Horarios flexibles", Category::Servicios);
        assert!(r.matches("GUITARRA", CategoryFilter::All));
        assert!(r.matches("flexibles", CategoryFilter::All));
        assert!(!r.matches("bicicleta", CategoryFilter::All));
    }

    #[test]
    fn category_filter_is_exact() {
        let r = record(1, "Vendo Bicicleta", "", Category::Venta);
        assert!(r.matches("", CategoryFilter::Only(Category::Venta)));
        assert!(!r.matches("", CategoryFilter::Only(Category::Servicios)));
    }

    #[test]
    fn filter_keeps_store_order() {
        let records = vec![
            record(1, "A bici", "", Category::Venta),
            record(2, "B clase", "", Category::Servicios),
            record(3, "C bici", "", Category::Venta),
        ];
        let ids: Vec<u32> = filter_classifieds(&records, "bici", CategoryFilter::All)
            .iter()
            .map(|r| r.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn draft_without_category_is_incomplete() {
        let draft = ClassifiedDraft {
            title: "Test".into(),
            category: None,
            description: "d".into(),
            contact: "c".into(),
            email: "e".into(),
        };
        assert!(!draft.is_complete());
        let today = NaiveDate::from_ymd_opt(2025, 10, 23).unwrap();
        assert!(draft.into_record(RecordId::new(1), today).is_none());
    }

    #[test]
    fn published_record_gets_default_author_and_long_date() {
        let draft = ClassifiedDraft {
            title: "Test".into(),
            category: Some(Category::Venta),
            description: "d".into(),
            contact: "c".into(),
            email: "e".into(),
        };
        let today = NaiveDate::from_ymd_opt(2025, 10, 23).unwrap();
        let record = draft.into_record(RecordId::new(4), today).unwrap();
        assert_eq!(record.author, "Usuario");
        assert_eq!(record.date, "23 de octubre de 2025");
    }

    #[test]
    fn category_names_parse_back() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("venta"), None);
    }
}
