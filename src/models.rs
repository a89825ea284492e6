use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FORMAT: &str = "%b %d";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub content: String,
    pub date: String,
}

impl Entry {
    pub fn new(content: String, date: NaiveDate) -> Self {
        Self {
            id: None,
            content,
            date: date.format(STORAGE_DATE_FORMAT).to_string(),
        }
    }

    pub fn display_date(&self) -> crate::Result<String> {
        let date = NaiveDate::parse_from_str(&self.date, STORAGE_DATE_FORMAT)?;
        Ok(date.format(DISPLAY_DATE_FORMAT).to_string())
    }
}

#[derive(Debug, Clone)]
pub struct EntryView {
    pub content: String,
    pub date: String,
    pub display_date: String,
}

impl EntryView {
    pub fn from_entry(entry: Entry) -> crate::Result<Self> {
        let display_date = entry.display_date()?;
        Ok(Self {
            content: entry.content,
            date: entry.date,
            display_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn storage_date_uses_year_month_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let entry = Entry::new("hello".to_string(), date);
        assert_eq!(entry.date, "2024-01-05");
    }

    #[test]
    fn display_date_abbreviates_month_and_day() {
        let entry = Entry {
            id: None,
            content: "hello".to_string(),
            date: "2024-01-05".to_string(),
        };
        assert_eq!(entry.display_date().unwrap(), "Jan 05");
    }

    #[test]
    fn display_date_fails_on_corrupted_date() {
        let entry = Entry {
            id: None,
            content: "hello".to_string(),
            date: "not-a-date".to_string(),
        };
        assert!(entry.display_date().is_err());
    }

    #[test]
    fn view_keeps_storage_date_alongside_display_date() {
        let entry = Entry {
            id: None,
            content: "hello".to_string(),
            date: "2024-01-05".to_string(),
        };
        let view = EntryView::from_entry(entry).unwrap();
        assert_eq!(view.content, "hello");
        assert_eq!(view.date, "2024-01-05");
        assert_eq!(view.display_date, "Jan 05");
    }

    #[test]
    fn new_entry_serializes_to_content_and_date_only() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let entry = Entry::new("hello".to_string(), date);
        let doc = to_document(&entry).unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.contains_key("content"));
        assert!(doc.contains_key("date"));
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn stored_document_deserializes_with_assigned_id() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "content": "hello",
            "date": "2024-01-05",
        };
        let entry: Entry = from_document(doc).unwrap();
        assert!(entry.id.is_some());
        assert_eq!(entry.content, "hello");
        assert_eq!(entry.date, "2024-01-05");
    }

    #[test]
    fn stored_document_missing_a_key_fails_deserialization() {
        let doc = doc! { "content": "hello" };
        assert!(from_document::<Entry>(doc).is_err());
    }
}
