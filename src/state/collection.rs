//! Saved forms and the newest-first collection holding them

use super::env::{Clock, IdGenerator};
use super::forms::DraftPayload;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Display format for creation dates ("Jun 15, 2023")
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// An immutable record produced by committing a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl SavedForm {
    /// "Created on ..." line shown on the form card
    pub fn created_label(&self, date_format: &str) -> String {
        format!("Created on {}", self.created_at.format(date_format))
    }
}

/// All forms saved during the session, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormCollection {
    forms: Vec<SavedForm>,
}

impl FormCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two example forms a fresh session starts with
    pub fn with_samples() -> Self {
        Self {
            forms: vec![
                SavedForm {
                    id: "1".to_string(),
                    title: "Customer Feedback".to_string(),
                    description: "Collect feedback from customers about our new product"
                        .to_string(),
                    created_at: sample_date(2023, 6, 15),
                },
                SavedForm {
                    id: "2".to_string(),
                    title: "Event Registration".to_string(),
                    description: "Registration form for our upcoming conference".to_string(),
                    created_at: sample_date(2023, 7, 22),
                },
            ],
        }
    }

    pub fn list(&self) -> &[SavedForm] {
        &self.forms
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Build a saved form from `payload` with a fresh id and the current
    /// time, and put it at the front. Returns the new id.
    pub fn create_from(
        &mut self,
        payload: DraftPayload,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> String {
        let mut id = ids.next_id();
        while self.forms.iter().any(|f| f.id == id) {
            tracing::warn!("Id generator repeated form id {id}");
            id = ids.next_id();
        }

        let form = SavedForm {
            id: id.clone(),
            title: payload.title,
            description: payload.description,
            created_at: clock.now(),
        };
        tracing::info!("Saved form {} ({id})", form.title);
        self.forms.insert(0, form);
        id
    }
}

fn sample_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
