//! The in-progress form definition and its preview projection

use super::field::{Field, FieldChanges, FieldType, PreviewKind};
use crate::state::env::IdGenerator;
use std::collections::HashSet;
use thiserror::Error;

/// Title shown in the preview when the draft has none
pub const UNTITLED_FORM: &str = "Untitled Form";

/// First entry of a dropdown preview
pub const CHOICE_PROMPT: &str = "Select an option";

/// Fixed options rendered for dropdown fields in the preview
pub const CHOICE_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Reasons a draft cannot be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please enter a form title")]
    EmptyTitle,
}

/// What a successful save hands to the collection.
///
/// Fields are not part of the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPayload {
    pub title: String,
    pub description: String,
}

/// The two mutually exclusive modes of the draft view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftTab {
    #[default]
    Build,
    Preview,
}

impl DraftTab {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Build => Self::Preview,
            Self::Preview => Self::Build,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Build => "Build",
            Self::Preview => "Preview",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Build => 0,
            Self::Preview => 1,
        }
    }
}

/// A form being composed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    title: String,
    description: String,
    fields: Vec<Field>,
    /// Every field id handed out, including those of removed fields
    issued_ids: HashSet<String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft holding the two required starter questions (name and email)
    pub fn with_starter_fields(ids: &mut dyn IdGenerator) -> Self {
        let mut draft = Self::new();
        let starters = [
            (FieldType::Text, "Name", "Enter your name"),
            (FieldType::Email, "Email", "Enter your email"),
        ];
        for (field_type, label, placeholder) in starters {
            let id = draft.add_field(ids, field_type);
            draft.update_field(
                &id,
                FieldChanges {
                    label: Some(label.to_string()),
                    placeholder: Some(placeholder.to_string()),
                    required: Some(true),
                    ..Default::default()
                },
            );
        }
        draft
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Append a new field with the defaults of `field_type`; returns its id
    pub fn add_field(&mut self, ids: &mut dyn IdGenerator, field_type: FieldType) -> String {
        let mut id = ids.next_id();
        // Ids are never reused, even those of removed fields
        while self.issued_ids.contains(&id) {
            tracing::warn!("Id generator repeated field id {id}");
            id = ids.next_id();
        }
        self.issued_ids.insert(id.clone());
        self.fields.push(Field::new(id.clone(), field_type));
        tracing::debug!("Added {field_type} field {id}");
        id
    }

    /// Merge `changes` into the field with `id`. Unknown ids are ignored.
    pub fn update_field(&mut self, id: &str, changes: FieldChanges) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.id() == id) {
            field.apply(changes);
        }
    }

    /// Remove the field with `id`. Unknown ids are ignored.
    pub fn remove_field(&mut self, id: &str) {
        let before = self.fields.len();
        self.fields.retain(|f| f.id() != id);
        if self.fields.len() < before {
            tracing::debug!("Removed field {id}");
        }
    }

    /// Validate and produce the payload to commit
    pub fn save(&self) -> Result<DraftPayload, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        Ok(DraftPayload {
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }

    /// Read-only projection rendered by the preview tab
    pub fn preview(&self) -> Preview {
        let title = if self.title.is_empty() {
            UNTITLED_FORM.to_string()
        } else {
            self.title.clone()
        };
        let description = (!self.description.is_empty()).then(|| self.description.clone());

        let body = if self.fields.is_empty() {
            PreviewBody::Empty
        } else {
            PreviewBody::Fields(self.fields.iter().map(PreviewField::from).collect())
        };

        Preview {
            title,
            description,
            body,
        }
    }
}

/// Disabled control shown for one field in the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewControl {
    Input {
        input_type: FieldType,
        placeholder: String,
    },
    TextArea {
        placeholder: String,
    },
    Choice {
        prompt: &'static str,
        options: [&'static str; 3],
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewField {
    pub id: String,
    pub label: String,
    pub required: bool,
    pub control: PreviewControl,
}

impl From<&Field> for PreviewField {
    fn from(field: &Field) -> Self {
        let control = match field.field_type.profile().preview {
            PreviewKind::TextArea => PreviewControl::TextArea {
                placeholder: field.placeholder.clone(),
            },
            PreviewKind::Choice => PreviewControl::Choice {
                prompt: CHOICE_PROMPT,
                options: CHOICE_OPTIONS,
            },
            PreviewKind::Input => PreviewControl::Input {
                input_type: field.field_type,
                placeholder: field.placeholder.clone(),
            },
        };
        Self {
            id: field.id().to_string(),
            label: field.label.clone(),
            required: field.required,
            control,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewBody {
    /// The draft has no fields; rendered as "No fields to preview"
    Empty,
    Fields(Vec<PreviewField>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub description: Option<String>,
    pub body: PreviewBody,
}
