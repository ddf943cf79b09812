//! Form field value objects and the per-type defaults table

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Label used when a type tag names no known field type
pub const FALLBACK_LABEL: &str = "Question";

/// Placeholder used when a type tag names no known field type
pub const FALLBACK_PLACEHOLDER: &str = "";

/// The fixed set of field types a form can hold
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Number,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Date,
}

/// How a field of a given type is shown in the preview tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Single-line input of the field's own type
    Input,
    /// Multi-line text box
    TextArea,
    /// Fixed list of placeholder options
    Choice,
}

/// Static per-type row of the defaults table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProfile {
    pub default_label: &'static str,
    pub default_placeholder: &'static str,
    /// Name shown in the type menu and on the field card
    pub menu_label: &'static str,
    pub preview: PreviewKind,
}

impl FieldType {
    /// Look up this type's row in the defaults table
    pub const fn profile(self) -> FieldProfile {
        match self {
            Self::Text => FieldProfile {
                default_label: "Text Question",
                default_placeholder: "Enter your answer",
                menu_label: "Short Text",
                preview: PreviewKind::Input,
            },
            Self::Email => FieldProfile {
                default_label: "Email",
                default_placeholder: "Enter your email",
                menu_label: "Email",
                preview: PreviewKind::Input,
            },
            Self::Number => FieldProfile {
                default_label: "Number",
                default_placeholder: "Enter a number",
                menu_label: "Number",
                preview: PreviewKind::Input,
            },
            Self::Textarea => FieldProfile {
                default_label: "Long Text",
                default_placeholder: "Type your answer here",
                menu_label: "Long Text",
                preview: PreviewKind::TextArea,
            },
            Self::Select => FieldProfile {
                default_label: "Dropdown",
                default_placeholder: "",
                menu_label: "Dropdown",
                preview: PreviewKind::Choice,
            },
            Self::Radio => FieldProfile {
                default_label: "Multiple Choice",
                default_placeholder: "",
                menu_label: "Multiple Choice",
                preview: PreviewKind::Input,
            },
            Self::Checkbox => FieldProfile {
                default_label: "Checkboxes",
                default_placeholder: "",
                menu_label: "Checkboxes",
                preview: PreviewKind::Input,
            },
            Self::Date => FieldProfile {
                default_label: "Date",
                default_placeholder: "",
                menu_label: "Date",
                preview: PreviewKind::Input,
            },
        }
    }

    pub const fn default_label(self) -> &'static str {
        self.profile().default_label
    }

    pub const fn default_placeholder(self) -> &'static str {
        self.profile().default_placeholder
    }

    pub const fn menu_label(self) -> &'static str {
        self.profile().menu_label
    }

    /// Types offered by the type-change menu on a field card.
    ///
    /// Radio and checkbox fields can be added but are not offered here.
    pub fn menu_types() -> &'static [FieldType] {
        &[
            Self::Text,
            Self::Email,
            Self::Number,
            Self::Textarea,
            Self::Select,
            Self::Date,
        ]
    }

    /// Next entry in the type menu, wrapping around.
    /// Types outside the menu move to its first entry.
    pub fn next_in_menu(self) -> Self {
        let menu = Self::menu_types();
        match menu.iter().position(|t| *t == self) {
            Some(idx) => menu[(idx + 1) % menu.len()],
            None => menu[0],
        }
    }

    /// All eight types in declaration order
    pub fn all() -> Vec<FieldType> {
        Self::iter().collect()
    }
}

/// Default label for a raw type tag, falling back for unknown tags
#[allow(dead_code)]
pub fn default_label(tag: &str) -> &'static str {
    FieldType::from_str(tag)
        .map(FieldType::default_label)
        .unwrap_or(FALLBACK_LABEL)
}

/// Default placeholder for a raw type tag, falling back for unknown tags
#[allow(dead_code)]
pub fn default_placeholder(tag: &str) -> &'static str {
    FieldType::from_str(tag)
        .map(FieldType::default_placeholder)
        .unwrap_or(FALLBACK_PLACEHOLDER)
}

/// One question of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    /// Empty means no placeholder
    pub placeholder: String,
    pub required: bool,
}

impl Field {
    /// Create a field carrying the defaults of its type
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: field_type.default_label().to_string(),
            placeholder: field_type.default_placeholder().to_string(),
            required: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Shallow-merge a change set. The id is never touched and a type
    /// change leaves label, placeholder and required as they are.
    pub fn apply(&mut self, changes: FieldChanges) {
        if let Some(field_type) = changes.field_type {
            self.field_type = field_type;
        }
        if let Some(label) = changes.label {
            self.label = label;
        }
        if let Some(placeholder) = changes.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(required) = changes.required {
            self.required = required;
        }
    }
}

/// Partial update for a [`Field`]; `None` leaves a property unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldChanges {
    pub field_type: Option<FieldType>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
}

impl FieldChanges {
    pub fn field_type(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Default::default()
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            ..Default::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Default::default()
        }
    }
}
