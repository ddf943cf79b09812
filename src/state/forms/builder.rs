//! Editing cursor and presentation state of the create view

use super::draft::{DraftTab, FormDraft};
use super::{FieldChanges, FieldType};
use crate::state::env::IdGenerator;
use std::collections::HashSet;

/// Which input of the build tab receives keystrokes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BuilderFocus {
    #[default]
    Title,
    Description,
    Label(String),
    Placeholder(String),
    Required(String),
}

impl BuilderFocus {
    /// Id of the field this focus points into, if any
    pub fn field_id(&self) -> Option<&str> {
        match self {
            Self::Title | Self::Description => None,
            Self::Label(id) | Self::Placeholder(id) | Self::Required(id) => Some(id),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Description)
    }
}

/// Add-field picker listing every field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypePicker {
    pub selected: usize,
}

impl TypePicker {
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % FieldType::all().len();
    }

    pub fn prev(&mut self) {
        let count = FieldType::all().len();
        self.selected = (self.selected + count - 1) % count;
    }

    pub fn selected_type(&self) -> FieldType {
        FieldType::all()
            .get(self.selected)
            .copied()
            .unwrap_or_default()
    }
}

/// A draft plus the presentation state the create view needs around it
#[derive(Debug, Clone, Default)]
pub struct BuilderState {
    pub draft: FormDraft,
    pub tab: DraftTab,
    pub focus: BuilderFocus,
    /// Fields whose settings (placeholder, required) are shown
    expanded: HashSet<String>,
    pub picker: Option<TypePicker>,
    /// First field shown by the preview tab
    pub preview_offset: usize,
}

impl BuilderState {
    pub fn new(draft: FormDraft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    pub fn switch_tab(&mut self, tab: DraftTab) {
        self.tab = tab;
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if self.draft.field(id).is_none() {
            return;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        } else if matches!(
            &self.focus,
            BuilderFocus::Placeholder(f) | BuilderFocus::Required(f) if f == id
        ) {
            // Collapsed inputs can no longer hold the cursor
            self.focus = BuilderFocus::Label(id.to_string());
        }
    }

    /// Add a field and move the cursor onto its label
    pub fn add_field(&mut self, ids: &mut dyn IdGenerator, field_type: FieldType) {
        let id = self.draft.add_field(ids, field_type);
        self.focus = BuilderFocus::Label(id);
    }

    /// Remove a field; a cursor inside it moves to the previous input
    pub fn remove_field(&mut self, id: &str) {
        if self.focus.field_id() == Some(id) {
            self.focus = self.label_focus_before(id);
        }
        self.draft.remove_field(id);
        self.expanded.remove(id);
        self.preview_offset = self
            .preview_offset
            .min(self.draft.fields().len().saturating_sub(1));
    }

    fn label_focus_before(&self, id: &str) -> BuilderFocus {
        let fields = self.draft.fields();
        match fields.iter().position(|f| f.id() == id) {
            Some(idx) if idx > 0 => BuilderFocus::Label(fields[idx - 1].id().to_string()),
            _ => BuilderFocus::Description,
        }
    }

    /// Cycle the focused field's type through the type menu
    pub fn cycle_focused_type(&mut self) {
        let Some(id) = self.focus.field_id().map(str::to_string) else {
            return;
        };
        if let Some(field) = self.draft.field(&id) {
            let next = field.field_type.next_in_menu();
            self.draft
                .update_field(&id, FieldChanges::field_type(next));
        }
    }

    /// Inputs in tab order; collapsed fields only expose their label
    pub fn focus_order(&self) -> Vec<BuilderFocus> {
        let mut order = vec![BuilderFocus::Title, BuilderFocus::Description];
        for field in self.draft.fields() {
            let id = field.id().to_string();
            order.push(BuilderFocus::Label(id.clone()));
            if self.is_expanded(&id) {
                order.push(BuilderFocus::Placeholder(id.clone()));
                order.push(BuilderFocus::Required(id));
            }
        }
        order
    }

    pub fn next_focus(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()].clone();
    }

    pub fn prev_focus(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()].clone();
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        match self.focus.clone() {
            BuilderFocus::Title => {
                let mut title = self.draft.title().to_string();
                title.push(c);
                self.draft.set_title(title);
            }
            BuilderFocus::Description => {
                let mut description = self.draft.description().to_string();
                description.push(c);
                self.draft.set_description(description);
            }
            BuilderFocus::Label(id) => {
                if let Some(field) = self.draft.field(&id) {
                    let mut label = field.label.clone();
                    label.push(c);
                    self.draft.update_field(&id, FieldChanges::label(label));
                }
            }
            BuilderFocus::Placeholder(id) => {
                if let Some(field) = self.draft.field(&id) {
                    let mut placeholder = field.placeholder.clone();
                    placeholder.push(c);
                    self.draft
                        .update_field(&id, FieldChanges::placeholder(placeholder));
                }
            }
            BuilderFocus::Required(id) => {
                if c == ' ' {
                    self.toggle_required(&id);
                }
            }
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        match self.focus.clone() {
            BuilderFocus::Title => {
                let mut title = self.draft.title().to_string();
                title.pop();
                self.draft.set_title(title);
            }
            BuilderFocus::Description => {
                let mut description = self.draft.description().to_string();
                description.pop();
                self.draft.set_description(description);
            }
            BuilderFocus::Label(id) => {
                if let Some(field) = self.draft.field(&id) {
                    let mut label = field.label.clone();
                    label.pop();
                    self.draft.update_field(&id, FieldChanges::label(label));
                }
            }
            BuilderFocus::Placeholder(id) => {
                if let Some(field) = self.draft.field(&id) {
                    let mut placeholder = field.placeholder.clone();
                    placeholder.pop();
                    self.draft
                        .update_field(&id, FieldChanges::placeholder(placeholder));
                }
            }
            BuilderFocus::Required(_) => {}
        }
    }

    fn toggle_required(&mut self, id: &str) {
        if let Some(required) = self.draft.field(id).map(|f| f.required) {
            self.draft
                .update_field(id, FieldChanges::required(!required));
        }
    }

    pub fn scroll_preview_down(&mut self) {
        if self.preview_offset + 1 < self.draft.fields().len() {
            self.preview_offset += 1;
        }
    }

    pub fn scroll_preview_up(&mut self) {
        self.preview_offset = self.preview_offset.saturating_sub(1);
    }

    pub fn open_picker(&mut self) {
        self.picker = Some(TypePicker::default());
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    /// Add a field of the picked type and close the picker
    pub fn confirm_picker(&mut self, ids: &mut dyn IdGenerator) {
        if let Some(picker) = self.picker.take() {
            self.add_field(ids, picker.selected_type());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::env::testing::SequentialIds;

    fn builder_with_fields() -> (BuilderState, SequentialIds) {
        let mut ids = SequentialIds::new("f");
        let builder = BuilderState::new(FormDraft::with_starter_fields(&mut ids));
        (builder, ids)
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_focus_is_title() {
            let builder = BuilderState::default();
            assert_eq!(builder.focus, BuilderFocus::Title);
            assert_eq!(builder.tab, DraftTab::Build);
        }

        #[test]
        fn test_focus_order_collapsed() {
            let (builder, _) = builder_with_fields();
            assert_eq!(
                builder.focus_order(),
                vec![
                    BuilderFocus::Title,
                    BuilderFocus::Description,
                    BuilderFocus::Label("f1".to_string()),
                    BuilderFocus::Label("f2".to_string()),
                ]
            );
        }

        #[test]
        fn test_focus_order_expanded() {
            let (mut builder, _) = builder_with_fields();
            builder.toggle_expanded("f1");
            assert_eq!(
                builder.focus_order()[2..5].to_vec(),
                vec![
                    BuilderFocus::Label("f1".to_string()),
                    BuilderFocus::Placeholder("f1".to_string()),
                    BuilderFocus::Required("f1".to_string()),
                ]
            );
        }

        #[test]
        fn test_next_focus_wraps() {
            let (mut builder, _) = builder_with_fields();
            for _ in 0..4 {
                builder.next_focus();
            }
            assert_eq!(builder.focus, BuilderFocus::Title);
        }

        #[test]
        fn test_prev_focus_wraps() {
            let (mut builder, _) = builder_with_fields();
            builder.prev_focus();
            assert_eq!(builder.focus, BuilderFocus::Label("f2".to_string()));
        }

        #[test]
        fn test_collapse_moves_focus_to_label() {
            let (mut builder, _) = builder_with_fields();
            builder.toggle_expanded("f1");
            builder.focus = BuilderFocus::Required("f1".to_string());
            builder.toggle_expanded("f1");
            assert!(!builder.is_expanded("f1"));
            assert_eq!(builder.focus, BuilderFocus::Label("f1".to_string()));
        }

        #[test]
        fn test_toggle_expanded_unknown_id_is_noop() {
            let (mut builder, _) = builder_with_fields();
            builder.toggle_expanded("missing");
            assert!(!builder.is_expanded("missing"));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_into_title_and_description() {
            let mut builder = BuilderState::default();
            for c in "Hi".chars() {
                builder.input_char(c);
            }
            builder.next_focus();
            builder.input_char('x');
            builder.input_char('y');
            builder.backspace();

            assert_eq!(builder.draft.title(), "Hi");
            assert_eq!(builder.draft.description(), "x");
        }

        #[test]
        fn test_typing_into_label() {
            let (mut builder, _) = builder_with_fields();
            builder.focus = BuilderFocus::Label("f1".to_string());
            builder.backspace();
            builder.input_char('E');
            assert_eq!(builder.draft.field("f1").unwrap().label, "NamE");
        }

        #[test]
        fn test_typing_into_placeholder() {
            let (mut builder, _) = builder_with_fields();
            builder.toggle_expanded("f2");
            builder.focus = BuilderFocus::Placeholder("f2".to_string());
            builder.input_char('!');
            assert_eq!(
                builder.draft.field("f2").unwrap().placeholder,
                "Enter your email!"
            );
        }

        #[test]
        fn test_space_toggles_required() {
            let (mut builder, _) = builder_with_fields();
            builder.toggle_expanded("f1");
            builder.focus = BuilderFocus::Required("f1".to_string());
            builder.input_char(' ');
            assert!(!builder.draft.field("f1").unwrap().required);
            builder.input_char('a');
            assert!(!builder.draft.field("f1").unwrap().required);
            builder.input_char(' ');
            assert!(builder.draft.field("f1").unwrap().required);
        }

        #[test]
        fn test_add_field_focuses_label() {
            let (mut builder, mut ids) = builder_with_fields();
            builder.add_field(&mut ids, FieldType::Textarea);
            assert_eq!(builder.focus, BuilderFocus::Label("f3".to_string()));
            assert_eq!(builder.draft.fields().len(), 3);
        }

        #[test]
        fn test_remove_focused_field_moves_focus_back() {
            let (mut builder, _) = builder_with_fields();
            builder.focus = BuilderFocus::Label("f2".to_string());
            builder.remove_field("f2");
            assert_eq!(builder.focus, BuilderFocus::Label("f1".to_string()));

            builder.remove_field("f1");
            assert_eq!(builder.focus, BuilderFocus::Description);
            assert!(builder.draft.fields().is_empty());
        }

        #[test]
        fn test_remove_clears_expanded() {
            let (mut builder, _) = builder_with_fields();
            builder.toggle_expanded("f1");
            builder.remove_field("f1");
            assert!(!builder.is_expanded("f1"));
        }

        #[test]
        fn test_cycle_type_keeps_label() {
            let (mut builder, _) = builder_with_fields();
            builder.focus = BuilderFocus::Label("f1".to_string());
            builder.cycle_focused_type();
            let field = builder.draft.field("f1").unwrap();
            assert_eq!(field.field_type, FieldType::Email);
            assert_eq!(field.label, "Name");
        }

        #[test]
        fn test_cycle_type_without_field_focus_is_noop() {
            let (mut builder, _) = builder_with_fields();
            let before = builder.draft.clone();
            builder.cycle_focused_type();
            assert_eq!(builder.draft, before);
        }

        #[test]
        fn test_switch_tab_keeps_draft() {
            let (mut builder, _) = builder_with_fields();
            let before = builder.draft.clone();
            builder.switch_tab(DraftTab::Preview);
            assert_eq!(builder.tab, DraftTab::Preview);
            builder.switch_tab(builder.tab.toggle());
            assert_eq!(builder.tab, DraftTab::Build);
            assert_eq!(builder.draft, before);
        }
    }

    mod preview_scroll {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scroll_is_clamped_to_fields() {
            let (mut builder, _) = builder_with_fields();
            builder.scroll_preview_up();
            assert_eq!(builder.preview_offset, 0);
            builder.scroll_preview_down();
            builder.scroll_preview_down();
            assert_eq!(builder.preview_offset, 1);
        }

        #[test]
        fn test_scroll_on_empty_draft_stays_put() {
            let mut builder = BuilderState::default();
            builder.scroll_preview_down();
            assert_eq!(builder.preview_offset, 0);
        }
    }

    mod picker {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_picker_wraps() {
            let mut picker = TypePicker::default();
            picker.prev();
            assert_eq!(picker.selected_type(), FieldType::Date);
            picker.next();
            assert_eq!(picker.selected_type(), FieldType::Text);
        }

        #[test]
        fn test_confirm_picker_adds_field() {
            let (mut builder, mut ids) = builder_with_fields();
            builder.open_picker();
            if let Some(picker) = builder.picker.as_mut() {
                picker.next();
                picker.next();
            }
            builder.confirm_picker(&mut ids);

            assert!(builder.picker.is_none());
            let last = builder.draft.fields().last().unwrap();
            assert_eq!(last.field_type, FieldType::Number);
        }

        #[test]
        fn test_close_picker_adds_nothing() {
            let (mut builder, mut ids) = builder_with_fields();
            builder.open_picker();
            builder.close_picker();
            builder.confirm_picker(&mut ids);
            assert_eq!(builder.draft.fields().len(), 2);
        }
    }
}
