//! Application state definitions

use super::collection::FormCollection;
use super::env::{Clock, IdGenerator};
use super::forms::{BuilderState, DraftError, FormDraft};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Saved forms
    #[default]
    List,
    /// Draft session: build and preview tabs
    Create,
}

/// Session start-up options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Start with the two example forms in the collection
    pub sample_forms: bool,
    /// Open new drafts with the name and email questions
    pub starter_fields: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            sample_forms: true,
            starter_fields: true,
        }
    }
}

/// A queued message for the error dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: String,
    pub message: String,
}

/// Main application state: the collection, the open draft and the
/// list/create mode machine
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub options: SessionOptions,

    // Data
    pub collection: FormCollection,
    /// Present exactly while `current_view` is `View::Create`
    pub builder: Option<BuilderState>,

    // Selection
    pub selected_index: usize,

    // UI state
    errors: VecDeque<ErrorNotice>,
}

impl AppState {
    pub fn new(options: SessionOptions) -> Self {
        let collection = if options.sample_forms {
            FormCollection::with_samples()
        } else {
            FormCollection::new()
        };
        Self {
            options,
            collection,
            ..Default::default()
        }
    }

    /// Open a fresh draft and switch to the create view.
    /// Ignored while a draft is already open.
    pub fn create_form(&mut self, ids: &mut dyn IdGenerator) {
        if self.current_view == View::Create {
            return;
        }
        let draft = if self.options.starter_fields {
            FormDraft::with_starter_fields(ids)
        } else {
            FormDraft::new()
        };
        self.builder = Some(BuilderState::new(draft));
        self.current_view = View::Create;
        tracing::info!("Opened new draft");
    }

    /// Discard the open draft and return to the list
    pub fn cancel_draft(&mut self) {
        if self.builder.take().is_some() {
            tracing::info!("Discarded draft");
        }
        self.current_view = View::List;
    }

    /// Commit the open draft to the collection and return to the list.
    ///
    /// On failure the draft stays open and untouched. Returns the id of
    /// the saved form, or `None` when no draft is open.
    pub fn save_draft(
        &mut self,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Option<String>, DraftError> {
        let Some(builder) = self.builder.as_ref() else {
            return Ok(None);
        };
        let payload = builder.draft.save().inspect_err(|e| {
            tracing::debug!("Save rejected: {e}");
        })?;

        let id = self.collection.create_from(payload, ids, clock);
        self.builder = None;
        self.current_view = View::List;
        self.reset_selection();
        Ok(Some(id))
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Queue a titled message for the error dialog
    pub fn push_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let notice = ErrorNotice {
            title: title.into(),
            message: message.into(),
        };
        tracing::warn!("{}: {}", notice.title, notice.message);
        self.errors.push_back(notice);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The notice currently shown, oldest first
    pub fn current_error(&self) -> Option<&ErrorNotice> {
        self.errors.front()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::env::testing::SequentialIds;
    use crate::state::env::{MockClock, SystemClock};
    use crate::state::forms::{DraftPayload, FieldChanges, FieldType};
    use chrono::{TimeZone, Utc};

    fn session() -> (AppState, SequentialIds) {
        (
            AppState::new(SessionOptions::default()),
            SequentialIds::new("id-"),
        )
    }

    mod mode_machine {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_in_list_with_samples() {
            let (state, _) = session();
            assert_eq!(state.current_view, View::List);
            assert!(state.builder.is_none());
            assert_eq!(state.collection.len(), 2);
        }

        #[test]
        fn test_without_samples_starts_empty() {
            let state = AppState::new(SessionOptions {
                sample_forms: false,
                starter_fields: true,
            });
            assert!(state.collection.is_empty());
        }

        #[test]
        fn test_create_form_opens_draft() {
            let (mut state, mut ids) = session();
            state.create_form(&mut ids);
            assert_eq!(state.current_view, View::Create);
            let builder = state.builder.as_ref().unwrap();
            assert_eq!(builder.draft.fields().len(), 2);
        }

        #[test]
        fn test_create_form_without_starter_fields() {
            let mut state = AppState::new(SessionOptions {
                sample_forms: true,
                starter_fields: false,
            });
            let mut ids = SequentialIds::new("id-");
            state.create_form(&mut ids);
            assert!(state.builder.as_ref().unwrap().draft.fields().is_empty());
        }

        #[test]
        fn test_create_form_twice_keeps_open_draft() {
            let (mut state, mut ids) = session();
            state.create_form(&mut ids);
            if let Some(builder) = state.builder.as_mut() {
                builder.draft.set_title("Keep me");
            }
            state.create_form(&mut ids);
            assert_eq!(state.builder.as_ref().unwrap().draft.title(), "Keep me");
        }

        #[test]
        fn test_cancel_discards_draft() {
            let (mut state, mut ids) = session();
            state.create_form(&mut ids);
            if let Some(builder) = state.builder.as_mut() {
                builder.draft.set_title("Thrown away");
            }
            state.cancel_draft();

            assert_eq!(state.current_view, View::List);
            assert!(state.builder.is_none());
            assert_eq!(state.collection.len(), 2);
        }

        #[test]
        fn test_reopening_after_cancel_starts_fresh() {
            let (mut state, mut ids) = session();
            state.create_form(&mut ids);
            if let Some(builder) = state.builder.as_mut() {
                builder.draft.set_title("Old");
            }
            state.cancel_draft();
            state.create_form(&mut ids);
            assert_eq!(state.builder.as_ref().unwrap().draft.title(), "");
        }
    }

    mod save {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_save_with_empty_title_keeps_draft_open() {
            let (mut state, mut ids) = session();
            state.create_form(&mut ids);
            if let Some(builder) = state.builder.as_mut() {
                builder.draft.set_title("   ");
                builder.draft.set_description("Still here");
            }
            let before = state.builder.as_ref().unwrap().draft.clone();

            let result = state.save_draft(&mut ids, &SystemClock);

            assert_eq!(result, Err(DraftError::EmptyTitle));
            assert_eq!(state.current_view, View::Create);
            assert_eq!(state.builder.as_ref().unwrap().draft, before);
            assert_eq!(state.collection.len(), 2);
        }

        #[test]
        fn test_save_without_draft_is_noop() {
            let (mut state, mut ids) = session();
            assert_eq!(state.save_draft(&mut ids, &SystemClock), Ok(None));
            assert_eq!(state.collection.len(), 2);
        }

        #[test]
        fn test_save_commits_and_returns_to_list() {
            let (mut state, mut ids) = session();
            let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
            let mut clock = MockClock::new();
            clock.expect_now().times(1).returning(move || now);

            state.create_form(&mut ids);
            if let Some(builder) = state.builder.as_mut() {
                builder.draft.set_title("Contact Us");
                builder.draft.set_description("Say hello");
            }
            let id = state.save_draft(&mut ids, &clock).unwrap().unwrap();

            assert_eq!(state.current_view, View::List);
            assert!(state.builder.is_none());
            assert_eq!(state.collection.len(), 3);
            let saved = &state.collection.list()[0];
            assert_eq!(saved.id, id);
            assert_eq!(saved.title, "Contact Us");
            assert_eq!(saved.description, "Say hello");
            assert_eq!(saved.created_at, now);
        }

        #[test]
        fn test_survey_scenario() {
            let mut state = AppState::new(SessionOptions {
                sample_forms: false,
                starter_fields: false,
            });
            let existing = state.collection.create_from(
                DraftPayload {
                    title: "Customer Feedback".to_string(),
                    description: String::new(),
                },
                &mut SequentialIds::new(""),
                &SystemClock,
            );
            assert_eq!(existing, "1");

            let mut ids = SequentialIds::new("gen-");
            state.create_form(&mut ids);
            let builder = state.builder.as_mut().unwrap();
            let field_id = builder.draft.add_field(&mut ids, FieldType::Select);
            let field = builder.draft.field(&field_id).unwrap();
            assert_eq!(field.label, "Dropdown");
            assert_eq!(field.placeholder, "");
            builder.draft.set_title("Survey");

            let id = state.save_draft(&mut ids, &SystemClock).unwrap().unwrap();

            assert_eq!(state.collection.len(), 2);
            assert_eq!(state.collection.list()[0].title, "Survey");
            assert_eq!(state.collection.list()[0].id, id);
            assert_ne!(id, "1");
            assert_eq!(state.collection.list()[1].title, "Customer Feedback");
        }

        #[test]
        fn test_save_does_not_carry_fields() {
            let (mut state, mut ids) = session();
            state.create_form(&mut ids);
            if let Some(builder) = state.builder.as_mut() {
                builder.draft.set_title("Fields dropped");
                let id = builder.draft.add_field(&mut ids, FieldType::Date);
                builder.draft.update_field(&id, FieldChanges::label("When"));
            }
            state.save_draft(&mut ids, &SystemClock).unwrap();

            let json = serde_json::to_value(&state.collection.list()[0]).unwrap();
            assert!(json.get("fields").is_none());
        }
    }

    mod selection_and_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_selection_bounds() {
            let (mut state, _) = session();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
            state.move_selection_down(2);
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_move_selection_down_on_empty() {
            let (mut state, _) = session();
            state.move_selection_down(0);
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_error_queue_is_fifo() {
            let (mut state, _) = session();
            assert!(!state.has_errors());
            state.push_error("Cannot save form", "first");
            state.push_error("Something else", "second");
            assert_eq!(
                state.current_error(),
                Some(&ErrorNotice {
                    title: "Cannot save form".to_string(),
                    message: "first".to_string(),
                })
            );
            state.dismiss_error();
            let notice = state.current_error().unwrap();
            assert_eq!(notice.title, "Something else");
            assert_eq!(notice.message, "second");
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
