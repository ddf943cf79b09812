//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::env::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::state::{AppState, BuilderFocus, DraftTab, FieldType, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Error dialog title for rejected saves
const SAVE_ERROR_TITLE: &str = "Cannot save form";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Source of field and form ids
    ids: Box<dyn IdGenerator>,
    /// Source of creation timestamps
    clock: Box<dyn Clock>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self::with_environment(config, Box::new(UuidGenerator), Box::new(SystemClock))
    }

    /// Create an App with explicit id and time sources
    pub fn with_environment(
        config: TuiConfig,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            state: AppState::new(config.session_options()),
            config,
            ids,
            clock,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::List => self.handle_list_key(key),
            View::Create => self.handle_create_key(key),
        }
        Ok(())
    }

    /// Handle keys in the forms list
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('n') => self.state.create_form(self.ids.as_mut()),
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.state.collection.len();
                self.state.move_selection_down(max);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            _ => {}
        }
    }

    /// Handle keys while a draft is open
    fn handle_create_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let Some(builder) = self.state.builder.as_mut() else {
            return;
        };

        // Type picker (modal)
        if builder.picker.is_some() {
            match key.code {
                KeyCode::Esc => builder.close_picker(),
                KeyCode::Enter => builder.confirm_picker(self.ids.as_mut()),
                KeyCode::Up | KeyCode::Char('k') => {
                    if let Some(picker) = builder.picker.as_mut() {
                        picker.prev();
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if let Some(picker) = builder.picker.as_mut() {
                        picker.next();
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.cancel_form(),
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | crate::platform::SAVE_MODIFIER) =>
            {
                self.save_form();
            }
            KeyCode::Char('p') if ctrl => {
                let tab = builder.tab.toggle();
                builder.switch_tab(tab);
            }
            _ => match builder.tab {
                DraftTab::Build => self.handle_build_key(key),
                DraftTab::Preview => match key.code {
                    KeyCode::Down | KeyCode::Char('j') => builder.scroll_preview_down(),
                    KeyCode::Up | KeyCode::Char('k') => builder.scroll_preview_up(),
                    _ => {}
                },
            },
        }
    }

    /// Handle editing keys on the build tab
    fn handle_build_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let Some(builder) = self.state.builder.as_mut() else {
            return;
        };
        let focused_field = builder.focus.field_id().map(str::to_string);

        match key.code {
            KeyCode::Tab => builder.next_focus(),
            KeyCode::BackTab => builder.prev_focus(),
            KeyCode::Char('n') if ctrl => builder.open_picker(),
            KeyCode::Char('t') if ctrl => builder.add_field(self.ids.as_mut(), FieldType::Text),
            KeyCode::Char('y') if ctrl => builder.add_field(self.ids.as_mut(), FieldType::Textarea),
            KeyCode::Char('o') if ctrl => builder.add_field(self.ids.as_mut(), FieldType::Select),
            KeyCode::Char('e') if ctrl => {
                if let Some(id) = focused_field {
                    builder.toggle_expanded(&id);
                }
            }
            KeyCode::Char('d') if ctrl => {
                if let Some(id) = focused_field {
                    builder.remove_field(&id);
                }
            }
            KeyCode::Char('r') if ctrl => builder.cycle_focused_type(),
            KeyCode::Enter => {
                if builder.focus.is_multiline() {
                    builder.input_char('\n');
                } else if let BuilderFocus::Required(_) = builder.focus {
                    builder.input_char(' ');
                }
            }
            KeyCode::Char(c) if !ctrl => builder.input_char(c),
            KeyCode::Backspace => builder.backspace(),
            _ => {}
        }
    }

    /// Commit the open draft, or report why it cannot be saved
    fn save_form(&mut self) {
        let title = self
            .state
            .builder
            .as_ref()
            .map(|b| b.draft.title().trim().to_string())
            .unwrap_or_default();

        match self
            .state
            .save_draft(self.ids.as_mut(), self.clock.as_ref())
        {
            Ok(Some(_)) => self.status_message = Some(format!("Saved \"{title}\"")),
            Ok(None) => {}
            Err(e) => self.state.push_error(SAVE_ERROR_TITLE, e.to_string()),
        }
    }

    /// Discard the open draft
    fn cancel_form(&mut self) {
        self.state.cancel_draft();
        self.status_message = Some("Draft discarded".to_string());
    }
}
