//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate extra modifier accepted for the save shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for help text
/// Ctrl+S works on all platforms
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Build/preview tab switch
pub const PREVIEW_SHORTCUT: &str = "Ctrl+P";

/// Open the add-field picker
pub const ADD_FIELD_SHORTCUT: &str = "Ctrl+N";
