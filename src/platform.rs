//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts
/// - macOS: SUPER (Cmd key) also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password visibility toggle display
/// - macOS: "Cmd+P"
/// - Linux/Windows: "Ctrl+P"
#[cfg(target_os = "macos")]
pub const TOGGLE_PASSWORD_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const TOGGLE_PASSWORD_SHORTCUT: &str = "Ctrl+P";
