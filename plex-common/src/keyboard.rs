//! Keyboard handling independent of the event source

use crate::sidebar::SidebarConstants;

/// A keydown, reduced to what shortcut matching needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    /// `KeyboardEvent.key` value ("b", "Escape", ...)
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

/// Sidebar-relevant meaning of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarKeyAction {
    /// Cmd/Ctrl + B
    Toggle,
    /// Escape
    Dismiss,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Cmd (macOS) or Ctrl (elsewhere) held, without Alt or Shift.
    pub fn has_platform_modifier(&self) -> bool {
        (self.meta || self.ctrl) && !self.alt && !self.shift
    }

    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }

    pub fn is_sidebar_shortcut(&self) -> bool {
        self.key == SidebarConstants::KEYBOARD_SHORTCUT && self.has_platform_modifier()
    }

    pub fn sidebar_action(&self) -> Option<SidebarKeyAction> {
        if self.is_sidebar_shortcut() {
            Some(SidebarKeyAction::Toggle)
        } else if self.is_escape() {
            Some(SidebarKeyAction::Dismiss)
        } else {
            None
        }
    }
}

/// Human-readable hint for the sidebar shortcut, e.g. "⌘B" or "Ctrl+B".
pub fn sidebar_shortcut_hint(mac: bool) -> String {
    let key = SidebarConstants::KEYBOARD_SHORTCUT.to_uppercase();
    if mac {
        format!("⌘{key}")
    } else {
        format!("Ctrl+{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_requires_modifier() {
        assert!(!KeyPress::new("b").is_sidebar_shortcut());
        assert!(KeyPress::new("b").with_ctrl().is_sidebar_shortcut());
        assert!(KeyPress::new("b").with_meta().is_sidebar_shortcut());
    }

    #[test]
    fn test_shortcut_is_case_sensitive() {
        // Shift+B produces "B" and is excluded anyway
        assert!(!KeyPress::new("B").with_ctrl().is_sidebar_shortcut());
    }

    #[test]
    fn test_alt_or_shift_disqualify() {
        assert!(!KeyPress::new("b").with_ctrl().with_alt().has_platform_modifier());
        assert!(!KeyPress::new("b").with_meta().with_shift().has_platform_modifier());
    }

    #[test]
    fn test_sidebar_action() {
        assert_eq!(
            KeyPress::new("Escape").sidebar_action(),
            Some(SidebarKeyAction::Dismiss)
        );
        assert_eq!(
            KeyPress::new("b").with_ctrl().sidebar_action(),
            Some(SidebarKeyAction::Toggle)
        );
        assert_eq!(KeyPress::new("x").with_ctrl().sidebar_action(), None);
    }

    #[test]
    fn test_shortcut_hint() {
        assert_eq!(sidebar_shortcut_hint(true), "⌘B");
        assert_eq!(sidebar_shortcut_hint(false), "Ctrl+B");
    }
}
