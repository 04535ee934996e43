//! Sidebar open/collapse state machine
//!
//! `SidebarController` is the state behind a sidebar provider. It has no
//! knowledge of the renderer: every operation returns what the caller has to
//! do next (notify a controlling callback, persist a cookie) instead of doing
//! it.

use crate::cookie;
use crate::keyboard::{KeyPress, SidebarKeyAction};

/// Layout and persistence constants shared by every sidebar.
pub struct SidebarConstants;

impl SidebarConstants {
    pub const WIDTH: &'static str = "320px";
    pub const WIDTH_MOBILE: &'static str = "288px";
    pub const WIDTH_ICON: &'static str = "48px";
    pub const KEYBOARD_SHORTCUT: &'static str = "b";
    /// Viewports narrower than this many pixels are mobile.
    pub const MOBILE_BREAKPOINT: u32 = 768;
    pub const COOKIE_NAME: &'static str = "sidebar:state";
    /// Seven days, in seconds.
    pub const COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 7;

    /// Media query matching viewports below the mobile breakpoint.
    pub fn mobile_media_query() -> String {
        format!("(max-width: {}px)", Self::MOBILE_BREAKPOINT - 1)
    }
}

/// Desktop sidebar state, derived from the open flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    Expanded,
    Collapsed,
}

string_enum!(SidebarState {
    Expanded => "expanded",
    Collapsed => "collapsed",
});

impl SidebarState {
    pub fn from_open(open: bool) -> Self {
        if open {
            SidebarState::Expanded
        } else {
            SidebarState::Collapsed
        }
    }
}

/// How the sidebar collapses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarCollapsible {
    /// Slides fully off-screen
    #[default]
    Offcanvas,
    /// Shrinks to icon width
    Icon,
    /// Never collapses; triggers and shortcuts are disabled
    None,
}

string_enum!(SidebarCollapsible {
    Offcanvas => "offcanvas",
    Icon => "icon",
    None => "none",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarSide {
    #[default]
    Left,
    Right,
}

string_enum!(SidebarSide {
    Left => "left",
    Right => "right",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarVariant {
    #[default]
    Sidebar,
    Floating,
    Inset,
    DualTier,
    Docs,
}

string_enum!(SidebarVariant {
    Sidebar => "sidebar",
    Floating => "floating",
    Inset => "inset",
    DualTier => "dual-tier",
    Docs => "docs",
});

/// Result of a desktop open-state change.
///
/// When `delegated` is set the internal state was left alone and the caller
/// must hand `open` to the controlling callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenChange {
    pub open: bool,
    pub delegated: bool,
}

impl OpenChange {
    /// Cookie assignment persisting this change.
    pub fn cookie(&self) -> String {
        cookie::encode_sidebar_cookie(self.open)
    }
}

/// What a keydown did to the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// The toggle shortcut fired. The browser default must be prevented.
    /// Carries the desktop change, if the toggle was a desktop one.
    Toggled(Option<OpenChange>),
    /// Escape closed the mobile drawer
    ClosedMobile,
}

impl KeyOutcome {
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyOutcome::Toggled(_))
    }
}

/// Pure sidebar state: desktop open flag (controlled or not), mobile drawer
/// visibility and viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarController {
    internal_open: bool,
    open_prop: Option<bool>,
    controlled: bool,
    open_mobile: bool,
    is_mobile: bool,
    collapsible: SidebarCollapsible,
}

impl Default for SidebarController {
    fn default() -> Self {
        Self::new(true, SidebarCollapsible::default())
    }
}

impl SidebarController {
    pub fn new(default_open: bool, collapsible: SidebarCollapsible) -> Self {
        Self {
            internal_open: default_open,
            open_prop: None,
            controlled: false,
            open_mobile: false,
            is_mobile: false,
            collapsible,
        }
    }

    /// Route open changes to an external callback instead of internal state.
    pub fn with_change_callback(mut self, controlled: bool) -> Self {
        self.controlled = controlled;
        self
    }

    /// Update the externally supplied open value (`None` = uncontrolled).
    pub fn set_open_prop(&mut self, open_prop: Option<bool>) {
        self.open_prop = open_prop;
    }

    pub fn open_prop(&self) -> Option<bool> {
        self.open_prop
    }

    /// Effective desktop open flag: the external value wins when present.
    pub fn open(&self) -> bool {
        self.open_prop.unwrap_or(self.internal_open)
    }

    pub fn state(&self) -> SidebarState {
        SidebarState::from_open(self.open())
    }

    pub fn open_mobile(&self) -> bool {
        self.open_mobile
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn collapsible(&self) -> SidebarCollapsible {
        self.collapsible
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn set_is_mobile(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
    }

    pub fn set_open_mobile(&mut self, open_mobile: bool) {
        self.open_mobile = open_mobile;
    }

    /// Seed the uncontrolled open flag from a saved preference.
    ///
    /// Not a change: nothing is reported and no cookie is due. Ignored when
    /// the open state is controlled.
    pub fn restore_open(&mut self, open: bool) {
        if !self.controlled {
            self.internal_open = open;
        }
    }

    /// Set the desktop open flag.
    pub fn set_open(&mut self, open: bool) -> OpenChange {
        self.update_open(|_| open)
    }

    /// Set the desktop open flag from the current effective value.
    pub fn update_open(&mut self, f: impl FnOnce(bool) -> bool) -> OpenChange {
        let open = f(self.open());
        if !self.controlled {
            self.internal_open = open;
        }
        OpenChange {
            open,
            delegated: self.controlled,
        }
    }

    /// Flip the drawer on mobile, the desktop flag otherwise.
    pub fn toggle(&mut self) -> Option<OpenChange> {
        if self.is_mobile {
            self.open_mobile = !self.open_mobile;
            None
        } else {
            Some(self.update_open(|open| !open))
        }
    }

    /// Apply a window keydown.
    pub fn handle_key(&mut self, key: &KeyPress) -> KeyOutcome {
        match key.sidebar_action() {
            Some(SidebarKeyAction::Toggle) if self.collapsible != SidebarCollapsible::None => {
                KeyOutcome::Toggled(self.toggle())
            }
            Some(SidebarKeyAction::Dismiss) if self.open_mobile => {
                self.open_mobile = false;
                KeyOutcome::ClosedMobile
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Whether the desktop `aside` should render at all.
    pub fn renders_desktop_sidebar(&self) -> bool {
        !(self.is_mobile && self.collapsible == SidebarCollapsible::Offcanvas)
    }

    /// Whether collapsed menu buttons should show their tooltip.
    pub fn shows_menu_tooltips(&self) -> bool {
        self.state() == SidebarState::Collapsed && !self.is_mobile
    }

    /// Accessible label for the collapse trigger.
    pub fn trigger_label(&self) -> &'static str {
        if self.is_mobile {
            "Open menu"
        } else {
            match self.state() {
                SidebarState::Expanded => "Collapse sidebar",
                SidebarState::Collapsed => "Expand sidebar",
            }
        }
    }
}

/// Open state of a collapsible sidebar group, controlled or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOpenState {
    internal_open: bool,
    controlled: bool,
}

impl GroupOpenState {
    pub fn new(default_open: bool, controlled: bool) -> Self {
        Self {
            internal_open: default_open,
            controlled,
        }
    }

    pub fn open(&self, open_prop: Option<bool>) -> bool {
        open_prop.unwrap_or(self.internal_open)
    }

    /// Flip the group. Returns the new value the caller must report when the
    /// group is controlled.
    pub fn toggle(&mut self, open_prop: Option<bool>) -> Option<bool> {
        let next = !self.open(open_prop);
        if self.controlled {
            Some(next)
        } else {
            self.internal_open = next;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl_b() -> KeyPress {
        KeyPress::new("b").with_ctrl()
    }

    fn escape() -> KeyPress {
        KeyPress::new("Escape")
    }

    #[test]
    fn test_desktop_toggle_alternates_from_default_open() {
        for default_open in [true, false] {
            let mut c = SidebarController::new(default_open, SidebarCollapsible::Offcanvas);
            let mut expected = default_open;
            for _ in 0..7 {
                expected = !expected;
                let change = c.toggle().expect("desktop toggle reports a change");
                assert_eq!(change.open, expected);
                assert!(!change.delegated);
                assert_eq!(c.open(), expected);
                assert!(!c.open_mobile());
            }
        }
    }

    #[test]
    fn test_mobile_toggle_only_touches_drawer() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Icon);
        c.set_is_mobile(true);
        assert_eq!(c.toggle(), None);
        assert!(c.open_mobile());
        assert!(c.open());
        assert_eq!(c.toggle(), None);
        assert!(!c.open_mobile());
        assert!(c.open());
    }

    #[test]
    fn test_state_derives_from_open() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Icon);
        assert_eq!(c.state(), SidebarState::Expanded);
        c.set_open(false);
        assert_eq!(c.state(), SidebarState::Collapsed);
        assert_eq!(c.state().as_str(), "collapsed");
    }

    #[test]
    fn test_shortcut_toggles() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Offcanvas);
        let outcome = c.handle_key(&ctrl_b());
        assert!(outcome.prevents_default());
        assert_eq!(
            outcome,
            KeyOutcome::Toggled(Some(OpenChange {
                open: false,
                delegated: false
            }))
        );
        assert!(!c.open());

        let outcome = c.handle_key(&KeyPress::new("b").with_meta());
        assert!(outcome.prevents_default());
        assert!(c.open());
    }

    #[test]
    fn test_shortcut_ignored_when_not_collapsible() {
        let mut c = SidebarController::new(true, SidebarCollapsible::None);
        assert_eq!(c.handle_key(&ctrl_b()), KeyOutcome::Ignored);
        assert!(c.open());

        c.set_is_mobile(true);
        assert_eq!(c.handle_key(&ctrl_b()), KeyOutcome::Ignored);
        assert!(!c.open_mobile());
    }

    #[test]
    fn test_shortcut_on_mobile_toggles_drawer() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Offcanvas);
        c.set_is_mobile(true);
        assert_eq!(c.handle_key(&ctrl_b()), KeyOutcome::Toggled(None));
        assert!(c.open_mobile());
        assert!(c.open());
    }

    #[test]
    fn test_shortcut_with_extra_modifiers_is_ignored() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Offcanvas);
        assert_eq!(
            c.handle_key(&KeyPress::new("b").with_ctrl().with_shift()),
            KeyOutcome::Ignored
        );
        assert_eq!(
            c.handle_key(&KeyPress::new("b").with_meta().with_alt()),
            KeyOutcome::Ignored
        );
        assert_eq!(c.handle_key(&KeyPress::new("b")), KeyOutcome::Ignored);
        assert!(c.open());
    }

    #[test]
    fn test_escape_closes_open_drawer() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Offcanvas);
        c.set_open_mobile(true);
        let outcome = c.handle_key(&escape());
        assert_eq!(outcome, KeyOutcome::ClosedMobile);
        assert!(!outcome.prevents_default());
        assert!(!c.open_mobile());
    }

    #[test]
    fn test_escape_without_open_drawer_is_noop() {
        let mut c = SidebarController::new(false, SidebarCollapsible::Offcanvas);
        assert_eq!(c.handle_key(&escape()), KeyOutcome::Ignored);
        assert!(!c.open_mobile());
        assert!(!c.open());
    }

    #[test]
    fn test_escape_works_when_not_collapsible() {
        let mut c = SidebarController::new(true, SidebarCollapsible::None);
        c.set_open_mobile(true);
        assert_eq!(c.handle_key(&escape()), KeyOutcome::ClosedMobile);
    }

    #[test]
    fn test_controlled_delegates_and_never_diverges() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Offcanvas)
            .with_change_callback(true);
        c.set_open_prop(Some(true));

        for _ in 0..4 {
            let change = c.toggle().expect("desktop toggle reports a change");
            assert_eq!(
                change,
                OpenChange {
                    open: false,
                    delegated: true
                }
            );
            // Parent hasn't updated the prop yet
            assert!(c.open());
        }

        // Parent accepts the change
        c.set_open_prop(Some(false));
        assert!(!c.open());
        assert_eq!(c.toggle().map(|change| change.open), Some(true));
        assert!(!c.open());
    }

    #[test]
    fn test_open_prop_without_callback_still_wins() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Offcanvas);
        c.set_open_prop(Some(true));
        let change = c.set_open(false);
        assert!(!change.delegated);
        assert!(c.open());

        // Dropping the prop exposes the internal value
        c.set_open_prop(None);
        assert!(!c.open());
    }

    #[test]
    fn test_update_open_sees_effective_value() {
        let mut c = SidebarController::new(false, SidebarCollapsible::Icon);
        c.set_open_prop(Some(true));
        let change = c.update_open(|open| !open);
        assert!(!change.open);
    }

    #[test]
    fn test_restore_open_seeds_uncontrolled_state() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Offcanvas);
        c.restore_open(false);
        assert!(!c.open());
        assert_eq!(c.state(), SidebarState::Collapsed);

        let change = c.toggle().expect("desktop toggle reports a change");
        assert!(change.open);
        assert!(!change.delegated);
    }

    #[test]
    fn test_restore_open_ignored_when_controlled() {
        let mut c =
            SidebarController::new(true, SidebarCollapsible::Offcanvas).with_change_callback(true);
        c.set_open_prop(Some(true));
        c.restore_open(false);
        assert!(c.open());

        c.set_open_prop(None);
        assert!(c.open());
    }

    #[test]
    fn test_change_cookie() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Icon);
        let change = c.set_open(false);
        assert_eq!(
            change.cookie(),
            "sidebar:state=false; path=/; max-age=604800"
        );
    }

    #[test]
    fn test_desktop_sidebar_hidden_on_mobile_offcanvas() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Offcanvas);
        assert!(c.renders_desktop_sidebar());
        c.set_is_mobile(true);
        assert!(!c.renders_desktop_sidebar());

        let mut icon = SidebarController::new(true, SidebarCollapsible::Icon);
        icon.set_is_mobile(true);
        assert!(icon.renders_desktop_sidebar());
    }

    #[test]
    fn test_trigger_label() {
        let mut c = SidebarController::new(true, SidebarCollapsible::Icon);
        assert_eq!(c.trigger_label(), "Collapse sidebar");
        c.set_open(false);
        assert_eq!(c.trigger_label(), "Expand sidebar");
        assert!(c.shows_menu_tooltips());
        c.set_is_mobile(true);
        assert_eq!(c.trigger_label(), "Open menu");
        assert!(!c.shows_menu_tooltips());
    }

    #[test]
    fn test_mobile_media_query() {
        assert_eq!(SidebarConstants::mobile_media_query(), "(max-width: 767px)");
    }

    #[test]
    fn test_enum_strings() {
        assert_eq!(
            "dual-tier".parse::<SidebarVariant>(),
            Ok(SidebarVariant::DualTier)
        );
        assert_eq!(SidebarCollapsible::None.to_string(), "none");
        let err = "sideways".parse::<SidebarSide>().unwrap_err();
        assert_eq!(err.type_name(), "SidebarSide");
        assert_eq!(err.input(), "sideways");
    }

    #[test]
    fn test_group_uncontrolled_toggle() {
        let mut g = GroupOpenState::new(true, false);
        assert_eq!(g.toggle(None), None);
        assert!(!g.open(None));
        assert_eq!(g.toggle(None), None);
        assert!(g.open(None));
    }

    #[test]
    fn test_group_controlled_toggle_reports() {
        let mut g = GroupOpenState::new(true, true);
        assert_eq!(g.toggle(Some(false)), Some(true));
        assert!(!g.open(Some(false)));
    }
}
