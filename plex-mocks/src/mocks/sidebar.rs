//! Sidebar mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use plex_common::keyboard::sidebar_shortcut_hint;
use plex_ui::{
    use_sidebar, BellIcon, BookOpenIcon, Button, ButtonColor, ButtonSize, ButtonVariant,
    ChartIcon, FolderIcon, GlobeIcon, HomeIcon, KeyIcon, SettingsIcon, Sidebar, SidebarCard,
    SidebarCardContent, SidebarCardFooter, SidebarCardHeader, SidebarCardTitle,
    SidebarCardTitleLink, SidebarCardVariant, SidebarCollapsible, SidebarContent, SidebarFooter,
    SidebarFooterLinks, SidebarGroup, SidebarGroupContent, SidebarGroupLabel,
    SidebarGroupLabelSize, SidebarHeader, SidebarInput, SidebarInset, SidebarLayout,
    SidebarMenu, SidebarMenuBadge, SidebarMenuButton, SidebarMenuButtonIcon,
    SidebarMenuButtonLabel, SidebarMenuChevron, SidebarMenuItem, SidebarMenuSkeleton,
    SidebarMenuSub, SidebarMenuSubButton, SidebarMenuSubItem, SidebarMobile,
    SidebarMobileFooter, SidebarMobileHeader, SidebarMobileMenuButton, SidebarProvider,
    SidebarRail, SidebarSeparator, SidebarSide, SidebarTrigger, SidebarVariant, TerminalIcon,
    TextLink, UsersIcon,
};

/// One entry of the demo navigation
#[derive(Clone, Copy, PartialEq)]
struct NavItem {
    value: &'static str,
    label: &'static str,
    short_label: Option<&'static str>,
    badge: Option<&'static str>,
}

impl NavItem {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            short_label: None,
            badge: None,
        }
    }

    const fn short(mut self, short_label: &'static str) -> Self {
        self.short_label = Some(short_label);
        self
    }

    const fn badge(mut self, badge: &'static str) -> Self {
        self.badge = Some(badge);
        self
    }

    fn icon(&self) -> Element {
        match self.value {
            "home" => rsx! { HomeIcon {} },
            "projects" => rsx! { FolderIcon {} },
            "analytics" => rsx! { ChartIcon {} },
            "team" => rsx! { UsersIcon {} },
            "notifications" => rsx! { BellIcon {} },
            "docs" => rsx! { BookOpenIcon {} },
            "cli" => rsx! { TerminalIcon {} },
            "keys" => rsx! { KeyIcon {} },
            "domains" => rsx! { GlobeIcon {} },
            _ => rsx! { SettingsIcon {} },
        }
    }
}

const WORKSPACE: &[NavItem] = &[
    NavItem::new("home", "Home"),
    NavItem::new("projects", "Projects"),
    NavItem::new("analytics", "Analytics").short("Stats"),
    NavItem::new("team", "Team members").short("Team"),
    NavItem::new("notifications", "Notifications").badge("3"),
];

const RESOURCES: &[NavItem] = &[
    NavItem::new("docs", "Documentation").short("Docs"),
    NavItem::new("cli", "CLI"),
    NavItem::new("keys", "API keys").short("Keys"),
    NavItem::new("domains", "Domains"),
];

const PROJECTS: &[(&str, &str)] = &[
    ("web", "Web app"),
    ("api", "API gateway"),
    ("docs-site", "Docs site"),
];

/// Options shared by the desktop sidebar and the mobile drawer
#[derive(Clone, Copy, PartialEq)]
struct NavOptions {
    icons: bool,
    loading: bool,
    collapsible_groups: bool,
    label_size: SidebarGroupLabelSize,
}

#[component]
pub fn SidebarMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "variant",
            "Variant",
            "sidebar",
            vec![
                ("sidebar", "Sidebar"),
                ("floating", "Floating"),
                ("inset", "Inset"),
                ("dual-tier", "Dual tier"),
                ("docs", "Docs"),
            ],
        )
        .enum_control(
            "collapsible",
            "Collapsible",
            "offcanvas",
            vec![
                ("offcanvas", "Offcanvas"),
                ("icon", "Icon"),
                ("none", "None"),
            ],
        )
        .enum_control("side", "Side", "left", vec![("left", "Left"), ("right", "Right")])
        .inline()
        .bool_control("default_open", "Start open", true)
        .bool_control("controlled", "Controlled", false)
        .doc("Open state owned by the page; the sidebar only reports changes")
        .bool_control("restore", "Restore from cookie", false)
        .doc("Start from the sidebar:state cookie left by the last toggle")
        .visible_when("controlled", "0")
        .bool_control("icons", "Icons", true)
        .bool_control("search", "Search", true)
        .bool_control("collapsible_groups", "Collapsible groups", false)
        .bool_control("rail", "Rail", true)
        .visible_when("collapsible", "icon")
        .bool_control("loading", "Loading", false)
        .bool_control("cards", "Footer card", false)
        .bool_control("mobile", "Mobile drawer", false)
        .doc("Preview the drawer inside the frame, whatever the window size")
        .with_presets(vec![
            Preset::new("Base"),
            Preset::new("Collapsible Icon").set_string("collapsible", "icon"),
            Preset::new("Controlled")
                .set_bool("controlled", true)
                .set_string("collapsible", "icon"),
            Preset::new("Mobile").set_bool("mobile", true),
            Preset::new("Docs")
                .set_string("variant", "docs")
                .set_bool("collapsible_groups", true)
                .set_bool("icons", false),
            Preset::new("Text Only")
                .set_string("collapsible", "none")
                .set_bool("icons", false)
                .set_bool("search", false),
            Preset::new("Loading").set_bool("loading", true),
            Preset::new("Footer Cards")
                .set_bool("cards", true)
                .set_string("variant", "floating"),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::Sidebar);

    let variant: SidebarVariant = registry.get_parsed("variant");
    let collapsible: SidebarCollapsible = registry.get_parsed("collapsible");
    let side: SidebarSide = registry.get_parsed("side");
    let default_open = registry.get_bool("default_open");
    let controlled = registry.get_bool("controlled");
    let restore = registry.get_bool("restore") && !controlled;
    let search = registry.get_bool("search");
    let rail = registry.get_bool("rail") && collapsible == SidebarCollapsible::Icon;
    let cards = registry.get_bool("cards");
    let mobile = registry.get_bool("mobile");
    let options = NavOptions {
        icons: registry.get_bool("icons"),
        loading: registry.get_bool("loading"),
        collapsible_groups: registry.get_bool("collapsible_groups"),
        label_size: if variant == SidebarVariant::Docs {
            SidebarGroupLabelSize::Lg
        } else {
            SidebarGroupLabelSize::Sm
        },
    };

    let mut external_open = use_signal(|| true);
    let mut query = use_signal(String::new);
    let active = use_signal(|| "home");

    // Collapsible mode and initial state are fixed per provider, so remount on change
    let provider_key = format!("{collapsible}-{default_open}-{controlled}-{restore}");

    rsx! {
        MockPanel {
            current_mock: MockPage::Sidebar,
            registry,
            max_width: "6xl",
            div { class: "relative h-[640px] overflow-hidden rounded-lg border border-white/5",
                SidebarProvider {
                    key: "{provider_key}",
                    default_open,
                    open: controlled.then(|| external_open()),
                    on_open_change: controlled.then(|| EventHandler::new(move |open| external_open.set(open))),
                    collapsible,
                    restore_state: restore,
                    class: "h-full",
                    SidebarLayout { class: "h-full",
                        Sidebar { side, variant,
                            SidebarHeader {
                                div { class: "flex items-center justify-between gap-2",
                                    span { class: "px-2 font-semibold text-white truncate group-data-[collapsible=icon]/sidebar:hidden",
                                        "Acme Cloud"
                                    }
                                    SidebarTrigger {}
                                }
                                if search {
                                    SidebarInput {
                                        value: query(),
                                        on_input: move |v| query.set(v),
                                        shortcut: "⌘K",
                                    }
                                }
                            }
                            SidebarContent {
                                NavGroups { options, active }
                            }
                            SidebarFooter {
                                if cards {
                                    UpgradeCard {}
                                }
                                if variant == SidebarVariant::Docs {
                                    SidebarFooterLinks {
                                        a { href: "#", "Changelog" }
                                        a { href: "#", "Status" }
                                        a { href: "#", "Privacy" }
                                    }
                                } else {
                                    SidebarMenu {
                                        SidebarMenuItem {
                                            SidebarMenuButton { tooltip: "Settings",
                                                SidebarMenuButtonIcon { SettingsIcon {} }
                                                SidebarMenuButtonLabel { "Settings" }
                                            }
                                        }
                                    }
                                }
                            }
                            if rail {
                                SidebarRail {}
                            }
                        }
                        SidebarInset { class: "overflow-auto",
                            if mobile {
                                MobileDrawer { options, active }
                            }
                            div { class: "flex items-center gap-2 h-12 px-4 border-b border-white/5",
                                SidebarTrigger {}
                                span { class: "text-sm text-gray-400", "Dashboard" }
                            }
                            div { class: "p-6 space-y-6",
                                SidebarStatus {}
                                if controlled {
                                    div { class: "flex items-center gap-3",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            color: ButtonColor::Secondary,
                                            size: ButtonSize::Sm,
                                            onclick: move |_| external_open.toggle(),
                                            "Toggle from page"
                                        }
                                        span { class: "text-sm text-gray-500",
                                            "Page state: {external_open}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Both navigation groups, or skeleton rows while loading
#[component]
fn NavGroups(options: NavOptions, active: Signal<&'static str>) -> Element {
    if options.loading {
        return rsx! {
            SidebarGroup {
                SidebarGroupContent {
                    for (i , width) in ["70%", "55%", "80%", "45%", "60%"].into_iter().enumerate() {
                        SidebarMenuSkeleton { key: "{i}", show_icon: options.icons, label_width: width.to_string() }
                    }
                }
            }
        };
    }

    rsx! {
        SidebarGroup {
            SidebarGroupLabel { size: options.label_size, collapsible_group: options.collapsible_groups,
                "Workspace"
            }
            SidebarGroupContent {
                SidebarMenu {
                    for item in WORKSPACE.iter().copied() {
                        if item.value == "projects" {
                            ProjectsItem { key: "{item.value}", item, options, active }
                        } else {
                            NavLink { key: "{item.value}", item, options, active }
                        }
                    }
                }
            }
        }
        SidebarSeparator {}
        SidebarGroup { default_open: !options.collapsible_groups,
            SidebarGroupLabel { size: options.label_size, collapsible_group: options.collapsible_groups,
                "Resources"
            }
            SidebarGroupContent {
                SidebarMenu {
                    for item in RESOURCES.iter().copied() {
                        NavLink { key: "{item.value}", item, options, active }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(item: NavItem, options: NavOptions, mut active: Signal<&'static str>) -> Element {
    let sidebar = use_sidebar();

    rsx! {
        SidebarMenuItem {
            SidebarMenuButton {
                is_active: active() == item.value,
                tooltip: item.label.to_string(),
                onclick: move |_| {
                    active.set(item.value);
                    sidebar.set_open_mobile(false);
                },
                if options.icons {
                    SidebarMenuButtonIcon { {item.icon()} }
                }
                SidebarMenuButtonLabel { short_label: item.short_label.map(str::to_string),
                    "{item.label}"
                }
                if let Some(badge) = item.badge {
                    SidebarMenuBadge { "{badge}" }
                }
            }
        }
    }
}

/// Menu item with a nested list of projects
#[component]
fn ProjectsItem(item: NavItem, options: NavOptions, mut active: Signal<&'static str>) -> Element {
    let mut expanded = use_signal(|| true);
    let sidebar = use_sidebar();

    rsx! {
        SidebarMenuItem { expanded: expanded(),
            SidebarMenuButton {
                is_active: PROJECTS.iter().any(|(value, _)| active() == *value),
                tooltip: item.label.to_string(),
                onclick: move |_| expanded.toggle(),
                if options.icons {
                    SidebarMenuButtonIcon { {item.icon()} }
                }
                SidebarMenuButtonLabel { "{item.label}" }
                SidebarMenuChevron {}
            }
            SidebarMenuSub { open: expanded(), has_icons: options.icons,
                for (value , label) in PROJECTS.iter().copied() {
                    SidebarMenuSubItem { key: "{value}",
                        SidebarMenuSubButton {
                            is_active: active() == value,
                            indent: if value == "docs-site" { 1 } else { 0 },
                            onclick: move |_| {
                                active.set(value);
                                sidebar.set_open_mobile(false);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UpgradeCard() -> Element {
    let mut dismissed = use_signal(|| false);

    if dismissed() {
        return rsx! {};
    }

    rsx! {
        SidebarCard {
            variant: SidebarCardVariant::Elevated,
            dismissible: true,
            on_dismiss: move |_| dismissed.set(true),
            SidebarCardHeader {
                SidebarCardTitle { "Usage at 80%" }
            }
            SidebarCardContent { "You've used 8 of 10 GB of build cache this month." }
            SidebarCardFooter {
                SidebarCardTitleLink { href: "/", "Upgrade plan" }
            }
        }
    }
}

/// Drawer preview: a mobile top bar plus the contained drawer
#[component]
fn MobileDrawer(options: NavOptions, active: Signal<&'static str>) -> Element {
    let sidebar = use_sidebar();

    rsx! {
        div { class: "flex items-center gap-2 h-12 px-3 border-b border-white/5",
            SidebarMobileMenuButton {}
            span { class: "text-sm font-semibold text-white", "Acme Cloud" }
        }
        SidebarMobile { contained: true,
            SidebarMobileHeader {
                span { class: "font-semibold text-white", "Acme Cloud" }
                SidebarMobileMenuButton {}
            }
            div { class: "flex-1 overflow-y-auto",
                NavGroups { options, active }
            }
            SidebarMobileFooter {
                TextLink {
                    class: "text-sm text-gray-400",
                    onclick: move |_| sidebar.set_open_mobile(false),
                    "Close"
                }
            }
        }
    }
}

/// Live readout of the sidebar context
#[component]
fn SidebarStatus() -> Element {
    let sidebar = use_sidebar();
    let snapshot = sidebar.snapshot();
    let shortcut = format!(
        "{} / {}",
        sidebar_shortcut_hint(false),
        sidebar_shortcut_hint(true)
    );
    let rows = [
        ("state", snapshot.state().to_string()),
        ("open", snapshot.open().to_string()),
        ("open_mobile", snapshot.open_mobile().to_string()),
        ("is_mobile", snapshot.is_mobile().to_string()),
        ("collapsible", snapshot.collapsible().to_string()),
        ("controlled", snapshot.is_controlled().to_string()),
    ];

    rsx! {
        div { class: "max-w-sm rounded-lg border border-white/5 p-4",
            h3 { class: "text-sm font-medium text-white mb-3", "Context" }
            dl { class: "grid grid-cols-2 gap-y-1 font-mono text-xs",
                for (name , value) in rows {
                    dt { key: "{name}-k", class: "text-gray-500", "{name}" }
                    dd { key: "{name}-v", class: "text-gray-200", "{value}" }
                }
            }
            p { class: "mt-3 text-xs text-gray-500",
                "Toggle with {shortcut}; Escape closes the drawer."
            }
        }
    }
}
