//! Composable navigation sidebar
//!
//! ```ignore
//! SidebarProvider { collapsible: SidebarCollapsible::Icon,
//!     SidebarLayout {
//!         Sidebar {
//!             SidebarHeader { SidebarTrigger {} }
//!             SidebarContent {
//!                 SidebarGroup {
//!                     SidebarGroupLabel { "Workspace" }
//!                     SidebarGroupContent {
//!                         SidebarMenu {
//!                             SidebarMenuItem {
//!                                 SidebarMenuButton { is_active: true, tooltip: "Home",
//!                                     SidebarMenuButtonIcon { HomeIcon {} }
//!                                     SidebarMenuButtonLabel { "Home" }
//!                                 }
//!                             }
//!                         }
//!                     }
//!                 }
//!             }
//!         }
//!         SidebarInset { "..." }
//!     }
//! }
//! ```

mod card;
mod context;
mod group;
mod input;
mod layout;
mod menu;
mod mobile;
mod trigger;

pub use card::{
    SidebarCard, SidebarCardContent, SidebarCardFooter, SidebarCardHeader, SidebarCardTitle,
    SidebarCardTitleLink, SidebarCardVariant,
};
pub use context::{use_sidebar, SidebarContext, SidebarProvider};
pub use group::{
    use_sidebar_group, SidebarGroup, SidebarGroupAction, SidebarGroupContent,
    SidebarGroupContext, SidebarGroupLabel, SidebarGroupLabelSize,
};
pub use input::SidebarInput;
pub use layout::{
    Sidebar, SidebarContent, SidebarFooter, SidebarFooterLinks, SidebarHeader, SidebarInset,
    SidebarLayout, SidebarRail, SidebarSeparator,
};
pub use menu::{
    SidebarMenu, SidebarMenuAction, SidebarMenuBadge, SidebarMenuButton, SidebarMenuButtonIcon,
    SidebarMenuButtonLabel, SidebarMenuChevron, SidebarMenuItem, SidebarMenuSkeleton,
    SidebarMenuSub, SidebarMenuSubButton, SidebarMenuSubItem,
};
pub use mobile::{SidebarMobile, SidebarMobileFooter, SidebarMobileHeader};
pub use trigger::{SidebarMobileMenuButton, SidebarTrigger};
