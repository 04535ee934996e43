//! Shared UI components for plex-mocks

mod collapsible_source;
mod link_card;

pub use collapsible_source::CollapsibleSource;
pub use link_card::LinkCard;
