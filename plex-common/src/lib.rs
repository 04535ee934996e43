//! plex-common - View-state logic shared by the plex-ui components
//!
//! Everything here is plain data and pure functions so it can be unit tested
//! without a renderer or a browser.

#[macro_use]
mod parse;

pub mod code_block;
pub mod cookie;
pub mod field;
pub mod keyboard;
pub mod progress;
pub mod sidebar;

pub use parse::ParseEnumError;
