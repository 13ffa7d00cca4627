//! Platform-independent logic shared by the views: projection of records
//! into view models, filtering, link handling and the mail handoff.

pub mod filter;
pub mod format;
pub mod links;
pub mod mail;
pub mod platform;
pub mod profile;
pub mod projection;
