//! Domain entities consumed by the unread listing.

pub mod category;
pub mod settings;
pub mod topic;
pub mod types;
pub mod unread;
