//! Database models backing the forum collaborators.

pub mod category;
pub mod config;
pub mod topic;
pub mod user;
