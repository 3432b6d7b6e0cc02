//! Postdesk: an admin surface for editing and deleting blog posts by slug.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
