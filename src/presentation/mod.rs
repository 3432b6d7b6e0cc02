//! Presentation layer: view models and askama templates.

pub mod admin;
pub mod views;
