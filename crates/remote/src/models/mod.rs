//! Typed rows for each remote table.

pub mod contact;
pub mod gallery;
pub mod project;
pub mod studio;
pub mod studio_content;
