//! Maud views. Each page module exposes a `page` function returning the
//! full document; shared pieces live in [`components`] and [`layout`].

pub mod art;
pub mod components;
pub mod error;
pub mod home;
pub mod layout;
pub mod project;
pub mod projects;
pub mod social;
pub mod studio;
