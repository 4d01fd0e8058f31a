//! Domain and UI-state logic for the portfolio site.
//!
//! Nothing in this crate performs I/O. The web crate builds view state from
//! these types and the remote/feed crates implement [`contact::ContactChannel`].

pub mod audio;
pub mod carousel;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod notice;
pub mod orbit;
pub mod session;
pub mod types;
