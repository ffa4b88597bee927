//! Caption server communication.
//!
//! # Services
//!
//! - [`caption`] - Upload, process, cleanup and account status over `fetch`
//! - [`auth`] - Login and registration
//!
//! Both implement the transport traits from `autocaption`, so the
//! controllers run unchanged in the browser.

pub mod caption;
pub mod auth;

pub use caption::*;
