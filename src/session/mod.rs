//! Server-side sessions.
//!
//! A [`Session`] is created when a user logs in and registered in a
//! [`SessionStore`] under its id. Later requests find it again through the
//! `JSESSIONID` cookie.

mod http_session;
mod store;

pub use http_session::{Attribute, Session, USER_ATTRIBUTE};
pub use store::SessionStore;
