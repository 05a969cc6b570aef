//! `cantina-auth` — login/registration boundary.
//!
//! No implicit client-local "logged in" flag anywhere: a successful login
//! yields an explicit [`Session`] object that protected operations validate
//! on every use. Email delivery of one-time codes is out of scope; codes
//! are issued to whatever sink the caller wires in.

pub mod code;
pub mod credentials;
pub mod session;

pub use code::{CodeError, OneTimeCode};
pub use credentials::{Credentials, CredentialsError};
pub use session::{Session, SessionError};
