//! Clients for the hosted collaborators. Every remote call the screens
//! make goes through this layer; no vendor endpoint is touched elsewhere.

pub mod assets;
pub mod auth;
pub mod documents;
pub mod error;
