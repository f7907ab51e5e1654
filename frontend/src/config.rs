//! Deployment constants for the hosted collaborators.
//!
//! The console itself stores nothing: identity, documents and media all
//! live behind these endpoints. Point them at another deployment to run
//! the console against it. The video-host allow-list lives next to the
//! rest of the field policy in `common::validation`.

/// Identity provider (email+password REST endpoints).
pub const IDENTITY_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
pub const IDENTITY_API_KEY: &str = "AIzaSyBpW3dev-path-admin-console-web-key";

/// Document store; collections hang directly off this base URL.
pub const DATABASE_URL: &str = "https://dev-path-default-rtdb.firebaseio.com";

/// Media upload endpoint (unsigned preset uploads).
pub const UPLOAD_BASE: &str = "https://api.cloudinary.com/v1_1";
pub const MEDIA_CLOUD_NAME: &str = "dl3mpo0w3";
pub const MEDIA_UPLOAD_PRESET: &str = "dev-path";
