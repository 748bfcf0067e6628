//! ds-site - Server-rendered pages for the DS Allroundservices website.
//!
//! This crate provides a small HTTP server that renders the public pages of
//! a business website: contact, legal notice (Impressum), and login. Page
//! content is pulled from a key/value settings table and falls back to a
//! fixed record when the store is unavailable, so the site stays up even
//! when the database is down.
//!
//! # Architecture
//!
//! - **Settings**: Reads the flat `settings` table and coerces each loosely
//!   typed stored value into a typed runtime value (`settings`)
//! - **Render**: A fixed render pipeline drives every page through the same
//!   phases (title, head metadata, body, footer), with per-page hooks
//!   supplying the content (`render`, `pages`)
//! - **Routes**: One handler per page ensures the session form token,
//!   renders, and converts any failure into a minimal error page (`routes`)
//!
//! # Security
//!
//! - Every settings value is HTML-escaped exactly once at the point of
//!   interpolation (`escape`)
//! - Strict Content-Security-Policy: no JavaScript execution
//! - X-Frame-Options: DENY prevents clickjacking
//! - Failures never leak internal detail to the client; the error page
//!   carries a generic message while the detail goes to the log

pub mod config;
pub mod consent;
pub mod error;
pub mod escape;
pub mod pages;
pub mod render;
pub mod routes;
pub mod session;
pub mod settings;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
