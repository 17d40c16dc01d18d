//! # Core Settings
//!
//! Everything the front end needs before it makes a request: where the API
//! lives and how the site describes itself. No I/O beyond reading the config
//! file.
//!
//! ```text
//!   defaults ─┐
//!   config.toml ─┼─▶ config::resolve() ─▶ ResolvedConfig ─▶ BibleClient
//!   env vars ─┤
//!   CLI flags ─┘
//!
//!   site::head() ─▶ Head ─▶ <title>, <meta>, <link>
//! ```
//!
//! ## Modules
//!
//! - [`config`]: layered runtime config (API base URL, display settings)
//! - [`site`]: static head metadata for the public site

pub mod config;
pub mod site;
