//! # nexis-client
//!
//! Client side of the nexis web front end: the HTTP adapter for the nexis
//! backend, observable UI state, auth actions and route load guards.
//!
//! ```rust,no_run
//! use nexis_client::{config::Config, http::ApiClient, pages::{Cookies, counter, user}};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let client = ApiClient::new(&config)?;
//! let total = counter::add_num(&client, 2).await;
//! let page = user::load(&client, &config, &Cookies::parse("id=42")).await;
//! # let _ = (total, page);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod pages;
pub mod stores;

#[cfg(test)]
mod testing;

pub use nexis_api as api;
