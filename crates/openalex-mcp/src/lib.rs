//! OpenAlex MCP Server
//!
//! A Model Context Protocol (MCP) server for the OpenAlex works API.
//! Lets LLM agents search scholarly works and look up single works by ID.
//!
//! # Features
//!
//! - **2 MCP Tools**: `openalex-search` and `openalex-get-work`
//! - **Condensed results**: search hits are projected to the fields agents need
//! - **Polite pool**: a contact email is forwarded to OpenAlex as `mailto`
//!
//! # Example
//!
//! ```no_run
//! use openalex_mcp::{client::OpenAlexClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = OpenAlexClient::new(config)?;
//!
//!     let work = client.get_work("W2741809807").await?;
//!     println!("{}", work["display_name"]);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::OpenAlexClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
