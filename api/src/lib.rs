//! Read-only access to the portfolio's hosted data store.
//!
//! The crate owns everything on the far side of the network boundary:
//! - `config` – endpoint + access key, resolved from the environment
//! - `query` / `source` – collection queries and the `DataSource` seam
//! - `rest` – PostgREST client over `reqwest`
//! - `memory` – in-memory `DataSource` for tests and previews
//! - `models` – record types as stored (bilingual column pairs)
//! - `content` – the fetch protocol used by the UI adapters

pub mod config;
pub mod content;
pub mod error;
pub mod memory;
pub mod models;
pub mod query;
pub mod rest;
pub mod source;

pub use config::{ConfigError, DataStoreConfig};
pub use content::{fetch_achievements, fetch_profile, fetch_projects, Achievements};
pub use error::FetchError;
pub use memory::MemorySource;
pub use models::{Competition, Course, Profile, Project, ProjectCategory};
pub use query::{Collection, Order, Query};
pub use rest::RestClient;
pub use source::{select_as, DataSource};
