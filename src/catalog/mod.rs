//! Tool catalog loading and lookup.
//!
//! This module loads the available tools and their charging policies from
//! YAML files and provides case-insensitive lookup by tool code. The
//! calculation engine never touches the catalog itself; it only accepts an
//! already-resolved [`Tool`](crate::models::Tool).
//!
//! # Example
//!
//! ```no_run
//! use rental_engine::catalog::CatalogLoader;
//!
//! let loader = CatalogLoader::load("./catalog").unwrap();
//! let tool = loader.catalog().find_by_code("ladw").unwrap();
//! println!("{} {}", tool.brand, tool.policy.name);
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{PoliciesConfig, PolicyConfig, ToolCatalog, ToolEntry, ToolsConfig};
