//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the tool
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PosError, PosResult};
use crate::models::Tool;

use super::types::{PoliciesConfig, ToolCatalog, ToolsConfig};

/// Loads and provides access to the tool catalog.
///
/// The `CatalogLoader` reads YAML files from a directory and resolves every
/// tool's policy reference up front, so a dangling reference fails at load
/// time rather than at checkout.
///
/// # Directory Structure
///
/// ```text
/// catalog/
/// ├── policies.yaml   # Charging policies by tool kind
/// └── tools.yaml      # Tool codes, brands, policy references
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_engine::catalog::CatalogLoader;
///
/// let loader = CatalogLoader::load("./catalog").unwrap();
/// let tool = loader.catalog().find_by_code("LADW").unwrap();
/// println!("Daily charge: ${}", tool.policy.daily_charge);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: ToolCatalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either YAML file is missing or malformed, or if a
    /// tool references a policy key that `policies.yaml` does not define.
    pub fn load<P: AsRef<Path>>(path: P) -> PosResult<Self> {
        let path = path.as_ref();

        let policies_path = path.join("policies.yaml");
        let policies_config = Self::load_yaml::<PoliciesConfig>(&policies_path)?;

        let tools_path = path.join("tools.yaml");
        let tools_config = Self::load_yaml::<ToolsConfig>(&tools_path)?;

        let mut tools = Vec::with_capacity(tools_config.tools.len());
        for (code, entry) in tools_config.tools {
            let policy = policies_config
                .policies
                .get(&entry.policy)
                .cloned()
                .ok_or_else(|| PosError::UnknownPolicy {
                    tool_code: code.clone(),
                    policy: entry.policy.clone(),
                })?;

            tools.push(Tool {
                code,
                brand: entry.brand,
                policy: policy.into_policy(),
            });
        }

        Ok(Self {
            catalog: ToolCatalog::new(tools),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PosResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PosError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PosError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the resolved catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Looks a tool up by code, ignoring case, converting absence into
    /// [`PosError::ToolNotFound`].
    pub fn find_tool(&self, code: &str) -> PosResult<&Tool> {
        self.catalog
            .find_by_code(code)
            .ok_or_else(|| PosError::ToolNotFound {
                code: code.to_string(),
            })
    }
}
