//! Catalog configuration types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! catalog YAML files, and the resolved [`ToolCatalog`] built from them.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{RentalPolicy, Tool};

/// A charging policy as it appears in `policies.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// The human-readable name of the tool kind.
    pub name: String,
    /// The daily rental charge in dollars.
    pub daily_charge: Decimal,
    /// Whether weekdays in the rental window are charged.
    pub charge_on_weekdays: bool,
    /// Whether weekend days in the rental window are charged.
    pub charge_on_weekends: bool,
    /// Whether observed holidays in the rental window are charged.
    pub charge_on_holidays: bool,
}

/// The `policies.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliciesConfig {
    /// Map of policy key to charging policy.
    pub policies: HashMap<String, PolicyConfig>,
}

/// A tool entry as it appears in `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolEntry {
    /// The brand of this particular tool.
    pub brand: String,
    /// The key of the policy this tool charges under.
    pub policy: String,
}

/// The `tools.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// Map of tool code to tool entry.
    pub tools: HashMap<String, ToolEntry>,
}

/// The resolved catalog: every tool with its policy reference already
/// expanded into a full [`RentalPolicy`].
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    /// Tools keyed by upper-cased code for case-insensitive lookup.
    tools: HashMap<String, Tool>,
}

impl ToolCatalog {
    /// Creates a catalog from resolved tools, keying them by upper-cased code.
    pub fn new(tools: Vec<Tool>) -> Self {
        let tools = tools
            .into_iter()
            .map(|tool| (tool.code.to_uppercase(), tool))
            .collect();
        Self { tools }
    }

    /// Looks a tool up by code, ignoring case.
    ///
    /// Returns `None` when no tool carries the code; absence is not an error
    /// here, the caller decides how to signal it.
    pub fn find_by_code(&self, code: &str) -> Option<&Tool> {
        self.tools.get(&code.to_uppercase())
    }

    /// Returns every tool in the catalog, sorted by code.
    pub fn tools(&self) -> Vec<&Tool> {
        let mut tools: Vec<&Tool> = self.tools.values().collect();
        tools.sort_by(|a, b| a.code.cmp(&b.code));
        tools
    }

    /// Returns the number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl PolicyConfig {
    /// Converts this configuration entry into a domain [`RentalPolicy`].
    pub fn into_policy(self) -> RentalPolicy {
        RentalPolicy {
            name: self.name,
            daily_charge: self.daily_charge,
            charge_on_weekdays: self.charge_on_weekdays,
            charge_on_weekends: self.charge_on_weekends,
            charge_on_holidays: self.charge_on_holidays,
        }
    }
}
