//! The pinned foundation package set
//!
//! An ordered set of (name, exact version) pairs that must be installed
//! before the dependency manifest. The default trio is the last numpy/scipy
//! releases that keep binary compatibility with gensim 4.3.

use serde::{Deserialize, Serialize};

use crate::error::{Result, settings};

/// A single package pinned to an exact version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedPackage {
    /// Package name as the package manager knows it
    pub name: String,

    /// Exact version literal, without the `==` operator
    pub version: String,
}

impl PinnedPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Render as a requirement string (`name==version`)
    pub fn requirement(&self) -> String {
        format!("{}=={}", self.name, self.version)
    }
}

/// The ordered pinned package set installed before the manifest step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foundation {
    packages: Vec<PinnedPackage>,
}

impl Foundation {
    /// Build a foundation from an explicit package list
    pub fn new(packages: Vec<PinnedPackage>) -> Self {
        Self { packages }
    }

    /// Packages in declared install order
    pub fn packages(&self) -> &[PinnedPackage] {
        &self.packages
    }

    /// Requirement strings in declared install order
    pub fn requirements(&self) -> Vec<String> {
        self.packages.iter().map(PinnedPackage::requirement).collect()
    }

    /// Look up a pinned package by normalized name
    pub fn find(&self, normalized_name: &str) -> Option<&PinnedPackage> {
        self.packages
            .iter()
            .find(|p| crate::manifest::normalize_name(&p.name) == normalized_name)
    }

    /// Validate the set: non-empty, with well-formed names and versions
    pub fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(settings::invalid("foundation must not be empty"));
        }

        for package in &self.packages {
            if package.name.trim().is_empty() {
                return Err(settings::invalid("foundation package name must not be blank"));
            }
            if package.name.chars().any(char::is_whitespace) {
                return Err(settings::invalid(format!(
                    "foundation package name '{}' must not contain whitespace",
                    package.name
                )));
            }
            if package.version.trim().is_empty() {
                return Err(settings::invalid(format!(
                    "foundation package '{}' has a blank version",
                    package.name
                )));
            }
        }

        Ok(())
    }
}

impl Default for Foundation {
    /// The scientific-computing trio pinned for mutual binary compatibility
    fn default() -> Self {
        Self::new(vec![
            PinnedPackage::new("numpy", "1.26.4"),
            PinnedPackage::new("scipy", "1.12.0"),
            PinnedPackage::new("gensim", "4.3.2"),
        ])
    }
}
