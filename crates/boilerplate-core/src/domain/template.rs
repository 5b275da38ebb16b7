//! The template being bootstrapped: its package names, the directories the
//! bootstrapper must never touch, and the version-control layout it resets to.

use std::path::{Component, Path, PathBuf};

use crate::domain::{error::DomainError, identifier::PackageName};

/// Source identifier of the package shipped in the template.
pub const TEMPLATE_PACKAGE: &str = "python_boilerplate";

/// Distribution name of the package shipped in the template.
pub const TEMPLATE_DISTRIBUTION: &str = "python-boilerplate";

/// Version-control metadata directory at the project root.
pub const VCS_METADATA_DIR: &str = ".git";

/// Branch name a freshly initialised repository starts on.
pub const PRIMARY_BRANCH: &str = "main";

/// Directory that holds the package directory.
pub const SOURCE_DIR: &str = "src";

/// The old names the bootstrapper replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateIdentity {
    identifier: String,
    distribution: String,
}

impl TemplateIdentity {
    /// Identity with an explicit distribution name.
    pub fn new(identifier: impl Into<String>, distribution: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            distribution: distribution.into(),
        }
    }

    /// Identity whose distribution name is derived from the identifier.
    pub fn derived(identifier: &PackageName) -> Self {
        Self::new(identifier.as_str(), identifier.distribution_name())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn distribution(&self) -> &str {
        &self.distribution
    }

    /// Check a user-supplied name: it must be an identifier and must not be
    /// the template's own identifier.
    pub fn validate_new_name(&self, raw: &str) -> Result<PackageName, DomainError> {
        let name = PackageName::parse(raw)?;
        self.ensure_distinct(&name)?;
        Ok(name)
    }

    pub(crate) fn ensure_distinct(&self, name: &PackageName) -> Result<(), DomainError> {
        if name.as_str() == self.identifier {
            return Err(DomainError::SameAsTemplate {
                name: name.to_string(),
                template: self.identifier.clone(),
            });
        }
        Ok(())
    }

    /// `<root>/src/<identifier>`.
    pub fn package_dir(&self, root: &Path) -> PathBuf {
        root.join(SOURCE_DIR).join(&self.identifier)
    }
}

impl Default for TemplateIdentity {
    fn default() -> Self {
        Self::new(TEMPLATE_PACKAGE, TEMPLATE_DISTRIBUTION)
    }
}

/// Directory names that are never traversed or rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipSet {
    names: Vec<String>,
}

impl SkipSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` if `name` is exactly one of the skipped directory names.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// `true` if any normal component of `relative` is a skipped name.
    ///
    /// Matching is per path segment: `.gitignore` is not excluded by `.git`.
    pub fn excludes(&self, relative: &Path) -> bool {
        relative.components().any(|c| match c {
            Component::Normal(part) => part.to_str().is_some_and(|p| self.contains(p)),
            _ => false,
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for SkipSet {
    fn default() -> Self {
        Self::new([VCS_METADATA_DIR, ".venv", ".uv-cache", "__pycache__"])
    }
}
