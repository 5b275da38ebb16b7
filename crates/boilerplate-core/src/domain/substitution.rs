//! Literal token substitution applied to every text file.

use crate::domain::{identifier::PackageName, template::TemplateIdentity};

/// Old → new replacements, applied in order.
///
/// Replacement is plain substring replacement with no word-boundary
/// awareness: `old_pkg_extra` becomes `new_pkg_extra`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    rules: Vec<(String, String)>,
}

impl Substitution {
    /// Identifier first, then distribution name.
    pub fn for_rename(template: &TemplateIdentity, new_name: &PackageName) -> Self {
        Self {
            rules: vec![
                (template.identifier().to_owned(), new_name.as_str().to_owned()),
                (template.distribution().to_owned(), new_name.distribution_name()),
            ],
        }
    }

    /// Rewrite `content`, returning `None` when nothing changed.
    pub fn apply(&self, content: &str) -> Option<String> {
        let mut updated = content.to_owned();
        for (old, new) in &self.rules {
            if !old.is_empty() && updated.contains(old.as_str()) {
                updated = updated.replace(old.as_str(), new);
            }
        }
        (updated != content).then_some(updated)
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(o, n)| (o.as_str(), n.as_str()))
    }
}
