use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// A single change the lockfile diff suite knows how to apply.
///
/// Variants are declared in canonical order; every combination written to the
/// seed file lists its labels in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaseLabel {
    /// A Minecraft version is appended to `mc_versions`.
    GameAdded,
    /// A Minecraft version is dropped from `mc_versions`.
    GameRemoved,
    /// A new mod loader appears in `loaders`.
    LoaderAdded,
    /// An existing mod loader is removed.
    LoaderRemoved,
    /// An existing mod loader changes version.
    LoaderUpdated,
    /// A project is added to `projects`.
    ProjectAdded,
    /// A project is removed from `projects`.
    ProjectRemoved,
    /// A project's file is replaced by a newer one.
    ProjectUpdated,
}

impl CaseLabel {
    /// All labels in canonical order.
    pub const ALL: [CaseLabel; 8] = [
        CaseLabel::GameAdded,
        CaseLabel::GameRemoved,
        CaseLabel::LoaderAdded,
        CaseLabel::LoaderRemoved,
        CaseLabel::LoaderUpdated,
        CaseLabel::ProjectAdded,
        CaseLabel::ProjectRemoved,
        CaseLabel::ProjectUpdated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseLabel::GameAdded => "Game Added",
            CaseLabel::GameRemoved => "Game Removed",
            CaseLabel::LoaderAdded => "Loader Added",
            CaseLabel::LoaderRemoved => "Loader Removed",
            CaseLabel::LoaderUpdated => "Loader Updated",
            CaseLabel::ProjectAdded => "Project Added",
            CaseLabel::ProjectRemoved => "Project Removed",
            CaseLabel::ProjectUpdated => "Project Updated",
        }
    }

    /// Position of this label in [`CaseLabel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseLabel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match CaseLabel::ALL.iter().find(|label| label.as_str() == s) {
            Some(label) => Ok(*label),
            None => bail!("Unknown case label: {s:?}"),
        }
    }
}
