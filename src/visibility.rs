//! Which artifact sections are expanded in the results view.

use std::collections::BTreeSet;

use crate::artifact::ArtifactKind;

/// Set of expanded sections. Owned by the results screen, independent of the
/// application state machine. Starts (and resets) with only the README open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVisibility {
    expanded: BTreeSet<ArtifactKind>,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            expanded: BTreeSet::from([ArtifactKind::Readme]),
        }
    }
}

impl SectionVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, kind: ArtifactKind) -> bool {
        self.expanded.contains(&kind)
    }

    /// Flip one section. Toggling twice restores the original set.
    pub fn toggle(&mut self, kind: ArtifactKind) {
        if !self.expanded.remove(&kind) {
            self.expanded.insert(kind);
        }
    }

    pub fn expand_all(&mut self) {
        self.expanded.extend(ArtifactKind::ALL);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Back to `{readme}`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn expanded(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.expanded.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
