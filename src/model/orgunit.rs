//! Organisation unit reference entity and hierarchy helpers

use std::collections::BTreeMap;

/// One ancestor in an organisation unit's hierarchy path
#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnitAncestor {
    pub uid: String,
    pub name: String,
}

/// An organisation unit with its ancestry, ordered root first and
/// excluding the unit itself
#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnit {
    pub uid: String,
    pub name: String,
    pub code: Option<String>,
    pub ancestors: Vec<OrgUnitAncestor>,
}

impl OrgUnit {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        OrgUnit {
            uid: uid.into(),
            name: name.into(),
            code: None,
            ancestors: vec![],
        }
    }

    pub fn with_ancestors(mut self, ancestors: Vec<OrgUnitAncestor>) -> Self {
        self.ancestors = ancestors;
        self
    }

    /// Ancestor uid path joined with `/`, starting at the deepest ancestor
    /// that is one of the given roots (the full path when none matches)
    pub fn parent_graph(&self, roots: &[&OrgUnit]) -> String {
        let start = self.root_index(roots);
        self.ancestors[start..]
            .iter()
            .map(|a| a.uid.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Ancestor name path joined with `/`, trimmed at the roots like
    /// [`OrgUnit::parent_graph`]
    pub fn parent_name_graph(&self, roots: &[&OrgUnit]) -> String {
        let start = self.root_index(roots);
        self.ancestors[start..]
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn root_index(&self, roots: &[&OrgUnit]) -> usize {
        self.ancestors
            .iter()
            .rposition(|a| roots.iter().any(|r| r.uid == a.uid))
            .unwrap_or(0)
    }
}

/// Map of org unit uid to its ancestor uid path, rooted at the given units
pub fn parent_graph_map<'a>(
    units: impl IntoIterator<Item = &'a OrgUnit>,
    roots: &[&OrgUnit],
) -> BTreeMap<String, String> {
    units
        .into_iter()
        .map(|u| (u.uid.clone(), u.parent_graph(roots)))
        .collect()
}

/// Map of org unit uid to its ancestor name path, rooted at the given units
pub fn parent_name_graph_map<'a>(
    units: impl IntoIterator<Item = &'a OrgUnit>,
    roots: &[&OrgUnit],
) -> BTreeMap<String, String> {
    units
        .into_iter()
        .map(|u| (u.uid.clone(), u.parent_name_graph(roots)))
        .collect()
}
