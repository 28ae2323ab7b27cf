//! The SOC classification tree.
//!
//! [`Hierarchy::load`] builds the tree from the structure and index tables in
//! a single pipeline:
//!
//! 1. one [`HierarchyNode`] per distinct code, carrying its own title and
//!    description (and, for Unit groups, tasks and qualifications);
//! 2. parent/child links, where the parent of a code is the code minus its
//!    last digit;
//! 3. example job titles from the index table, attached to Unit groups;
//! 4. the exact-code lookup map.
//!
//! Nodes live in an arena owned by the [`Hierarchy`]; parent and children are
//! arena indices. Nothing is mutated once `load` returns.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::code::{GroupLevel, SocCode};
use crate::meta::{MetaIndex, MetaRecord};
use crate::models::{IndexRow, StructureRow};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("SOC code not found in hierarchy: {0}")]
    NotFound(String),
}

/// One classification group in the tree.
#[derive(Debug, Clone)]
pub struct HierarchyNode {
    soc_code: SocCode,
    group_title: String,
    group_description: String,
    group_level: GroupLevel,
    tasks: Vec<String>,
    qualifications: Option<String>,
    job_titles: Vec<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl HierarchyNode {
    fn from_record(record: &MetaRecord) -> Self {
        let unit = record.code.is_unit();
        HierarchyNode {
            soc_code: record.code.clone(),
            group_title: record.group_title.clone(),
            group_description: record.group_description.clone(),
            group_level: record.code.group_level(),
            tasks: if unit { record.tasks.clone() } else { Vec::new() },
            qualifications: if unit {
                record.qualifications.clone()
            } else {
                None
            },
            job_titles: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn soc_code(&self) -> &SocCode {
        &self.soc_code
    }

    pub fn group_title(&self) -> &str {
        &self.group_title
    }

    pub fn group_description(&self) -> &str {
        &self.group_description
    }

    pub fn group_level(&self) -> GroupLevel {
        self.group_level
    }

    /// Tasks typically performed. Unit groups only.
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Typical entry routes and associated qualifications. Unit groups only.
    pub fn qualifications(&self) -> Option<&str> {
        self.qualifications.as_deref()
    }

    /// Example job titles from the coding index. Unit groups only.
    pub fn job_titles(&self) -> &[String] {
        &self.job_titles
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl std::fmt::Display for HierarchyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.soc_code, self.group_title)
    }
}

/// One line of aggregated text for a leaf group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafText {
    pub code: String,
    pub text: String,
}

impl LeafText {
    fn new(node: &HierarchyNode, text: String) -> Self {
        LeafText {
            code: node.soc_code.to_string(),
            text,
        }
    }
}

const TITLE_LABEL: &str = "Title: ";
const DESCRIPTION_LABEL: &str = "Description: ";
const TASKS_LABEL: &str = "Tasks: ";
const QUALIFICATIONS_LABEL: &str = "Typical Entry Routes And Associated Qualifications: ";
const JOB_TITLES_LABEL: &str = "Example Job Titles: ";

fn title_text(node: &HierarchyNode) -> String {
    format!("{}{}", TITLE_LABEL, node.group_title)
}

fn description_text(node: &HierarchyNode) -> String {
    format!("{}{}", DESCRIPTION_LABEL, node.group_description)
}

fn tasks_text(node: &HierarchyNode) -> String {
    format!("{}{}", TASKS_LABEL, node.tasks.join(", "))
}

fn qualifications_text(node: &HierarchyNode) -> String {
    format!(
        "{}{}",
        QUALIFICATIONS_LABEL,
        node.qualifications.as_deref().unwrap_or("")
    )
}

fn job_titles_text(node: &HierarchyNode) -> String {
    format!("{}{}", JOB_TITLES_LABEL, node.job_titles.join(", "))
}

/// The full classification tree plus an exact-code index.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
    lookup: HashMap<String, usize>,
}

impl Hierarchy {
    /// Build the tree from the structure table and the cleaned index table.
    ///
    /// Rows that fail to decode are logged and skipped; see [`MetaIndex::build`].
    pub fn load(structure: &[StructureRow], index: &[IndexRow]) -> Self {
        Self::from_meta(&MetaIndex::build(structure), index)
    }

    /// Build the tree from already-decoded records.
    pub fn from_meta(meta: &MetaIndex, index: &[IndexRow]) -> Self {
        let mut nodes: Vec<HierarchyNode> = Vec::with_capacity(meta.len());
        let mut lookup: HashMap<String, usize> = HashMap::with_capacity(meta.len());

        for record in meta.records() {
            let code = record.code.as_str();
            if lookup.contains_key(code) {
                tracing::warn!(code, "duplicate structure row; keeping the first");
                continue;
            }
            lookup.insert(code.to_string(), nodes.len());
            nodes.push(HierarchyNode::from_record(record));
        }

        for child in 0..nodes.len() {
            let Some(parent_code) = nodes[child].soc_code.parent() else {
                continue;
            };
            match lookup.get(parent_code.as_str()) {
                Some(&parent) => {
                    nodes[child].parent = Some(parent);
                    nodes[parent].children.push(child);
                }
                None => tracing::warn!(
                    code = %nodes[child].soc_code,
                    parent = %parent_code,
                    "parent group missing from structure table"
                ),
            }
        }

        let mut unattached = 0usize;
        for row in index {
            let Some(title) = row.title.as_deref() else {
                continue;
            };
            match lookup.get(row.code.as_str()) {
                Some(&i) if nodes[i].soc_code.is_unit() => {
                    nodes[i].job_titles.push(title.to_string());
                }
                _ => unattached += 1,
            }
        }
        if unattached > 0 {
            tracing::warn!(
                rows = unattached,
                "index rows reference codes that are not unit groups in the structure table"
            );
        }

        Hierarchy { nodes, lookup }
    }

    pub fn get(&self, code: &str) -> Option<&HierarchyNode> {
        self.lookup.get(code).map(|&i| &self.nodes[i])
    }

    /// Like [`Hierarchy::get`], but a miss is an error.
    pub fn by_code(&self, code: &str) -> Result<&HierarchyNode, HierarchyError> {
        self.get(code)
            .ok_or_else(|| HierarchyError::NotFound(code.to_string()))
    }

    pub fn parent(&self, node: &HierarchyNode) -> Option<&HierarchyNode> {
        node.parent.map(|i| &self.nodes[i])
    }

    pub fn children<'a>(
        &'a self,
        node: &'a HierarchyNode,
    ) -> impl Iterator<Item = &'a HierarchyNode> + 'a {
        node.children.iter().map(move |&i| &self.nodes[i])
    }

    /// Ancestors of `code`, nearest first. Empty if the code is unknown.
    pub fn ancestors(&self, code: &str) -> Vec<&HierarchyNode> {
        let mut out = Vec::new();
        let mut current = self.get(code).and_then(|node| self.parent(node));
        while let Some(node) = current {
            out.push(node);
            current = self.parent(node);
        }
        out
    }

    /// Nodes without a parent: the Major groups, plus any group whose parent
    /// was missing from the structure table.
    pub fn roots(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter().filter(|node| node.parent.is_none())
    }

    pub fn leaves(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    /// All nodes in structure-table order.
    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn all_group_titles(&self) -> impl Iterator<Item = LeafText> + '_ {
        self.leaves().map(|n| LeafText::new(n, title_text(n)))
    }

    pub fn all_group_descriptions(&self) -> impl Iterator<Item = LeafText> + '_ {
        self.leaves().map(|n| LeafText::new(n, description_text(n)))
    }

    pub fn all_group_tasks(&self) -> impl Iterator<Item = LeafText> + '_ {
        self.leaves().map(|n| LeafText::new(n, tasks_text(n)))
    }

    pub fn all_group_qualifications(&self) -> impl Iterator<Item = LeafText> + '_ {
        self.leaves().map(|n| LeafText::new(n, qualifications_text(n)))
    }

    pub fn all_group_job_titles(&self) -> impl Iterator<Item = LeafText> + '_ {
        self.leaves().map(|n| LeafText::new(n, job_titles_text(n)))
    }

    /// One merged description per leaf, sorted by code.
    ///
    /// Segments appear in a fixed order: title, description, tasks,
    /// qualifications, example job titles.
    pub fn all_leaf_text(&self) -> Vec<LeafText> {
        let mut rows: Vec<LeafText> = self
            .leaves()
            .map(|n| {
                let text = [
                    title_text(n),
                    description_text(n),
                    tasks_text(n),
                    qualifications_text(n),
                    job_titles_text(n),
                ]
                .join(", ");
                LeafText::new(n, text)
            })
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{group_row, index_rows, structure_rows};

    fn fixture() -> Hierarchy {
        Hierarchy::load(&structure_rows(), &index_rows())
    }

    #[test]
    fn test_one_node_per_code() {
        let soc = fixture();
        assert_eq!(soc.len(), structure_rows().len());
        assert!(soc.get("2112").is_some());
        assert!(soc.get("8139").is_none());
    }

    #[test]
    fn test_leaf_iff_no_children() {
        let soc = fixture();
        for node in soc.nodes() {
            assert_eq!(node.is_leaf(), node.child_count() == 0);
            assert_eq!(node.is_leaf(), node.soc_code().is_unit(), "{}", node);
        }
    }

    #[test]
    fn test_parent_is_code_prefix() {
        let soc = fixture();
        for node in soc.nodes() {
            let code = node.soc_code().as_str();
            match soc.parent(node) {
                Some(parent) => assert_eq!(parent.soc_code().as_str(), &code[..code.len() - 1]),
                None => assert_eq!(code.len(), 1),
            }
        }
        let names: Vec<&str> = soc
            .children(soc.by_code("211").unwrap())
            .map(|n| n.soc_code().as_str())
            .collect();
        assert_eq!(names, vec!["2111", "2112"]);
    }

    #[test]
    fn test_each_node_has_its_own_title() {
        let soc = fixture();
        assert_eq!(soc.by_code("1").unwrap().group_title(), "Managers, directors and senior officials");
        assert_eq!(soc.by_code("2").unwrap().group_title(), "Professional occupations");
        assert_eq!(soc.by_code("4111").unwrap().group_title(), "National government administrative occupations");
        assert_eq!(soc.by_code("926").unwrap().group_level(), GroupLevel::Minor);
    }

    #[test]
    fn test_unit_groups_carry_tasks_quals_and_job_titles() {
        let soc = fixture();
        let zoo = soc.by_code("2112").unwrap();
        assert_eq!(zoo.tasks().len(), 2);
        assert!(zoo.qualifications().unwrap().starts_with("Entrants usually"));
        // The untitled index row is skipped.
        assert_eq!(zoo.job_titles(), ["Zoologist", "Biologist", "Marine biologist"]);

        let major = soc.by_code("2").unwrap();
        assert!(major.tasks().is_empty());
        assert!(major.qualifications().is_none());
        assert!(major.job_titles().is_empty());
    }

    #[test]
    fn test_missing_parent_becomes_root() {
        let rows = vec![
            group_row("3", "Associate professional occupations", "Associate professionals."),
            group_row("312", "Orphaned minor group", "Its sub-major group is absent."),
        ];
        let soc = Hierarchy::load(&rows, &[]);

        let orphan = soc.by_code("312").unwrap();
        assert!(!orphan.has_parent());
        assert_eq!(soc.roots().count(), 2);
        assert!(soc.by_code("3").unwrap().is_leaf());
    }

    #[test]
    fn test_duplicate_code_keeps_first_row() {
        let rows = vec![
            group_row("5", "Skilled trades occupations", "First."),
            group_row("5", "Duplicate", "Second."),
        ];
        let soc = Hierarchy::load(&rows, &[]);
        assert_eq!(soc.len(), 1);
        assert_eq!(soc.by_code("5").unwrap().group_description(), "First.");
    }

    #[test]
    fn test_by_code_not_found() {
        let soc = fixture();
        assert_eq!(
            soc.by_code("9999").unwrap_err(),
            HierarchyError::NotFound("9999".to_string())
        );
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let soc = fixture();
        let codes: Vec<&str> = soc
            .ancestors("4111")
            .into_iter()
            .map(|n| n.soc_code().as_str())
            .collect();
        assert_eq!(codes, vec!["411", "41", "4"]);
        assert!(soc.ancestors("4").is_empty());
        assert!(soc.ancestors("0000").is_empty());
    }

    #[test]
    fn test_all_group_attribute_text() {
        let rows = vec![
            group_row("1", "Title1", "Description1"),
            group_row("2", "Title2", "Description2"),
        ];
        let soc = Hierarchy::load(&rows, &[]);

        let descriptions: Vec<LeafText> = soc.all_group_descriptions().collect();
        assert_eq!(
            descriptions,
            vec![
                LeafText { code: "1".into(), text: "Description: Description1".into() },
                LeafText { code: "2".into(), text: "Description: Description2".into() },
            ]
        );
        let titles: Vec<String> = soc.all_group_titles().map(|t| t.text).collect();
        assert_eq!(titles, vec!["Title: Title1", "Title: Title2"]);
        let tasks: Vec<String> = soc.all_group_tasks().map(|t| t.text).collect();
        assert_eq!(tasks, vec!["Tasks: ", "Tasks: "]);

        assert_eq!(Hierarchy::load(&[], &[]).all_group_titles().count(), 0);
    }

    #[test]
    fn test_all_group_job_titles_and_qualifications() {
        let soc = fixture();
        let jobs: Vec<LeafText> = soc.all_group_job_titles().collect();
        let chem = jobs.iter().find(|t| t.code == "2111").unwrap();
        assert_eq!(chem.text, "Example Job Titles: Chemist, Analytical chemist");

        let quals: Vec<LeafText> = soc.all_group_qualifications().collect();
        let mp = quals.iter().find(|t| t.code == "1112").unwrap();
        assert_eq!(
            mp.text,
            "Typical Entry Routes And Associated Qualifications: Candidates must be elected."
        );
    }

    #[test]
    fn test_all_leaf_text_one_row_per_leaf() {
        let soc = fixture();
        let rows = soc.all_leaf_text();

        let codes: Vec<&str> = rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["1111", "1112", "2111", "2112", "4111", "9265"]);
        assert_eq!(rows.len(), soc.leaves().count());

        let warehouse = rows.iter().find(|r| r.code == "9265").unwrap();
        assert_eq!(
            warehouse.text,
            "Title: Warehouse operatives, \
             Description: Warehouse operatives receive, store and dispatch goods., \
             Tasks: loads and unloads goods, checks goods against delivery notes, \
             Typical Entry Routes And Associated Qualifications: There are no formal academic entry requirements., \
             Example Job Titles: Warehouse operative"
        );
    }

    #[test]
    fn test_all_leaf_text_deterministic() {
        assert_eq!(fixture().all_leaf_text(), fixture().all_leaf_text());
    }
}
