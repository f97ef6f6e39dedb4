//! Static reporting tree and leaf-to-root chain lookup.
//!
//! The tree is an arena of [`OrgNode`]s linked by index. It has five
//! modeled levels; level 6 of an [`OrgChain`] repeats level 5 because an
//! employee's direct manager is the level-5 node they report to.

use serde::{Deserialize, Serialize};

use crate::stream::DeterministicStream;

/// Number of levels in an org chain.
pub const ORG_DEPTH: usize = 6;

/// Names per modeled level, each paired with the index of its parent in the
/// previous level. Level 1 is the root.
const ROOT: &str = "Jane Smith";
const LEVEL_2: &[(&str, usize)] = &[("John Davis", 0), ("Sarah Johnson", 0), ("Michael Chen", 0)];
const LEVEL_3: &[(&str, usize)] = &[
    ("Robert Taylor", 0),
    ("Lisa Anderson", 0),
    ("David Martinez", 1),
    ("Emily White", 1),
    ("James Brown", 2),
];
const LEVEL_4: &[(&str, usize)] = &[
    ("Christopher Lee", 0),
    ("Jennifer Garcia", 0),
    ("Matthew Wilson", 1),
    ("Amanda Rodriguez", 1),
    ("Daniel Lopez", 2),
    ("Jessica Hernandez", 2),
    ("William Thomas", 3),
    ("Michelle Moore", 4),
];
const LEVEL_5: &[(&str, usize)] = &[
    ("Andrew Jackson", 0),
    ("Stephanie Martin", 0),
    ("Joshua Thompson", 1),
    ("Nicole Harris", 2),
    ("Anthony Clark", 3),
    ("Elizabeth Lewis", 4),
    ("Mark Robinson", 5),
    ("Helen Walker", 6),
];

/// A node of the reporting tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgNode {
    pub name: &'static str,
    /// 1-based depth in the tree.
    pub level: u8,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// An employee's reporting chain, root first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrgChain {
    pub level_1: String,
    pub level_2: String,
    pub level_3: String,
    pub level_4: String,
    pub level_5: String,
    pub level_6: String,
}

impl OrgChain {
    /// The direct manager, which is the level-6 entry.
    #[must_use]
    pub fn manager(&self) -> &str {
        &self.level_6
    }

    /// Levels 1 through 6 in order.
    #[must_use]
    pub fn levels(&self) -> [&str; ORG_DEPTH] {
        [
            &self.level_1,
            &self.level_2,
            &self.level_3,
            &self.level_4,
            &self.level_5,
            &self.level_6,
        ]
    }
}

/// Immutable reporting tree built once per run.
#[derive(Debug, Clone)]
pub struct OrgHierarchy {
    nodes: Vec<OrgNode>,
    leaves: Vec<usize>,
}

impl OrgHierarchy {
    /// Build the fixed 1/3/5/8/8 tree.
    #[must_use]
    pub fn standard() -> Self {
        let mut hierarchy = Self {
            nodes: vec![OrgNode {
                name: ROOT,
                level: 1,
                parent: None,
                children: Vec::new(),
            }],
            leaves: Vec::new(),
        };

        let mut previous = vec![0];
        for (depth, level) in [LEVEL_2, LEVEL_3, LEVEL_4, LEVEL_5].into_iter().enumerate() {
            let mut current = Vec::with_capacity(level.len());
            for &(name, parent_slot) in level {
                let parent = previous.get(parent_slot).copied();
                let index = hierarchy.push(name, depth as u8 + 2, parent);
                current.push(index);
            }
            previous = current;
        }
        hierarchy.leaves = previous;
        hierarchy
    }

    fn push(&mut self, name: &'static str, level: u8, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(OrgNode {
            name,
            level,
            parent,
            children: Vec::new(),
        });
        if let Some(node) = parent.and_then(|p| self.nodes.get_mut(p)) {
            node.children.push(index);
        }
        index
    }

    /// All nodes in insertion order; index 0 is the root.
    #[must_use]
    pub fn nodes(&self) -> &[OrgNode] {
        &self.nodes
    }

    /// Indices of the level-5 nodes employees report to.
    #[must_use]
    pub fn leaves(&self) -> &[usize] {
        &self.leaves
    }

    /// Walk parent links from `node` up to the root and build its chain.
    ///
    /// Levels the walk does not reach stay empty.
    #[must_use]
    pub fn chain_for(&self, node: usize) -> OrgChain {
        let mut path = Vec::with_capacity(ORG_DEPTH - 1);
        let mut cursor = self.nodes.get(node);
        while let Some(current) = cursor {
            path.push(current.name);
            cursor = current.parent.and_then(|p| self.nodes.get(p));
        }
        path.reverse();

        let level = |i: usize| path.get(i).map(|s| (*s).to_string()).unwrap_or_default();
        OrgChain {
            level_1: level(0),
            level_2: level(1),
            level_3: level(2),
            level_4: level(3),
            level_5: level(4),
            level_6: level(4),
        }
    }

    /// Pick a random level-5 node and return its chain.
    pub fn random_chain(&self, stream: &mut DeterministicStream) -> OrgChain {
        let leaf = stream.pick(&self.leaves).copied().unwrap_or(0);
        self.chain_for(leaf)
    }
}
