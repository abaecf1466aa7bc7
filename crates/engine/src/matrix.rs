//! Matrix-shaped report data.
//!
//! A matrix is two hierarchies (rows and columns) rooted at a synthetic root
//! node. Row nodes carry a positional `values` sequence aligned with the leaf
//! columns in depth-first order. Every field is optional on the wire so a
//! partial snapshot deserializes to an empty matrix instead of failing.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Matrix {
    pub rows: Hierarchy,
    pub columns: Hierarchy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hierarchy {
    pub root: MatrixNode,
}

/// The value of a node at one hierarchy level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelValue {
    pub value: CellValue,
}

/// One measure value attached to a row node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeValue {
    pub value: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatrixNode {
    pub level_values: Vec<LevelValue>,
    pub children: Vec<MatrixNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<NodeValue>,
}

impl MatrixNode {
    /// A node labelled by a single level value
    pub fn labelled(label: impl Into<CellValue>) -> Self {
        Self {
            level_values: vec![LevelValue { value: label.into() }],
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<MatrixNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.values = values.into_iter().map(|v| NodeValue { value: v.into() }).collect();
        self
    }

    /// First level value, or `Null` when the node has none
    pub fn label(&self) -> &CellValue {
        static NULL: CellValue = CellValue::Null;
        self.level_values.first().map(|lv| &lv.value).unwrap_or(&NULL)
    }

    /// The value aligned with leaf column `index`, if present
    pub fn value_at(&self, index: usize) -> Option<&CellValue> {
        self.values.get(index).map(|v| &v.value)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Matrix {
    pub fn new(rows: Vec<MatrixNode>, columns: Vec<MatrixNode>) -> Self {
        Self {
            rows: Hierarchy { root: MatrixNode::default().with_children(rows) },
            columns: Hierarchy { root: MatrixNode::default().with_children(columns) },
        }
    }

    /// Leaf columns in depth-first order; `values[i]` aligns with entry `i`.
    pub fn leaf_columns(&self) -> Vec<&MatrixNode> {
        let mut leaves = Vec::new();
        for child in &self.columns.root.children {
            collect_leaves(child, &mut leaves);
        }
        leaves
    }

    /// Every row node below the root in depth-first pre-order, with its
    /// path of child indices from the root.
    pub fn row_nodes(&self) -> Vec<(Vec<usize>, &MatrixNode)> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        for (i, child) in self.rows.root.children.iter().enumerate() {
            path.push(i);
            collect_preorder(child, &mut path, &mut out);
            path.pop();
        }
        out
    }
}

fn collect_leaves<'a>(node: &'a MatrixNode, out: &mut Vec<&'a MatrixNode>) {
    if node.is_leaf() {
        out.push(node);
        return;
    }
    for child in &node.children {
        collect_leaves(child, out);
    }
}

fn collect_preorder<'a>(
    node: &'a MatrixNode,
    path: &mut Vec<usize>,
    out: &mut Vec<(Vec<usize>, &'a MatrixNode)>,
) {
    out.push((path.clone(), node));
    for (i, child) in node.children.iter().enumerate() {
        path.push(i);
        collect_preorder(child, path, out);
        path.pop();
    }
}
