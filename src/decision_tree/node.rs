//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Example;
use crate::error::{Result, TreeError};


/// Enumeration of branch nodes and leaf nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on a categorical attribute.
    /// `children` has exactly one entry
    /// for each value in the domain of `attribute`, in domain order.
    Branch {
        /// The attribute this node splits on.
        attribute: String,
        /// Pairs of an attribute value and the subtree for the value.
        children: Vec<(String, Node)>,
    },
    /// A node that have no child.
    Leaf {
        /// The predicted class value.
        label: String,
    },
}


impl Node {
    /// Construct a branch node.
    #[inline]
    pub fn branch<S>(attribute: S, children: Vec<(String, Node)>) -> Self
        where S: Into<String>
    {
        let attribute = attribute.into();
        Self::Branch { attribute, children }
    }


    /// Construct a leaf node.
    #[inline]
    pub fn leaf<S>(label: S) -> Self
        where S: Into<String>
    {
        let label = label.into();
        Self::Leaf { label }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the child of a branch node for `value`.
    /// Returns `None` for a leaf or for a value without a child.
    #[inline]
    pub fn child(&self, value: &str) -> Option<&Node> {
        match self {
            Self::Branch { children, .. } => {
                children.iter()
                    .find(|(v, _)| v == value)
                    .map(|(_, child)| child)
            },
            Self::Leaf { .. } => None,
        }
    }


    /// Classify `example` by walking down from this node.
    pub fn classify(&self, example: &Example) -> Result<&str> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => { return Ok(label.as_str()); },
                Self::Branch { attribute, .. } => {
                    let value = example.get(attribute);
                    node = value.and_then(|v| node.child(v))
                        .ok_or_else(|| TreeError::SchemaMismatch {
                            attribute: attribute.clone(),
                            value: value.map(str::to_string),
                        })?;
                },
            }
        }
    }


    /// Returns the number of nodes of the subtree rooted at this node.
    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.iter()
                    .map(|(_, child)| child.n_nodes())
                    .sum::<usize>()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the number of leaves of the subtree rooted at this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.iter()
                    .map(|(_, child)| child.n_leaves())
                    .sum::<usize>()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the depth of the subtree rooted at this node.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.iter()
                    .map(|(_, child)| child.depth())
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { attribute, children } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attribute} ?\" ];\n",
                )];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{label}\", \
                     shape = box, \
                     ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }


    /// Writes the subtree in preorder.
    /// Each branch writes one line `attribute = value` per child,
    /// indented by `|---` per level.
    pub(super) fn preorder(&self, f: &mut fmt::Formatter<'_>, depth: usize)
        -> fmt::Result
    {
        let indent = "|---".repeat(depth);
        match self {
            Node::Branch { attribute, children } => {
                for (value, child) in children {
                    writeln!(f, "{indent}{attribute} = {value}")?;
                    child.preorder(f, depth + 1)?;
                }
                Ok(())
            },
            Node::Leaf { label } => writeln!(f, "{indent}{label}"),
        }
    }
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.preorder(f, 0)
    }
}
