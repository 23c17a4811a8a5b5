//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::{Classifier, Example};
use crate::error::Result;
use super::node::Node;


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn classify(&self, example: &Example) -> Result<&str> {
        self.root.classify(example)
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the depth of the tree.
    /// A tree consisting of a single leaf has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.preorder(f, 0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn classifier() -> DecisionTreeClassifier {
        let root = Node::branch("patrons", vec![
            ("none".to_string(), Node::leaf("no")),
            ("some".to_string(), Node::leaf("yes")),
            ("full".to_string(), Node::branch("hungry", vec![
                ("yes".to_string(), Node::leaf("yes")),
                ("no".to_string(), Node::leaf("no")),
            ])),
        ]);
        DecisionTreeClassifier::from(root)
    }

    #[test]
    fn test_classify_01() {
        let f = classifier();
        let example = Example::from([("patrons", "full"), ("hungry", "yes")]);
        let res = f.classify(&example).unwrap();
        assert_eq!("yes", res, "expected yes, got {res}.");

        // Classification does not change the tree.
        let again = f.classify(&example).unwrap();
        assert_eq!(res, again, "expected {res}, got {again}.");
    }

    #[test]
    fn test_size_01() {
        let f = classifier();
        assert_eq!(f.n_nodes(), 6);
        assert_eq!(f.n_leaves(), 4);
        assert_eq!(f.depth(), 2);
        assert!(!f.root().is_leaf());
    }

    #[test]
    fn test_to_dot_file_01() {
        let f = classifier();
        let path = std::env::temp_dir()
            .join(format!("minitree_dot_{}.dot", std::process::id()));
        f.to_dot_file(&path).unwrap();

        let dot = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(dot.starts_with("graph DecisionTree {"), "got {dot}.");
        assert!(dot.trim_end().ends_with('}'), "got {dot}.");
        assert!(dot.contains("label = \"patrons ?\""), "got {dot}.");
    }

    #[test]
    fn test_display_01() {
        let f = classifier();
        let res = f.to_string();
        assert_eq!(res, f.root().to_string());
        assert!(res.starts_with("patrons = none\n|---no\n"), "got {res}.");
    }
}
