//! Node handles

use std::fmt;

/// Opaque handle to a node of the content store
///
/// Carries the node's path and stable identifier; everything else is read
/// through a [`ContentStore`](super::ContentStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    path: String,
    identifier: String,
}

impl Node {
    pub fn new(path: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            identifier: identifier.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Last path segment; empty for the root
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }

    /// Path of the parent node, `None` for the root
    pub fn parent_path(&self) -> Option<&str> {
        parent_path(&self.path)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.path, self.identifier)
    }
}

/// Parent of an absolute path; the parent of a top-level node is `/`
pub fn parent_path(path: &str) -> Option<&str> {
    if path == "/" || path.is_empty() {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some("/"),
        Some(pos) => Some(&path[..pos]),
        None => None,
    }
}

/// Join a child name onto a parent path
pub fn child_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}
