use super::SceneNode;
use crate::camera::bounds::BoundingBox;

/// Owned scene hierarchy node carrying mesh bounds and children.
///
/// Useful for headless hosts and tests; engine integrations implement
/// [`SceneNode`] over their own entity types instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    name: String,
    meshes: Vec<BoundingBox>,
    children: Vec<Node>,
}

impl Node {
    /// Create an empty node with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Attach a mesh with the given world-space bounds.
    #[must_use]
    pub fn with_mesh(mut self, bounds: BoundingBox) -> Self {
        self.meshes.push(bounds);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child node in place.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }
}

impl SceneNode for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn mesh_bounds(&self) -> &[BoundingBox] {
        &self.meshes
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
