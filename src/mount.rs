//! Containers a surface can be attached to.

/// Something that can hold surfaces as children.
pub trait Container {
    /// Append the surface with the given id.
    ///
    /// Returns `false` when this container cannot hold children.
    fn append_child(&mut self, child_id: &str) -> bool;

    /// Remove the surface with the given id, if present.
    fn remove_child(&mut self, child_id: &str);
}

/// A minimal element tree node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    children: Vec<String>,
    void: bool,
}

impl Element {
    /// An element that accepts children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            void: false,
        }
    }

    /// An element that never accepts children (like `<img>`).
    pub fn void(tag: impl Into<String>) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }
}

impl Container for Element {
    fn append_child(&mut self, child_id: &str) -> bool {
        if self.void {
            return false;
        }
        // Re-appending moves the child to the end
        self.children.retain(|c| c != child_id);
        self.children.push(child_id.to_string());
        true
    }

    fn remove_child(&mut self, child_id: &str) {
        self.children.retain(|c| c != child_id);
    }
}
