use std::fmt;

use super::{LeafType, TypeRef};

/// A child of a [`GenericType`]: either a plain leaf or another generic node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Leaf(LeafType),
    Generic(GenericType),
}

/// Tree node describing a possibly parameterized type.
///
/// Children are owned by value and kept in the order of the source type
/// arguments. A node without children is structurally a leaf and renders
/// exactly like one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericType {
    base: LeafType,
    children: Vec<TypeNode>,
}

impl GenericType {
    /// Node without type arguments carrying all of `leaf`'s fields
    pub fn from_leaf(leaf: LeafType) -> Self {
        Self {
            base: leaf,
            children: Vec::new(),
        }
    }

    pub fn with_children(base: LeafType, children: Vec<TypeNode>) -> Self {
        Self { base, children }
    }

    pub(crate) fn push(&mut self, child: TypeNode) {
        self.children.push(child);
    }

    pub fn wire_name(&self) -> &str {
        self.base.wire_name()
    }

    pub fn display_name(&self) -> &str {
        self.base.display_name()
    }

    pub fn runtime_class(&self) -> Option<&TypeRef> {
        self.base.runtime_class()
    }

    pub fn is_struct(&self) -> bool {
        self.base.is_struct()
    }

    pub fn children(&self) -> &[TypeNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The leaf fields of this node
    pub fn as_leaf(&self) -> &LeafType {
        &self.base
    }

    /// Number of generic levels, 0 for a node without children
    pub fn depth(&self) -> usize {
        if self.children.is_empty() {
            return 0;
        }
        let deepest = self
            .children
            .iter()
            .map(|child| match child {
                TypeNode::Generic(generic) => generic.depth(),
                TypeNode::Leaf(_) => 0,
            })
            .max()
            .unwrap_or(0);
        deepest + 1
    }

    /// Debug form: child contributions concatenated inside `<...>`.
    ///
    /// Siblings are not separated and the node's own name is not printed,
    /// so `map<string, i32>` shows as `<Stringi32>`.
    pub fn render_display(&self) -> String {
        let mut out = String::from("<");
        for child in &self.children {
            match child {
                TypeNode::Generic(generic) => out.push_str(&generic.render_display()),
                TypeNode::Leaf(leaf) if leaf.is_struct() => out.push_str(leaf.wire_name()),
                TypeNode::Leaf(leaf) => out.push_str(leaf.display_name()),
            }
        }
        out.push('>');
        out
    }

    /// Canonical Thrift signature, e.g. `map<string, list<i32>>`
    pub fn render_wire(&self) -> String {
        if self.children.is_empty() {
            return self.wire_name().to_string();
        }
        let args: Vec<String> = self
            .children
            .iter()
            .map(|child| match child {
                TypeNode::Generic(generic) => generic.render_wire(),
                TypeNode::Leaf(leaf) => leaf.wire_name().to_string(),
            })
            .collect();
        format!("{}<{}>", self.wire_name(), args.join(", "))
    }
}

impl fmt::Display for GenericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_display())
    }
}
