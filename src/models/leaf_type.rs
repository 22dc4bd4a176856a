use super::TypeRef;

/// Descriptor of a non-generic type.
///
/// Classifiers hand these out as shared prototypes behind `&LeafType`, so a
/// prototype can never be changed in place. [`LeafType::clone_for`] is the
/// only way to obtain a copy specialised for one use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafType {
    /// Canonical Thrift name (`i32`, `string`, `Order`)
    wire_name: String,
    /// Host-facing name used in debug output (`i32`, `String`, `Vec`)
    display_name: String,
    /// Originating host type
    runtime_class: Option<TypeRef>,
    /// User-defined structured type rather than a primitive or container
    is_struct: bool,
}

impl LeafType {
    /// A built-in, non-struct leaf
    pub fn new(wire_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            wire_name: wire_name.into(),
            display_name: display_name.into(),
            runtime_class: None,
            is_struct: false,
        }
    }

    /// A user-defined struct named `name`
    pub fn structure(name: &str) -> Self {
        Self {
            wire_name: name.to_string(),
            display_name: name.to_string(),
            runtime_class: Some(TypeRef::new(name)),
            is_struct: true,
        }
    }

    pub fn with_runtime_class(mut self, class: TypeRef) -> Self {
        self.runtime_class = Some(class);
        self
    }

    pub fn wire_name(&self) -> &str {
        &self.wire_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn runtime_class(&self) -> Option<&TypeRef> {
        self.runtime_class.as_ref()
    }

    pub fn is_struct(&self) -> bool {
        self.is_struct
    }

    /// Independent copy bound to the type actually written at a use site:
    /// the runtime class becomes `class` and the display name its simple name.
    pub fn clone_for(&self, class: &TypeRef) -> LeafType {
        LeafType {
            wire_name: self.wire_name.clone(),
            display_name: class.simple_name().to_string(),
            runtime_class: Some(class.clone()),
            is_struct: self.is_struct,
        }
    }
}
