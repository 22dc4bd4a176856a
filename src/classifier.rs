//! Leaf classification - maps a host type to its shared prototype descriptor

use std::collections::HashMap;

use crate::error::BuildError;
use crate::known_types;
use crate::models::{LeafType, TypeRef};

/// Maps a type reference to a prototype [`LeafType`].
///
/// Prototypes are shared by every caller and are only ever lent out.
pub trait PrimitiveClassifier {
    fn classify(&self, ty: &TypeRef) -> Result<&LeafType, BuildError>;
}

impl<C: PrimitiveClassifier + ?Sized> PrimitiveClassifier for &C {
    fn classify(&self, ty: &TypeRef) -> Result<&LeafType, BuildError> {
        (**self).classify(ty)
    }
}

/// Classifier backed by a name -> prototype table.
///
/// Lookups use the simple name of the reference, so `billing::Order` and
/// `Order` resolve to the same prototype.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    prototypes: HashMap<String, LeafType>,
}

impl TypeRegistry {
    /// An empty registry that classifies nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-in primitives and containers
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (rust, wire) in known_types::builtin_mappings() {
            registry
                .prototypes
                .insert(rust.to_string(), LeafType::new(wire, rust));
        }
        registry
    }

    /// Register a user-defined struct (or union).
    ///
    /// A qualified name registers its last segment; the full path is kept as
    /// the runtime class.
    pub fn register_struct(&mut self, name: &str) -> Result<(), BuildError> {
        let class = type_name(name)?;
        let prototype = LeafType::structure(class.simple_name()).with_runtime_class(class.clone());
        self.insert(&class, prototype);
        Ok(())
    }

    /// Register a Thrift enum; enums are leaves named after themselves
    pub fn register_enum(&mut self, name: &str) -> Result<(), BuildError> {
        let class = type_name(name)?;
        let simple = class.simple_name();
        let prototype = LeafType::new(simple, simple).with_runtime_class(class.clone());
        self.insert(&class, prototype);
        Ok(())
    }

    /// Map an extra Rust type name onto an existing wire name
    pub fn register_alias(&mut self, rust_name: &str, wire_name: &str) -> Result<(), BuildError> {
        let class = type_name(rust_name)?;
        let wire = wire_name.trim();
        if wire.is_empty() {
            return Err(BuildError::registration(rust_name, "wire name is empty"));
        }
        self.insert(&class, LeafType::new(wire, class.simple_name()));
        Ok(())
    }

    /// Whether `name` (or its last path segment) is already mapped
    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(TypeRef::new(name).simple_name())
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    fn insert(&mut self, class: &TypeRef, prototype: LeafType) {
        self.prototypes
            .insert(class.simple_name().to_string(), prototype);
    }
}

/// Parse a registration name, rejecting blank paths
fn type_name(name: &str) -> Result<TypeRef, BuildError> {
    let class = TypeRef::new(name);
    if class.simple_name().is_empty() {
        return Err(BuildError::registration(name, "type name is empty"));
    }
    Ok(class)
}

impl PrimitiveClassifier for TypeRegistry {
    fn classify(&self, ty: &TypeRef) -> Result<&LeafType, BuildError> {
        self.prototypes
            .get(ty.simple_name())
            .ok_or_else(|| BuildError::classification(ty.to_string()))
    }
}
