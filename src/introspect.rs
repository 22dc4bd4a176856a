//! Type introspection - the view of a type the builder walks
//!
//! An introspector answers three questions about a type: is it
//! parameterized, what is its raw type, and what are its type arguments in
//! source order. [`TypeDescription`] answers them from plain data; the syn
//! based introspector lives in [`crate::parser::type_extractor`].

use crate::error::BuildError;
use crate::models::TypeRef;

pub trait TypeIntrospector {
    type Type;

    fn is_parameterized(&self, ty: &Self::Type) -> bool;

    fn raw_type_of(&self, ty: &Self::Type) -> Result<TypeRef, BuildError>;

    fn type_arguments_of<'t>(&self, ty: &'t Self::Type) -> Vec<&'t Self::Type>;
}

/// A structural description of a type: a base plus ordered type arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescription {
    Plain(TypeRef),
    Parameterized {
        raw: TypeRef,
        arguments: Vec<TypeDescription>,
    },
}

impl TypeDescription {
    pub fn plain(path: &str) -> Self {
        TypeDescription::Plain(TypeRef::new(path))
    }

    pub fn parameterized(path: &str, arguments: Vec<TypeDescription>) -> Self {
        TypeDescription::Parameterized {
            raw: TypeRef::new(path),
            arguments,
        }
    }
}

/// Introspector over [`TypeDescription`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionIntrospector;

impl TypeIntrospector for DescriptionIntrospector {
    type Type = TypeDescription;

    fn is_parameterized(&self, ty: &TypeDescription) -> bool {
        matches!(ty, TypeDescription::Parameterized { .. })
    }

    fn raw_type_of(&self, ty: &TypeDescription) -> Result<TypeRef, BuildError> {
        match ty {
            TypeDescription::Plain(raw) | TypeDescription::Parameterized { raw, .. } => {
                Ok(raw.clone())
            }
        }
    }

    fn type_arguments_of<'t>(&self, ty: &'t TypeDescription) -> Vec<&'t TypeDescription> {
        match ty {
            TypeDescription::Plain(_) => Vec::new(),
            TypeDescription::Parameterized { arguments, .. } => arguments.iter().collect(),
        }
    }
}
