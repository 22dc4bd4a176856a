use syn::{GenericArgument, PathArguments, Type, TypePath};

use crate::error::BuildError;
use crate::introspect::TypeIntrospector;
use crate::known_types;
use crate::models::TypeRef;

/// Raw type reported for slices and arrays
const SEQUENCE_TYPE: &str = "Vec";

/// Introspector over parsed Rust type expressions.
///
/// References, parentheses and the single-argument wrappers listed in
/// [`known_types::TRANSPARENT_WRAPPERS`] are looked through. Slices and
/// arrays report as `Vec<T>`. Lifetime and const arguments are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynIntrospector;

/// Parse a type expression such as `Vec<HashMap<String, Order>>`
pub fn parse_type_expr(input: &str) -> Result<Type, BuildError> {
    syn::parse_str(input).map_err(|err| BuildError::Parse {
        input: input.to_string(),
        message: err.to_string(),
    })
}

impl TypeIntrospector for SynIntrospector {
    type Type = Type;

    fn is_parameterized(&self, ty: &Type) -> bool {
        !self.type_arguments_of(ty).is_empty()
    }

    fn raw_type_of(&self, ty: &Type) -> Result<TypeRef, BuildError> {
        match peel(ty) {
            Type::Path(type_path) => path_ref(type_path),
            Type::Slice(_) | Type::Array(_) => Ok(TypeRef::new(SEQUENCE_TYPE)),
            Type::Tuple(tuple) if tuple.elems.is_empty() => {
                Ok(TypeRef::new(known_types::UNIT_TYPE))
            }
            other => Err(BuildError::unsupported(describe(other))),
        }
    }

    fn type_arguments_of<'t>(&self, ty: &'t Type) -> Vec<&'t Type> {
        match peel(ty) {
            Type::Path(type_path) => type_path
                .path
                .segments
                .last()
                .map(|segment| type_args(&segment.arguments))
                .unwrap_or_default(),
            Type::Slice(slice) => vec![&*slice.elem],
            Type::Array(array) => vec![&*array.elem],
            _ => Vec::new(),
        }
    }
}

/// First of `params` that `ty` mentions as a bare type, at any nesting level
pub fn find_type_param<'p>(ty: &Type, params: &'p [String]) -> Option<&'p str> {
    if params.is_empty() {
        return None;
    }
    if let Ok(raw) = SynIntrospector.raw_type_of(ty) {
        if let [name] = raw.segments() {
            if let Some(param) = params.iter().find(|param| *param == name) {
                return Some(param.as_str());
            }
        }
    }
    SynIntrospector
        .type_arguments_of(ty)
        .into_iter()
        .find_map(|arg| find_type_param(arg, params))
}

/// Strip everything that has no wire representation of its own
fn peel(ty: &Type) -> &Type {
    match ty {
        Type::Reference(reference) => peel(&reference.elem),
        Type::Paren(paren) => peel(&paren.elem),
        Type::Group(group) => peel(&group.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let Some(segment) = type_path.path.segments.last() else {
                return ty;
            };
            if !known_types::is_transparent_wrapper(&segment.ident.to_string()) {
                return ty;
            }
            match type_args(&segment.arguments).as_slice() {
                [inner] => peel(*inner),
                _ => ty,
            }
        }
        _ => ty,
    }
}

fn path_ref(type_path: &TypePath) -> Result<TypeRef, BuildError> {
    if type_path.qself.is_some() {
        return Err(BuildError::unsupported("qualified self type"));
    }
    let segments: Vec<String> = type_path
        .path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    if segments.is_empty() {
        return Err(BuildError::unsupported("empty path"));
    }
    Ok(TypeRef::from_segments(segments))
}

/// Type arguments of an angle-bracketed segment, in source order
fn type_args(args: &PathArguments) -> Vec<&Type> {
    match args {
        PathArguments::AngleBracketed(angle) => angle
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn describe(ty: &Type) -> String {
    let kind = match ty {
        Type::Tuple(_) => "tuple",
        Type::BareFn(_) => "function pointer",
        Type::TraitObject(_) => "trait object",
        Type::ImplTrait(_) => "impl Trait",
        Type::Ptr(_) => "raw pointer",
        Type::Never(_) => "never type",
        Type::Infer(_) => "inferred type",
        Type::Macro(_) => "type macro",
        _ => "type expression",
    };
    kind.to_string()
}
