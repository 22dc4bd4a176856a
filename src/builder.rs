//! Tree builder - turns a type into a [`GenericType`] tree

use tracing::debug;

use crate::classifier::{PrimitiveClassifier, TypeRegistry};
use crate::error::BuildError;
use crate::introspect::TypeIntrospector;
use crate::models::{GenericType, LeafType, TypeNode};
use crate::parser::type_extractor::{parse_type_expr, SynIntrospector};

/// Nesting limit used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Builds descriptor trees by walking types through an introspector and
/// classifying every base and leaf argument.
#[derive(Debug, Clone)]
pub struct TypeBuilder<I, C> {
    introspector: I,
    classifier: C,
    max_depth: usize,
}

impl<I, C> TypeBuilder<I, C>
where
    I: TypeIntrospector,
    C: PrimitiveClassifier,
{
    pub fn new(introspector: I, classifier: C) -> Self {
        Self {
            introspector,
            classifier,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how many parameterized levels may be nested
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build the descriptor tree for `ty`.
    ///
    /// Fails on the first base or argument that cannot be classified; no
    /// partial tree is returned.
    pub fn build(&self, ty: &I::Type) -> Result<GenericType, BuildError> {
        self.build_at(ty, 1)
    }

    fn build_at(&self, ty: &I::Type, depth: usize) -> Result<GenericType, BuildError> {
        let raw = self.introspector.raw_type_of(ty)?;
        let base = self.classifier.classify(&raw)?;

        if !self.introspector.is_parameterized(ty) {
            return Ok(GenericType::from_leaf(base.clone()));
        }

        if depth > self.max_depth {
            return Err(BuildError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        debug!(raw = %raw, depth, "building parameterized node");

        let mut node = GenericType::from_leaf(base.clone());
        for argument in self.introspector.type_arguments_of(ty) {
            let child = if self.introspector.is_parameterized(argument) {
                TypeNode::Generic(self.build_at(argument, depth + 1)?)
            } else {
                TypeNode::Leaf(self.classify_argument(argument)?)
            };
            node.push(child);
        }

        Ok(node)
    }

    /// Classify a non-parameterized argument into a leaf owned by the tree.
    ///
    /// Struct prototypes are shared across every use of the struct, so they
    /// are copied through [`LeafType::clone_for`] and bound to the argument's
    /// own type reference.
    fn classify_argument(&self, argument: &I::Type) -> Result<LeafType, BuildError> {
        let class = self.introspector.raw_type_of(argument)?;
        let prototype = self.classifier.classify(&class)?;

        if prototype.is_struct() {
            Ok(prototype.clone_for(&class))
        } else {
            Ok(prototype.clone())
        }
    }
}

/// Parse a Rust type expression and build its tree against `registry`
pub fn signature_of(expr: &str, registry: &TypeRegistry) -> Result<GenericType, BuildError> {
    let ty = parse_type_expr(expr)?;
    TypeBuilder::new(SynIntrospector, registry).build(&ty)
}
