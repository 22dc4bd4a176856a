mod generic_type;
mod leaf_type;
mod parse_result;
mod type_ref;
mod types;

pub use generic_type::{GenericType, TypeNode};
pub use leaf_type::LeafType;
pub use parse_result::ParseResult;
pub use type_ref::TypeRef;
pub use types::{StructField, ThriftEnum, ThriftStruct};
