use std::path::PathBuf;

/// A struct found in the scanned sources
#[derive(Debug, Clone)]
pub struct ThriftStruct {
    /// Name of the struct
    pub name: String,
    /// Generic type parameters (e.g., ["T", "U"])
    pub generics: Vec<String>,
    /// Fields in declaration order, `#[thrift(skip)]` fields removed
    pub fields: Vec<StructField>,
    /// Source file where the struct was found
    pub source_file: PathBuf,
}

/// A struct field
#[derive(Debug, Clone)]
pub struct StructField {
    /// Field name
    pub name: String,
    /// Field type as written
    pub ty: syn::Type,
}

/// An enum found in the scanned sources
#[derive(Debug, Clone)]
pub struct ThriftEnum {
    /// Name of the enum
    pub name: String,
    /// Variant names
    pub variants: Vec<String>,
    /// Whether any variant carries data (a Thrift `union`)
    pub has_data: bool,
    /// Source file where the enum was found
    pub source_file: PathBuf,
}

impl ThriftEnum {
    /// Unions are structured types on the wire, plain enums are leaves
    pub fn is_union(&self) -> bool {
        self.has_data
    }
}
