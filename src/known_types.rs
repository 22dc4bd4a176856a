//! Known types module - the built-in Rust types and their Thrift wire names
//!
//! Single source of truth for the registry seed and for the wrappers the
//! syn introspector looks through.

/// Types carried as a Thrift `bool`
pub const BOOL_TYPE: &str = "bool";

/// Types carried as a Thrift `byte`
pub const BYTE_TYPES: &[&str] = &["i8", "u8"];

/// Types carried as a Thrift `i16`
pub const I16_TYPES: &[&str] = &["i16"];

/// Types carried as a Thrift `i32` (u16 widens)
pub const I32_TYPES: &[&str] = &["i32", "u16"];

/// Types carried as a Thrift `i64` (u32 widens, u64/usize share the signed range)
pub const I64_TYPES: &[&str] = &["i64", "u32", "u64", "isize", "usize"];

/// Types carried as a Thrift `double`
pub const DOUBLE_TYPES: &[&str] = &["f32", "f64"];

/// Types carried as a Thrift `string`
pub const STRING_TYPES: &[&str] = &["String", "str", "char"];

/// Types carried as a Thrift `binary`
pub const BINARY_TYPES: &[&str] = &["Bytes", "ByteBuf"];

/// The unit type, carried as `void`
pub const UNIT_TYPE: &str = "()";

/// Sequence containers (`list<T>`)
pub const LIST_TYPES: &[&str] = &["Vec", "VecDeque", "LinkedList"];

/// Set containers (`set<T>`)
pub const SET_TYPES: &[&str] = &["HashSet", "BTreeSet"];

/// Map containers (`map<K, V>`)
pub const MAP_TYPES: &[&str] = &["HashMap", "BTreeMap"];

/// Single-argument wrappers that have no wire representation of their own
pub const TRANSPARENT_WRAPPERS: &[&str] = &["Box", "Option", "Arc", "Rc", "Cow"];

/// Every built-in Rust name paired with its Thrift wire name
pub fn builtin_mappings() -> impl Iterator<Item = (&'static str, &'static str)> {
    let groups: [(&'static [&'static str], &'static str); 10] = [
        (BYTE_TYPES, "byte"),
        (I16_TYPES, "i16"),
        (I32_TYPES, "i32"),
        (I64_TYPES, "i64"),
        (DOUBLE_TYPES, "double"),
        (STRING_TYPES, "string"),
        (BINARY_TYPES, "binary"),
        (LIST_TYPES, "list"),
        (SET_TYPES, "set"),
        (MAP_TYPES, "map"),
    ];
    groups
        .into_iter()
        .flat_map(|(names, wire)| names.iter().map(move |name| (*name, wire)))
        .chain([(BOOL_TYPE, "bool"), (UNIT_TYPE, "void")])
}

/// Check if a type name is a wrapper the introspector looks through
pub fn is_transparent_wrapper(name: &str) -> bool {
    TRANSPARENT_WRAPPERS.contains(&name)
}
