pub mod type_extractor;
pub mod type_parser;

pub use type_extractor::{find_type_param, parse_type_expr, SynIntrospector};
pub use type_parser::parse_items;
