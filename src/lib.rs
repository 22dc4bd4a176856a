//! # thrift-sig
//!
//! A CLI tool and library that turns Rust type expressions, nested generics
//! included, into Thrift wire-type signatures.
//!
//! A type such as `Vec<HashMap<String, Order>>` is walked into a
//! [`models::GenericType`] tree. The tree renders two ways:
//! - **wire form**: `list<map<string, Order>>`, the signature an IDL or
//!   serializer understands.
//! - **display form**: `<<StringOrder>>`, a compact debug rendering.
//!
//! The walk is generic over a [`introspect::TypeIntrospector`] (how a type
//! reports its raw type and arguments) and a [`classifier::PrimitiveClassifier`]
//! (how a raw type maps to a leaf descriptor).
//!
//! ## Usage
//!
//! ```rust
//! use thrift_sig::builder::signature_of;
//! use thrift_sig::classifier::TypeRegistry;
//!
//! let mut registry = TypeRegistry::with_builtins();
//! registry.register_struct("Order")?;
//!
//! let tree = signature_of("Vec<HashMap<String, Order>>", &registry)?;
//! assert_eq!(tree.render_wire(), "list<map<string, Order>>");
//! assert_eq!(tree.render_display(), "<<StringOrder>>");
//! # Ok::<(), thrift_sig::BuildError>(())
//! ```
//!
//! The `generate` command scans a source tree for types deriving `Thrift`,
//! `Serialize` or `Deserialize` and writes every field's signature to a TOML
//! report:
//!
//! ```rust,no_run
//! use thrift_sig::config::Config;
//! use thrift_sig::pipeline::Pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load(std::path::Path::new("thrift-sig.toml"))?;
//!     let report = Pipeline::new(false).run(&config)?;
//!     println!("{} signatures", report.field_count());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod introspect;
pub mod known_types;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod scanner;

pub use builder::{signature_of, TypeBuilder};
pub use error::BuildError;
pub use thrift_sig_derive::Thrift;
