//! Python code generator for typesharing.
//!
//! This crate renders a validated schema as a Python module of `@dataclass`
//! classes.
//!
//! # Usage
//!
//! ```
//! use typesharing_codegen::LanguageCodegen;
//! use typesharing_codegen_python::Generator;
//! use typesharing_schema::{SourceFormat, parse_str};
//!
//! let schema = parse_str(
//!     "Item:\n  type: Object\n  properties:\n    amount:\n      type: Integer\n",
//!     SourceFormat::Yaml,
//! )
//! .unwrap();
//!
//! let code = Generator::new(&schema).render();
//! assert!(code.contains("class Item:\n    amount: int\n"));
//! ```
//!
//! # Generated Output
//!
//! - `<base>_types.py` - one dataclass per object type, plus a `MissingType`
//!   marker class when some field may be absent

mod code_file;
mod generator;
mod naming;
mod target;
mod type_mapper;

pub mod ast;

pub use ast::{Dataclass, DataclassField, FromImport, MissingTypeClass};
pub use code_file::CodeFile;
pub use generator::{Generator, HEADER};
pub use naming::PY_NAMING;
pub use target::PythonTarget;
pub use type_mapper::PythonTypeMapper;
pub use typesharing_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
