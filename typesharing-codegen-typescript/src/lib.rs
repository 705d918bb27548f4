//! TypeScript code generator for typesharing.
//!
//! This crate renders a validated schema as a TypeScript file of exported
//! interfaces.
//!
//! # Usage
//!
//! ```
//! use typesharing_codegen::LanguageCodegen;
//! use typesharing_codegen_typescript::Generator;
//! use typesharing_schema::{SourceFormat, parse_str};
//!
//! let schema = parse_str(
//!     r#"{"Item": {"type": "Object", "properties": {"unit_price": {"type": "Decimal"}}}}"#,
//!     SourceFormat::Json,
//! )
//! .unwrap();
//!
//! let code = Generator::new(&schema).render();
//! assert!(code.contains("export interface Item {\n  unitPrice: string;\n}\n"));
//! ```
//!
//! # Generated Output
//!
//! - `<base>_types.ts` - one interface per object type

mod code_file;
mod generator;
mod naming;
mod target;
mod type_mapper;

pub mod ast;

pub use ast::{Interface, InterfaceField};
pub use code_file::CodeFile;
pub use generator::{Generator, HEADER};
pub use naming::TS_NAMING;
pub use target::TypeScriptTarget;
pub use type_mapper::TypeScriptTypeMapper;
pub use typesharing_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
