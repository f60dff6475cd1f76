//! AST to HIR lowering
//!
//! A single recursive pass over a name-resolved, macro-expanded crate. It
//! canonicalizes types and paths, splits every module's items into type and
//! value namespaces, names anonymous modules by position, and gathers the
//! crate's `macro_rules!` into one table. Any construct it cannot lower
//! aborts the pass with a [`LowerError`]; nothing is recovered locally.

pub mod config;
pub mod error;
pub mod expr;
pub mod generics;
pub mod item;
pub mod module;
pub mod path;
pub mod pattern;
pub mod ty;

pub use config::{ConfigError, LowerConfig, MacroConflictPolicy};
pub use error::{ErrorKind, LowerError, LowerResult};
pub use expr::lower_expr;
pub use generics::lower_generic_params;
pub use item::{
    lower_constant, lower_enum, lower_function, lower_static, lower_struct, lower_trait,
    lower_type_alias, lower_value_static, struct_value_item,
};
pub use module::{lower_crate, lower_module};
pub use path::{lower_generic_path, lower_path, lower_path_params};
pub use pattern::lower_pattern;
pub use ty::{lower_core_type, lower_type};
