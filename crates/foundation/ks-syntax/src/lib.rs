//! Surface syntax tree
//!
//! The AST is the shape of the program as written: it still carries macro
//! invocations, sugar such as `while let`, and type expressions exactly as
//! spelled. Parsing, macro expansion and name resolution produce and refine
//! it; HIR lowering consumes it.

pub mod attrs;
pub mod expr;
pub mod generics;
pub mod item;
pub mod module;
pub mod path;
pub mod pattern;
pub mod ty;

pub use attrs::{MetaItem, MetaItemData, MetaItems};
pub use expr::{
    BinOp, Block, Expr, ExprKind, ExprNode, Literal, MacroInvocation, MatchArm, Statement, UniOp,
};
pub use generics::{GenericBound, GenericParam, GenericParams};
pub use item::{
    AssociatedType, Enum, EnumVariant, ExternCrate, Function, Item, ItemKind, Named, Static,
    StaticClass, Struct, StructData, StructField, Trait, TraitItem, TupleField, TypeAlias,
    VariantData,
};
pub use module::{Crate, MacroDefinition, MacroImport, Module};
pub use path::{Path, PathClass, PathNode, PathParams};
pub use pattern::{Pattern, PatternBinding, PatternKind, RefMode};
pub use ty::{CoreType, FunctionType, TypeData, TypeRef};
