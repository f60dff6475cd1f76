//! High-level Intermediate Representation (HIR)
//!
//! The HIR is the canonical form of a crate after lowering: sugar is gone,
//! every item path is absolute, and each module keeps its items in two
//! namespaces (types and values) keyed by name. Later passes (name
//! resolution proper, type inference, trait solving) consume it.

pub mod expr;
pub mod generics;
pub mod item;
pub mod module;
pub mod path;
pub mod pattern;
pub mod ty;

pub use expr::{BinOp, Body, Expr, ExprId, ExprPtr, Literal, MatchArm, Stmt, StmtId, UniOp};
pub use generics::{ConstParamDef, GenericBound, GenericParams, LifetimeDef, TypeParamDef};
pub use item::{
    AssociatedType, Constant, Enum, EnumVariant, Function, Static, Struct, StructData, Trait,
    TraitValueItem, TypeAlias, VariantData, VisEnt,
};
pub use module::{Module, NameCollision, Namespace, TypeItem, ValueItem};
pub use path::{GenericPath, Path, PathParams, SimplePath};
pub use pattern::{BindingMode, Pattern, PatternBinding, PatternKind};
pub use ty::{BorrowType, CoreType, FunctionType, GenericIndex, TypeRef};

use ks_macro::MacroRules;
use rustc_hash::FxHashMap;

/// A lowered crate
#[derive(Debug, Clone, PartialEq)]
pub struct Crate {
    /// Root module; its path is the crate root
    pub root_module: Module,
    /// Every `macro_rules!` visible at the crate root, by name
    pub macros: FxHashMap<String, MacroRules>,
}

impl Crate {
    /// Crate with no macros
    pub fn new(root_module: Module) -> Self {
        Self {
            root_module,
            macros: FxHashMap::default(),
        }
    }

    /// Macro called `name`
    pub fn macro_rules(&self, name: &str) -> Option<&MacroRules> {
        self.macros.get(name)
    }
}
