//! Item definitions stored in module namespaces

use crate::expr::ExprPtr;
use crate::generics::GenericParams;
use crate::module::{NameCollision, Namespace};
use crate::path::GenericPath;
use crate::pattern::Pattern;
use crate::ty::TypeRef;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Visibility wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct VisEnt<T> {
    /// Publicly visible
    pub is_pub: bool,
    /// Wrapped entry
    pub ent: T,
}

impl<T> VisEnt<T> {
    /// Wrap `ent`
    pub fn new(is_pub: bool, ent: T) -> Self {
        Self { is_pub, ent }
    }
}

/// `type Name<..> = Ty;`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    /// Generic parameters
    pub generics: GenericParams,
    /// Aliased type
    pub ty: TypeRef,
}

/// Struct definition
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    /// Generic parameters
    pub generics: GenericParams,
    /// Fields
    pub data: StructData,
}

/// Struct field layout
#[derive(Debug, Clone, PartialEq)]
pub enum StructData {
    /// `struct U;`
    Unit,
    /// `struct T(A, B);`
    Tuple(Vec<VisEnt<TypeRef>>),
    /// `struct S { a: A }`
    Named(Vec<(String, VisEnt<TypeRef>)>),
}

impl StructData {
    /// Whether the struct name also lives in the value namespace
    pub fn has_value_item(&self) -> bool {
        !matches!(self, Self::Named(_))
    }
}

/// Enum definition
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    /// Generic parameters
    pub generics: GenericParams,
    /// Variants in declaration order
    pub variants: Vec<EnumVariant>,
}

/// Enum variant
#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariant {
    /// Variant name
    pub name: String,
    /// Payload
    pub data: VariantData,
}

/// Enum variant payload
#[derive(Debug, Clone, PartialEq)]
pub enum VariantData {
    /// `A`
    Unit,
    /// `A = expr`
    Value(ExprPtr),
    /// `A(T, U)`
    Tuple(Vec<TypeRef>),
    /// `A { x: T }`
    Struct(Vec<(String, TypeRef)>),
}

/// Trait definition
#[derive(Debug, Clone, PartialEq)]
pub struct Trait {
    /// Generic parameters
    pub generics: GenericParams,
    /// Supertraits
    pub parent_traits: Vec<GenericPath>,
    /// Associated types
    pub types: FxHashMap<String, AssociatedType>,
    /// Associated functions, constants and statics
    pub values: FxHashMap<String, TraitValueItem>,
}

impl Trait {
    /// Trait with no associated items
    pub fn new(generics: GenericParams, parent_traits: Vec<GenericPath>) -> Self {
        Self {
            generics,
            parent_traits,
            types: FxHashMap::default(),
            values: FxHashMap::default(),
        }
    }

    /// Add an associated type, rejecting a duplicate name
    pub fn add_type(&mut self, name: String, ty: AssociatedType) -> Result<(), NameCollision> {
        match self.types.entry(name) {
            Entry::Occupied(entry) => Err(NameCollision::new(Namespace::Type, entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(ty);
                Ok(())
            }
        }
    }

    /// Add an associated value, rejecting a duplicate name
    pub fn add_value(&mut self, name: String, value: TraitValueItem) -> Result<(), NameCollision> {
        match self.values.entry(name) {
            Entry::Occupied(entry) => Err(NameCollision::new(Namespace::Value, entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }
}

/// Associated type declaration
#[derive(Debug, Clone, PartialEq)]
pub struct AssociatedType {
    /// Trait bounds
    pub bounds: Vec<GenericPath>,
    /// Default, if provided
    pub default: Option<TypeRef>,
}

/// Value item declared in a trait
#[derive(Debug, Clone, PartialEq)]
pub enum TraitValueItem {
    /// `const`
    Constant(Constant),
    /// `static`
    Static(Static),
    /// `fn`
    Function(Function),
}

/// Function definition
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Generic parameters
    pub generics: GenericParams,
    /// `unsafe fn`
    pub is_unsafe: bool,
    /// `const fn`
    pub is_const: bool,
    /// ABI string; empty for the default ABI
    pub abi: String,
    /// Argument patterns and types
    pub args: Vec<(Pattern, TypeRef)>,
    /// Return type
    pub ret: TypeRef,
    /// Body; empty for declarations
    pub code: ExprPtr,
}

/// `const`
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    /// Generic parameters
    pub generics: GenericParams,
    /// Declared type
    pub ty: TypeRef,
    /// Initializer; empty in trait declarations
    pub value: ExprPtr,
}

/// `static` / `static mut`
#[derive(Debug, Clone, PartialEq)]
pub struct Static {
    /// `static mut`
    pub is_mut: bool,
    /// Declared type
    pub ty: TypeRef,
    /// Initializer; empty for extern statics
    pub value: ExprPtr,
}
