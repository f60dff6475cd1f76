//! Items: the declarations that populate a module

use crate::attrs::MetaItems;
use crate::expr::Expr;
use crate::generics::GenericParams;
use crate::module::Module;
use crate::path::Path;
use crate::pattern::Pattern;
use crate::ty::TypeRef;
use ks_span::FileSpan;

/// A named declaration with visibility and attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Named<T> {
    /// Declared name
    pub name: String,
    /// `pub`
    pub is_pub: bool,
    /// Attributes written on the declaration
    pub attrs: MetaItems,
    /// The declaration itself
    pub data: T,
    /// Source location
    pub span: FileSpan,
}

impl<T> Named<T> {
    /// Named item
    pub fn new(name: impl Into<String>, is_pub: bool, data: T, span: FileSpan) -> Self {
        Self {
            name: name.into(),
            is_pub,
            attrs: MetaItems::default(),
            data,
            span,
        }
    }
}

/// A module-level item
pub type Item = Named<ItemKind>;

/// Item kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// Slot emptied by an earlier pass (e.g. a `#[cfg]`-stripped item)
    None,
    /// `mod name { .. }`
    Module(Module),
    /// `extern crate name;`
    Crate(ExternCrate),
    /// `type Name = ..;`
    Type(TypeAlias),
    /// `struct Name ..`
    Struct(Struct),
    /// `enum Name { .. }`
    Enum(Enum),
    /// `trait Name { .. }`
    Trait(Trait),
    /// `fn name(..) { .. }`
    Function(Function),
    /// `static`, `static mut` or `const`
    Static(Static),
}

/// `extern crate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternCrate {
    /// Name of the crate being imported
    pub crate_name: String,
}

/// `type Name<..> = Ty;`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    /// Generic parameters
    pub generics: GenericParams,
    /// Aliased type
    pub ty: TypeRef,
}

/// Struct declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    /// Generic parameters
    pub generics: GenericParams,
    /// Body shape
    pub data: StructData,
}

/// Struct body shapes
///
/// `struct Unit;` parses as a tuple body with no fields.
#[derive(Debug, Clone, PartialEq)]
pub enum StructData {
    /// `struct Name(A, B);`
    Tuple(Vec<TupleField>),
    /// `struct Name { a: A }`
    Named(Vec<StructField>),
}

/// Positional field
#[derive(Debug, Clone, PartialEq)]
pub struct TupleField {
    /// `pub`
    pub is_pub: bool,
    /// Field type
    pub ty: TypeRef,
    /// Field attributes
    pub attrs: MetaItems,
}

/// Named field
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    /// Field name
    pub name: String,
    /// `pub`
    pub is_pub: bool,
    /// Field type
    pub ty: TypeRef,
    /// Field attributes
    pub attrs: MetaItems,
}

impl TupleField {
    /// Tuple field
    pub fn new(is_pub: bool, ty: TypeRef) -> Self {
        Self {
            is_pub,
            ty,
            attrs: MetaItems::default(),
        }
    }
}

impl StructField {
    /// Named field
    pub fn new(name: impl Into<String>, is_pub: bool, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            is_pub,
            ty,
            attrs: MetaItems::default(),
        }
    }
}

/// Enum declaration
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
    /// Variant attributes
    pub attrs: MetaItems,
    /// Variant payload
    pub data: VariantData,
    /// Source location
    pub span: FileSpan,
}

/// Enum variant payloads
#[derive(Debug, Clone, PartialEq)]
pub enum VariantData {
    /// `Name` or `Name = discriminant`; the expression is absent for plain
    /// unit variants
    Value(Expr),
    /// `Name(A, B)`
    Tuple(Vec<TypeRef>),
    /// `Name { a: A }`
    Struct(Vec<StructField>),
}

/// Trait declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Trait {
    /// Generic parameters
    pub generics: GenericParams,
    /// `trait Name: Super + Other`
    pub supertraits: Vec<Path>,
    /// Associated items
    pub items: Vec<Named<TraitItem>>,
}

/// Associated items inside a trait
#[derive(Debug, Clone, PartialEq)]
pub enum TraitItem {
    /// `type Name: Bounds = Default;`
    Type(AssociatedType),
    /// Method or associated function
    Function(Function),
    /// Associated `const` (or `static`)
    Static(Static),
}

/// Associated type declaration
#[derive(Debug, Clone, PartialEq)]
pub struct AssociatedType {
    /// Trait bounds on the type
    pub bounds: Vec<Path>,
    /// Default type
    pub default: Option<TypeRef>,
}

/// Function declaration
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
    /// Return type (`()` when omitted)
    pub ret: TypeRef,
    /// Body; absent for trait method declarations
    pub code: Expr,
}

/// Storage class of a `static`-like item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticClass {
    /// `const`
    Const,
    /// `static`
    Static,
    /// `static mut`
    Mut,
}

/// `const` / `static` / `static mut`
#[derive(Debug, Clone, PartialEq)]
pub struct Static {
    /// Storage class
    pub class: StaticClass,
    /// Declared type
    pub ty: TypeRef,
    /// Initializer
    pub value: Expr,
}
