//! Surface type expressions

use crate::expr::{Expr, MacroInvocation};
use crate::path::Path;
use ks_span::FileSpan;

/// Primitive type keywords as the parser sees them
///
/// `Any` and `Invalid` are parser-internal markers: `Any` stands for a
/// numeric type still to be inferred, `Invalid` for a keyword that failed
/// to parse. Neither is meaningful once the crate reaches lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreType {
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `i8`
    I8,
    /// `u8`
    U8,
    /// `i16`
    I16,
    /// `u16`
    U16,
    /// `i32`
    I32,
    /// `u32`
    U32,
    /// `i64`
    I64,
    /// `u64`
    U64,
    /// `isize`
    Isize,
    /// `usize`
    Usize,
    /// Numeric type still to be inferred
    Any,
    /// Keyword that failed to parse
    Invalid,
}

impl CoreType {
    /// Look up a primitive type keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "bool" => Self::Bool,
            "char" => Self::Char,
            "f32" => Self::F32,
            "f64" => Self::F64,
            "i8" => Self::I8,
            "u8" => Self::U8,
            "i16" => Self::I16,
            "u16" => Self::U16,
            "i32" => Self::I32,
            "u32" => Self::U32,
            "i64" => Self::I64,
            "u64" => Self::U64,
            "isize" => Self::Isize,
            "usize" => Self::Usize,
            _ => return None,
        })
    }
}

/// A type expression with its source location
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    /// What kind of type this is
    pub data: TypeData,
    /// Source location
    pub span: FileSpan,
}

/// Type expression variants
#[derive(Debug, Clone, PartialEq)]
pub enum TypeData {
    /// Placeholder left by the parser; never valid in a finished AST
    None,
    /// `_`, or an omitted annotation
    Any,
    /// `()`
    Unit,
    /// Macro invocation in type position
    Macro(MacroInvocation),
    /// Primitive keyword type
    Primitive(CoreType),
    /// `(A, B, ...)`
    Tuple(Vec<TypeRef>),
    /// `&T` / `&mut T`
    Borrow {
        /// `&mut`
        is_mut: bool,
        /// Referenced type
        inner: Box<TypeRef>,
    },
    /// `*const T` / `*mut T`
    Pointer {
        /// `*mut`
        is_mut: bool,
        /// Pointee type
        inner: Box<TypeRef>,
    },
    /// `[T; N]`, or `[T]` when the size expression is absent
    Array {
        /// Element type
        inner: Box<TypeRef>,
        /// Unevaluated size expression
        size: Expr,
    },
    /// Named type
    Path(Path),
    /// `dyn A + B`, optionally `for<'a>`-qualified
    TraitObject {
        /// Higher-ranked lifetime binders (`for<'a, ...>`)
        hrls: Vec<String>,
        /// Trait paths
        traits: Vec<Path>,
    },
    /// `fn(A, B) -> C`
    Function(FunctionType),
    /// Reference to a type parameter in scope
    Generic {
        /// Parameter name
        name: String,
    },
}

/// Function pointer type signature
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    /// `unsafe fn`
    pub is_unsafe: bool,
    /// ABI string; empty for the default ABI
    pub abi: String,
    /// Argument types
    pub args: Vec<TypeRef>,
    /// Return type (`()` when omitted)
    pub ret: Box<TypeRef>,
}

impl TypeRef {
    /// Type with explicit data
    pub fn new(data: TypeData, span: FileSpan) -> Self {
        Self { data, span }
    }

    /// Inferred type, used for omitted annotations
    pub fn any(span: FileSpan) -> Self {
        Self::new(TypeData::Any, span)
    }

    /// `()`
    pub fn unit(span: FileSpan) -> Self {
        Self::new(TypeData::Unit, span)
    }

    /// Scalar keyword type
    pub fn primitive(core: CoreType, span: FileSpan) -> Self {
        Self::new(TypeData::Primitive(core), span)
    }

    /// Path type, spanning the path
    pub fn path(path: Path) -> Self {
        let span = path.span;
        Self::new(TypeData::Path(path), span)
    }

    /// Reference to generic parameter `name`
    pub fn generic(name: impl Into<String>, span: FileSpan) -> Self {
        Self::new(TypeData::Generic { name: name.into() }, span)
    }

    /// `(A, B, ..)`
    pub fn tuple(types: Vec<TypeRef>, span: FileSpan) -> Self {
        Self::new(TypeData::Tuple(types), span)
    }

    /// `&T` / `&mut T`
    pub fn borrow(is_mut: bool, inner: TypeRef, span: FileSpan) -> Self {
        Self::new(
            TypeData::Borrow {
                is_mut,
                inner: Box::new(inner),
            },
            span,
        )
    }

    /// `*const T` / `*mut T`
    pub fn pointer(is_mut: bool, inner: TypeRef, span: FileSpan) -> Self {
        Self::new(
            TypeData::Pointer {
                is_mut,
                inner: Box::new(inner),
            },
            span,
        )
    }

    /// `[T; size]`
    pub fn array(inner: TypeRef, size: Expr, span: FileSpan) -> Self {
        Self::new(
            TypeData::Array {
                inner: Box::new(inner),
                size,
            },
            span,
        )
    }
}
