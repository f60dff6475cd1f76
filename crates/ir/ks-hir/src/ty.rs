//! Canonical types

use crate::expr::ExprPtr;
use crate::path::{GenericPath, Path};
use derive_more::Display;
use std::fmt;

/// Scalar types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CoreType {
    /// `bool`
    #[display("bool")]
    Bool,
    /// `char`
    #[display("char")]
    Char,
    /// `f32`
    #[display("f32")]
    F32,
    /// `f64`
    #[display("f64")]
    F64,
    /// `i8`
    #[display("i8")]
    I8,
    /// `u8`
    #[display("u8")]
    U8,
    /// `i16`
    #[display("i16")]
    I16,
    /// `u16`
    #[display("u16")]
    U16,
    /// `i32`
    #[display("i32")]
    I32,
    /// `u32`
    #[display("u32")]
    U32,
    /// `i64`
    #[display("i64")]
    I64,
    /// `u64`
    #[display("u64")]
    U64,
    /// `isize`
    #[display("isize")]
    Isize,
    /// `usize`
    #[display("usize")]
    Usize,
}

/// Reference kind of a borrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BorrowType {
    /// `&T`
    #[display("&")]
    Shared,
    /// `&mut T`
    #[display("&mut ")]
    Unique,
}

impl BorrowType {
    /// `Unique` for `&mut`
    pub fn from_mut(is_mut: bool) -> Self {
        if is_mut { Self::Unique } else { Self::Shared }
    }
}

/// Position of a type parameter reference
///
/// Lowering only knows the parameter's name. The index is filled in by the
/// generic resolution pass; until then it is `Unresolved` and must not be
/// used to look anything up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GenericIndex {
    /// Not yet resolved
    #[default]
    Unresolved,
    /// Resolved position
    Bound(u32),
}

impl GenericIndex {
    /// Raw index stored for unresolved parameters
    pub const SENTINEL: u32 = 0;

    /// Whether resolution has assigned an index
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Numeric form, [`Self::SENTINEL`] when unresolved
    pub fn raw(self) -> u32 {
        match self {
            Self::Unresolved => Self::SENTINEL,
            Self::Bound(index) => index,
        }
    }
}

/// Function pointer signature
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    /// `unsafe fn`
    pub is_unsafe: bool,
    /// ABI string; empty for the default ABI
    pub abi: String,
    /// Argument types
    pub args: Vec<TypeRef>,
    /// Return type
    pub ret: Box<TypeRef>,
}

/// Canonical type
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// To be inferred
    Infer,
    /// Scalar
    Primitive(CoreType),
    /// Tuple; `()` is the empty tuple
    Tuple(Vec<TypeRef>),
    /// Reference
    Borrow {
        /// Shared or unique
        kind: BorrowType,
        /// Referenced type
        inner: Box<TypeRef>,
    },
    /// Raw pointer
    Pointer {
        /// `*mut`
        is_mut: bool,
        /// Pointee type
        inner: Box<TypeRef>,
    },
    /// Array, or slice when `size` is empty
    Array {
        /// Element type
        inner: Box<TypeRef>,
        /// Unevaluated size expression
        size: ExprPtr,
    },
    /// Named type
    Path(Path),
    /// `dyn A + B`
    TraitObject {
        /// Traits in source order
        traits: Vec<GenericPath>,
    },
    /// Function pointer
    Function(FunctionType),
    /// Type parameter reference
    Generic {
        /// Parameter name
        name: String,
        /// Parameter position
        index: GenericIndex,
    },
}

impl TypeRef {
    /// `()`
    pub fn unit() -> Self {
        Self::Tuple(Vec::new())
    }

    /// Whether this is `()`
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Tuple(types) if types.is_empty())
    }
}

impl From<CoreType> for TypeRef {
    fn from(core: CoreType) -> Self {
        Self::Primitive(core)
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infer => f.write_str("_"),
            Self::Primitive(core) => write!(f, "{core}"),
            Self::Tuple(types) => {
                f.write_str("(")?;
                write_list(f, types, ", ")?;
                if types.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Borrow { kind, inner } => write!(f, "{kind}{inner}"),
            Self::Pointer { is_mut, inner } => {
                write!(f, "*{} {inner}", if *is_mut { "mut" } else { "const" })
            }
            Self::Array { inner, size } if size.is_valid() => write!(f, "[{inner}; {size}]"),
            Self::Array { inner, .. } => write!(f, "[{inner}]"),
            Self::Path(path) => write!(f, "{path}"),
            Self::TraitObject { traits } => {
                f.write_str("dyn ")?;
                write_list(f, traits, " + ")
            }
            Self::Function(func) => {
                if func.is_unsafe {
                    f.write_str("unsafe ")?;
                }
                if !func.abi.is_empty() {
                    write!(f, "extern \"{}\" ", func.abi)?;
                }
                f.write_str("fn(")?;
                write_list(f, &func.args, ", ")?;
                f.write_str(")")?;
                if !func.ret.is_unit() {
                    write!(f, " -> {}", func.ret)?;
                }
                Ok(())
            }
            Self::Generic { name, index } => match index {
                GenericIndex::Unresolved => write!(f, "{name}/*?*/"),
                GenericIndex::Bound(index) => write!(f, "{name}/*{index}*/"),
            },
        }
    }
}
