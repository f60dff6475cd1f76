//! Generic parameter lists and where-clause bounds

use crate::expr::Expr;
use crate::path::Path;
use crate::ty::TypeRef;
use ks_span::FileSpan;

/// Generic parameters of an item, with inline bounds already moved into
/// `bounds` by the parser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericParams {
    /// Parameters in declaration order
    pub params: Vec<GenericParam>,
    /// Bounds from both inline position and the where clause
    pub bounds: Vec<GenericBound>,
}

/// One generic parameter
#[derive(Debug, Clone, PartialEq)]
pub enum GenericParam {
    /// `'a`
    Lifetime {
        /// Lifetime name without the quote
        name: String,
        /// Source location
        span: FileSpan,
    },
    /// `T` or `T = Default`
    Type {
        /// Parameter name
        name: String,
        /// Default type
        default: Option<TypeRef>,
        /// Source location
        span: FileSpan,
    },
    /// `const N: usize` or `const N: usize = 4`
    Const {
        /// Parameter name
        name: String,
        /// Declared type
        ty: TypeRef,
        /// Default value
        default: Expr,
        /// Source location
        span: FileSpan,
    },
}

/// A single bound
#[derive(Debug, Clone, PartialEq)]
pub enum GenericBound {
    /// `'a: 'b`
    Lifetime {
        /// Constrained lifetime
        test: String,
        /// Lifetime it must outlive
        bound: String,
    },
    /// `T: 'a`
    TypeLifetime {
        /// Constrained type
        ty: TypeRef,
        /// Lifetime it must outlive
        bound: String,
    },
    /// `for<'a> T: Trait`
    IsTrait {
        /// Higher-ranked lifetime binders
        hrls: Vec<String>,
        /// Constrained type
        ty: TypeRef,
        /// Required trait
        trait_: Path,
    },
    /// `T: ?Trait`
    MaybeTrait {
        /// Constrained type
        ty: TypeRef,
        /// Relaxed trait
        trait_: Path,
    },
    /// `T = U` (associated type equality)
    Equality {
        /// Left-hand type
        ty: TypeRef,
        /// Right-hand type
        replacement: TypeRef,
    },
}

impl GenericParams {
    /// Whether there are no parameters and no bounds
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.bounds.is_empty()
    }
}
