//! Canonical generic parameter lists

use crate::expr::ExprPtr;
use crate::path::GenericPath;
use crate::ty::TypeRef;

/// Generic parameters of an item, split by kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericParams {
    /// Type parameters
    pub types: Vec<TypeParamDef>,
    /// Lifetime parameters
    pub lifetimes: Vec<LifetimeDef>,
    /// Const parameters
    pub consts: Vec<ConstParamDef>,
    /// Bounds
    pub bounds: Vec<GenericBound>,
}

impl GenericParams {
    /// Whether there are no parameters and no bounds
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.lifetimes.is_empty()
            && self.consts.is_empty()
            && self.bounds.is_empty()
    }

    /// Type parameter called `name`
    pub fn type_param(&self, name: &str) -> Option<&TypeParamDef> {
        self.types.iter().find(|param| param.name == name)
    }
}

/// Type parameter; `index` is its position among the type parameters
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParamDef {
    /// Parameter name
    pub name: String,
    /// Position among type parameters
    pub index: u32,
    /// Default type
    pub default: Option<TypeRef>,
}

/// Lifetime parameter; `index` is its position among the lifetimes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifetimeDef {
    /// Lifetime name, without the quote
    pub name: String,
    /// Position among lifetimes
    pub index: u32,
}

/// Const parameter; `index` is its position among the const parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ConstParamDef {
    /// Parameter name
    pub name: String,
    /// Position among const parameters
    pub index: u32,
    /// Value type
    pub ty: TypeRef,
    /// Default value; empty when omitted
    pub default: ExprPtr,
}

/// A bound from a parameter list or where clause
#[derive(Debug, Clone, PartialEq)]
pub enum GenericBound {
    /// `'test: 'valid_for`
    Lifetime {
        /// Constrained lifetime
        test: String,
        /// Lifetime it must outlive
        valid_for: String,
    },
    /// `T: 'valid_for`
    TypeLifetime {
        /// Constrained type
        ty: TypeRef,
        /// Lifetime it must outlive
        valid_for: String,
    },
    /// `for<'a> T: Trait`
    TraitBound {
        /// Higher-ranked lifetimes
        hrls: Vec<String>,
        /// Constrained type
        ty: TypeRef,
        /// Required trait
        trait_: GenericPath,
    },
    /// `T: ?Trait`
    MaybeTrait {
        /// Constrained type
        ty: TypeRef,
        /// Relaxed trait
        trait_: GenericPath,
    },
    /// `T == U`
    TypeEquality {
        /// Left-hand type
        ty: TypeRef,
        /// Right-hand type
        other_type: TypeRef,
    },
}
