//! Canonical paths

use crate::ty::TypeRef;
use std::fmt;

/// Crate-rooted path made only of names
///
/// Built from a crate root by [`SimplePath::join`], which returns a new path
/// and leaves the parent untouched, so sibling paths never share state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SimplePath {
    /// Crate the path is rooted in; empty for the crate being compiled
    pub crate_name: String,
    /// Segments below the crate root
    pub components: Vec<String>,
}

impl SimplePath {
    /// Root of the named crate
    pub fn new(crate_name: impl Into<String>) -> Self {
        Self {
            crate_name: crate_name.into(),
            components: Vec::new(),
        }
    }

    /// Child path `self::name`
    #[must_use]
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut components = Vec::with_capacity(self.components.len() + 1);
        components.extend(self.components.iter().cloned());
        components.push(name.into());
        Self {
            crate_name: self.crate_name.clone(),
            components,
        }
    }

    /// Whether this is a crate root
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Final segment, `None` at a crate root
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }
}

impl fmt::Display for SimplePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.crate_name.is_empty() {
            write!(f, "::\"{}\"", self.crate_name)?;
        } else if self.components.is_empty() {
            return f.write_str("::");
        }
        for component in &self.components {
            write!(f, "::{component}")?;
        }
        Ok(())
    }
}

/// Generic arguments attached to a path
///
/// Lifetime arguments are erased during lowering and have no slot here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathParams {
    /// Type arguments in order
    pub types: Vec<TypeRef>,
    /// Associated type bindings (`Item = T`)
    pub bindings: Vec<(String, TypeRef)>,
}

impl PathParams {
    /// Whether no arguments are given
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.bindings.is_empty()
    }
}

impl fmt::Display for PathParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        let mut first = true;
        for ty in &self.types {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{ty}")?;
        }
        for (name, ty) in &self.bindings {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{name}={ty}")?;
        }
        f.write_str(">")
    }
}

/// A simple path plus the generic arguments of its final segment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericPath {
    /// Item path
    pub path: SimplePath,
    /// Generic arguments
    pub params: PathParams,
}

impl GenericPath {
    /// Path with arguments
    pub fn new(path: SimplePath, params: PathParams) -> Self {
        Self { path, params }
    }
}

impl From<SimplePath> for GenericPath {
    fn from(path: SimplePath) -> Self {
        Self::new(path, PathParams::default())
    }
}

impl fmt::Display for GenericPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.params)
    }
}

/// Canonical path to an item or associated item
#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    /// Path to a module-level item
    Generic(GenericPath),
    /// `<T as Trait>::item`
    UfcsKnown {
        /// Self type
        ty: Box<TypeRef>,
        /// Trait the item belongs to
        trait_: GenericPath,
        /// Associated item name
        item: String,
        /// Generic arguments of the item
        params: PathParams,
    },
    /// `<T>::item`, trait still to be found
    UfcsUnknown {
        /// Self type
        ty: Box<TypeRef>,
        /// Associated item name
        item: String,
        /// Generic arguments of the item
        params: PathParams,
    },
}

impl From<GenericPath> for Path {
    fn from(path: GenericPath) -> Self {
        Self::Generic(path)
    }
}

impl From<SimplePath> for Path {
    fn from(path: SimplePath) -> Self {
        Self::Generic(path.into())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic(path) => write!(f, "{path}"),
            Self::UfcsKnown {
                ty,
                trait_,
                item,
                params,
            } => write!(f, "<{ty} as {trait_}>::{item}{params}"),
            Self::UfcsUnknown { ty, item, params } => write!(f, "<{ty}>::{item}{params}"),
        }
    }
}
