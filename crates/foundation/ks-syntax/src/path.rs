//! Surface paths

use crate::ty::TypeRef;
use ks_span::FileSpan;

/// A path as written, with its source location
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Path shape
    pub class: PathClass,
    /// Source location
    pub span: FileSpan,
}

/// Path shapes produced by the parser and rewritten by name resolution
///
/// After resolution every item path is either [`PathClass::Absolute`] or
/// [`PathClass::Ufcs`]; [`PathClass::Local`] survives only for local
/// variables in expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum PathClass {
    /// Parse failure placeholder
    Invalid,
    /// A single identifier bound locally (variable, pattern binding)
    Local {
        /// Identifier
        name: String,
    },
    /// `a::b::c`, not yet resolved
    Relative {
        /// Segments
        nodes: Vec<PathNode>,
    },
    /// `self::a::b`
    SelfRelative {
        /// Segments after `self`
        nodes: Vec<PathNode>,
    },
    /// `super::a`, `super::super::a`
    Super {
        /// Number of `super` hops
        count: u32,
        /// Segments after the last `super`
        nodes: Vec<PathNode>,
    },
    /// `::krate::a::b`; an empty crate name is the local crate
    Absolute {
        /// Crate the path is rooted in
        crate_name: String,
        /// Segments below the crate root
        nodes: Vec<PathNode>,
    },
    /// `<T as Trait>::item`, or `<T>::item` when the trait is unknown
    Ufcs {
        /// Self type
        ty: Box<TypeRef>,
        /// Trait, when written
        trait_: Option<Box<Path>>,
        /// Segments after the qualified type
        nodes: Vec<PathNode>,
    },
}

/// One path segment with its generic arguments
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    /// Segment name
    pub name: String,
    /// Generic arguments written on this segment
    pub params: PathParams,
}

/// Generic arguments of a path segment (`<'a, T, Item = U>`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathParams {
    /// Lifetime arguments
    pub lifetimes: Vec<String>,
    /// Type arguments
    pub types: Vec<TypeRef>,
    /// Associated type bindings
    pub bindings: Vec<(String, TypeRef)>,
}

impl PathParams {
    /// Whether no generic arguments were written
    pub fn is_empty(&self) -> bool {
        self.lifetimes.is_empty() && self.types.is_empty() && self.bindings.is_empty()
    }
}

impl PathNode {
    /// Segment without generic arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: PathParams::default(),
        }
    }

    /// Segment with generic arguments
    pub fn with_params(name: impl Into<String>, params: PathParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

impl Path {
    /// Path of class `class`
    pub fn new(class: PathClass, span: FileSpan) -> Self {
        Self { class, span }
    }

    /// `::crate_name::segments...` with no generic arguments
    pub fn absolute(crate_name: impl Into<String>, segments: &[&str], span: FileSpan) -> Self {
        Self::new(
            PathClass::Absolute {
                crate_name: crate_name.into(),
                nodes: segments.iter().copied().map(PathNode::new).collect(),
            },
            span,
        )
    }

    /// Single-segment local name
    pub fn local(name: impl Into<String>, span: FileSpan) -> Self {
        Self::new(PathClass::Local { name: name.into() }, span)
    }

    /// Segments of the path, empty for `Invalid` and `Local`
    pub fn nodes(&self) -> &[PathNode] {
        match &self.class {
            PathClass::Invalid | PathClass::Local { .. } => &[],
            PathClass::Relative { nodes }
            | PathClass::SelfRelative { nodes }
            | PathClass::Super { nodes, .. }
            | PathClass::Absolute { nodes, .. }
            | PathClass::Ufcs { nodes, .. } => nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_of_each_class() {
        let span = FileSpan::dummy();
        let abs = Path::absolute("core", &["option", "Option"], span);
        let names: Vec<_> = abs.nodes().iter().map(|node| node.name.as_str()).collect();
        assert_eq!(names, ["option", "Option"]);

        assert!(Path::local("x", span).nodes().is_empty());
        assert!(Path::new(PathClass::Invalid, span).nodes().is_empty());
    }

    #[test]
    fn test_params_empty() {
        let mut params = PathParams::default();
        assert!(params.is_empty());
        params.lifetimes.push("a".into());
        assert!(!params.is_empty());
    }
}
