//! Surface patterns

use crate::expr::{Literal, MacroInvocation};
use crate::path::Path;
use ks_span::FileSpan;

/// A pattern, optionally binding the matched value to a name
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// `name @` / `ref mut name` binding
    pub binding: Option<PatternBinding>,
    /// Structure being matched
    pub kind: PatternKind,
    /// Source location
    pub span: FileSpan,
}

/// Name binding part of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBinding {
    /// Bound name
    pub name: String,
    /// `mut name`
    pub is_mut: bool,
    /// `ref` / `ref mut` binding mode
    pub by_ref: Option<RefMode>,
}

/// Reference binding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefMode {
    /// `ref`
    Shared,
    /// `ref mut`
    Unique,
}

/// Pattern structure
#[derive(Debug, Clone, PartialEq)]
pub enum PatternKind {
    /// `_`, or the body of a plain binding
    Any,
    /// Lone identifier that name resolution has not yet classified as a
    /// binding or a constant
    MaybeBind {
        /// Identifier
        name: String,
    },
    /// Unexpanded macro
    Macro(MacroInvocation),
    /// Literal value
    Value(Literal),
    /// `a ..= b`
    Range {
        /// Lower bound
        start: Literal,
        /// Upper bound (inclusive)
        end: Literal,
    },
    /// `(a, b)`
    Tuple(Vec<Pattern>),
    /// `&p`, `&mut p`
    Ref {
        /// `&mut`
        is_mut: bool,
        /// Inner pattern
        inner: Box<Pattern>,
    },
    /// `Path(a, b)`
    StructTuple {
        /// Tuple struct or variant path
        path: Path,
        /// Sub-patterns
        sub_patterns: Vec<Pattern>,
    },
    /// `Path { a: p, .. }`
    Struct {
        /// Struct or variant path
        path: Path,
        /// Field patterns
        fields: Vec<(String, Pattern)>,
        /// False when `..` is present
        is_exhaustive: bool,
    },
}

impl Pattern {
    /// Pattern node at `span`
    pub fn new(kind: PatternKind, span: FileSpan) -> Self {
        Self {
            binding: None,
            kind,
            span,
        }
    }

    /// `_`
    pub fn wildcard(span: FileSpan) -> Self {
        Self::new(PatternKind::Any, span)
    }

    /// Plain `name` or `mut name` binding
    pub fn binding(name: impl Into<String>, is_mut: bool, span: FileSpan) -> Self {
        Self {
            binding: Some(PatternBinding {
                name: name.into(),
                is_mut,
                by_ref: None,
            }),
            kind: PatternKind::Any,
            span,
        }
    }
}
