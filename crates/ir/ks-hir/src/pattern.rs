//! Canonical patterns

use crate::expr::Literal;
use crate::path::Path;
use crate::ty::BorrowType;
use std::fmt;

/// How a binding captures the matched value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BindingMode {
    /// By value
    #[default]
    Move,
    /// `ref`
    Ref,
    /// `ref mut`
    MutRef,
}

/// Name bound by a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBinding {
    /// Bound name
    pub name: String,
    /// `mut name`
    pub is_mut: bool,
    /// Capture mode
    pub mode: BindingMode,
}

/// A pattern with an optional binding
///
/// A plain `x` is a binding over [`PatternKind::Any`]; `x @ p` binds over
/// `p`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Binding, if any
    pub binding: Option<PatternBinding>,
    /// Structure
    pub kind: PatternKind,
}

/// Pattern structure
#[derive(Debug, Clone, PartialEq)]
pub enum PatternKind {
    /// `_`
    Any,
    /// Literal value
    Value(Literal),
    /// `a ..= b`
    Range {
        /// Lower bound
        start: Literal,
        /// Inclusive upper bound
        end: Literal,
    },
    /// `(a, b)`
    Tuple(Vec<Pattern>),
    /// `&p` / `&mut p`
    Ref {
        /// Reference kind
        kind: BorrowType,
        /// Inner pattern
        inner: Box<Pattern>,
    },
    /// `Path(a, b)`
    StructTuple {
        /// Tuple struct or variant
        path: Path,
        /// Sub-patterns
        sub_patterns: Vec<Pattern>,
    },
    /// `Path { a: p, .. }`
    Struct {
        /// Struct or variant
        path: Path,
        /// Field patterns
        fields: Vec<(String, Pattern)>,
        /// False when `..` is present
        is_exhaustive: bool,
    },
}

impl Pattern {
    /// `_`
    pub fn wildcard() -> Self {
        Self {
            binding: None,
            kind: PatternKind::Any,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(binding) = &self.binding {
            match binding.mode {
                BindingMode::Move => {}
                BindingMode::Ref => f.write_str("ref ")?,
                BindingMode::MutRef => f.write_str("ref mut ")?,
            }
            if binding.is_mut {
                f.write_str("mut ")?;
            }
            f.write_str(&binding.name)?;
            if matches!(self.kind, PatternKind::Any) {
                return Ok(());
            }
            f.write_str(" @ ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("_"),
            Self::Value(lit) => write!(f, "{lit}"),
            Self::Range { start, end } => write!(f, "{start} ..= {end}"),
            Self::Tuple(pats) => {
                f.write_str("(")?;
                for (i, pat) in pats.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{pat}")?;
                }
                if pats.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Ref { kind, inner } => write!(f, "{kind}{inner}"),
            Self::StructTuple { path, sub_patterns } => {
                write!(f, "{path}(")?;
                for (i, pat) in sub_patterns.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{pat}")?;
                }
                f.write_str(")")
            }
            Self::Struct {
                path,
                fields,
                is_exhaustive,
            } => {
                write!(f, "{path} {{")?;
                for (i, (name, pat)) in fields.iter().enumerate() {
                    f.write_str(if i > 0 { ", " } else { " " })?;
                    write!(f, "{name}: {pat}")?;
                }
                if !is_exhaustive {
                    f.write_str(if fields.is_empty() { " .." } else { ", .." })?;
                }
                f.write_str(" }")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::SimplePath;
    use expect_test::expect;

    fn bind(name: &str, is_mut: bool, mode: BindingMode, kind: PatternKind) -> Pattern {
        Pattern {
            binding: Some(PatternBinding {
                name: name.into(),
                is_mut,
                mode,
            }),
            kind,
        }
    }

    #[test]
    fn test_display_bindings() {
        expect![["mut x"]].assert_eq(&bind("x", true, BindingMode::Move, PatternKind::Any).to_string());
        expect![["ref mut y"]]
            .assert_eq(&bind("y", false, BindingMode::MutRef, PatternKind::Any).to_string());
        expect![["n @ 1 ..= 9"]].assert_eq(
            &bind(
                "n",
                false,
                BindingMode::Move,
                PatternKind::Range {
                    start: Literal::Integer { value: 1, ty: None },
                    end: Literal::Integer { value: 9, ty: None },
                },
            )
            .to_string(),
        );
    }

    #[test]
    fn test_display_struct_patterns() {
        let path = Path::from(SimplePath::new("").join("P"));
        let pat = Pattern {
            binding: None,
            kind: PatternKind::Struct {
                path: path.clone(),
                fields: vec![("a".into(), Pattern::wildcard())],
                is_exhaustive: false,
            },
        };
        expect![["::P { a: _, .. }"]].assert_eq(&pat.to_string());

        let tuple = Pattern {
            binding: None,
            kind: PatternKind::StructTuple {
                path,
                sub_patterns: vec![Pattern::wildcard(), Pattern::wildcard()],
            },
        };
        expect![["::P(_, _)"]].assert_eq(&tuple.to_string());
    }
}
