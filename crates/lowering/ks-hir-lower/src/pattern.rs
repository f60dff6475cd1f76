//! Pattern and literal lowering

use crate::error::{LowerError, LowerResult};
use crate::path::lower_path;
use crate::ty::lower_core_type;
use ks_hir::{BindingMode, BorrowType, CoreType, Literal, Pattern, PatternBinding, PatternKind};
use ks_span::FileSpan;
use ks_syntax as ast;

/// Lower a pattern
///
/// Identifier patterns must already be classified by name resolution: a
/// leftover `MaybeBind` is rejected along with unexpanded macros.
pub fn lower_pattern(pat: &ast::Pattern) -> LowerResult<Pattern> {
    let span = pat.span;
    let binding = pat.binding.as_ref().map(|binding| PatternBinding {
        name: binding.name.clone(),
        is_mut: binding.is_mut,
        mode: match binding.by_ref {
            None => BindingMode::Move,
            Some(ast::RefMode::Shared) => BindingMode::Ref,
            Some(ast::RefMode::Unique) => BindingMode::MutRef,
        },
    });

    let kind = match &pat.kind {
        ast::PatternKind::Any => PatternKind::Any,
        ast::PatternKind::MaybeBind { name } => {
            return Err(LowerError::invariant(
                format!("unclassified identifier pattern `{name}`"),
                span,
            ));
        }
        ast::PatternKind::Macro(mac) => {
            return Err(LowerError::invariant(
                format!("unexpanded macro `{}!` in pattern position", mac.name),
                span,
            ));
        }
        ast::PatternKind::Value(lit) => PatternKind::Value(lower_literal(lit, span)?),
        ast::PatternKind::Range { start, end } => PatternKind::Range {
            start: lower_literal(start, span)?,
            end: lower_literal(end, span)?,
        },
        ast::PatternKind::Tuple(pats) => PatternKind::Tuple(lower_patterns(pats)?),
        ast::PatternKind::Ref { is_mut, inner } => PatternKind::Ref {
            kind: BorrowType::from_mut(*is_mut),
            inner: Box::new(lower_pattern(inner)?),
        },
        ast::PatternKind::StructTuple { path, sub_patterns } => PatternKind::StructTuple {
            path: lower_path(path)?,
            sub_patterns: lower_patterns(sub_patterns)?,
        },
        ast::PatternKind::Struct {
            path,
            fields,
            is_exhaustive,
        } => PatternKind::Struct {
            path: lower_path(path)?,
            fields: fields
                .iter()
                .map(|(name, pat)| Ok((name.clone(), lower_pattern(pat)?)))
                .collect::<LowerResult<_>>()?,
            is_exhaustive: *is_exhaustive,
        },
    };

    Ok(Pattern { binding, kind })
}

fn lower_patterns(pats: &[ast::Pattern]) -> LowerResult<Vec<Pattern>> {
    pats.iter().map(lower_pattern).collect()
}

/// Lower a literal; unsuffixed numbers keep no type
pub(crate) fn lower_literal(lit: &ast::Literal, span: FileSpan) -> LowerResult<Literal> {
    Ok(match lit {
        ast::Literal::Integer { value, ty } => Literal::Integer {
            value: *value,
            ty: literal_suffix(*ty, span)?,
        },
        ast::Literal::Float { value, ty } => Literal::Float {
            value: *value,
            ty: literal_suffix(*ty, span)?,
        },
        ast::Literal::Bool(value) => Literal::Bool(*value),
        ast::Literal::Char(value) => Literal::Char(*value),
        ast::Literal::String(value) => Literal::String(value.clone()),
    })
}

fn literal_suffix(ty: ast::CoreType, span: FileSpan) -> LowerResult<Option<CoreType>> {
    match ty {
        ast::CoreType::Any => Ok(None),
        ty => lower_core_type(ty, span).map(Some),
    }
}
