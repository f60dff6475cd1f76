//! Path lowering
//!
//! Name resolution has already rewritten every item path into absolute
//! (crate-rooted) or UFCS form, so anything else reaching this point is an
//! upstream defect.

use crate::error::{LowerError, LowerResult};
use crate::ty::{lower_type, lower_types};
use ks_hir::{GenericPath, Path, PathParams, SimplePath};
use ks_span::FileSpan;
use ks_syntax as ast;
use ks_syntax::PathClass;

/// Lower a path to an item or associated item
pub fn lower_path(path: &ast::Path) -> LowerResult<Path> {
    match &path.class {
        PathClass::Absolute { .. } => Ok(Path::Generic(lower_generic_path(path)?)),
        PathClass::Ufcs { ty, trait_, nodes } => {
            let [node] = nodes.as_slice() else {
                return Err(if nodes.is_empty() {
                    LowerError::invariant("UFCS path without an item segment", path.span)
                } else {
                    LowerError::not_implemented("UFCS paths with several trailing segments", path.span)
                });
            };
            let ty = Box::new(lower_type(ty)?);
            let item = node.name.clone();
            let params = lower_path_params(&node.params)?;
            Ok(match trait_ {
                Some(trait_) => Path::UfcsKnown {
                    ty,
                    trait_: lower_generic_path(trait_)?,
                    item,
                    params,
                },
                None => Path::UfcsUnknown { ty, item, params },
            })
        }
        class => Err(unresolved(class, path.span)),
    }
}

/// Lower a plain path to a module-level item (trait references, bounds)
pub fn lower_generic_path(path: &ast::Path) -> LowerResult<GenericPath> {
    let PathClass::Absolute { crate_name, nodes } = &path.class else {
        return Err(match &path.class {
            PathClass::Ufcs { .. } => {
                LowerError::invariant("UFCS path where a plain path is required", path.span)
            }
            class => unresolved(class, path.span),
        });
    };
    let Some((last, leading)) = nodes.split_last() else {
        return Err(LowerError::invariant("absolute path with no segments", path.span));
    };
    if let Some(node) = leading.iter().find(|node| !node.params.is_empty()) {
        return Err(LowerError::not_implemented(
            format!("generic arguments on non-final path segment `{}`", node.name),
            path.span,
        ));
    }

    let simple = SimplePath {
        crate_name: crate_name.clone(),
        components: nodes.iter().map(|node| node.name.clone()).collect(),
    };
    Ok(GenericPath::new(simple, lower_path_params(&last.params)?))
}

/// Lower generic arguments; lifetimes are erased
pub fn lower_path_params(params: &ast::PathParams) -> LowerResult<PathParams> {
    Ok(PathParams {
        types: lower_types(&params.types)?,
        bindings: params
            .bindings
            .iter()
            .map(|(name, ty)| Ok((name.clone(), lower_type(ty)?)))
            .collect::<LowerResult<_>>()?,
    })
}

fn unresolved(class: &PathClass, span: FileSpan) -> LowerError {
    let what = match class {
        PathClass::Invalid => "invalid path",
        PathClass::Local { .. } => "local name in item position",
        PathClass::Relative { .. } => "unresolved relative path",
        PathClass::SelfRelative { .. } => "unresolved `self::` path",
        PathClass::Super { .. } => "unresolved `super::` path",
        PathClass::Absolute { .. } | PathClass::Ufcs { .. } => "path",
    };
    LowerError::invariant(format!("{what} reached lowering"), span)
}
