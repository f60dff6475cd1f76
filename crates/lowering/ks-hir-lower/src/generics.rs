//! Generic parameter lowering

use crate::error::{LowerError, LowerResult};
use crate::expr::lower_expr;
use crate::path::lower_generic_path;
use crate::ty::lower_type;
use ks_hir::{ConstParamDef, GenericBound, GenericParams, LifetimeDef, TypeParamDef};
use ks_span::FileSpan;
use ks_syntax as ast;

/// Lower a parameter list, numbering each parameter within its own kind
pub fn lower_generic_params(params: &ast::GenericParams) -> LowerResult<GenericParams> {
    let mut out = GenericParams::default();

    for param in &params.params {
        match param {
            ast::GenericParam::Lifetime { name, span } => {
                let index = param_index(out.lifetimes.len(), *span)?;
                out.lifetimes.push(LifetimeDef {
                    name: name.clone(),
                    index,
                });
            }
            ast::GenericParam::Type {
                name,
                default,
                span,
            } => {
                let index = param_index(out.types.len(), *span)?;
                out.types.push(TypeParamDef {
                    name: name.clone(),
                    index,
                    default: default.as_ref().map(lower_type).transpose()?,
                });
            }
            ast::GenericParam::Const {
                name,
                ty,
                default,
                span,
            } => {
                let index = param_index(out.consts.len(), *span)?;
                out.consts.push(ConstParamDef {
                    name: name.clone(),
                    index,
                    ty: lower_type(ty)?,
                    default: lower_expr(default)?,
                });
            }
        }
    }

    out.bounds = params
        .bounds
        .iter()
        .map(lower_bound)
        .collect::<LowerResult<_>>()?;
    Ok(out)
}

/// Position of the next parameter of one kind
fn param_index(count: usize, span: FileSpan) -> LowerResult<u32> {
    u32::try_from(count).map_err(|_| {
        LowerError::unsupported("more than u32::MAX generic parameters of one kind", span)
    })
}

fn lower_bound(bound: &ast::GenericBound) -> LowerResult<GenericBound> {
    Ok(match bound {
        ast::GenericBound::Lifetime { test, bound } => GenericBound::Lifetime {
            test: test.clone(),
            valid_for: bound.clone(),
        },
        ast::GenericBound::TypeLifetime { ty, bound } => GenericBound::TypeLifetime {
            ty: lower_type(ty)?,
            valid_for: bound.clone(),
        },
        ast::GenericBound::IsTrait { hrls, ty, trait_ } => GenericBound::TraitBound {
            hrls: hrls.clone(),
            ty: lower_type(ty)?,
            trait_: lower_generic_path(trait_)?,
        },
        ast::GenericBound::MaybeTrait { ty, trait_ } => GenericBound::MaybeTrait {
            ty: lower_type(ty)?,
            trait_: lower_generic_path(trait_)?,
        },
        ast::GenericBound::Equality { ty, replacement } => GenericBound::TypeEquality {
            ty: lower_type(ty)?,
            other_type: lower_type(replacement)?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ks_hir::{CoreType, TypeRef};
    use ks_syntax::{Expr, ExprKind, ExprNode, Literal, Path};

    fn sp() -> FileSpan {
        FileSpan::dummy()
    }

    fn type_param(name: &str, default: Option<ast::TypeRef>) -> ast::GenericParam {
        ast::GenericParam::Type {
            name: name.into(),
            default,
            span: sp(),
        }
    }

    #[test]
    fn test_param_index_bounds() {
        assert_eq!(param_index(0, sp()).unwrap(), 0);
        assert_eq!(param_index(u32::MAX as usize, sp()).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_param_index_overflow_is_unsupported() {
        let err = param_index(u32::MAX as usize + 1, sp()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert_eq!(err.span(), sp());
    }

    #[test]
    fn test_indices_count_per_kind() {
        let params = ast::GenericParams {
            params: vec![
                ast::GenericParam::Lifetime {
                    name: "a".into(),
                    span: sp(),
                },
                type_param("T", None),
                ast::GenericParam::Const {
                    name: "N".into(),
                    ty: ast::TypeRef::primitive(ast::CoreType::Usize, sp()),
                    default: Expr::new(ExprNode::new(
                        ExprKind::Literal(Literal::Integer {
                            value: 4,
                            ty: ast::CoreType::Any,
                        }),
                        sp(),
                    )),
                    span: sp(),
                },
                type_param("U", Some(ast::TypeRef::primitive(ast::CoreType::U8, sp()))),
            ],
            bounds: Vec::new(),
        };

        let lowered = lower_generic_params(&params).unwrap();
        assert_eq!(lowered.lifetimes[0].index, 0);
        assert_eq!(lowered.types.len(), 2);
        assert_eq!(lowered.types[0].index, 0);
        assert_eq!(lowered.types[1].index, 1);
        assert_eq!(lowered.types[1].default, Some(TypeRef::Primitive(CoreType::U8)));
        assert_eq!(lowered.consts[0].index, 0);
        assert_eq!(lowered.consts[0].default.to_string(), "4");
        assert_eq!(lowered.type_param("U").map(|p| p.index), Some(1));
    }

    #[test]
    fn test_bounds() {
        let t = ast::TypeRef::generic("T", sp());
        let params = ast::GenericParams {
            params: vec![type_param("T", None)],
            bounds: vec![
                ast::GenericBound::IsTrait {
                    hrls: vec!["a".into()],
                    ty: t.clone(),
                    trait_: Path::absolute("core", &["Fn"], sp()),
                },
                ast::GenericBound::MaybeTrait {
                    ty: t.clone(),
                    trait_: Path::absolute("core", &["Sized"], sp()),
                },
                ast::GenericBound::TypeLifetime {
                    ty: t,
                    bound: "static".into(),
                },
            ],
        };

        let lowered = lower_generic_params(&params).unwrap();
        assert!(matches!(
            &lowered.bounds[0],
            GenericBound::TraitBound { hrls, .. } if hrls == &["a".to_string()]
        ));
        assert!(matches!(lowered.bounds[1], GenericBound::MaybeTrait { .. }));
        assert!(matches!(
            &lowered.bounds[2],
            GenericBound::TypeLifetime { valid_for, .. } if valid_for == "static"
        ));
    }

    #[test]
    fn test_bad_bound_aborts() {
        let params = ast::GenericParams {
            params: Vec::new(),
            bounds: vec![ast::GenericBound::MaybeTrait {
                ty: ast::TypeRef::generic("T", sp()),
                trait_: Path::local("Sized", sp()),
            }],
        };
        assert_eq!(
            lower_generic_params(&params).unwrap_err().kind(),
            ErrorKind::InvariantViolation
        );
    }
}
