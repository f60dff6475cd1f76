//! Type lowering

use crate::error::{LowerError, LowerResult};
use crate::expr::lower_expr;
use crate::path::{lower_generic_path, lower_path};
use ks_hir::{BorrowType, CoreType, FunctionType, GenericIndex, TypeRef};
use ks_span::FileSpan;
use ks_syntax as ast;
use ks_syntax::TypeData;

/// Lower a surface type
///
/// Fails on the parser placeholders (`None`, unexpanded macros, the
/// `Any`/`Invalid` primitive markers) and on higher-ranked trait objects.
pub fn lower_type(ty: &ast::TypeRef) -> LowerResult<TypeRef> {
    let span = ty.span;
    Ok(match &ty.data {
        TypeData::None => return Err(LowerError::invariant("placeholder type reached lowering", span)),
        TypeData::Macro(mac) => {
            return Err(LowerError::invariant(
                format!("unexpanded macro `{}!` in type position", mac.name),
                span,
            ));
        }
        TypeData::Any => TypeRef::Infer,
        TypeData::Unit => TypeRef::unit(),
        TypeData::Primitive(core) => TypeRef::Primitive(lower_core_type(*core, span)?),
        TypeData::Tuple(types) => TypeRef::Tuple(lower_types(types)?),
        TypeData::Borrow { is_mut, inner } => TypeRef::Borrow {
            kind: BorrowType::from_mut(*is_mut),
            inner: Box::new(lower_type(inner)?),
        },
        TypeData::Pointer { is_mut, inner } => TypeRef::Pointer {
            is_mut: *is_mut,
            inner: Box::new(lower_type(inner)?),
        },
        TypeData::Array { inner, size } => TypeRef::Array {
            inner: Box::new(lower_type(inner)?),
            size: lower_expr(size)?,
        },
        TypeData::Path(path) => TypeRef::Path(lower_path(path)?),
        TypeData::TraitObject { hrls, traits } => {
            if !hrls.is_empty() {
                return Err(LowerError::unsupported(
                    "higher-ranked lifetimes on trait objects",
                    span,
                ));
            }
            TypeRef::TraitObject {
                traits: traits
                    .iter()
                    .map(lower_generic_path)
                    .collect::<LowerResult<_>>()?,
            }
        }
        TypeData::Function(func) => TypeRef::Function(FunctionType {
            is_unsafe: func.is_unsafe,
            abi: func.abi.clone(),
            args: lower_types(&func.args)?,
            ret: Box::new(lower_type(&func.ret)?),
        }),
        TypeData::Generic { name } => TypeRef::Generic {
            name: name.clone(),
            index: GenericIndex::Unresolved,
        },
    })
}

pub(crate) fn lower_types(types: &[ast::TypeRef]) -> LowerResult<Vec<TypeRef>> {
    types.iter().map(lower_type).collect()
}

/// Map a primitive keyword to its scalar type
pub fn lower_core_type(core: ast::CoreType, span: FileSpan) -> LowerResult<CoreType> {
    Ok(match core {
        ast::CoreType::Bool => CoreType::Bool,
        ast::CoreType::Char => CoreType::Char,
        ast::CoreType::F32 => CoreType::F32,
        ast::CoreType::F64 => CoreType::F64,
        ast::CoreType::I8 => CoreType::I8,
        ast::CoreType::U8 => CoreType::U8,
        ast::CoreType::I16 => CoreType::I16,
        ast::CoreType::U16 => CoreType::U16,
        ast::CoreType::I32 => CoreType::I32,
        ast::CoreType::U32 => CoreType::U32,
        ast::CoreType::I64 => CoreType::I64,
        ast::CoreType::U64 => CoreType::U64,
        ast::CoreType::Isize => CoreType::Isize,
        ast::CoreType::Usize => CoreType::Usize,
        ast::CoreType::Any => {
            return Err(LowerError::not_implemented(
                "an inferred numeric primitive type",
                span,
            ));
        }
        ast::CoreType::Invalid => {
            return Err(LowerError::invariant("invalid primitive type", span));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ks_syntax::{Expr, ExprKind, ExprNode, Literal, MacroInvocation, Path};
    use ks_span::{FileId, Span};

    fn sp(start: u32) -> FileSpan {
        FileSpan::new(FileId(0), Span::new(start, start + 1))
    }

    fn prim(core: ast::CoreType) -> ast::TypeRef {
        ast::TypeRef::primitive(core, sp(0))
    }

    fn size(n: u128) -> Expr {
        Expr::new(ExprNode::new(
            ExprKind::Literal(Literal::Integer {
                value: n,
                ty: ast::CoreType::Any,
            }),
            sp(9),
        ))
    }

    #[test]
    fn test_scalars_and_infer() {
        assert_eq!(
            lower_type(&prim(ast::CoreType::Usize)).unwrap(),
            TypeRef::Primitive(CoreType::Usize)
        );
        assert_eq!(lower_type(&ast::TypeRef::any(sp(0))).unwrap(), TypeRef::Infer);
        assert_eq!(lower_type(&ast::TypeRef::unit(sp(0))).unwrap(), TypeRef::unit());
    }

    #[test]
    fn test_every_scalar_keyword() {
        let pairs = [
            (ast::CoreType::Bool, CoreType::Bool),
            (ast::CoreType::Char, CoreType::Char),
            (ast::CoreType::F32, CoreType::F32),
            (ast::CoreType::F64, CoreType::F64),
            (ast::CoreType::I8, CoreType::I8),
            (ast::CoreType::U8, CoreType::U8),
            (ast::CoreType::I16, CoreType::I16),
            (ast::CoreType::U16, CoreType::U16),
            (ast::CoreType::I32, CoreType::I32),
            (ast::CoreType::U32, CoreType::U32),
            (ast::CoreType::I64, CoreType::I64),
            (ast::CoreType::U64, CoreType::U64),
            (ast::CoreType::Isize, CoreType::Isize),
            (ast::CoreType::Usize, CoreType::Usize),
        ];

        for (surface, canonical) in pairs {
            assert_eq!(lower_core_type(surface, sp(0)).unwrap(), canonical);
            assert_eq!(lower_type(&prim(surface)).unwrap(), TypeRef::Primitive(canonical));
        }
    }

    #[test]
    fn test_path_type() {
        let ty = ast::TypeRef::path(Path::absolute("", &["m", "X"], sp(3)));
        assert_eq!(ty.span, sp(3));

        let lowered = lower_type(&ty).unwrap();
        assert!(matches!(lowered, TypeRef::Path(ks_hir::Path::Generic(_))));
        assert_eq!(lowered.to_string(), "::m::X");
    }

    #[test]
    fn test_tuple_is_pointwise() {
        let a = prim(ast::CoreType::I8);
        let b = ast::TypeRef::generic("T", sp(2));
        let tuple = ast::TypeRef::tuple(vec![a.clone(), b.clone()], sp(0));

        assert_eq!(
            lower_type(&tuple).unwrap(),
            TypeRef::Tuple(vec![lower_type(&a).unwrap(), lower_type(&b).unwrap()])
        );
    }

    #[test]
    fn test_array_keeps_size_expression() {
        let elem = prim(ast::CoreType::U8);
        let array = ast::TypeRef::array(elem.clone(), size(4), sp(0));

        let lowered = lower_type(&array).unwrap();
        assert_eq!(
            lowered,
            TypeRef::Array {
                inner: Box::new(lower_type(&elem).unwrap()),
                size: lower_expr(&size(4)).unwrap(),
            }
        );
        assert_eq!(lowered.to_string(), "[u8; 4]");

        let slice = ast::TypeRef::array(elem, Expr::empty(), sp(0));
        assert_eq!(lower_type(&slice).unwrap().to_string(), "[u8]");
    }

    #[test]
    fn test_borrow_and_pointer_stay_distinct() {
        for is_mut in [false, true] {
            let inner = prim(ast::CoreType::I32);
            let borrow = lower_type(&ast::TypeRef::borrow(is_mut, inner.clone(), sp(0))).unwrap();
            let pointer = lower_type(&ast::TypeRef::pointer(is_mut, inner, sp(0))).unwrap();
            assert_ne!(borrow, pointer);
        }

        let shared = lower_type(&ast::TypeRef::borrow(false, prim(ast::CoreType::I32), sp(0)));
        assert!(matches!(
            shared,
            Ok(TypeRef::Borrow {
                kind: BorrowType::Shared,
                ..
            })
        ));
    }

    #[test]
    fn test_placeholders_are_fatal() {
        let none = ast::TypeRef::new(TypeData::None, sp(3));
        let err = lower_type(&none).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.span(), sp(3));

        let mac = ast::TypeRef::new(
            TypeData::Macro(MacroInvocation {
                name: "ty".into(),
                span: sp(4),
            }),
            sp(4),
        );
        assert_eq!(lower_type(&mac).unwrap_err().kind(), ErrorKind::InvariantViolation);

        let invalid = prim(ast::CoreType::Invalid);
        assert_eq!(lower_type(&invalid).unwrap_err().kind(), ErrorKind::InvariantViolation);
    }

    #[test]
    fn test_any_numeric_is_unimplemented() {
        // nested so the failure must propagate through the tuple
        let ty = ast::TypeRef::tuple(vec![prim(ast::CoreType::Any)], sp(0));
        assert_eq!(lower_type(&ty).unwrap_err().kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn test_trait_objects() {
        let send = Path::absolute("core", &["marker", "Send"], sp(1));
        let ok = ast::TypeRef::new(
            TypeData::TraitObject {
                hrls: Vec::new(),
                traits: vec![send.clone()],
            },
            sp(0),
        );
        assert_eq!(lower_type(&ok).unwrap().to_string(), r#"dyn ::"core"::marker::Send"#);

        let hrl = ast::TypeRef::new(
            TypeData::TraitObject {
                hrls: vec!["a".into()],
                traits: vec![send],
            },
            sp(0),
        );
        assert_eq!(lower_type(&hrl).unwrap_err().kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn test_generic_index_is_unresolved() {
        let lowered = lower_type(&ast::TypeRef::generic("T", sp(0))).unwrap();
        assert_eq!(
            lowered,
            TypeRef::Generic {
                name: "T".into(),
                index: GenericIndex::Unresolved,
            }
        );
    }

    #[test]
    fn test_function_type() {
        let func = ast::TypeRef::new(
            TypeData::Function(ast::FunctionType {
                is_unsafe: false,
                abi: String::new(),
                args: vec![prim(ast::CoreType::I32), ast::TypeRef::borrow(false, prim(ast::CoreType::Char), sp(1))],
                ret: Box::new(prim(ast::CoreType::Bool)),
            }),
            sp(0),
        );
        assert_eq!(lower_type(&func).unwrap().to_string(), "fn(i32, &char) -> bool");
    }
}
