//! Per-kind item lowering

use crate::error::{LowerError, LowerResult};
use crate::expr::lower_expr;
use crate::generics::lower_generic_params;
use crate::path::lower_generic_path;
use crate::pattern::lower_pattern;
use crate::ty::{lower_type, lower_types};
use ks_hir::{
    AssociatedType, Constant, Enum, EnumVariant, Function, GenericParams, SimplePath, Static,
    Struct, StructData, Trait, TraitValueItem, TypeAlias, TypeRef, ValueItem, VariantData, VisEnt,
};
use ks_syntax as ast;

/// Lower `type Name = Ty;`
pub fn lower_type_alias(alias: &ast::TypeAlias) -> LowerResult<TypeAlias> {
    Ok(TypeAlias {
        generics: lower_generic_params(&alias.generics)?,
        ty: lower_type(&alias.ty)?,
    })
}

/// Lower a struct definition
///
/// A tuple body with no fields (`struct U;`) becomes [`StructData::Unit`].
pub fn lower_struct(item: &ast::Struct) -> LowerResult<Struct> {
    let data = match &item.data {
        ast::StructData::Tuple(fields) if fields.is_empty() => StructData::Unit,
        ast::StructData::Tuple(fields) => StructData::Tuple(
            fields
                .iter()
                .map(|field| Ok(VisEnt::new(field.is_pub, lower_type(&field.ty)?)))
                .collect::<LowerResult<_>>()?,
        ),
        ast::StructData::Named(fields) => StructData::Named(
            fields
                .iter()
                .map(|field| {
                    Ok((
                        field.name.clone(),
                        VisEnt::new(field.is_pub, lower_type(&field.ty)?),
                    ))
                })
                .collect::<LowerResult<_>>()?,
        ),
    };
    Ok(Struct {
        generics: lower_generic_params(&item.generics)?,
        data,
    })
}

/// Value namespace entry for a struct living at `path`
///
/// Unit structs get a constant, tuple structs a constructor; both are typed
/// by the struct's own path. Braced structs have no value entry.
pub fn struct_value_item(data: &StructData, path: &SimplePath) -> Option<ValueItem> {
    if !data.has_value_item() {
        return None;
    }
    let ty = TypeRef::Path(path.clone().into());
    Some(match data {
        StructData::Unit => ValueItem::StructConstant { ty },
        _ => ValueItem::StructConstructor { ty },
    })
}

/// Lower an enum and its variants
pub fn lower_enum(item: &ast::Enum) -> LowerResult<Enum> {
    let variants = item
        .variants
        .iter()
        .map(|variant| {
            let data = match &variant.data {
                ast::VariantData::Value(expr) if !expr.is_valid() => VariantData::Unit,
                ast::VariantData::Value(expr) => VariantData::Value(lower_expr(expr)?),
                ast::VariantData::Tuple(types) => VariantData::Tuple(lower_types(types)?),
                ast::VariantData::Struct(fields) => VariantData::Struct(
                    fields
                        .iter()
                        .map(|field| Ok((field.name.clone(), lower_type(&field.ty)?)))
                        .collect::<LowerResult<_>>()?,
                ),
            };
            Ok(EnumVariant {
                name: variant.name.clone(),
                data,
            })
        })
        .collect::<LowerResult<_>>()?;

    Ok(Enum {
        generics: lower_generic_params(&item.generics)?,
        variants,
    })
}

/// Lower a trait declared at `path`
pub fn lower_trait(item: &ast::Trait, path: &SimplePath) -> LowerResult<Trait> {
    let parent_traits = item
        .supertraits
        .iter()
        .map(lower_generic_path)
        .collect::<LowerResult<_>>()?;
    let mut out = Trait::new(lower_generic_params(&item.generics)?, parent_traits);

    for assoc in &item.items {
        let inserted = match &assoc.data {
            ast::TraitItem::Type(ty) => {
                let lowered = AssociatedType {
                    bounds: ty
                        .bounds
                        .iter()
                        .map(lower_generic_path)
                        .collect::<LowerResult<_>>()?,
                    default: ty.default.as_ref().map(lower_type).transpose()?,
                };
                out.add_type(assoc.name.clone(), lowered)
            }
            ast::TraitItem::Function(func) => out.add_value(
                assoc.name.clone(),
                TraitValueItem::Function(lower_function(func)?),
            ),
            ast::TraitItem::Static(stat) => {
                let value = match stat.class {
                    ast::StaticClass::Const => TraitValueItem::Constant(lower_constant(stat)?),
                    ast::StaticClass::Static | ast::StaticClass::Mut => {
                        TraitValueItem::Static(lower_static(stat)?)
                    }
                };
                out.add_value(assoc.name.clone(), value)
            }
        };
        inserted.map_err(|collision| LowerError::duplicate(path, collision, assoc.span))?;
    }

    Ok(out)
}

/// Lower a function signature and body
pub fn lower_function(func: &ast::Function) -> LowerResult<Function> {
    Ok(Function {
        generics: lower_generic_params(&func.generics)?,
        is_unsafe: func.is_unsafe,
        is_const: func.is_const,
        abi: func.abi.clone(),
        args: func
            .args
            .iter()
            .map(|(pat, ty)| Ok((lower_pattern(pat)?, lower_type(ty)?)))
            .collect::<LowerResult<_>>()?,
        ret: lower_type(&func.ret)?,
        code: lower_expr(&func.code)?,
    })
}

/// `const` item; module-level constants carry no generics
pub fn lower_constant(item: &ast::Static) -> LowerResult<Constant> {
    Ok(Constant {
        generics: GenericParams::default(),
        ty: lower_type(&item.ty)?,
        value: lower_expr(&item.value)?,
    })
}

/// Lower a `static` item
pub fn lower_static(item: &ast::Static) -> LowerResult<Static> {
    Ok(Static {
        is_mut: item.class == ast::StaticClass::Mut,
        ty: lower_type(&item.ty)?,
        value: lower_expr(&item.value)?,
    })
}

/// Dispatch a `const`/`static` item on its storage class
pub fn lower_value_static(item: &ast::Static) -> LowerResult<ValueItem> {
    Ok(match item.class {
        ast::StaticClass::Const => ValueItem::Constant(lower_constant(item)?),
        ast::StaticClass::Static | ast::StaticClass::Mut => ValueItem::Static(lower_static(item)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ks_hir::{CoreType, Namespace};
    use ks_span::FileSpan;
    use ks_syntax::{Expr, ExprKind, ExprNode, Literal, Named, Path};

    fn sp() -> FileSpan {
        FileSpan::dummy()
    }

    fn prim(core: ast::CoreType) -> ast::TypeRef {
        ast::TypeRef::primitive(core, sp())
    }

    fn lit(value: u128) -> Expr {
        Expr::new(ExprNode::new(
            ExprKind::Literal(Literal::Integer {
                value,
                ty: ast::CoreType::Any,
            }),
            sp(),
        ))
    }

    fn tuple_struct(fields: Vec<ast::TupleField>) -> ast::Struct {
        ast::Struct {
            generics: ast::GenericParams::default(),
            data: ast::StructData::Tuple(fields),
        }
    }

    #[test]
    fn test_struct_shapes() {
        let root = SimplePath::new("");

        let unit = lower_struct(&tuple_struct(Vec::new())).unwrap();
        assert_eq!(unit.data, StructData::Unit);
        assert!(matches!(
            struct_value_item(&unit.data, &root.join("U")),
            Some(ValueItem::StructConstant { .. })
        ));

        let pair = lower_struct(&tuple_struct(vec![
            ast::TupleField::new(true, prim(ast::CoreType::I32)),
            ast::TupleField::new(false, prim(ast::CoreType::I32)),
        ]))
        .unwrap();
        let StructData::Tuple(fields) = &pair.data else {
            panic!("expected tuple fields");
        };
        assert!(fields[0].is_pub);
        assert!(!fields[1].is_pub);
        assert_eq!(
            struct_value_item(&pair.data, &root.join("P")),
            Some(ValueItem::StructConstructor {
                ty: TypeRef::Path(root.join("P").into())
            })
        );

        let braced = lower_struct(&ast::Struct {
            generics: ast::GenericParams::default(),
            data: ast::StructData::Named(vec![ast::StructField::new(
                "x",
                true,
                prim(ast::CoreType::F32),
            )]),
        })
        .unwrap();
        assert!(!braced.data.has_value_item());
        assert_eq!(struct_value_item(&braced.data, &root.join("S")), None);
    }

    #[test]
    fn test_enum_variants() {
        let variant = |name: &str, data| ast::EnumVariant {
            name: name.into(),
            attrs: ast::MetaItems::default(),
            data,
            span: sp(),
        };
        let item = ast::Enum {
            generics: ast::GenericParams::default(),
            variants: vec![
                variant("A", ast::VariantData::Value(Expr::empty())),
                variant("B", ast::VariantData::Value(lit(5))),
                variant("C", ast::VariantData::Tuple(vec![prim(ast::CoreType::U8)])),
                variant(
                    "D",
                    ast::VariantData::Struct(vec![ast::StructField::new(
                        "x",
                        false,
                        prim(ast::CoreType::Bool),
                    )]),
                ),
            ],
        };

        let lowered = lower_enum(&item).unwrap();
        let names: Vec<_> = lowered.variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
        assert_eq!(lowered.variants[0].data, VariantData::Unit);
        assert!(matches!(&lowered.variants[1].data, VariantData::Value(v) if v.to_string() == "5"));
        assert_eq!(
            lowered.variants[2].data,
            VariantData::Tuple(vec![TypeRef::Primitive(CoreType::U8)])
        );
        assert_eq!(
            lowered.variants[3].data,
            VariantData::Struct(vec![("x".into(), TypeRef::Primitive(CoreType::Bool))])
        );
    }

    fn method(name: &str) -> Named<ast::TraitItem> {
        Named::new(
            name,
            true,
            ast::TraitItem::Function(ast::Function {
                generics: ast::GenericParams::default(),
                is_unsafe: false,
                is_const: false,
                abi: String::new(),
                args: Vec::new(),
                ret: ast::TypeRef::unit(sp()),
                code: Expr::empty(),
            }),
            sp(),
        )
    }

    #[test]
    fn test_trait_items() {
        let item = ast::Trait {
            generics: ast::GenericParams::default(),
            supertraits: vec![Path::absolute("core", &["Clone"], sp())],
            items: vec![
                Named::new(
                    "Item",
                    true,
                    ast::TraitItem::Type(ast::AssociatedType {
                        bounds: vec![Path::absolute("core", &["Copy"], sp())],
                        default: None,
                    }),
                    sp(),
                ),
                method("get"),
                Named::new(
                    "LIMIT",
                    true,
                    ast::TraitItem::Static(ast::Static {
                        class: ast::StaticClass::Const,
                        ty: prim(ast::CoreType::Usize),
                        value: Expr::empty(),
                    }),
                    sp(),
                ),
            ],
        };

        let lowered = lower_trait(&item, &SimplePath::new("").join("Source")).unwrap();
        assert_eq!(lowered.parent_traits.len(), 1);
        assert_eq!(lowered.types["Item"].bounds.len(), 1);
        assert!(matches!(lowered.values["get"], TraitValueItem::Function(ref f) if !f.code.is_valid()));
        assert!(matches!(lowered.values["LIMIT"], TraitValueItem::Constant(_)));
    }

    #[test]
    fn test_trait_duplicate_value() {
        let item = ast::Trait {
            generics: ast::GenericParams::default(),
            supertraits: Vec::new(),
            items: vec![method("get"), method("get")],
        };
        let path = SimplePath::new("").join("Source");
        let err = lower_trait(&item, &path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        let LowerError::DuplicateItem { module, source, .. } = err else {
            panic!("expected a duplicate item error");
        };
        assert_eq!(module, path);
        assert_eq!(source.namespace, Namespace::Value);
    }

    #[test]
    fn test_statics_by_class() {
        let make = |class| ast::Static {
            class,
            ty: prim(ast::CoreType::I32),
            value: lit(0),
        };
        assert!(matches!(
            lower_value_static(&make(ast::StaticClass::Const)).unwrap(),
            ValueItem::Constant(Constant { ref generics, .. }) if generics.is_empty()
        ));
        assert!(matches!(
            lower_value_static(&make(ast::StaticClass::Static)).unwrap(),
            ValueItem::Static(Static { is_mut: false, .. })
        ));
        assert!(matches!(
            lower_value_static(&make(ast::StaticClass::Mut)).unwrap(),
            ValueItem::Static(Static { is_mut: true, .. })
        ));
    }

    #[test]
    fn test_function_signature() {
        let func = ast::Function {
            generics: ast::GenericParams::default(),
            is_unsafe: true,
            is_const: false,
            abi: "C".into(),
            args: vec![(
                ast::Pattern::binding("n", false, sp()),
                prim(ast::CoreType::U32),
            )],
            ret: prim(ast::CoreType::Bool),
            code: Expr::empty(),
        };
        let lowered = lower_function(&func).unwrap();
        assert!(lowered.is_unsafe);
        assert_eq!(lowered.abi, "C");
        assert_eq!(lowered.args[0].1, TypeRef::Primitive(CoreType::U32));
        assert_eq!(lowered.ret, TypeRef::Primitive(CoreType::Bool));
    }
}
