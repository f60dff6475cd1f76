//! Module tree and crate lowering

use crate::config::{LowerConfig, MacroConflictPolicy};
use crate::error::{LowerError, LowerResult};
use crate::item::{
    lower_enum, lower_function, lower_struct, lower_trait, lower_type_alias, lower_value_static,
    struct_value_item,
};
use ks_hir::{Crate, Module, SimplePath, TypeItem, ValueItem};
use ks_macro::MacroRules;
use ks_syntax as ast;
use ks_syntax::ItemKind;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Lower a whole crate
///
/// The crate is consumed. Macros declared or imported at the root are
/// collected into one table first (local declarations, then imports),
/// applying the configured collision policy; the module tree is lowered
/// afterwards.
#[tracing::instrument(level = "debug", skip_all, fields(crate_name = %config.crate_name))]
pub fn lower_crate(krate: ast::Crate, config: &LowerConfig) -> LowerResult<Crate> {
    let ast::Crate {
        mut root_module, ..
    } = krate;

    let local = std::mem::take(&mut root_module.macros)
        .into_iter()
        .map(|def| (def.name, def.rules));
    let imported = std::mem::take(&mut root_module.macro_imports)
        .into_iter()
        .map(|import| (import.name, import.rules));
    let macros = collect_macros(local.chain(imported), config.macro_conflicts)?;
    tracing::debug!(macros = macros.len(), "macro table built");

    let root_module = lower_module(&root_module, SimplePath::new(config.crate_name.clone()))?;
    Ok(Crate {
        root_module,
        macros,
    })
}

fn collect_macros(
    entries: impl IntoIterator<Item = (String, MacroRules)>,
    policy: MacroConflictPolicy,
) -> LowerResult<FxHashMap<String, MacroRules>> {
    let mut table = FxHashMap::default();
    for (name, rules) in entries {
        match table.entry(name) {
            Entry::Vacant(entry) => {
                entry.insert(rules);
            }
            Entry::Occupied(mut entry) => match policy {
                MacroConflictPolicy::Reject => {
                    return Err(LowerError::MacroConflict {
                        name: entry.key().clone(),
                        span: rules.span,
                    });
                }
                MacroConflictPolicy::KeepFirst => {
                    tracing::debug!(name = %entry.key(), "macro redefinition ignored");
                }
                MacroConflictPolicy::KeepLast => {
                    tracing::debug!(name = %entry.key(), "macro redefinition replaces earlier one");
                    entry.insert(rules);
                }
            },
        }
    }
    Ok(table)
}

/// Lower one module found at `path`
///
/// Named items go to the namespace(s) their kind belongs to; anonymous
/// child modules are named `#0`, `#1`, ... by position and are private.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path))]
pub fn lower_module(module: &ast::Module, path: SimplePath) -> LowerResult<Module> {
    let mut out = Module::new(path);

    for item in &module.items {
        lower_item(&mut out, item)?;
    }

    for (index, anon) in module.anon_mods.iter().enumerate() {
        let name = format!("#{index}");
        let child = lower_module(anon, out.path.join(name.as_str()))?;
        out.add_type_item(name, false, TypeItem::Module(child))
            .map_err(|collision| LowerError::duplicate(&out.path, collision, anon.span))?;
    }

    tracing::debug!(
        types = out.type_items.len(),
        values = out.value_items.len(),
        "module lowered"
    );
    Ok(out)
}

fn lower_item(out: &mut Module, item: &ast::Item) -> LowerResult<()> {
    tracing::trace!(name = %item.name, "lowering item");
    match &item.data {
        ItemKind::None => {
            tracing::debug!(name = %item.name, "skipping removed item");
        }
        ItemKind::Module(module) => {
            let child = lower_module(module, out.path.join(item.name.as_str()))?;
            add_type(out, item, TypeItem::Module(child))?;
        }
        ItemKind::Crate(ext) => {
            // TODO: collect `extern crate` items into a crate-root import list and
            // re-export the public ones once imports exist in the HIR
            tracing::debug!(crate_name = %ext.crate_name, "`extern crate` not lowered");
        }
        ItemKind::Type(alias) => add_type(out, item, TypeItem::TypeAlias(lower_type_alias(alias)?))?,
        ItemKind::Struct(def) => {
            let lowered = lower_struct(def)?;
            let path = out.path.join(item.name.as_str());
            if let Some(value) = struct_value_item(&lowered.data, &path) {
                add_value(out, item, value)?;
            }
            add_type(out, item, TypeItem::Struct(lowered))?;
        }
        ItemKind::Enum(def) => add_type(out, item, TypeItem::Enum(lower_enum(def)?))?,
        ItemKind::Trait(def) => {
            let path = out.path.join(item.name.as_str());
            add_type(out, item, TypeItem::Trait(lower_trait(def, &path)?))?;
        }
        ItemKind::Function(func) => add_value(out, item, ValueItem::Function(lower_function(func)?))?,
        ItemKind::Static(stat) => add_value(out, item, lower_value_static(stat)?)?,
    }
    Ok(())
}

fn add_type(out: &mut Module, item: &ast::Item, ent: TypeItem) -> LowerResult<()> {
    out.add_type_item(item.name.clone(), item.is_pub, ent)
        .map_err(|collision| LowerError::duplicate(&out.path, collision, item.span))
}

fn add_value(out: &mut Module, item: &ast::Item, ent: ValueItem) -> LowerResult<()> {
    out.add_value_item(item.name.clone(), item.is_pub, ent)
        .map_err(|collision| LowerError::duplicate(&out.path, collision, item.span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ks_span::FileSpan;

    fn rules(start: u32) -> MacroRules {
        MacroRules::new(
            Vec::new(),
            FileSpan::new(ks_span::FileId(0), ks_span::Span::new(start, start + 1)),
        )
    }

    #[test]
    fn test_macro_policies() {
        let entries = || vec![("m".to_string(), rules(1)), ("m".to_string(), rules(2))];

        let err = collect_macros(entries(), MacroConflictPolicy::Reject).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MacroConflict);
        assert_eq!(err.span().span.start, 2);

        let first = collect_macros(entries(), MacroConflictPolicy::KeepFirst).unwrap();
        assert_eq!(first["m"].span.span.start, 1);

        let last = collect_macros(entries(), MacroConflictPolicy::KeepLast).unwrap();
        assert_eq!(last["m"].span.span.start, 2);
    }

    #[test]
    fn test_removed_and_extern_items_are_skipped() {
        let mut module = ast::Module::default();
        module.add_item("gone", true, ItemKind::None, FileSpan::dummy());
        module.add_item(
            "other",
            false,
            ItemKind::Crate(ast::ExternCrate {
                crate_name: "other".into(),
            }),
            FileSpan::dummy(),
        );

        let lowered = lower_module(&module, SimplePath::new("")).unwrap();
        assert!(lowered.type_items.is_empty());
        assert!(lowered.value_items.is_empty());
    }
}
