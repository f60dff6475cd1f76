//! Modules and the crate root

use crate::attrs::MetaItems;
use crate::item::{Item, ItemKind, Named};
use ks_macro::MacroRules;
use ks_span::FileSpan;

/// A module body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    /// Named items in source order
    pub items: Vec<Item>,
    /// Modules without a name, such as item scopes inside blocks, in the
    /// order they were encountered
    pub anon_mods: Vec<Module>,
    /// `macro_rules!` definitions declared in this module
    pub macros: Vec<MacroDefinition>,
    /// Macros imported by name (`#[macro_use]`), already resolved
    pub macro_imports: Vec<MacroImport>,
    /// Source location
    pub span: FileSpan,
}

/// Locally declared macro
#[derive(Debug, Clone, PartialEq)]
pub struct MacroDefinition {
    /// Macro name
    pub name: String,
    /// Rules
    pub rules: MacroRules,
}

/// Imported macro with its definition already looked up
#[derive(Debug, Clone, PartialEq)]
pub struct MacroImport {
    /// Name the macro is visible under
    pub name: String,
    /// Rules from the defining crate
    pub rules: MacroRules,
}

impl Module {
    /// Empty module
    pub fn new(span: FileSpan) -> Self {
        Self {
            span,
            ..Self::default()
        }
    }

    /// Append a named item
    pub fn add_item(&mut self, name: impl Into<String>, is_pub: bool, data: ItemKind, span: FileSpan) {
        self.items.push(Named::new(name, is_pub, data, span));
    }

    /// Append an anonymous module
    pub fn add_anon_module(&mut self, module: Module) {
        self.anon_mods.push(module);
    }
}

/// A parsed, macro-expanded, name-resolved crate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Crate {
    /// Root module
    pub root_module: Module,
    /// Crate-level (`#![...]`) attributes
    pub attrs: MetaItems,
}

impl Crate {
    /// Crate rooted at `root_module`
    pub fn new(root_module: Module) -> Self {
        Self {
            root_module,
            attrs: MetaItems::default(),
        }
    }
}
