//! Modules with separate type and value namespaces

use crate::item::{Constant, Enum, Function, Static, Struct, Trait, TypeAlias, VisEnt};
use crate::path::SimplePath;
use crate::ty::TypeRef;
use derive_more::Display;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

/// Which of a module's two namespaces a name lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Namespace {
    /// Types, modules and traits
    #[display("type")]
    Type,
    /// Functions, constants and statics
    #[display("value")]
    Value,
}

/// A name inserted twice into the same namespace
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{name}` is already defined in the {namespace} namespace")]
pub struct NameCollision {
    /// Namespace of the clash
    pub namespace: Namespace,
    /// Clashing name
    pub name: String,
}

impl NameCollision {
    /// Collision on `name` in `namespace`
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
        }
    }
}

/// Entries of the type namespace
#[derive(Debug, Clone, PartialEq)]
pub enum TypeItem {
    /// Child module
    Module(Module),
    /// Type alias
    TypeAlias(TypeAlias),
    /// Struct
    Struct(Struct),
    /// Enum
    Enum(Enum),
    /// Trait
    Trait(Trait),
}

/// Entries of the value namespace
#[derive(Debug, Clone, PartialEq)]
pub enum ValueItem {
    /// Constant
    Constant(Constant),
    /// Static
    Static(Static),
    /// Value of a fieldless struct (`struct U;`), typed as the struct
    StructConstant {
        /// Struct type
        ty: TypeRef,
    },
    /// Constructor function of a tuple struct, returning `ty`
    StructConstructor {
        /// Struct type
        ty: TypeRef,
    },
    /// Function
    Function(Function),
}

/// A lowered module
///
/// A name may appear once in each namespace. A tuple struct, for example,
/// has its definition in `type_items` and its constructor in `value_items`
/// under the same key.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Canonical path of this module
    pub path: SimplePath,
    /// Modules, type aliases, structs, enums and traits
    pub type_items: FxHashMap<String, VisEnt<TypeItem>>,
    /// Functions, constants, statics and struct values
    pub value_items: FxHashMap<String, VisEnt<ValueItem>>,
}

impl Module {
    /// Empty module at `path`
    pub fn new(path: SimplePath) -> Self {
        Self {
            path,
            type_items: FxHashMap::default(),
            value_items: FxHashMap::default(),
        }
    }

    /// Insert into the type namespace, rejecting an existing entry of the same name
    pub fn add_type_item(
        &mut self,
        name: impl Into<String>,
        is_pub: bool,
        item: TypeItem,
    ) -> Result<(), NameCollision> {
        match self.type_items.entry(name.into()) {
            Entry::Occupied(entry) => Err(NameCollision::new(Namespace::Type, entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(VisEnt::new(is_pub, item));
                Ok(())
            }
        }
    }

    /// Insert into the value namespace, rejecting an existing entry of the same name
    pub fn add_value_item(
        &mut self,
        name: impl Into<String>,
        is_pub: bool,
        item: ValueItem,
    ) -> Result<(), NameCollision> {
        match self.value_items.entry(name.into()) {
            Entry::Occupied(entry) => Err(NameCollision::new(Namespace::Value, entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(VisEnt::new(is_pub, item));
                Ok(())
            }
        }
    }

    /// Type namespace lookup
    pub fn type_item(&self, name: &str) -> Option<&VisEnt<TypeItem>> {
        self.type_items.get(name)
    }

    /// Value namespace lookup
    pub fn value_item(&self, name: &str) -> Option<&VisEnt<ValueItem>> {
        self.value_items.get(name)
    }

    /// Child module in the type namespace
    pub fn submodule(&self, name: &str) -> Option<&Module> {
        match self.type_items.get(name) {
            Some(VisEnt {
                ent: TypeItem::Module(module),
                ..
            }) => Some(module),
            _ => None,
        }
    }
}
