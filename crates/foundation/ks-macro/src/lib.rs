//! `macro_rules!` definitions as stored by the compiler
//!
//! Macro expansion happens before HIR lowering. By the time a crate is
//! lowered, each declarative macro is just data: a list of rules that later
//! stages (and downstream crates importing the macro) can replay. This crate
//! holds that data model so that both the AST and the HIR can refer to it.

pub mod rules;

pub use rules::{
    Delimiter, FragmentKind, MacroExpander, MacroMatcher, MacroRule, MacroRules, SequenceKind,
    Token, TokenStream,
};
