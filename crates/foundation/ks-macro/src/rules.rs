//! Macro rule types

use ks_span::FileSpan;
use std::fmt;

/// A `macro_rules!` definition: an ordered list of rules tried first to last
#[derive(Debug, Clone, PartialEq)]
pub struct MacroRules {
    /// Rules in declaration order
    pub rules: Vec<MacroRule>,
    /// Whether the definition carries `#[macro_export]`
    pub is_exported: bool,
    /// Source location of the definition
    pub span: FileSpan,
}

impl MacroRules {
    /// Create a definition from its rules
    #[must_use]
    pub fn new(rules: Vec<MacroRule>, span: FileSpan) -> Self {
        Self {
            rules,
            is_exported: false,
            span,
        }
    }

    /// Mark the definition as exported
    #[must_use]
    pub fn exported(mut self) -> Self {
        self.is_exported = true;
        self
    }
}

/// A single macro rule (matcher => expander)
#[derive(Debug, Clone, PartialEq)]
pub struct MacroRule {
    /// Left-hand side pattern
    pub matcher: Vec<MacroMatcher>,
    /// Right-hand side template
    pub expander: Vec<MacroExpander>,
}

/// Macro matcher (left-hand side of macro rule)
#[derive(Debug, Clone, PartialEq)]
pub enum MacroMatcher {
    /// Literal token
    Token(Token),
    /// Metavariable ($x:expr)
    MetaVar {
        /// Variable name
        name: String,
        /// Fragment specifier
        kind: FragmentKind,
    },
    /// Sequence ($(...), $(...)+, $(...)?)
    Sequence {
        /// Matchers in the sequence
        matchers: Vec<MacroMatcher>,
        /// Separator token
        separator: Option<Token>,
        /// Sequence kind (*, +, ?)
        kind: SequenceKind,
    },
    /// Group ((...), [...], {...})
    Group {
        /// Delimiter
        delimiter: Delimiter,
        /// Matchers inside
        matchers: Vec<MacroMatcher>,
    },
}

/// Macro expander (right-hand side of macro rule)
#[derive(Debug, Clone, PartialEq)]
pub enum MacroExpander {
    /// Literal token
    Token(Token),
    /// Substitute metavariable ($x)
    Substitute(String),
    /// Sequence ($(...), $(...)+, $(...)?)
    Sequence {
        /// Expanders in the sequence
        expanders: Vec<MacroExpander>,
        /// Separator token
        separator: Option<Token>,
        /// Sequence kind (*, +, ?)
        kind: SequenceKind,
    },
    /// Group ((...), [...], {...})
    Group {
        /// Delimiter
        delimiter: Delimiter,
        /// Expanders inside
        expanders: Vec<MacroExpander>,
    },
}

/// Fragment specifier kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Expression
    Expr,
    /// Identifier
    Ident,
    /// Type
    Ty,
    /// Pattern
    Pat,
    /// Statement
    Stmt,
    /// Block
    Block,
    /// Item
    Item,
    /// Path
    Path,
    /// Literal
    Literal,
    /// Lifetime
    Lifetime,
    /// Attribute contents
    Meta,
    /// Token tree
    Tt,
}

impl FragmentKind {
    /// Parse a fragment specifier as written after `$name:`
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "expr" => Self::Expr,
            "ident" => Self::Ident,
            "ty" => Self::Ty,
            "pat" => Self::Pat,
            "stmt" => Self::Stmt,
            "block" => Self::Block,
            "item" => Self::Item,
            "path" => Self::Path,
            "literal" => Self::Literal,
            "lifetime" => Self::Lifetime,
            "meta" => Self::Meta,
            "tt" => Self::Tt,
            _ => return None,
        })
    }

    /// The specifier as written in source
    pub fn name(self) -> &'static str {
        match self {
            Self::Expr => "expr",
            Self::Ident => "ident",
            Self::Ty => "ty",
            Self::Pat => "pat",
            Self::Stmt => "stmt",
            Self::Block => "block",
            Self::Item => "item",
            Self::Path => "path",
            Self::Literal => "literal",
            Self::Lifetime => "lifetime",
            Self::Meta => "meta",
            Self::Tt => "tt",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Sequence kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Zero or more (*)
    ZeroOrMore,
    /// One or more (+)
    OneOrMore,
    /// Optional (?)
    Optional,
}

/// Token stream (sequence of tokens)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    /// Tokens in the stream
    pub tokens: Vec<Token>,
}

impl TokenStream {
    /// Create a new empty token stream
    #[must_use]
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Push a token to the stream
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get the number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the stream is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier or keyword
    Ident(String),
    /// Literal, kept as its source text
    Literal(String),
    /// Punctuation character
    Punct(char),
    /// Grouped tokens
    Group {
        /// Delimiter
        delim: Delimiter,
        /// Token stream inside
        stream: TokenStream,
    },
}

/// Delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Parentheses (...)
    Paren,
    /// Brackets [...]
    Bracket,
    /// Braces {...}
    Brace,
}
