//! Surface expressions

use crate::path::Path;
use crate::pattern::Pattern;
use crate::ty::{CoreType, TypeRef};
use ks_span::FileSpan;

/// An optional expression
///
/// Absent expressions appear where the grammar allows omission: a
/// `static` in an `extern` block, a trait constant without a value, a
/// slice type's missing length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr(Option<Box<ExprNode>>);

impl Expr {
    /// Present expression
    pub fn new(node: ExprNode) -> Self {
        Self(Some(Box::new(node)))
    }

    /// Absent expression
    pub fn empty() -> Self {
        Self(None)
    }

    /// Whether an expression is present
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The expression, if present
    pub fn node(&self) -> Option<&ExprNode> {
        self.0.as_deref()
    }
}

impl From<ExprNode> for Expr {
    fn from(node: ExprNode) -> Self {
        Self::new(node)
    }
}

/// An unexpanded macro invocation (`name!(...)`)
#[derive(Debug, Clone, PartialEq)]
pub struct MacroInvocation {
    /// Macro name without the `!`
    pub name: String,
    /// Source location
    pub span: FileSpan,
}

/// An expression node
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNode {
    /// Expression kind
    pub kind: ExprKind,
    /// Source location
    pub span: FileSpan,
}

impl ExprNode {
    /// Expression node at `span`
    pub fn new(kind: ExprKind, span: FileSpan) -> Self {
        Self { kind, span }
    }
}

/// Expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Unexpanded macro
    Macro(MacroInvocation),
    /// Literal value
    Literal(Literal),
    /// Path in value position
    NamedValue(Path),
    /// `(a, b)`
    Tuple(Vec<ExprNode>),
    /// `[a, b]`
    Array(Vec<ExprNode>),
    /// `{ stmts; tail }`
    Block(Block),
    /// `a = b`, `a += b`
    Assign {
        /// Operator for compound assignment
        op: Option<BinOp>,
        /// Place being assigned
        target: Box<ExprNode>,
        /// Assigned value
        value: Box<ExprNode>,
    },
    /// `a + b`
    BinOp {
        /// Operator
        op: BinOp,
        /// Left operand
        left: Box<ExprNode>,
        /// Right operand
        right: Box<ExprNode>,
    },
    /// `-a`, `!a`, `*a`
    UniOp {
        /// Operator
        op: UniOp,
        /// Operand
        operand: Box<ExprNode>,
    },
    /// `&a`, `&mut a`
    Borrow {
        /// `&mut`
        is_mut: bool,
        /// Borrowed place
        inner: Box<ExprNode>,
    },
    /// `a as T`
    Cast {
        /// Value being cast
        inner: Box<ExprNode>,
        /// Target type
        ty: TypeRef,
    },
    /// `path(args)`
    CallPath {
        /// Called function path
        path: Path,
        /// Arguments
        args: Vec<ExprNode>,
    },
    /// `receiver.method(args)`
    CallMethod {
        /// Receiver
        receiver: Box<ExprNode>,
        /// Method name
        method: String,
        /// Arguments
        args: Vec<ExprNode>,
    },
    /// `(callee)(args)`
    CallObject {
        /// Called value
        callee: Box<ExprNode>,
        /// Arguments
        args: Vec<ExprNode>,
    },
    /// `base.name`
    Field {
        /// Base expression
        base: Box<ExprNode>,
        /// Field name (or tuple index as text)
        name: String,
    },
    /// `base[index]`
    Index {
        /// Indexed value
        base: Box<ExprNode>,
        /// Index
        index: Box<ExprNode>,
    },
    /// `Path { a: x, ..base }`
    StructLiteral {
        /// Struct or variant path
        path: Path,
        /// Field initializers in source order
        fields: Vec<(String, ExprNode)>,
        /// Functional update base
        base: Option<Box<ExprNode>>,
    },
    /// `if cond { .. } else { .. }`
    If {
        /// Condition
        cond: Box<ExprNode>,
        /// Then branch
        then_branch: Box<ExprNode>,
        /// Else branch
        else_branch: Option<Box<ExprNode>>,
    },
    /// `if let pat = value { .. } else { .. }`
    IfLet {
        /// Pattern
        pattern: Pattern,
        /// Scrutinee
        value: Box<ExprNode>,
        /// Branch taken on match
        then_branch: Box<ExprNode>,
        /// Branch taken otherwise
        else_branch: Option<Box<ExprNode>>,
    },
    /// `match value { arms }`
    Match {
        /// Scrutinee
        value: Box<ExprNode>,
        /// Arms in source order
        arms: Vec<MatchArm>,
    },
    /// `'label: loop { .. }`
    Loop {
        /// Loop label
        label: Option<String>,
        /// Body
        body: Box<ExprNode>,
    },
    /// `'label: while cond { .. }`
    While {
        /// Loop label
        label: Option<String>,
        /// Condition
        cond: Box<ExprNode>,
        /// Body
        body: Box<ExprNode>,
    },
    /// `'label: while let pat = value { .. }`
    WhileLet {
        /// Loop label
        label: Option<String>,
        /// Pattern
        pattern: Pattern,
        /// Scrutinee, re-evaluated every iteration
        value: Box<ExprNode>,
        /// Body
        body: Box<ExprNode>,
    },
    /// `'label: for pat in iter { .. }`
    For {
        /// Loop label
        label: Option<String>,
        /// Pattern
        pattern: Pattern,
        /// Iterated value
        iterator: Box<ExprNode>,
        /// Body
        body: Box<ExprNode>,
    },
    /// `return value`
    Return(Option<Box<ExprNode>>),
    /// `break 'label value`
    Break {
        /// Target loop
        label: Option<String>,
        /// Break value
        value: Option<Box<ExprNode>>,
    },
    /// `continue 'label`
    Continue {
        /// Target loop
        label: Option<String>,
    },
}

/// Block contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// Statements
    pub stmts: Vec<Statement>,
    /// Trailing expression producing the block's value
    pub tail: Option<Box<ExprNode>>,
}

/// Block statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let pat: ty = value;`
    Let {
        /// Binding pattern
        pattern: Pattern,
        /// Annotation, `Any` when omitted
        ty: TypeRef,
        /// Initializer
        value: Expr,
        /// Source location
        span: FileSpan,
    },
    /// `expr;`
    Expr(ExprNode),
}

/// One arm of a `match`
#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    /// Alternatives (`a | b`)
    pub patterns: Vec<Pattern>,
    /// `if guard`
    pub guard: Option<ExprNode>,
    /// Arm body
    pub body: ExprNode,
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer with its suffix type (`Any` when unsuffixed)
    Integer {
        /// Value
        value: u128,
        /// Suffix type
        ty: CoreType,
    },
    /// Float with its suffix type (`Any` when unsuffixed)
    Float {
        /// Value
        value: f64,
        /// Suffix type
        ty: CoreType,
    },
    /// `true` / `false`
    Bool(bool),
    /// `'c'`
    Char(char),
    /// `"text"`
    String(String),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `&&`
    And,
    /// `||`
    Or,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniOp {
    /// `-a`
    Neg,
    /// `!a`
    Not,
    /// `*a`
    Deref,
}
