//! Expression bodies
//!
//! Every lowered expression (function body, initializer, array length,
//! discriminant) is stored as a [`Body`]: two arenas of expressions and
//! statements plus the id of the root expression. Nodes refer to each other
//! by index, so a body is built bottom-up and never holds partial nodes.

use crate::path::Path;
use crate::pattern::Pattern;
use crate::ty::{BorrowType, CoreType, TypeRef};
use derive_more::Display;
use la_arena::{Arena, Idx};
use std::fmt;

/// Expression ID
pub type ExprId = Idx<Expr>;
/// Statement ID
pub type StmtId = Idx<Stmt>;

/// An optional lowered expression
///
/// Empty where the source had no expression (slice length, trait constant
/// without a value, function declaration without a body).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExprPtr(Option<Box<Body>>);

impl ExprPtr {
    /// Present body
    pub fn new(body: Body) -> Self {
        Self(Some(Box::new(body)))
    }

    /// No expression
    pub fn empty() -> Self {
        Self(None)
    }

    /// Whether a body is present
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The body, if present
    pub fn body(&self) -> Option<&Body> {
        self.0.as_deref()
    }
}

/// Arena-backed expression tree
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Expressions
    pub exprs: Arena<Expr>,
    /// Statements
    pub stmts: Arena<Stmt>,
    /// Root expression
    pub root: ExprId,
}

impl Body {
    /// Root expression node
    pub fn root_expr(&self) -> &Expr {
        &self.exprs[self.root]
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer; `ty` is `None` when unsuffixed
    Integer {
        /// Value
        value: u128,
        /// Suffix type
        ty: Option<CoreType>,
    },
    /// Float; `ty` is `None` when unsuffixed
    Float {
        /// Value
        value: f64,
        /// Suffix type
        ty: Option<CoreType>,
    },
    /// `true` / `false`
    Bool(bool),
    /// `'c'`
    Char(char),
    /// `"text"`
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { value, ty } => {
                write!(f, "{value}")?;
                ty.map_or(Ok(()), |ty| write!(f, "{ty}"))
            }
            Self::Float { value, ty } => {
                write!(f, "{value:?}")?;
                ty.map_or(Ok(()), |ty| write!(f, "{ty}"))
            }
            Self::Bool(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "{value:?}"),
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BinOp {
    /// Addition
    #[display("+")]
    Add,
    /// Subtraction
    #[display("-")]
    Sub,
    /// Multiplication
    #[display("*")]
    Mul,
    /// Division
    #[display("/")]
    Div,
    /// Remainder
    #[display("%")]
    Rem,
    /// Bitwise and
    #[display("&")]
    BitAnd,
    /// Bitwise or
    #[display("|")]
    BitOr,
    /// Bitwise xor
    #[display("^")]
    BitXor,
    /// Left shift
    #[display("<<")]
    Shl,
    /// Right shift
    #[display(">>")]
    Shr,
    /// Equality
    #[display("==")]
    Eq,
    /// Inequality
    #[display("!=")]
    Ne,
    /// Less than
    #[display("<")]
    Lt,
    /// Less or equal
    #[display("<=")]
    Le,
    /// Greater than
    #[display(">")]
    Gt,
    /// Greater or equal
    #[display(">=")]
    Ge,
    /// Short-circuit and
    #[display("&&")]
    And,
    /// Short-circuit or
    #[display("||")]
    Or,
}

/// Unary operators; dereference is [`Expr::Deref`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum UniOp {
    /// Negation
    #[display("-")]
    Neg,
    /// Logical or bitwise not
    #[display("!")]
    Not,
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal
    Literal(Literal),
    /// Local variable
    Local {
        /// Variable name
        name: String,
    },
    /// Item in value position
    Path(Path),
    /// `(a, b)`
    Tuple(Vec<ExprId>),
    /// `[a, b]`
    Array(Vec<ExprId>),
    /// `{ stmts; tail }`
    Block {
        /// Statements
        stmts: Vec<StmtId>,
        /// Value-producing tail
        tail: Option<ExprId>,
    },
    /// `a = b` / `a op= b`
    Assign {
        /// Operator of a compound assignment
        op: Option<BinOp>,
        /// Place
        target: ExprId,
        /// Value
        value: ExprId,
    },
    /// Binary operation
    BinOp {
        /// Operator
        op: BinOp,
        /// Left operand
        left: ExprId,
        /// Right operand
        right: ExprId,
    },
    /// Unary operation
    UniOp {
        /// Operator
        op: UniOp,
        /// Operand
        operand: ExprId,
    },
    /// `*a`
    Deref(ExprId),
    /// `&a` / `&mut a`
    Borrow {
        /// Reference kind
        kind: BorrowType,
        /// Borrowed place
        inner: ExprId,
    },
    /// `a as T`
    Cast {
        /// Value
        inner: ExprId,
        /// Target type
        ty: TypeRef,
    },
    /// Call of a named function
    CallPath {
        /// Function path
        path: Path,
        /// Arguments
        args: Vec<ExprId>,
    },
    /// Method call
    CallMethod {
        /// Receiver
        receiver: ExprId,
        /// Method name
        method: String,
        /// Arguments
        args: Vec<ExprId>,
    },
    /// Call of a function value
    CallValue {
        /// Callee
        callee: ExprId,
        /// Arguments
        args: Vec<ExprId>,
    },
    /// `a.b`
    Field {
        /// Base
        base: ExprId,
        /// Field name
        name: String,
    },
    /// `a[b]`
    Index {
        /// Base
        base: ExprId,
        /// Index
        index: ExprId,
    },
    /// `Path { a: x, ..base }`
    StructLiteral {
        /// Struct or variant
        path: Path,
        /// Field initializers
        fields: Vec<(String, ExprId)>,
        /// Functional update base
        base: Option<ExprId>,
    },
    /// `if`
    If {
        /// Condition
        cond: ExprId,
        /// Then branch
        then_branch: ExprId,
        /// Else branch
        else_branch: Option<ExprId>,
    },
    /// `match`
    Match {
        /// Scrutinee
        value: ExprId,
        /// Arms
        arms: Vec<MatchArm>,
    },
    /// `loop`
    Loop {
        /// Label
        label: Option<String>,
        /// Body
        body: ExprId,
    },
    /// `return`
    Return(Option<ExprId>),
    /// `break`
    Break {
        /// Target loop
        label: Option<String>,
        /// Value
        value: Option<ExprId>,
    },
    /// `continue`
    Continue {
        /// Target loop
        label: Option<String>,
    },
}

/// Match arm
#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    /// Alternatives
    pub patterns: Vec<Pattern>,
    /// Guard
    pub guard: Option<ExprId>,
    /// Body
    pub body: ExprId,
}

/// Block statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let`
    Let {
        /// Pattern
        pattern: Pattern,
        /// Declared type, `Infer` when omitted
        ty: TypeRef,
        /// Initializer
        value: Option<ExprId>,
    },
    /// Expression statement
    Expr(ExprId),
}

impl fmt::Display for ExprPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body() {
            Some(body) => BodyPrinter { body, f }.expr(body.root),
            None => f.write_str("/* empty */"),
        }
    }
}

struct BodyPrinter<'a, 'f, 'b> {
    body: &'a Body,
    f: &'f mut fmt::Formatter<'b>,
}

impl BodyPrinter<'_, '_, '_> {
    fn list(&mut self, ids: &[ExprId]) -> fmt::Result {
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            self.expr(id)?;
        }
        Ok(())
    }

    fn label(&mut self, label: Option<&String>) -> fmt::Result {
        match label {
            Some(label) => write!(self.f, " '{label}"),
            None => Ok(()),
        }
    }

    fn stmt(&mut self, id: StmtId) -> fmt::Result {
        let body = self.body;
        match &body.stmts[id] {
            Stmt::Let { pattern, ty, value } => {
                write!(self.f, "let {pattern}")?;
                if *ty != TypeRef::Infer {
                    write!(self.f, ": {ty}")?;
                }
                if let Some(value) = value {
                    self.f.write_str(" = ")?;
                    self.expr(*value)?;
                }
                Ok(())
            }
            Stmt::Expr(expr) => self.expr(*expr),
        }
    }

    fn expr(&mut self, id: ExprId) -> fmt::Result {
        let body = self.body;
        match &body.exprs[id] {
            Expr::Literal(lit) => write!(self.f, "{lit}"),
            Expr::Local { name } => self.f.write_str(name),
            Expr::Path(path) => write!(self.f, "{path}"),
            Expr::Tuple(items) => {
                self.f.write_str("(")?;
                self.list(items)?;
                if items.len() == 1 {
                    self.f.write_str(",")?;
                }
                self.f.write_str(")")
            }
            Expr::Array(items) => {
                self.f.write_str("[")?;
                self.list(items)?;
                self.f.write_str("]")
            }
            Expr::Block { stmts, tail } => {
                self.f.write_str("{")?;
                for &stmt in stmts {
                    self.f.write_str(" ")?;
                    self.stmt(stmt)?;
                    self.f.write_str(";")?;
                }
                if let Some(tail) = tail {
                    self.f.write_str(" ")?;
                    self.expr(*tail)?;
                }
                self.f.write_str(" }")
            }
            Expr::Assign { op, target, value } => {
                self.expr(*target)?;
                match op {
                    Some(op) => write!(self.f, " {op}= ")?,
                    None => self.f.write_str(" = ")?,
                }
                self.expr(*value)
            }
            Expr::BinOp { op, left, right } => {
                self.f.write_str("(")?;
                self.expr(*left)?;
                write!(self.f, " {op} ")?;
                self.expr(*right)?;
                self.f.write_str(")")
            }
            Expr::UniOp { op, operand } => {
                write!(self.f, "{op}")?;
                self.expr(*operand)
            }
            Expr::Deref(inner) => {
                self.f.write_str("*")?;
                self.expr(*inner)
            }
            Expr::Borrow { kind, inner } => {
                write!(self.f, "{kind}")?;
                self.expr(*inner)
            }
            Expr::Cast { inner, ty } => {
                self.f.write_str("(")?;
                self.expr(*inner)?;
                write!(self.f, " as {ty})")
            }
            Expr::CallPath { path, args } => {
                write!(self.f, "{path}(")?;
                self.list(args)?;
                self.f.write_str(")")
            }
            Expr::CallMethod {
                receiver,
                method,
                args,
            } => {
                self.expr(*receiver)?;
                write!(self.f, ".{method}(")?;
                self.list(args)?;
                self.f.write_str(")")
            }
            Expr::CallValue { callee, args } => {
                self.f.write_str("(")?;
                self.expr(*callee)?;
                self.f.write_str(")(")?;
                self.list(args)?;
                self.f.write_str(")")
            }
            Expr::Field { base, name } => {
                self.expr(*base)?;
                write!(self.f, ".{name}")
            }
            Expr::Index { base, index } => {
                self.expr(*base)?;
                self.f.write_str("[")?;
                self.expr(*index)?;
                self.f.write_str("]")
            }
            Expr::StructLiteral { path, fields, base } => {
                write!(self.f, "{path} {{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    self.f.write_str(if i > 0 { ", " } else { " " })?;
                    write!(self.f, "{name}: ")?;
                    self.expr(*value)?;
                }
                if let Some(base) = base {
                    self.f.write_str(if fields.is_empty() { " .." } else { ", .." })?;
                    self.expr(*base)?;
                }
                self.f.write_str(" }")
            }
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.f.write_str("if ")?;
                self.expr(*cond)?;
                self.f.write_str(" ")?;
                self.expr(*then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.f.write_str(" else ")?;
                    self.expr(*else_branch)?;
                }
                Ok(())
            }
            Expr::Match { value, arms } => {
                self.f.write_str("match ")?;
                self.expr(*value)?;
                self.f.write_str(" {")?;
                for arm in arms {
                    self.f.write_str(" ")?;
                    for (i, pat) in arm.patterns.iter().enumerate() {
                        if i > 0 {
                            self.f.write_str(" | ")?;
                        }
                        write!(self.f, "{pat}")?;
                    }
                    if let Some(guard) = arm.guard {
                        self.f.write_str(" if ")?;
                        self.expr(guard)?;
                    }
                    self.f.write_str(" => ")?;
                    self.expr(arm.body)?;
                    self.f.write_str(",")?;
                }
                self.f.write_str(" }")
            }
            Expr::Loop { label, body } => {
                if let Some(label) = label {
                    write!(self.f, "'{label}: ")?;
                }
                self.f.write_str("loop ")?;
                self.expr(*body)
            }
            Expr::Return(value) => {
                self.f.write_str("return")?;
                if let Some(value) = value {
                    self.f.write_str(" ")?;
                    self.expr(*value)?;
                }
                Ok(())
            }
            Expr::Break { label, value } => {
                self.f.write_str("break")?;
                self.label(label.as_ref())?;
                if let Some(value) = value {
                    self.f.write_str(" ")?;
                    self.expr(*value)?;
                }
                Ok(())
            }
            Expr::Continue { label } => {
                self.f.write_str("continue")?;
                self.label(label.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{BindingMode, PatternBinding, PatternKind};
    use expect_test::expect;

    #[test]
    fn test_empty_ptr() {
        let ptr = ExprPtr::empty();
        assert!(!ptr.is_valid());
        assert!(ptr.body().is_none());
        expect![["/* empty */"]].assert_eq(&ptr.to_string());
    }

    #[test]
    fn test_display_block() {
        let mut exprs = Arena::new();
        let mut stmts = Arena::new();
        let one = exprs.alloc(Expr::Literal(Literal::Integer { value: 1, ty: None }));
        let two = exprs.alloc(Expr::Literal(Literal::Integer {
            value: 2,
            ty: Some(CoreType::U8),
        }));
        let sum = exprs.alloc(Expr::BinOp {
            op: BinOp::Add,
            left: one,
            right: two,
        });
        let let_x = stmts.alloc(Stmt::Let {
            pattern: Pattern {
                binding: Some(PatternBinding {
                    name: "x".into(),
                    is_mut: false,
                    mode: BindingMode::Move,
                }),
                kind: PatternKind::Any,
            },
            ty: TypeRef::Infer,
            value: Some(sum),
        });
        let x = exprs.alloc(Expr::Local { name: "x".into() });
        let deref = exprs.alloc(Expr::Deref(x));
        let root = exprs.alloc(Expr::Block {
            stmts: vec![let_x],
            tail: Some(deref),
        });
        let ptr = ExprPtr::new(Body { exprs, stmts, root });

        expect![["{ let x = (1 + 2u8); *x }"]].assert_eq(&ptr.to_string());
    }

    #[test]
    fn test_display_loop_and_break() {
        let mut exprs = Arena::new();
        let brk = exprs.alloc(Expr::Break {
            label: Some("outer".into()),
            value: None,
        });
        let block = exprs.alloc(Expr::Block {
            stmts: Vec::new(),
            tail: Some(brk),
        });
        let root = exprs.alloc(Expr::Loop {
            label: Some("outer".into()),
            body: block,
        });
        let ptr = ExprPtr::new(Body {
            exprs,
            stmts: Arena::new(),
            root,
        });

        expect![["'outer: loop { break 'outer }"]].assert_eq(&ptr.to_string());
    }
}
