//! Expression lowering
//!
//! Each expression tree becomes one [`Body`]. Sugar is removed on the way:
//! `if let` and `while let` become `match`, `while` becomes `loop` with an
//! explicit `break`, and `*x` gets its own node.

use crate::error::{LowerError, LowerResult};
use crate::path::lower_path;
use crate::pattern::{lower_literal, lower_pattern};
use crate::ty::lower_type;
use ks_hir::{
    BinOp, Body, BorrowType, Expr, ExprId, ExprPtr, MatchArm, Pattern, Stmt, UniOp,
};
use ks_syntax as ast;
use ks_syntax::{ExprKind, ExprNode, PathClass};
use la_arena::Arena;

/// Lower an optional expression; an absent one gives an empty [`ExprPtr`]
pub fn lower_expr(expr: &ast::Expr) -> LowerResult<ExprPtr> {
    let Some(node) = expr.node() else {
        return Ok(ExprPtr::empty());
    };
    let mut builder = BodyBuilder::default();
    let root = builder.lower(node)?;
    Ok(ExprPtr::new(builder.finish(root)))
}

#[derive(Default)]
struct BodyBuilder {
    exprs: Arena<Expr>,
    stmts: Arena<Stmt>,
}

impl BodyBuilder {
    fn finish(self, root: ExprId) -> Body {
        Body {
            exprs: self.exprs,
            stmts: self.stmts,
            root,
        }
    }

    fn alloc(&mut self, expr: Expr) -> ExprId {
        self.exprs.alloc(expr)
    }

    fn lower_all(&mut self, nodes: &[ExprNode]) -> LowerResult<Vec<ExprId>> {
        nodes.iter().map(|node| self.lower(node)).collect()
    }

    fn lower_opt(&mut self, node: Option<&ExprNode>) -> LowerResult<Option<ExprId>> {
        node.map(|node| self.lower(node)).transpose()
    }

    fn lower(&mut self, node: &ExprNode) -> LowerResult<ExprId> {
        let span = node.span;
        let expr = match &node.kind {
            ExprKind::Macro(mac) => {
                return Err(LowerError::invariant(
                    format!("unexpanded macro `{}!` in expression position", mac.name),
                    span,
                ));
            }
            ExprKind::Literal(lit) => Expr::Literal(lower_literal(lit, span)?),
            ExprKind::NamedValue(path) => match &path.class {
                PathClass::Local { name } => Expr::Local { name: name.clone() },
                _ => Expr::Path(lower_path(path)?),
            },
            ExprKind::Tuple(items) => Expr::Tuple(self.lower_all(items)?),
            ExprKind::Array(items) => Expr::Array(self.lower_all(items)?),
            ExprKind::Block(block) => self.lower_block(block)?,
            ExprKind::Assign { op, target, value } => Expr::Assign {
                op: op.map(lower_binop),
                target: self.lower(target)?,
                value: self.lower(value)?,
            },
            ExprKind::BinOp { op, left, right } => Expr::BinOp {
                op: lower_binop(*op),
                left: self.lower(left)?,
                right: self.lower(right)?,
            },
            ExprKind::UniOp { op, operand } => {
                let operand = self.lower(operand)?;
                match op {
                    ast::UniOp::Neg => Expr::UniOp {
                        op: UniOp::Neg,
                        operand,
                    },
                    ast::UniOp::Not => Expr::UniOp {
                        op: UniOp::Not,
                        operand,
                    },
                    ast::UniOp::Deref => Expr::Deref(operand),
                }
            }
            ExprKind::Borrow { is_mut, inner } => Expr::Borrow {
                kind: BorrowType::from_mut(*is_mut),
                inner: self.lower(inner)?,
            },
            ExprKind::Cast { inner, ty } => Expr::Cast {
                inner: self.lower(inner)?,
                ty: lower_type(ty)?,
            },
            ExprKind::CallPath { path, args } => match &path.class {
                // calling a closure or fn pointer held in a local
                PathClass::Local { name } => {
                    let callee = self.alloc(Expr::Local { name: name.clone() });
                    Expr::CallValue {
                        callee,
                        args: self.lower_all(args)?,
                    }
                }
                _ => Expr::CallPath {
                    path: lower_path(path)?,
                    args: self.lower_all(args)?,
                },
            },
            ExprKind::CallMethod {
                receiver,
                method,
                args,
            } => Expr::CallMethod {
                receiver: self.lower(receiver)?,
                method: method.clone(),
                args: self.lower_all(args)?,
            },
            ExprKind::CallObject { callee, args } => Expr::CallValue {
                callee: self.lower(callee)?,
                args: self.lower_all(args)?,
            },
            ExprKind::Field { base, name } => Expr::Field {
                base: self.lower(base)?,
                name: name.clone(),
            },
            ExprKind::Index { base, index } => Expr::Index {
                base: self.lower(base)?,
                index: self.lower(index)?,
            },
            ExprKind::StructLiteral { path, fields, base } => Expr::StructLiteral {
                path: lower_path(path)?,
                fields: fields
                    .iter()
                    .map(|(name, value)| Ok((name.clone(), self.lower(value)?)))
                    .collect::<LowerResult<_>>()?,
                base: self.lower_opt(base.as_deref())?,
            },
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => Expr::If {
                cond: self.lower(cond)?,
                then_branch: self.lower(then_branch)?,
                else_branch: self.lower_opt(else_branch.as_deref())?,
            },
            ExprKind::IfLet {
                pattern,
                value,
                then_branch,
                else_branch,
            } => {
                let value = self.lower(value)?;
                let pattern = lower_pattern(pattern)?;
                let then_branch = self.lower(then_branch)?;
                let else_branch = match else_branch {
                    Some(else_branch) => self.lower(else_branch)?,
                    None => self.alloc(Expr::Block {
                        stmts: Vec::new(),
                        tail: None,
                    }),
                };
                Expr::Match {
                    value,
                    arms: vec![arm(pattern, then_branch), arm(Pattern::wildcard(), else_branch)],
                }
            }
            ExprKind::Match { value, arms } => Expr::Match {
                value: self.lower(value)?,
                arms: arms
                    .iter()
                    .map(|arm| self.lower_arm(arm))
                    .collect::<LowerResult<_>>()?,
            },
            ExprKind::Loop { label, body } => Expr::Loop {
                label: label.clone(),
                body: self.lower(body)?,
            },
            ExprKind::While { label, cond, body } => {
                let cond = self.lower(cond)?;
                let body = self.lower(body)?;
                let exit = self.break_block(label);
                let branch = self.alloc(Expr::If {
                    cond,
                    then_branch: body,
                    else_branch: Some(exit),
                });
                Expr::Loop {
                    label: label.clone(),
                    body: self.wrap_block(branch),
                }
            }
            ExprKind::WhileLet {
                label,
                pattern,
                value,
                body,
            } => {
                let value = self.lower(value)?;
                let pattern = lower_pattern(pattern)?;
                let body = self.lower(body)?;
                let exit = self.break_block(label);
                let branch = self.alloc(Expr::Match {
                    value,
                    arms: vec![arm(pattern, body), arm(Pattern::wildcard(), exit)],
                });
                Expr::Loop {
                    label: label.clone(),
                    body: self.wrap_block(branch),
                }
            }
            ExprKind::For { .. } => {
                return Err(LowerError::not_implemented("`for` loops", span));
            }
            ExprKind::Return(value) => Expr::Return(self.lower_opt(value.as_deref())?),
            ExprKind::Break { label, value } => Expr::Break {
                label: label.clone(),
                value: self.lower_opt(value.as_deref())?,
            },
            ExprKind::Continue { label } => Expr::Continue {
                label: label.clone(),
            },
        };
        Ok(self.alloc(expr))
    }

    fn lower_block(&mut self, block: &ast::Block) -> LowerResult<Expr> {
        let mut stmts = Vec::with_capacity(block.stmts.len());
        for stmt in &block.stmts {
            let stmt = match stmt {
                ast::Statement::Let {
                    pattern, ty, value, ..
                } => Stmt::Let {
                    pattern: lower_pattern(pattern)?,
                    ty: lower_type(ty)?,
                    value: self.lower_opt(value.node())?,
                },
                ast::Statement::Expr(node) => Stmt::Expr(self.lower(node)?),
            };
            stmts.push(self.stmts.alloc(stmt));
        }
        Ok(Expr::Block {
            stmts,
            tail: self.lower_opt(block.tail.as_deref())?,
        })
    }

    fn lower_arm(&mut self, arm: &ast::MatchArm) -> LowerResult<MatchArm> {
        Ok(MatchArm {
            patterns: arm
                .patterns
                .iter()
                .map(lower_pattern)
                .collect::<LowerResult<_>>()?,
            guard: self.lower_opt(arm.guard.as_ref())?,
            body: self.lower(&arm.body)?,
        })
    }

    /// `{ break 'label }`
    fn break_block(&mut self, label: &Option<String>) -> ExprId {
        let brk = self.alloc(Expr::Break {
            label: label.clone(),
            value: None,
        });
        self.wrap_block(brk)
    }

    fn wrap_block(&mut self, tail: ExprId) -> ExprId {
        self.alloc(Expr::Block {
            stmts: Vec::new(),
            tail: Some(tail),
        })
    }
}

fn arm(pattern: Pattern, body: ExprId) -> MatchArm {
    MatchArm {
        patterns: vec![pattern],
        guard: None,
        body,
    }
}

fn lower_binop(op: ast::BinOp) -> BinOp {
    match op {
        ast::BinOp::Add => BinOp::Add,
        ast::BinOp::Sub => BinOp::Sub,
        ast::BinOp::Mul => BinOp::Mul,
        ast::BinOp::Div => BinOp::Div,
        ast::BinOp::Rem => BinOp::Rem,
        ast::BinOp::BitAnd => BinOp::BitAnd,
        ast::BinOp::BitOr => BinOp::BitOr,
        ast::BinOp::BitXor => BinOp::BitXor,
        ast::BinOp::Shl => BinOp::Shl,
        ast::BinOp::Shr => BinOp::Shr,
        ast::BinOp::Eq => BinOp::Eq,
        ast::BinOp::Ne => BinOp::Ne,
        ast::BinOp::Lt => BinOp::Lt,
        ast::BinOp::Le => BinOp::Le,
        ast::BinOp::Gt => BinOp::Gt,
        ast::BinOp::Ge => BinOp::Ge,
        ast::BinOp::And => BinOp::And,
        ast::BinOp::Or => BinOp::Or,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use expect_test::{Expect, expect};
    use ks_span::FileSpan;
    use ks_syntax::{Block, CoreType, Literal, Path, Statement, TypeRef};

    fn sp() -> FileSpan {
        FileSpan::dummy()
    }

    fn node(kind: ExprKind) -> ExprNode {
        ExprNode::new(kind, sp())
    }

    fn local(name: &str) -> ExprNode {
        node(ExprKind::NamedValue(Path::local(name, sp())))
    }

    fn int(value: u128) -> ExprNode {
        node(ExprKind::Literal(Literal::Integer {
            value,
            ty: CoreType::Any,
        }))
    }

    fn block(stmts: Vec<Statement>, tail: Option<ExprNode>) -> ExprNode {
        node(ExprKind::Block(Block {
            stmts,
            tail: tail.map(Box::new),
        }))
    }

    fn check(kind: ExprKind, expect: Expect) {
        let lowered = lower_expr(&ast::Expr::new(node(kind))).unwrap();
        expect.assert_eq(&lowered.to_string());
    }

    #[test]
    fn test_absent_expression() {
        let lowered = lower_expr(&ast::Expr::empty()).unwrap();
        assert!(!lowered.is_valid());
    }

    #[test]
    fn test_block_with_let_and_deref() {
        let let_x = Statement::Let {
            pattern: ast::Pattern::binding("x", false, sp()),
            ty: TypeRef::borrow(false, TypeRef::primitive(CoreType::I32, sp()), sp()),
            value: ast::Expr::new(node(ExprKind::Borrow {
                is_mut: false,
                inner: Box::new(local("y")),
            })),
            span: sp(),
        };
        let deref = node(ExprKind::UniOp {
            op: ast::UniOp::Deref,
            operand: Box::new(local("x")),
        });
        let ExprKind::Block(body) = block(vec![let_x], Some(deref)).kind else {
            unreachable!()
        };
        check(ExprKind::Block(body), expect![["{ let x: &i32 = &y; *x }"]]);
    }

    #[test]
    fn test_deref_is_not_a_unary_op() {
        let lowered = lower_expr(&ast::Expr::new(node(ExprKind::UniOp {
            op: ast::UniOp::Deref,
            operand: Box::new(local("p")),
        })))
        .unwrap();
        let body = lowered.body().unwrap();
        assert!(matches!(body.root_expr(), Expr::Deref(_)));
    }

    #[test]
    fn test_calls_and_operators() {
        let call = ExprKind::CallPath {
            path: Path::absolute("", &["math", "max"], sp()),
            args: vec![
                node(ExprKind::BinOp {
                    op: ast::BinOp::Mul,
                    left: Box::new(local("a")),
                    right: Box::new(int(2)),
                }),
                node(ExprKind::Cast {
                    inner: Box::new(local("b")),
                    ty: TypeRef::primitive(CoreType::I64, sp()),
                }),
            ],
        };
        check(call, expect![["::math::max((a * 2), (b as i64))"]]);

        let closure_call = ExprKind::CallPath {
            path: Path::local("f", sp()),
            args: vec![int(1)],
        };
        check(closure_call, expect![["(f)(1)"]]);

        let method = ExprKind::CallMethod {
            receiver: Box::new(node(ExprKind::Field {
                base: Box::new(local("s")),
                name: "items".into(),
            })),
            method: "push".into(),
            args: vec![node(ExprKind::Index {
                base: Box::new(local("v")),
                index: Box::new(int(0)),
            })],
        };
        check(method, expect![["s.items.push(v[0])"]]);

        let assign = ExprKind::Assign {
            op: Some(ast::BinOp::Add),
            target: Box::new(local("n")),
            value: Box::new(int(1)),
        };
        check(assign, expect![["n += 1"]]);
    }

    #[test]
    fn test_if_let_becomes_match() {
        let some = Path::absolute("core", &["option", "Option", "Some"], sp());
        let if_let = ExprKind::IfLet {
            pattern: ast::Pattern::new(
                ast::PatternKind::StructTuple {
                    path: some,
                    sub_patterns: vec![ast::Pattern::binding("v", false, sp())],
                },
                sp(),
            ),
            value: Box::new(local("opt")),
            then_branch: Box::new(block(Vec::new(), Some(local("v")))),
            else_branch: None,
        };
        check(
            if_let,
            expect![[r#"match opt { ::"core"::option::Option::Some(v) => { v }, _ => { }, }"#]],
        );
    }

    #[test]
    fn test_while_becomes_loop() {
        let while_ = ExprKind::While {
            label: Some("outer".into()),
            cond: Box::new(node(ExprKind::BinOp {
                op: ast::BinOp::Lt,
                left: Box::new(local("i")),
                right: Box::new(int(10)),
            })),
            body: Box::new(block(
                vec![Statement::Expr(node(ExprKind::Assign {
                    op: Some(ast::BinOp::Add),
                    target: Box::new(local("i")),
                    value: Box::new(int(1)),
                }))],
                None,
            )),
        };
        check(
            while_,
            expect![["'outer: loop { if (i < 10) { i += 1; } else { break 'outer } }"]],
        );
    }

    #[test]
    fn test_while_let_becomes_loop_match() {
        let while_let = ExprKind::WhileLet {
            label: None,
            pattern: ast::Pattern::binding("x", false, sp()),
            value: Box::new(node(ExprKind::CallMethod {
                receiver: Box::new(local("it")),
                method: "next".into(),
                args: Vec::new(),
            })),
            body: Box::new(block(Vec::new(), None)),
        };
        check(
            while_let,
            expect![["loop { match it.next() { x => { }, _ => { break }, } }"]],
        );
    }

    #[test]
    fn test_struct_literal_and_control_flow() {
        let lit = ExprKind::StructLiteral {
            path: Path::absolute("", &["Point"], sp()),
            fields: vec![("x".into(), int(1))],
            base: Some(Box::new(local("origin"))),
        };
        check(lit, expect![["::Point { x: 1, ..origin }"]]);

        let ret = ExprKind::Return(Some(Box::new(node(ExprKind::Tuple(vec![int(1)])))));
        check(ret, expect![["return (1,)"]]);

        check(ExprKind::Continue { label: None }, expect![["continue"]]);
    }

    #[test]
    fn test_unlowerable_expressions() {
        let for_loop = ast::Expr::new(node(ExprKind::For {
            label: None,
            pattern: ast::Pattern::wildcard(sp()),
            iterator: Box::new(local("xs")),
            body: Box::new(block(Vec::new(), None)),
        }));
        assert_eq!(lower_expr(&for_loop).unwrap_err().kind(), ErrorKind::NotImplemented);

        // a macro nested inside an array still aborts the whole body
        let mac = ast::Expr::new(node(ExprKind::Array(vec![
            int(1),
            node(ExprKind::Macro(ast::MacroInvocation {
                name: "vec".into(),
                span: sp(),
            })),
        ])));
        assert_eq!(lower_expr(&mac).unwrap_err().kind(), ErrorKind::InvariantViolation);

        let relative = ast::Expr::new(node(ExprKind::NamedValue(Path::new(
            PathClass::Relative {
                nodes: vec![ks_syntax::PathNode::new("x")],
            },
            sp(),
        ))));
        assert_eq!(lower_expr(&relative).unwrap_err().kind(), ErrorKind::InvariantViolation);
    }
}
