//! Lowering of the swc AST into [`SyntaxNode`].
//!
//! The lowered tree follows ESTree naming. Parentheses and TypeScript type
//! wrappers (`as`, `satisfies`, `!`, `<T>x`) are transparent. Constructs that
//! the scanner does not handle explicitly become [`NodeKind::Other`] with their
//! traversable children placed in the generic `argument` and `body` slots:
//! function and class bodies, loop bodies, `return`/`throw`/`await` operands,
//! template literal substitutions, JSX attribute and child expressions, exports.
//! Loop heads (`for (init; test; update)`, `while (test)`) and patterns are not
//! lowered.

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{
    BlockStmt, BlockStmtOrExpr, Callee, Class, ClassMember, Decl, DefaultDecl, Expr,
    ExprOrSpread, Function, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementChild, JSXExpr,
    JSXFragment, Lit, MemberExpr, MemberProp, ModuleDecl, ModuleItem, Program, Prop, PropName,
    PropOrSpread, Stmt, SwitchCase, Tpl, TsNamespaceBody, VarDeclarator,
};

use crate::core::syntax::{Body, Literal, Loc, NodeKind, SyntaxNode};

pub struct Lowerer<'a> {
    source_map: &'a SourceMap,
}

impl<'a> Lowerer<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self { source_map }
    }

    fn loc(&self, pos: BytePos) -> Loc {
        let loc = self.source_map.lookup_char_pos(pos);
        Loc::new(loc.line, loc.col_display + 1)
    }

    pub fn lower_program(&self, program: &Program) -> SyntaxNode {
        let body = match program {
            Program::Module(module) => module
                .body
                .iter()
                .map(|item| self.lower_module_item(item))
                .collect(),
            Program::Script(script) => script.body.iter().map(|s| self.lower_stmt(s)).collect(),
        };
        other_seq("Program", body)
    }

    fn lower_module_item(&self, item: &ModuleItem) -> SyntaxNode {
        match item {
            ModuleItem::Stmt(stmt) => self.lower_stmt(stmt),
            ModuleItem::ModuleDecl(decl) => self.lower_module_decl(decl),
        }
    }

    fn lower_module_decl(&self, decl: &ModuleDecl) -> SyntaxNode {
        match decl {
            ModuleDecl::ExportDecl(export) => {
                other_single("ExportNamedDeclaration", self.lower_decl(&export.decl))
            }
            ModuleDecl::ExportDefaultDecl(export) => {
                let inner = match &export.decl {
                    DefaultDecl::Fn(fn_expr) => self.lower_function(&fn_expr.function),
                    DefaultDecl::Class(class_expr) => self.lower_class(&class_expr.class),
                    DefaultDecl::TsInterfaceDecl(_) => SyntaxNode::leaf("TSInterfaceDeclaration"),
                };
                other_single("ExportDefaultDeclaration", inner)
            }
            ModuleDecl::ExportDefaultExpr(export) => {
                other_single("ExportDefaultDeclaration", self.lower_expr(&export.expr))
            }
            ModuleDecl::TsExportAssignment(export) => {
                other_single("TSExportAssignment", self.lower_expr(&export.expr))
            }
            ModuleDecl::Import(_) => SyntaxNode::leaf("ImportDeclaration"),
            _ => SyntaxNode::leaf("ModuleDeclaration"),
        }
    }

    // ============================================================
    // Statements
    // ============================================================

    fn lower_block(&self, block: &BlockStmt) -> SyntaxNode {
        other_seq(
            "BlockStatement",
            block.stmts.iter().map(|s| self.lower_stmt(s)).collect(),
        )
    }

    fn lower_stmt(&self, stmt: &Stmt) -> SyntaxNode {
        match stmt {
            Stmt::Block(block) => self.lower_block(block),
            Stmt::Expr(expr_stmt) => SyntaxNode::new(NodeKind::ExpressionStatement {
                expression: Box::new(self.lower_expr(&expr_stmt.expr)),
            }),
            Stmt::If(if_stmt) => SyntaxNode::new(NodeKind::If {
                test: Box::new(self.lower_expr(&if_stmt.test)),
                consequent: Box::new(self.lower_stmt(&if_stmt.cons)),
                alternate: if_stmt.alt.as_ref().map(|alt| Box::new(self.lower_stmt(alt))),
            }),
            Stmt::Switch(switch) => SyntaxNode::new(NodeKind::Switch {
                discriminant: Box::new(self.lower_expr(&switch.discriminant)),
                cases: switch
                    .cases
                    .iter()
                    .map(|case| self.lower_switch_case(case))
                    .collect(),
            }),
            Stmt::Try(try_stmt) => SyntaxNode::new(NodeKind::Try {
                block: Box::new(self.lower_block(&try_stmt.block)),
                handler: try_stmt.handler.as_ref().map(|handler| {
                    Box::new(other_single("CatchClause", self.lower_block(&handler.body)))
                }),
                finalizer: try_stmt
                    .finalizer
                    .as_ref()
                    .map(|finalizer| Box::new(self.lower_block(finalizer))),
            }),
            Stmt::Return(ret) => other_arg(
                "ReturnStatement",
                ret.arg.as_ref().map(|arg| self.lower_expr(arg)),
            ),
            Stmt::Throw(throw) => other_arg("ThrowStatement", Some(self.lower_expr(&throw.arg))),
            Stmt::Labeled(labeled) => {
                other_single("LabeledStatement", self.lower_stmt(&labeled.body))
            }
            Stmt::With(with) => other_single("WithStatement", self.lower_stmt(&with.body)),
            Stmt::While(while_stmt) => {
                other_single("WhileStatement", self.lower_stmt(&while_stmt.body))
            }
            Stmt::DoWhile(do_while) => {
                other_single("DoWhileStatement", self.lower_stmt(&do_while.body))
            }
            Stmt::For(for_stmt) => other_single("ForStatement", self.lower_stmt(&for_stmt.body)),
            Stmt::ForIn(for_in) => other_single("ForInStatement", self.lower_stmt(&for_in.body)),
            Stmt::ForOf(for_of) => other_single("ForOfStatement", self.lower_stmt(&for_of.body)),
            Stmt::Decl(decl) => self.lower_decl(decl),
            Stmt::Empty(_) => SyntaxNode::leaf("EmptyStatement"),
            Stmt::Debugger(_) => SyntaxNode::leaf("DebuggerStatement"),
            Stmt::Break(_) => SyntaxNode::leaf("BreakStatement"),
            Stmt::Continue(_) => SyntaxNode::leaf("ContinueStatement"),
        }
    }

    fn lower_switch_case(&self, case: &SwitchCase) -> SyntaxNode {
        SyntaxNode::new(NodeKind::SwitchCase {
            test: case.test.as_ref().map(|test| Box::new(self.lower_expr(test))),
            consequent: case.cons.iter().map(|s| self.lower_stmt(s)).collect(),
        })
    }

    fn lower_decl(&self, decl: &Decl) -> SyntaxNode {
        match decl {
            Decl::Var(var) => self.lower_declarators(&var.decls),
            Decl::Using(using) => self.lower_declarators(&using.decls),
            Decl::Fn(fn_decl) => {
                other_single("FunctionDeclaration", self.lower_function(&fn_decl.function))
            }
            Decl::Class(class_decl) => {
                other_single("ClassDeclaration", self.lower_class(&class_decl.class))
            }
            Decl::TsModule(module) => match &module.body {
                Some(body) => self.lower_namespace_body(body),
                None => SyntaxNode::leaf("TSModuleDeclaration"),
            },
            _ => SyntaxNode::leaf("TSDeclaration"),
        }
    }

    /// `namespace A.B { .. }` nests one `TsNamespaceDecl` per dotted segment.
    fn lower_namespace_body(&self, body: &TsNamespaceBody) -> SyntaxNode {
        match body {
            TsNamespaceBody::TsModuleBlock(block) => other_seq(
                "TSModuleDeclaration",
                block
                    .body
                    .iter()
                    .map(|item| self.lower_module_item(item))
                    .collect(),
            ),
            TsNamespaceBody::TsNamespaceDecl(decl) => {
                other_single("TSModuleDeclaration", self.lower_namespace_body(&decl.body))
            }
        }
    }

    fn lower_declarators(&self, decls: &[VarDeclarator]) -> SyntaxNode {
        SyntaxNode::new(NodeKind::VariableDeclaration {
            declarations: decls
                .iter()
                .map(|decl| {
                    SyntaxNode::new(NodeKind::VariableDeclarator {
                        init: decl.init.as_ref().map(|init| Box::new(self.lower_expr(init))),
                    })
                })
                .collect(),
        })
    }

    /// Lowers to the function body (or a leaf for bodiless overload signatures).
    fn lower_function(&self, function: &Function) -> SyntaxNode {
        match &function.body {
            Some(body) => other_single("FunctionExpression", self.lower_block(body)),
            None => SyntaxNode::leaf("FunctionExpression"),
        }
    }

    fn lower_class(&self, class: &Class) -> SyntaxNode {
        let members = class
            .body
            .iter()
            .map(|member| self.lower_class_member(member))
            .collect();
        SyntaxNode::new(NodeKind::Other {
            kind: "ClassBody",
            argument: class
                .super_class
                .as_ref()
                .map(|super_class| Box::new(self.lower_expr(super_class))),
            body: Some(Body::Sequence(members)),
        })
    }

    fn lower_class_member(&self, member: &ClassMember) -> SyntaxNode {
        match member {
            ClassMember::Constructor(ctor) => match &ctor.body {
                Some(body) => other_single("MethodDefinition", self.lower_block(body)),
                None => SyntaxNode::leaf("MethodDefinition"),
            },
            ClassMember::Method(method) => {
                other_single("MethodDefinition", self.lower_function(&method.function))
            }
            ClassMember::PrivateMethod(method) => {
                other_single("MethodDefinition", self.lower_function(&method.function))
            }
            ClassMember::ClassProp(prop) => other_arg(
                "PropertyDefinition",
                prop.value.as_ref().map(|value| self.lower_expr(value)),
            ),
            ClassMember::PrivateProp(prop) => other_arg(
                "PropertyDefinition",
                prop.value.as_ref().map(|value| self.lower_expr(value)),
            ),
            ClassMember::AutoAccessor(accessor) => other_arg(
                "AccessorProperty",
                accessor.value.as_ref().map(|value| self.lower_expr(value)),
            ),
            ClassMember::StaticBlock(block) => {
                other_single("StaticBlock", self.lower_block(&block.body))
            }
            _ => SyntaxNode::leaf("ClassMember"),
        }
    }

    // ============================================================
    // Expressions
    // ============================================================

    fn lower_expr(&self, expr: &Expr) -> SyntaxNode {
        match expr {
            Expr::Ident(ident) => SyntaxNode::identifier(ident.sym.as_str()),
            Expr::Lit(lit) => SyntaxNode::new(NodeKind::Literal(lower_lit(lit))),
            Expr::Array(array) => SyntaxNode::new(NodeKind::Array {
                elements: array
                    .elems
                    .iter()
                    .flatten()
                    .map(|elem| self.lower_expr_or_spread(elem))
                    .collect(),
            }),
            Expr::Object(object) => SyntaxNode::new(NodeKind::Object {
                properties: object
                    .props
                    .iter()
                    .map(|prop| self.lower_prop_or_spread(prop))
                    .collect(),
            }),
            Expr::Bin(bin) => {
                let operator = bin.op.as_str().to_string();
                let left = Box::new(self.lower_expr(&bin.left));
                let right = Box::new(self.lower_expr(&bin.right));
                if matches!(operator.as_str(), "&&" | "||" | "??") {
                    SyntaxNode::new(NodeKind::Logical {
                        operator,
                        left,
                        right,
                    })
                } else {
                    SyntaxNode::new(NodeKind::Binary {
                        operator,
                        left,
                        right,
                    })
                }
            }
            Expr::Assign(assign) => SyntaxNode::new(NodeKind::Assignment {
                operator: assign.op.as_str().to_string(),
                right: Box::new(self.lower_expr(&assign.right)),
            }),
            Expr::Member(member) => self.lower_member(member),
            Expr::Cond(cond) => SyntaxNode::new(NodeKind::Conditional {
                test: Box::new(self.lower_expr(&cond.test)),
                consequent: Box::new(self.lower_expr(&cond.cons)),
                alternate: Box::new(self.lower_expr(&cond.alt)),
            }),
            Expr::Call(call) => {
                let callee = match &call.callee {
                    Callee::Expr(callee) => self.lower_expr(callee),
                    Callee::Super(_) => SyntaxNode::leaf("Super"),
                    Callee::Import(_) => SyntaxNode::leaf("Import"),
                };
                self.lower_call(callee, &call.args, call.span.lo)
            }
            Expr::New(new) => SyntaxNode::new(NodeKind::New {
                callee: Box::new(self.lower_expr(&new.callee)),
                arguments: new
                    .args
                    .iter()
                    .flatten()
                    .map(|arg| self.lower_expr_or_spread(arg))
                    .collect(),
            }),
            Expr::Seq(seq) => SyntaxNode::new(NodeKind::Sequence {
                expressions: seq.exprs.iter().map(|e| self.lower_expr(e)).collect(),
            }),
            Expr::OptChain(opt_chain) => match &*opt_chain.base {
                swc_ecma_ast::OptChainBase::Member(member) => self.lower_member(member),
                swc_ecma_ast::OptChainBase::Call(call) => {
                    let callee = self.lower_expr(&call.callee);
                    self.lower_call(callee, &call.args, call.span.lo)
                }
            },
            Expr::Fn(fn_expr) => self.lower_function(&fn_expr.function),
            Expr::Arrow(arrow) => {
                let body = match &*arrow.body {
                    BlockStmtOrExpr::BlockStmt(block) => self.lower_block(block),
                    BlockStmtOrExpr::Expr(expr) => self.lower_expr(expr),
                };
                other_single("ArrowFunctionExpression", body)
            }
            Expr::Class(class_expr) => {
                other_single("ClassExpression", self.lower_class(&class_expr.class))
            }
            Expr::Unary(unary) => other_arg("UnaryExpression", Some(self.lower_expr(&unary.arg))),
            Expr::Update(update) => {
                other_arg("UpdateExpression", Some(self.lower_expr(&update.arg)))
            }
            Expr::Await(await_expr) => {
                other_arg("AwaitExpression", Some(self.lower_expr(&await_expr.arg)))
            }
            Expr::Yield(yield_expr) => other_arg(
                "YieldExpression",
                yield_expr.arg.as_ref().map(|arg| self.lower_expr(arg)),
            ),
            Expr::Tpl(tpl) => self.lower_tpl(tpl),
            Expr::TaggedTpl(tagged) => SyntaxNode::new(NodeKind::Other {
                kind: "TaggedTemplateExpression",
                argument: Some(Box::new(self.lower_expr(&tagged.tag))),
                body: Some(Body::Single(Box::new(self.lower_tpl(&tagged.tpl)))),
            }),
            Expr::JSXElement(element) => self.lower_jsx_element(element),
            Expr::JSXFragment(fragment) => self.lower_jsx_fragment(fragment),
            Expr::Paren(paren) => self.lower_expr(&paren.expr),
            Expr::TsAs(ts) => self.lower_expr(&ts.expr),
            Expr::TsSatisfies(ts) => self.lower_expr(&ts.expr),
            Expr::TsNonNull(ts) => self.lower_expr(&ts.expr),
            Expr::TsTypeAssertion(ts) => self.lower_expr(&ts.expr),
            Expr::TsConstAssertion(ts) => self.lower_expr(&ts.expr),
            Expr::TsInstantiation(ts) => self.lower_expr(&ts.expr),
            Expr::This(_) => SyntaxNode::leaf("ThisExpression"),
            _ => SyntaxNode::leaf("Expression"),
        }
    }

    fn lower_call(&self, callee: SyntaxNode, args: &[ExprOrSpread], lo: BytePos) -> SyntaxNode {
        SyntaxNode::new(NodeKind::Call {
            callee: Box::new(callee),
            arguments: args.iter().map(|arg| self.lower_expr_or_spread(arg)).collect(),
        })
        .with_loc(self.loc(lo))
    }

    fn lower_member(&self, member: &MemberExpr) -> SyntaxNode {
        let (property, computed) = match &member.prop {
            MemberProp::Ident(ident) => (SyntaxNode::identifier(ident.sym.as_str()), false),
            MemberProp::Computed(computed) => (self.lower_expr(&computed.expr), true),
            MemberProp::PrivateName(_) => (SyntaxNode::leaf("PrivateName"), false),
        };
        SyntaxNode::new(NodeKind::Member {
            object: Box::new(self.lower_expr(&member.obj)),
            property: Box::new(property),
            computed,
        })
    }

    fn lower_expr_or_spread(&self, arg: &ExprOrSpread) -> SyntaxNode {
        let expr = self.lower_expr(&arg.expr);
        if arg.spread.is_some() {
            other_arg("SpreadElement", Some(expr))
        } else {
            expr
        }
    }

    fn lower_prop_or_spread(&self, prop: &PropOrSpread) -> SyntaxNode {
        let prop = match prop {
            PropOrSpread::Spread(spread) => {
                return other_arg("SpreadElement", Some(self.lower_expr(&spread.expr)));
            }
            PropOrSpread::Prop(prop) => prop,
        };

        let (key, value) = match &**prop {
            Prop::KeyValue(kv) => (self.lower_prop_name(&kv.key), self.lower_expr(&kv.value)),
            Prop::Shorthand(ident) => (
                SyntaxNode::identifier(ident.sym.as_str()),
                SyntaxNode::identifier(ident.sym.as_str()),
            ),
            Prop::Assign(assign) => (
                SyntaxNode::identifier(assign.key.sym.as_str()),
                self.lower_expr(&assign.value),
            ),
            Prop::Method(method) => (
                self.lower_prop_name(&method.key),
                self.lower_function(&method.function),
            ),
            Prop::Getter(getter) => (
                self.lower_prop_name(&getter.key),
                self.lower_optional_body(getter.body.as_ref()),
            ),
            Prop::Setter(setter) => (
                self.lower_prop_name(&setter.key),
                self.lower_optional_body(setter.body.as_ref()),
            ),
        };
        SyntaxNode::new(NodeKind::Property {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    fn lower_optional_body(&self, body: Option<&BlockStmt>) -> SyntaxNode {
        match body {
            Some(block) => other_single("FunctionExpression", self.lower_block(block)),
            None => SyntaxNode::leaf("FunctionExpression"),
        }
    }

    fn lower_prop_name(&self, name: &PropName) -> SyntaxNode {
        match name {
            PropName::Ident(ident) => SyntaxNode::identifier(ident.sym.as_str()),
            PropName::Str(s) => SyntaxNode::string(s.value.as_str().unwrap_or_default()),
            PropName::Num(num) => SyntaxNode::new(NodeKind::Literal(Literal::Number(num.value))),
            PropName::Computed(computed) => self.lower_expr(&computed.expr),
            PropName::BigInt(big) => {
                SyntaxNode::new(NodeKind::Literal(Literal::Raw(big.value.to_string())))
            }
        }
    }

    fn lower_tpl(&self, tpl: &Tpl) -> SyntaxNode {
        other_seq(
            "TemplateLiteral",
            tpl.exprs.iter().map(|e| self.lower_expr(e)).collect(),
        )
    }

    // ============================================================
    // JSX
    // ============================================================

    fn lower_jsx_element(&self, element: &JSXElement) -> SyntaxNode {
        let mut body = Vec::new();
        for attr in &element.opening.attrs {
            match attr {
                JSXAttrOrSpread::JSXAttr(attr) => match &attr.value {
                    Some(JSXAttrValue::JSXExprContainer(container)) => {
                        if let JSXExpr::Expr(expr) = &container.expr {
                            body.push(self.lower_expr(expr));
                        }
                    }
                    Some(JSXAttrValue::JSXElement(nested)) => {
                        body.push(self.lower_jsx_element(nested))
                    }
                    Some(JSXAttrValue::JSXFragment(fragment)) => {
                        body.push(self.lower_jsx_fragment(fragment))
                    }
                    _ => {}
                },
                JSXAttrOrSpread::SpreadElement(spread) => {
                    body.push(other_arg("JSXSpreadAttribute", Some(self.lower_expr(&spread.expr))))
                }
            }
        }
        body.extend(self.lower_jsx_children(&element.children));
        other_seq("JSXElement", body)
    }

    fn lower_jsx_fragment(&self, fragment: &JSXFragment) -> SyntaxNode {
        other_seq("JSXFragment", self.lower_jsx_children(&fragment.children))
    }

    fn lower_jsx_children(&self, children: &[JSXElementChild]) -> Vec<SyntaxNode> {
        children
            .iter()
            .filter_map(|child| match child {
                JSXElementChild::JSXExprContainer(container) => match &container.expr {
                    JSXExpr::Expr(expr) => Some(self.lower_expr(expr)),
                    JSXExpr::JSXEmptyExpr(_) => None,
                },
                JSXElementChild::JSXSpreadChild(spread) => Some(self.lower_expr(&spread.expr)),
                JSXElementChild::JSXElement(element) => Some(self.lower_jsx_element(element)),
                JSXElementChild::JSXFragment(fragment) => Some(self.lower_jsx_fragment(fragment)),
                JSXElementChild::JSXText(_) => None,
            })
            .collect()
    }
}

fn lower_lit(lit: &Lit) -> Literal {
    match lit {
        Lit::Str(s) => Literal::String(s.value.as_str().unwrap_or_default().to_string()),
        Lit::Num(num) => Literal::Number(num.value),
        Lit::Bool(b) => Literal::Boolean(b.value),
        Lit::Null(_) => Literal::Null,
        Lit::BigInt(big) => Literal::Raw(format!("{}n", big.value)),
        Lit::Regex(regex) => Literal::Raw(format!("/{}/{}", regex.exp, regex.flags)),
        Lit::JSXText(text) => Literal::Raw(text.value.to_string()),
    }
}

fn other_single(kind: &'static str, child: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(NodeKind::Other {
        kind,
        argument: None,
        body: Some(Body::Single(Box::new(child))),
    })
}

fn other_seq(kind: &'static str, children: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::Other {
        kind,
        argument: None,
        body: Some(Body::Sequence(children)),
    })
}

fn other_arg(kind: &'static str, argument: Option<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::Other {
        kind,
        argument: argument.map(Box::new),
        body: None,
    })
}

#[cfg(test)]
mod tests {
    use crate::core::parsers::source::{Language, parse_source};
    use crate::core::syntax::{Body, Literal, Loc, NodeKind, SyntaxNode};

    fn first_statement(code: &str) -> SyntaxNode {
        let parsed = parse_source(code, "test.js", Language::Javascript).unwrap();
        match parsed.program.kind {
            NodeKind::Other {
                body: Some(Body::Sequence(mut items)),
                ..
            } => items.remove(0),
            other => panic!("unexpected program node: {:?}", other),
        }
    }

    fn first_expression(code: &str) -> SyntaxNode {
        match first_statement(code).kind {
            NodeKind::ExpressionStatement { expression } => *expression,
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_call_carries_location() {
        let call = first_expression("\n\n    tr(\"Hello\");");
        assert_eq!(call.loc, Some(Loc::new(3, 5)));
        let NodeKind::Call { callee, arguments } = call.kind else {
            panic!("expected call");
        };
        assert_eq!(*callee, SyntaxNode::identifier("tr"));
        assert_eq!(arguments, vec![SyntaxNode::string("Hello")]);
    }

    #[test]
    fn test_parens_are_transparent() {
        let expr = first_expression("(((\"a\")));");
        assert_eq!(expr, SyntaxNode::string("a"));
    }

    #[test]
    fn test_logical_and_binary_operators() {
        let NodeKind::Logical { operator, .. } = first_expression("a || b;").kind else {
            panic!("expected logical");
        };
        assert_eq!(operator, "||");

        let NodeKind::Binary { operator, .. } = first_expression("'a' + 'b';").kind else {
            panic!("expected binary");
        };
        assert_eq!(operator, "+");
    }

    #[test]
    fn test_member_expression_computed_flag() {
        let NodeKind::Member { computed, .. } = first_expression("a.b;").kind else {
            panic!("expected member");
        };
        assert!(!computed);
        let NodeKind::Member { computed, .. } = first_expression("a[b];").kind else {
            panic!("expected member");
        };
        assert!(computed);
    }

    #[test]
    fn test_object_property_keys() {
        let NodeKind::Object { properties } =
            first_expression("({ context: 'a', \"comment\": 'b', 3: 'c', ...rest });").kind
        else {
            panic!("expected object");
        };
        assert_eq!(properties.len(), 4);
        let keys: Vec<NodeKind> = properties
            .into_iter()
            .map(|prop| match prop.kind {
                NodeKind::Property { key, .. } => key.kind,
                other => other,
            })
            .collect();
        assert_eq!(
            keys[0],
            NodeKind::Identifier {
                name: "context".to_string()
            }
        );
        assert_eq!(keys[1], NodeKind::Literal(Literal::String("comment".to_string())));
        assert_eq!(keys[2], NodeKind::Literal(Literal::Number(3.0)));
        assert_eq!(keys[3].name(), "SpreadElement");
    }

    #[test]
    fn test_function_declaration_lowers_body() {
        let node = first_statement("function f() { return tr('x'); }");
        assert_eq!(node.kind.name(), "FunctionDeclaration");
        let NodeKind::Other {
            body: Some(Body::Single(function)),
            ..
        } = node.kind
        else {
            panic!("expected function body");
        };
        assert_eq!(function.kind.name(), "FunctionExpression");
    }

    #[test]
    fn test_optional_call_is_call() {
        let call = first_expression("i18n?.tr('x');");
        assert_eq!(call.kind.name(), "CallExpression");
    }
}
