use tamago_core::ast::{Expression, ExpressionStatement, InfixExpression, IntegerLiteral, Program};
use tamago_core::ir::lower::function_builder::FunctionBuilder;
use tamago_core::ir::op::{BinaryOp, Instruction};
use tamago_core::ir::value::{IrType, LocalId, Value};
use tamago_core::ir::{IrModule, LowerErrorKind, lower_ast_to_ir};
use tamago_core::lexer::{Token, TokenKind};
use tamago_core::location::{Location, Span};
use tamago_core::{CompileError, compile_line};

fn lower_ok(src: &str) -> IrModule {
    match compile_line(src) {
        Ok(m) => m,
        Err(e) => panic!("Unexpected compile error for {:?}: {}", src, e),
    }
}

fn int(value: i64, column: usize) -> Expression {
    let literal = value.to_string();
    let span = Span::new(Location::new(1, column), Location::new(1, column + literal.len()));
    Expression::Integer(IntegerLiteral { token: Token::new(TokenKind::Int, literal, span), value })
}

#[test]
fn function_builder_allocs_and_finalize() {
    let mut fb = FunctionBuilder::new("main", IrType::I64, "entry");
    let v = fb.emit_binary(BinaryOp::Add, Value::Const(1), Value::Const(2));
    assert_eq!(v, Value::Local(LocalId(0)));
    assert_eq!(fb.alloc_local(), LocalId(1));
    assert_eq!(fb.current_len(), 1);
    fb.ret(v);

    let mut module = IrModule::new();
    fb.finalize_into(&mut module);
    let main = module.get_function("main").expect("main");
    let entry = main.entry_block().expect("entry block");
    assert_eq!(
        entry.instructions[0],
        Instruction { dest: LocalId(0), op: BinaryOp::Add, ty: IrType::I64, lhs: Value::Const(1), rhs: Value::Const(2) }
    );
}

#[test]
fn sum_of_literals_renders_as_llvm_text() {
    let module = lower_ok("21 + 21");
    assert_eq!(
        module.to_string(),
        "define i64 @main() {\nentry:\n\t%0 = add i64 21, 21\n\tret i64 %0\n}\n"
    );
}

#[test]
fn division_lowers_to_sdiv() {
    let module = lower_ok("84 / 2");
    let text = module.to_string();
    assert!(text.contains("%0 = sdiv i64 84, 2"), "got:\n{}", text);
}

#[test]
fn single_literal_needs_no_instruction() {
    let module = lower_ok("7");
    assert_eq!(module.to_string(), "define i64 @main() {\nentry:\n\tret i64 7\n}\n");
    assert_eq!(module.get_function("main").map(|f| f.instruction_count()), Some(0));
}

#[test]
fn operands_are_lowered_left_before_right() {
    let module = lower_ok("1 * 2 + 3 * 4");
    assert_eq!(
        module.to_string(),
        "define i64 @main() {\nentry:\n\t%0 = mul i64 1, 2\n\t%1 = mul i64 3, 4\n\t%2 = add i64 %0, %1\n\tret i64 %2\n}\n"
    );
}

#[test]
fn left_nested_chain_reuses_previous_local() {
    let module = lower_ok("43 - 1 - 1");
    assert_eq!(
        module.to_string(),
        "define i64 @main() {\nentry:\n\t%0 = sub i64 43, 1\n\t%1 = sub i64 %0, 1\n\tret i64 %1\n}\n"
    );
}

#[test]
fn last_statement_is_returned() {
    let module = lower_ok("1 + 1; 2 * 3");
    let text = module.to_string();
    assert!(text.contains("%0 = add i64 1, 1"));
    assert!(text.contains("%1 = mul i64 2, 3"));
    assert!(text.ends_with("\tret i64 %1\n}\n"), "got:\n{}", text);
}

#[test]
fn unknown_operator_is_a_lowering_error() {
    let span = Span::new(Location::new(1, 3), Location::new(1, 4));
    let infix = InfixExpression::new(Token::new(TokenKind::Plus, "%", span), "%", int(7, 1), int(2, 5));
    let program = Program {
        statements: vec![ExpressionStatement { token: infix.token.clone(), expression: Expression::Infix(infix) }],
    };

    let err = match lower_ast_to_ir(&program) {
        Ok(m) => panic!("Unexpected module: {}", m),
        Err(e) => e,
    };
    assert_eq!(err.kind(), &LowerErrorKind::InvalidOperator("%".to_string()));
    assert_eq!(err.to_string(), "invalid operator %");
}

#[test]
fn empty_program_is_a_lowering_error() {
    let err = match compile_line("   ") {
        Ok(m) => panic!("Unexpected module: {}", m),
        Err(e) => e,
    };
    match err {
        CompileError::Lower(e) => {
            assert_eq!(e.kind(), &LowerErrorKind::EmptyProgram);
            assert_eq!(e.to_string(), "empty program");
        }
        other => panic!("Unexpected error: {}", other),
    }
}

#[test]
fn parse_errors_never_reach_the_lowerer() {
    match compile_line("1 + ") {
        Err(CompileError::Parse(errors)) => assert_eq!(errors.len(), 1),
        Err(other) => panic!("Unexpected error: {}", other),
        Ok(m) => panic!("Unexpected module: {}", m),
    }
}

#[test]
fn each_line_numbers_its_locals_from_zero() {
    let first = lower_ok("1 + 2 + 3");
    let second = lower_ok("4 + 5");
    assert!(first.to_string().contains("%1 = add"));
    assert!(second.to_string().contains("%0 = add i64 4, 5"));
    assert!(!second.to_string().contains("%1"));
}
