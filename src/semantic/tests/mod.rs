use assert_matches::assert_matches;

use super::types::{Type, TypeId, INT_SIZE};
use super::{Analysis, Analyzer, ErrorKind};
use crate::ir::{ExpKind, Function, Stm};
use crate::symbol::{Interner, Symbol};
use crate::syntax::{ast, SourcePos};


fn pos() -> SourcePos {
	SourcePos::new(1, 1)
}


fn int(value: i64) -> ast::Exp {
	ast::Exp::Int { value, pos: pos() }
}


fn string(value: &str) -> ast::Exp {
	ast::Exp::Str { value: value.into(), pos: pos() }
}


fn simple(name: Symbol) -> ast::Var {
	ast::Var::Simple { name, pos: pos() }
}


fn var(name: Symbol) -> ast::Exp {
	ast::Exp::Var(simple(name))
}


fn assign(target: ast::Var, value: ast::Exp) -> ast::Exp {
	ast::Exp::Assign {
		target,
		value: Box::new(value),
		pos: pos(),
	}
}


fn binop(op: ast::BinOp, left: ast::Exp, right: ast::Exp) -> ast::Exp {
	ast::Exp::BinOp {
		op,
		left: Box::new(left),
		right: Box::new(right),
		pos: pos(),
	}
}


fn call(function: Symbol, args: Vec<ast::Exp>) -> ast::Exp {
	ast::Exp::Call { function, args: args.into(), pos: pos() }
}


fn seq(exps: Vec<ast::Exp>) -> ast::Exp {
	ast::Exp::Seq { exps: exps.into(), pos: pos() }
}


fn if_else(test: ast::Exp, then: ast::Exp, otherwise: Option<ast::Exp>) -> ast::Exp {
	ast::Exp::If {
		test: Box::new(test),
		then: Box::new(then),
		otherwise: otherwise.map(Box::new),
		pos: pos(),
	}
}


fn while_loop(test: ast::Exp, body: ast::Exp) -> ast::Exp {
	ast::Exp::While {
		test: Box::new(test),
		body: Box::new(body),
		pos: pos(),
	}
}


fn for_loop(var: Symbol, lo: ast::Exp, hi: ast::Exp, body: ast::Exp) -> ast::Exp {
	ast::Exp::For {
		var,
		lo: Box::new(lo),
		hi: Box::new(hi),
		body: Box::new(body),
		pos: pos(),
	}
}


fn break_exp() -> ast::Exp {
	ast::Exp::Break { pos: pos() }
}


fn let_in(decs: Vec<ast::Dec>, body: ast::Exp) -> ast::Exp {
	ast::Exp::Let {
		decs: decs.into(),
		body: Box::new(body),
		pos: pos(),
	}
}


fn var_dec(name: Symbol, type_name: Option<Symbol>, init: ast::Exp) -> ast::Dec {
	ast::Dec::Var { name, type_name, init, pos: pos() }
}


fn type_decs(decs: Vec<ast::TypeDec>) -> ast::Dec {
	ast::Dec::Types { decs: decs.into(), pos: pos() }
}


fn type_dec(name: Symbol, ty: ast::Ty) -> ast::TypeDec {
	ast::TypeDec { name, ty, pos: pos() }
}


fn name_ty(name: Symbol) -> ast::Ty {
	ast::Ty::Name { name, pos: pos() }
}


fn array_ty(element: Symbol) -> ast::Ty {
	ast::Ty::Array { element, pos: pos() }
}


fn array_exp(type_name: Symbol, size: ast::Exp, init: ast::Exp) -> ast::Exp {
	ast::Exp::Array {
		type_name,
		size: Box::new(size),
		init: Box::new(init),
		pos: pos(),
	}
}


fn record_ty(fields: Vec<(Symbol, Symbol)>) -> ast::Ty {
	ast::Ty::Record {
		fields: fields
			.into_iter()
			.map(|(name, type_name)| ast::Field { name, type_name, pos: pos() })
			.collect(),
		pos: pos(),
	}
}


fn fun_decs(decs: Vec<ast::FunDec>) -> ast::Dec {
	ast::Dec::Functions { decs: decs.into(), pos: pos() }
}


fn fun_dec(
	name: Symbol,
	params: Vec<(Symbol, Symbol)>,
	result: Option<Symbol>,
	body: ast::Exp,
) -> ast::FunDec {
	ast::FunDec {
		name,
		params: params
			.into_iter()
			.map(|(name, type_name)| ast::Field { name, type_name, pos: pos() })
			.collect(),
		result,
		body,
		pos: pos(),
	}
}


fn record_init(type_name: Symbol, fields: Vec<(Symbol, ast::Exp)>) -> ast::Exp {
	ast::Exp::Record {
		type_name,
		fields: fields
			.into_iter()
			.map(|(name, value)| ast::FieldInit { name, value, pos: pos() })
			.collect(),
		pos: pos(),
	}
}


fn root_of(analysis: &Analysis) -> &Function {
	&analysis.program.functions[analysis.program.root.index()]
}


#[test]
fn test_variable_declaration_allocates_first_slot() {
	let mut interner = Interner::new();
	let x = interner.get_or_intern("x");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![var_dec(x, Some(int_ty), int(5))],
		seq(Vec::new()),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());

	let root = root_of(&analysis);
	assert_eq!(root.frame.nesting_level, 0);
	assert_eq!(root.frame.locals.len(), 1);
	assert_eq!(root.frame.locals[0].name, x);
	assert_eq!(root.frame.end, INT_SIZE);

	assert_matches!(
		&root.body[0],
		Stm::Assign { value, target } => {
			assert_matches!(value.kind, ExpKind::Num(5));
			assert_matches!(
				target.kind,
				ExpKind::Mem { nesting_level: 0, offset: 0, .. }
			);
		}
	);
}


#[test]
fn test_branch_type_mismatch_is_reported_once() {
	let mut interner = Interner::new();

	let program = if_else(int(1), int(2), Some(string("a")));
	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::BranchMismatch);
	assert_eq!(analysis.program.result, TypeId::STRING);
}


#[test]
fn test_valued_then_branch_without_else_is_reported() {
	let mut interner = Interner::new();

	let program = if_else(int(1), int(2), None);
	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::ValuedThenBranch);
	assert_eq!(analysis.program.result, TypeId::VOID);

	// A value-producing then branch yields the expression form of the conditional.
	let root = root_of(&analysis);
	assert_matches!(
		&root.body[0],
		Stm::Exp(exp) => {
			assert_matches!(exp.kind, ExpKind::If { .. });
			assert_eq!(exp.size, INT_SIZE);
		}
	);
}


#[test]
fn test_conditional_without_else_keeps_statement_form() {
	let mut interner = Interner::new();
	let x = interner.get_or_intern("x");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![var_dec(x, Some(int_ty), int(0))],
		if_else(int(1), assign(simple(x), int(1)), None),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());

	let root = root_of(&analysis);
	assert_matches!(
		&root.body[1],
		Stm::If { then, .. } => {
			assert_matches!(then.as_ref(), Stm::Assign { .. });
		}
	);
}


#[test]
fn test_record_field_access_resolves_offset_and_type() {
	let mut interner = Interner::new();
	let r = interner.get_or_intern("r");
	let record = interner.get_or_intern("R");
	let f = interner.get_or_intern("f");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![
			type_decs(vec![type_dec(record, record_ty(vec![(f, int_ty)]))]),
			var_dec(r, None, record_init(record, vec![(f, int(5))])),
		],
		ast::Exp::Var(ast::Var::Field {
			parent: Box::new(ast::Var::Simple { name: r, pos: pos() }),
			name: f,
			pos: pos(),
		}),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());
	assert_eq!(analysis.program.result, TypeId::INT);

	let root = root_of(&analysis);

	// The record initializer is assigned into r's slot, then the body reads r.f.
	assert_matches!(&root.body[0], Stm::Assign { .. });
	assert_matches!(
		&root.body[1],
		Stm::Exp(exp) => {
			assert_matches!(
				&exp.kind,
				ExpKind::Load(field) => {
					assert_eq!(field.size, INT_SIZE);
					assert_matches!(field.kind, ExpKind::Field { offset: 0, .. });
				}
			);
		}
	);
}


#[test]
fn test_array_construction_folds_literal_size() {
	let mut interner = Interner::new();
	let a = interner.get_or_intern("a");
	let arr = interner.get_or_intern("arr");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![
			type_decs(vec![type_dec(arr, array_ty(int_ty))]),
			var_dec(a, None, array_exp(arr, int(3), int(0))),
		],
		ast::Exp::Var(ast::Var::Subscript {
			array: Box::new(simple(a)),
			index: Box::new(int(1)),
			pos: pos(),
		}),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());
	assert_eq!(analysis.program.result, TypeId::INT);

	let root = root_of(&analysis);

	// The literal size is folded into the construction's byte size.
	assert_matches!(
		&root.body[0],
		Stm::Assign { value, .. } => {
			assert_matches!(value.kind, ExpKind::Array(_));
			assert_eq!(value.size, 3 * INT_SIZE);
		}
	);

	// The subscript carries the element size, not the array pointer's.
	assert_matches!(
		&root.body[1],
		Stm::Exp(exp) => {
			assert_matches!(
				&exp.kind,
				ExpKind::Load(subscript) => {
					assert_eq!(subscript.size, INT_SIZE);
					assert_matches!(subscript.kind, ExpKind::Subscript { .. });
				}
			);
		}
	);
}


#[test]
fn test_oversized_literal_array_size_is_not_folded() {
	let mut interner = Interner::new();
	let a = interner.get_or_intern("a");
	let b = interner.get_or_intern("b");
	let arr = interner.get_or_intern("arr");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![
			type_decs(vec![type_dec(arr, array_ty(int_ty))]),
			var_dec(a, None, array_exp(arr, int(2_000_000_000), int(0))),
			var_dec(b, None, array_exp(arr, int(-1), int(0))),
		],
		seq(Vec::new()),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());

	// Sizes whose byte count does not fit, or negative ones, are deferred like
	// non-literal sizes.
	let root = root_of(&analysis);
	for stm in &root.body {
		assert_matches!(
			stm,
			Stm::Assign { value, .. } => {
				assert_matches!(value.kind, ExpKind::Array(_));
				assert_eq!(value.size, 0);
			}
		);
	}
}


#[test]
fn test_array_construction_requires_array_type() {
	let mut interner = Interner::new();
	let int_ty = interner.get_or_intern("int");

	let program = array_exp(int_ty, int(1), int(0));
	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::NotAnArrayType(name) if name == int_ty);
}


#[test]
fn test_array_initializer_must_match_element_type() {
	let mut interner = Interner::new();
	let arr = interner.get_or_intern("arr");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![type_decs(vec![type_dec(arr, array_ty(int_ty))])],
		array_exp(arr, int(1), string("a")),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::ArrayInitMismatch);
}


#[test]
fn test_array_size_must_be_integer() {
	let mut interner = Interner::new();
	let arr = interner.get_or_intern("arr");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![type_decs(vec![type_dec(arr, array_ty(int_ty))])],
		array_exp(arr, string("a"), int(0)),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::NonIntegerArraySize);
}


#[test]
fn test_subscript_index_must_be_integer() {
	let mut interner = Interner::new();
	let a = interner.get_or_intern("a");
	let arr = interner.get_or_intern("arr");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![
			type_decs(vec![type_dec(arr, array_ty(int_ty))]),
			var_dec(a, None, array_exp(arr, int(1), int(0))),
		],
		ast::Exp::Var(ast::Var::Subscript {
			array: Box::new(simple(a)),
			index: Box::new(string("x")),
			pos: pos(),
		}),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::NonIntegerIndex);
	assert_eq!(analysis.program.result, TypeId::INT);
}


#[test]
fn test_subscript_requires_array_value() {
	let mut interner = Interner::new();
	let x = interner.get_or_intern("x");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![var_dec(x, Some(int_ty), int(0))],
		ast::Exp::Var(ast::Var::Subscript {
			array: Box::new(simple(x)),
			index: Box::new(int(0)),
			pos: pos(),
		}),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::SubscriptOfNonArray);
	assert_eq!(analysis.program.result, TypeId::INT);
}


#[test]
fn test_call_with_missing_argument_still_translates() {
	let mut interner = Interner::new();
	let f = interner.get_or_intern("f");
	let a = interner.get_or_intern("a");
	let b = interner.get_or_intern("b");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![fun_decs(vec![fun_dec(
			f,
			vec![(a, int_ty), (b, int_ty)],
			Some(int_ty),
			int(0),
		)])],
		call(f, vec![int(1)]),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::TooFewArguments(name) if name == f);

	// The call node is still built, carrying the one available argument.
	let root = root_of(&analysis);
	assert_matches!(
		&root.body[0],
		Stm::Exp(exp) => {
			assert_matches!(
				&exp.kind,
				ExpKind::Call { function, args } => {
					assert_eq!(*function, f);
					assert_eq!(args.len(), 1);
				}
			);
		}
	);
}


#[test]
fn test_call_with_surplus_arguments_drops_the_excess() {
	let mut interner = Interner::new();
	let f = interner.get_or_intern("f");
	let a = interner.get_or_intern("a");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![fun_decs(vec![fun_dec(f, vec![(a, int_ty)], Some(int_ty), int(0))])],
		call(f, vec![int(1), int(2), int(3)]),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::TooManyArguments(name) if name == f);

	let root = root_of(&analysis);
	assert_matches!(
		&root.body[0],
		Stm::Exp(exp) => {
			assert_matches!(&exp.kind, ExpKind::Call { args, .. } if args.len() == 1);
		}
	);
}


#[test]
fn test_break_inside_while_is_valid() {
	let mut interner = Interner::new();

	let program = while_loop(int(1), break_exp());
	let analysis = Analyzer::analyze(program, &mut interner);

	assert!(analysis.errors.is_empty());

	let root = root_of(&analysis);
	assert_matches!(
		&root.body[0],
		Stm::While { exit, body, .. } => {
			assert_matches!(body.as_ref(), Stm::Break(label) if label == exit);
		}
	);
}


#[test]
fn test_break_after_loop_is_outside_again() {
	let mut interner = Interner::new();

	let program = seq(vec![while_loop(int(1), break_exp()), break_exp()]);
	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::BreakOutsideLoop);
}


#[test]
fn test_break_resolves_to_innermost_loop() {
	let mut interner = Interner::new();
	let i = interner.get_or_intern("i");

	let program = for_loop(
		i,
		int(0),
		int(10),
		while_loop(int(1), break_exp()),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());

	let root = root_of(&analysis);
	assert_matches!(
		&root.body[0],
		Stm::For { exit: for_exit, body, .. } => {
			assert_matches!(
				body.as_ref(),
				Stm::While { exit: while_exit, body: inner, .. } => {
					assert_ne!(while_exit, for_exit);
					assert_matches!(inner.as_ref(), Stm::Break(label) if label == while_exit);
				}
			);
		}
	);
}


#[test]
fn test_break_outside_loop_reports_single_error() {
	let mut interner = Interner::new();

	let program = break_exp();
	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::BreakOutsideLoop);
	assert_eq!(analysis.program.result, TypeId::VOID);
}


#[test]
fn test_mutually_recursive_records_resolve() {
	let mut interner = Interner::new();
	let a = interner.get_or_intern("A");
	let b = interner.get_or_intern("B");
	let next = interner.get_or_intern("next");

	let program = let_in(
		vec![type_decs(vec![
			type_dec(a, record_ty(vec![(next, b)])),
			type_dec(b, record_ty(vec![(next, a)])),
		])],
		seq(Vec::new()),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());

	// Both record types exist, and each one's field resolves to the other record.
	let types = &analysis.program.types;
	let records: Vec<_> = types
		.iter()
		.filter(|(_, ty)| matches!(ty, Type::Record(_)))
		.map(|(id, _)| id)
		.collect();
	assert_eq!(records.len(), 2);

	for id in records {
		if let Type::Record(fields) = types.get(id) {
			let target = types.actual(fields[0].ty);
			assert_matches!(types.get(target), Type::Record(_));
		}
	}
}


#[test]
fn test_forward_alias_resolves() {
	let mut interner = Interner::new();
	let a = interner.get_or_intern("A");
	let b = interner.get_or_intern("B");
	let x = interner.get_or_intern("x");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![
			type_decs(vec![
				type_dec(a, name_ty(b)),
				type_dec(b, name_ty(int_ty)),
			]),
			var_dec(x, Some(a), int(1)),
		],
		var(x),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());
	assert_eq!(analysis.program.result, TypeId::INT);
}


#[test]
fn test_type_alias_cycle_is_reported() {
	let mut interner = Interner::new();
	let a = interner.get_or_intern("A");
	let b = interner.get_or_intern("B");

	let program = let_in(
		vec![type_decs(vec![
			type_dec(a, name_ty(b)),
			type_dec(b, name_ty(a)),
		])],
		seq(Vec::new()),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert!(!analysis.errors.is_empty());
	for error in &analysis.errors.0 {
		assert_matches!(error.kind, ErrorKind::TypeCycle(_));
	}
}


#[test]
fn test_undefined_variable_recovers_as_int() {
	let mut interner = Interner::new();
	let x = interner.get_or_intern("x");

	let program = binop(ast::BinOp::Add, var(x), int(3));
	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::UndefinedVariable(name) if name == x);
	assert_eq!(analysis.program.result, TypeId::INT);
}


#[test]
fn test_mutually_recursive_functions() {
	let mut interner = Interner::new();
	let odd = interner.get_or_intern("odd");
	let even = interner.get_or_intern("even");
	let n = interner.get_or_intern("n");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![fun_decs(vec![
			fun_dec(
				odd,
				vec![(n, int_ty)],
				Some(int_ty),
				call(even, vec![binop(ast::BinOp::Sub, var(n), int(1))]),
			),
			fun_dec(
				even,
				vec![(n, int_ty)],
				Some(int_ty),
				call(odd, vec![binop(ast::BinOp::Sub, var(n), int(1))]),
			),
		])],
		call(odd, vec![int(9)]),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());
	assert_eq!(analysis.program.result, TypeId::INT);

	// Both functions hang off the root, one nesting level down.
	let root = root_of(&analysis);
	assert_eq!(root.children.len(), 2);
	assert_eq!(analysis.program.functions.len(), 3);

	for &child in &root.children {
		let child = &analysis.program.functions[child.index()];
		assert_eq!(child.frame.nesting_level, 1);
		assert_eq!(child.parent, Some(analysis.program.root));
		assert_eq!(child.frame.parameters.len(), 1);
	}
}


#[test]
fn test_nil_initializer_requires_record_annotation() {
	let mut interner = Interner::new();
	let x = interner.get_or_intern("x");

	let program = let_in(
		vec![var_dec(x, None, ast::Exp::Nil { pos: pos() })],
		seq(Vec::new()),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::NilInitializer);
}


#[test]
fn test_nil_initializer_with_record_annotation_is_valid() {
	let mut interner = Interner::new();
	let x = interner.get_or_intern("x");
	let record = interner.get_or_intern("R");
	let f = interner.get_or_intern("f");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![
			type_decs(vec![type_dec(record, record_ty(vec![(f, int_ty)]))]),
			var_dec(x, Some(record), ast::Exp::Nil { pos: pos() }),
		],
		seq(Vec::new()),
	);

	let analysis = Analyzer::analyze(program, &mut interner);
	assert!(analysis.errors.is_empty());
}


#[test]
fn test_identical_records_do_not_assign_across() {
	let mut interner = Interner::new();
	let x = interner.get_or_intern("x");
	let y = interner.get_or_intern("y");
	let r1 = interner.get_or_intern("R1");
	let r2 = interner.get_or_intern("R2");
	let f = interner.get_or_intern("f");
	let int_ty = interner.get_or_intern("int");

	let program = let_in(
		vec![
			type_decs(vec![
				type_dec(r1, record_ty(vec![(f, int_ty)])),
				type_dec(r2, record_ty(vec![(f, int_ty)])),
			]),
			var_dec(x, None, record_init(r1, vec![(f, int(1))])),
			var_dec(y, Some(r2), record_init(r1, vec![(f, int(2))])),
		],
		seq(Vec::new()),
	);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::DeclaredTypeMismatch);
}


#[test]
fn test_for_loop_variable_is_scoped_to_the_body() {
	let mut interner = Interner::new();
	let i = interner.get_or_intern("i");

	let program = seq(vec![
		for_loop(i, int(0), int(10), seq(Vec::new())),
		binop(ast::BinOp::Add, var(i), int(1)),
	]);

	let analysis = Analyzer::analyze(program, &mut interner);

	assert_eq!(analysis.errors.0.len(), 1);
	assert_matches!(analysis.errors.0[0].kind, ErrorKind::UndefinedVariable(name) if name == i);
}


#[test]
fn test_builtin_procedures_are_in_scope() {
	let mut interner = Interner::new();
	let print = interner.get_or_intern("print");

	let program = call(print, vec![string("hi")]);
	let analysis = Analyzer::analyze(program, &mut interner);

	assert!(analysis.errors.is_empty());
	assert_eq!(analysis.program.result, TypeId::VOID);

	// A void call is a procedure-call statement, not a value-producing call.
	let root = root_of(&analysis);
	assert_matches!(&root.body[0], Stm::ProcCall { function, .. } if *function == print);
}
