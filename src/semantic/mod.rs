//! Semantic analysis and IR generation.
//!
//! A single recursive walk over the AST performs scope-aware name resolution, type
//! checking and translation to the tree IR at once. Every analyzed expression yields a
//! pair of translation fragment and type. Errors never abort the walk: the offending
//! construct is reported and analysis continues with a recovery value, so one run
//! surfaces as many independent errors as possible.

pub mod env;
mod error;
pub mod scope;
#[cfg(test)]
mod tests;
pub mod types;

use crate::ir::{self, translate::Translator, FunctionId};
use std::convert::TryFrom;
use crate::symbol::{Interner, Symbol};
use crate::syntax::{ast, SourcePos};
use env::{Entry, TypeEnv, ValueEnv};
pub use error::{Error, ErrorKind, Errors, ErrorsDisplayContext};
use types::{Type, TypeArena, TypeId, INT_SIZE};


/// The result of analyzing a whole program. The program is produced even when errors
/// were reported; the driver must treat any error as failure.
#[derive(Debug)]
pub struct Analysis {
	pub program: Program,
	pub errors: Errors,
}


/// A fully translated program: the type arena, the function nesting tree, and the type
/// of the top-level expression.
#[derive(Debug)]
pub struct Program {
	pub types: TypeArena,
	pub functions: Box<[ir::Function]>,
	pub root: FunctionId,
	pub result: TypeId,
}


/// Static semantic analyzer.
#[derive(Debug)]
pub struct Analyzer;


impl Analyzer {
	/// Analyze the given program, producing its translation and the errors found.
	pub fn analyze(program: ast::Exp, interner: &mut Interner) -> Analysis {
		let mut context = Context {
			venv: env::base_venv(interner),
			tenv: env::base_tenv(interner),
			types: TypeArena::new(),
			translator: Translator::new(),
			errors: Errors::default(),
		};

		let root = context
			.translator
			.new_function(interner.get_or_intern("main"), 0);

		let body = analyze_exp(&mut context, root, program);
		let result = body.ty;
		context.translator.append_stm(root, body.translation.into_stm());

		Analysis {
			program: Program {
				types: context.types,
				functions: context.translator.into_functions(),
				root,
				result,
			},
			errors: context.errors,
		}
	}
}


/// The state threaded through the analysis of one compilation.
#[derive(Debug)]
struct Context {
	venv: ValueEnv,
	tenv: TypeEnv,
	types: TypeArena,
	translator: Translator,
	errors: Errors,
}


impl Context {
	fn report(&mut self, error: Error) {
		self.errors.0.push(error);
	}


	/// The byte size of the actual type behind `ty`.
	fn size_of(&self, ty: TypeId) -> u32 {
		self.types.size_of(self.types.actual(ty))
	}


	fn is_int(&self, ty: TypeId) -> bool {
		self.types.actual(ty) == TypeId::INT
	}


	fn is_void(&self, ty: TypeId) -> bool {
		self.types.actual(ty) == TypeId::VOID
	}


	/// Whether the actual types behind the two ids agree.
	fn agree(&self, t1: TypeId, t2: TypeId) -> bool {
		self.types.agree(self.types.actual(t1), self.types.actual(t2))
	}
}


/// The translation of one expression: either a value-producing IR expression or an IR
/// statement, depending on the construct.
#[derive(Debug)]
enum Translation {
	Exp(ir::Exp),
	Stm(ir::Stm),
}


impl Translation {
	/// View as a statement. Sequence expressions become sequence statements, other
	/// expressions are evaluated for effect.
	fn into_stm(self) -> ir::Stm {
		match self {
			Self::Stm(stm) => stm,

			Self::Exp(ir::Exp { kind: ir::ExpKind::Seq(stms), .. }) => ir::Stm::Seq(stms),

			Self::Exp(exp) => ir::Stm::Exp(exp),
		}
	}


	/// View as an expression of the given size. Statements become value-producing
	/// sequences.
	fn into_exp(self, translator: &mut Translator, size: u32) -> ir::Exp {
		match self {
			Self::Exp(exp) => exp,
			Self::Stm(stm) => translator.stm_to_seq_exp(stm, size),
		}
	}
}


/// The result of analyzing one expression.
#[derive(Debug)]
struct ExpType {
	translation: Translation,
	ty: TypeId,
}


impl ExpType {
	/// A fragment standing in for an untranslatable expression, so that analysis and
	/// translation stay total after an error.
	fn recovery(ty: TypeId) -> Self {
		Self {
			translation: Translation::Exp(ir::Exp::num(0)),
			ty,
		}
	}
}


fn analyze_var(context: &mut Context, func: FunctionId, var: ast::Var) -> ExpType {
	match var {
		ast::Var::Simple { name, pos } => match context.venv.look(name) {
			Some(&Entry::Var { ty, nesting_level, offset }) => {
				let size = context.size_of(ty);

				ExpType {
					translation: Translation::Exp(
						ir::Exp::mem(name, nesting_level, offset, size)
					),
					ty: context.types.actual(ty),
				}
			}

			_ => {
				context.report(Error::undefined_variable(name, pos));
				ExpType::recovery(TypeId::INT)
			}
		},

		ast::Var::Field { parent, name, pos } => {
			let base = analyze_var(context, func, *parent);
			let base_ty = context.types.actual(base.ty);

			// Walk the field list accumulating byte offsets.
			let lookup = match context.types.get(base_ty) {
				Type::Record(fields) => {
					let mut offset = 0;
					let mut found = None;

					for field in fields {
						if field.name == name {
							found = Some((field.ty, offset));
							break;
						}

						offset += context.size_of(field.ty);
					}

					Some(found)
				}

				_ => None,
			};

			match lookup {
				None => {
					context.report(Error::field_of_non_record(pos));
					ExpType::recovery(TypeId::INT)
				}

				Some(None) => {
					context.report(Error::no_such_field(name, pos));
					ExpType::recovery(TypeId::INT)
				}

				Some(Some((ty, offset))) => {
					let size = context.size_of(ty);
					let base_size = context.size_of(base_ty);
					let base = base.translation.into_exp(&mut context.translator, base_size);
					let exp = context.translator.field(base, name, size, offset);

					ExpType {
						translation: Translation::Exp(exp),
						ty: context.types.actual(ty),
					}
				}
			}
		}

		ast::Var::Subscript { array, index, pos } => {
			let base = analyze_var(context, func, *array);
			let base_ty = context.types.actual(base.ty);

			let element = match context.types.get(base_ty) {
				Type::Array(element) => *element,

				_ => {
					context.report(Error::subscript_of_non_array(pos));
					return ExpType::recovery(TypeId::INT);
				}
			};

			let index_pos = index.pos();
			let index = analyze_exp(context, func, *index);
			if !context.is_int(index.ty) {
				context.report(Error::non_integer_index(index_pos));
			}

			let element_size = context.size_of(element);
			let base_size = context.size_of(base_ty);
			let base = base.translation.into_exp(&mut context.translator, base_size);
			let index = index.translation.into_exp(&mut context.translator, INT_SIZE);
			let exp = context.translator.subscript(base, index, element_size);

			ExpType {
				translation: Translation::Exp(exp),
				ty: context.types.actual(element),
			}
		}
	}
}


fn analyze_exp(context: &mut Context, func: FunctionId, exp: ast::Exp) -> ExpType {
	match exp {
		ast::Exp::Var(var) => {
			let var = analyze_var(context, func, var);
			let size = context.size_of(var.ty);
			let location = var.translation.into_exp(&mut context.translator, size);
			let exp = context.translator.load(location);

			ExpType {
				translation: Translation::Exp(exp),
				ty: var.ty,
			}
		}

		ast::Exp::Nil { .. } => ExpType {
			translation: Translation::Exp(ir::Exp::num(0)),
			ty: TypeId::NIL,
		},

		ast::Exp::Int { value, .. } => ExpType {
			translation: Translation::Exp(ir::Exp::num(value)),
			ty: TypeId::INT,
		},

		ast::Exp::Str { value, .. } => {
			let exp = context.translator.string(value);

			ExpType {
				translation: Translation::Exp(exp),
				ty: TypeId::STRING,
			}
		}

		ast::Exp::Call { function, args, pos } => {
			let entry = context.venv.look(function).cloned();

			let (formals, result) = match entry {
				Some(Entry::Fun { formals, result }) => (formals, result),

				_ => {
					context.report(Error::undefined_function(function, pos));
					return ExpType::recovery(TypeId::INT);
				}
			};

			let mut ir_args = Vec::new();
			let mut args = args.into_vec().into_iter();
			let mut formals = formals.iter();

			loop {
				match (args.next(), formals.next()) {
					(Some(arg), Some(&formal)) => {
						let arg_pos = arg.pos();
						let arg = analyze_exp(context, func, arg);

						if !context.agree(arg.ty, formal) {
							context.report(Error::argument_mismatch(arg_pos));
						}

						let size = context.size_of(arg.ty);
						ir_args.push(arg.translation.into_exp(&mut context.translator, size));
					}

					(None, Some(_)) => {
						context.report(Error::too_few_arguments(function, pos));
						break;
					}

					(Some(arg), None) => {
						context.report(Error::too_many_arguments(function, arg.pos()));
						break;
					}

					(None, None) => break,
				}
			}

			if context.is_void(result) {
				ExpType {
					translation: Translation::Stm(ir::Stm::ProcCall { function, args: ir_args }),
					ty: TypeId::VOID,
				}
			} else {
				let size = context.size_of(result);
				let exp = context.translator.call(function, ir_args, size);

				ExpType {
					translation: Translation::Exp(exp),
					ty: context.types.actual(result),
				}
			}
		}

		ast::Exp::BinOp { op, left, right, pos } => {
			let left_pos = left.pos();
			let right_pos = right.pos();

			let left = analyze_exp(context, func, *left);
			let right = analyze_exp(context, func, *right);

			match op {
				// Equality applies to any pair of agreeing types.
				ast::BinOp::Eq | ast::BinOp::Ne => {
					if !context.agree(left.ty, right.ty) {
						context.report(Error::comparison_mismatch(pos));
					}
				}

				_ => {
					if !context.is_int(left.ty) {
						context.report(Error::non_integer_operand(left_pos));
					}
					if !context.is_int(right.ty) {
						context.report(Error::non_integer_operand(right_pos));
					}
				}
			}

			let left_size = context.size_of(left.ty);
			let right_size = context.size_of(right.ty);
			let left = left.translation.into_exp(&mut context.translator, left_size);
			let right = right.translation.into_exp(&mut context.translator, right_size);

			let exp = match op {
				ast::BinOp::Add | ast::BinOp::Sub | ast::BinOp::Mul => {
					ir::Exp::arith(op.into(), left, right)
				}

				ast::BinOp::Div => ir::Exp::div(left, right),

				_ => ir::Exp::rel(op.into(), left, right),
			};

			ExpType {
				translation: Translation::Exp(exp),
				ty: TypeId::INT,
			}
		}

		ast::Exp::Record { type_name, fields, pos } => {
			let looked = context.tenv.look(type_name).copied();

			let record_ty = match looked {
				None => {
					context.report(Error::undefined_type(type_name, pos));
					None
				}

				Some(ty) => {
					let ty = context.types.actual(ty);

					if matches!(context.types.get(ty), Type::Record(_)) {
						Some(ty)
					} else {
						context.report(Error::not_a_record_type(type_name, pos));
						None
					}
				}
			};

			// Recover with a fresh empty record type so analysis stays total.
			let record_ty = match record_ty {
				Some(ty) => ty,
				None => context.types.alloc(Type::Record(Vec::new())),
			};

			let declared: Vec<_> = match context.types.get(record_ty) {
				Type::Record(fields) => {
					fields.iter().map(|field| (field.name, field.ty)).collect()
				}
				_ => Vec::new(),
			};

			let mut size = 0;
			let mut inits = Vec::new();
			let mut values = fields.into_vec().into_iter();
			let mut declared = declared.into_iter();

			loop {
				match (values.next(), declared.next()) {
					(Some(init), Some((name, ty))) => {
						if init.name != name {
							context.report(Error::unexpected_field(init.name, name, init.pos));
						}

						let value_pos = init.value.pos();
						let value = analyze_exp(context, func, init.value);

						if !context.agree(value.ty, ty) {
							context.report(Error::field_mismatch(init.name, value_pos));
						}

						let value_size = context.size_of(value.ty);
						size += value_size;
						inits.push(
							value.translation.into_exp(&mut context.translator, value_size)
						);
					}

					(None, Some((name, _))) => {
						context.report(Error::missing_field(name, pos));
						break;
					}

					(Some(init), None) => {
						context.report(Error::surplus_field(init.name, init.pos));
						break;
					}

					(None, None) => break,
				}
			}

			let exp = context.translator.record(size, inits);

			ExpType {
				translation: Translation::Exp(exp),
				ty: record_ty,
			}
		}

		ast::Exp::Array { type_name, size, init, pos } => {
			let looked = context.tenv.look(type_name).copied();

			let array_ty = match looked {
				None => {
					context.report(Error::undefined_type(type_name, pos));
					None
				}

				Some(ty) => {
					let ty = context.types.actual(ty);

					if matches!(context.types.get(ty), Type::Array(_)) {
						Some(ty)
					} else {
						context.report(Error::not_an_array_type(type_name, pos));
						None
					}
				}
			};

			// Recover with a fresh array-of-int type.
			let array_ty = match array_ty {
				Some(ty) => ty,
				None => context.types.alloc(Type::Array(TypeId::INT)),
			};

			let element = match context.types.get(array_ty) {
				Type::Array(element) => context.types.actual(*element),
				_ => TypeId::INT,
			};

			let init_pos = init.pos();
			let init = analyze_exp(context, func, *init);
			if !context.agree(init.ty, element) {
				context.report(Error::array_init_mismatch(init_pos));
			}

			let size_pos = size.pos();
			let size = analyze_exp(context, func, *size);
			if !context.is_int(size.ty) {
				context.report(Error::non_integer_array_size(size_pos));
			}

			// A literal size is folded into a byte size now; anything else is left to
			// the consumer of the size expression. A negative literal, or a product
			// that does not fit the byte size, is treated as non-literal.
			let element_size = context.size_of(element);
			let byte_size = match &size.translation {
				Translation::Exp(ir::Exp { kind: ir::ExpKind::Num(value), .. }) => value
					.checked_mul(i64::from(element_size))
					.and_then(|bytes| u32::try_from(bytes).ok())
					.unwrap_or(0),
				_ => 0,
			};

			let init_size = context.size_of(init.ty);
			let init = init.translation.into_exp(&mut context.translator, init_size);
			let exp = context.translator.array(byte_size, init);

			ExpType {
				translation: Translation::Exp(exp),
				ty: array_ty,
			}
		}

		ast::Exp::Seq { exps, .. } => {
			let mut stms = Vec::new();
			let mut ty = TypeId::VOID;

			let mut exps = exps.into_vec().into_iter().peekable();
			while let Some(exp) = exps.next() {
				let last = exps.peek().is_none();
				let exp = analyze_exp(context, func, exp);

				if last {
					ty = exp.ty;
				}

				stms.push(exp.translation.into_stm());
			}

			let size = context.size_of(ty);
			let exp = context.translator.stm_to_seq_exp(ir::Stm::Seq(stms), size);

			ExpType {
				translation: Translation::Exp(exp),
				ty,
			}
		}

		ast::Exp::Assign { target, value, pos } => {
			let target = analyze_var(context, func, target);
			let value = analyze_exp(context, func, *value);

			if !context.agree(target.ty, value.ty) {
				context.report(Error::assign_mismatch(pos));
			}

			let value_size = context.size_of(value.ty);
			let target_size = context.size_of(target.ty);
			let value = value.translation.into_exp(&mut context.translator, value_size);
			let target = target.translation.into_exp(&mut context.translator, target_size);

			ExpType {
				translation: Translation::Stm(ir::Stm::Assign { value, target }),
				ty: TypeId::VOID,
			}
		}

		ast::Exp::If { test, then, otherwise, .. } => {
			analyze_condition(context, func, *test, *then, otherwise)
		}

		ast::Exp::While { test, body, .. } => {
			let test_pos = test.pos();
			let test = analyze_exp(context, func, *test);
			if !context.is_int(test.ty) {
				context.report(Error::non_integer_test(test_pos));
			}
			let test = test.translation.into_exp(&mut context.translator, INT_SIZE);

			let test_label = context.translator.new_label();
			let exit = context.translator.new_label();

			context.translator.push_loop(exit);
			let body_pos = body.pos();
			let body = analyze_exp(context, func, *body);
			context.translator.pop_loop();

			if !context.is_void(body.ty) {
				context.report(Error::valued_loop_body(body_pos));
			}
			let body = body.translation.into_stm();

			ExpType {
				translation: Translation::Stm(ir::Stm::While {
					test_label,
					test,
					exit,
					body: Box::new(body),
				}),
				ty: TypeId::VOID,
			}
		}

		ast::Exp::For { var, lo, hi, body, .. } => {
			let lo_pos = lo.pos();
			let hi_pos = hi.pos();

			let lo = analyze_exp(context, func, *lo);
			if !context.is_int(lo.ty) {
				context.report(Error::non_integer_bound(lo_pos));
			}

			let hi = analyze_exp(context, func, *hi);
			if !context.is_int(hi.ty) {
				context.report(Error::non_integer_bound(hi_pos));
			}

			let lo = lo.translation.into_exp(&mut context.translator, INT_SIZE);
			let hi = hi.translation.into_exp(&mut context.translator, INT_SIZE);

			// The loop variable is an integer local of the enclosing function, scoped
			// to the body.
			context.venv.begin_scope();

			let nesting_level = context.translator.function(func).frame.nesting_level;
			let offset = context.translator.add_local(func, var, TypeId::INT, INT_SIZE);
			context.venv.enter(
				var,
				Entry::Var { ty: TypeId::INT, nesting_level, offset },
			);

			let location = ir::Exp::mem(var, nesting_level, offset, INT_SIZE);
			let var = context.translator.load(location);

			let test_label = context.translator.new_label();
			let exit = context.translator.new_label();

			context.translator.push_loop(exit);
			let body_pos = body.pos();
			let body = analyze_exp(context, func, *body);
			context.translator.pop_loop();

			if !context.is_void(body.ty) {
				context.report(Error::valued_loop_body(body_pos));
			}
			let body = body.translation.into_stm();

			context.venv.end_scope();

			ExpType {
				translation: Translation::Stm(ir::Stm::For {
					var,
					lo,
					hi,
					test_label,
					exit,
					body: Box::new(body),
				}),
				ty: TypeId::VOID,
			}
		}

		ast::Exp::Break { pos } => match context.translator.current_loop() {
			Some(exit) => ExpType {
				translation: Translation::Stm(ir::Stm::Break(exit)),
				ty: TypeId::VOID,
			},

			None => {
				context.report(Error::break_outside_loop(pos));

				ExpType {
					translation: Translation::Stm(ir::Stm::Seq(Vec::new())),
					ty: TypeId::VOID,
				}
			}
		},

		ast::Exp::Let { decs, body, .. } => {
			context.venv.begin_scope();
			context.tenv.begin_scope();

			for dec in decs.into_vec() {
				analyze_dec(context, func, dec);
			}

			let body = analyze_exp(context, func, *body);

			context.tenv.end_scope();
			context.venv.end_scope();

			body
		}
	}
}


/// Conditionals produce a statement when the then branch is void, and a value-carrying
/// expression otherwise.
fn analyze_condition(
	context: &mut Context,
	func: FunctionId,
	test: ast::Exp,
	then: ast::Exp,
	otherwise: Option<Box<ast::Exp>>,
) -> ExpType {
	let test_pos = test.pos();
	let test = analyze_exp(context, func, test);
	if !context.is_int(test.ty) {
		context.report(Error::non_integer_test(test_pos));
	}
	let test = test.translation.into_exp(&mut context.translator, INT_SIZE);

	let then_pos = then.pos();
	let then = analyze_exp(context, func, then);

	match otherwise {
		Some(otherwise) => {
			let otherwise = analyze_exp(context, func, *otherwise);

			if !context.agree(otherwise.ty, then.ty) {
				context.report(Error::branch_mismatch(then_pos));
			}

			let ty = otherwise.ty;

			if context.is_void(then.ty) {
				let then = then.translation.into_stm();
				let otherwise = otherwise.translation.into_stm();
				let stm = context.translator.if_else_stm(test, then, otherwise);

				ExpType {
					translation: Translation::Stm(stm),
					ty,
				}
			} else {
				let then_size = context.size_of(then.ty);
				let otherwise_size = context.size_of(ty);
				let then = then.translation.into_exp(&mut context.translator, then_size);
				let otherwise = otherwise
					.translation
					.into_exp(&mut context.translator, otherwise_size);
				let exp = context.translator.if_else_exp(test, then, otherwise);

				ExpType {
					translation: Translation::Exp(exp),
					ty,
				}
			}
		}

		None => {
			if !context.is_void(then.ty) {
				context.report(Error::valued_then_branch(then_pos));
			}

			// The conditional keeps the branch's form.
			let translation = match then.translation {
				Translation::Exp(then) => {
					Translation::Exp(context.translator.if_exp(test, then))
				}

				Translation::Stm(then) => {
					Translation::Stm(context.translator.if_stm(test, then))
				}
			};

			ExpType {
				translation,
				ty: TypeId::VOID,
			}
		}
	}
}


fn analyze_dec(context: &mut Context, func: FunctionId, dec: ast::Dec) {
	match dec {
		ast::Dec::Var { name, type_name, init, pos } => {
			let init_pos = init.pos();
			let init = analyze_exp(context, func, init);
			let mut ty = init.ty;

			match type_name {
				Some(type_name) => match context.tenv.look(type_name).copied() {
					Some(declared) => {
						if !context.agree(declared, init.ty) {
							context.report(Error::declared_type_mismatch(pos));
						}

						// The declared type wins, also on mismatch.
						ty = context.types.actual(declared);
					}

					None => context.report(Error::undefined_type(type_name, pos)),
				},

				None => {
					if context.types.actual(ty) == TypeId::NIL {
						context.report(Error::nil_initializer(init_pos));
						ty = TypeId::INT;
					}
				}
			}

			let nesting_level = context.translator.function(func).frame.nesting_level;
			let size = context.size_of(ty);
			let offset = context.translator.add_local(func, name, ty, size);
			context.venv.enter(name, Entry::Var { ty, nesting_level, offset });

			let init_size = context.size_of(init.ty);
			let value = init.translation.into_exp(&mut context.translator, init_size);
			let target = ir::Exp::mem(name, nesting_level, offset, size);
			context.translator.append_stm(func, ir::Stm::Assign { value, target });
		}

		ast::Dec::Types { decs, .. } => {
			// First pass: bind every name in the group, stubbing forward references,
			// so members may refer to each other in any order.
			for dec in decs.iter() {
				let ty = declare_type(context, &dec.ty);
				context.tenv.enter(dec.name, ty);
			}

			// Second pass: patch the stubs now that the whole group is bound.
			for dec in decs.iter() {
				let id = *context
					.tenv
					.look(dec.name)
					.expect("type binding missing after first pass");

				match context.types.get(id) {
					Type::Record(_) => patch_record_fields(context, id, dec.pos),
					Type::Array(_) => patch_array_element(context, id, dec.pos),
					Type::Name { .. } => patch_alias(context, dec.name, id, dec.pos),
					_ => (),
				}
			}
		}

		ast::Dec::Functions { decs, .. } => {
			// First pass: bind every signature, enabling mutual recursion.
			for dec in decs.iter() {
				let result = match dec.result {
					Some(name) => match context.tenv.look(name).copied() {
						Some(ty) => ty,

						None => {
							context.report(Error::undefined_type(name, dec.pos));
							TypeId::VOID
						}
					},

					None => TypeId::VOID,
				};

				let formals = dec
					.params
					.iter()
					.map(|param| match context.tenv.look(param.type_name).copied() {
						Some(ty) => ty,

						None => {
							context.report(Error::undefined_type(param.type_name, param.pos));
							TypeId::INT
						}
					})
					.collect();

				context.venv.enter(dec.name, Entry::Fun { formals, result });
			}

			// Second pass: translate every body against the bound signatures.
			for dec in decs.into_vec() {
				let child = context.translator.new_function(dec.name, 0);
				context.translator.append_child(func, child);

				let (formals, result) = match context.venv.look(dec.name) {
					Some(Entry::Fun { formals, result }) => (formals.clone(), *result),
					_ => panic!("function binding missing after first pass"),
				};

				context.venv.begin_scope();

				let nesting_level = context.translator.function(child).frame.nesting_level;
				for (param, &ty) in dec.params.iter().zip(formals.iter()) {
					let size = context.size_of(ty);
					let offset = context.translator.add_parameter(child, param.name, ty, size);
					context.venv.enter(param.name, Entry::Var { ty, nesting_level, offset });
				}

				let body = analyze_exp(context, child, dec.body);

				context.venv.end_scope();

				if !context.agree(result, body.ty) {
					context.report(Error::body_type_mismatch(dec.name, dec.pos));
				}

				context.translator.append_stm(child, body.translation.into_stm());
			}
		}
	}
}


/// Translate the right hand side of a type declaration into the arena, stubbing
/// references to names not yet in scope.
fn declare_type(context: &mut Context, ty: &ast::Ty) -> TypeId {
	match ty {
		ast::Ty::Name { name, .. } => {
			let target = context.tenv.look(*name).copied();
			context.types.alloc(Type::Name { name: *name, target })
		}

		ast::Ty::Record { fields, .. } => {
			let fields = fields
				.iter()
				.map(|field| {
					let ty = match context.tenv.look(field.type_name).copied() {
						Some(ty) => ty,

						None => context.types.alloc(Type::Name {
							name: field.type_name,
							target: None,
						}),
					};

					types::Field { name: field.name, ty }
				})
				.collect();

			context.types.alloc(Type::Record(fields))
		}

		ast::Ty::Array { element, .. } => {
			let element = match context.tenv.look(*element).copied() {
				Some(ty) => ty,

				None => context.types.alloc(Type::Name {
					name: *element,
					target: None,
				}),
			};

			context.types.alloc(Type::Array(element))
		}
	}
}


/// Resolve a record's still-stubbed field types through the type environment.
fn patch_record_fields(context: &mut Context, id: TypeId, pos: SourcePos) {
	let stubs: Vec<_> = match context.types.get(id) {
		Type::Record(fields) => fields
			.iter()
			.filter_map(|field| match context.types.get(field.ty) {
				Type::Name { name, target: None } => Some((field.name, field.ty, *name)),
				_ => None,
			})
			.collect(),

		_ => Vec::new(),
	};

	for (field_name, stub, type_name) in stubs {
		match context.tenv.look(type_name).copied() {
			Some(target) => context.types.resolve_name(stub, target),
			None => context.report(Error::unresolved_field(field_name, pos)),
		}
	}
}


/// Resolve an array's still-stubbed element type through the type environment.
fn patch_array_element(context: &mut Context, id: TypeId, pos: SourcePos) {
	let stub = match context.types.get(id) {
		Type::Array(element) => match context.types.get(*element) {
			Type::Name { name, target: None } => Some((*element, *name)),
			_ => None,
		},

		_ => None,
	};

	if let Some((stub, type_name)) = stub {
		match context.tenv.look(type_name).copied() {
			Some(target) => context.types.resolve_name(stub, target),
			None => context.report(Error::undefined_type(type_name, pos)),
		}
	}
}


/// Resolve an alias chain, patching stubs along the way. Nothing is patched when the
/// chain never reaches a concrete type, so `actual` always terminates.
fn patch_alias(context: &mut Context, name: Symbol, id: TypeId, pos: SourcePos) {
	let mut chain = vec![id];
	let mut current = id;

	let resolved = loop {
		match context.types.get(current) {
			Type::Name { name, target } => {
				let next = match *target {
					Some(next) => Some(next),
					None => context.tenv.look(*name).copied(),
				};

				match next {
					Some(next) if !chain.contains(&next) => {
						chain.push(next);
						current = next;
					}

					_ => break None,
				}
			}

			_ => break Some(current),
		}
	};

	match resolved {
		Some(target) => {
			for &link in &chain {
				if matches!(context.types.get(link), Type::Name { target: None, .. }) {
					context.types.resolve_name(link, target);
				}
			}
		}

		None => context.report(Error::type_cycle(name, pos)),
	}
}
