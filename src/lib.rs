//! Semantic analysis and intermediate representation generation for the Cedar
//! programming language, a small statically typed, expression oriented language with
//! nested functions, records and arrays.
//!
//! The entry point is [`semantic::Analyzer::analyze`], which consumes an abstract
//! syntax tree ([`syntax::ast`]) and produces a type checked program together with a
//! tree shaped IR ([`ir`]), accumulating semantic errors instead of aborting on the
//! first one.

pub mod fmt;
pub mod ir;
pub mod semantic;
pub mod symbol;
pub mod syntax;
mod term;
