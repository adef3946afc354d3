//! An interactive interpreter for a small set of text-processing commands.
//!
//! This crate emulates `cat`, `wc`, `sort` and `uniq` connected with the pipe
//! operator, reading command lines from a prompt and printing the result. It
//! is intentionally small and easy to read: commands run in-process over
//! sequences of text lines, and the whole input of each stage is materialized
//! before the next stage runs.
//!
//! The main entry point is [`Interpreter`], which executes one pipeline per
//! raw input line and also provides the interactive loop. The public modules
//! [`error`] and [`source`] expose the failure taxonomy and the trait for
//! plugging in a different backing store for filename arguments.

mod builtin;
mod command;
pub mod error;
mod parser;
pub mod source;

mod interpreter;

pub use command::LineSequence;
pub use interpreter::Interpreter;
