//! `argscan` is a command line scanner for Rust.
//!
//! Although other crates provide command line parser functionality, we have found they prioritize different concerns than those we are interested in.
//! Those crates own the whole surface of your Cli: they bind values onto variables, generate help messages, and exit your process.
//! We built `argscan` for programs that want the opposite contract.
//! Specifically, `argscan` attempts to prioritize the following design concerns:
//! * *Paradigm fidelity*:
//! Scanning follows the POSIX/GNU option conventions precisely, including long name abbreviation, short option clustering, and the `--` terminator.
//! * *An ordered record stream*:
//! The result of a scan is the full sequence of matched options and operands, in scan order, for the program to walk itself.
//! `argscan` never interprets, converts, or assigns values.
//! * *Diagnostics as data*:
//! A malformed vector produces a structured error carrying text in the classic getopt wording.
//! `argscan` never prints and never exits; reporting stays under the program's control.
//!
//! # Usage
//! ```
//! use argscan::{HasArg, Invocation, OperandOrder, OptionConfig};
//!
//! let table = vec![
//!     OptionConfig::new('h', Some("help"), HasArg::No),
//!     OptionConfig::new('v', Some("verbose"), HasArg::No),
//!     OptionConfig::new('o', Some("output"), HasArg::Required),
//! ];
//!
//! let invocation = Invocation::parse(
//!     vec!["program", "-vo", "out.bin", "input.txt"].as_slice(),
//!     &table,
//!     OperandOrder::Trailing,
//! );
//!
//! assert_eq!(invocation.error(), None);
//! for record in &invocation {
//!     match record.code() {
//!         Some('h') => println!("help requested"),
//!         Some('v') => println!("verbosity raised"),
//!         Some('o') => println!("output file: {}", record.argument()),
//!         _ => println!("operand: {}", record.argument()),
//!     }
//! }
//! ```
//!
//! In a binary, the same scan runs against the process environment via [`Invocation::from_env`].
//!
//! # Scanning Semantics
//! `argscan` consumes the argument vector according to the following set of rules.
//! By and large this syntax should be familiar from `getopt_long`, with a few subtle nuances for various edge cases.
//!
//! * The vector's first token is the program name; it is never scanned.
//! * A token beginning with `--` is matched against the table's long names.
//! Any unambiguous prefix of a long name matches, and an exact match always beats other candidates' prefixes.
//! For example, `--verb` matches `--verbose` so long as no other name starts with `verb`.
//! * A long option's value may be attached with `=`, or, for an option that requires a value, taken from the following token.
//! Only the first `=` separates.
//! For example, `--key=a=b` carries the value `a=b`.
//! * A token beginning with a single `-` is walked as a cluster of short codes.
//! For example, `-abc` is equivalent to `-a -b -c` when none of the three takes a value.
//! * A short option that requires a value takes the remaining cluster text when present, otherwise the following token.
//! For example, `-ofile` and `-o file` both carry the value `file`.
//! The cluster remainder is taken verbatim; `-o=file` carries the value `=file`.
//! * The token `--` terminates option scanning; every later token is an operand.
//! * A bare `-` token and an empty token are operands.
//! * Operands either collect after all the options ([`OperandOrder::Trailing`]) or stay at their scanned positions ([`OperandOrder::InPlace`]).
//! * Scanning halts at the first malformed token.
//! A halted scan reports the diagnostic and no records.
//!
//! # Features
//! * `tracing_debug`: Emit scanner tracing via [`tracing`](https://docs.rs/tracing).
#![deny(missing_docs)]
mod errors;
mod model;
mod record;
mod scan;

pub use errors::*;
pub use model::*;
pub use record::Record;
pub use scan::Invocation;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
