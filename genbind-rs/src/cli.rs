//! Command-line arguments.
//!
//! The generator is a filter: source text arrives on stdin and generated
//! text leaves on stdout, so neither positional names a file to read.  They
//! only label diagnostics and seed the registration-routine name.

use clap::Parser;

use crate::emit::DEFAULT_REGISTER_FN;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Source name shown in warnings (the input itself is read from stdin)
    #[arg(value_name = "SOURCE_NAME", default_value = "<unnamed>")]
    pub source: String,

    /// Registration routine name, used unless the input carries a
    /// `#pragma register_fn` of its own
    #[arg(value_name = "REGISTER_FN", default_value = DEFAULT_REGISTER_FN)]
    pub register_fn: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
