//! Lua binding generator.
//!
//! Reads C source on stdin, consumes the `#pragma` binding directives in
//! it, and writes the same source to stdout with generated Lua C API
//! wrappers and one registration routine appended.  Feeding the output to
//! the C compiler instead of the original file is the whole build step:
//!
//! ```text
//! genbind gl.cxx register_gl_functions < gl.cxx > gl.gen.cxx
//! ```
//!
//! Diagnostics go to stderr, one line each, and never fail the run; a bad
//! directive costs that binding and nothing else.
//!
//! The same pass is available as a library call:
//!
//! ```
//! let source = "#pragma gen_fn glfwInit:boolean\n";
//! let mut out = Vec::new();
//! let report = genbind::generate(source, "register_gl_functions", &mut out).unwrap();
//! assert!(report.diagnostics.is_empty());
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("static int lua_glfwInit(lua_State* L) {"));
//! ```

pub mod cli;
pub mod diag;
pub mod emit;
pub mod pipeline;
pub mod pragma;
pub mod types;

pub use diag::{Diagnostic, Severity};
pub use emit::DEFAULT_REGISTER_FN;
pub use pipeline::{generate, Report};
pub use types::SemType;

use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;

/// Binary entry point: stdin through the generator to stdout, diagnostics
/// to stderr.  Returns `Err` only for I/O failures; directive problems are
/// reported and the exit status stays zero.
pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading standard input")?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let report = pipeline::generate(&input, &args.register_fn, &mut out)
        .context("writing generated output")?;
    out.flush().context("flushing standard output")?;

    for d in &report.diagnostics {
        eprintln!("{}", d.render(&args.source));
    }

    Ok(())
}
