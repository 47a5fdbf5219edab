//! The generation pass.
//!
//! One pass over the input: each line is classified, directives are parsed
//! and type-checked, everything else is copied straight to the output.  At
//! end of stream the emitter appends the buffered wrappers and the
//! registration routine.
//!
//! Bad directives are never fatal.  Each produces one [`Diagnostic`], the
//! line is consumed (it does not leak into the output), and the pass keeps
//! going, so one typo costs one binding rather than the whole file.

use std::io::{self, Write};

use crate::diag::{Diagnostic, Severity};
use crate::emit::{self, Emitter, Wrapper};
use crate::pragma::{self, ConstDecl, LineClass, PragmaError};
use crate::types::SemType;

/// Warning text for a `gen_fn` directive with nothing after the prefix.
const NO_ARGS_WARNING: &str = "no arguments provided to gen_binding #pragma";

// ── Report ────────────────────────────────────────────────────────────────────

/// What a generation run wants to say besides its output.
#[derive(Debug, Default)]
pub struct Report {
    /// Per-line problems, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn errors(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics.len() - self.errors()
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Run the generator over `input`, writing to `out`.
///
/// `register_fn` seeds the registration-routine name; any
/// `#pragma register_fn` in the input overrides it.  The `Err` case covers
/// sink I/O only; directive problems come back in the [`Report`].
pub fn generate<W: Write>(input: &str, register_fn: &str, out: &mut W) -> io::Result<Report> {
    let mut emitter = Emitter::new(register_fn);
    let mut report = Report::default();

    for (i, raw) in input.split_inclusive('\n').enumerate() {
        let line = i + 1;
        match pragma::classify(raw) {
            LineClass::Passthrough => emit::passthrough(out, raw)?,
            LineClass::Register(name) => emitter.set_register_fn(name),
            LineClass::Const(body) => match lower_const(body) {
                Ok(c) => emitter.add_constant(c),
                Err(e) => report.diagnostics.push(Diagnostic::error(line, e.to_string())),
            },
            LineClass::Fn(body) => match lower_fn(body) {
                Ok(Some(f)) => emitter.add_function(f),
                Ok(None) => report
                    .diagnostics
                    .push(Diagnostic::warning(line, NO_ARGS_WARNING)),
                Err(e) => report.diagnostics.push(Diagnostic::error(line, e.to_string())),
            },
        }
    }

    emitter.finish(out)?;
    Ok(report)
}

/// Parse one `gen_const` body and check its type against the table.
fn lower_const(body: &str) -> Result<ConstDecl, PragmaError> {
    let c = pragma::parse_const(body)?;
    if SemType::parse(&c.ty).is_none() {
        return Err(PragmaError::UnknownType(c.ty));
    }
    Ok(c)
}

/// Parse one `gen_fn` body and resolve its argument kinds.  The return
/// suffix is not resolved; it passes through to the `lua_push*` call site
/// as written.
fn lower_fn(body: &str) -> Result<Option<Wrapper>, PragmaError> {
    let Some(decl) = pragma::parse_fn(body)? else {
        return Ok(None);
    };
    let mut args = Vec::with_capacity(decl.args.len());
    for ty in &decl.args {
        match SemType::parse(ty) {
            Some(t) => args.push(t),
            None => return Err(PragmaError::UnknownType(ty.clone())),
        }
    }
    Ok(Some(Wrapper {
        name: decl.name,
        ret: decl.ret,
        args,
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
