//! Directive recognition and parsing.
//!
//! A directive is a line that starts, at column zero, with one of three
//! literal prefixes:
//!
//! * `#pragma register_fn NAME` renames the emitted registration routine.
//! * `#pragma gen_const TYPE NAME [VALUE]` declares one constant binding.
//! * `#pragma gen_fn NAME[:RET] [TYPE ...]` declares one wrapped function.
//!
//! Everything else is passthrough.  Matching is a plain prefix test, so a
//! line may be indented out of directive position, and the character after
//! the prefix need not be a space (`#pragma gen_fn` glued straight onto the
//! name still parses).  This module only splits directive bodies into their
//! parts; type checking happens in [`crate::pipeline`].

use thiserror::Error;

/// Directive prefixes, in match precedence order.
pub const REGISTER_FN: &str = "#pragma register_fn";
pub const GEN_CONST: &str = "#pragma gen_const";
pub const GEN_FN: &str = "#pragma gen_fn";

// ── Classification ────────────────────────────────────────────────────────────

/// What one raw input line turned out to be.
///
/// Borrows from the line, terminator still attached for passthrough; the
/// directive variants carry only the text after the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Not a directive.  Forward to the output untouched.
    Passthrough,
    /// `register_fn`: the trimmed remainder is the new routine name.
    Register(&'a str),
    /// `gen_const`: unparsed directive body.
    Const(&'a str),
    /// `gen_fn`: unparsed directive body.
    Fn(&'a str),
}

/// Classify one raw line.
pub fn classify(line: &str) -> LineClass<'_> {
    if let Some(rest) = line.strip_prefix(REGISTER_FN) {
        LineClass::Register(rest.trim())
    } else if let Some(rest) = line.strip_prefix(GEN_CONST) {
        LineClass::Const(rest)
    } else if let Some(rest) = line.strip_prefix(GEN_FN) {
        LineClass::Fn(rest)
    } else {
        LineClass::Passthrough
    }
}

// ── Declarations ──────────────────────────────────────────────────────────────

/// A constant binding declared by `gen_const`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDecl {
    /// Declared value kind (validated later against the type table).
    pub ty: String,
    /// Lua global the value is bound to.
    pub name: String,
    /// C expression pushed at registration time.  Defaults to `name`, so
    /// `gen_const integer AV_CH_FRONT_LEFT` re-exports the C constant of the
    /// same name.
    pub value: String,
}

/// A function binding declared by `gen_fn`, argument types still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnDecl {
    /// C function to wrap.
    pub name: String,
    /// Return kind from a `NAME:RET` suffix, or `None` when the result is
    /// discarded.  Carried as written; a bare trailing colon yields an empty
    /// string here and an unsuffixed `lua_push` in the output.
    pub ret: Option<String>,
    /// Argument kind names, left to right.
    pub args: Vec<String>,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a directive body failed to parse.
///
/// The `Display` text is the exact message shown on the diagnostics stream,
/// so downstream scripts can grep for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PragmaError {
    /// `gen_fn` name carried more than one `:`.
    #[error("invalid return type format, expected: FUNC_NAME:RET_TYPE")]
    ReturnFormat,
    /// `gen_const` had fewer than two tokens.
    #[error("invalid constant format, expected: TYPE NAME [VALUE]")]
    ConstFormat,
    /// A type name outside the recognised set.
    #[error("invalid type '{0}'")]
    UnknownType(String),
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a `gen_const` body into its three parts.
///
/// The value may be any single whitespace-free C expression; tokens after it
/// are ignored.
pub fn parse_const(body: &str) -> Result<ConstDecl, PragmaError> {
    let mut toks = body.split_whitespace();
    let ty = toks.next().ok_or(PragmaError::ConstFormat)?;
    let name = toks.next().ok_or(PragmaError::ConstFormat)?;
    let value = toks.next().unwrap_or(name);
    Ok(ConstDecl {
        ty: ty.to_owned(),
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

/// Parse a `gen_fn` body.
///
/// Returns `Ok(None)` for an empty body; the caller reports that as a
/// warning and records nothing.
pub fn parse_fn(body: &str) -> Result<Option<FnDecl>, PragmaError> {
    let mut toks = body.split_whitespace();
    let Some(head) = toks.next() else {
        return Ok(None);
    };
    let (name, ret) = match head.split_once(':') {
        None => (head.to_owned(), None),
        Some((_, rest)) if rest.contains(':') => return Err(PragmaError::ReturnFormat),
        Some((name, ret)) => (name.to_owned(), Some(ret.to_owned())),
    };
    Ok(Some(FnDecl {
        name,
        ret,
        args: toks.map(str::to_owned).collect(),
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
