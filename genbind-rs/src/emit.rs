//! Generated C emission.
//!
//! Passthrough text is copied to the sink as it arrives, byte for byte.
//! Declarations are buffered instead: every wrapper, and then the single
//! registration routine, is written after the last input line so the
//! generated block sits in one piece at the bottom of the file, below any
//! prototypes the source declared.
//!
//! Generated lines use two-space indentation and `\n` endings regardless of
//! the input's own line endings.

use std::io::{self, Write};

use crate::pragma::ConstDecl;
use crate::types::SemType;

/// Registration-routine name used when neither the command line nor a
/// `#pragma register_fn` directive supplies one.
pub const DEFAULT_REGISTER_FN: &str = "register_lua_functiohs";

const INDENT: &str = "  ";

// ── Wrapper ───────────────────────────────────────────────────────────────────

/// One function binding, argument kinds resolved and ready to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    /// C function being wrapped; also the Lua global it is bound to.
    pub name: String,
    /// `lua_push*` suffix for the result.  `None` discards the result and
    /// the wrapper returns nothing to Lua.  The suffix is emitted as
    /// written, so unconventional spellings surface in the C compiler
    /// rather than here.
    pub ret: Option<String>,
    /// Argument kinds, left to right.
    pub args: Vec<SemType>,
}

// ── Emitter ───────────────────────────────────────────────────────────────────

/// Accumulates declarations during the pass over the input and writes all
/// generated C at end of stream.
#[derive(Debug)]
pub struct Emitter {
    register_fn: String,
    functions: Vec<Wrapper>,
    constants: Vec<ConstDecl>,
}

/// Copy one non-directive line to the output, terminator and all.
pub fn passthrough<W: Write>(out: &mut W, raw: &str) -> io::Result<()> {
    out.write_all(raw.as_bytes())
}

impl Emitter {
    pub fn new(register_fn: impl Into<String>) -> Self {
        Emitter {
            register_fn: register_fn.into(),
            functions: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Rename the registration routine.  Later calls win, so the last
    /// `#pragma register_fn` in a file is the one that sticks.
    pub fn set_register_fn(&mut self, name: impl Into<String>) {
        self.register_fn = name.into();
    }

    pub fn register_fn(&self) -> &str {
        &self.register_fn
    }

    pub fn add_function(&mut self, f: Wrapper) {
        self.functions.push(f);
    }

    pub fn add_constant(&mut self, c: ConstDecl) {
        self.constants.push(c);
    }

    /// Write every wrapper in declaration order, then the registration
    /// routine.  Always writes the routine, even for an empty input, so the
    /// symbol the rest of the program links against exists.
    pub fn finish<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for f in &self.functions {
            self.write_wrapper(out, f)?;
        }
        self.write_registration(out)
    }

    fn write_wrapper<W: Write>(&self, out: &mut W, f: &Wrapper) -> io::Result<()> {
        writeln!(out, "static int lua_{}(lua_State* L) {{", f.name)?;
        let mut call_args = Vec::with_capacity(f.args.len());
        for (i, ty) in f.args.iter().enumerate() {
            // Lua stack positions are 1-based.
            let n = i + 1;
            writeln!(
                out,
                "{INDENT}{} arg_{n} = {}(L, {n});",
                ty.c_type(),
                ty.extractor()
            )?;
            call_args.push(format!("arg_{n}"));
        }
        let invoke = format!("{}({})", f.name, call_args.join(", "));
        match &f.ret {
            Some(ret) => {
                writeln!(out, "{INDENT}lua_push{ret}(L, {invoke});")?;
                writeln!(out, "{INDENT}return 1;")?;
            }
            None => {
                writeln!(out, "{INDENT}{invoke};")?;
                writeln!(out, "{INDENT}return 0;")?;
            }
        }
        writeln!(out, "}}")
    }

    fn write_registration<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "void {}(lua_State* L) {{", self.register_fn)?;
        for f in &self.functions {
            writeln!(out, "{INDENT}lua_pushcfunction(L, lua_{});", f.name)?;
            writeln!(out, "{INDENT}lua_setglobal(L, \"{}\");", f.name)?;
        }
        for c in &self.constants {
            writeln!(out, "{INDENT}lua_push{}(L, {});", c.ty, c.value)?;
            writeln!(out, "{INDENT}lua_setglobal(L, \"{}\");", c.name)?;
        }
        writeln!(out, "}}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn render(e: &Emitter) -> String {
        let mut out = Vec::new();
        e.finish(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_emitter_writes_registration_only() {
        let e = Emitter::new(DEFAULT_REGISTER_FN);
        assert_eq!(render(&e), "void register_lua_functiohs(lua_State* L) {\n}\n");
    }

    #[test]
    fn wrapper_with_return() {
        let mut e = Emitter::new("reg");
        e.add_function(Wrapper {
            name: "player_open".into(),
            ret: Some("boolean".into()),
            args: vec![SemType::Str],
        });
        let expected = "\
static int lua_player_open(lua_State* L) {\n\
\x20 const char* arg_1 = luaL_checkstring(L, 1);\n\
\x20 lua_pushboolean(L, player_open(arg_1));\n\
\x20 return 1;\n\
}\n\
void reg(lua_State* L) {\n\
\x20 lua_pushcfunction(L, lua_player_open);\n\
\x20 lua_setglobal(L, \"player_open\");\n\
}\n";
        assert_eq!(render(&e), expected);
    }

    #[test]
    fn wrapper_without_return_discards_result() {
        let mut e = Emitter::new("reg");
        e.add_function(Wrapper {
            name: "glfwTerminate".into(),
            ret: None,
            args: vec![],
        });
        let expected = "\
static int lua_glfwTerminate(lua_State* L) {\n\
\x20 glfwTerminate();\n\
\x20 return 0;\n\
}\n\
void reg(lua_State* L) {\n\
\x20 lua_pushcfunction(L, lua_glfwTerminate);\n\
\x20 lua_setglobal(L, \"glfwTerminate\");\n\
}\n";
        assert_eq!(render(&e), expected);
    }

    #[test]
    fn zero_arg_wrapper_with_return() {
        let mut e = Emitter::new("reg");
        e.add_function(Wrapper {
            name: "glfwInit".into(),
            ret: Some("boolean".into()),
            args: vec![],
        });
        let text = render(&e);
        assert!(text.contains("  lua_pushboolean(L, glfwInit());\n"));
        assert!(text.contains("  return 1;\n"));
    }

    #[test]
    fn arguments_are_extracted_in_stack_order() {
        let mut e = Emitter::new("reg");
        e.add_function(Wrapper {
            name: "mix".into(),
            ret: Some("number".into()),
            args: vec![SemType::LightUserdata, SemType::Integer, SemType::Number],
        });
        let expected = "\
static int lua_mix(lua_State* L) {\n\
\x20 void* arg_1 = lua_touserdata(L, 1);\n\
\x20 lua_Integer arg_2 = luaL_checkinteger(L, 2);\n\
\x20 lua_Number arg_3 = luaL_checknumber(L, 3);\n\
\x20 lua_pushnumber(L, mix(arg_1, arg_2, arg_3));\n\
\x20 return 1;\n\
}\n";
        assert!(render(&e).starts_with(expected));
    }

    #[test]
    fn empty_return_suffix_emits_bare_push() {
        let mut e = Emitter::new("reg");
        e.add_function(Wrapper {
            name: "tick".into(),
            ret: Some(String::new()),
            args: vec![],
        });
        assert!(render(&e).contains("  lua_push(L, tick());\n"));
    }

    #[test]
    fn registration_lists_functions_before_constants() {
        let mut e = Emitter::new("register_player_functions");
        e.add_constant(ConstDecl {
            ty: "integer".into(),
            name: "PLAYER_OK".into(),
            value: "PLAYER_OK".into(),
        });
        e.add_function(Wrapper {
            name: "player_close".into(),
            ret: None,
            args: vec![],
        });
        e.add_constant(ConstDecl {
            ty: "string".into(),
            name: "PLAYER_TITLE".into(),
            value: "\"untitled\"".into(),
        });
        let text = render(&e);
        let tail = &text[text.find("void register_player_functions").unwrap()..];
        let expected = "\
void register_player_functions(lua_State* L) {\n\
\x20 lua_pushcfunction(L, lua_player_close);\n\
\x20 lua_setglobal(L, \"player_close\");\n\
\x20 lua_pushinteger(L, PLAYER_OK);\n\
\x20 lua_setglobal(L, \"PLAYER_OK\");\n\
\x20 lua_pushstring(L, \"untitled\");\n\
\x20 lua_setglobal(L, \"PLAYER_TITLE\");\n\
}\n";
        assert_eq!(tail, expected);
    }

    #[test]
    fn last_register_fn_wins() {
        let mut e = Emitter::new("first");
        e.set_register_fn("second");
        e.set_register_fn("third");
        assert_eq!(e.register_fn(), "third");
        assert!(render(&e).starts_with("void third(lua_State* L) {"));
    }

    #[test]
    fn passthrough_is_verbatim() {
        let mut out = Vec::new();
        passthrough(&mut out, "  kept as-is \r\n").unwrap();
        passthrough(&mut out, "no terminator").unwrap();
        assert_eq!(out, b"  kept as-is \r\nno terminator");
    }
}
