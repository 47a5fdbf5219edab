//! Semantic value types for binding directives.
//!
//! Directive arguments name Lua value kinds, not C types.  Each kind maps to
//! the C type a wrapper local is declared with and to the Lua C API call that
//! pulls an argument of that kind off the stack.  The set is closed: anything
//! outside it is reported as an invalid type and the directive is dropped.

// ── SemType ───────────────────────────────────────────────────────────────────

/// A value kind as written in `gen_fn` and `gen_const` directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemType {
    Boolean,
    CFunction,
    Integer,
    Str,
    Pointer,
    Number,
    Thread,
    LightUserdata,
    Userdata,
}

impl SemType {
    /// Every recognised kind, in directive-table order.
    pub const ALL: &'static [SemType] = &[
        SemType::Boolean,
        SemType::CFunction,
        SemType::Integer,
        SemType::Str,
        SemType::Pointer,
        SemType::Number,
        SemType::Thread,
        SemType::LightUserdata,
        SemType::Userdata,
    ];

    /// Parse a directive type name.
    ///
    /// Matching is exact and case-sensitive, with one widening: any name
    /// ending in `lightuserdata` (say `avlightuserdata`) is accepted as a
    /// raw-pointer alias, since every such argument crosses the stack as an
    /// untyped `void*` anyway.
    pub fn parse(name: &str) -> Option<SemType> {
        if name.ends_with("lightuserdata") {
            return Some(SemType::LightUserdata);
        }
        match name {
            "boolean"   => Some(SemType::Boolean),
            "cfunction" => Some(SemType::CFunction),
            "integer"   => Some(SemType::Integer),
            "string"    => Some(SemType::Str),
            "pointer"   => Some(SemType::Pointer),
            "number"    => Some(SemType::Number),
            "thread"    => Some(SemType::Thread),
            "userdata"  => Some(SemType::Userdata),
            _ => None,
        }
    }

    /// The canonical directive name.
    pub fn name(self) -> &'static str {
        match self {
            SemType::Boolean       => "boolean",
            SemType::CFunction     => "cfunction",
            SemType::Integer       => "integer",
            SemType::Str           => "string",
            SemType::Pointer       => "pointer",
            SemType::Number        => "number",
            SemType::Thread        => "thread",
            SemType::LightUserdata => "lightuserdata",
            SemType::Userdata      => "userdata",
        }
    }

    /// C type a wrapper local of this kind is declared with.
    pub fn c_type(self) -> &'static str {
        match self {
            SemType::Boolean       => "int",
            SemType::CFunction     => "lua_CFunction",
            SemType::Integer       => "lua_Integer",
            SemType::Str           => "const char*",
            SemType::Pointer       => "const void*",
            SemType::Number        => "lua_Number",
            SemType::Thread        => "lua_State*",
            SemType::LightUserdata => "void*",
            SemType::Userdata      => "void*",
        }
    }

    /// Name of the C function that extracts an argument of this kind from
    /// the Lua stack.  `luaL_check*` for everything except light userdata,
    /// which has no checked variant and uses plain `lua_touserdata`.
    pub fn extractor(self) -> &'static str {
        match self {
            SemType::Boolean       => "luaL_checkboolean",
            SemType::CFunction     => "luaL_checkcfunction",
            SemType::Integer       => "luaL_checkinteger",
            SemType::Str           => "luaL_checkstring",
            SemType::Pointer       => "luaL_checkpointer",
            SemType::Number        => "luaL_checknumber",
            SemType::Thread        => "luaL_checkthread",
            SemType::LightUserdata => "lua_touserdata",
            SemType::Userdata      => "luaL_checkuserdata",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
