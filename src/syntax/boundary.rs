//! Token boundary rules and the static lexical tables
//!
//! Every matcher decides where a token ends with these predicates, so
//! they all agree on what separates two tokens.

/// Operators and punctuation, matched longest-first by shortlist narrowing
pub const OPERATORS: &[&str] = &[
    "{", "}", "[", "]", "(", ")", ".", ",", ";", ":", "::", "?", "??", "??=", "?.",
    "+", "-", "*", "/", "%", "&", "|", "^", "!", "~", "=", "<", ">",
    "++", "--", "&&", "||", "<<", ">>", "==", "!=", "<=", ">=", "->", "=>",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=",
];

/// Reserved and contextual words highlighted as keywords
pub const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "base", "bool", "break", "byte", "case",
    "catch", "char", "checked", "class", "const", "continue", "decimal", "default",
    "delegate", "do", "double", "dynamic", "else", "enum", "event", "explicit",
    "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto", "if",
    "implicit", "in", "int", "interface", "internal", "is", "lock", "long",
    "nameof", "namespace", "new", "null", "object", "operator", "out", "override",
    "params", "partial", "private", "protected", "public", "readonly", "ref",
    "return", "sbyte", "sealed", "short", "sizeof", "stackalloc", "static",
    "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint",
    "ulong", "unchecked", "unsafe", "ushort", "using", "var", "virtual", "void",
    "volatile", "when", "where", "while", "yield",
];

/// Whether `ch` belongs to the operator alphabet
pub fn is_symbol_char(ch: char) -> bool {
    matches!(
        ch,
        '{' | '}' | '[' | ']' | '(' | ')' | '.' | ',' | ';' | ':' | '?' | '+' | '-' | '*' | '/'
            | '%' | '&' | '|' | '^' | '!' | '~' | '=' | '<' | '>'
    )
}

pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

pub fn is_newline(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Characters that may continue a name, keyword or number
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whether `ch` separates two tokens.
///
/// Symbols always do. Names and keywords are also bounded by whitespace
/// (`include_whitespace`); operator runs additionally end at identifier
/// characters (`include_alnum`) so `+x` never blends into one token.
pub fn is_delimiter(ch: char, include_whitespace: bool, include_alnum: bool) -> bool {
    is_symbol_char(ch)
        || (include_whitespace && is_whitespace(ch))
        || (include_alnum && is_identifier_char(ch))
}

/// Boundary test for the character before a token; start of input counts
pub fn is_boundary_before(prev: Option<char>) -> bool {
    prev.map_or(true, |ch| is_delimiter(ch, true, false))
}
