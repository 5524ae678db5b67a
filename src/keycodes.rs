//! Keycode identifier to display glyph translation.
//!
//! The table is kept as the literal sequence of assignments, duplicates
//! included, and folded into a map in declaration order so the last
//! assignment for a key wins. Several QMK names are re-declared by the ZMK
//! block; only `COLON` changes value in the process (`":"` becomes `"'"`).
//!
//! A handful of entries look wrong but are reproduced as-is until confirmed
//! upstream: `APOS` maps to `"."`, `APOSTROPHE` to `"<"`, `LBKT` to `"]"`,
//! `SQT` to `"\""` and (after the overwrite) `COLON` to `"'"`.

use std::collections::HashMap;

/// Number of distinct keys once duplicates are folded.
pub const EFFECTIVE_KEYCODE_COUNT: usize = 98;

/// Every assignment in declaration order. `LBRC`/`RBRC` are left out on
/// purpose: QMK and ZMK disagree on what they mean.
pub const KEYCODE_ASSIGNMENTS: &[(&str, &str)] = &[
    // QMK
    ("MINUS", "-"),
    ("MINS", "-"),
    ("EQUAL", "="),
    ("EQL", "="),
    ("LEFT_BRACKET", "["),
    ("RIGHT_BRACKET", "]"),
    ("BACKSLASH", "\\"),
    ("BSLS", "\\"),
    ("NONUS_HASH", "#"),
    ("NUHS", "#"),
    ("SEMICOLON", ";"),
    ("SCLN", ";"),
    ("QUOTE", "'"),
    ("QUOT", "'"),
    ("GRAVE", "`"),
    ("GRV", "`"),
    ("COMMA", ","),
    ("COMM", ","),
    ("DOT", "."),
    ("SLASH", "/"),
    ("SLSH", "/"),
    ("TILDE", "~"),
    ("TILD", "~"),
    ("EXCLAIM", "!"),
    ("EXLM", "!"),
    ("AT", "@"),
    ("HASH", "#"),
    ("DOLLAR", "$"),
    ("DLR", "$"),
    ("PERCENT", "%"),
    ("PERC", "%"),
    ("CIRCUMFLEX", "^"),
    ("CIRC", "^"),
    ("AMPERSAND", "&"),
    ("AMPR", "&"),
    ("ASTERISK", "*"),
    ("ASTR", "*"),
    ("LEFT_PAREN", "("),
    ("LPRN", "("),
    ("RIGHT_PAREN", ")"),
    ("RPRN", ")"),
    ("UNDERSCORE", "_"),
    ("UNDS", "_"),
    ("PLUS", "+"),
    ("LEFT_CURLY_BRACE", "{"),
    ("LCBR", "{"),
    ("RIGHT_CURLY_BRACE", "}"),
    ("RCBR", "}"),
    ("PIPE", "|"),
    ("COLON", ":"),
    ("COLN", ":"),
    ("DOUBLE_QUOTE", "\""),
    ("DQUO", "\""),
    ("DQT", "\""),
    ("LEFT_ANGLE_BRACKET", "<"),
    ("LABK", "<"),
    ("LT", "<"),
    ("RIGHT_ANGLE_BRACKET", ">"),
    ("RABK", ">"),
    ("GT", ">"),
    ("QUESTION", "?"),
    ("QUES", "?"),
    // ZMK
    ("EXCLAMATION", "!"),
    ("EXCL", "!"),
    ("AT_SIGN", "@"),
    ("AT", "@"),
    ("HASH", "#"),
    ("POUND", "#"),
    ("DOLLAR", "$"),
    ("DLLR", "$"),
    ("PERCENT", "%"),
    ("PRCNT", "%"),
    ("CARET", "^"),
    ("AMPERSAND", "&"),
    ("AMPS", "&"),
    ("ASTERISK", "*"),
    ("ASTRK", "*"),
    ("STAR", "*"),
    ("LEFT_PARENTHESIS", "("),
    ("LPAR", "("),
    ("RIGHT_PARENTHESIS", ")"),
    ("RPAR", ")"),
    ("EQUAL", "="),
    ("PLUS", "+"),
    ("MINUS", "-"),
    ("UNDERSCORE", "_"),
    ("UNDER", "_"),
    ("SLASH", "/"),
    ("FSLH", "/"),
    ("QUESTION", "?"),
    ("QMARK", "?"),
    ("BACKSLASH", "\\"),
    ("BSLH", "\\"),
    ("PIPE", "|"),
    ("NON_US_BACKSLASH", "\\"),
    ("PIPE2", "|"),
    ("NON_US_BSLH", "|"),
    ("SEMICOLON", ";"),
    ("SEMI", ";"),
    ("COLON", "'"),
    ("SINGLE_QUOTE", "'"),
    ("SQT", "\""),
    ("APOSTROPHE", "<"),
    ("APOS", "."),
    ("DOUBLE_QUOTES", "\""),
    ("DQT", "\""),
    ("COMMA", ","),
    ("LESS_THAN", "<"),
    ("LT", "<"),
    ("PERIOD", "."),
    ("DOT", "."),
    ("GREATER_THAN", ">"),
    ("GT", ">"),
    ("LEFT_BRACKET", "["),
    ("LBKT", "]"),
    ("LEFT_BRACE", "{"),
    ("RIGHT_BRACKET", "]"),
    ("RBKT", "]"),
    ("RIGHT_BRACE", "}"),
    ("GRAVE", "`"),
    ("TILDE", "~"),
    ("NON_US_HASH", "#"),
    ("NUHS", "#"),
    ("TILDE2", "~"),
];

/// Folds [`KEYCODE_ASSIGNMENTS`] into the effective lookup table.
pub fn default_keycode_map() -> HashMap<String, String> {
    build_keycode_map(KEYCODE_ASSIGNMENTS.iter().copied())
}

/// Applies `(keycode, glyph)` assignments in order; a repeated keycode keeps
/// the last glyph written for it.
pub fn build_keycode_map<'a, I>(assignments: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut map = HashMap::new();
    for (keycode, glyph) in assignments {
        map.insert(keycode.to_string(), glyph.to_string());
    }
    map
}
