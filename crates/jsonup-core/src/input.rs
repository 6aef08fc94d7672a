//! Operator input at a leaf prompt: sentinel tokens and typed parsing.
//!
//! Parsing is pure. The editor loop reads a line, turns it into a
//! [`Command`], and for `Command::Value` calls [`parse_leaf`] with the
//! leaf's original kind. A rejected value leaves the tree untouched.
use serde_json::{Number, Value};
use thiserror::Error;

use crate::node::LeafKind;

pub const SKIP: &str = "-n";
pub const ABORT: &str = "-x";
pub const SAVE_AND_STOP: &str = "-s";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Skip,
    Abort,
    SaveAndStop,
    /// Raw line with the terminator removed, otherwise untouched.
    Value(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let raw = strip_line_ending(line);
        match raw.trim() {
            SKIP => Command::Skip,
            ABORT => Command::Abort,
            SAVE_AND_STOP => Command::SaveAndStop,
            _ => Command::Value(raw.to_string()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid input for {kind}.")]
pub struct InputError {
    pub kind: LeafKind,
}

/// Parses `raw` as a value of `kind`. Strings are kept verbatim; the other
/// kinds must consume the whole trimmed input.
pub fn parse_leaf(kind: LeafKind, raw: &str) -> Result<Value, InputError> {
    let text = raw.trim();
    let reject = || InputError { kind };
    match kind {
        LeafKind::String => Ok(Value::String(raw.to_string())),
        LeafKind::Integer => parse_integer(text).map(Value::Number).ok_or_else(reject),
        LeafKind::Float => parse_float(text).map(Value::Number).ok_or_else(reject),
        LeafKind::Boolean => {
            if text.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if text.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(reject())
            }
        }
    }
}

fn parse_integer(text: &str) -> Option<Number> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // i64 first; only positive values beyond i64::MAX fall through to u64
    if let Ok(n) = text.parse::<i64>() {
        return Some(n.into());
    }
    if text.starts_with('-') {
        return None;
    }
    text.parse::<u64>().ok().map(Number::from)
}

fn parse_float(text: &str) -> Option<Number> {
    if !is_float_literal(text) {
        return None;
    }
    let f = text.parse::<f64>().ok()?;
    Number::from_f64(f)
}

// -?(D+(.D*)?|.D+)([eE][+-]?D+)?
fn is_float_literal(text: &str) -> bool {
    let s = text.strip_prefix('-').unwrap_or(text).as_bytes();
    let mut i = 0;
    let int_start = i;
    while i < s.len() && s[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;
    let mut frac_digits = 0;
    if i < s.len() && s[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }
    if i < s.len() && (s[i] == b'e' || s[i] == b'E') {
        i += 1;
        if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == s.len()
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sentinels_are_trimmed_and_case_sensitive() {
        assert_eq!(Command::parse("  -n \n"), Command::Skip);
        assert_eq!(Command::parse("-x\r\n"), Command::Abort);
        assert_eq!(Command::parse("-s"), Command::SaveAndStop);
        assert_eq!(Command::parse("-N"), Command::Value("-N".into()));
        assert_eq!(Command::parse(" hi \n"), Command::Value(" hi ".into()));
    }

    #[test]
    fn integer_grammar() {
        assert_eq!(parse_leaf(LeafKind::Integer, "42"), Ok(json!(42)));
        assert_eq!(parse_leaf(LeafKind::Integer, " -7 "), Ok(json!(-7)));
        assert_eq!(
            parse_leaf(LeafKind::Integer, "18446744073709551615"),
            Ok(json!(u64::MAX))
        );
        for bad in ["12abc", "3.5", "", "-", "+4", "1e3", "18446744073709551616", "-9223372036854775809"] {
            assert!(parse_leaf(LeafKind::Integer, bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn float_grammar() {
        let f = |s| parse_leaf(LeafKind::Float, s).ok().and_then(|v| v.as_f64());
        assert_eq!(f("2.5"), Some(2.5));
        assert_eq!(f("-.5"), Some(-0.5));
        assert_eq!(f("3"), Some(3.0));
        assert_eq!(f("4."), Some(4.0));
        assert_eq!(f("1e3"), Some(1000.0));
        for bad in ["abc", ".", "-", "1.2.3", "inf", "NaN", "1e", "1e400", "+1.0", "0x10"] {
            assert!(f(bad).is_none(), "{bad:?} accepted");
        }
    }

    #[test]
    fn float_input_stays_float() {
        let v = parse_leaf(LeafKind::Float, "3").unwrap();
        assert_eq!(LeafKind::of(&v), Some(LeafKind::Float));
    }

    #[test]
    fn boolean_only_true_false() {
        assert_eq!(parse_leaf(LeafKind::Boolean, "TRUE"), Ok(json!(true)));
        assert_eq!(parse_leaf(LeafKind::Boolean, "False"), Ok(json!(false)));
        for bad in ["1", "0", "yes", "no", "t"] {
            assert!(parse_leaf(LeafKind::Boolean, bad).is_err());
        }
    }

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(parse_leaf(LeafKind::String, "  a b "), Ok(json!("  a b ")));
        assert_eq!(parse_leaf(LeafKind::String, ""), Ok(json!("")));
    }
}
