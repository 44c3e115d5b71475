//! Column name to property name conversion.
//!
//! Names without an underscore are only lower-cased, so casing-only word
//! boundaries are lost: `alreadyCamelCase` becomes `alreadycamelcase`. Running
//! the conversion on its own camel-case output is therefore not idempotent.
//!
//! Case changes are ASCII-only; other characters pass through untouched.

/// Whitespace removed from both ends of the joined words.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

pub fn normalize_column_name(column_name: &str) -> String {
    let lowered = column_name.to_ascii_lowercase();
    if !lowered.contains('_') {
        return lowered;
    }
    underscore_to_camel_case(&lowered)
}

/// Joins `_`/space separated words into lower camel case.
///
/// A name whose joined form starts with a space keeps one leading `_`.
fn underscore_to_camel_case(input: &str) -> String {
    let mut joined = String::with_capacity(input.len());
    let mut word_start = true;
    for ch in input.chars() {
        match ch {
            '_' => word_start = true,
            ' ' => {
                joined.push(ch);
                word_start = true;
            }
            _ if word_start => {
                joined.push(ch.to_ascii_uppercase());
                word_start = false;
            }
            _ => joined.push(ch),
        }
    }

    let mut camel = String::with_capacity(joined.len() + 1);
    if joined.starts_with(' ') {
        camel.push('_');
    }
    let mut chars = joined.trim_matches(TRIMMED).chars();
    if let Some(first) = chars.next() {
        camel.push(first.to_ascii_lowercase());
    }
    camel.extend(chars.filter(|ch| *ch != ' '));
    camel
}
