//! Free-typed RUT input cleanup

use std::sync::LazyLock;

use regex::Regex;

static NON_RUT_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9kK-]").expect("sanitizer pattern is valid"));

/// Drop every character that cannot appear in a RUT.
///
/// Keeps ASCII digits, `k`, `K` and `-` in their original order and case.
/// Dots, spaces and anything else typed into the field are removed; no
/// hyphen is inserted, so the result is not necessarily valid.
pub fn sanitize_rut_input(input: &str) -> String {
    NON_RUT_CHARS.replace_all(input, "").into_owned()
}
