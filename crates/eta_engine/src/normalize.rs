use std::sync::LazyLock;

use regex::Regex;

static TRIPLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\"\"\"").expect("valid regex"));
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\r\n]*").expect("valid regex"));
static NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("valid regex"));

/// Clean pasted status dumps into something a JSON decoder can accept.
///
/// Applied in order: `"""` becomes `"`, `//` comments are dropped up to the
/// end of their line, and every line break becomes a single space. Never fails;
/// the output may still be invalid JSON.
pub fn normalize(raw: &str) -> String {
    let unquoted = TRIPLE_QUOTE.replace_all(raw, "\"");
    let uncommented = LINE_COMMENT.replace_all(&unquoted, "");
    NEWLINE.replace_all(&uncommented, " ").into_owned()
}
