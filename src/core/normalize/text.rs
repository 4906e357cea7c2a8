use regex::Regex;
use std::sync::LazyLock;

static ESCAPED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([[:punct:]])").expect("escape pattern is valid"));

static SHORTHAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(mm|qq|yy)\b").expect("shorthand pattern is valid"));

/// Clean an event title: line breaks and whitespace runs become one space,
/// escaped punctuation (`\/`) is unescaped and the period-over-period
/// shorthands `mm`, `qq`, `yy` become `m/m`, `q/q`, `y/y`.
pub fn normalize_event_text(raw: &str) -> String {
    let unescaped = ESCAPED_RE.replace_all(raw, "$1");
    let single_spaced = unescaped.split_whitespace().collect::<Vec<_>>().join(" ");

    SHORTHAND_RE
        .replace_all(&single_spaced, |caps: &regex::Captures| {
            let token = &caps[1];
            format!("{}/{}", &token[..1], &token[1..])
        })
        .into_owned()
}
