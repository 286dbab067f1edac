/// Strip every ordinary space and non-breaking space, anywhere in the string.
///
/// volby.cz renders thousands as `1&nbsp;234`. The result stays a string; no
/// numeric parsing happens here.
pub fn normalize_number(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ' && *c != '\u{a0}').collect()
}
