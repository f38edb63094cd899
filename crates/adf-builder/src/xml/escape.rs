//! Character escaping for element text and attribute values

/// Escapes `&`, `<` and `>` for element text
pub fn escape_text(input: &str) -> String {
    escape(input, false)
}

/// Escapes `&`, `<`, `>` and `"` for double-quoted attribute values
pub fn escape_attribute(input: &str) -> String {
    escape(input, true)
}

fn escape(input: &str, quotes: bool) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' if quotes => output.push_str("&quot;"),
            _ => output.push(ch),
        }
    }
    output
}
