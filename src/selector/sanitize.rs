//! Plain-text sanitization for submitted form values.

/// Sanitize a submitted form value for storage as plain text.
///
/// Markup tags are dropped, control characters (including line breaks
/// and tabs) become spaces, runs of whitespace collapse to a single
/// space, and the result is trimmed. Stored values never contain
/// executable markup.
///
/// # Example
///
/// ```
/// use retemplate::selector::sanitize_text;
///
/// assert_eq!(sanitize_text("<script>alert(1)</script>"), "alert(1)");
/// assert_eq!(sanitize_text("  fancy.php\n"), "fancy.php");
/// ```
pub fn sanitize_text(input: &str) -> String {
    let mut stripped = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            c if c.is_control() || c.is_whitespace() => stripped.push(' '),
            c => stripped.push(c),
        }
    }

    let mut out = String::with_capacity(stripped.len());
    let mut prev_space = false;
    for c in stripped.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }

    out.trim().to_string()
}
