//! Asterisk dividers and boxed headers

/// A line of asterisks
pub(crate) fn divider(width: usize) -> String {
    "*".repeat(width)
}

/// `content` centered between two asterisks
fn boxed_line(width: usize, content: &str) -> String {
    let inner = width.saturating_sub(2);
    format!("*{content:^inner$}*")
}

/// Boxed title, preceded by a blank line:
///
/// ```text
/// ********
/// *      *
/// * TEXT *
/// *      *
/// ********
/// ```
pub(crate) fn header(width: usize, title: &str) -> String {
    [
        String::new(),
        divider(width),
        boxed_line(width, ""),
        boxed_line(width, title),
        boxed_line(width, ""),
        divider(width),
    ]
    .join("\n")
}
