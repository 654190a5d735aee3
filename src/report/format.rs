//! Low-level line formatters shared by the report builders

/// Format items as a bullet list, one `" - item"` line per entry.
///
/// Lines are joined with `\n` and carry no trailing newline. An empty
/// iterator yields an empty string.
#[must_use]
pub fn bullet_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!(" - {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a deployed-address line: `<id> - <address>`.
#[must_use]
pub fn address_line(id: &str, address: &str) -> String {
    format!("{id} - {address}")
}

/// Format a count with its noun, pluralizing with a trailing `s`.
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
