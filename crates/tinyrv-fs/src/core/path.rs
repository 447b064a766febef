//! Path utilities for the filesystem layer.
//!
//! Splitting, component iteration and byte-bounded truncation. Every
//! path-taking operation composes `split_parent` with the tree resolver;
//! nothing else re-derives path structure.

use alloc::string::String;

/// Path separator
pub const SEPARATOR: char = '/';

/// Check if a path starts at the root.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Iterate the non-empty components of a path.
///
/// Repeated, leading and trailing slashes produce no components.
pub fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|c| !c.is_empty())
}

/// Check for the `.` and `..` pseudo-components.
pub fn is_special(name: &str) -> bool {
    name == "." || name == ".."
}

/// Split a path into (parent path, final component).
///
/// Trailing slashes are ignored. The split point is the last remaining
/// slash; without one the parent is `""`, meaning the current directory.
/// A path made only of slashes splits into `("/", "")`.
pub fn split_parent(path: &str) -> (&str, &str) {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return if is_absolute(path) { ("/", "") } else { ("", "") };
    }

    match trimmed.rfind(SEPARATOR) {
        None => ("", trimmed),
        Some(0) => ("/", &trimmed[1..]),
        Some(pos) => (&trimmed[..pos], &trimmed[pos + 1..]),
    }
}

/// Cut a string to at most `max` bytes without splitting a character.
pub fn truncate_str(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Content as stored in a file buffer: stops at the first NUL and at `max` bytes.
pub fn content_prefix(text: &str, max: usize) -> &str {
    let text = match text.find('\0') {
        Some(nul) => &text[..nul],
        None => text,
    };
    truncate_str(text, max)
}

/// Render root-to-leaf component names as an absolute path.
pub fn render_absolute<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for name in names {
        out.push(SEPARATOR);
        out.push_str(name);
    }
    if out.is_empty() {
        out.push(SEPARATOR);
    }
    out
}
