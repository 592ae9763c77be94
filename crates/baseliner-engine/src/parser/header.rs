//! Record header parsing: `<dotted.test.name> : <line_number>`.

/// The trailing line-number field of a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    /// Field present but empty — the capture wrote a no-op record.
    Empty,
    Number(u32),
}

/// Split a header line into the dotted test name and its line field.
///
/// Returns `None` when the ` : ` separator is missing, the name is empty,
/// or the field is neither empty nor a positive integer.
pub fn parse_header(line: &str) -> Option<(&str, LineField)> {
    let (name, field) = line.rsplit_once(" : ")?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let field = field.trim();
    if field.is_empty() {
        return Some((name, LineField::Empty));
    }
    match field.parse::<u32>() {
        Ok(n) if n > 0 => Some((name, LineField::Number(n))),
        _ => None,
    }
}

/// Build the relative file path for a dotted test name: strip the root
/// namespace, join the remaining segments with `/`, append `.cs`.
///
/// `Foo.Bar.Query.MyQueryTest` with two prefix segments becomes
/// `Query/MyQueryTest.cs`. Names with no segments left after stripping,
/// or with empty segments, are malformed.
pub fn file_identifier(name: &str, prefix_segments: usize) -> Option<String> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() <= prefix_segments || parts.iter().any(|p| p.is_empty()) {
        return None;
    }

    let mut path = parts[prefix_segments..].join("/");
    path.push_str(".cs");
    Some(path)
}
