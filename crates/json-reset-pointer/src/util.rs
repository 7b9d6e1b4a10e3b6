//! Path parsing and formatting helpers.

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_reset_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, otherwise "~01" would decode to "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// # Example
///
/// ```
/// use json_reset_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components.
///
/// - Empty string returns the root path
/// - The leading `/` is stripped
/// - Each component is unescaped
///
/// # Example
///
/// ```
/// use json_reset_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/foo/0"), vec!["foo", "0"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    match pointer.strip_prefix('/') {
        None if pointer.is_empty() => Vec::new(),
        None => pointer.split('/').map(unescape_component).collect(),
        Some(rest) => rest.split('/').map(unescape_component).collect(),
    }
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path.
///
/// # Example
///
/// ```
/// use json_reset_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string(), "0".to_string()]), "/foo/0");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Parse a dotted path such as `address.option.0` or `size[1].name`.
///
/// Bracket segments may be quoted (`a["b.c"]`) to carry dots inside a key.
///
/// # Example
///
/// ```
/// use json_reset_pointer::parse_dotted_path;
///
/// assert_eq!(parse_dotted_path("option.0"), vec!["option", "0"]);
/// assert_eq!(parse_dotted_path("size[1].n"), vec!["size", "1", "n"]);
/// assert_eq!(parse_dotted_path("a[\"b.c\"]"), vec!["a", "b.c"]);
/// ```
pub fn parse_dotted_path(path: &str) -> Vec<String> {
    let mut steps = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();
    // A step just closed by `]` must not be pushed again by the next `.`.
    let mut closed = false;

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !closed {
                    steps.push(std::mem::take(&mut current));
                }
                closed = false;
            }
            '[' => {
                if !current.is_empty() {
                    steps.push(std::mem::take(&mut current));
                }
                let quote = match chars.peek() {
                    Some(&q) if q == '"' || q == '\'' => {
                        chars.next();
                        Some(q)
                    }
                    _ => None,
                };
                let mut step = String::new();
                while let Some(inner) = chars.next() {
                    if Some(inner) == quote && chars.peek() == Some(&']') {
                        chars.next();
                        break;
                    }
                    if quote.is_none() && inner == ']' {
                        break;
                    }
                    step.push(inner);
                }
                steps.push(step);
                closed = true;
            }
            _ => {
                closed = false;
                current.push(c);
            }
        }
    }
    if !closed && !path.is_empty() {
        steps.push(current);
    }
    steps
}

/// Check if a string represents a canonical array index (no leading zeros).
///
/// # Example
///
/// ```
/// use json_reset_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    match bytes {
        [] => false,
        [b'0', _, ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}
