/// Whether a Go identifier is exported (starts with an upper-case letter).
///
/// # Examples
/// ```
/// use flowgen_core::utils::is_exported;
/// assert!(is_exported("Person"));
/// assert!(!is_exported("person"));
/// assert!(!is_exported("_Person"));
/// ```
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Whether `name` can be written as a bare property key.
///
/// Accepts ASCII identifiers with `$` and `_`; anything else needs quoting.
///
/// # Examples
/// ```
/// use flowgen_core::utils::is_identifier;
/// assert!(is_identifier("first_name"));
/// assert!(is_identifier("$ref"));
/// assert!(!is_identifier("first-name"));
/// assert!(!is_identifier("9lives"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Quote a property key for output when it is not a bare identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        return name.to_owned();
    }
    let mut out = String::with_capacity(name.len() + 2);
    out.push('\'');
    for c in name.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
