pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Answer cells additionally swap spaces for hyphens so "High Unprotected"
/// lines up with the survey token "high-unprotected".
pub(crate) fn normalize_value(value: &str) -> String {
    normalize_header(value).replace(' ', "-")
}

#[cfg(test)]
pub(crate) fn normalize_header_for_tests(value: &str) -> String {
    normalize_header(value)
}

#[cfg(test)]
pub(crate) fn normalize_value_for_tests(value: &str) -> String {
    normalize_value(value)
}
