//! Separator splitting shared by argument payloads and email addresses.

/// Split `input` on `separator`, dropping trailing empty fields.
///
/// `"a,b,,"` yields `["a", "b"]` while `"a,,b"` keeps the inner empty
/// field. An empty input yields no fields at all.
///
/// # Example
///
/// ```
/// use address_book::domain::split_fields;
///
/// assert_eq!(split_fields("a,b,", ','), vec!["a", "b"]);
/// assert_eq!(split_fields("a,,b", ','), vec!["a", "", "b"]);
/// ```
pub fn split_fields(input: &str, separator: char) -> Vec<&str> {
    let mut fields: Vec<&str> = input.split(separator).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}
