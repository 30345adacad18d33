//! Identifier normalization for namespace re-exports.

/// Turn a directory name into a legal TypeScript identifier.
///
/// Every character that cannot appear in an identifier becomes an
/// underscore, so `data-io` is re-exported as `data_io`. A leading digit
/// gets an underscore prefix.
pub fn module_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    ident
}
