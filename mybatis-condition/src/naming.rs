/// Convert a camelCase field name into its snake_case column name.
///
/// An uppercase letter directly after a lowercase one starts a new word; all
/// uppercase letters are lowercased. Names that are already snake_case pass
/// through unchanged.
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() {
            if prev.is_some_and(char::is_lowercase) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}
