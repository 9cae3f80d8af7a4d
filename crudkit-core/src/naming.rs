//! Name normalization for free-text identifiers.
//!
//! The case converters (`to_*`) are pure string transforms and may return an
//! empty string. The named views ([`type_name`], [`table_name`],
//! [`path_segment`], [`constant_name`]) are total: they never return a blank
//! result and fall back to a fixed sentinel instead.

use std::collections::HashSet;

/// Type name used when an entity name normalizes to nothing.
pub const DEFAULT_TYPE_NAME: &str = "GeneratedEntity";

/// Table name used when an entity name normalizes to nothing.
pub const DEFAULT_TABLE_NAME: &str = "generated_table";

/// Convert arbitrary text to PascalCase (e.g., "order line" -> "OrderLine").
///
/// Every run of non-alphanumeric characters is a separator. Each chunk is
/// lowercased and then capitalized, so "firstName" becomes "Firstname".
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| capitalize(&part.to_ascii_lowercase()))
        .collect()
}

/// Convert arbitrary text to camelCase (e.g., "order line" -> "orderLine").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
    }
}

/// Convert a PascalCase or camelCase name to snake_case (e.g., "OrderLine" -> "order_line").
pub fn to_snake_case(s: &str) -> String {
    split_case_boundary(s, '_')
}

/// Convert a PascalCase or camelCase name to kebab-case (e.g., "OrderLine" -> "order-line").
pub fn to_kebab_case(s: &str) -> String {
    split_case_boundary(s, '-')
}

/// Convert arbitrary text to CONSTANT_CASE (e.g., "inProgress" -> "IN_PROGRESS").
pub fn to_constant_case(s: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_uppercase());
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.join("_")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Append "s" unless the word already ends in "s".
pub fn pluralize(s: &str) -> String {
    if s.ends_with('s') {
        s.to_string()
    } else {
        format!("{}s", s)
    }
}

/// Turn a member name into a human label (e.g., "authorId" -> "Author Id").
pub fn humanize(s: &str) -> String {
    let mut label = String::new();
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            label.push(' ');
        }
        label.push(c);
        prev = Some(c);
    }
    capitalize(&label)
}

/// Total type-name view: PascalCase, or [`DEFAULT_TYPE_NAME`] when blank.
pub fn type_name(raw: &str) -> String {
    let name = to_pascal_case(raw);
    if name.is_empty() {
        DEFAULT_TYPE_NAME.to_string()
    } else {
        name
    }
}

/// Total table-name view: snake_case, or [`DEFAULT_TABLE_NAME`] when blank.
pub fn table_name(type_name: &str) -> String {
    let name = to_snake_case(type_name);
    if name.is_empty() {
        DEFAULT_TABLE_NAME.to_string()
    } else {
        name
    }
}

/// Total URL path segment view: pluralized kebab-case of a type name.
pub fn path_segment(type_name: &str) -> String {
    let kebab = to_kebab_case(type_name);
    if kebab.is_empty() {
        pluralize(&to_kebab_case(DEFAULT_TYPE_NAME))
    } else {
        pluralize(&kebab)
    }
}

/// Constant-name view: CONSTANT_CASE, `None` when the input has no usable characters.
pub fn constant_name(raw: &str) -> Option<String> {
    let name = to_constant_case(raw);
    (!name.is_empty()).then_some(name)
}

/// Return `base`, or `base2`, `base3`, ... whichever is free, and mark it used.
pub fn unique_name(base: &str, used: &mut HashSet<String>) -> String {
    if used.insert(base.to_string()) {
        return base.to_string();
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{}{}", base, counter);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}

fn split_case_boundary(s: &str, separator: char) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            result.push(separator);
        }
        result.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name() {
        let mut used = HashSet::new();
        assert_eq!(unique_name("book", &mut used), "book");
        assert_eq!(unique_name("book", &mut used), "book2");
        used.insert("book3".to_string());
        assert_eq!(unique_name("book", &mut used), "book4");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("order  line--item"), "OrderLineItem");
        assert_eq!(to_pascal_case("firstName"), "Firstname");
        assert_eq!(to_pascal_case("  book "), "Book");
        assert_eq!(to_pascal_case("!!!"), "");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Book Title"), "bookTitle");
        assert_eq!(to_camel_case("ID"), "id");
        assert_eq!(to_camel_case("???"), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Book"), "book");
        assert_eq!(to_snake_case("OrderLine"), "order_line");
        assert_eq!(to_snake_case("HTTPRequest"), "httprequest");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("OrderLine"), "order-line");
        assert_eq!(to_kebab_case("Book"), "book");
    }

    #[test]
    fn test_to_constant_case() {
        assert_eq!(to_constant_case("active"), "ACTIVE");
        assert_eq!(to_constant_case("inProgress"), "IN_PROGRESS");
        assert_eq!(to_constant_case("in progress"), "IN_PROGRESS");
        assert_eq!(to_constant_case("ALREADY_UPPER"), "ALREADY_UPPER");
        assert_eq!(to_constant_case("--"), "");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("book"), "books");
        assert_eq!(pluralize("address"), "address");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("authorId"), "Author Id");
        assert_eq!(humanize("title"), "Title");
    }

    #[test]
    fn test_type_name_falls_back_to_sentinel() {
        assert_eq!(type_name("!!!"), DEFAULT_TYPE_NAME);
        assert_eq!(type_name(""), DEFAULT_TYPE_NAME);
        assert_eq!(type_name("library book"), "LibraryBook");
    }

    #[test]
    fn test_table_name() {
        assert_eq!(table_name("LibraryBook"), "library_book");
        assert_eq!(table_name(""), DEFAULT_TABLE_NAME);
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("LibraryBook"), "library-books");
        assert_eq!(path_segment("Address"), "address");
        assert_eq!(path_segment("Status"), "status");
        assert_eq!(path_segment(""), "generated-entitys");
    }

    #[test]
    fn test_constant_name() {
        assert_eq!(constant_name("on hold").as_deref(), Some("ON_HOLD"));
        assert_eq!(constant_name("  "), None);
    }

    #[test]
    fn test_normalization_is_total() {
        for input in ["", " ", "!!!", "---", "\t\n", "é", "a"] {
            assert!(!type_name(input).is_empty());
            assert!(!table_name(&type_name(input)).is_empty());
            assert!(!path_segment(&type_name(input)).is_empty());
            let _ = to_camel_case(input);
            let _ = to_constant_case(input);
        }
    }
}
