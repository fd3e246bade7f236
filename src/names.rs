//! Name transformations from proto conventions to C# conventions.

/// Uppercase exactly the first character, leaving the rest untouched.
///
/// Not title-casing: `"fooBAR"` becomes `"FooBAR"`. Message IDs are derived
/// from names built with this rule, so the exact behavior is load-bearing for
/// compatibility with already-shipped generated code.
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// C# name for a message: underscore-separated segments, each with its first
/// letter uppercased, concatenated. `"order_item"` becomes `"OrderItem"`.
pub fn csharp_name(raw: &str) -> String {
    raw.split('_').map(capitalize_first).collect()
}

/// Full capitalization: first character uppercased, the remainder lowercased.
/// Only used for output file names, which go through stronger normalization
/// than type names do.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Base of the output file name derived from the proto source path.
///
/// The last dot-delimited segment is the extension and is dropped; any other
/// segments are concatenated, then each underscore-separated part is
/// capitalized. A path without any dot has no base at all and yields an empty
/// string rather than falling back to the whole name.
pub fn output_base_name(source_name: &str) -> String {
    let segments: Vec<&str> = source_name.split('.').collect();
    let base = if segments.len() > 1 {
        segments[..segments.len() - 1].concat()
    } else {
        String::new()
    };
    base.split('_').map(capitalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_only_touches_the_first_char() {
        assert_eq!(capitalize_first("order"), "Order");
        assert_eq!(capitalize_first("fooBAR"), "FooBAR");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first("x"), "X");
    }

    #[test]
    fn capitalize_first_is_idempotent() {
        for raw in ["order", "fooBAR", "", "a_b", "HTTPServer"] {
            let once = capitalize_first(raw);
            assert_eq!(capitalize_first(&once), once);
        }
    }

    #[test]
    fn capitalize_first_of_empty_is_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn csharp_name_joins_capitalized_segments() {
        assert_eq!(csharp_name("order_item"), "OrderItem");
        assert_eq!(csharp_name("order"), "Order");
        assert_eq!(csharp_name("already_PascalCase"), "AlreadyPascalCase");
    }

    #[test]
    fn csharp_name_drops_empty_segments() {
        assert_eq!(csharp_name("a__b"), "AB");
        assert_eq!(csharp_name("_leading"), "Leading");
        assert_eq!(csharp_name("trailing_"), "Trailing");
        assert_eq!(csharp_name(""), "");
    }

    #[test]
    fn output_base_name_drops_the_extension() {
        assert_eq!(output_base_name("my_service.proto"), "MyService");
        assert_eq!(output_base_name("order.proto"), "Order");
    }

    #[test]
    fn output_base_name_without_a_dot_is_empty() {
        assert_eq!(output_base_name("nofileextension"), "");
        assert_eq!(output_base_name(""), "");
    }

    #[test]
    fn output_base_name_concatenates_inner_dots() {
        assert_eq!(output_base_name("shop.orders.proto"), "Shoporders");
    }

    #[test]
    fn output_base_name_lowercases_segment_tails() {
        assert_eq!(output_base_name("MY_SERVICE.proto"), "MyService");
    }
}
