//! Deterministic message identifiers.
//!
//! The OMGPP runtime dispatches incoming frames on a numeric ID that every
//! peer derives from the message's fully qualified C# name, so regenerating
//! the ID for an existing message must produce the value already compiled
//! into deployed binaries. The sum below is trivially collidable; call sites
//! must not rely on uniqueness across arbitrary names.

use prost_types::{DescriptorProto, FileDescriptorProto};

use crate::names::csharp_name;

/// Package placeholder for files that declare none.
const EMPTY_PACKAGE: &str = "EMPTY";

/// Weighted code-point sum of `name`: each code point multiplied by its
/// 0-indexed position. The character at position 0 never contributes.
pub fn message_id(name: &str) -> i64 {
    name.chars()
        .enumerate()
        .map(|(i, c)| c as i64 * i as i64)
        .sum()
}

/// ID for a message declared in `file`.
///
/// The qualified name is the raw package (or [`EMPTY_PACKAGE`]), a dot, and
/// the transformed message name. The raw package is used even when a
/// `csharp_namespace` override changes the emitted namespace.
pub fn message_type_id(message: &DescriptorProto, file: &FileDescriptorProto) -> i64 {
    let package = match file.package() {
        "" => EMPTY_PACKAGE,
        package => package,
    };
    message_id(&format!("{package}.{}", csharp_name(message.name())))
}

#[cfg(test)]
mod tests {
    use prost_types::FileOptions;

    use super::*;

    fn message(name: &str) -> DescriptorProto {
        DescriptorProto {
            name: Some(name.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_and_single_char_names_have_id_zero() {
        assert_eq!(message_id(""), 0);
        assert_eq!(message_id("A"), 0);
    }

    #[test]
    fn each_code_point_is_weighted_by_position() {
        assert_eq!(message_id("AB"), 66);
        assert_eq!(message_id("shop.OrderItem"), 9094);
    }

    #[test]
    fn ids_are_stable_across_calls() {
        assert_eq!(message_id("shop.OrderItem"), message_id("shop.OrderItem"));
    }

    #[test]
    fn qualified_ids_use_the_raw_package() {
        let file = FileDescriptorProto {
            package: Some("shop".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            message_type_id(&message("order_item"), &file),
            message_id("shop.OrderItem")
        );
    }

    #[test]
    fn missing_package_uses_the_placeholder() {
        let file = FileDescriptorProto::default();
        assert_eq!(
            message_type_id(&message("order_item"), &file),
            message_id("EMPTY.OrderItem")
        );
    }

    #[test]
    fn namespace_override_does_not_change_the_id() {
        let file = FileDescriptorProto {
            package: Some("shop".to_owned()),
            options: Some(FileOptions {
                csharp_namespace: Some("Custom.Ns".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            message_type_id(&message("order_item"), &file),
            message_id("shop.OrderItem")
        );
    }
}
