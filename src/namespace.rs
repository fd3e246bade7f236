//! Output namespace resolution.

use itertools::Itertools;
use prost_types::FileDescriptorProto;

use crate::names::capitalize_first;

/// Effective C# namespace for a file.
///
/// A non-empty package gives the default: every dot-separated segment with
/// its first letter uppercased. A non-empty `csharp_namespace` option always
/// replaces the default, whatever the package says. With neither, the file's
/// types live in the global namespace and `None` is returned.
pub fn resolve_namespace(file: &FileDescriptorProto) -> Option<String> {
    let mut namespace = None;
    if !file.package().is_empty() {
        namespace = Some(file.package().split('.').map(capitalize_first).join("."));
    }
    if let Some(options) = &file.options {
        if !options.csharp_namespace().is_empty() {
            namespace = Some(options.csharp_namespace().to_owned());
        }
    }
    namespace
}
