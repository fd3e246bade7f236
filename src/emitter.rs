//! C# source emission.
//!
//! Everything here appends to a plain `String` buffer. The exact bytes
//! matter: generated files get committed downstream, so indentation and
//! spacing must stay stable across releases.

use prost_types::{DescriptorProto, FileDescriptorProto, ServiceDescriptorProto};

use crate::ids::message_type_id;
use crate::names::csharp_name;

/// Extension point for turning service declarations into RPC stubs.
///
/// The default body emits nothing. Per-file assembly still calls it once per
/// declared service, so a real implementation slots in without changing the
/// assembly contract.
pub trait ServiceEmitter {
    fn emit_service(
        &self,
        buf: &mut String,
        service: &ServiceDescriptorProto,
        file: &FileDescriptorProto,
    ) {
        let _ = (buf, service, file);
    }
}

/// Built-in emitter that leaves services unexpanded.
#[derive(Debug, Default)]
pub struct NoopServiceEmitter;

impl ServiceEmitter for NoopServiceEmitter {}

/// Fixed usings shared by every generated file: the OMGPP capability
/// interfaces and the protobuf runtime.
pub fn emit_file_header(buf: &mut String) {
    buf.push_str("using global::OmgppSharpCore.Interfaces;\n");
    buf.push_str("using Google.Protobuf;\n");
}

/// One message binding: the deterministic ID and the parser handle.
///
/// No field members are emitted here. The declaration is a partial class, and
/// the stock C# protobuf generator contributes the other half; per-field code
/// would be inserted inside this block without changing its shape.
pub fn emit_message(buf: &mut String, message: &DescriptorProto, file: &FileDescriptorProto) {
    let name = csharp_name(message.name());
    let id = message_type_id(message, file);
    buf.push_str(&format!(
        "public sealed partial class {name} : IOmgppMessage, IOmgppMessage<{name}> \n"
    ));
    buf.push_str("{\n");
    buf.push_str(&format!("\tpublic static long MessageId {{get;}} = {id};\n"));
    buf.push_str(&format!(
        "\tpublic static MessageParser<{name}> MessageParser => Parser;\n"
    ));
    buf.push_str("}\n");
}

/// Run `body` inside a `namespace` block, or bare when there is none.
pub fn with_namespace<F>(buf: &mut String, namespace: Option<&str>, body: F)
where
    F: FnOnce(&mut String),
{
    match namespace {
        Some(namespace) if !namespace.is_empty() => {
            buf.push_str(&format!("namespace {namespace}\n"));
            buf.push_str("{\n");
            body(buf);
            buf.push_str("}\n");
        }
        _ => body(buf),
    }
}

/// Full rendering of one descriptor file: header, then the namespace-wrapped
/// messages and services in declaration order.
pub fn emit_file(
    buf: &mut String,
    namespace: Option<&str>,
    file: &FileDescriptorProto,
    services: &dyn ServiceEmitter,
) {
    emit_file_header(buf);
    with_namespace(buf, namespace, |buf| {
        for message in &file.message_type {
            emit_message(buf, message, file);
        }
        for service in &file.service {
            services.emit_service(buf, service, file);
        }
    });
}
