//! # protoc-gen-omgpp
//!
//! Library backing the protoc plugin for the OMGPP C# runtime.
//!
//! The plugin emits one C# file per `.proto` input. Each message gets a
//! `sealed partial class` carrying a deterministic `MessageId` and a
//! `MessageParser` handle; the stock C# protobuf generator provides the other
//! half of the partial class. Per-field members and RPC stubs are seams, not
//! yet filled in.
//!
//! Look at the binary implementation for usage.

mod args;
mod emitter;
mod generator;
mod ids;
mod names;
mod namespace;

pub use args::{
    split_parameter, Options, DEFAULT_FILE_EXTENSION, DEFAULT_FILE_SUFFIX,
};
pub use emitter::{NoopServiceEmitter, ServiceEmitter};
pub use generator::{group_by_namespace, Generator};
pub use ids::{message_id, message_type_id};
pub use names::{capitalize_first, csharp_name, output_base_name};
pub use namespace::resolve_namespace;
