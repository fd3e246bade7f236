//! Main code generator module.

use prost_types::compiler::code_generator_response::File;
use prost_types::FileDescriptorProto;
use tracing::debug;

use crate::args::{options_from_opts, Options};
use crate::emitter::{emit_file, NoopServiceEmitter, ServiceEmitter};
use crate::names::output_base_name;
use crate::namespace::resolve_namespace;

/// OMGPP C# binding generator.
///
/// Holds the output naming options and the service emission seam; everything
/// else is pure functions over the descriptors.
pub struct Generator {
    options: Options,
    services: Box<dyn ServiceEmitter>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Generator {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            services: Box::new(NoopServiceEmitter),
        }
    }

    /// Create a new generator from a list of options, as given by protoc
    /// directly
    pub fn new_from_opts(opts: Vec<String>) -> (Self, Vec<String>) {
        let (options, leftovers) = options_from_opts(opts);
        (Self::new(options), leftovers)
    }

    /// Swap in a real RPC stub emitter.
    pub fn with_service_emitter(mut self, services: Box<dyn ServiceEmitter>) -> Self {
        self.services = services;
        self
    }

    /// Generate one C# file per descriptor file, batched by resolved
    /// namespace. Batching affects processing order only; every input file
    /// yields exactly one output file.
    pub fn generate(&self, files: Vec<FileDescriptorProto>) -> Vec<File> {
        let mut generated = Vec::new();
        for (namespace, members) in group_by_namespace(files) {
            for file in &members {
                debug!(
                    file = file.name(),
                    package = file.package(),
                    namespace = namespace.as_deref().unwrap_or("<global>"),
                    messages = file.message_type.len(),
                    services = file.service.len(),
                    "generating"
                );
                generated.push(self.assemble(namespace.as_deref(), file));
            }
        }
        generated
    }

    fn assemble(&self, namespace: Option<&str>, file: &FileDescriptorProto) -> File {
        let mut content = String::new();
        emit_file(&mut content, namespace, file, self.services.as_ref());
        File {
            name: Some(format!(
                "{}.{}.{}",
                output_base_name(file.name()),
                self.options.file_suffix,
                self.options.file_extension
            )),
            content: Some(content),
            ..Default::default()
        }
    }
}

/// Batch files by resolved namespace, as a fold into an insertion-ordered
/// list: namespaces appear in first-seen order, files keep their original
/// order within each batch.
pub fn group_by_namespace(
    files: Vec<FileDescriptorProto>,
) -> Vec<(Option<String>, Vec<FileDescriptorProto>)> {
    files.into_iter().fold(Vec::new(), |mut groups, file| {
        let namespace = resolve_namespace(&file);
        match groups.iter_mut().find(|(key, _)| *key == namespace) {
            Some((_, members)) => members.push(file),
            None => groups.push((namespace, vec![file])),
        }
        groups
    })
}
