use std::io::{Read, Write};

use anyhow::{bail, Context, Result};
use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use tracing_subscriber::EnvFilter;

use protoc_gen_omgpp::{split_parameter, Generator};

fn main() -> Result<()> {
    // stdout carries the serialized response, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read request from stdin")?;
    let req = CodeGeneratorRequest::decode(buf.as_slice())
        .context("Failed to decode CodeGeneratorRequest")?;

    let (generator, opts) = Generator::new_from_opts(split_parameter(req.parameter(), ','));
    if !opts.is_empty() {
        bail!("Unknown opts:\n - {}", opts.join("\n - "));
    }

    // protoc hands over the transitive import closure; only the files named
    // in the request produce output.
    let mut files = req.proto_file;
    files.retain(|file| req.file_to_generate.iter().any(|name| name == file.name()));

    let res = CodeGeneratorResponse {
        file: generator.generate(files),
        ..Default::default()
    };

    let mut out = Vec::new();
    res.encode(&mut out).context("Failed to serialize response")?;
    std::io::stdout()
        .write_all(&out)
        .context("Failed to write response to stdout")?;

    Ok(())
}
