//! Options for the protoc plugin
//!
//! Set with protoc's `--omgpp_opt`

/// Marker token inserted between the base name and the extension of every
/// generated file.
pub const DEFAULT_FILE_SUFFIX: &str = "Omgpp";

/// Extension of every generated file.
pub const DEFAULT_FILE_EXTENSION: &str = "cs";

/// Output naming knobs, filled from the plugin parameters.
#[derive(Debug, Clone)]
pub struct Options {
    pub file_suffix: String,
    pub file_extension: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_suffix: DEFAULT_FILE_SUFFIX.to_owned(),
            file_extension: DEFAULT_FILE_EXTENSION.to_owned(),
        }
    }
}

/// Take a list of arguments, in the form of key=value, and return the
/// leftover arguments
pub fn options_from_opts(opts: Vec<String>) -> (Options, Vec<String>) {
    let mut options = Options::default();
    let mut leftovers = Vec::new();

    for opt in opts {
        match opt.splitn(2, '=').collect::<Vec<_>>().as_slice() {
            [] | [""] => (),
            ["file_suffix", v] => options.file_suffix = v.to_string(),
            ["file_extension", v] => options.file_extension = v.to_string(),
            _ => leftovers.push(opt),
        }
    }

    (options, leftovers)
}

/// Split protoc's parameter string on `sep`, except where the separator is
/// escaped with a backslash.
pub fn split_parameter(parameter: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escape = false;

    for c in parameter.chars() {
        if escape {
            escape = false;
            if c != sep {
                current.push('\\');
            }
            current.push(c);
        } else if c == '\\' {
            escape = true;
        } else if c == sep {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    if escape {
        current.push('\\');
    }
    parts.push(current);

    parts
}
