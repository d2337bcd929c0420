//! Java output layout: packages, paths, headers and writers

use anyhow::{Context, Result};
use rdlgen_core::Schema;
use rdlgen_core::text::camel_snake_to_kebab;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sub-package holding every generated source
pub const GENERATED_PACKAGE: &str = "generated";

/// Output root used when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "./target/generated-sources/java";

/// Java source file extension
pub const JAVA_EXT: &str = ".java";

/// Output target meaning "write to stdout"
pub const STDOUT_TARGET: &str = "-";

/// Header placed at the top of every generated file
pub fn generation_header(banner: &str) -> String {
    format!(
        "//\n// This file is generated by {banner}\n// Please DO NOT edit directly; changes could be overwritten.\n//"
    )
}

/// Package the user owns: the explicit namespace, else the schema namespace
pub fn base_package(schema: &Schema, namespace: &str) -> String {
    if namespace.is_empty() {
        schema.namespace.clone()
    } else {
        namespace.to_string()
    }
}

/// Package generated sources are written to
pub fn generated_package(schema: &Schema, namespace: &str) -> String {
    let base = base_package(schema, namespace);
    if base.is_empty() {
        GENERATED_PACKAGE.to_string()
    } else {
        format!("{base}.{GENERATED_PACKAGE}")
    }
}

/// Root resource path for the schema.
///
/// # Examples
///
/// ```
/// use rdlgen_cli::output::root_path;
/// use rdlgen_core::Schema;
///
/// let schema = Schema::from_json(r#"{"name": "ContactList", "version": 2}"#).unwrap();
/// assert_eq!(root_path(&schema, ""), "/contact-list/v2");
/// assert_eq!(root_path(&schema, "/api"), "/api/v2");
/// assert_eq!(root_path(&schema, "/"), "/v2");
/// ```
pub fn root_path(schema: &Schema, base_path: &str) -> String {
    match (base_path, schema.version) {
        ("/", Some(version)) => format!("/v{version}"),
        ("", _) if !schema.name.is_empty() => {
            let name = camel_snake_to_kebab(&schema.name);
            match schema.version {
                Some(version) => format!("/{name}/v{version}"),
                None => format!("/{name}"),
            }
        }
        ("", _) => "/".to_string(),
        (base, Some(version)) => format!("{base}/v{version}"),
        (base, None) => base.to_string(),
    }
}

/// Directory for `package` under `output_dir`, created if missing
pub fn generation_dir(output_dir: &str, package: &str) -> Result<PathBuf> {
    let root = if output_dir.is_empty() {
        DEFAULT_OUTPUT_DIR
    } else {
        output_dir
    };
    let mut dir = PathBuf::from(root);
    if !package.is_empty() {
        dir.extend(package.split('.'));
    }

    fs::create_dir_all(&dir).with_context(|| format!("Failed to create directory: {dir:?}"))?;
    Ok(dir)
}

/// Where one source file goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Source name without extension
    pub name: String,
    /// File path, or `None` for stdout
    pub path: Option<PathBuf>,
}

/// Resolve the output file for `name` under `out`.
///
/// An `out` ending in `ext` names the file itself. An empty `out` means stdout. A `name`
/// already carrying `ext` is not given it twice, and an empty one becomes `anonymous`.
pub fn output_path_info(out: &str, name: &str, ext: &str) -> OutputTarget {
    let (dir, name) = match out.strip_suffix(ext) {
        Some(_) if !ext.is_empty() => {
            let path = Path::new(out);
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let stem = path
                .file_name()
                .and_then(|f| f.to_str())
                .and_then(|f| f.strip_suffix(ext))
                .unwrap_or_default()
                .to_string();
            (Some(dir), stem)
        }
        _ if out.is_empty() => (None, name.to_string()),
        _ => (Some(PathBuf::from(out)), name.to_string()),
    };

    let name = match name.strip_suffix(ext) {
        Some(stem) if !ext.is_empty() => stem.to_string(),
        _ => name,
    };
    let name = if name.is_empty() {
        "anonymous".to_string()
    } else {
        name
    };
    let path = dir.map(|dir| dir.join(format!("{name}{ext}")));

    OutputTarget { name, path }
}

/// Open a buffered writer for the target
pub fn output_writer(target: &OutputTarget) -> Result<Box<dyn Write>> {
    match &target.path {
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {path:?}"))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
