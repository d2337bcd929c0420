//! Command implementations: `java`, `types` and `check`

use crate::artifacts::{TemplateContext, render_artifacts};
use crate::config::Config;
use crate::java::{JavaSource, ModelGenerator};
use crate::output::{
    JAVA_EXT, STDOUT_TARGET, generated_package, generation_dir, generation_header,
    output_path_info, output_writer, root_path,
};
use anyhow::{Context, Result};
use rdlgen_core::text::left_justified;
use rdlgen_core::{
    Schema, SchemaRegistry, Type, TypeRegistry, annotations_for, flattened_fields, java_type,
};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for the java command
#[derive(Debug, Clone, Default)]
pub struct JavaOptions {
    pub schema: PathBuf,
    /// Output root, `-` for stdout; the config value when `None`
    pub output: Option<String>,
    /// Package namespace; the config value when `None`
    pub namespace: Option<String>,
    pub no_artifacts: bool,
}

/// What the java command produced
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub package: String,
    /// Files written, empty when streaming to stdout
    pub files: Vec<PathBuf>,
    /// Number of sources generated
    pub sources: usize,
}

/// Load an RDL schema from its JSON form
pub fn load_schema(path: &Path) -> Result<Schema> {
    Schema::from_file(path).with_context(|| format!("Failed to load schema: {path:?}"))
}

/// Java command implementation
pub fn run_java(opts: &JavaOptions, config: &Config) -> Result<GenerationReport> {
    let schema = load_schema(&opts.schema)?;
    let registry = SchemaRegistry::new(&schema);

    let namespace = opts.namespace.as_deref().unwrap_or(&config.java.namespace);
    let package = generated_package(&schema, namespace);
    let header = generation_header(&config.generator.banner);

    let generator = ModelGenerator::new(&registry, &package, &header, config.java.comment_width);
    let mut sources = generator.generate_all()?;
    if config.java.generate_artifacts && !opts.no_artifacts {
        sources.extend(render_artifacts(&TemplateContext::new(&header, &package)));
    }

    let out = opts.output.as_deref().unwrap_or(&config.java.output_dir);
    let dir = if out == STDOUT_TARGET {
        String::new()
    } else {
        generation_dir(out, &package)?
            .to_string_lossy()
            .into_owned()
    };

    let mut files = Vec::new();
    for source in &sources {
        if let Some(path) = write_source(&dir, source)? {
            files.push(path);
        }
    }
    tracing::info!(package = %package, sources = sources.len(), "java generation complete");

    Ok(GenerationReport {
        package,
        files,
        sources: sources.len(),
    })
}

fn write_source(dir: &str, source: &JavaSource) -> Result<Option<PathBuf>> {
    let target = output_path_info(dir, &source.name, JAVA_EXT);
    let mut writer = output_writer(&target)?;
    writer
        .write_all(source.code.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write {}", target.name))?;

    match &target.path {
        Some(path) => tracing::info!(file = %path.display(), "wrote source"),
        None => tracing::debug!(name = %target.name, "wrote source to stdout"),
    }
    Ok(target.path)
}

/// Types command implementation: the flattened, mapped field table of one struct
pub fn run_types(schema_path: &Path, type_name: &str) -> Result<String> {
    let schema = load_schema(schema_path)?;
    let registry = SchemaRegistry::new(&schema);

    let ty = registry.resolve(type_name)?;
    if !matches!(ty, Type::Struct(_)) {
        anyhow::bail!("'{}' is a {}, not a struct", type_name, ty.variant_name());
    }
    let fields = flattened_fields(&registry, ty)?;

    let mut rows = Vec::with_capacity(fields.len());
    for field in &fields {
        let mapped = java_type(
            &registry,
            &field.type_ref,
            field.optional,
            field.items.as_deref(),
            field.keys.as_deref(),
        )
        .with_context(|| format!("Failed to map field '{}'", field.name))?;
        rows.push((field, mapped));
    }

    let name_width = rows.iter().map(|(f, _)| f.name.len()).max().unwrap_or(0);
    let type_width = rows.iter().map(|(_, t)| t.len()).max().unwrap_or(0);

    let mut table = format!("{} ({} fields)\n", type_name, rows.len());
    for (field, mapped) in &rows {
        let mut line = format!(
            "  {} {}",
            left_justified(&field.name, name_width),
            left_justified(mapped, type_width)
        );
        if field.optional {
            line.push_str(" optional");
        }
        for (key, value) in annotations_for(&field.type_ref, registry.types()) {
            line.push_str(&format!(" {key}={value}"));
        }
        table.push_str(line.trim_end());
        table.push('\n');
    }

    Ok(table)
}

/// Result of checking a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: String,
    pub types: usize,
    pub structs: usize,
    pub fields: usize,
    pub package: String,
    pub root_path: String,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Schema: {}", self.name)?;
        writeln!(f, "✓ Types: {}", self.types)?;
        writeln!(f, "✓ Structs: {} ({} fields)", self.structs, self.fields)?;
        writeln!(f, "✓ Package: {}", self.package)?;
        write!(f, "✓ Root path: {}", self.root_path)
    }
}

/// Check command implementation: resolve every type and every struct field
pub fn run_check(schema_path: &Path, config: &Config) -> Result<CheckReport> {
    let schema = load_schema(schema_path)?;
    let registry = SchemaRegistry::new(&schema);

    let mut fields = 0;
    for ty in registry.types() {
        java_type(&registry, ty.name(), false, None, None)
            .with_context(|| format!("Failed to resolve type '{}'", ty.name()))?;

        if let Type::Struct(st) = ty {
            let flattened = flattened_fields(&registry, ty)
                .with_context(|| format!("Failed to flatten struct '{}'", st.name))?;
            for field in &flattened {
                java_type(
                    &registry,
                    &field.type_ref,
                    field.optional,
                    field.items.as_deref(),
                    field.keys.as_deref(),
                )
                .with_context(|| format!("Failed to map field '{}.{}'", st.name, field.name))?;
            }
            fields += flattened.len();
        }
    }

    Ok(CheckReport {
        name: schema.name.clone(),
        types: schema.types.len(),
        structs: schema.structs().count(),
        fields,
        package: generated_package(&schema, &config.java.namespace),
        root_path: root_path(&schema, &config.java.base_path),
    })
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
