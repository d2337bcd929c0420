//! Java model class generation from RDL struct definitions.
//!
//! Each struct becomes one class holding its flattened field list: inherited fields first,
//! then its own, each typed through the core type mapper. Each enum becomes a Java enum so
//! fields referring to it compile.
//!
//! Union and bytes definitions get no source. Fields of those types keep the definition's
//! name, so a class of that name has to be supplied next to the generated package.

use anyhow::{Context, Result};
use rdlgen_core::text::{
    capitalize, default_literal, format_comment, left_justified, spaces, split, uncapitalize,
};
use rdlgen_core::{
    Annotations, EnumTypeDef, SchemaRegistry, StructFieldDef, StructTypeDef, Type, TypeRegistry,
    annotations_for, flattened_fields, java_type, needs_list_import, needs_map_import,
};
use serde_json::Value;

/// Column class members are indented to
const MEMBER_INDENT: usize = 4;

/// One generated Java source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaSource {
    /// Class name, also the file stem
    pub name: String,
    pub code: String,
}

/// Generates model classes for the structs of one schema
pub struct ModelGenerator<'a> {
    registry: &'a SchemaRegistry<'a>,
    package: &'a str,
    header: &'a str,
    comment_width: usize,
}

/// A field ready for rendering
struct FieldModel {
    ident: String,
    java_type: String,
    comment: Option<String>,
    hints: Annotations,
    initializer: Option<String>,
}

impl<'a> ModelGenerator<'a> {
    pub fn new(
        registry: &'a SchemaRegistry<'a>,
        package: &'a str,
        header: &'a str,
        comment_width: usize,
    ) -> Self {
        Self {
            registry,
            package,
            header,
            comment_width,
        }
    }

    /// Generate a class for every struct and an enum for every enum, in declaration order.
    ///
    /// Every other definition is skipped, unions and bytes included.
    pub fn generate_all(&self) -> Result<Vec<JavaSource>> {
        let mut sources = Vec::new();
        for ty in self.registry.types() {
            let (name, code) = match ty {
                Type::Struct(st) => {
                    let code = self.generate_class(ty, st).with_context(|| {
                        format!("Failed to generate class for struct '{}'", st.name)
                    })?;
                    (&st.name, code)
                }
                Type::Enum(en) => (&en.name, self.generate_enum(en)),
                Type::BaseType(_)
                | Type::Map(_)
                | Type::Array(_)
                | Type::Union(_)
                | Type::String(_)
                | Type::Bytes(_)
                | Type::Number(_) => continue,
            };
            sources.push(JavaSource {
                name: name.clone(),
                code,
            });
        }
        Ok(sources)
    }

    /// Generate a Java enum for an enum definition
    pub fn generate_enum(&self, en: &EnumTypeDef) -> String {
        let mut code = self.preamble();

        if let Some(comment) = &en.comment {
            code.push_str(&format_comment(comment, 0, self.comment_width));
        }
        push_hints(&mut code, 0, &en.annotations);

        code.push_str(&format!("public enum {} {{\n", en.name));
        for (i, element) in en.elements.iter().enumerate() {
            if let Some(comment) = &element.comment {
                code.push_str(&format_comment(comment, MEMBER_INDENT, self.comment_width));
            }
            let sep = if i + 1 == en.elements.len() { ";" } else { "," };
            code.push_str(&format!("{}{}{}\n", spaces(MEMBER_INDENT), element.symbol, sep));
        }
        code.push_str("}\n");

        code
    }

    /// Header and package declaration
    fn preamble(&self) -> String {
        let mut code = String::new();
        code.push_str(self.header);
        code.push('\n');
        if !self.package.is_empty() {
            code.push_str(&format!("package {};\n", self.package));
        }
        code.push('\n');
        code
    }

    /// Generate the class for one struct
    pub fn generate_class(&self, ty: &Type, st: &StructTypeDef) -> Result<String> {
        let fields = flattened_fields(self.registry, ty)?
            .into_iter()
            .map(|field| self.field_model(field))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(class = %st.name, fields = fields.len(), "rendering model class");

        let mut code = self.preamble();

        // Imports
        let types = || fields.iter().map(|f| f.java_type.as_str());
        let list = needs_list_import(types());
        let map = needs_map_import(types());
        if list {
            code.push_str("import java.util.List;\n");
        }
        if map {
            code.push_str("import java.util.Map;\n");
        }
        if list || map {
            code.push('\n');
        }

        // Class documentation
        if let Some(comment) = ty.comment() {
            code.push_str(&format_comment(comment, 0, self.comment_width));
        }
        push_hints(&mut code, 0, &st.annotations);

        code.push_str(&format!("public class {} {{\n", st.name));

        // Fields
        let width = fields
            .iter()
            .map(|f| f.java_type.chars().count())
            .max()
            .unwrap_or(0);
        for field in &fields {
            if let Some(comment) = &field.comment {
                code.push_str(&format_comment(comment, MEMBER_INDENT, self.comment_width));
            }
            push_hints(&mut code, MEMBER_INDENT, &field.hints);
            code.push_str(&format!(
                "{}private {} {}",
                spaces(MEMBER_INDENT),
                left_justified(&field.java_type, width),
                field.ident
            ));
            if let Some(init) = &field.initializer {
                code.push_str(&format!(" = {init}"));
            }
            code.push_str(";\n");
        }

        // Default constructor
        code.push_str(&format!("\n    public {}() {{ }}\n", st.name));

        // Getters and fluent setters
        for field in &fields {
            let accessor = capitalize(&field.ident);
            code.push_str(&format!(
                "\n    public {} get{}() {{ return {}; }}\n",
                field.java_type, accessor, field.ident
            ));
            code.push_str(&format!(
                "\n    public {} set{}({} {}) {{ this.{} = {}; return this; }}\n",
                st.name, accessor, field.java_type, field.ident, field.ident, field.ident
            ));
        }

        code.push_str("}\n");

        Ok(code)
    }

    fn field_model(&self, field: &StructFieldDef) -> Result<FieldModel> {
        let java_type = java_type(
            self.registry,
            &field.type_ref,
            field.optional,
            field.items.as_deref(),
            field.keys.as_deref(),
        )
        .with_context(|| format!("Failed to map field '{}'", field.name))?;

        let enum_type = matches!(
            self.registry.find_type(&field.type_ref),
            Some(Type::Enum(_))
        );
        let initializer = field
            .default
            .as_ref()
            .and_then(|value| match value {
                Value::String(symbol) if enum_type => Some(format!("{java_type}.{symbol}")),
                _ => initializer(value, &java_type),
            });

        Ok(FieldModel {
            ident: uncapitalize(&field.name),
            java_type,
            comment: field.comment.clone(),
            hints: annotations_for(&field.type_ref, self.registry.types()),
            initializer,
        })
    }
}

/// Java initializer expression for a declared default, if it has one
fn initializer(value: &Value, java_type: &str) -> Option<String> {
    let literal = default_literal(Some(value));
    if literal == "null" {
        return None;
    }
    let suffix = match (value, java_type) {
        (Value::Number(_), "long" | "Long") => "L",
        (Value::Number(_), "float" | "Float") => "f",
        (Value::Number(_), "double" | "Double") => "d",
        _ => "",
    };
    Some(format!("{literal}{suffix}"))
}

/// Render annotations as `// key: value` lines, one line per comma-separated value piece
fn push_hints(code: &mut String, left_col: usize, hints: &Annotations) {
    let indent = spaces(left_col);
    for (key, value) in hints {
        let pieces = split(value, ',');
        if pieces.is_empty() {
            code.push_str(&format!("{indent}// {key}\n"));
        }
        for piece in pieces {
            code.push_str(&format!("{indent}// {key}: {}\n", piece.trim()));
        }
    }
}
