//! Fixed boilerplate classes shared by generated services
//!
//! The sources are embedded templates with `{{header}}` and `{{package}}` placeholders.

use crate::java::JavaSource;

mod templates {
    pub const RESOURCE_ERROR: &str = include_str!("../templates/java/ResourceError.java.tmpl");
    pub const RESOURCE_EXCEPTION: &str =
        include_str!("../templates/java/ResourceException.java.tmpl");
    pub const SERVICE_RESOURCE_ERROR: &str =
        include_str!("../templates/java/ServiceResourceError.java.tmpl");
    pub const ERROR_BODY: &str = include_str!("../templates/java/ErrorBody.java.tmpl");
    pub const ERROR_DETAIL: &str = include_str!("../templates/java/ErrorDetail.java.tmpl");
}

/// Every artifact as (class name, template)
pub const ARTIFACTS: [(&str, &str); 5] = [
    ("ResourceError", templates::RESOURCE_ERROR),
    ("ResourceException", templates::RESOURCE_EXCEPTION),
    ("ServiceResourceError", templates::SERVICE_RESOURCE_ERROR),
    ("ErrorBody", templates::ERROR_BODY),
    ("ErrorDetail", templates::ERROR_DETAIL),
];

/// Values substituted into artifact templates
pub struct TemplateContext {
    /// Generated file header
    header: String,
    /// `package x.y;` declaration line, empty for the default package
    package: String,
}

impl TemplateContext {
    pub fn new(header: &str, package: &str) -> Self {
        let package = if package.is_empty() {
            String::new()
        } else {
            format!("package {package};\n")
        };
        Self {
            header: header.to_string(),
            package,
        }
    }

    /// Apply placeholder substitutions to template content
    pub fn apply(&self, template: &str) -> String {
        template
            .replace("{{header}}", &self.header)
            .replace("{{package}}", &self.package)
    }
}

/// Render every artifact for the given context
pub fn render_artifacts(ctx: &TemplateContext) -> Vec<JavaSource> {
    ARTIFACTS
        .iter()
        .map(|(name, template)| JavaSource {
            name: (*name).to_string(),
            code: ctx.apply(template),
        })
        .collect()
}

#[cfg(test)]
#[path = "artifacts/artifacts_tests.rs"]
mod artifacts_tests;
