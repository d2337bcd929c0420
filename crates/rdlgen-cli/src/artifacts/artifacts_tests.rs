#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn ctx() -> TemplateContext {
    TemplateContext::new("// header", "com.example.generated")
}

#[test]
fn TemplateContext___apply___replaces_all_placeholders() {
    let out = ctx().apply("{{header}}\n{{package}}\nclass X {}\n{{package}}");

    assert_eq!(
        out,
        "// header\npackage com.example.generated;\n\nclass X {}\npackage com.example.generated;\n"
    );
}

#[test]
fn TemplateContext___apply___empty_package_leaves_no_declaration() {
    let ctx = TemplateContext::new("// header", "");

    assert_eq!(ctx.apply("{{header}}\n{{package}}\nclass X {}\n"), "// header\n\nclass X {}\n");
}

#[test]
fn render_artifacts___renders_every_template() {
    let sources = render_artifacts(&ctx());

    let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "ResourceError",
            "ResourceException",
            "ServiceResourceError",
            "ErrorBody",
            "ErrorDetail"
        ]
    );
    for source in &sources {
        assert!(source.code.starts_with("// header\npackage com.example.generated;\n"));
        assert!(!source.code.contains("{{"), "unrendered placeholder in {}", source.name);
    }
}

#[test_case("ResourceError", "public class ResourceError {" ; "resource error")]
#[test_case("ResourceException", "public class ResourceException extends RuntimeException {" ; "resource exception")]
#[test_case("ServiceResourceError", "private ErrorBody error;" ; "service resource error")]
#[test_case("ErrorBody", "private List<ErrorDetail> detail;" ; "error body")]
#[test_case("ErrorDetail", "private String invalidValue;" ; "error detail")]
fn render_artifacts___class_declared(name: &str, expected: &str) {
    let sources = render_artifacts(&ctx());

    let source = sources.iter().find(|s| s.name == name).unwrap();
    assert!(source.code.contains(expected));
}

#[test]
fn render_artifacts___resource_exception_maps_codes() {
    let sources = render_artifacts(&ctx());
    let source = sources
        .iter()
        .find(|s| s.name == "ResourceException")
        .unwrap();

    assert!(source.code.contains("public final static int NOT_FOUND = 404;"));
    assert!(source.code.contains("case NOT_FOUND: return \"Not Found\";"));
    assert!(source.code.contains("public static String codeToString(int code)"));
}
