//! Integration tests for the Python extractor
//! Testing extraction through the SourceExtractor trait

use documentate_model::{render_fragment, Entity, Markdown};
use documentate_python::{ExtractorConfig, ParserError, PythonExtractor, ReturnType, SourceExtractor};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shapes")
}

// ====================
// Discovery
// ====================

#[test]
fn test_discover_flat_directory() {
    let extractor = PythonExtractor::new();
    let files = extractor.discover_files(&fixtures()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["geometry.py", "loader.py"]);
}

#[test]
fn test_discover_recursive_skips_excluded() {
    let extractor = PythonExtractor::with_config(ExtractorConfig::default().with_recursive(true));
    let files = extractor.discover_files(&fixtures()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["geometry.py", "loader.py", "deep.py"]);
}

#[test]
fn test_discover_missing_directory() {
    let extractor = PythonExtractor::new();
    let result = extractor.discover_files(Path::new("/nonexistent/documentate"));
    assert!(matches!(result, Err(ParserError::IoError(_, _))));
}

// ====================
// End-to-End Extraction
// ====================

#[test]
fn test_extract_geometry_module() {
    let extractor = PythonExtractor::new();
    let module = extractor
        .extract_file(&fixtures().join("geometry.py"))
        .unwrap();

    assert_eq!(module.name, "geometry");
    assert_eq!(module.docstring.as_deref(), Some("Plane geometry primitives."));

    let classes: Vec<&str> = module.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(classes, vec!["Shape", "Circle"]);

    let circle = &module.classes[1];
    assert_eq!(circle.bases, vec!["Shape"]);
    assert_eq!(circle.class_variables[0].to_string(), "radius: float");

    let init = &circle.methods[0];
    assert_eq!(init.name, "__init__");
    assert_eq!(init.argument_list(), "(self, radius: float)");
    assert_eq!(init.returns, ReturnType::Unannotated);
    assert!(init.docstring.is_none());
}

#[test]
fn test_extract_async_signature() {
    let extractor = PythonExtractor::new();
    let module = extractor.extract_file(&fixtures().join("loader.py")).unwrap();
    let fetch = &module.classes[0].methods[0];
    assert!(fetch.is_async);
    assert_eq!(fetch.argument_list(), "(self, url: str, retries: int)");
    assert_eq!(fetch.returns, ReturnType::Named("bytes".to_string()));
    assert_eq!(fetch.docstring.as_deref(), Some("Fetch raw bytes."));
}

#[test]
fn test_rendered_module_fragment() {
    let extractor = PythonExtractor::new();
    let module = extractor
        .extract_file(&fixtures().join("geometry.py"))
        .unwrap();
    let text = render_fragment(Entity::Module(&module), 1, &Markdown);

    assert!(text.starts_with("# Module `geometry`\n\nPlane geometry primitives.\n\n## Classes\n\n"));
    assert!(text.contains("### Class `Shape`"));
    assert!(text.contains("##### Function: `area`"));
    assert!(text.contains("**Returns**: *unknown*"));
    assert!(!text.contains("unit_circle"));
}

#[test]
fn test_extract_directory_in_order() {
    let extractor = PythonExtractor::new();
    let files = extractor.discover_files(&fixtures()).unwrap();
    let results = extractor.extract_files(&files);
    let names: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().name)
        .collect();
    assert_eq!(names, vec!["geometry", "loader"]);
    assert_eq!(extractor.metrics().files_succeeded, 2);
}

#[test]
fn test_syntax_error_reports_location() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.py");
    fs::write(&path, "class Fine:\n    pass\n\nclass Broken(:\n    pass\n").unwrap();

    let extractor = PythonExtractor::new();
    let err = extractor.extract_file(&path).unwrap_err();
    assert_eq!(err.path(), path.as_path());
    let (line, _) = err.location().unwrap();
    assert_eq!(line, 4);
    assert!(err.to_string().starts_with("Syntax error in "));
}

#[test]
fn test_non_utf8_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.py");
    fs::write(&path, [0x63, 0x6c, 0xe9, 0x0a]).unwrap();

    let extractor = PythonExtractor::new();
    assert!(matches!(
        extractor.extract_file(&path),
        Err(ParserError::IoError(_, _))
    ));
}
