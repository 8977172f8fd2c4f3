use file_falcon::{ErrorKind, ExtensionCatalog, FalconError, OperationConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn source_must_exist() {
    let td = tempdir().unwrap();
    let err = OperationConfig::new(td.path().join("missing"), td.path(), "PDF", [".pdf"]).unwrap_err();
    assert!(matches!(err, FalconError::SourceNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("Source folder does not exist"));
}

#[test]
fn dest_must_be_a_directory() {
    let td = tempdir().unwrap();
    let file = td.path().join("file.txt");
    fs::write(&file, b"x").unwrap();
    let err = OperationConfig::new(td.path(), &file, "PDF", [".pdf"]).unwrap_err();
    assert!(matches!(err, FalconError::NotADirectory { label: "destination", .. }));
}

#[test]
fn types_must_not_be_empty_after_normalization() {
    let td = tempdir().unwrap();
    let err = OperationConfig::new(td.path(), td.path(), "PDF", ["", " ", "."]).unwrap_err();
    assert!(matches!(err, FalconError::NoTypesSelected));
    assert_eq!(err.code(), 20);
}

#[test]
fn category_must_be_a_single_folder_name() {
    let td = tempdir().unwrap();
    for bad in ["", "..", "a/b", "x\\y"] {
        let err = OperationConfig::new(td.path(), td.path(), bad, [".pdf"]).unwrap_err();
        assert!(matches!(err, FalconError::InvalidCategoryName(_)), "{bad:?}");
    }
}

#[test]
fn paths_are_canonicalized() {
    let td = tempdir().unwrap();
    let nested = td.path().join("in");
    fs::create_dir(&nested).unwrap();
    let dotted = nested.join("..").join("in");
    let cfg = OperationConfig::new(&dotted, td.path(), "PDF", [".pdf"]).unwrap();
    assert_eq!(cfg.source(), dunce::canonicalize(&nested).unwrap());
}

#[test]
fn for_category_is_case_insensitive() {
    let td = tempdir().unwrap();
    let cfg = OperationConfig::for_category(
        td.path(),
        td.path(),
        ExtensionCatalog::builtin(),
        "image all",
        &[],
    )
    .unwrap();
    assert_eq!(cfg.category(), "Image All");
    assert!(cfg.selected_types().contains(".jpg"));
    assert!(cfg.selected_types().contains(".cr2"));
}
