use file_falcon::prelude::*;
use std::path::Path;

#[test]
fn prelude_exports_expected_items() {
    // Types and functions are reachable through the prelude alone.
    let _ = Mode::Advanced;
    let _ = MatchType::ExactMatch;
    let _ = OperationType::Move;
    let _err = FalconError::NoTypesSelected;
    let _preview: fn(&OperationConfig, &mut dyn Reporter) -> FalconResult<file_falcon::PreviewMap> =
        preview;
    let _execute: fn(&OperationConfig, &mut dyn Reporter) -> FalconResult<Outcome> = execute;
    let _matches: fn(&str, &OperationConfig) -> bool = matches;
    assert!(ExtensionCatalog::builtin().get("pdf").is_some());
    assert!(!Path::new("x").as_os_str().is_empty());
}
