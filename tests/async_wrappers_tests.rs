mod common;

use common::{stub_modules, stub_project, StubAst};
use project_complexity::analyzers::JavaScriptAst;
use project_complexity::core::{AnalysisOptions, ModuleInput};
use project_complexity::errors::AnalyzerError;
use project_complexity::project::JavaScriptProjectAnalyzer;

#[tokio::test]
async fn test_analyze_async_matches_sync() {
    let analyzer = JavaScriptProjectAnalyzer::default();
    let modules = vec![ModuleInput::new(
        JavaScriptAst::parse("while (x) { x--; }").unwrap(),
        "loop.js",
    )];

    let sync = analyzer.analyze(&modules, &AnalysisOptions::new()).unwrap();
    let async_result = analyzer
        .analyze_async(&modules, &AnalysisOptions::new())
        .await
        .unwrap();

    assert_eq!(async_result, sync);
}

#[tokio::test]
async fn test_analyze_async_rejects_with_same_error() {
    let analyzer = stub_project(true, Vec::new());
    let modules = vec![ModuleInput::new(
        StubAst::failing(AnalyzerError::syntax("Unexpected token")),
        "bad.js",
    )];

    let sync_err = analyzer
        .analyze(&modules, &AnalysisOptions::new())
        .unwrap_err();
    let async_err = analyzer
        .analyze_async(&modules, &AnalysisOptions::new())
        .await
        .unwrap_err();

    assert_eq!(async_err.to_string(), sync_err.to_string());
    assert_eq!(async_err.category(), sync_err.category());
    assert_eq!(async_err.to_string(), "bad.js: Unexpected token");
}

#[tokio::test]
async fn test_process_results_async_matches_sync() {
    let analyzer = stub_project(true, Vec::new());
    let skip = AnalysisOptions::new().with("skipCalculation", true);
    let partial = analyzer.analyze(&stub_modules(&["a", "b"]), &skip).unwrap();

    let sync = analyzer
        .process_results(partial.clone(), &AnalysisOptions::new())
        .unwrap();
    let async_result = analyzer
        .process_results_async(partial, &AnalysisOptions::new())
        .await
        .unwrap();

    assert_eq!(async_result, sync);
    assert_eq!(async_result.metrics.unwrap().cyclomatic, 1.5);
}

#[tokio::test]
async fn test_analyze_async_invalid_argument() {
    let analyzer = stub_project(true, Vec::new());
    let err = analyzer
        .analyze_async(&[ModuleInput::new(StubAst::ok(1), " ")], &AnalysisOptions::new())
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
}
