use std::path::{Path, PathBuf};

use compscan::{Analyzer, AnalyzerOptions, ComponentInfo, ExportType, Strategy, WrapperKind};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn analyze(source: &str, file: &str) -> compscan::AnalysisResult {
    Analyzer::default().analyze_source(source, Path::new(file))
}

fn names(records: &[ComponentInfo]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn test_default_function_component() {
    let result = analyze("export default function Foo() { return <div/>; }", "/src/Foo.jsx");

    assert_eq!(result.components().len(), 1);
    assert!(result.functions().is_empty());
    let foo = &result.components()[0];
    assert_eq!(foo.name, "Foo");
    assert_eq!(foo.export_type, ExportType::Default);
    assert!(foo.is_component());
    assert!(!foo.is_function());
    assert_eq!(foo.file_path, PathBuf::from("/src/Foo.jsx"));
    assert_eq!(result.main_export().unwrap().name, "Foo");
}

#[test]
fn test_named_function_without_markup() {
    let result = analyze("export function add(a,b) { return a+b; }", "math.js");

    assert!(result.components().is_empty());
    assert_eq!(result.functions().len(), 1);
    let add = &result.functions()[0];
    assert_eq!(add.name, "add");
    assert_eq!(add.export_type, ExportType::Named);
    assert_eq!(add.parameter_names, vec!["a", "b"]);
    assert!(result.main_export().is_none());
}

#[test]
fn test_connect_resolves_to_wrapped_declaration() {
    let result = analyze(
        "export default connect(mapState)(Widget); function Widget() { return <span/>; }",
        "widget.jsx",
    );

    let main = result.main_export().unwrap();
    assert_eq!(main.name, "Widget");
    assert_eq!(main.wrapper, Some(WrapperKind::Connect));
    assert!(result.find("connect").is_none());
}

#[test]
fn test_destructured_parameters_keep_order() {
    let result = analyze("export const Card = ({ a, b, ...rest }) => <div {...rest} />;", "card.jsx");
    assert_eq!(result.components()[0].parameter_names, vec!["a", "b", "rest"]);
}

#[test]
fn test_repeated_analysis_is_identical() {
    let analyzer = Analyzer::default();
    let path = fixture("Dashboard.jsx");

    let first = analyzer.analyze_file(&path);
    let second = analyzer.analyze_file(&path);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_invalid_text_synthesizes_file_name() {
    let analysis = Analyzer::default().inspect_source("const view = <div", Path::new("/app/order-list.jsx"));

    assert!(!analysis.result.is_empty());
    assert_eq!(analysis.strategy, Strategy::Synthesized);
    let main = analysis.result.main_export().unwrap();
    assert_eq!(main.name, "OrderList");
    assert!(main.is_component());
    assert!(main.parameter_names.is_empty());
}

#[test]
fn test_redeclaration_yields_one_record() {
    let source = "export function Foo() { return <a/>; }\nfunction Foo() { return 1; }";
    let result = analyze(source, "foo.jsx");

    assert_eq!(result.len(), 1);
    assert!(result.find("Foo").unwrap().is_component());
}

#[test]
fn test_exactly_one_flag_and_unique_names() {
    for file in ["Dashboard.jsx", "user-card.tsx", "legacy-panel.jsx", "broken-profile.jsx", "order-summary.jsx"] {
        let result = Analyzer::default().analyze_file(&fixture(file));
        assert!(!result.is_empty(), "{file}");

        let mut seen = std::collections::HashSet::new();
        for record in result.records() {
            assert_ne!(record.is_component(), record.is_function(), "{file}: {}", record.name);
            assert!(seen.insert(record.name.clone()), "{file}: duplicate {}", record.name);
        }
        assert!(result.records().filter(|record| record.is_default()).count() <= 1, "{file}");
    }
}

#[test]
fn test_connected_dashboard_fixture() {
    let analysis = Analyzer::default().inspect_file(&fixture("Dashboard.jsx"));
    assert_eq!(analysis.strategy, Strategy::Structural);

    let result = &analysis.result;
    assert_eq!(names(result.components()), vec!["Dashboard"]);
    assert_eq!(names(result.functions()), vec!["formatCount"]);

    let dashboard = result.main_export().unwrap();
    assert_eq!(dashboard.name, "Dashboard");
    assert_eq!(dashboard.parameter_names, vec!["user", "items", "rest"]);
    assert_eq!(dashboard.wrapper, Some(WrapperKind::Connect));
    assert!(dashboard.has_default_props);
    assert_eq!(dashboard.line_number, Some(6));

    assert_eq!(result.functions()[0].parameter_names, vec!["count", "locale"]);
    assert!(result.find("privateHelper").is_none());
    assert!(result.find("mapState").is_none());
}

#[test]
fn test_memo_typescript_fixture() {
    let analysis = Analyzer::default().inspect_file(&fixture("user-card.tsx"));
    assert_eq!(analysis.strategy, Strategy::Structural);

    let result = &analysis.result;
    let card = result.main_export().unwrap();
    assert_eq!(card.name, "UserCard");
    assert!(card.is_component());
    assert_eq!(card.wrapper, Some(WrapperKind::Memo));
    assert_eq!(card.parameter_names, vec!["name", "avatarUrl"]);

    let initials = result.find("initials").unwrap();
    assert!(initials.is_function());
    assert_eq!(initials.export_type, ExportType::Named);
    assert_eq!(initials.parameter_names, vec!["name"]);

    assert!(result.find("Size").is_none());
    assert!(result.find("UserCardProps").is_none());
}

#[test]
fn test_export_list_fixture() {
    let result = Analyzer::default().analyze_file(&fixture("legacy-panel.jsx"));

    let panel = result.main_export().unwrap();
    assert_eq!(panel.name, "LegacyPanel");
    assert!(panel.is_component());
    assert!(panel.has_default_props);

    let title = result.find("PanelTitle").unwrap();
    assert!(title.is_component());
    assert_eq!(title.export_type, ExportType::Named);
    assert_eq!(title.parameter_names, vec!["text"]);

    let clamp = result.find("clampValue").unwrap();
    assert!(clamp.is_function());
    assert_eq!(clamp.parameter_names, vec!["value", "min", "max"]);
    assert!(result.find("clamp").is_none());
}

#[test]
fn test_anonymous_default_fixture() {
    let result = Analyzer::default().analyze_file(&fixture("order-summary.jsx"));

    assert_eq!(result.len(), 1);
    let main = result.main_export().unwrap();
    assert_eq!(main.name, "OrderSummary");
    assert!(main.is_component());
}

#[test]
fn test_configured_wrapper() {
    let source = "const Store = () => <div/>;\nexport default observer(Store);";

    let plain = Analyzer::default().analyze_source(source, Path::new("store.jsx"));
    assert_eq!(plain.main_export().unwrap().wrapper, None);

    let analyzer = Analyzer::new(AnalyzerOptions {
        extra_wrappers: vec!["observer".to_string()],
        ..Default::default()
    });
    let result = analyzer.analyze_source(source, Path::new("store.jsx"));
    let main = result.main_export().unwrap();
    assert_eq!(main.name, "Store");
    assert_eq!(main.wrapper, Some(WrapperKind::Custom("observer".to_string())));
}

#[test]
fn test_unreadable_file_degrades() {
    let analysis = Analyzer::default().inspect_file(Path::new("/no/such/dir/settings_page.jsx"));
    assert_eq!(analysis.strategy, Strategy::Synthesized);
    assert_eq!(analysis.result.main_export().unwrap().name, "SettingsPage");
}
