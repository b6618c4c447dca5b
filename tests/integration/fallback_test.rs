use std::path::Path;

use compscan::parsers::{analyze_fallback, DEFAULT_EXPORT_STRATEGIES};
use compscan::{Analyzer, AnalyzerOptions, ExportType, Strategy, WrapperKind};

// Decorators on a function are not valid in any grammar the parser accepts,
// which forces the text-pattern path.
const UNPARSABLE: &str = r#"
import React from 'react';
import { connect } from 'react-redux';

@@broken
export const formatPrice = (amount, currency) => `${currency}${amount.toFixed(2)}`;

function Checkout({ cart, onPay, ...rest }) {
  return (
    <form onSubmit={onPay} {...rest}>
      {cart.items.length} items
    </form>
  );
}

export default connect(mapState)(Checkout);
"#;

#[test]
fn test_unparsable_file_uses_heuristics() {
    let analysis = Analyzer::default().inspect_source(UNPARSABLE, Path::new("checkout.jsx"));
    assert_eq!(analysis.strategy, Strategy::Heuristic);

    let result = &analysis.result;
    let main = result.main_export().unwrap();
    assert_eq!(main.name, "Checkout");
    assert!(main.is_component());
    assert_eq!(main.export_type, ExportType::Default);
    assert_eq!(main.wrapper, Some(WrapperKind::Connect));
    assert_eq!(main.parameter_names, vec!["cart", "onPay", "rest"]);

    let format = result.find("formatPrice").unwrap();
    assert!(format.is_function());
    assert_eq!(format.export_type, ExportType::Named);
    assert_eq!(format.parameter_names, vec!["amount", "currency"]);

    assert!(result.find("connect").is_none());
}

#[test]
fn test_fallback_matches_structural_shape_on_valid_code() {
    let source = "export function add(a, b) { return a + b; }\nexport const Tag = ({ label }) => <em>{label}</em>;";
    let path = Path::new("mixed.jsx");

    let structural = Analyzer::default().analyze_source(source, path);
    let heuristic = analyze_fallback(source, path, &AnalyzerOptions::default());

    for name in ["add", "Tag"] {
        let a = structural.find(name).unwrap();
        let b = heuristic.find(name).unwrap();
        assert_eq!(a.is_component(), b.is_component(), "{name}");
        assert_eq!(a.export_type, b.export_type, "{name}");
        assert_eq!(a.parameter_names, b.parameter_names, "{name}");
    }
}

#[test]
fn test_strategy_table_order() {
    let order: Vec<_> = DEFAULT_EXPORT_STRATEGIES.iter().map(|strategy| strategy.name).collect();
    assert_eq!(order, vec!["connect", "wrapper", "identifier", "anonymous"]);
}

#[test]
fn test_wrapper_pattern_beats_plain_identifier() {
    let text = "export default Plain;\nexport default memo(Fancy);\nconst Fancy = () => <i/>;\nconst Plain = 1;";
    let result = analyze_fallback(text, Path::new("fancy.jsx"), &AnalyzerOptions::default());
    assert_eq!(result.main_export().unwrap().name, "Fancy");
}

#[test]
fn test_nothing_found_collapses_to_file_name() {
    let result = analyze_fallback("let x = ", Path::new("/tmp/2fa-prompt.js"), &AnalyzerOptions::default());

    assert_eq!(result.len(), 1);
    let record = &result.components()[0];
    assert_eq!(record.name, "_2faPrompt");
    assert!(record.is_default());
    assert!(record.parameter_names.is_empty());
}

#[test]
fn test_default_name_is_kept_when_definition_is_missing() {
    let result = analyze_fallback(
        "export default withRouter(Settings);",
        Path::new("routes.js"),
        &AnalyzerOptions::default(),
    );
    let main = result.main_export().unwrap();
    assert_eq!(main.name, "Settings");
    assert!(main.is_component());
}
