//! Text-pattern fallback analysis
//!
//! Used when a file does not parse, or parses but no exported declaration
//! could be classified. Export statements are found with patterns, each
//! export's definition is located by name and classified by its shape.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::markup::snippet_contains_markup;
use crate::core::aggregate::aggregate;
use crate::models::{AnalysisResult, AnalyzerOptions, ComponentInfo, ExportType, WrapperKind};
use crate::utils::{component_name_from_path, is_identifier, line_number_at};

/// Words never taken as an export name.
const RESERVED: &[&str] = &[
    "abstract", "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger", "declare",
    "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "implements", "import", "in", "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this", "throw", "true", "try", "type",
    "typeof", "undefined", "var", "void", "while", "with", "yield",
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern compiles")
}

static EXPORT_DEFAULT: Lazy<Regex> = Lazy::new(|| compile(r"\bexport\s+default\s+"));

/// Leading `name(` or `Namespace.name(` of a call
static CALLEE: Lazy<Regex> = Lazy::new(|| compile(r"^\s*(?:[A-Z][\w$]*\s*\.\s*)?([A-Za-z_$][\w$]*)\s*\("));

static PLAIN_DEFAULT: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(?:((?:async\s+)?function\b\s*\*?|(?:abstract\s+)?class\b)\s*)?([A-Za-z_$][\w$]*)")
});

static ANONYMOUS_DEFAULT: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^(?:async\s+)?(?:function\b\s*\*?\s*\(|\([^)]*\)\s*(?::[^=]*)?=>|[A-Za-z_$][\w$]*\s*=>)|^class\b\s*(?:extends\b|\{)",
    )
});

static INLINE_TARGET: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(?:async\s+)?function\b\s*\*?\s*([A-Za-z_$][\w$]*)?|^class\b\s*([A-Za-z_$][\w$]*)?")
});

static ARROW_TARGET: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:async\s*)?(?:\([^)]*\)|[A-Za-z_$][\w$]*)\s*(?::[^=]*)?=>"));

static NAMED_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\bexport\s+(?:declare\s+)?(?:(?:async\s+)?function\b\s*\*?\s*|(?:const|let|var|(?:abstract\s+)?class)\s+)([A-Za-z_$][\w$]*)",
    )
});

static EXPORT_LIST: Lazy<Regex> = Lazy::new(|| compile(r"\bexport\s*(type\s*)?\{([^}]*)\}"));

static LIST_SPECIFIER: Lazy<Regex> =
    Lazy::new(|| compile(r"^([A-Za-z_$][\w$]*)(?:\s+as\s+([A-Za-z_$][\w$]*))?$"));

/// Start of the next top-level declaration, which ends a definition region
static DECLARATION_START: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?m)^(?:export\s+)?(?:default\s+)?(?:declare\s+)?(?:async\s+)?(?:function|class|const|let|var|interface|type|enum)\b",
    )
});

static STRICT_MARKUP: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"return\s*\(?\s*<[A-Za-z>]|=>\s*\(?\s*<[A-Za-z>]|\bcreateElement\s*\(|\bextends\s+(?:React\.)?(?:Pure)?Component\b",
    )
});

static LOOSE_MARKUP: Lazy<Regex> = Lazy::new(|| compile(r"<[A-Za-z][\w.]*[\s/>]|<>"));

static INITIALIZER: Lazy<Regex> = Lazy::new(|| compile(r"^\s*(?::[^=]*)?=\s*"));

/// What may sit between a declared name and its parameter list
static PARAMS_PREFIX: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^\s*(?:<[^()]*>)?\s*(?::[^=()]*)?(?:=\s*)?(?:async\b\s*)?(?:function\b\s*\*?\s*[\w$]*\s*)?(?:<[^()]*>)?\s*$",
    )
});

/// What a strategy saw after `export default`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Detected {
    name: Option<String>,
    wrapper: Option<WrapperKind>,
    inline: bool,
}

/// A recognized default export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultHit {
    /// Strategy that recognized it
    pub strategy: &'static str,
    /// Exported name; `None` for an anonymous export
    pub name: Option<String>,
    pub wrapper: Option<WrapperKind>,
    /// The definition sits inside the export statement itself
    pub inline: bool,
    /// Byte offset of the `export default` keyword pair
    pub offset: usize,
    /// Byte offset just past it
    pub value_offset: usize,
}

/// One way of recognizing the default export in source text.
pub struct DefaultExportStrategy {
    pub name: &'static str,
    matcher: fn(&str, &[String]) -> Option<Detected>,
}

impl DefaultExportStrategy {
    /// First `export default` in `text` this strategy recognizes.
    pub fn detect(&self, text: &str, extra_wrappers: &[String]) -> Option<DefaultHit> {
        EXPORT_DEFAULT.find_iter(text).find_map(|found| {
            let detected = (self.matcher)(&text[found.end()..], extra_wrappers)?;
            Some(DefaultHit {
                strategy: self.name,
                name: detected.name,
                wrapper: detected.wrapper,
                inline: detected.inline,
                offset: found.start(),
                value_offset: found.end(),
            })
        })
    }
}

/// Default-export strategies in precedence order.
pub static DEFAULT_EXPORT_STRATEGIES: [DefaultExportStrategy; 4] = [
    DefaultExportStrategy {
        name: "connect",
        matcher: match_connect,
    },
    DefaultExportStrategy {
        name: "wrapper",
        matcher: match_other_wrapper,
    },
    DefaultExportStrategy {
        name: "identifier",
        matcher: match_identifier,
    },
    DefaultExportStrategy {
        name: "anonymous",
        matcher: match_anonymous,
    },
];

fn match_connect(value: &str, extra: &[String]) -> Option<Detected> {
    unwrap_call_text(value, extra)
        .filter(|unwrapped| unwrapped.outermost == WrapperKind::Connect)
        .and_then(TextUnwrapped::into_detected)
}

fn match_other_wrapper(value: &str, extra: &[String]) -> Option<Detected> {
    unwrap_call_text(value, extra)
        .filter(|unwrapped| unwrapped.outermost != WrapperKind::Connect)
        .and_then(TextUnwrapped::into_detected)
}

fn match_identifier(value: &str, _extra: &[String]) -> Option<Detected> {
    let caps = PLAIN_DEFAULT.captures(value)?;
    let name = caps.get(2)?;
    if is_reserved(name.as_str()) {
        return None;
    }
    // A bare name must end the statement; `Foo(...)` or `Foo.bar` is some other expression.
    if caps.get(1).is_none() {
        let after = value[name.end()..].trim_start_matches([' ', '\t']);
        let ends_statement =
            after.is_empty() || after.starts_with([';', '\n', '\r', '}']) || after.starts_with("//");
        if !ends_statement {
            return None;
        }
    }
    Some(Detected {
        name: Some(name.as_str().to_string()),
        wrapper: None,
        inline: false,
    })
}

fn match_anonymous(value: &str, _extra: &[String]) -> Option<Detected> {
    ANONYMOUS_DEFAULT.is_match(value).then_some(Detected {
        name: None,
        wrapper: None,
        inline: true,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TextTarget {
    Identifier(String),
    /// Function, arrow or class written inside the call
    Inline(Option<String>),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextUnwrapped {
    outermost: WrapperKind,
    target: TextTarget,
}

impl TextUnwrapped {
    fn into_detected(self) -> Option<Detected> {
        let (name, inline) = match self.target {
            TextTarget::Identifier(name) => (Some(name), false),
            TextTarget::Inline(name) => (name, true),
            TextTarget::Other => return None,
        };
        Some(Detected {
            name,
            wrapper: Some(self.outermost),
            inline,
        })
    }
}

/// Text counterpart of the syntax-tree wrapper resolution: `w(X)`,
/// `w(args)(X)` and nested wrappers down to the innermost target.
fn unwrap_call_text(text: &str, extra: &[String]) -> Option<TextUnwrapped> {
    let caps = CALLEE.captures(text)?;
    let kind = WrapperKind::from_name(caps.get(1)?.as_str(), extra)?;
    let open = caps.get(0)?.end() - 1;
    let close = matching_close(text, open)?;
    let mut argument = &text[open + 1..close];

    let after = &text[close + 1..];
    let trimmed = after.trim_start();
    if trimmed.starts_with('(') {
        let curried_open = close + 1 + (after.len() - trimmed.len());
        let curried_close = matching_close(text, curried_open)?;
        argument = &text[curried_open + 1..curried_close];
    }

    let first = split_top_level(argument).into_iter().next().unwrap_or_default().trim();
    let target = match unwrap_call_text(first, extra) {
        Some(inner) => inner.target,
        None => classify_text_target(first),
    };
    Some(TextUnwrapped { outermost: kind, target })
}

fn classify_text_target(text: &str) -> TextTarget {
    if is_identifier(text) && !is_reserved(text) {
        return TextTarget::Identifier(text.to_string());
    }
    if let Some(caps) = INLINE_TARGET.captures(text) {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .filter(|name| !is_reserved(name))
            .map(str::to_string);
        return TextTarget::Inline(name);
    }
    if ARROW_TARGET.is_match(text) {
        return TextTarget::Inline(None);
    }
    TextTarget::Other
}

fn is_reserved(word: &str) -> bool {
    RESERVED.contains(&word)
}

/// Index of the bracket closing the one at `open`, skipping string literals.
fn matching_close(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let (opener, closer) = match bytes.get(open)? {
        b'(' => (b'(', b')'),
        b'{' => (b'{', b'}'),
        b'[' => (b'[', b']'),
        _ => return None,
    };

    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;
    for (index, &byte) in bytes.iter().enumerate().skip(open) {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == q {
                quote = None;
            }
            continue;
        }
        match byte {
            b'\'' | b'"' | b'`' => quote = Some(byte),
            b if b == opener => depth += 1,
            b if b == closer => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on commas outside any bracket, type-argument list or string.
fn split_top_level(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut open: Vec<u8> = Vec::new();
    let mut quote: Option<u8> = None;
    let mut start = 0;

    for (index, &byte) in bytes.iter().enumerate() {
        if let Some(q) = quote {
            if byte == q && bytes.get(index.wrapping_sub(1)) != Some(&b'\\') {
                quote = None;
            }
            continue;
        }
        match byte {
            b'\'' | b'"' | b'`' => quote = Some(byte),
            b'(' | b'[' | b'{' => open.push(byte),
            b'<' if opens_type_arguments(bytes, index) => open.push(byte),
            b'>' if open.last() == Some(&b'<') && bytes.get(index.wrapping_sub(1)) != Some(&b'=') => {
                open.pop();
            }
            b')' | b']' | b'}' => {
                let opener = match byte {
                    b')' => b'(',
                    b']' => b'[',
                    _ => b'{',
                };
                // Unclosed `<` inside the bracket was a comparison after all.
                while let Some(last) = open.pop() {
                    if last == opener {
                        break;
                    }
                }
            }
            b',' if open.is_empty() => {
                parts.push(&text[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}

/// `<` right after a name or `:` and right before a name or `>`, as in
/// `Map<K, V>`; anything else is a comparison.
fn opens_type_arguments(bytes: &[u8], index: usize) -> bool {
    let is_name_byte = |b: &u8| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'$';
    let before = index.checked_sub(1).and_then(|i| bytes.get(i));
    let after = bytes.get(index + 1);
    before.is_some_and(|b| is_name_byte(b) || *b == b':') && after.is_some_and(|b| is_name_byte(b) || *b == b'>')
}

/// Parameter names from the text between a parameter list's parentheses.
///
/// Mirrors the structural extraction: destructured keys for an object
/// pattern, the left-hand name for defaults, annotations dropped.
fn parameter_names_from_text(params: &str) -> Vec<String> {
    let mut names = Vec::new();
    for part in split_top_level(params) {
        let part = part.trim();
        if part.starts_with('{') {
            let Some(close) = matching_close(part, 0) else {
                continue;
            };
            names.extend(split_top_level(&part[1..close]).into_iter().filter_map(property_name));
        } else if let Some(name) = binding_name(part) {
            names.push(name);
        }
    }
    names
}

/// Name for one destructured property: the key when it is a name, otherwise
/// the local it is bound to.
fn property_name(part: &str) -> Option<String> {
    let part = part.trim();
    if part.starts_with("...") {
        return binding_name(part);
    }
    let colon = match part.find([':', '=']) {
        Some(index) if part.as_bytes()[index] == b':' => index,
        _ => return binding_name(part),
    };
    let key = part[..colon].trim().trim_matches(['\'', '"']);
    if is_identifier(key) && !is_reserved(key) {
        return Some(key.to_string());
    }
    binding_name(&part[colon + 1..])
}

fn binding_name(part: &str) -> Option<String> {
    let part = part.trim();
    let part = part.strip_prefix("...").unwrap_or(part);
    let end = part.find([':', '=']).unwrap_or(part.len());
    let name = part[..end].trim().trim_end_matches('?');
    (is_identifier(name) && !is_reserved(name)).then(|| name.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionKind {
    Function,
    Class,
    Variable,
    /// Anonymous definition inside `export default`
    Inline,
}

/// Source text assumed to hold one definition.
#[derive(Debug, Clone, Copy)]
struct Region<'t> {
    kind: RegionKind,
    /// Byte offset of the region in the file
    start: usize,
    /// Offset within `text` just past the declared name
    name_end: usize,
    text: &'t str,
}

/// Find the declaration of `name`; the region runs to the next top-level
/// declaration or the end of the file.
fn locate_definition<'t>(text: &'t str, name: &str) -> Option<Region<'t>> {
    let pattern = format!(
        r"(?:\b(function)\s*\*?\s*|\b(class)\s+|\b(?:const|let|var)\s+)({})(?:[^\w$]|$)",
        regex::escape(name)
    );
    let caps = Regex::new(&pattern).ok()?.captures(text)?;
    let whole = caps.get(0)?;
    let kind = if caps.get(1).is_some() {
        RegionKind::Function
    } else if caps.get(2).is_some() {
        RegionKind::Class
    } else {
        RegionKind::Variable
    };
    let start = whole.start();
    let name_end = caps.get(3)?.end() - start;
    Some(Region {
        kind,
        start,
        name_end,
        text: &text[start..region_end(text, caps.get(3)?.end())],
    })
}

fn inline_region<'t>(text: &'t str, hit: &DefaultHit) -> Region<'t> {
    let kind = if text[hit.value_offset..].starts_with("class") {
        RegionKind::Class
    } else {
        RegionKind::Inline
    };
    Region {
        kind,
        start: hit.offset,
        name_end: hit.value_offset - hit.offset,
        text: &text[hit.offset..region_end(text, hit.value_offset)],
    }
}

fn region_end(text: &str, from: usize) -> usize {
    DECLARATION_START
        .find_at(text, from)
        .map(|m| m.start())
        .unwrap_or(text.len())
}

impl<'t> Region<'t> {
    /// Wrapper call the variable is initialized with, e.g. `const X = memo(Y)`.
    fn initializer_wrapper(&self, extra: &[String]) -> Option<WrapperKind> {
        if self.kind != RegionKind::Variable {
            return None;
        }
        let after_name = &self.text[self.name_end..];
        let assign = INITIALIZER.find(after_name)?;
        unwrap_call_text(&after_name[assign.end()..], extra).map(|unwrapped| unwrapped.outermost)
    }

    /// Whether the definition is something a record can describe: a function,
    /// a class, or a variable bound to a function, class or wrapper call.
    fn is_callable(&self, extra: &[String]) -> bool {
        if self.kind != RegionKind::Variable {
            return true;
        }
        let after_name = &self.text[self.name_end..];
        let Some(assign) = INITIALIZER.find(after_name) else {
            return false;
        };
        let value = &after_name[assign.end()..];
        ARROW_TARGET.is_match(value) || INLINE_TARGET.is_match(value) || unwrap_call_text(value, extra).is_some()
    }

    fn parameter_names(&self) -> Vec<String> {
        let after_name = &self.text[self.name_end..];
        let Some(open) = after_name.find('(') else {
            return Vec::new();
        };
        if !PARAMS_PREFIX.is_match(&after_name[..open]) {
            return Vec::new();
        }
        match matching_close(after_name, open) {
            Some(close) => parameter_names_from_text(&after_name[open + 1..close]),
            None => Vec::new(),
        }
    }

    fn strict_markup(&self) -> bool {
        STRICT_MARKUP.is_match(self.text)
    }

    fn permissive_markup(&self, path: &Path, max_depth: usize) -> bool {
        if let Some(found) = snippet_contains_markup(self.text, path, max_depth) {
            return found;
        }
        match self.text.find('{') {
            Some(brace) => LOOSE_MARKUP.is_match(&self.text[brace..]),
            None => false,
        }
    }
}

/// An export found in the text, before classification.
#[derive(Debug, Clone)]
struct Candidate {
    /// Name the record is reported under
    name: String,
    /// Name the definition is declared under
    local: String,
    visibility: ExportType,
    wrapper: Option<WrapperKind>,
    /// Inline anonymous default export
    inline: bool,
}

/// Raw output of the fallback scan.
#[derive(Debug, Clone, Default)]
pub struct FallbackScan {
    /// Classified exports whose definitions were located, in discovery order
    pub records: Vec<ComponentInfo>,
    /// Name of the default export, when one was recognized
    pub default_name: Option<String>,
}

/// Scan `text` for exports and classify each located definition.
pub fn scan(text: &str, path: &Path, options: &AnalyzerOptions) -> FallbackScan {
    let extra = options.extra_wrappers.as_slice();
    let file_name = component_name_from_path(path);

    let default_hit = DEFAULT_EXPORT_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.detect(text, extra));

    let mut candidates: Vec<Candidate> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut push = |candidate: Candidate, candidates: &mut Vec<Candidate>| {
        if seen.insert(candidate.name.clone()) {
            candidates.push(candidate);
        }
    };

    let mut default_name = None;
    if let Some(hit) = &default_hit {
        let name = hit.name.clone().unwrap_or_else(|| file_name.clone());
        debug!(strategy = hit.strategy, name = %name, "fallback found default export");
        default_name = Some(name.clone());
        push(
            Candidate {
                local: name.clone(),
                name,
                visibility: ExportType::Default,
                wrapper: hit.wrapper.clone(),
                inline: hit.inline && hit.name.is_none(),
            },
            &mut candidates,
        );
    }

    for caps in NAMED_DECLARATION.captures_iter(text) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if is_reserved(name) {
            continue;
        }
        push(named_candidate(name, name), &mut candidates);
    }

    for caps in EXPORT_LIST.captures_iter(text) {
        if caps.get(1).is_some() {
            continue;
        }
        let Some(list) = caps.get(2) else {
            continue;
        };
        for specifier in list.as_str().split(',') {
            let specifier = specifier.trim();
            if specifier.is_empty() || specifier.starts_with("type ") {
                continue;
            }
            let Some(spec) = LIST_SPECIFIER.captures(specifier) else {
                continue;
            };
            let Some(local) = spec.get(1).map(|m| m.as_str()) else {
                continue;
            };
            match spec.get(2).map(|m| m.as_str()) {
                Some("default") if default_name.is_none() => {
                    default_name = Some(local.to_string());
                    push(
                        Candidate {
                            name: local.to_string(),
                            local: local.to_string(),
                            visibility: ExportType::Default,
                            wrapper: None,
                            inline: false,
                        },
                        &mut candidates,
                    );
                }
                Some("default") => debug!(name = local, "ignoring second default export"),
                Some(alias) => push(named_candidate(local, alias), &mut candidates),
                None => push(named_candidate(local, local), &mut candidates),
            }
        }
    }

    let mut located: Vec<(Candidate, Region<'_>)> = Vec::new();
    for candidate in candidates {
        let region = match (&default_hit, candidate.inline) {
            (Some(hit), true) => Some(inline_region(text, hit)),
            _ => locate_definition(text, &candidate.local),
        };
        match region {
            Some(region) if region.is_callable(extra) => located.push((candidate, region)),
            Some(_) => {
                debug!(name = %candidate.name, "fallback skipping export that is not a function");
                if candidate.visibility == ExportType::Default {
                    default_name = None;
                }
            }
            None => debug!(name = %candidate.name, "fallback could not locate definition"),
        }
    }

    let mut classified: Vec<(Candidate, Region<'_>, bool)> = located
        .into_iter()
        .map(|(mut candidate, region)| {
            if candidate.wrapper.is_none() {
                candidate.wrapper = region.initializer_wrapper(extra);
            }
            let is_component =
                candidate.wrapper.is_some() || region.kind == RegionKind::Class || region.strict_markup();
            (candidate, region, is_component)
        })
        .collect();

    let any_component = classified.iter().any(|(_, _, is_component)| *is_component);
    if !any_component && !classified.is_empty() && options.permissive_fallback {
        debug!("fallback retrying with permissive markup test");
        for (_, region, is_component) in classified.iter_mut() {
            *is_component = region.permissive_markup(path, options.max_markup_depth);
        }
    }

    let records = classified
        .into_iter()
        .map(|(candidate, region, is_component)| {
            let record = if is_component {
                ComponentInfo::component(candidate.name, candidate.visibility, path)
            } else {
                ComponentInfo::function(candidate.name, candidate.visibility, path)
            };
            record
                .with_parameters(region.parameter_names())
                .with_line_number(line_number_at(text, region.start))
                .with_wrapper(candidate.wrapper)
        })
        .collect();

    FallbackScan { records, default_name }
}

fn named_candidate(local: &str, exported: &str) -> Candidate {
    Candidate {
        name: exported.to_string(),
        local: local.to_string(),
        visibility: ExportType::Named,
        wrapper: None,
        inline: false,
    }
}

/// Fallback analysis of a whole file, collapsing to a single synthesized
/// component when nothing was found.
pub fn analyze_fallback(text: &str, path: &Path, options: &AnalyzerOptions) -> AnalysisResult {
    let scan = scan(text, path, options);
    aggregate(scan.records, path, scan.default_name.as_deref()).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_text(text: &str, file: &str) -> FallbackScan {
        scan(text, Path::new(file), &AnalyzerOptions::default())
    }

    fn strategy(name: &str) -> &'static DefaultExportStrategy {
        DEFAULT_EXPORT_STRATEGIES.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_strategies_in_isolation() {
        let connect = strategy("connect").detect("export default connect(mapState)(Widget);", &[]).unwrap();
        assert_eq!(connect.name.as_deref(), Some("Widget"));
        assert_eq!(connect.wrapper, Some(WrapperKind::Connect));

        let memo = strategy("wrapper").detect("export default React.memo(Card)", &[]).unwrap();
        assert_eq!(memo.name.as_deref(), Some("Card"));
        assert!(strategy("connect").detect("export default React.memo(Card)", &[]).is_none());

        let plain = strategy("identifier").detect("export default class Panel {}", &[]).unwrap();
        assert_eq!(plain.name.as_deref(), Some("Panel"));
        assert!(strategy("identifier").detect("export default createStore(r);", &[]).is_none());
        assert!(strategy("identifier").detect("export default function () {}", &[]).is_none());

        let anonymous = strategy("anonymous").detect("export default ({ a }) => a;", &[]).unwrap();
        assert!(anonymous.name.is_none());
        assert!(anonymous.inline);
    }

    #[test]
    fn test_connect_takes_precedence() {
        let text = "export default Plain;\nexport default connect(m)(Wired);\nfunction Wired() { return <a/>; }";
        let result = scan_text(text, "wired.jsx");
        assert_eq!(result.default_name.as_deref(), Some("Wired"));
    }

    #[test]
    fn test_nested_and_configured_wrappers() {
        let text = "export default withRouter(connect(m)(Page));";
        let hit = strategy("wrapper").detect(text, &[]).unwrap();
        assert_eq!(hit.name.as_deref(), Some("Page"));
        assert_eq!(hit.wrapper, Some(WrapperKind::WithRouter));

        let extra = vec!["observer".to_string()];
        let hit = strategy("wrapper").detect("export default observer(Store)", &extra).unwrap();
        assert_eq!(hit.name.as_deref(), Some("Store"));
    }

    #[test]
    fn test_named_and_listed_exports() {
        let text = r#"
export const Header = ({ title }) => <h1>{title}</h1>;
export function sum(a, b) { return a + b; }
function format(v) { return `${v}`; }
const Footer = () => <footer/>;
export { format as formatValue, Footer };
export type { Props } from './types';
"#;
        let result = scan_text(text, "broken.jsx");
        let names: Vec<_> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Header", "sum", "formatValue", "Footer"]);
        assert!(result.records[0].is_component());
        assert_eq!(result.records[0].parameter_names, vec!["title"]);
        assert!(result.records[1].is_function());
        assert_eq!(result.records[1].parameter_names, vec!["a", "b"]);
        assert!(result.records[2].is_function());
        assert!(result.records[3].is_component());
        assert!(result.default_name.is_none());
    }

    #[test]
    fn test_list_default_only_when_none_found() {
        let result = scan_text("function Main() { return <main/>; }\nexport { Main as default };", "m.jsx");
        assert_eq!(result.default_name.as_deref(), Some("Main"));
        assert_eq!(result.records[0].export_type, ExportType::Default);

        let text = "export default First;\nfunction First() {}\nfunction Second() {}\nexport { Second as default };";
        let result = scan_text(text, "two.jsx");
        assert_eq!(result.default_name.as_deref(), Some("First"));
        assert!(result.records.iter().all(|r| r.name != "Second"));
    }

    #[test]
    fn test_anonymous_default_uses_file_name() {
        let text = "export default function ({ label, onClick }) {\n  return <button onClick={onClick}>{label}</button>;\n}";
        let result = scan_text(text, "primary-button.jsx");
        assert_eq!(result.records.len(), 1);
        let record = &result.records[0];
        assert_eq!(record.name, "PrimaryButton");
        assert!(record.is_component());
        assert_eq!(record.parameter_names, vec!["label", "onClick"]);
    }

    #[test]
    fn test_unlocated_exports_are_dropped() {
        let result = scan_text("export { helper } from './helper';\nexport default Missing;", "index.js");
        assert!(result.records.is_empty());
        assert_eq!(result.default_name.as_deref(), Some("Missing"));
    }

    #[test]
    fn test_permissive_pass() {
        let text = "export function Badge({ count }) {\n  const body = count > 0 && <b>{count}</b>;\n  return body;\n}";
        let result = scan_text(text, "badge.jsx");
        assert!(result.records[0].is_component());

        let strict = AnalyzerOptions {
            permissive_fallback: false,
            ..AnalyzerOptions::default()
        };
        let result = scan(text, Path::new("badge.jsx"), &strict);
        assert!(result.records[0].is_function());
    }

    #[test]
    fn test_typed_props_drop_annotations() {
        let text = "export const Card: FC<Props> = ({ title, body = '', ...rest }: Props) => (\n  <div>{title}</div>\n);";
        let result = scan_text(text, "card.tsx");
        assert_eq!(result.records[0].parameter_names, vec!["title", "body", "rest"]);
    }

    #[test]
    fn test_wrapped_initializer_is_component() {
        let text = "const Inner = () => null;\nexport const Memoized = memo(Inner);";
        let result = scan_text(text, "memo.jsx");
        assert_eq!(result.records[0].name, "Memoized");
        assert!(result.records[0].is_component());
        assert_eq!(result.records[0].wrapper, Some(WrapperKind::Memo));
    }

    #[test]
    fn test_reserved_words_are_not_names() {
        let result = scan_text("export default async function () { return 1; }", "task.js");
        assert_eq!(result.default_name.as_deref(), Some("Task"));
    }

    #[test]
    fn test_analyze_fallback_collapses() {
        let result = analyze_fallback("<div", Path::new("my-widget.jsx"), &AnalyzerOptions::default());
        assert_eq!(result.len(), 1);
        let main = result.main_export().unwrap();
        assert_eq!(main.name, "MyWidget");
        assert!(main.is_component());
    }

    #[test]
    fn test_constants_are_not_functions() {
        let text = "export const API_URL = 'x';\nexport const TIMEOUT = 5;\nexport const get = (url) => fetch(url);\n@@";
        let result = scan_text(text, "api.js");
        let names: Vec<_> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["get"]);

        let result = analyze_fallback(
            "export const API_URL = 'x';\nexport const TIMEOUT = 5;",
            Path::new("constants.js"),
            &AnalyzerOptions::default(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result.main_export().unwrap().name, "Constants");
        assert!(result.find("API_URL").is_none());
    }

    #[test]
    fn test_default_constant_falls_back_to_file_name() {
        let result = analyze_fallback(
            "const settings = { theme: 'dark' };\nexport default settings;",
            Path::new("app-settings.js"),
            &AnalyzerOptions::default(),
        );
        assert_eq!(result.main_export().unwrap().name, "AppSettings");
    }

    #[test]
    fn test_function_valued_variables_are_kept() {
        let text = "export const handler = async function (event) { return event; };\nexport const Widget = memo(Inner);";
        let result = scan_text(text, "handlers.js");
        assert!(result.records.iter().any(|r| r.name == "handler" && r.is_function()));
        assert!(result.records.iter().any(|r| r.name == "Widget" && r.is_component()));
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(split_top_level("a, { b, c }, d: Map<K, V>"), vec!["a", " { b, c }", " d: Map<K, V>"]);
        assert_eq!(matching_close("f(a, ')', (b))", 1), Some(13));
        assert_eq!(parameter_names_from_text("{ a, b, ...rest }"), vec!["a", "b", "rest"]);
    }

    #[test]
    fn test_quoted_keys_use_local_name() {
        assert_eq!(
            parameter_names_from_text("{ 'data-id': id, \"title\": heading, onClick: handle = noop }"),
            vec!["id", "title", "onClick"]
        );
    }

    #[test]
    fn test_comparison_in_default_value() {
        assert_eq!(parameter_names_from_text("{ a = x < y, b }"), vec!["a", "b"]);
        assert_eq!(parameter_names_from_text("limit = max < 10 ? max : 10, offset"), vec!["limit", "offset"]);
        assert_eq!(split_top_level("a: Record<string, number>, b"), vec!["a: Record<string, number>", " b"]);

        let text = "export function pick({ a = x < y, b }) { return a; }";
        let result = scan_text(text, "pick.js");
        assert_eq!(result.records[0].parameter_names, vec!["a", "b"]);
    }
}
