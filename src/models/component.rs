//! Declaration records: the unit of output for one exported declaration

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// How a declaration is exported from its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    Default,
    Named,
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportType::Default => write!(f, "default"),
            ExportType::Named => write!(f, "named"),
        }
    }
}

/// A recognized higher-order wrapper call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    /// `connect(...)(X)`
    Connect,
    /// `withRouter(X)`
    WithRouter,
    /// `memo(X)` / `React.memo(X)`
    Memo,
    /// `forwardRef(X)`
    ForwardRef,
    /// `lazy(() => import(...))`
    Lazy,
    /// A wrapper name supplied through configuration
    Custom(String),
}

impl WrapperKind {
    /// Names recognized without any configuration.
    pub const BUILTIN: [WrapperKind; 5] = [
        WrapperKind::Connect,
        WrapperKind::WithRouter,
        WrapperKind::Memo,
        WrapperKind::ForwardRef,
        WrapperKind::Lazy,
    ];

    /// Resolve a callee name against the built-in set and the extra names.
    pub fn from_name(name: &str, extra: &[String]) -> Option<Self> {
        match name {
            "connect" => Some(WrapperKind::Connect),
            "withRouter" => Some(WrapperKind::WithRouter),
            "memo" => Some(WrapperKind::Memo),
            "forwardRef" => Some(WrapperKind::ForwardRef),
            "lazy" => Some(WrapperKind::Lazy),
            _ if extra.iter().any(|candidate| candidate == name) => {
                Some(WrapperKind::Custom(name.to_string()))
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WrapperKind::Connect => "connect",
            WrapperKind::WithRouter => "withRouter",
            WrapperKind::Memo => "memo",
            WrapperKind::ForwardRef => "forwardRef",
            WrapperKind::Lazy => "lazy",
            WrapperKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WrapperKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One exported, classified declaration.
///
/// Exactly one of `is_component()` / `is_function()` holds for every record;
/// the two flags are only set together through the constructors and
/// [`ComponentInfo::set_component`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub name: String,
    pub export_type: ExportType,
    pub file_path: PathBuf,
    is_component: bool,
    is_function: bool,
    pub parameter_names: Vec<String>,
    pub has_default_props: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<WrapperKind>,
}

impl ComponentInfo {
    fn new(name: impl Into<String>, export_type: ExportType, file_path: impl Into<PathBuf>, is_component: bool) -> Self {
        Self {
            name: name.into(),
            export_type,
            file_path: file_path.into(),
            is_component,
            is_function: !is_component,
            parameter_names: Vec::new(),
            has_default_props: false,
            line_number: None,
            wrapper: None,
        }
    }

    /// A renderable component record.
    pub fn component(name: impl Into<String>, export_type: ExportType, file_path: impl Into<PathBuf>) -> Self {
        Self::new(name, export_type, file_path, true)
    }

    /// A plain function record.
    pub fn function(name: impl Into<String>, export_type: ExportType, file_path: impl Into<PathBuf>) -> Self {
        Self::new(name, export_type, file_path, false)
    }

    pub fn with_parameters(mut self, parameter_names: Vec<String>) -> Self {
        self.parameter_names = parameter_names;
        self
    }

    pub fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn with_wrapper(mut self, wrapper: Option<WrapperKind>) -> Self {
        self.wrapper = wrapper;
        self
    }

    pub fn with_default_props(mut self, has_default_props: bool) -> Self {
        self.has_default_props = has_default_props;
        self
    }

    pub fn is_component(&self) -> bool {
        self.is_component
    }

    pub fn is_function(&self) -> bool {
        self.is_function
    }

    /// Reclassify the record, keeping the two flags exclusive.
    pub fn set_component(&mut self, is_component: bool) {
        self.is_component = is_component;
        self.is_function = !is_component;
    }

    pub fn is_default(&self) -> bool {
        self.export_type == ExportType::Default
    }
}
