//! Small helpers shared by the parsers and the pipeline

pub mod naming;

pub use naming::{component_name_from_path, is_identifier, line_number_at};
