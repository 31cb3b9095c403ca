//! Model file name parser.
//!
//! Splits distribution file names such as
//! `Reflection-Llama-3.1-70B-IQ2_M.gguf` into a base name, parameter count,
//! context length, quantisation scheme, instruct marker and extension, and
//! renders them for display:
//!
//! * **parse** — [`parse_model_name`] classifies every `.`/`-` delimited
//!   token and recovers the residual base name.
//! * **format** — [`format_model_name_result`] joins a caller-chosen subset
//!   of the formatted fields; [`title_case`] is the casing heuristic used
//!   for names.
//!
//! Everything here is pure and infallible: unrecognised parts come back as
//! `None`, never as errors.

pub mod format;
pub mod parser;
pub mod title_case;
pub mod types;

pub use format::{format_fields, format_model_name_result};
pub use parser::parse_model_name;
pub use title_case::title_case;
pub use types::{FieldError, FormattedModelName, ModelField, ParsedModelName};
