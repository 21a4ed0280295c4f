//! Per-type synthesis failures.

use thiserror::Error;

/// An input contract violation that fails synthesis for one type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("base chain of '{type_name}' revisits '{base}'")]
    CyclicBase { type_name: String, base: String },

    #[error("base chain of '{type_name}' is deeper than {limit} levels")]
    DepthExceeded { type_name: String, limit: usize },

    #[error("'{type_name}' has two parameters named '{parameter}' (from '{first}' and '{second}')")]
    DuplicateParameter {
        type_name: String,
        parameter: String,
        first: String,
        second: String,
    },

    #[error("member '{member}' of '{type_name}' has no name left after removing leading underscores")]
    EmptyParameterName { type_name: String, member: String },

    #[error("'{type_name}' is a {kind} and cannot call a base constructor")]
    BaseCallOnStruct {
        type_name: String,
        kind: &'static str,
    },

    #[error("base '{base}' of '{type_name}' takes {expected} type argument(s) but {found} were given")]
    BaseArityMismatch {
        type_name: String,
        base: String,
        expected: usize,
        found: usize,
    },
}
