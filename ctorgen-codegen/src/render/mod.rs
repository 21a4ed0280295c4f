//! Pure rendering of names, type references, constraints, and attributes.

mod attribute;
mod types;

pub use attribute::{render_attribute, render_constant};
pub use types::{
    ConstraintClause, render_constraint_clause, render_generic_list, render_type,
};
