//! Input validation and solution checking.

mod checker;
mod validator;

pub use checker::{check_solution, Violation, ViolationType};
pub use validator::validate_problem;
