mod repository_errors;
mod validation_errors;

pub use repository_errors::*;
pub use validation_errors::*;
