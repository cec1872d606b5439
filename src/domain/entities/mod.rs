mod article;
mod content;
mod content_type;

pub use article::*;
pub use content::*;
pub use content_type::*;
