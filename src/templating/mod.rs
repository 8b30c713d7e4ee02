pub mod compiler;
pub mod extractor;

pub use compiler::compile_template;
pub use extractor::extract_templating;
