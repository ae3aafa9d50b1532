mod compiler;
mod context;

pub use compiler::{compile_component, compile_page, compile_project, component_name};
pub use context::{CompileOptions, CompilerContext};

#[cfg(test)]
mod tests;
