mod compiler;

pub use compiler::{compile_component, compile_page, compile_project, page_file_name, CompileOptions};
