use std::cell::RefCell;
use std::rc::Rc;

/// Options for React compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Whether to emit TypeScript (`.tsx`, `React.FC` annotations)
    pub use_typescript: bool,
    /// Whether to import a stylesheet per generated file
    pub include_css_imports: bool,
    /// Extension of the imported stylesheets, without the dot
    pub stylesheet_extension: String,
}

impl CompileOptions {
    /// Source file extension, without the dot
    pub fn extension(&self) -> &'static str {
        if self.use_typescript {
            "tsx"
        } else {
            "jsx"
        }
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            use_typescript: false,
            include_css_imports: true,
            stylesheet_extension: "css".to_string(),
        }
    }
}

/// Compilation context for managing state during code generation
pub struct CompilerContext {
    buffer: Rc<RefCell<String>>,
    indent_level: Rc<RefCell<usize>>,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: Rc::new(RefCell::new(0)),
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&self, text: &str) {
        let indent = "  ".repeat(*self.indent_level.borrow());
        self.buffer.borrow_mut().push_str(&indent);
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}
