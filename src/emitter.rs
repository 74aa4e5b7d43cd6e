use std::path::PathBuf;

/// Accumulates the generated C source in two regions: the header
/// (includes and variable declarations) and the body. The final file is
/// the header followed by the body.
pub struct Emitter {
    path: PathBuf,
    header: String,
    code: String,
}

impl Emitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Emitter {
            path: path.into(),
            header: String::new(),
            code: String::new(),
        }
    }

    pub fn emit(&mut self, code: &str) {
        self.code += code;
    }

    pub fn emit_line(&mut self, code: &str) {
        self.code += code;
        self.code += "\n";
    }

    pub fn header_line(&mut self, code: &str) {
        self.header += code;
        self.header += "\n";
    }

    pub fn output(&self) -> String {
        format!("{}{}", self.header, self.code)
    }

    pub fn write_file(&self) -> std::io::Result<()> {
        std::fs::write(&self.path, self.output())
    }
}
