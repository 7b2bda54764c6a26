//! Indented source text builder.

/// Line-oriented writer with indentation tracking.
pub(super) struct SourceWriter {
    /// Current indentation level.
    indent: usize,
    output: String,
}

impl SourceWriter {
    pub(super) fn new() -> Self {
        SourceWriter {
            indent: 0,
            output: String::with_capacity(2048),
        }
    }

    pub(super) fn indent(&mut self) {
        self.indent += 1;
    }

    pub(super) fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line with the current indentation.
    pub(super) fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub(super) fn newline(&mut self) {
        self.output.push('\n');
    }

    pub(super) fn finish(self) -> String {
        self.output
    }
}
