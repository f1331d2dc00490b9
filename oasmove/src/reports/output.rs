//! Output trait for rendering reports to different targets.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, build log, etc).
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a progress message.
    fn info(&mut self, msg: &str);

    /// Render a supporting detail, only interesting when diagnosing.
    fn detail(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn info(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn detail(&mut self, msg: &str) {
        println!("  {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Build-log output: every line becomes a `tracing` event.
///
/// Layout methods collapse to info lines since a log has no sections.
pub struct LogOutput;

impl Output for LogOutput {
    fn section(&mut self, name: &str) {
        tracing::info!("{name}:");
    }

    fn key_value(&mut self, key: &str, value: &str) {
        tracing::info!("{key}: {value}");
    }

    fn list_item(&mut self, text: &str) {
        tracing::info!("  - {text}");
    }

    fn info(&mut self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn detail(&mut self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warning(&mut self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&mut self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn newline(&mut self) {}
}

/// Collects rendered lines in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl RecordingOutput {
    pub fn render(report: &dyn Report) -> String {
        let mut out = Self::default();
        report.render(&mut out);
        out.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn section(&mut self, name: &str) {
        self.lines.push(format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {text}"));
    }

    fn info(&mut self, msg: &str) {
        self.lines.push(format!("INFO {msg}"));
    }

    fn detail(&mut self, msg: &str) {
        self.lines.push(format!("DEBUG {msg}"));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("WARN {msg}"));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("ERROR {msg}"));
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
