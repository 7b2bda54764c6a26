//! The `generate` command: model file in, source files out.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use bridge_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use bridge_gen::{generate, GenConfig, GenProblem, GenerationOutput, RuntimeNames};

use crate::model::load_model;

/// Output directory used when `--out=` is absent.
const DEFAULT_OUT_DIR: &str = "generated";

/// Options of `bridgec generate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub out_dir: PathBuf,
    pub class_suffix: Option<String>,
    pub interface_suffix: Option<String>,
    pub runtime_package: Option<String>,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    pub color: ColorMode,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            class_suffix: None,
            interface_suffix: None,
            runtime_package: None,
            dry_run: false,
            color: ColorMode::Auto,
        }
    }
}

impl GenerateOptions {
    /// Generator configuration with the command-line overrides applied.
    pub fn config(&self) -> GenConfig {
        let mut config = GenConfig::default();
        if let Some(suffix) = &self.class_suffix {
            config.class_suffix.clone_from(suffix);
        }
        if let Some(suffix) = &self.interface_suffix {
            config.interface_suffix.clone_from(suffix);
        }
        if let Some(package) = &self.runtime_package {
            config.runtime = RuntimeNames::in_package(package.as_str());
        }
        config
    }
}

/// Parse `generate` flags. Unknown or invalid flags are reported and ignored.
pub fn parse_generate_options(args: &[String]) -> GenerateOptions {
    let mut options = GenerateOptions::default();

    for arg in args {
        if let Some(dir) = arg.strip_prefix("--out=") {
            options.out_dir = PathBuf::from(dir);
        } else if let Some(suffix) = arg.strip_prefix("--class-suffix=") {
            options.class_suffix = non_empty(suffix, "--class-suffix");
        } else if let Some(suffix) = arg.strip_prefix("--interface-suffix=") {
            options.interface_suffix = non_empty(suffix, "--interface-suffix");
        } else if let Some(package) = arg.strip_prefix("--runtime-package=") {
            options.runtime_package = non_empty(package, "--runtime-package");
        } else if arg == "--dry-run" {
            options.dry_run = true;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            if let Some(color) = ColorMode::from_flag(mode) {
                options.color = color;
            } else {
                eprintln!("warning: unknown color mode '{mode}', options: auto, always, never");
            }
        } else {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

fn non_empty(value: &str, flag: &str) -> Option<String> {
    if value.is_empty() {
        eprintln!("warning: {flag} needs a value, using the default");
        None
    } else {
        Some(value.to_string())
    }
}

/// Outcome of a successful `generate` run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output: GenerationOutput,
    /// Paths written, or that would be written on a dry run.
    pub paths: Vec<PathBuf>,
}

/// Load, generate and (unless dry-running) write.
pub fn run_generate(model: &Path, options: &GenerateOptions) -> Result<GenerateReport, GenProblem> {
    let set = load_model(model)?;
    let output = generate(&set, &options.config())?;

    let paths = if options.dry_run {
        output
            .files
            .iter()
            .map(|f| options.out_dir.join(f.relative_path()))
            .collect()
    } else {
        output.write_to(&options.out_dir)?
    };
    Ok(GenerateReport { output, paths })
}

/// Entry point of `bridgec generate`. Exits with status 1 on failure.
pub fn generate_file(model: &str, options: &GenerateOptions) {
    match run_generate(Path::new(model), options) {
        Ok(report) => {
            if options.dry_run {
                for path in &report.paths {
                    println!("{}", path.display());
                }
            }
            println!("{}", summary(&report, options));
        }
        Err(problem) => {
            let stderr = std::io::stderr();
            let is_tty = stderr.is_terminal();
            let mut emitter = TerminalEmitter::with_color_mode(stderr, options.color, is_tty);
            emitter.emit(&problem.into_diagnostic());
            emitter.emit_summary(1, 0);
            emitter.flush();
            std::process::exit(1);
        }
    }
}

fn summary(report: &GenerateReport, options: &GenerateOptions) -> String {
    let output = &report.output;
    let verb = if options.dry_run { "would generate" } else { "generated" };
    format!(
        "{verb} {} file{} ({} accessor{}, {} interface{}, {} class{}) in {}",
        output.files.len(),
        plural(output.files.len(), "s"),
        output.accessors,
        plural(output.accessors, "s"),
        output.interfaces,
        plural(output.interfaces, "s"),
        output.classes,
        plural(output.classes, "es"),
        options.out_dir.display(),
    )
}

fn plural(count: usize, suffix: &'static str) -> &'static str {
    if count == 1 {
        ""
    } else {
        suffix
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
