//! Syntax highlighting of fenced code blocks
//!
//! The highlighter turns raw code lines plus a language name into text
//! written in the macro dialect's own highlighting vocabulary (`\hlkwa{..}`,
//! `\hlstr{..}`, ...). That text is then parsed in code mode like any other
//! macro-dialect input.

use crate::error::ParseError;

/// Produces highlighted macro-dialect text for a block of code.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, language: &str, lines: &[String]) -> Result<String, ParseError>;
}

/// How the external highlighter is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    pub program: String,
    /// Arguments passed before `--syntax=<language>`
    pub args: Vec<String>,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        HighlightOptions {
            program: "highlight".to_string(),
            args: "-O latex --replace-quotes -j 3 -z -V -f -t 4 --encoding=utf-8"
                .split(' ')
                .map(str::to_string)
                .collect(),
        }
    }
}

impl HighlightOptions {
    pub fn arguments_for(&self, language: &str) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(format!("--syntax={language}"));
        args
    }
}

#[cfg(feature = "native-highlight")]
pub use native::CommandHighlighter;

#[cfg(feature = "native-highlight")]
mod native {
    use super::{HighlightOptions, Highlighter};
    use crate::error::ParseError;
    use std::io::Write;
    use std::process::{Command, Stdio};
    use std::thread;
    use which::which;

    /// Runs the highlighter as a child process and waits for it to finish.
    #[derive(Debug, Clone, Default)]
    pub struct CommandHighlighter {
        options: HighlightOptions,
    }

    impl CommandHighlighter {
        pub fn new(options: HighlightOptions) -> Self {
            CommandHighlighter { options }
        }

        /// Whether the configured program can be found on `PATH`.
        pub fn is_available(&self) -> bool {
            which(&self.options.program).is_ok()
        }
    }

    impl Highlighter for CommandHighlighter {
        fn highlight(&self, language: &str, lines: &[String]) -> Result<String, ParseError> {
            let program = which(&self.options.program).map_err(|e| {
                ParseError::Highlighter(format!("{}: {e}", self.options.program))
            })?;

            log::debug!("running {} for language {language}", program.display());
            let mut child = Command::new(&program)
                .args(self.options.arguments_for(language))
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .map_err(|e| ParseError::Highlighter(e.to_string()))?;

            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| ParseError::Highlighter("stdin unavailable".to_string()))?;
            let mut input = String::new();
            for line in lines {
                input.push_str(line);
                input.push('\n');
            }
            let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

            let output = child
                .wait_with_output()
                .map_err(|e| ParseError::Highlighter(e.to_string()))?;
            writer
                .join()
                .map_err(|_| ParseError::Highlighter("writer thread panicked".to_string()))?
                .map_err(|e| ParseError::Highlighter(e.to_string()))?;

            if !output.status.success() {
                return Err(ParseError::Highlighter(format!(
                    "{} exited with {}: {}",
                    program.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                )));
            }

            String::from_utf8(output.stdout).map_err(|e| ParseError::Highlighter(e.to_string()))
        }
    }
}
