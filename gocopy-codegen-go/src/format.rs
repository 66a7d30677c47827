//! Formatting backends for generated Go source.

use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use thiserror::Error;

/// Turns rendered Go source into the final file content.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Generated source failed to format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
    /// The source as it was handed to the formatter.
    pub unformatted: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>, unformatted: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            unformatted: unformatted.into(),
        }
    }
}

/// Lexical sanity check and whitespace tidy-up, without reindenting.
///
/// Comments and string, rune and raw string literals are skipped; every
/// other `()`, `[]` and `{}` must balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxCheck;

impl Formatter for SyntaxCheck {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        check_syntax(source).map_err(|message| FormatError::new(message, source))?;
        Ok(tidy(source))
    }
}

fn check_syntax(source: &str) -> Result<(), String> {
    let mut open: Vec<(char, usize)> = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|&next| next != '\n').is_some() {}
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let start = line;
                let mut prev = '\0';
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '\n' {
                        line += 1;
                    }
                    if prev == '*' && next == '/' {
                        closed = true;
                        break;
                    }
                    prev = next;
                }
                if !closed {
                    return Err(format!("{}: comment not terminated", start));
                }
            }
            '"' | '\'' => {
                let kind = if c == '"' { "string" } else { "rune" };
                let mut closed = false;
                while let Some(next) = chars.next() {
                    match next {
                        '\\' => {
                            chars.next_if(|&escaped| escaped != '\n');
                        }
                        '\n' => return Err(format!("{}: newline in {} literal", line, kind)),
                        _ if next == c => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err(format!("{}: {} literal not terminated", line, kind));
                }
            }
            '`' => {
                let start = line;
                let mut closed = false;
                for next in chars.by_ref() {
                    match next {
                        '\n' => line += 1,
                        '`' => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err(format!("{}: raw string literal not terminated", start));
                }
            }
            '(' | '[' | '{' => open.push((c, line)),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match open.pop() {
                    Some((found, _)) if found == expected => {}
                    Some((found, opened)) => {
                        return Err(format!(
                            "{}: unexpected '{}', '{}' from line {} is still open",
                            line, c, found, opened
                        ));
                    }
                    None => return Err(format!("{}: unexpected '{}'", line, c)),
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some((found, opened)) => Err(format!("{}: unclosed '{}'", opened, found)),
        None => Ok(()),
    }
}

/// Trim trailing whitespace, collapse blank line runs, end with one newline.
fn tidy(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut pending_blank = false;

    for line in source.lines().map(str::trim_end) {
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

/// Pipes source through an external `gofmt` after the syntax check.
#[derive(Debug, Clone)]
pub struct Gofmt {
    program: PathBuf,
}

impl Default for Gofmt {
    fn default() -> Self {
        Self::with_program("gofmt")
    }
}

impl Gofmt {
    /// Use `gofmt` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific formatter executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Formatter for Gofmt {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let checked = SyntaxCheck.format(source)?;
        let fail = |message: String| FormatError::new(message, source);

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| fail(format!("failed to run {}: {}", self.program.display(), e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(checked.as_bytes())
                .map_err(|e| fail(format!("failed to write to {}: {}", self.program.display(), e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| fail(format!("failed to run {}: {}", self.program.display(), e)))?;

        if !output.status.success() {
            return Err(fail(String::from_utf8_lossy(&output.stderr).trim().to_string()));
        }

        tracing::trace!(program = %self.program.display(), "formatted with external gofmt");
        String::from_utf8(output.stdout).map_err(|e| fail(e.to_string()))
    }
}
