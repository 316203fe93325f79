use std::fmt;
use std::io;

/// The main error type for CDCL parsing, access and export.
#[derive(Debug, Clone, PartialEq)]
pub enum CdclError {
    SyntaxError {
        message: String,
        line: usize,
        text: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when `@[NAME]` refers to a constant not defined above it.
    UndefinedConstant {
        name: String,
        line: usize,
        text: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    PathNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        kind: io::ErrorKind,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl CdclError {
    pub(crate) fn syntax(message: impl Into<String>, line: usize, text: &str, code: u32) -> Self {
        CdclError::SyntaxError {
            message: message.into(),
            line,
            text: text.to_string(),
            hint: None,
            code: Some(code),
        }
    }

    pub(crate) fn with_hint(mut self, new_hint: impl Into<String>) -> Self {
        match &mut self {
            CdclError::SyntaxError { hint, .. }
            | CdclError::UndefinedConstant { hint, .. }
            | CdclError::TypeError { hint, .. }
            | CdclError::PathNotFound { hint, .. }
            | CdclError::FileError { hint, .. }
            | CdclError::ExportError { hint, .. } => *hint = Some(new_hint.into()),
        }
        self
    }

    /// Fills in the source position for errors raised below the line level.
    pub(crate) fn at_line(mut self, at: usize, source: &str) -> Self {
        match &mut self {
            CdclError::SyntaxError { line, text, .. }
            | CdclError::UndefinedConstant { line, text, .. } => {
                *line = at;
                *text = source.to_string();
            }
            _ => {}
        }
        self
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            CdclError::SyntaxError { code, .. }
            | CdclError::UndefinedConstant { code, .. }
            | CdclError::TypeError { code, .. }
            | CdclError::PathNotFound { code, .. }
            | CdclError::FileError { code, .. }
            | CdclError::ExportError { code, .. } => *code,
        }
    }

    /// True for a source file that doesn't exist, as opposed to one that
    /// couldn't be read.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CdclError::FileError { kind: io::ErrorKind::NotFound, .. })
    }

    /// Process exit status the `cdcl` binary reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CdclError::FileError { .. } => 2,
            CdclError::SyntaxError { .. } => 3,
            CdclError::UndefinedConstant { .. } => 4,
            _ => 1,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for CdclError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CdclError::SyntaxError { message, line, text, hint, code } =>
                write!(f, "[CDCL] Syntax Error at line {}: {} in `{}`{}",
                    line, message, text, suffix(hint, code)
                ),
            CdclError::UndefinedConstant { name, line, text, hint, code } =>
                write!(f, "[CDCL] Undefined constant '{}' at line {} in `{}`{}",
                    name, line, text, suffix(hint, code)
                ),
            CdclError::TypeError { message, hint, code } =>
                write!(f, "[CDCL] Type Error: {}{}", message, suffix(hint, code)),
            CdclError::PathNotFound { path, hint, code } =>
                write!(f, "[CDCL] Path '{}' not found{}", path, suffix(hint, code)),
            CdclError::FileError { message, path, hint, code, .. } =>
                write!(f, "[CDCL] File Error '{}': {}{}", path, message, suffix(hint, code)),
            CdclError::ExportError { message, hint, code } =>
                write!(f, "[CDCL] Export Error: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for CdclError {}
