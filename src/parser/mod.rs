use tracing::{debug, trace};

use crate::ast::Table;
use crate::lexer::{self, Line};
use crate::CdclError;

mod blocks;
mod constants;
mod value;

pub use blocks::{BlockStack, MAX_DEPTH};
pub use constants::ConstantTable;
use value::evaluate_value;

/// CDCL parser configuration.
///
/// Holds no parse state: every call to [`Parser::parse`] builds its own
/// constant table and block stack, so one `Parser` can be reused freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    strict: bool,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// In strict mode unrecognized lines and entries outside any block are
    /// syntax errors instead of being skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn parse(&self, input: &str) -> Result<Table, CdclError> {
        let mut state = ParserState::new(*self);
        for (idx, raw) in input.lines().enumerate() {
            state.feed(raw, idx + 1)?;
        }
        // Unclosed blocks are reported against the last non-blank line.
        let (last_no, last_text) = input
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .last()
            .map_or((0, ""), |(idx, l)| (idx + 1, l.trim()));
        state.blocks.finish().map_err(|e| e.at_line(last_no, last_text))
    }
}

/// Parse with default options.
pub fn parse(input: &str) -> Result<Table, CdclError> {
    Parser::new().parse(input)
}

struct ParserState {
    options: Parser,
    constants: ConstantTable,
    blocks: BlockStack,
}

impl ParserState {
    fn new(options: Parser) -> Self {
        Self {
            options,
            constants: ConstantTable::new(),
            blocks: BlockStack::new(),
        }
    }

    fn feed(&mut self, raw: &str, line_no: usize) -> Result<(), CdclError> {
        let text = raw.trim();
        let line = lexer::classify(raw, line_no)?;
        trace!(line_no, ?line, depth = self.blocks.depth(), "classified line");

        let located = |e: CdclError| e.at_line(line_no, text);

        match line {
            Line::Ignore => {}
            Line::ConstDef { name, value: raw_value } => {
                let value = evaluate_value(raw_value, &self.constants).map_err(located)?;
                self.constants.define(name, value);
            }
            Line::OpenAnonymous => self.blocks.open_anonymous().map_err(located)?,
            Line::OpenNamed { key } => self.blocks.open_named(key).map_err(located)?,
            Line::Close => self.blocks.close().map_err(located)?,
            Line::Entry { key, value: raw_value } => {
                let value = evaluate_value(raw_value, &self.constants).map_err(located)?;
                if !self.blocks.insert(key, value) {
                    if self.options.strict {
                        return Err(CdclError::syntax("Entry outside of any block", line_no, text, 130)
                            .with_hint("Wrap the entry in `{ ... }` or a named block"));
                    }
                    debug!(line_no, key, "entry outside of any block discarded");
                }
            }
            Line::Unrecognized => {
                if self.options.strict {
                    return Err(CdclError::syntax("Unrecognized line", line_no, text, 131));
                }
                debug!(line_no, text, "unrecognized line skipped");
            }
        }
        Ok(())
    }
}
