pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;

pub use ast::{Table, Value};
pub use config::CdclConfig;
pub use error::CdclError;
pub use export::OutputFormat;
pub use parser::{parse, Parser};
