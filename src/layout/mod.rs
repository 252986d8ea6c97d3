//! Layout descriptions - where each widget sits and on which layer
//!
//! A layout is a line-oriented text file of directives:
//!
//! ```text
//! <id:"login"; posX:10%; posY:20%; width:30%; height:15%; zScore:2; enterable:true>  ## comment
//! ```
//!
//! Parsing is lenient: malformed values fall back to defaults and lines that
//! aren't directives are skipped. It never fails.

pub mod description;
pub mod lexer;
pub mod properties;

pub use description::{parse_line, LayoutDescription, LayoutError};
pub use lexer::{scan_directive, LineToken};
pub use properties::LayoutProperties;
