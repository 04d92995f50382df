//! Output formats for scanned tokens
//!
//!     tokens:  one `Kind<TAB>"text"` line per token, for inspection and tests
//!     json:    array of `{kind, text, span}` objects
//!     yaml:    the same structure as YAML
//!     html:    `<span class=..>` markup using short category class names
//!     ansi:    terminal colours from the configured theme

pub mod ansi;
pub mod html;
pub mod registry;
pub mod serial;
pub mod tokens;

pub use ansi::AnsiFormatter;
pub use html::HtmlFormatter;
pub use registry::{FormatRegistry, Formatter};
pub use serial::{JsonFormatter, YamlFormatter};
pub use tokens::TokensFormatter;
