//! Command configuration
//!
//! Everything a run needs is described by [`CommandOptions`]: what to pass to
//! the executable, where to run it, which evidence to inspect and how to react
//! when the run is classified as failed. Defaults are applied field by field,
//! so a partial TOML file or a handful of builder calls is enough.
//!
//! ```toml
//! parameter = "--check"
//! error_detection_on = ["return_code", "stderr"]
//! on_error_do = "raise_error"
//!
//! [error_indicators]
//! allowed_return_code = [0, 2]
//! forbidden_words_in_stderr = ["error"]
//! allowed_words_in_stderr = ["0 errors"]
//! ```

mod indicators;
mod load;
mod options;
mod types;

#[cfg(test)]
mod tests;

pub use indicators::ErrorIndicators;
pub use options::CommandOptions;
pub use types::{ErrorSource, OnError, RunVia};
