//! Issue body templates using Handlebars.
//!
//! A body template can reference the following variables:
//!
//! | Variable      | Value                              |
//! |---------------|------------------------------------|
//! | `id`          | Diagnostic identifier              |
//! | `message`     | Diagnostic message                 |
//! | `title`       | Issue title (`"{id}: {message}"`)  |
//! | `span_start`  | Start offset of the diagnostic     |
//! | `span_length` | Length of the diagnostic span      |
//! | `span_end`    | End offset of the diagnostic       |

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};
