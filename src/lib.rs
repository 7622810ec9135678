pub mod content;
pub mod error;
pub mod quiz;
pub mod style;
pub mod terminal;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{CenteringError, Result};
pub use quiz::{QuestionBank, QuizError, QuizSession, QuizState};
pub use style::{resolve, CenteringMethod, PlaygroundParams, StyleDescriptor, StyleMap};

/// Resolve a playground request given as raw strings and numbers, as a form
/// or command line would supply it.
pub fn resolve_request(method: &str, content_size: u32, parent_size: u32) -> Result<StyleDescriptor> {
    let method: CenteringMethod = method.parse()?;
    let params = PlaygroundParams::new(method, content_size, parent_size)?;
    Ok(resolve(&params))
}
