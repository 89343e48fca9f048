pub mod error;
pub mod glossary;
pub mod normalize;
pub mod ui;

pub use error::{GlossaryError, Result};
pub use glossary::Glossary;
pub use normalize::normalize;
pub use ui::Host;
