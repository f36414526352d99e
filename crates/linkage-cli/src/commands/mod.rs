//! Command implementations.

pub mod analyze;
pub mod build;
pub mod lexicon;

pub use self::analyze::execute_analyze;
pub use self::build::execute_build;
pub use self::lexicon::execute_lexicon;
