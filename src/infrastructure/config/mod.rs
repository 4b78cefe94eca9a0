//! Infrastructure configuration modules.

pub mod logging;
pub mod pool;
pub mod settings;

pub use settings::Config;
