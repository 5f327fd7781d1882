pub mod logging;
pub mod wav;

pub use hound;
pub use logging::ConsoleLogger;
