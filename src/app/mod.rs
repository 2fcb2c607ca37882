//! Application state, configuration and dictionary loading

pub mod config;
pub mod loader;
pub mod state;

pub use config::{Args, Config};
pub use loader::{DictionaryLoader, DictionaryStatus};
pub use state::App;
