pub mod address;
pub mod cli;
pub mod commands;
pub mod console;
pub mod constants;
pub mod display;
pub mod errors;
pub mod model;
pub mod settings;
pub mod store;
pub mod terminal;
pub mod text;
pub mod validator;
pub mod wizard;

// Re-export commonly used types
pub use address::{AddressConverter, UniversalAddressConverter};
pub use constants::{Chain, Environment, Mode};
pub use model::{ChainConfig, DeploymentConfig};
pub use store::ConfigStore;
pub use text::TextWrapper;
