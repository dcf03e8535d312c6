mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, LoggingSettings, NormalizerSettings, OracleProvider, OracleSettings,
    ServerSettings, Settings,
};
