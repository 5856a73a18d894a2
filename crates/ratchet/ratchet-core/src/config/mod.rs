//! Configuration system for Ratchet.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod ratchet_config;
pub mod report_config;
pub mod rules_config;
pub mod search_config;

pub use ratchet_config::RatchetConfig;
pub use report_config::ReportConfig;
pub use rules_config::RulesConfig;
pub use search_config::SearchConfig;
