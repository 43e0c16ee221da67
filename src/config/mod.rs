//! Configuration for the Gemini connector.
//!
//! Provides TOML-based configuration with:
//! - Backend selection (Vertex AI or Google AI)
//! - Secret resolution (env vars, literals)
//! - Default execution settings and runtime options
//!
//! # Architecture
//!
//! - **types**: Schema structs (`ConnectorConfig`, `ServiceConfig`, `SecretRef`, etc.)
//! - **persist**: File I/O (`read_config`, `read_config_text`)
//! - **service**: Validation and service construction (`validate_config`, `build_service`)
//!
//! # Quick Start
//!
//! ```
//! use gemini_connector::config::{ConnectorConfig, build_service};
//!
//! let toml_str = r#"
//! [service]
//! backend = "google_ai"
//! model_id = "gemini-1.5-flash"
//! api_key = { type = "literal", value = "AIza-example" }
//! "#;
//! let config: ConnectorConfig = toml::from_str(toml_str)?;
//! let service = build_service(&config)?;
//! assert_eq!(service.model_id(), Some("gemini-1.5-flash"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod persist;
pub mod service;
pub mod types;

pub use persist::{read_config, read_config_text};
pub use service::{build_service, validate_config};
pub use types::{Backend, ConnectorConfig, RuntimeConfig, SecretRef, ServiceConfig};
