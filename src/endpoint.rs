//! Gemini endpoint addressing.
//!
//! Gemini models are reachable through two REST surfaces:
//! - **Vertex AI**: regional, project-scoped, authenticated with a bearer key.
//! - **Google AI** (Generative Language API): global, authenticated with an API key.
//!
//! [`GeminiEndpoint`] builds the `generateContent` URL for either surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// REST API version segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Stable `v1` surface.
    #[default]
    V1,
    /// Preview `v1beta` surface.
    V1Beta,
}

impl ApiVersion {
    /// Path segment used in request URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V1Beta => "v1beta",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the key travels with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`.
    Bearer,
    /// `x-goog-api-key: <key>`.
    ApiKeyHeader,
}

/// Host for the Google AI surface.
pub const GOOGLE_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Identifies which Gemini surface a client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeminiEndpoint {
    /// Vertex AI, scoped to a region and project.
    VertexAi {
        /// Region, e.g. `us-central1`.
        location: String,
        /// Google Cloud project identifier.
        project_id: String,
    },
    /// Google AI Generative Language API.
    GoogleAi,
}

impl GeminiEndpoint {
    /// Vertex AI endpoint for the given region and project.
    pub fn vertex_ai(location: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self::VertexAi {
            location: location.into(),
            project_id: project_id.into(),
        }
    }

    /// Short provider name used in logs (`"vertex_ai"` / `"google_ai"`).
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::VertexAi { .. } => "vertex_ai",
            Self::GoogleAi => "google_ai",
        }
    }

    /// Auth scheme expected by this surface.
    pub fn auth_scheme(&self) -> AuthScheme {
        match self {
            Self::VertexAi { .. } => AuthScheme::Bearer,
            Self::GoogleAi => AuthScheme::ApiKeyHeader,
        }
    }

    /// Default scheme + host for this surface.
    pub fn default_base_url(&self) -> String {
        match self {
            Self::VertexAi { location, .. } => {
                format!("https://{location}-aiplatform.googleapis.com")
            }
            Self::GoogleAi => GOOGLE_AI_BASE_URL.to_string(),
        }
    }

    /// Path of the model resource, without host or method suffix.
    pub fn model_path(&self, version: ApiVersion, model_id: &str) -> String {
        match self {
            Self::VertexAi {
                location,
                project_id,
            } => format!(
                "/{version}/projects/{project_id}/locations/{location}/publishers/google/models/{model_id}"
            ),
            Self::GoogleAi => format!("/{version}/models/{model_id}"),
        }
    }

    /// Full `generateContent` URL.
    ///
    /// `base_url` replaces only the scheme and host; the path is unchanged.
    pub fn generate_content_url(
        &self,
        base_url: Option<&str>,
        version: ApiVersion,
        model_id: &str,
    ) -> String {
        let base = match base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => self.default_base_url(),
        };
        format!(
            "{base}{}:generateContent",
            self.model_path(version, model_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_version_strings() {
        assert_eq!(ApiVersion::V1.as_str(), "v1");
        assert_eq!(ApiVersion::V1Beta.to_string(), "v1beta");
        assert_eq!(ApiVersion::default(), ApiVersion::V1);
    }

    #[test]
    fn api_version_serde() {
        let json = serde_json::to_string(&ApiVersion::V1Beta).unwrap_or_default();
        assert_eq!(json, "\"v1beta\"");
        let parsed: ApiVersion = serde_json::from_str("\"v1\"").unwrap_or(ApiVersion::V1Beta);
        assert_eq!(parsed, ApiVersion::V1);
    }

    #[test]
    fn vertex_url() {
        let endpoint = GeminiEndpoint::vertex_ai("us-central1", "my-project");
        let url = endpoint.generate_content_url(None, ApiVersion::V1, "gemini-1.5-pro");
        assert_eq!(
            url,
            "https://us-central1-aiplatform.googleapis.com/v1/projects/my-project/locations/us-central1/publishers/google/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn google_ai_url() {
        let url = GeminiEndpoint::GoogleAi.generate_content_url(
            None,
            ApiVersion::V1Beta,
            "gemini-1.5-flash",
        );
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn base_url_override_keeps_path() {
        let endpoint = GeminiEndpoint::vertex_ai("europe-west4", "proj");
        let url = endpoint.generate_content_url(Some("http://127.0.0.1:9000/"), ApiVersion::V1, "m");
        assert_eq!(
            url,
            "http://127.0.0.1:9000/v1/projects/proj/locations/europe-west4/publishers/google/models/m:generateContent"
        );
    }

    #[test]
    fn auth_schemes() {
        assert_eq!(
            GeminiEndpoint::vertex_ai("l", "p").auth_scheme(),
            AuthScheme::Bearer
        );
        assert_eq!(
            GeminiEndpoint::GoogleAi.auth_scheme(),
            AuthScheme::ApiKeyHeader
        );
    }

    #[test]
    fn provider_names() {
        assert_eq!(GeminiEndpoint::vertex_ai("l", "p").provider_name(), "vertex_ai");
        assert_eq!(GeminiEndpoint::GoogleAi.provider_name(), "google_ai");
    }
}
