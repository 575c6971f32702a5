//! Service endpoint configuration.
//!
//! The normalisation layer performs no I/O itself. These settings tell the
//! transport collaborator where the two backend services live and which
//! queue topics connect them.

use std::env;

/// Environment variable overriding the Java service base URL.
pub const JAVA_BASE_URL_VAR: &str = "INTERLACE_JAVA_BASE_URL";
/// Environment variable overriding the Python service base URL.
pub const PYTHON_BASE_URL_VAR: &str = "INTERLACE_PYTHON_BASE_URL";
/// Environment variable naming the topic the Java service publishes to.
pub const TOPIC_FROM_JAVA_VAR: &str = "TOPIC_FROM_JAVA";
/// Environment variable naming the topic the Python service publishes to.
pub const TOPIC_FROM_PYTHON_VAR: &str = "TOPIC_FROM_PYTHON";

const DEFAULT_JAVA_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_PYTHON_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TOPIC_FROM_JAVA: &str = "demo.from.java";
const DEFAULT_TOPIC_FROM_PYTHON: &str = "demo.from.python";

/// One of the two backend services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTarget {
    /// The Java service.
    Java,
    /// The Python service.
    Python,
}

impl ServiceTarget {
    /// Both services.
    pub const ALL: [Self; 2] = [Self::Java, Self::Python];

    /// Returns the lower-case name used in status lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Python => "python",
        }
    }

    /// Status line shown while a payload is in flight.
    #[must_use]
    pub fn sending_status(self) -> String {
        format!("Sending payload to {} service...", self.as_str())
    }

    /// Status line shown once a service accepts a payload.
    #[must_use]
    pub fn accepted_status(self) -> String {
        format!("Accepted by {} service.", self.as_str())
    }
}

/// Status line for a failed submission.
#[must_use]
pub fn send_failed_status(message: &str) -> String {
    format!("Failed to send: {message}")
}

/// Status line for a failed refresh.
#[must_use]
pub fn refresh_failed_status(message: &str) -> String {
    format!("Unable to refresh: {message}")
}

/// Where the backend services live and how their topics are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    /// Base URL of the Java service.
    pub java_base_url: String,
    /// Base URL of the Python service.
    pub python_base_url: String,
    /// Topic the Java service publishes to.
    pub topic_from_java: String,
    /// Topic the Python service publishes to.
    pub topic_from_python: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            java_base_url: DEFAULT_JAVA_BASE_URL.to_owned(),
            python_base_url: DEFAULT_PYTHON_BASE_URL.to_owned(),
            topic_from_java: DEFAULT_TOPIC_FROM_JAVA.to_owned(),
            topic_from_python: DEFAULT_TOPIC_FROM_PYTHON.to_owned(),
        }
    }
}

impl ServiceEndpoints {
    /// Reads endpoints from the process environment.
    ///
    /// Environment variables:
    /// - `INTERLACE_JAVA_BASE_URL` (default: `http://localhost:8080`)
    /// - `INTERLACE_PYTHON_BASE_URL` (default: `http://localhost:8000`)
    /// - `TOPIC_FROM_JAVA` (default: `demo.from.java`)
    /// - `TOPIC_FROM_PYTHON` (default: `demo.from.python`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads endpoints through `lookup`, falling back to defaults.
    ///
    /// Unset variables use their default silently; blank values use it with a
    /// warning. A trailing `/` on a base URL is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use interlace::config::ServiceEndpoints;
    ///
    /// let endpoints = ServiceEndpoints::from_lookup(|name| {
    ///     (name == "INTERLACE_JAVA_BASE_URL").then(|| "http://java:9090/".to_owned())
    /// });
    /// assert_eq!(endpoints.java_base_url, "http://java:9090");
    /// assert_eq!(endpoints.topic_from_python, "demo.from.python");
    /// ```
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &'static str, default: &str| setting(&lookup, name, default);
        Self {
            java_base_url: read(JAVA_BASE_URL_VAR, DEFAULT_JAVA_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            python_base_url: read(PYTHON_BASE_URL_VAR, DEFAULT_PYTHON_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            topic_from_java: read(TOPIC_FROM_JAVA_VAR, DEFAULT_TOPIC_FROM_JAVA),
            topic_from_python: read(TOPIC_FROM_PYTHON_VAR, DEFAULT_TOPIC_FROM_PYTHON),
        }
    }

    /// Returns the base URL for `target`.
    #[must_use]
    pub fn base_url(&self, target: ServiceTarget) -> &str {
        match target {
            ServiceTarget::Java => &self.java_base_url,
            ServiceTarget::Python => &self.python_base_url,
        }
    }

    /// Returns the topic `target` publishes to.
    #[must_use]
    pub fn published_topic(&self, target: ServiceTarget) -> &str {
        match target {
            ServiceTarget::Java => &self.topic_from_java,
            ServiceTarget::Python => &self.topic_from_python,
        }
    }
}

fn setting(lookup: &impl Fn(&str) -> Option<String>, name: &'static str, default: &str) -> String {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
        Some(_) => {
            tracing::warn!(variable = name, default, "blank setting, using default");
            default.to_owned()
        }
        None => default.to_owned(),
    }
}
