//! URL path versioning with a self-documenting route registry
//!
//! Routes are registered through [`VersionedApiBuilder`], which nests every
//! route set under its version path (e.g. `/api/v1`). Each registration also
//! records an [`EndpointDoc`], so the endpoint list reported by the health
//! check is rendered from the real route table instead of being maintained
//! by hand.

use axum::handler::Handler;
use axum::routing::{get, post};
use axum::Router;
use std::fmt;

use crate::AppState;

/// API version identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ApiVersion {
    /// API Version 1
    V1,
    /// API Version 2
    V2,
}

impl ApiVersion {
    /// Parse version from string (e.g., "v1", "V1", "1")
    pub fn parse(s: &str) -> Option<Self> {
        let lowercase = s.to_lowercase();
        let normalized = lowercase.trim_start_matches('v');
        match normalized {
            "1" => Some(Self::V1),
            "2" => Some(Self::V2),
            _ => None,
        }
    }

    /// Get the version as a path segment (e.g., "v1")
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

/// One registered route: method, full path, and an optional usage hint
/// (query or body example) that cannot be derived from the route table.
#[derive(Debug, Clone)]
pub struct EndpointDoc {
    method: &'static str,
    path: String,
    usage: Option<&'static str>,
}

impl EndpointDoc {
    fn new(method: &'static str, path: &str, usage: Option<&'static str>) -> Self {
        Self {
            method,
            path: path.to_string(),
            usage,
        }
    }

    fn prefixed(mut self, prefix: &str) -> Self {
        self.path = format!("{}{}", prefix, self.path);
        self
    }

    /// Render the documented signature, e.g. `GET  /api/v1/hello?name=YourName`
    pub fn render(&self) -> String {
        format!("{:<4} {}{}", self.method, self.path, self.usage.unwrap_or(""))
    }
}

/// A set of routes for one API version.
///
/// Wraps the underlying router so that every registration is recorded in the
/// endpoint catalog alongside the route itself.
pub struct RouteSet {
    router: Router<AppState>,
    docs: Vec<EndpointDoc>,
}

impl RouteSet {
    fn new() -> Self {
        Self {
            router: Router::new(),
            docs: Vec::new(),
        }
    }

    /// Register a GET route
    pub fn get<H, T>(mut self, path: &str, usage: Option<&'static str>, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.docs.push(EndpointDoc::new("GET", path, usage));
        self.router = self.router.route(path, get(handler));
        self
    }

    /// Register a POST route
    pub fn post<H, T>(mut self, path: &str, usage: Option<&'static str>, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.docs.push(EndpointDoc::new("POST", path, usage));
        self.router = self.router.route(path, post(handler));
        self
    }
}

/// Builder for creating versioned API routers
///
/// All routes live under a version path segment; an optional base path (e.g.
/// `/api`) is prepended to every version.
pub struct VersionedApiBuilder {
    versions: Vec<(ApiVersion, RouteSet)>,
    base_path: Option<String>,
}

impl Default for VersionedApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionedApiBuilder {
    /// Create a new versioned API builder
    pub fn new() -> Self {
        Self {
            versions: Vec::new(),
            base_path: None,
        }
    }

    /// Set a base path for all versioned routes (e.g., "/api")
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        // Ensure path starts with / and doesn't end with /
        let normalized = if !path.starts_with('/') {
            format!("/{}", path.trim_end_matches('/'))
        } else {
            path.trim_end_matches('/').to_string()
        };
        self.base_path = Some(normalized);
        self
    }

    /// Add an API version and register its routes
    pub fn add_version<F>(mut self, version: ApiVersion, routes: F) -> Self
    where
        F: FnOnce(RouteSet) -> RouteSet,
    {
        let set = routes(RouteSet::new());
        self.versions.push((version, set));
        self
    }

    /// Get the number of versions registered
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Check if a specific version has been added
    pub fn has_version(&self, version: ApiVersion) -> bool {
        self.versions.iter().any(|(v, _)| *v == version)
    }

    /// Build the versioned routes and their endpoint catalog
    pub fn build_routes(self) -> VersionedRoutes {
        let mut router = Router::new();
        let mut endpoints = Vec::new();

        for (version, set) in self.versions {
            let version_path = format!("/{}", version.as_path_segment());
            let full_path = match &self.base_path {
                Some(base) => format!("{}{}", base, version_path),
                None => version_path,
            };

            router = router.nest(&full_path, set.router);
            endpoints.extend(set.docs.into_iter().map(|doc| doc.prefixed(&full_path)));
        }

        VersionedRoutes { router, endpoints }
    }
}

/// The built versioned routes plus the catalog recorded while registering
/// them. Can only be produced by [`VersionedApiBuilder::build_routes`].
pub struct VersionedRoutes {
    router: Router<AppState>,
    endpoints: Vec<EndpointDoc>,
}

impl VersionedRoutes {
    pub fn into_parts(self) -> (Router<AppState>, Vec<EndpointDoc>) {
        (self.router, self.endpoints)
    }
}
