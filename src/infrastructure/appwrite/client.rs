use reqwest::{Method, RequestBuilder};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";

/// Authenticated entry point to the Appwrite REST API shared by the storage
/// and database adapters.
#[derive(Clone)]
pub struct AppwriteClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: String,
}

impl AppwriteClient {
    pub fn new(http: reqwest::Client, endpoint: &str, project_id: &str, api_key: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// `path` is appended to the endpoint verbatim and must start with `/`.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.endpoint, path))
            .header(PROJECT_HEADER, &self.project_id)
            .header(KEY_HEADER, &self.api_key)
    }
}
