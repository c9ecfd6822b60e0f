//! API location and request header constants.

/// Header carrying the logged-in user id on every request.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Get the base URL for API requests
///
/// `CCA_API_URL` set at build time wins. Otherwise the URL is built from the
/// current window location, using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = option_env!("CCA_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000/api", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/produtos/12");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Path of a collection, optionally pointing at one element.
pub fn resource_path(collection: &str, id: Option<i64>) -> String {
    match id {
        Some(id) => format!("/{}/{}", collection, id),
        None => format!("/{}", collection),
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path("produtos", None), "/produtos");
        assert_eq!(resource_path("garantias-lote", Some(7)), "/garantias-lote/7");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000/api", "/faqs"), "http://h:3000/api/faqs");
        assert_eq!(join_url("http://h:3000/api", "faqs"), "http://h:3000/api/faqs");
    }
}
