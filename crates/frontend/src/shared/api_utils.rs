//! API utilities for frontend-backend communication

/// Port the backend listens on (see `[server] port` in config.toml)
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port,
/// e.g. "http://localhost:3000". Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("http:", "localhost"), "http://localhost:3000");
        assert_eq!(base_url("https:", "example.com"), "https://example.com:3000");
    }
}
