//! Input validation for settings and composer text

/// Maximum characters accepted by the composer.
pub const MAX_DRAFT_CHARS: usize = 1000;

/// Validates the chat endpoint host (scheme + authority, optional port).
pub fn validate_host(host: &str) -> Result<(), String> {
    if host.is_empty() {
        return Err("Host cannot be empty".to_string());
    }

    let rest = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .ok_or_else(|| "Host must start with http:// or https://".to_string())?;

    let authority = rest.trim_end_matches('/');
    if authority.is_empty() {
        return Err("Host is missing a hostname".to_string());
    }

    if authority.contains(|c: char| c.is_whitespace() || c.is_control()) {
        return Err("Host contains invalid characters".to_string());
    }

    // The endpoint path and query are appended by the client
    if authority.contains(['/', '?', '#']) {
        return Err("Host must not include a path, query or fragment".to_string());
    }

    // Bracketed IPv6 literal without a port, e.g. `[::1]`
    let port_split = if authority.ends_with(']') {
        None
    } else {
        authority.rsplit_once(':')
    };
    if let Some((name, port)) = port_split {
        if name.is_empty() {
            return Err("Host is missing a hostname".to_string());
        }
        match port.parse::<u16>() {
            Ok(0) | Err(_) => return Err(format!("Invalid port '{}'", port)),
            Ok(_) => {}
        }
    }

    Ok(())
}

/// Validates the per-request timeout in seconds.
pub fn validate_timeout_secs(secs: u64) -> Result<(), String> {
    if secs == 0 {
        return Err("Request timeout must be at least 1 second".to_string());
    }
    if secs > 300 {
        return Err("Request timeout too long (max 300 seconds)".to_string());
    }
    Ok(())
}

/// Validates the load-more scroll threshold, a fraction of the viewport height.
pub fn validate_threshold(ratio: f32) -> Result<(), String> {
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(format!("Load-more threshold {} must be in (0, 1]", ratio));
    }
    Ok(())
}

/// Truncate a draft to `MAX_DRAFT_CHARS` characters.
pub fn sanitize_draft(text: &str) -> String {
    text.chars().take(MAX_DRAFT_CHARS).collect()
}
