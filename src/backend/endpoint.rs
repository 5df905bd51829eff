use url::Url;

/// Append an endpoint path to a provider base URL, keeping any base path
/// prefix (e.g. "/v1") and dropping query or fragment.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(base_url)?;

    let base_path = parsed.path().trim_end_matches('/');
    let trimmed_path = path.trim_start_matches('/');

    let full_path = match (base_path.is_empty(), trimmed_path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{trimmed_path}"),
        (false, true) => base_path.to_string(),
        (false, false) => format!("{base_path}/{trimmed_path}"),
    };

    parsed.set_path(&full_path);
    parsed.set_query(None);
    parsed.set_fragment(None);

    Ok(parsed.to_string())
}
