use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::config::WelcomeFormat;

use super::middleware::API_KEY_HEADER;
use super::GENERATE_PATH;

const TITLE: &str = "Welcome to the GPT Text Generation API!";
const DESCRIPTION: &str = "This API allows you to generate text using OpenAI's GPT models. \
You can send a POST request to the /generate-text/ endpoint with a 'prompt' to receive a generated response.";
const EXAMPLE_PROMPT: &str = "Tell me a short story about a brave knight.";

/// Static usage documentation served on "/".
#[derive(Debug, Clone)]
pub struct WelcomePage {
    format: WelcomeFormat,
    curl_example: String,
}

impl WelcomePage {
    pub fn new(format: WelcomeFormat, public_url: &str) -> Self {
        let endpoint = format!("{}{GENERATE_PATH}", public_url.trim_end_matches('/'));
        let curl_example = format!(
            "curl -X POST {endpoint} -H 'Content-Type: application/json' \
             -H '{API_KEY_HEADER}: <your-api-key>' -d '{{\"prompt\": \"{EXAMPLE_PROMPT}\"}}'"
        );
        Self {
            format,
            curl_example,
        }
    }

    pub fn render(&self) -> Response {
        match self.format {
            WelcomeFormat::Json => Json(self.json()).into_response(),
            WelcomeFormat::Html => Html(self.html()).into_response(),
        }
    }

    fn json(&self) -> Value {
        let endpoint = format!("POST {GENERATE_PATH}");
        let endpoint_doc = format!(
            "Generates text based on the provided prompt. Requires an API key in the '{API_KEY_HEADER}' header."
        );
        json!({
            "message": TITLE,
            "description": DESCRIPTION,
            "endpoints": {
                (endpoint): endpoint_doc,
            },
            "usage": {
                "curl_example": self.curl_example,
            },
        })
    }

    fn html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>GPT Text Generation API</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; line-height: 1.5; }}
code, pre {{ background: #f4f4f4; padding: 0.2rem 0.4rem; }}
pre {{ padding: 1rem; white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p>{description}</p>
<h2>Endpoint</h2>
<p><code>POST {path}</code> with a JSON body <code>{{"prompt": "..."}}</code>.
The <code>{header}</code> header must carry your API key.</p>
<p>A successful call returns <code>{{"response": "..."}}</code>.</p>
<h2>Example</h2>
<pre>{example}</pre>
</body>
</html>
"#,
            title = TITLE,
            description = escape_html(DESCRIPTION),
            path = GENERATE_PATH,
            header = API_KEY_HEADER,
            example = escape_html(&self.curl_example),
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
