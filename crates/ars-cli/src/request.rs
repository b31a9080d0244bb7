//! `ars request`: exercise a running service instance over HTTP.
//!
//! POSTs the descriptor to `POST /api/v1/artifacts` and prints the JSON
//! response. Non-2xx responses print the service's `detail` and exit
//! nonzero.

use std::time::Duration;

use anyhow::Context;
use clap::Args;

use ars_core::ArtifactDescriptor;

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Repository in `namespace/name` form.
    #[arg(long)]
    pub repository: String,

    /// Path to the file within the repository.
    #[arg(long)]
    pub path: String,

    /// Branch, tag, or commit id.
    #[arg(long = "ref", default_value = "main")]
    pub reference: String,

    /// Base URL of the running service.
    #[arg(long, default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Correlation id to send as `X-Correlation-ID`.
    #[arg(long)]
    pub correlation_id: Option<String>,
}

pub async fn run_request(args: &RequestArgs) -> anyhow::Result<()> {
    let descriptor = ArtifactDescriptor::new(&args.repository, &args.path, &args.reference);
    let url = artifacts_url(&args.api_url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("failed to build HTTP client")?;

    let mut request = client.post(&url).json(&descriptor);
    if let Some(correlation_id) = &args.correlation_id {
        request = request.header("X-Correlation-ID", correlation_id);
    }

    println!("POST {url}");
    let response = request
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;
    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .context("service response was not JSON")?;

    if status.is_success() {
        println!("{}", serde_json::to_string_pretty(&body)?);
        Ok(())
    } else {
        let detail = body["detail"].as_str().unwrap_or("unknown error");
        anyhow::bail!("service returned {status}: {detail}")
    }
}

/// Join the artifacts endpoint onto a base URL, tolerating trailing slashes.
fn artifacts_url(api_url: &str) -> String {
    format!("{}/api/v1/artifacts", api_url.trim_end_matches('/'))
}
