//! `ars fetch`: retrieve a file directly through the GitLab client.
//!
//! Reads the same environment variables as the service
//! (`GITLAB_BASE_URL`, `GITLAB_ACCESS_TOKEN`, `ARS_DOWNLOAD_DIR`).

use anyhow::Context;
use clap::Args;

use ars_core::ArtifactDescriptor;
use ars_gitlab::{GitLabClient, GitLabConfig};

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Repository in `namespace/name` form.
    #[arg(long)]
    pub repository: String,

    /// Path to the file within the repository.
    #[arg(long)]
    pub path: String,

    /// Branch, tag, or commit id.
    #[arg(long = "ref", default_value = "main")]
    pub reference: String,

    /// Print the downloaded file content after the summary.
    #[arg(long)]
    pub show: bool,
}

pub async fn run_fetch(args: &FetchArgs) -> anyhow::Result<()> {
    let descriptor = ArtifactDescriptor::new(&args.repository, &args.path, &args.reference);
    descriptor.validate().context("invalid descriptor")?;

    let config = GitLabConfig::from_env()
        .context("GitLab configuration incomplete; set GITLAB_ACCESS_TOKEN")?;
    let client = GitLabClient::new(config)?;

    println!(
        "Retrieving {} from {} (ref: {})...",
        args.path, args.repository, args.reference
    );

    let artifact = client.retrieve(&descriptor).await?;

    println!("Artifact ID: {}", artifact.artifact_id);
    if let Some(mime) = &artifact.mime_type {
        println!("MIME type:   {mime}");
    }
    if let Some(path) = &artifact.file_path {
        println!("Saved to:    {}", path.display());
        if args.show {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            println!();
            println!("{content}");
        }
    }

    Ok(())
}
