use console::{Term, style};

use forgemirror::gitea::GiteaClient;
use forgemirror::github::GitHubClient;
use forgemirror::mirror::{MirrorOptions, MirrorRunResult, mirror_account};

use crate::config;
use crate::progress::ProgressReporter;

pub(crate) async fn handle_sync(
    config: &config::Config,
    gitea_url: Option<String>,
    interval: Option<String>,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let gitea_url = gitea_url.unwrap_or_else(|| config.gitea_url());
    let gitea_user = config
        .gitea_user()
        .expect("FORGEMIRROR_GITEA_USER must be set in environment, .env file, or config file");
    let gitea_token = config
        .gitea_token()
        .expect("FORGEMIRROR_GITEA_TOKEN must be set in environment, .env file, or config file");
    let github_user = config
        .github_user()
        .expect("FORGEMIRROR_GITHUB_USER must be set in environment, .env file, or config file");
    let github_token = config
        .github_token()
        .expect("FORGEMIRROR_GITHUB_TOKEN must be set in environment, .env file, or config file");

    let source = GiteaClient::new(&gitea_url, &gitea_token)?;
    let target = GitHubClient::new(&github_token, &github_user)?;

    let options = MirrorOptions {
        interval: interval.unwrap_or_else(|| config.mirror.interval.clone()),
        sync_on_commit: config.mirror.sync_on_commit,
        dry_run,
        ..Default::default()
    };

    let callback = ProgressReporter::new().into_callback();
    let result = mirror_account(&source, &target, &gitea_user, &options, Some(&callback)).await?;

    print_summary(&gitea_user, &result, dry_run);

    Ok(())
}

fn print_summary(account: &str, result: &MirrorRunResult, dry_run: bool) {
    let term = Term::stdout();
    let header = if dry_run {
        format!("Dry run for {account} complete")
    } else {
        format!("Mirror run for {account} complete")
    };

    let _ = term.write_line("");
    let _ = term.write_line(&style(header).bold().to_string());
    let _ = term.write_line(&format!("  repositories seen:   {}", result.total));
    let _ = term.write_line(&format!("  created:             {}", result.created));
    let _ = term.write_line(&format!("  updated:             {}", result.updated));
    let _ = term.write_line(&format!(
        "  skipped (derived):   {}",
        result.skipped_derived
    ));
    let _ = term.write_line(&format!(
        "  skipped (probe):     {}",
        result.skipped_probe_failed
    ));
    let _ = term.write_line(&format!("  failed:              {}", result.failed));
    let _ = term.write_line(&format!(
        "  mirrors configured:  {}",
        result.mirrors_configured
    ));

    if result.mirror_failures > 0 {
        let _ = term.write_line(&format!(
            "  mirror failures:     {}",
            result.mirror_failures
        ));
    }

    if result.list_truncated {
        let _ = term.write_line(
            &style("  note: the repository listing was truncated by a page error")
                .yellow()
                .to_string(),
        );
    }
}
