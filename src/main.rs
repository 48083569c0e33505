//! Review comments CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use review_comments::cli::{exit_code_for, write_response};
use review_comments::{
    ClientError, OctocrabReviewCommentGateway, PersonalAccessToken, ReviewCommentsConfig,
    execute_action,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(exit_code) => exit_code,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Runs the configured action and returns the exit code for GitHub's answer.
async fn run() -> Result<ExitCode, ClientError> {
    let config = load_config()?;

    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let locator = config.repository_locator()?;
    let request = config.action_request()?;

    let gateway = OctocrabReviewCommentGateway::new(&token, &locator)?;
    let response = execute_action(&gateway, &request).await?;

    write_response(&response)?;
    Ok(exit_code_for(&response))
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ClientError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewCommentsConfig, ClientError> {
    ReviewCommentsConfig::load().map_err(|error| ClientError::Configuration {
        message: error.to_string(),
    })
}
