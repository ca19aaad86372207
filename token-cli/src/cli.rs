use clap::{Args, Parser, Subcommand};
use opentok_auth::IssueType;

#[derive(Debug, Parser)]
#[command(author, version, about = "Issue signed REST API tokens", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub credentials: Credentials,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct Credentials {
    /// Project API key, used as the token issuer.
    #[arg(long, env = "OPENTOK_API_KEY")]
    pub api_key: String,

    /// Project API secret used to sign tokens.
    #[arg(long, env = "OPENTOK_API_SECRET", hide_env_values = true)]
    pub api_secret: String,

    /// Override the REST API host.
    #[arg(long, env = "OPENTOK_API_HOST")]
    pub api_host: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a freshly signed token.
    Token {
        #[arg(long, default_value = "project")]
        issue_type: IssueType,
    },
    /// Perform one authenticated GET and print the response body.
    Get {
        /// Path appended to the API host, e.g. /v2/project/<api key>.
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_defaults_to_project_scope() {
        let cli = Cli::try_parse_from([
            "token-cli",
            "--api-key",
            "k1",
            "--api-secret",
            "s1",
            "token",
        ])
        .expect("parses");

        assert_eq!(cli.credentials.api_key, "k1");
        assert!(matches!(
            cli.command,
            Command::Token {
                issue_type: IssueType::Project
            }
        ));
    }

    #[test]
    fn token_accepts_account_scope() {
        let cli = Cli::try_parse_from([
            "token-cli",
            "--api-key",
            "k1",
            "--api-secret",
            "s1",
            "token",
            "--issue-type",
            "account",
        ])
        .expect("parses");

        assert!(matches!(
            cli.command,
            Command::Token {
                issue_type: IssueType::Account
            }
        ));
    }

    #[test]
    fn unknown_scope_is_rejected() {
        let result = Cli::try_parse_from([
            "token-cli",
            "--api-key",
            "k1",
            "--api-secret",
            "s1",
            "token",
            "--issue-type",
            "global",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn get_takes_a_path_and_host_override() {
        let cli = Cli::try_parse_from([
            "token-cli",
            "--api-key",
            "k1",
            "--api-secret",
            "s1",
            "--api-host",
            "https://example.com",
            "get",
            "/v2/project/k1",
        ])
        .expect("parses");

        assert_eq!(cli.credentials.api_host.as_deref(), Some("https://example.com"));
        match cli.command {
            Command::Get { path } => assert_eq!(path, "/v2/project/k1"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
