use anyhow::{Context, Result, bail};
use clap::Parser;
use freee::resources::account_items::GetAccountItemsOpts;
use freee::resources::deals::GetDealsOpts;
use freee::resources::receipts::CreateReceiptParams;
use freee::resources::users::GetUsersMeOpts;
use freee::resources::walletables::GetWalletablesOpts;
use freee::{Client, Config, RefreshingTokenSource, StaticTokenSource, Token, TokenSource};
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Out-of-band redirect; the CLI never runs the authorization-code flow.
const REDIRECT_URL: &str = "urn:ietf:wg:oauth:2.0:oob";

/// freee - command line client for the freee accounting API
///
/// Responses are printed as pretty JSON.
///
/// Authenticate with FREEE_ACCESS_TOKEN, or with FREEE_REFRESH_TOKEN together
/// with FREEE_CLIENT_ID and FREEE_CLIENT_SECRET to refresh tokens on demand.
/// freee rotates refresh tokens: pass --token-file to keep the newest one, or
/// copy it from the notice printed on stderr.
///
/// Examples:
///   freee me --companies
///   freee deals --company-id 1 --limit 20
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API endpoint (defaults to https://api.freee.co.jp)
    #[arg(long = "api-url", env = "FREEE_API_URL", value_name = "URL", global = true)]
    api_url: Option<String>,

    /// OAuth2 token endpoint
    #[arg(long = "token-url", env = "FREEE_TOKEN_URL", value_name = "URL", global = true)]
    token_url: Option<String>,

    #[arg(
        long = "access-token",
        env = "FREEE_ACCESS_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true,
        global = true
    )]
    access_token: Option<String>,

    #[arg(
        long = "refresh-token",
        env = "FREEE_REFRESH_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true,
        global = true
    )]
    refresh_token: Option<String>,

    #[arg(long = "client-id", env = "FREEE_CLIENT_ID", value_name = "ID", global = true)]
    client_id: Option<String>,

    #[arg(
        long = "client-secret",
        env = "FREEE_CLIENT_SECRET",
        value_name = "SECRET",
        hide_env_values = true,
        global = true
    )]
    client_secret: Option<String>,

    /// File holding the refresh token; rewritten when the token is rotated
    #[arg(long = "token-file", env = "FREEE_TOKEN_FILE", value_name = "PATH", global = true)]
    token_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", global = true)]
    timeout: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the signed-in user
    Me(MeArgs),

    /// List deals of a company
    Deals(DealsArgs),

    /// List account items of a company
    AccountItems(CompanyArgs),

    /// List bank accounts, credit cards and wallets of a company
    Walletables(WalletablesArgs),

    /// List tax codes
    TaxCodes,

    /// Upload a receipt file
    UploadReceipt(UploadReceiptArgs),
}

#[derive(clap::Args, Debug)]
struct MeArgs {
    /// Include the companies the user belongs to
    #[arg(long)]
    companies: bool,
}

#[derive(clap::Args, Debug)]
struct CompanyArgs {
    #[arg(long = "company-id", value_name = "ID")]
    company_id: i32,
}

#[derive(clap::Args, Debug)]
struct DealsArgs {
    #[arg(long = "company-id", value_name = "ID")]
    company_id: i32,

    #[arg(long)]
    offset: Option<i32>,

    #[arg(long)]
    limit: Option<i32>,
}

#[derive(clap::Args, Debug)]
struct WalletablesArgs {
    #[arg(long = "company-id", value_name = "ID")]
    company_id: i32,

    /// Include balances
    #[arg(long = "with-balance")]
    with_balance: bool,
}

#[derive(clap::Args, Debug)]
struct UploadReceiptArgs {
    #[arg(long = "company-id", value_name = "ID")]
    company_id: i32,

    /// Date on the receipt (yyyy-mm-dd)
    #[arg(long = "issue-date", value_name = "DATE")]
    issue_date: String,

    #[arg(long)]
    description: Option<String>,

    /// File to upload
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// The token source picked for this run, kept concrete so a rotated refresh
/// token can be read back once the command is done.
enum Credentials {
    Refreshing {
        source: RefreshingTokenSource,
        initial: String,
    },
    Static(StaticTokenSource),
}

impl Credentials {
    fn as_source(&self) -> &dyn TokenSource {
        match self {
            Credentials::Refreshing { source, .. } => source,
            Credentials::Static(source) => source,
        }
    }

    /// The refresh token issued during this run, if it replaced the initial one.
    async fn rotated_refresh_token(&self) -> Option<String> {
        let Credentials::Refreshing { source, initial } = self else {
            return None;
        };
        source
            .current()
            .await
            .refresh_token
            .filter(|token| token != initial)
    }

    /// Saves a rotated refresh token to `token_file`, or prints it when there is no file.
    async fn save_rotated(&self, token_file: Option<&Path>) -> Result<()> {
        let Some(rotated) = self.rotated_refresh_token().await else {
            return Ok(());
        };
        match token_file {
            Some(path) => {
                tokio::fs::write(path, format!("{}\n", rotated))
                    .await
                    .with_context(|| format!("Failed to write refresh token to {:?}", path))?;
                debug!("Saved rotated refresh token to {:?}", path);
            }
            None => eprintln!(
                "note: the refresh token was rotated; use this one next time: {}",
                rotated
            ),
        }
        Ok(())
    }
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::new(
            self.client_id.clone().unwrap_or_default(),
            self.client_secret.clone().unwrap_or_default(),
            REDIRECT_URL,
        );
        if let Some(api_url) = &self.api_url {
            config = config.with_api_endpoint(api_url);
        }
        if let Some(token_url) = &self.token_url {
            config = config.with_token_url(token_url);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(Duration::from_secs(timeout));
        }
        config
    }

    /// `--refresh-token` first, then the contents of `--token-file`.
    fn refresh_token(&self) -> Result<Option<String>> {
        if let Some(token) = &self.refresh_token {
            return Ok(Some(token.clone()));
        }
        let Some(path) = &self.token_file else {
            return Ok(None);
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read refresh token from {:?}", path))?;
        let token = contents.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    /// Refresh credentials win over a bare access token.
    fn credentials(&self, config: &Config) -> Result<Credentials> {
        if let (Some(refresh_token), Some(_), Some(_)) =
            (self.refresh_token()?, &self.client_id, &self.client_secret)
        {
            // Access tokens carry no expiry here, so start from a refresh.
            debug!("Using refreshing token source");
            let token = Token::from_refresh_token(&refresh_token);
            return Ok(Credentials::Refreshing {
                source: RefreshingTokenSource::new(config, token)?,
                initial: refresh_token,
            });
        }
        if let Some(access_token) = &self.access_token {
            debug!("Using static access token");
            return Ok(Credentials::Static(StaticTokenSource::new(access_token)));
        }
        bail!(
            "no credentials: set FREEE_ACCESS_TOKEN, or FREEE_REFRESH_TOKEN with FREEE_CLIENT_ID and FREEE_CLIENT_SECRET"
        )
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let credentials = cli.credentials(&config)?;
    let client = Client::new(config)?;

    let result = execute(&client, credentials.as_source(), cli.command).await;
    // A refresh can rotate the token even when the command itself fails.
    let saved = credentials.save_rotated(cli.token_file.as_deref()).await;
    result.and(saved)
}

async fn execute(
    client: &Client,
    token_source: &dyn TokenSource,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Me(args) => {
            let opts = GetUsersMeOpts {
                companies: args.companies.then_some(true),
            };
            print_json(&client.get_users_me(token_source, &opts).await?)
        }
        Commands::Deals(args) => {
            let opts = GetDealsOpts {
                offset: args.offset,
                limit: args.limit,
                ..Default::default()
            };
            print_json(&client.get_deals(token_source, args.company_id, &opts).await?)
        }
        Commands::AccountItems(args) => {
            let items = client
                .get_account_items(token_source, args.company_id, &GetAccountItemsOpts::default())
                .await?;
            print_json(&items)
        }
        Commands::Walletables(args) => {
            let opts = GetWalletablesOpts {
                with_balance: args.with_balance.then_some(true),
                ..Default::default()
            };
            print_json(&client.get_walletables(token_source, args.company_id, &opts).await?)
        }
        Commands::TaxCodes => print_json(&client.get_tax_codes(token_source).await?),
        Commands::UploadReceipt(args) => {
            let receipt = tokio::fs::read(&args.file)
                .await
                .with_context(|| format!("Failed to read {:?}", args.file))?;
            let file_name = args
                .file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "receipt".to_string());
            let params = CreateReceiptParams {
                company_id: args.company_id,
                description: args.description,
                issue_date: args.issue_date,
                receipt,
            };
            print_json(&client.create_receipt(token_source, &params, &file_name).await?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(err) = &result {
        let source: &(dyn std::error::Error + 'static) = err.as_ref();
        if freee::find_api_error(source).is_some_and(|e| e.authorization_required) {
            eprintln!(
                "hint: the access token was rejected; obtain a new one or pass --refresh-token with client credentials"
            );
        }
    }
    result
}
