use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use paypal_gateway::GatewayError;
use paypal_gateway::application::gateway::PaypalGateway;
use paypal_gateway::config::{EnvConfig, GatewayDefaults, read_pem};
use paypal_gateway::domain::options::{Credentials, GatewayMode};
use paypal_gateway::domain::response::Response;
use paypal_gateway::infrastructure::http::DEFAULT_TIMEOUT_SECS;
use paypal_gateway::interfaces::json::requests::{
    ChargeRequest, ExpressPurchaseRequest, ExpressSetupRequest, RequestReader,
};
use paypal_gateway::logging::{LogLevel, init_logger};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API username (falls back to PAYPAL_GATEWAY_LOGIN)
    #[arg(long, global = true)]
    login: Option<String>,

    /// API password (falls back to PAYPAL_GATEWAY_PASSWORD)
    #[arg(long, global = true)]
    password: Option<String>,

    /// PEM file holding the API certificate and key
    #[arg(long, global = true)]
    pem_file: Option<PathBuf>,

    /// Gateway mode: test or live
    #[arg(long, global = true)]
    mode: Option<GatewayMode>,

    /// HTTP timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Charge a card from a JSON request file
    Purchase { request: PathBuf },
    /// Start an Express Checkout from a JSON request file
    ExpressSetup { request: PathBuf },
    /// Look up the payer behind an Express Checkout token
    ExpressDetails { token: String },
    /// Complete an Express Checkout from a JSON request file
    ExpressPurchase { request: PathBuf },
}

fn read_request<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).into_diagnostic()?;
    RequestReader::new(file).read().into_diagnostic()
}

fn print_response(response: &Response) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, response).into_diagnostic()?;
    writeln!(out).into_diagnostic()
}

/// Prints the outcome. Faults still print their normalized response before failing.
fn report(result: paypal_gateway::Result<Response>) -> Result<()> {
    match result {
        Ok(response) => print_response(&response),
        Err(GatewayError::Fault(response)) => {
            print_response(&response)?;
            Err(miette!("{}", response.message()))
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = EnvConfig::load();

    let level = match cli.log_level {
        Some(level) => level,
        None => env.log_level().into_diagnostic()?.unwrap_or(LogLevel::Warn),
    };
    init_logger(level);

    let mut defaults: GatewayDefaults = env.defaults().into_diagnostic()?;
    if let Some(mode) = cli.mode {
        defaults.mode = mode;
    }
    if let Some(path) = &cli.pem_file {
        defaults.pem = Some(read_pem(path).into_diagnostic()?);
    }

    let login = cli
        .login
        .or(env.login.clone())
        .ok_or_else(|| miette!("Missing required parameter: login"))?;
    let password = cli
        .password
        .or(env.password.clone())
        .ok_or_else(|| miette!("Missing required parameter: password"))?;
    let timeout = match cli.timeout {
        Some(timeout) => timeout,
        None => env.timeout().into_diagnostic()?.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    let gateway = PaypalGateway::connect(Credentials::new(login, password), &defaults, timeout)
        .into_diagnostic()?;

    match cli.command {
        Command::Purchase { request } => {
            let request: ChargeRequest = read_request(&request)?;
            let amount = request.amount().into_diagnostic()?;
            report(gateway.purchase(amount, &request.card, &request.options).await)
        }
        Command::ExpressSetup { request } => {
            let request: ExpressSetupRequest = read_request(&request)?;
            let amount = request.amount().into_diagnostic()?;
            let express = gateway.express();
            let result = express.setup_purchase(amount, &request.options).await;
            if let Ok(response) = &result
                && let Some(token) = response.authorization()
            {
                eprintln!("Redirect the buyer to {}", express.redirect_url_for(token));
            }
            report(result)
        }
        Command::ExpressDetails { token } => report(gateway.express().details_for(&token).await),
        Command::ExpressPurchase { request } => {
            let request: ExpressPurchaseRequest = read_request(&request)?;
            let amount = request.amount().into_diagnostic()?;
            report(gateway.express().purchase(amount, &request.options).await)
        }
    }
}
