use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wire::{HealthResponse, Prediction, PredictionRequest, format_currency};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Invalid(String),
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] wire::WireError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "salary-cli", about = "Salary predictor API CLI")]
struct Cli {
    #[arg(long, env = "SALARY_BASE_URL", default_value = "http://127.0.0.1:5001")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `/health` and report whether the model is loaded.
    Ping,
    /// Request a salary prediction.
    Predict(PredictArgs),
    /// List the job title suggestions.
    JobTitles,
}

#[derive(Args, Debug, Clone)]
struct PredictArgs {
    #[arg(long)]
    experience: f64,
    #[arg(long)]
    age: f64,
    #[arg(long, default_value = "Male")]
    gender: String,
    #[arg(long)]
    job_title: String,
    #[arg(long)]
    education: String,
    /// Print the raw response body instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let base_url = normalize_base_url(&cli.base_url)?;
    match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::Predict(args) => run_predict(&base_url, args).await,
        Command::JobTitles => run_job_titles(&base_url).await,
    }
}

fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(CliError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = format!("{base_url}{}", wire::HEALTH_PATH);
    tracing::debug!(%url, "health check");
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    let health: HealthResponse = serde_json::from_str(&response.text().await?)?;
    println!("{}", describe_health(&health));
    Ok(())
}

async fn run_predict(base_url: &str, args: PredictArgs) -> Result<(), CliError> {
    let request = build_request(&args)?;
    let url = format!("{base_url}{}", wire::PREDICT_PATH);
    tracing::debug!(%url, job_title = %request.job_title, "predict");

    let response = reqwest::Client::new().post(url).json(&request).send().await?;
    let status = response.status();
    let text = response.text().await?;
    if args.json {
        println!("{text}");
    }

    let body = wire::decode_response(&text)?;
    let prediction = body.into_prediction().map_err(|error| CliError::Server {
        status: status.as_u16(),
        message: error.unwrap_or_else(|| "An error occurred during prediction.".to_owned()),
    })?;
    if !args.json {
        println!("{}", describe_prediction(&prediction));
    }
    Ok(())
}

async fn run_job_titles(base_url: &str) -> Result<(), CliError> {
    let url = format!("{base_url}{}", wire::JOB_TITLES_PATH);
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), message: "job titles unavailable".to_owned() });
    }
    for title in wire::parse_job_titles(&response.text().await?) {
        println!("{title}");
    }
    Ok(())
}

/// Apply the same checks the browser form runs before sending.
fn build_request(args: &PredictArgs) -> Result<PredictionRequest, CliError> {
    if !args.experience.is_finite() || !args.age.is_finite() {
        return Err(CliError::Invalid("experience and age must be finite numbers".to_owned()));
    }
    if !wire::experience_in_range(args.experience) {
        return Err(CliError::Invalid("Experience years must be between 0 and 50.".to_owned()));
    }
    if !wire::age_in_range(args.age) {
        return Err(CliError::Invalid("Age must be between 18 and 100.".to_owned()));
    }
    let job_title = args.job_title.trim();
    if job_title.is_empty() {
        return Err(CliError::Invalid("Please select a job title.".to_owned()));
    }
    let education = args.education.trim();
    if education.is_empty() {
        return Err(CliError::Invalid("Please select an education level.".to_owned()));
    }
    Ok(PredictionRequest {
        experience_years: args.experience,
        age: args.age,
        gender: args.gender.trim().to_owned(),
        job_title: job_title.to_owned(),
        education_level: education.to_owned(),
    })
}

fn describe_health(health: &HealthResponse) -> String {
    let model = if health.model_loaded { "model loaded" } else { "model NOT loaded" };
    format!("{} ({model})", health.status)
}

fn describe_prediction(prediction: &Prediction) -> String {
    format!(
        "predicted salary: {}\naverage salary:   {}\npercentile:       {}",
        format_currency(prediction.predicted_salary),
        format_currency(prediction.average_salary),
        prediction.percentile
    )
}
