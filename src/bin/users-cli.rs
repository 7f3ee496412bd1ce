use clap::{Parser, Subcommand};
use reqwest::Url;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "users-cli")]
#[command(about = "Command-line client for the user directory service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every user
    List,
    /// Look up one user by exact email
    Get { email: String },
    /// Search users by partial email (e.g. "jane@gmail", "@.com", "gmail")
    Search { filter: String },
    /// Create a user
    Create {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Delete a user by exact email
    Delete { email: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::List => client.get(users_url(&cli.url, None)?).send().await?,
        Commands::Get { email } => {
            client
                .get(users_url(&cli.url, Some(&email))?)
                .query(&[("exact", "true")])
                .send()
                .await?
        }
        Commands::Search { filter } => {
            client
                .get(users_url(&cli.url, Some(&filter))?)
                .send()
                .await?
        }
        Commands::Create {
            email,
            phone,
            password,
        } => {
            client
                .post(users_url(&cli.url, None)?)
                .json(&json!({ "email": email, "phone": phone, "password": password }))
                .send()
                .await?
        }
        Commands::Delete { email } => {
            client
                .delete(users_url(&cli.url, Some(&email))?)
                .send()
                .await?
        }
    };

    print_response(res).await
}

/// `<base>/users` or `<base>/users/<value>`, with `value` percent-encoded as one segment.
fn users_url(base: &str, value: Option<&str>) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| "service URL cannot carry a path")?;
        segments.pop_if_empty().push("users");
        if let Some(value) = value {
            segments.push(value);
        }
    }
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
