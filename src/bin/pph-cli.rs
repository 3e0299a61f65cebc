use clap::{Parser, Subcommand};
use serde_json::Value;

use path_param_headers::headers::{map_to_headers, DEFAULT_HEADER_PREFIX};
use path_param_headers::template::CompiledMatcher;

#[derive(Parser)]
#[command(name = "pph-cli")]
#[command(about = "Inspect path-param header extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a path against a template and print the headers it would get
    Extract {
        /// Path template, e.g. "/products/{category}/{id}"
        #[arg(long)]
        pattern: String,
        /// Request path to match
        #[arg(long)]
        path: String,
        /// Header prefix
        #[arg(long, default_value = DEFAULT_HEADER_PREFIX)]
        prefix: String,
    },
    /// Send a request to a running echo server and print what it saw
    Probe {
        #[arg(short, long, default_value = "http://localhost:8000")]
        url: String,
        /// Path (and optional query) to request
        #[arg(long, default_value = "/")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { pattern, path, prefix } => {
            let matcher = CompiledMatcher::compile(&pattern)?;
            println!("pattern: {}", matcher.pattern());
            match matcher.match_path(&path) {
                Some(params) => {
                    for header in map_to_headers(&params, &prefix) {
                        println!("{}: {}", header.name, header.value);
                    }
                }
                None => println!("no match"),
            }
        }
        Commands::Probe { url, path } => {
            let target = url::Url::parse(&url)?.join(&path)?;
            let res = reqwest::Client::new().get(target).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: echo server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
