//! crm-store CLI Client
//!
//! Command-line interface for interacting with the customer store server.

use clap::{Parser, Subcommand};
use crm_store::protocol::{encode_customer, ErrorResponse, LoadRequest};
use crm_store::Customer;
use reqwest::{header, Client, RequestBuilder, StatusCode};

type CliResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// crm-store CLI
#[derive(Parser, Debug)]
#[command(name = "crm-cli")]
#[command(about = "CLI for the crm-store customer API")]
#[command(version)]
struct Args {
    /// Server URL
    #[arg(short, long, default_value = "http://127.0.0.1:4000")]
    server: String,

    /// Path prefix for the customer routes
    #[arg(short, long, default_value = "/customers")]
    base_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all customers
    List,

    /// Get a customer by id
    Get {
        /// The customer id
        id: i64,
    },

    /// Add a new customer
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Update fields of an existing customer (omitted fields are kept)
    Update {
        /// The customer id
        id: i64,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Mark the customer as contacted
        #[arg(long)]
        contacted: bool,
    },

    /// Delete a customer by id
    Delete {
        /// The customer id
        id: i64,
    },

    /// Replace the server's customers with a JSON file on the server host
    Load {
        /// Path of the file, as seen by the server
        path: String,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match run(args).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Execute the command and return what to print
async fn run(args: Args) -> CliResult<String> {
    let client = Client::new();
    let collection = format!("{}{}", args.server.trim_end_matches('/'), args.base_path);
    let item = |id: i64| format!("{}/{}", collection, id);

    let request = match args.command {
        Commands::List => client.get(&collection),
        Commands::Get { id } => client.get(item(id)),
        Commands::Add {
            name,
            role,
            email,
            phone,
        } => with_json(
            client.post(&collection),
            encode_customer(&Customer::new(0, name, role, email, phone))?,
        ),
        Commands::Update {
            id,
            name,
            role,
            email,
            phone,
            contacted,
        } => {
            let patch = Customer {
                contacted,
                ..Customer::new(0, name, role, email, phone)
            };
            with_json(client.patch(item(id)), encode_customer(&patch)?)
        }
        Commands::Delete { id } => client.delete(item(id)),
        Commands::Load { path } => {
            let url = format!("{}/load-test-data", args.server.trim_end_matches('/'));
            client.post(url).json(&LoadRequest::new(path))
        }
    };

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(if status == StatusCode::NO_CONTENT {
            "ok".to_string()
        } else {
            body.trim_end().to_string()
        });
    }

    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    Err(format!("{}: {}", status, message).into())
}

fn with_json(request: RequestBuilder, body: Vec<u8>) -> RequestBuilder {
    request
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
}
