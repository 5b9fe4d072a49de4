//! Interactive console demo for the license client.
//!
//! Presents a small menu (activate / validate / deactivate / exit), prompts
//! for keys and instance ids on stdin, and threads the last activated
//! instance id through the session. Pure I/O plumbing; all licensing logic
//! lives in the `lemon-license` crate.
//!
//! Pass `--debug` to log raw API responses (sets the client debug flag and a
//! `lemon_license=debug` default filter; `RUST_LOG` overrides it).

use lemon_license::LicenseClient;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// License state the user accumulates during one session.
#[derive(Default)]
struct Session {
    license_key: Option<String>,
    instance_id: Option<String>,
}

#[tokio::main]
async fn main() {
    let debug = std::env::args().any(|arg| arg == "--debug");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(if debug { "lemon_license=debug" } else { "warn" })
            }),
        )
        .init();

    let client = LicenseClient::builder().debug(debug).build();
    let mut session = Session::default();

    loop {
        match menu_choice().as_str() {
            "0" => {
                println!("Exiting...");
                break;
            }
            "1" => activate(&client, &mut session).await,
            "2" => validate(&client, &session).await,
            "3" => deactivate(&client, &mut session).await,
            _ => println!("Invalid choice. Please try again."),
        }
        prompt("\nPress Enter to continue...");
    }
}

fn menu_choice() -> String {
    println!("\nLemon License Demo");
    println!("==================");
    println!("1. Activate License");
    println!("2. Validate License");
    println!("3. Deactivate License");
    println!("0. Exit");
    prompt("\nEnter your choice (0-3): ")
}

async fn activate(client: &LicenseClient, session: &mut Session) {
    let license_key = prompt("Enter your license key: ");
    if license_key.is_empty() {
        println!("No license key entered. Cancelling activation.");
        return;
    }

    println!("Activating license...");
    match client.activate(&license_key, None).await {
        Ok(info) => {
            session.license_key = Some(license_key);
            session.instance_id = info.instance_id.clone();
            println!(
                "License activated successfully for {}",
                info.product_name.as_deref().unwrap_or("Unknown")
            );
            println!(
                "  Instance ID: {}",
                info.instance_id.as_deref().unwrap_or("N/A")
            );
            println!("  Save this instance ID to deactivate the license later");
        }
        Err(err) => println!("Activation failed: {err}"),
    }
}

async fn validate(client: &LicenseClient, session: &Session) {
    let license_key = match &session.license_key {
        Some(key) => {
            println!("Using current license key: {}...", truncated(key));
            key.clone()
        }
        None => {
            let key = prompt("Enter license key to validate: ");
            if key.is_empty() {
                println!("No license key entered. Cancelling validation.");
                return;
            }
            key
        }
    };

    let instance_id = match &session.instance_id {
        Some(id) => Some(id.clone()),
        None => {
            let id = prompt("Enter instance ID (optional, press Enter to skip): ");
            (!id.is_empty()).then_some(id)
        }
    };

    println!("Validating license...");
    match client.validate(&license_key, instance_id.as_deref()).await {
        Ok(info) => {
            println!("\nLicense Information:");
            println!("-------------------");
            println!("Valid:      {}", info.valid);
            println!("Product:    {}", info.product_name.as_deref().unwrap_or("N/A"));
            println!("Status:     {}", info.status.as_deref().unwrap_or("N/A"));
            println!("Expires at: {}", info.expires_at.as_deref().unwrap_or("Never"));
            println!("Customer:   {}", info.customer_name.as_deref().unwrap_or("N/A"));
            println!("Email:      {}", info.customer_email.as_deref().unwrap_or("N/A"));
        }
        Err(err) => println!("Validation failed: {err}"),
    }
}

async fn deactivate(client: &LicenseClient, session: &mut Session) {
    let (license_key, instance_id) = match (&session.license_key, &session.instance_id) {
        (Some(key), Some(id)) => {
            println!("Using current license key: {}...", truncated(key));
            println!("Using current instance ID: {id}");
            (key.clone(), id.clone())
        }
        _ => {
            let key = prompt("Enter license key to deactivate: ");
            if key.is_empty() {
                println!("No license key entered. Cancelling deactivation.");
                return;
            }
            let id = prompt("Enter instance ID: ");
            if id.is_empty() {
                println!("No instance ID entered. Cancelling deactivation.");
                return;
            }
            (key, id)
        }
    };

    let confirm = prompt("Are you sure you want to deactivate the license? (y/n): ");
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Deactivation cancelled.");
        return;
    }

    println!("Deactivating license...");
    match client.deactivate(&license_key, &instance_id).await {
        Ok(()) => {
            println!("License deactivated successfully");
            if session.license_key.as_deref() == Some(license_key.as_str()) {
                session.license_key = None;
                session.instance_id = None;
            }
        }
        Err(err) => println!("Deactivation failed: {err}"),
    }
}

/// Prints a prompt and reads one trimmed line from stdin.
fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

/// First few characters of a key, for display without leaking the whole key.
fn truncated(key: &str) -> String {
    key.chars().take(8).collect()
}
