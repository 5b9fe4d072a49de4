//! One-shot license validation: gate a feature on the result.
//!
//! Run with: `cargo run --example quick_check`

use lemon_license::LicenseClient;

#[tokio::main]
async fn main() {
    let client = LicenseClient::new();
    let license_key = "5AD5D964-FBC2-4FF8-81D2-9AC4A78EE46D";

    match client.validate(license_key, None).await {
        Ok(_) => println!("premium features are available"),
        Err(err) => println!("basic features only: {err}"),
    }
}
