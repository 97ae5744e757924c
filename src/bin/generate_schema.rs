//! Print the JSON schema of the render configuration
//!
//! Run with: cargo run --features dev-bins --bin generate_schema

use tabstrip::config::RenderConfig;

fn main() {
    let schema = schemars::schema_for!(RenderConfig);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize schema: {e}");
            std::process::exit(1);
        }
    }
}
