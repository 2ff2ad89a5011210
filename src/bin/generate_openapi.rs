//! Utility to write the OpenAPI document to a file (or stdout).
//!
//! Usage: `cargo run --bin generate_openapi [output-path]`

use agri_advisor_api::openapi::openapi_json;

fn main() -> anyhow::Result<()> {
    let spec = openapi_json()?;

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, spec)?;
            println!("OpenAPI spec written to {}", path);
        }
        None => println!("{}", spec),
    }

    Ok(())
}
