//! JSON output formatting.

use crate::store::Credential;
use serde_json::json;
use std::io;

/// Print a credential in JSON format.
pub fn print_json(website: &str, credential: &Credential) -> io::Result<()> {
    let value = json!({
        "website": website,
        "email": credential.email,
        "password": credential.password,
    });

    let output = serde_json::to_string_pretty(&value)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", output);
    Ok(())
}
