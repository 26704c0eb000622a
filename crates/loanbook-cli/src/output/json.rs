use serde_json::Value;

/// Pretty-print JSON to stdout.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}
