use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known headline fields in order of priority,
/// then fall back to the first scalar field.
pub fn print_minimal(value: &Value) {
    // Priority list of headline output fields
    let priority_keys = [
        "monthly_installment",
        "interest",
        "roi_pct",
        "remaining_amount",
        "collection_rate",
        "net_position",
        "net_profit",
        "total_salary_expense",
        "payment_amount",
        "total_returns",
    ];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to the first scalar field
        if let Some((key, val)) = map.iter().find(|(_, v)| !v.is_array() && !v.is_object()) {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(value));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
