use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Render output as tables using the tabled crate.
///
/// Scalar fields become a two-column field/value table; nested arrays and
/// objects (a book summary's loan rows, an investor report's slices) render
/// as their own labelled sections below it.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            let scalars: Vec<(&String, &Value)> = map
                .iter()
                .filter(|(_, v)| !v.is_array() && !v.is_object())
                .collect();
            if !scalars.is_empty() {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, val) in &scalars {
                    builder.push_record([key.as_str(), &format_value(val)]);
                }
                println!("{}", Table::from(builder));
            }

            for (key, val) in map {
                match val {
                    Value::Array(arr) => {
                        println!("\n{}:", key);
                        print_array_table(arr);
                    }
                    Value::Object(_) => {
                        println!("\n{}:", key);
                        print_table(val);
                    }
                    _ => {}
                }
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Headers come from the first object's keys
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
