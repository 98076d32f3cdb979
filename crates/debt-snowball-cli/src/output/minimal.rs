use serde_json::Value;

/// Key answers in priority order; dotted paths reach into nested objects.
const PRIORITY_PATHS: [&str; 6] = [
    "totals.total",
    "total",
    "offset",
    "category",
    "loan.id",
    "width",
];

/// Print just the key answer from the output.
///
/// Objects: the first non-null priority path, else the first field.
/// Arrays of loans: one `id<TAB>name<TAB>amount` line per entry.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            for path in &PRIORITY_PATHS {
                if let Some(val) = lookup(result, path) {
                    if !val.is_null() {
                        println!("{}", format_minimal(val));
                        return;
                    }
                }
            }
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_minimal(val));
            }
        }
        Value::Array(items) => {
            for item in items {
                println!("{}", format_row(item));
            }
        }
        other => println!("{}", format_minimal(other)),
    }
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
}

fn format_row(item: &Value) -> String {
    let fields: Vec<String> = ["id", "name", "amount"]
        .iter()
        .filter_map(|k| item.get(*k))
        .map(format_minimal)
        .collect();
    if fields.is_empty() {
        format_minimal(item)
    } else {
        fields.join("\t")
    }
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
