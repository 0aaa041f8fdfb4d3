use serde_json::Value;

use crate::models::PoolRow;

/// Map the raw trending-pools payload into display rows. Shape problems
/// degrade to an empty sequence; every item is mapped independently and no
/// combination of missing or null attributes can panic. Order is preserved.
pub fn pool_rows(raw: &Value) -> Vec<PoolRow> {
    let items = match raw.get("data").and_then(Value::as_array) {
        Some(items) => items,
        None => return Vec::new(),
    };
    let self_link = raw
        .get("links")
        .and_then(|l| l.get("self"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());

    items
        .iter()
        .map(|item| {
            let attrs = item.get("attributes").cloned().unwrap_or(Value::Null);

            let name = non_empty_str(&attrs, "name")
                .or_else(|| non_empty_str(&attrs, "base_token_symbol"))
                .unwrap_or("unknown")
                .to_string();

            let dex = non_empty_str(&attrs, "dex")
                .or_else(|| non_empty_str(&attrs, "dex_slug"))
                .or_else(|| non_empty_str(&attrs, "dex_name"))
                .unwrap_or("")
                .to_string();

            let url = non_empty_str(&attrs, "trade_url")
                .or(self_link)
                .map(|s| s.to_string());

            PoolRow {
                id: item
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                name,
                price_usd: coerce_number(attrs.get("base_token_price_usd")),
                change_24h: attrs
                    .get("price_change_percentage_24h")
                    .and_then(Value::as_f64)
                    .map(|pct| format!("{:.2}", pct)),
                volume_24h: coerce_number(attrs.get("volume_usd_24h")),
                url,
                dex,
            }
        })
        .collect()
}

fn non_empty_str<'a>(attrs: &'a Value, key: &str) -> Option<&'a str> {
    attrs.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// JS-style numeric coercion: null/absent stays None; numbers pass through;
/// strings parse, with the empty string going to 0 and garbage going to NaN.
/// The NaN is deliberate — it flows through to the renderer unguarded.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                Some(trimmed.parse::<f64>().unwrap_or(f64::NAN))
            }
        }
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(_) => Some(f64::NAN),
    }
}
