use crate::models::PoolRow;
use crate::ui::{change_color, format, RESET};

/// Print the trending-pool rows as a fixed-width table. Every cell is
/// already a display-ready primitive; missing values render as "n/a".
pub fn draw(rows: &[PoolRow]) {
    if rows.is_empty() {
        println!("  no pools");
        return;
    }

    println!(
        "  {:<28} {:>14} {:>10} {:>14} {:<14} {}",
        "name", "price", "24h chg", "24h volume", "dex", "trade"
    );
    println!("  {}", "─".repeat(96));

    for row in rows {
        let price = match row.price_usd {
            Some(p) => format::usd(p),
            None => "n/a".to_string(),
        };
        let volume = match row.volume_24h {
            Some(v) => format::usd(v),
            None => "n/a".to_string(),
        };
        let change = match &row.change_24h {
            Some(c) => format!("{}%", c),
            None => "n/a".to_string(),
        };
        let color = change_color(row.change_24h.as_deref());
        let trade = row.url.as_deref().unwrap_or("n/a");

        println!(
            "  {:<28} {:>14} {}{:>10}{} {:>14} {:<14} {}",
            truncate(&row.name, 28),
            price,
            color,
            change,
            RESET,
            volume,
            truncate(&row.dex, 14),
            trade
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_names() {
        assert_eq!(truncate("WSEI / USDC", 28), "WSEI / USDC");
    }

    #[test]
    fn truncate_cuts_long_names_with_ellipsis() {
        let long = "a-very-long-pool-name-that-overflows-the-column";
        let cut = truncate(long, 14);
        assert_eq!(cut.chars().count(), 14);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn draw_handles_gap_rows() {
        // n/a price, NaN volume and empty dex must all render without panic
        let rows = vec![PoolRow {
            id: "p1".to_string(),
            name: "unknown".to_string(),
            price_usd: None,
            change_24h: None,
            volume_24h: Some(f64::NAN),
            url: None,
            dex: String::new(),
        }];
        draw(&rows);
    }
}
