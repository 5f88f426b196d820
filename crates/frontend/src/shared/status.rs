//! Status tokens, labels and small text helpers shared by every table.

/// Display form of an internal status token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: String,
    pub css_class: String,
}

/// Map a status token (`checked-in`, `unpaid`, `Maintenance`, ...) to its label
/// and CSS class. Pure: depends on nothing but the token.
pub fn status_display(token: &str) -> StatusDisplay {
    let slug = slugify(token);
    let (label, modifier) = match slug.as_str() {
        "confirmed" => ("Confirmed".to_string(), "arriving".to_string()),
        "checked-in" | "in-house" => ("In House".to_string(), "in-house".to_string()),
        "checked-out" => ("Checked Out".to_string(), "departing".to_string()),
        "" => ("Unknown".to_string(), "unknown".to_string()),
        _ => (title_case(&slug.replace('-', " ")), slug.clone()),
    };
    StatusDisplay {
        label,
        css_class: format!("status status--{}", modifier),
    }
}

/// Badge colour for a status, matching the badge variants of the UI kit.
pub fn status_variant(token: &str) -> &'static str {
    match slugify(token).as_str() {
        "available" | "active" | "paid" | "checked-in" | "in-house" => "success",
        "occupied" | "partial" | "pending" | "confirmed" => "warning",
        "maintenance" | "cancelled" | "unpaid" | "overdue" | "inactive" => "error",
        "cleaning" => "primary",
        _ => "neutral",
    }
}

fn slugify(token: &str) -> String {
    token
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// `room service` -> `Room Service`
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join the first `limit` items with `, ` and mark the rest with `...`.
pub fn truncate_list(items: &[String], limit: usize) -> String {
    if items.len() <= limit {
        return items.join(", ");
    }
    format!("{}...", items[..limit].join(", "))
}

/// `RES-0042`
pub fn reservation_number(id: i64) -> String {
    format!("RES-{:04}", id)
}

/// `INV-0042`
pub fn invoice_number(id: i64) -> String {
    format!("INV-{:04}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_known_tokens() {
        assert_eq!(
            status_display("confirmed"),
            StatusDisplay {
                label: "Confirmed".into(),
                css_class: "status status--arriving".into()
            }
        );
        assert_eq!(status_display("checked-in").label, "In House");
        assert_eq!(status_display("checked_out").css_class, "status status--departing");
    }

    #[test]
    fn test_status_display_generic_tokens() {
        let d = status_display("Out of Order");
        assert_eq!(d.label, "Out Of Order");
        assert_eq!(d.css_class, "status status--out-of-order");
        assert_eq!(status_display("").label, "Unknown");
    }

    #[test]
    fn test_status_display_is_pure() {
        let first = status_display("maintenance");
        let _ = status_display("available");
        assert_eq!(status_display("maintenance"), first);
        assert_eq!(status_display("MAINTENANCE"), first);
    }

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("Available"), "success");
        assert_eq!(status_variant("unpaid"), "error");
        assert_eq!(status_variant("whatever"), "neutral");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("room service"), "Room Service");
        assert_eq!(title_case("  spa "), "Spa");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_truncate_list() {
        let items: Vec<String> = ["WiFi", "TV", "Mini bar", "Balcony"].iter().map(|s| s.to_string()).collect();
        assert_eq!(truncate_list(&items, 3), "WiFi, TV, Mini bar...");
        assert_eq!(truncate_list(&items[..2], 3), "WiFi, TV");
        assert_eq!(truncate_list(&[], 3), "");
    }

    #[test]
    fn test_document_numbers() {
        assert_eq!(reservation_number(7), "RES-0007");
        assert_eq!(invoice_number(12345), "INV-12345");
    }
}
