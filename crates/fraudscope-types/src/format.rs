//! Display formatting shared by the terminal and command-line surfaces

/// Group digits the Indian way: last three, then pairs (`12,34,567`)
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Whole-rupee amount, e.g. `₹12,34,567`
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.abs().round() as u64;
    let sign = if amount < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(rounded))
}

/// Compact rupee amount using crore/lakh, e.g. `₹4.52 Cr`
pub fn format_inr_compact(amount: f64) -> String {
    const CRORE: f64 = 10_000_000.0;
    const LAKH: f64 = 100_000.0;
    let abs = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };
    if abs >= CRORE {
        format!("{}₹{:.2} Cr", sign, abs / CRORE)
    } else if abs >= LAKH {
        format!("{}₹{:.2} L", sign, abs / LAKH)
    } else {
        format_inr(amount)
    }
}

/// Counter with Indian digit grouping
pub fn format_count(value: u64) -> String {
    group_indian(value)
}

/// Percentage with one decimal place
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(100000), "1,00,000");
        assert_eq!(group_indian(1234567), "12,34,567");
        assert_eq!(group_indian(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(45000.0), "₹45,000");
        assert_eq!(format_inr(499.6), "₹500");
        assert_eq!(format_inr(-1500.0), "-₹1,500");
    }

    #[test]
    fn test_format_inr_compact() {
        assert_eq!(format_inr_compact(45_200_000.0), "₹4.52 Cr");
        assert_eq!(format_inr_compact(250_000.0), "₹2.50 L");
        assert_eq!(format_inr_compact(9_999.0), "₹9,999");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(24.345), "24.3%");
        assert_eq!(format_count(10000), "10,000");
    }
}
