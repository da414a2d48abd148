use chrono::NaiveDate;

use crate::catalog::product::Product;

/// `$`-prefixed, always two decimals.
pub fn price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Integer discount percentage, present only for genuinely discounted
/// items. Assumes `originalPrice >= price` (not enforced upstream).
pub fn discount_percent(product: &Product) -> Option<u32> {
    let original = product.original_price?;
    if original <= 0.0 || original <= product.price {
        return None;
    }
    Some(((1.0 - product.price / original) * 100.0).round() as u32)
}

/// Human relative-date label for `dateAdded`. None when the field is
/// missing or not an ISO date — the caller just omits the line.
pub fn relative_date(date_added: Option<&str>, today: NaiveDate) -> Option<String> {
    let date = NaiveDate::parse_from_str(date_added?, "%Y-%m-%d").ok()?;
    let days = (today - date).num_days();
    let label = match days {
        d if d < 0 => return None, // future dates are catalog noise
        0 => "added today".to_string(),
        1 => "added yesterday".to_string(),
        d if d < 30 => format!("added {d} days ago"),
        d if d < 365 => {
            let months = d / 30;
            if months == 1 {
                "added 1 month ago".to_string()
            } else {
                format!("added {months} months ago")
            }
        }
        d => {
            let years = d / 365;
            if years == 1 {
                "added 1 year ago".to_string()
            } else {
                format!("added {years} years ago")
            }
        }
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_prices(price: f64, original: Option<f64>) -> Product {
        Product {
            id: 1,
            title: "x".into(),
            description: String::new(),
            category: "Skincare".into(),
            subcategory: None,
            price,
            original_price: original,
            rating: 0.0,
            review_count: 0,
            badge: None,
            featured: false,
            date_added: None,
            affiliate_url: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn prices_always_carry_two_decimals() {
        assert_eq!(price(20.0), "$20.00");
        assert_eq!(price(15.5), "$15.50");
        assert_eq!(price(9.999), "$10.00");
    }

    #[test]
    fn discount_percent_rounds_and_requires_a_real_discount() {
        assert_eq!(discount_percent(&product_with_prices(15.0, Some(20.0))), Some(25));
        assert_eq!(discount_percent(&product_with_prices(14.99, Some(29.99))), Some(50));
        assert_eq!(discount_percent(&product_with_prices(20.0, Some(20.0))), None);
        assert_eq!(discount_percent(&product_with_prices(20.0, None)), None);
    }

    #[test]
    fn relative_dates_scale_with_age() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            relative_date(Some("2025-06-15"), today).as_deref(),
            Some("added today")
        );
        assert_eq!(
            relative_date(Some("2025-06-14"), today).as_deref(),
            Some("added yesterday")
        );
        assert_eq!(
            relative_date(Some("2025-06-05"), today).as_deref(),
            Some("added 10 days ago")
        );
        assert_eq!(
            relative_date(Some("2025-03-15"), today).as_deref(),
            Some("added 3 months ago")
        );
        assert_eq!(
            relative_date(Some("2023-06-01"), today).as_deref(),
            Some("added 2 years ago")
        );
    }

    #[test]
    fn missing_or_malformed_dates_are_omitted() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(relative_date(None, today), None);
        assert_eq!(relative_date(Some("soonish"), today), None);
        assert_eq!(relative_date(Some("2030-01-01"), today), None);
    }
}
