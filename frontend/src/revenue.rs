/// Revenue per thousand views used for any country not in [`RPM_RATES`].
pub const DEFAULT_RPM: f64 = 2.5;

/// Estimated revenue per thousand views, by channel country code.
pub const RPM_RATES: &[(&str, f64)] = &[
    ("US", 7.53),
    ("UK", 5.62),
    ("GB", 5.62),
    ("NZ", 5.56),
    ("AE", 2.33),
    ("PK", 2.5),
    ("IN", 2.5),
];

pub fn rpm_for(country: Option<&str>) -> f64 {
    country
        .map(str::trim)
        .and_then(|code| {
            RPM_RATES
                .iter()
                .find(|(listed, _)| listed.eq_ignore_ascii_case(code))
        })
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_RPM)
}

pub fn calculate_revenue(views: u64, country: Option<&str>) -> f64 {
    views as f64 * rpm_for(country) / 1000.0
}

/// Revenue for a raw upstream view count; `None` when the count is absent or not a number.
pub fn estimate_revenue(view_count: Option<&str>, country: Option<&str>) -> Option<f64> {
    let views = view_count?.trim().parse::<u64>().ok()?;
    Some(calculate_revenue(views, country))
}

pub fn format_revenue(revenue: f64) -> String {
    format!("${revenue:.2}")
}
