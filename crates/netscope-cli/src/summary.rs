//! Human-readable generation summary printed after a run.

use std::fmt;

use chrono::{DateTime, TimeZone};

use netscope::bundle::BundleSummary;

/// Formats the bundle report: one line per file, then totals and the time
/// the bundle was generated.
pub fn format_summary<Tz>(summary: &BundleSummary, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Report {
        summary,
        generated_at,
    }
    .to_string()
}

struct Report<'a, Tz: TimeZone> {
    summary: &'a BundleSummary,
    generated_at: &'a DateTime<Tz>,
}

impl<Tz> fmt::Display for Report<'_, Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📁 Network Monitoring System Configuration Files Created:")?;
        writeln!(f, "{}", "=".repeat(60))?;
        for entry in self.summary.entries() {
            writeln!(f, "✅ {} ({} characters)", entry.key(), entry.chars())?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "📊 Total configuration size: {} characters",
            group_thousands(self.summary.total_chars())
        )?;
        writeln!(f, "📝 Number of files: {}", self.summary.file_count())?;
        writeln!(
            f,
            "🕒 Generated at: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Renders `value` with `,` between groups of three digits.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use netscope::bundle::Bundle;

    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(17114), "17,114");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_summary_lists_every_file() {
        let summary = Bundle::generate().unwrap().summary();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let text = format_summary(&summary, &at);

        assert!(text.contains("✅ zabbix_discovery.json (1260 characters)"));
        assert!(text.contains("✅ grafana/provisioning/datasources/prometheus.yml (160 characters)"));
        assert!(text.contains("📝 Number of files: 8"));
        assert!(text.contains("Generated at: 2024-05-01 12:30:00"));
        assert_eq!(text.matches('✅').count(), 8);
    }

    #[test]
    fn test_summary_line_layout() {
        let summary = Bundle::generate().unwrap().summary();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let text = format_summary(&summary, &at);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 8 + 1 + 3);
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(lines[10], "");
        assert_eq!(lines[11], "📊 Total configuration size: 17,114 characters");
        assert!(text.ends_with("12:30:00\n"));
    }
}
