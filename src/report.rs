//! Human-readable rendering of a [`DemographicSummary`].
//!
//! Presentation only: nothing in the pipeline depends on this module.

use std::fmt::Write;

use crate::pipeline::DemographicSummary;

/// Render the summary as the classic multi-line analysis report.
pub fn render(summary: &DemographicSummary) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Number of each race:");
    for (race, count) in &summary.race_count {
        let _ = writeln!(out, "  {race}: {count}");
    }
    let _ = writeln!(out, "Average age of men: {}", summary.average_age_men);
    let _ = writeln!(
        out,
        "Percentage with Bachelors degrees: {}%",
        summary.percentage_bachelors
    );
    let _ = writeln!(
        out,
        "Percentage with higher education that earn >50K: {}%",
        summary.higher_education_rich
    );
    let _ = writeln!(
        out,
        "Percentage without higher education that earn >50K: {}%",
        summary.lower_education_rich
    );
    let _ = writeln!(out, "Min work time: {} hours/week", summary.min_work_hours);
    let _ = writeln!(
        out,
        "Percentage of rich among those who work fewest hours: {}%",
        summary.rich_percentage
    );
    let _ = writeln!(
        out,
        "Country with highest percentage of rich: {}",
        summary.highest_earning_country
    );
    let _ = writeln!(
        out,
        "Highest percentage of rich people in country: {}%",
        summary.highest_earning_country_percentage
    );
    let _ = writeln!(
        out,
        "Top occupations in India: {}",
        summary.top_in_occupation
    );

    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::pipeline::DemographicSummary;

    fn sample_summary() -> DemographicSummary {
        DemographicSummary {
            race_count: vec![("White".to_string(), 3), ("Black".to_string(), 1)],
            average_age_men: 39.4,
            percentage_bachelors: 16.4,
            higher_education_rich: 46.5,
            lower_education_rich: 17.4,
            min_work_hours: 1,
            rich_percentage: 10.0,
            highest_earning_country: "Iran".to_string(),
            highest_earning_country_percentage: 41.9,
            top_in_occupation: "Prof-specialty".to_string(),
        }
    }

    #[test]
    fn renders_every_statistic() {
        let text = render(&sample_summary());
        assert!(text.contains("Number of each race:"));
        assert!(text.contains("  White: 3"));
        assert!(text.contains("  Black: 1"));
        assert!(text.contains("Average age of men: 39.4"));
        assert!(text.contains("Percentage with Bachelors degrees: 16.4%"));
        assert!(text.contains("Min work time: 1 hours/week"));
        assert!(text.contains("Country with highest percentage of rich: Iran"));
        assert!(text.contains("Highest percentage of rich people in country: 41.9%"));
        assert!(text.contains("Top occupations in India: Prof-specialty"));
    }

    #[test]
    fn race_lines_follow_summary_order() {
        let text = render(&sample_summary());
        let white = text.find("White").unwrap();
        let black = text.find("Black").unwrap();
        assert!(white < black);
    }
}
