//! Filter-expression construction for the Sprout Social query syntax
//!
//! Filters are built as typed records and rendered to the platform's
//! textual `field.operator(operands)` form in one explicit step, so the
//! rendering rules (including the inconsistent range separators) live in
//! exactly one place.

/// Split a comma-separated string into trimmed, non-empty items.
///
/// Empty input yields an empty vector; blank entries between commas are
/// dropped.
#[must_use]
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Date-only prefix (`YYYY-MM-DD`) of an ISO-8601 datetime string.
///
/// No validation is performed: malformed input yields a truncated prefix
/// rather than an error, and input shorter than ten bytes is returned
/// whole. Callers are responsible for supplying well-formed timestamps.
#[must_use]
pub fn date_only(datetime: &str) -> &str {
    datetime.get(..10).unwrap_or(datetime)
}

/// Separator between the bounds of a range filter.
///
/// The platform uses different separators per endpoint family; this is a
/// remote-API quirk that must be preserved exactly, not unified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeSeparator {
    /// `..`, used by time-range queries (post analytics, inbox, listening)
    TimeRange,
    /// `...`, used by profile-analytics reporting periods
    ReportingPeriod,
}

impl RangeSeparator {
    fn as_str(self) -> &'static str {
        match self {
            Self::TimeRange => "..",
            Self::ReportingPeriod => "...",
        }
    }
}

/// A single typed filter record
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// `field.eq(v1,v2,...)`
    Eq {
        /// Field name
        field: String,
        /// One or more operand values, joined with commas when rendered
        values: Vec<String>,
    },
    /// `field.in(lower<SEP>upper)`
    Range {
        /// Field name
        field: String,
        /// Lower bound
        lower: String,
        /// Upper bound
        upper: String,
        /// Endpoint-mandated separator
        separator: RangeSeparator,
    },
}

impl Filter {
    /// Equality filter over one or more values.
    #[must_use]
    pub fn equals(field: &str, values: Vec<String>) -> Self {
        Self::Eq {
            field: field.to_string(),
            values,
        }
    }

    /// Range filter for time-range endpoints; renders with `..`.
    #[must_use]
    pub fn time_range(field: &str, lower: &str, upper: &str) -> Self {
        Self::Range {
            field: field.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
            separator: RangeSeparator::TimeRange,
        }
    }

    /// Range filter for profile-analytics reporting periods; renders with
    /// `...`.
    #[must_use]
    pub fn reporting_period(field: &str, lower: &str, upper: &str) -> Self {
        Self::Range {
            field: field.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
            separator: RangeSeparator::ReportingPeriod,
        }
    }

    /// Render to the platform's textual syntax.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Eq { field, values } => format!("{field}.eq({})", values.join(",")),
            Self::Range {
                field,
                lower,
                upper,
                separator,
            } => format!("{field}.in({lower}{}{upper})", separator.as_str()),
        }
    }
}

/// Ordered filter assembly: required filters first, optional filters
/// appended only when present. Insertion order is preserved in the rendered
/// output; the platform may be order-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required filter
    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Append an optional filter; `None` leaves the set unchanged
    pub fn push_opt(&mut self, filter: Option<Filter>) {
        if let Some(filter) = filter {
            self.filters.push(filter);
        }
    }

    /// Render all filters to strings, in insertion order
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.filters.iter().map(Filter::render).collect()
    }

    /// Number of filters currently in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when no filters have been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv_trims_and_drops_blanks() {
        assert_eq!(split_csv("a, b ,,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_csv_empty_input() {
        assert_eq!(split_csv(""), Vec::<String>::new());
        assert_eq!(split_csv(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn test_date_only_truncates_datetime() {
        assert_eq!(date_only("2024-01-31T23:59:59"), "2024-01-31");
    }

    #[test]
    fn test_date_only_short_input_returned_whole() {
        assert_eq!(date_only("2024-01"), "2024-01");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn test_equals_renders_joined_values() {
        let filter = Filter::equals(
            "customer_profile_id",
            vec!["1".to_string(), "2".to_string()],
        );
        assert_eq!(filter.render(), "customer_profile_id.eq(1,2)");
    }

    #[test]
    fn test_time_range_uses_two_dots() {
        let filter = Filter::time_range("created_time", "2024-01-01T00:00:00", "2024-01-31T23:59:59");
        assert_eq!(
            filter.render(),
            "created_time.in(2024-01-01T00:00:00..2024-01-31T23:59:59)"
        );
    }

    #[test]
    fn test_reporting_period_uses_three_dots() {
        let filter = Filter::reporting_period("reporting_period", "2024-01-01", "2024-01-31");
        assert_eq!(
            filter.render(),
            "reporting_period.in(2024-01-01...2024-01-31)"
        );
    }

    #[test]
    fn test_filter_set_preserves_insertion_order() {
        let mut set = FilterSet::new();
        set.push(Filter::equals("customer_profile_id", vec!["9".to_string()]));
        set.push(Filter::time_range("created_time", "a", "b"));
        set.push(Filter::equals("tag_id", vec!["7".to_string()]));

        assert_eq!(
            set.render(),
            vec![
                "customer_profile_id.eq(9)",
                "created_time.in(a..b)",
                "tag_id.eq(7)",
            ]
        );
    }

    #[test]
    fn test_filter_set_push_opt_none_is_omitted() {
        let mut set = FilterSet::new();
        set.push(Filter::equals("customer_profile_id", vec!["9".to_string()]));
        set.push_opt(None);
        assert_eq!(set.len(), 1);

        let tags = split_csv("");
        set.push_opt((!tags.is_empty()).then(|| Filter::equals("tag_id", tags)));
        assert_eq!(set.render(), vec!["customer_profile_id.eq(9)"]);
    }
}
