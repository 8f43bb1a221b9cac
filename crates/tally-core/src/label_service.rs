//! Axis labels for the dashboard series.
//!
//! Display strings come from an injected [`LabelLookup`] so the engine can be
//! driven without a localization subsystem.

use std::collections::BTreeMap;

use tally_domain::TimeFrame;

pub const WEEKDAY_KEYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
pub const MONTH_KEYS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
pub const WEEK_ORDINAL_KEY: &str = "month_weeks";

/// Maps a translation key to a display string.
pub trait LabelLookup {
    fn lookup(&self, key: &str) -> String;
}

impl<F> LabelLookup for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, key: &str) -> String {
        self(key)
    }
}

/// Built-in English strings. Unknown keys are echoed back unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLabels;

impl LabelLookup for EnglishLabels {
    fn lookup(&self, key: &str) -> String {
        let text = match key {
            "mon" => "Mon",
            "tue" => "Tue",
            "wed" => "Wed",
            "thu" => "Thu",
            "fri" => "Fri",
            "sat" => "Sat",
            "sun" => "Sun",
            "jan" => "Jan",
            "feb" => "Feb",
            "mar" => "Mar",
            "apr" => "Apr",
            "may" => "May",
            "jun" => "Jun",
            "jul" => "Jul",
            "aug" => "Aug",
            "sep" => "Sep",
            "oct" => "Oct",
            "nov" => "Nov",
            "dec" => "Dec",
            WEEK_ORDINAL_KEY => "Week",
            "income" => "Income",
            "expenses" => "Expenses",
            other => other,
        };
        text.to_string()
    }
}

/// Map-backed lookup that defers to `fallback` for keys it does not define.
#[derive(Debug, Clone, Default)]
pub struct CatalogLabels<F = EnglishLabels> {
    entries: BTreeMap<String, String>,
    fallback: F,
}

impl CatalogLabels<EnglishLabels> {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self::with_fallback(entries, EnglishLabels)
    }
}

impl<F: LabelLookup> CatalogLabels<F> {
    pub fn with_fallback(entries: BTreeMap<String, String>, fallback: F) -> Self {
        Self { entries, fallback }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl<F: LabelLookup> LabelLookup for CatalogLabels<F> {
    fn lookup(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.fallback.lookup(key))
    }
}

/// Produces `bucket_count` labels in bucket order.
///
/// Month labels are positional ("Week 1" .. "Week N") and do not follow calendar
/// week boundaries. Week and year frames always yield their fixed 7 and 12
/// labels; `bucket_count` only drives the month frame.
pub fn generate_labels<L>(time_frame: TimeFrame, bucket_count: usize, lookup: &L) -> Vec<String>
where
    L: LabelLookup + ?Sized,
{
    match time_frame {
        TimeFrame::Week => WEEKDAY_KEYS.iter().map(|key| lookup.lookup(key)).collect(),
        TimeFrame::Month => {
            let prefix = lookup.lookup(WEEK_ORDINAL_KEY);
            (1..=bucket_count).map(|n| format!("{prefix} {n}")).collect()
        }
        TimeFrame::Year => MONTH_KEYS.iter().map(|key| lookup.lookup(key)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_labels_start_on_monday() {
        let labels = generate_labels(TimeFrame::Week, 7, &EnglishLabels);
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn month_labels_are_positional() {
        let labels = generate_labels(TimeFrame::Month, 5, &EnglishLabels);
        assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3", "Week 4", "Week 5"]);
        assert_eq!(generate_labels(TimeFrame::Month, 4, &EnglishLabels).len(), 4);
    }

    #[test]
    fn year_labels_follow_calendar_order() {
        let labels = generate_labels(TimeFrame::Year, 12, &EnglishLabels);
        assert_eq!(labels.first().map(String::as_str), Some("Jan"));
        assert_eq!(labels.get(6).map(String::as_str), Some("Jul"));
        assert_eq!(labels.last().map(String::as_str), Some("Dec"));
    }

    #[test]
    fn closures_act_as_lookups() {
        let shout = |key: &str| key.to_uppercase();
        let labels = generate_labels(TimeFrame::Month, 2, &shout);
        assert_eq!(labels, vec!["MONTH_WEEKS 1", "MONTH_WEEKS 2"]);
    }

    #[test]
    fn catalog_overrides_fall_back_to_english() {
        let mut catalog = CatalogLabels::new(BTreeMap::new());
        catalog.insert("mon", "Lun");
        catalog.insert(WEEK_ORDINAL_KEY, "Semaine");
        assert_eq!(catalog.lookup("mon"), "Lun");
        assert_eq!(catalog.lookup("tue"), "Tue");
        assert_eq!(
            generate_labels(TimeFrame::Month, 1, &catalog),
            vec!["Semaine 1".to_string()]
        );
    }

    #[test]
    fn unknown_keys_echo() {
        assert_eq!(EnglishLabels.lookup("greetings_smart_saver"), "greetings_smart_saver");
    }
}
