use crate::pages::MainPage;
use crate::{Result, scenarios};
use futures::future::BoxFuture;
use serde::Serialize;
use std::fmt;

/// Categorization marker a check carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Sanity,
    Regression,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Sanity => write!(f, "sanity"),
            Marker::Regression => write!(f, "regression"),
        }
    }
}

/// A check takes an already-opened main page and drives it to a verdict.
pub type ScenarioFn = fn(MainPage) -> BoxFuture<'static, Result<()>>;

/// A registered check.
pub struct TestCase {
    pub name: &'static str,
    pub marker: Marker,
    pub run: ScenarioFn,
}

/// Every check, in source order.
pub fn all() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "main_page_user_sees_logo",
            marker: Marker::Sanity,
            run: |page| Box::pin(scenarios::user_sees_logo(page)),
        },
        TestCase {
            name: "nav_bar_user_sees_a_list_of_items",
            marker: Marker::Regression,
            run: |page| Box::pin(scenarios::nav_bar_lists_expected_items(page)),
        },
        TestCase {
            name: "user_wants_to_look_at_lesson_card_defichain",
            marker: Marker::Regression,
            run: |page| Box::pin(scenarios::lesson_card_defichain_is_available(page)),
        },
        TestCase {
            name: "user_wants_to_browse_all_lessons",
            marker: Marker::Regression,
            run: |page| Box::pin(scenarios::all_lessons_are_browsable(page)),
        },
    ]
}

/// Checks carrying the given marker; all of them when `None`.
pub fn filtered(marker: Option<Marker>) -> Vec<TestCase> {
    all()
        .into_iter()
        .filter(|case| marker.is_none_or(|m| case.marker == m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_four_cases() {
        let cases = all();

        assert_eq!(cases.len(), 4);
        assert_eq!(cases[0].name, "main_page_user_sees_logo");
        assert_eq!(cases[0].marker, Marker::Sanity);
    }

    #[test]
    fn test_filter_by_marker() {
        assert_eq!(filtered(Some(Marker::Sanity)).len(), 1);
        assert_eq!(filtered(Some(Marker::Regression)).len(), 3);
        assert_eq!(filtered(None).len(), 4);
    }

    #[test]
    fn test_case_names_are_unique() {
        let cases = all();
        let mut names: Vec<_> = cases.iter().map(|c| c.name).collect();
        names.sort();
        names.dedup();

        assert_eq!(names.len(), cases.len());
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::Sanity.to_string(), "sanity");
        assert_eq!(Marker::Regression.to_string(), "regression");
    }
}
