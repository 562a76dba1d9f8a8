use launchpad_core::LaunchSummary;

use crate::Launchpad;

impl Launchpad {
    /// Run several year queries concurrently.
    ///
    /// Returns `(year, summaries)` pairs in input order. Each entry follows the
    /// single-year contract on its own, so one failing year does not affect the others.
    pub async fn launches_by_years(&self, years: &[&str]) -> Vec<(String, Vec<LaunchSummary>)> {
        if years.is_empty() {
            return vec![];
        }

        let tasks = years.iter().map(|year| async move {
            let summaries = self.launches_by_year(year).await;
            ((*year).to_string(), summaries)
        });

        futures::future::join_all(tasks).await
    }
}
