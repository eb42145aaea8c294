use serde::{Deserialize, Serialize};

use crate::utils::constants::MONTH_LABELS;

/// One summary row per calendar month present in the enriched set, combining
/// every year's daily records under that month key. Temperatures are averaged,
/// precipitation and snowfall are totalled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: u32,
    pub mean_temp_avg: f64,
    pub tmax_avg: f64,
    pub tmin_avg: f64,
    pub prcp_total: f64,
    pub snow_total: f64,
}

impl MonthlyAggregate {
    /// Three-letter label for chart axes and table headers.
    pub fn month_label(&self) -> &'static str {
        MONTH_LABELS[(self.month - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_labels() {
        let mut aggregate = MonthlyAggregate {
            month: 1,
            mean_temp_avg: 30.0,
            tmax_avg: 45.0,
            tmin_avg: 15.0,
            prcp_total: 0.1,
            snow_total: 2.0,
        };
        assert_eq!(aggregate.month_label(), "Jan");

        aggregate.month = 12;
        assert_eq!(aggregate.month_label(), "Dec");
    }
}
