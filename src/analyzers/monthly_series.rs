use serde::Serialize;

use crate::models::MonthlyAggregate;
use crate::utils::constants::MM_PER_INCH;

/// Column-oriented view of the monthly table, shaped for charting: one entry
/// per month present, in ascending month order. Precipitation is converted to
/// millimetres here, at presentation time; snowfall stays in inches. The core
/// never draws anything — whatever renders gets finished series.
#[derive(Debug, Serialize)]
pub struct MonthlySeries {
    pub labels: Vec<&'static str>,
    pub months: Vec<u32>,
    pub tmax: Vec<f64>,
    pub tmin: Vec<f64>,
    pub mean_temp: Vec<f64>,
    pub precipitation_mm: Vec<f64>,
    pub snowfall_in: Vec<f64>,
}

impl MonthlySeries {
    pub fn from_aggregates(aggregates: &[MonthlyAggregate]) -> Self {
        Self {
            labels: aggregates.iter().map(|a| a.month_label()).collect(),
            months: aggregates.iter().map(|a| a.month).collect(),
            tmax: aggregates.iter().map(|a| a.tmax_avg).collect(),
            tmin: aggregates.iter().map(|a| a.tmin_avg).collect(),
            mean_temp: aggregates.iter().map(|a| a.mean_temp_avg).collect(),
            precipitation_mm: aggregates
                .iter()
                .map(|a| a.prcp_total * MM_PER_INCH)
                .collect(),
            snowfall_in: aggregates.iter().map(|a| a.snow_total).collect(),
        }
    }
}
