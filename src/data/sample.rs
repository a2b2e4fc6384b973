//! Fixed sample dataset shown on the Sample tab.

use super::{Table, Value};

/// Returns the illustrative dataset: five rows of agency metrics with a
/// fixed `{Agency, Metric, Year, Value}` schema. Deterministic; used to
/// preview the dashboard before any endpoint is configured.
pub fn sample_table() -> Table {
    let mut table = Table::with_columns(["Agency", "Metric", "Year", "Value"]);

    let rows: [(&str, &str, i64, i64); 5] = [
        ("EPA", "Pollution Levels", 2022, 45),
        ("CDC", "Disease Cases", 2023, 1200),
        ("FEMA", "Disaster Relief", 2023, 300),
        ("HUD", "Housing Units", 2022, 5000),
        ("DOE", "Energy Consumption", 2023, 320),
    ];

    for (agency, metric, year, value) in rows {
        table.push_row(vec![
            Value::Str(agency.to_string()),
            Value::Str(metric.to_string()),
            Value::Int(year),
            Value::Int(value),
        ]);
    }
    table
}
