//! Pure helpers behind the dashboard components.
//!
//! Everything here is plain data in, plain data out, so it can be unit tested
//! without a reactive runtime.

use crate::address::AddressTable;
use crate::api::StationDetailDto;
use crate::cascade::{Level, Selection};
use crate::summary::{RegionSummary, SortColumn, SortDirection, sort_summaries};
use chrono::{DateTime, Utc};

/// Rows shown in each of the best and worst coverage tables.
pub const RANKING_SIZE: usize = 5;

pub const SUMMARY_COLUMNS: [SortColumn; 4] = [
    SortColumn::Region,
    SortColumn::StationCount,
    SortColumn::VehicleCount,
    SortColumn::Penetration,
];

const STATION_BAR_COLOR: &str = "#636efa";

/// Yellow-green-blue sequential scale, low to high.
const YL_GN_BU: [(u8, u8, u8); 9] = [
    (255, 255, 217),
    (237, 248, 177),
    (199, 233, 180),
    (127, 205, 187),
    (65, 182, 196),
    (29, 145, 192),
    (34, 94, 168),
    (37, 52, 148),
    (8, 29, 88),
];

// === Bar Charts ===

/// One bar of a horizontal bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub display: String,
    pub width_pct: f64,
    pub color: String,
}

/// Width of a bar as a percentage of the longest one.
pub fn bar_width_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Position of `value` inside `[min, max]`, as a fraction.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return 1.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Color at fraction `t` of the sequential scale.
pub fn scale_color(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let last = YL_GN_BU.len() - 1;
    let pos = t * last as f64;
    let i = (pos.floor() as usize).min(last - 1);
    let frac = pos - i as f64;
    let (from, to) = (YL_GN_BU[i], YL_GN_BU[i + 1]);
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;

    format!(
        "rgb({}, {}, {})",
        mix(from.0, to.0),
        mix(from.1, to.1),
        mix(from.2, to.2)
    )
}

pub fn bar_style(bar: &Bar) -> String {
    format!(
        "width: {:.1}%; background-color: {};",
        bar.width_pct, bar.color
    )
}

/// Station count per region, in the order given.
pub fn station_count_bars(rows: &[RegionSummary]) -> Vec<Bar> {
    let max = rows.iter().map(|r| r.station_count).max().unwrap_or(0) as f64;

    rows.iter()
        .map(|r| Bar {
            label: r.region.clone(),
            display: format_count(r.station_count),
            width_pct: bar_width_pct(r.station_count as f64, max),
            color: STATION_BAR_COLOR.to_string(),
        })
        .collect()
}

/// Penetration ratio per region, highest first, colored along the scale.
pub fn penetration_bars(rows: &[RegionSummary]) -> Vec<Bar> {
    let sorted = sorted_rows(rows, SortColumn::Penetration, SortDirection::Descending);
    let (min, max) = sorted.iter().fold((f64::INFINITY, 0.0_f64), |(lo, hi), r| {
        (lo.min(r.penetration_pct), hi.max(r.penetration_pct))
    });

    sorted
        .into_iter()
        .map(|r| Bar {
            display: format_percentage(r.penetration_pct),
            width_pct: bar_width_pct(r.penetration_pct, max),
            color: scale_color(normalize(r.penetration_pct, min, max)),
            label: r.region,
        })
        .collect()
}

// === Number Formatting ===

/// Group digits in threes: `12345` becomes `"12,345"`.
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_percentage(pct: f64) -> String {
    format!("{pct:.2}%")
}

pub fn format_loaded_at(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

// === Table Sorting ===

pub fn column_label(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Region => "Region",
        SortColumn::StationCount => "Stations",
        SortColumn::VehicleCount => "EVs registered",
        SortColumn::Penetration => "Coverage (%)",
    }
}

/// Sort state after clicking `clicked`. The active column flips direction;
/// a new column starts alphabetical for names and largest first for numbers.
pub fn next_sort(
    current: (SortColumn, SortDirection),
    clicked: SortColumn,
) -> (SortColumn, SortDirection) {
    let (column, direction) = current;
    if column == clicked {
        let flipped = match direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
        return (column, flipped);
    }

    let initial = match clicked {
        SortColumn::Region => SortDirection::Ascending,
        _ => SortDirection::Descending,
    };
    (clicked, initial)
}

pub fn sort_indicator(current: (SortColumn, SortDirection), column: SortColumn) -> &'static str {
    match current {
        (c, SortDirection::Ascending) if c == column => "▲",
        (c, SortDirection::Descending) if c == column => "▼",
        _ => "",
    }
}

pub fn sorted_rows(
    rows: &[RegionSummary],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<RegionSummary> {
    let mut sorted = rows.to_vec();
    sort_summaries(&mut sorted, column, direction);
    sorted
}

// === Station Lookup ===

pub fn select_placeholder(level: Level) -> String {
    format!("Select {}", level.label().to_lowercase())
}

/// Heading for the station list once a neighborhood is chosen, e.g.
/// `"Seoul Gangnam-gu Yeoksam-dong: 3 stations"`.
pub fn area_heading(selection: &Selection, table: &AddressTable) -> Option<String> {
    let (top, sub, neighborhood) = (
        selection.top()?,
        selection.sub()?,
        selection.neighborhood()?,
    );
    let count = selection.truncate(Level::Station).candidates(table).count();
    let noun = if count == 1 { "station" } else { "stations" };

    Some(format!("{top} {sub} {neighborhood}: {count} {noun}"))
}

pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

pub fn format_coordinates(lat: Option<f64>, lng: Option<f64>) -> String {
    match (lat, lng) {
        (Some(lat), Some(lng)) => format!("{lat}, {lng}"),
        _ => "-".to_string(),
    }
}

/// Label and value pairs shown in the station detail panel.
pub fn detail_fields(detail: &StationDetailDto) -> Vec<(&'static str, String)> {
    vec![
        ("Name", detail.name.clone()),
        ("Address", display_or_dash(detail.address.as_deref())),
        ("Coordinates", format_coordinates(detail.lat, detail.lng)),
        ("Operator", display_or_dash(detail.operator.as_deref())),
        (
            "Installed",
            detail
                .install_year
                .map_or_else(|| "-".to_string(), |y| y.to_string()),
        ),
        ("Region", display_or_dash(detail.region_name.as_deref())),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::address::StationAddress;

    fn summary(region: &str, stations: i64, vehicles: i64) -> RegionSummary {
        RegionSummary::from_counts(region.to_string(), stations, vehicles).unwrap()
    }

    #[test]
    fn test_bar_width_pct() {
        assert_eq!(bar_width_pct(50.0, 200.0), 25.0);
        assert_eq!(bar_width_pct(200.0, 200.0), 100.0);
    }

    #[test]
    fn test_bar_width_pct_zero_max() {
        assert_eq!(bar_width_pct(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_scale_color_endpoints() {
        assert_eq!(scale_color(0.0), "rgb(255, 255, 217)");
        assert_eq!(scale_color(1.0), "rgb(8, 29, 88)");
    }

    #[test]
    fn test_scale_color_hits_middle_stop() {
        assert_eq!(scale_color(0.5), "rgb(65, 182, 196)");
    }

    #[test]
    fn test_scale_color_clamps() {
        assert_eq!(scale_color(-3.0), scale_color(0.0));
        assert_eq!(scale_color(7.0), scale_color(1.0));
        assert_eq!(scale_color(f64::NAN), scale_color(0.0));
    }

    #[test]
    fn test_normalize_flat_range() {
        assert_eq!(normalize(4.0, 4.0, 4.0), 1.0);
        assert_eq!(normalize(3.0, 2.0, 4.0), 0.5);
    }

    #[test]
    fn test_station_count_bars_keep_order() {
        let rows = vec![summary("Busan", 5, 100), summary("Seoul", 20, 100)];
        let bars = station_count_bars(&rows);

        assert_eq!(bars[0].label, "Busan");
        assert_eq!(bars[0].width_pct, 25.0);
        assert_eq!(bars[1].width_pct, 100.0);
        assert_eq!(bars[1].display, "20");
    }

    #[test]
    fn test_penetration_bars_sorted_descending() {
        let rows = vec![
            summary("A", 1, 100),
            summary("B", 4, 100),
            summary("C", 2, 100),
        ];
        let bars = penetration_bars(&rows);

        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "C", "A"]);
        assert_eq!(bars[0].color, "rgb(8, 29, 88)");
        assert_eq!(bars[2].color, "rgb(255, 255, 217)");
        assert_eq!(bars[0].display, "4.00%");
    }

    #[test]
    fn test_penetration_bars_empty() {
        assert!(penetration_bars(&[]).is_empty());
    }

    #[test]
    fn test_bar_style() {
        let bar = Bar {
            label: "Seoul".to_string(),
            display: "1".to_string(),
            width_pct: 42.0,
            color: "#000".to_string(),
        };
        assert_eq!(bar_style(&bar), "width: 42.0%; background-color: #000;");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(-12345), "-12,345");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.0), "5.00%");
        assert_eq!(format_percentage(33.33333), "33.33%");
    }

    #[test]
    fn test_format_loaded_at() {
        let at = DateTime::parse_from_rfc3339("2025-03-01T09:05:07Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_loaded_at(&at), "2025-03-01 09:05:07 UTC");
    }

    #[test]
    fn test_next_sort_toggles_same_column() {
        let current = (SortColumn::Penetration, SortDirection::Descending);
        assert_eq!(
            next_sort(current, SortColumn::Penetration),
            (SortColumn::Penetration, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_next_sort_new_column_defaults() {
        let current = (SortColumn::Penetration, SortDirection::Ascending);
        assert_eq!(
            next_sort(current, SortColumn::Region),
            (SortColumn::Region, SortDirection::Ascending)
        );
        assert_eq!(
            next_sort(current, SortColumn::StationCount),
            (SortColumn::StationCount, SortDirection::Descending)
        );
    }

    #[test]
    fn test_sort_indicator() {
        let current = (SortColumn::Region, SortDirection::Ascending);
        assert_eq!(sort_indicator(current, SortColumn::Region), "▲");
        assert_eq!(sort_indicator(current, SortColumn::StationCount), "");
    }

    #[test]
    fn test_select_placeholder() {
        assert_eq!(select_placeholder(Level::Sub), "Select district");
    }

    fn table() -> AddressTable {
        AddressTable::new(vec![
            StationAddress::new(
                "1".to_string(),
                "North".to_string(),
                Some("Seoul Gangnam-gu Yeoksam-dong".to_string()),
            ),
            StationAddress::new(
                "2".to_string(),
                "South".to_string(),
                Some("Seoul Gangnam-gu Yeoksam-dong 12".to_string()),
            ),
            StationAddress::new(
                "3".to_string(),
                "West".to_string(),
                Some("Seoul Gangnam-gu Nonhyeon-dong".to_string()),
            ),
        ])
    }

    #[test]
    fn test_area_heading_needs_neighborhood() {
        let table = table();
        let selection = Selection::default()
            .select(&table, Level::Top, "Seoul")
            .unwrap();
        assert!(area_heading(&selection, &table).is_none());
    }

    #[test]
    fn test_area_heading_counts_stations() {
        let table = table();
        let selection = Selection::default()
            .select(&table, Level::Top, "Seoul")
            .and_then(|s| s.select(&table, Level::Sub, "Gangnam-gu"))
            .and_then(|s| s.select(&table, Level::Neighborhood, "Yeoksam-dong"))
            .unwrap();

        assert_eq!(
            area_heading(&selection, &table).as_deref(),
            Some("Seoul Gangnam-gu Yeoksam-dong: 2 stations")
        );

        let with_station = selection.select(&table, Level::Station, "1").unwrap();
        assert_eq!(
            area_heading(&with_station, &table).as_deref(),
            Some("Seoul Gangnam-gu Yeoksam-dong: 2 stations")
        );
    }

    #[test]
    fn test_display_or_dash() {
        assert_eq!(display_or_dash(Some("KEPCO")), "KEPCO");
        assert_eq!(display_or_dash(Some("  ")), "-");
        assert_eq!(display_or_dash(None), "-");
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(format_coordinates(Some(37.5), Some(127.25)), "37.5, 127.25");
        assert_eq!(format_coordinates(Some(37.5), None), "-");
    }

    #[test]
    fn test_detail_fields() {
        let detail = StationDetailDto {
            station_id: "ST01".to_string(),
            name: "City Hall".to_string(),
            address: Some("Seoul Jung-gu".to_string()),
            lat: None,
            lng: None,
            operator: None,
            install_year: Some(2019),
            region_name: Some("Seoul".to_string()),
        };

        let fields = detail_fields(&detail);

        assert_eq!(fields[0], ("Name", "City Hall".to_string()));
        assert_eq!(fields[2], ("Coordinates", "-".to_string()));
        assert_eq!(fields[3], ("Operator", "-".to_string()));
        assert_eq!(fields[4], ("Installed", "2019".to_string()));
    }
}
