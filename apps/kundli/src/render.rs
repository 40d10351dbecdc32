use crate::request::KundliReport;
use serde_json::json;

const HEADERS: [&str; 3] = ["graham", "Longitude", "FormattedLong"];

/// Birth details followed by the aligned chart table.
pub fn render_table(report: &KundliReport) -> String {
    let moment = &report.moment;
    let mut out = format!(
        "Birth: {} {} ({} UTC, {})\nPlace: {} at {}\nAyanamsa: {:.6}\n\n",
        moment.local(),
        moment.zone(),
        moment.utc().format("%Y-%m-%d %H:%M:%S"),
        report.chart.julian_day,
        report.query,
        report.location,
        report.chart.ayanamsa
    );

    let rows: Vec<[String; 3]> = report
        .chart
        .triples()
        .map(|(label, lon, formatted)| [label.to_string(), format!("{:.6}", lon), formatted.to_string()])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    push_row(&mut out, &HEADERS, &widths);
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 4));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
    let line = format!(
        "{:<w0$}  {:>w1$}  {:<w2$}",
        cells[0].as_ref(),
        cells[1].as_ref(),
        cells[2].as_ref(),
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn render_json(report: &KundliReport) -> serde_json::Result<String> {
    let moment = &report.moment;
    let value = json!({
        "birth": {
            "local": moment.local().format("%Y-%m-%dT%H:%M:%S").to_string(),
            "time_zone": moment.zone().to_string(),
            "utc": moment.utc().to_rfc3339(),
        },
        "place": {
            "city": report.query.city(),
            "country": report.query.country(),
            "lat": report.location.lat,
            "lon": report.location.lon,
        },
        "chart": report.chart,
    });
    serde_json::to_string_pretty(&value)
}
