use std::fs::File;

use solar_geodesy::almanac::{self, AlmanacRequest};
use solar_geodesy::export::{almanac as export_almanac, summary as export_summary};
use solar_geodesy::{CalendarDate, Coordinate, SunZenith};

fn tromso_request(zenith: SunZenith) -> AlmanacRequest {
    AlmanacRequest {
        site_name: "TROMSO".into(),
        site: Coordinate::new(69.6492, 18.9553),
        start: CalendarDate::new(2024, 5, 15).expect("date"),
        days: 14,
        zenith,
    }
}

#[test]
fn exported_almanac_reads_back_as_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("reports").join("tromso.csv");
    let request = tromso_request(SunZenith::Official);
    let entries = almanac::build(&request);

    let mut writer = export_almanac::writer_for_path(&path).expect("writer");
    almanac::write_csv(&mut *writer, request.zenith, &entries).expect("csv");
    drop(writer);

    let mut reader = csv::Reader::from_reader(File::open(&path).expect("open"));
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        export_almanac::HEADER.split(',').collect::<Vec<_>>()
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 14);
    assert_eq!(&rows[0][0], "2024-05-15");
    assert_eq!(&rows[13][0], "2024-05-28");
    for row in &rows {
        assert_eq!(&row[1], "official");
        let hours: f64 = row[4].parse().expect("hours");
        match &row[5] {
            "regular" => {
                assert!(row[2].ends_with('Z') && row[3].ends_with('Z'));
                assert!(hours > 0.0);
            }
            "polar_day" | "polar_night" | "unresolved" => {
                assert!(row[2].is_empty() && row[3].is_empty());
                assert_eq!(hours, 0.0);
            }
            other => panic!("unexpected condition {other}"),
        }
    }
    // midnight sun has set in by late May
    assert_eq!(&rows[13][5], "polar_day");
}

#[test]
fn summary_matches_the_table() {
    let request = tromso_request(SunZenith::Official);
    let entries = almanac::build(&request);
    let summary = almanac::summarize(&request, &entries);

    assert_eq!(summary.site, "TROMSO");
    assert_eq!(summary.days, 14);
    assert_eq!(
        summary.regular_days + summary.polar_days + summary.polar_nights + summary.unresolved_days,
        14
    );
    assert!(summary.polar_days > 0);
    assert_eq!(summary.polar_nights, 0);

    let dir = tempfile::tempdir().expect("tempdir");
    let sidecar = export_summary::sidecar_path(&dir.path().join("tromso.csv"));
    export_summary::write_summary(&sidecar, &summary).expect("summary");
    let text = std::fs::read_to_string(&sidecar).expect("read summary");
    assert!(text.contains("\"zenith\": \"official\""));
    assert!(text.contains("\"first_date\": \"2024-05-15\""));
}
