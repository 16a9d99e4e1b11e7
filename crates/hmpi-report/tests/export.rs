//! Integration tests for the indexed CSV export.

use hmpi_aggregate::to_indexed_rows;
use hmpi_ingest::parse_table;
use hmpi_model::ConcentrationUnit;
use hmpi_report::write_indexed_csv;
use hmpi_standards::base_standards;

const HEADER: &str = "State,District,Location,Longitude,Latitude,Cd,Cr,Cu,Pb,Mn,Ni,Fe,Zn";

fn export(text: &str, unit: ConcentrationUnit) -> String {
    let rows = parse_table(text).expect("valid table");
    let indexed = to_indexed_rows(&rows, unit, &base_standards());
    let mut buffer = Vec::new();
    write_indexed_csv(&mut buffer, &indexed).expect("export");
    String::from_utf8(buffer).expect("utf-8 export")
}

#[test]
fn lenient_cells_keep_their_text() {
    let text = format!(
        "{HEADER}\n\
         Goa,North Goa,Mapusa,73.81,15.59,0,0,0,0,0,0,0,0\n\
         Goa,South Goa,Margao,73.95,15.27,,,,,,,,\n\
         Goa,North Goa,\"Anjuna, Beach\",73.74,15.58,abc,0,0,0,0,0,0,0\n"
    );
    let output = export(&text, ConcentrationUnit::MilligramsPerLitre);
    insta::assert_snapshot!(output, @r#"
    State,District,Location,Longitude,Latitude,Cd,Cr,Cu,Pb,Mn,Ni,Fe,Zn,HPI,HEI,CI
    Goa,North Goa,Mapusa,73.81,15.59,0,0,0,0,0,0,0,0,0,0,0
    Goa,South Goa,Margao,73.95,15.27,,,,,,,,,0,0,0
    Goa,North Goa,"Anjuna, Beach",73.74,15.58,abc,0,0,0,0,0,0,0,0,0,0
    "#);
}

#[test]
fn indices_are_written_at_full_precision() {
    let text = format!("{HEADER}\nKerala,Idukki,Munnar,77.06,10.09,3,50,50,10,100,20,300,5000\n");
    let output = export(&text, ConcentrationUnit::MicrogramsPerLitre);
    let last = output.lines().nth(1).expect("data line");
    let fields: Vec<&str> = last.split(',').collect();
    assert_eq!(fields.len(), 16);
    assert_eq!(&fields[5..13], &["3", "50", "50", "10", "100", "20", "300", "5000"]);

    let hpi: f64 = fields[13].parse().expect("numeric HPI");
    let hei: f64 = fields[14].parse().expect("numeric HEI");
    let ci: f64 = fields[15].parse().expect("numeric CI");
    assert!((hpi - 100.0).abs() < 1e-9);
    assert!((hei - 8.0).abs() < 1e-9);
    assert!((ci - 1.0).abs() < 1e-9);
}

#[test]
fn oversized_cell_never_exports_infinite_indices() {
    let text = format!(
        "{HEADER}
         Goa,North Goa,Mapusa,73.81,15.59,1e308,0,0,0,0,0,0,0
         Goa,North Goa,Calangute,73.75,15.54,1e9,0,0,0,0,0,0,0
"
    );
    let output = export(&text, ConcentrationUnit::MilligramsPerLitre);
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[1].starts_with("Goa,North Goa,Mapusa,73.81,15.59,1e308,"));
    assert!(lines[1].ends_with(",0,0,0"));
    let fields: Vec<&str> = lines[2].split(',').collect();
    for raw in &fields[13..16] {
        let value: f64 = raw.parse().expect("numeric index");
        assert!(value.is_finite() && value > 0.0);
    }
}

#[test]
fn empty_table_exports_header_only() {
    let output = export(&format!("{HEADER}\n"), ConcentrationUnit::MicrogramsPerLitre);
    assert_eq!(
        output,
        "State,District,Location,Longitude,Latitude,Cd,Cr,Cu,Pb,Mn,Ni,Fe,Zn,HPI,HEI,CI\n"
    );
}

#[test]
fn export_file_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("indexed.csv");
    let rows = parse_table(&format!("{HEADER}\nA,B,C,1,2,1,1,1,1,1,1,1,1\n")).expect("table");
    let indexed = to_indexed_rows(&rows, ConcentrationUnit::MicrogramsPerLitre, &base_standards());
    hmpi_report::write_indexed_csv_file(&path, &indexed).expect("write export");
    let written = std::fs::read_to_string(&path).expect("read export");
    assert_eq!(written.lines().count(), 2);
    assert!(written.starts_with("State,District"));
}
