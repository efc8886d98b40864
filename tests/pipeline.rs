use std::path::Path;

use monument_map::data::filter::NormalizeError;
use monument_map::data::loader::LoadError;
use monument_map::export::PlotlyJs;
use monument_map::{Config, Error};

fn config_in(dir: &Path, csv: &str) -> Config {
    let input = dir.join("monuments.csv");
    std::fs::write(&input, csv).unwrap();
    Config {
        input,
        output: dir.join("index.html"),
        ..Config::default()
    }
}

fn figure_json(html: &str) -> serde_json::Value {
    let start = html.rfind("const figure = ").unwrap() + "const figure = ".len();
    let end = start + html[start..].find(";\n").unwrap();
    serde_json::from_str(&html[start..end]).unwrap()
}

#[test]
fn three_row_fixture_exports_two_ordered_frames() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(
        dir.path(),
        "SAMNumber,Name,SiteType,Period,lon,lat\n\
         CM001,Fort,Roman fort,Roman,-4.1,52.3\n\
         GM002,Barrow,Round barrow,Bronze Age,-3.4,51.6\n\
         DE003,Mound,Mound,unknown,-3.2,53.1\n",
    );

    let summary = monument_map::run(&config).unwrap();
    assert_eq!(summary.rows_loaded, 3);
    assert_eq!(summary.records_plotted, 2);
    assert_eq!(summary.frames, ["Bronze Age", "Roman"]);

    let html = std::fs::read_to_string(&config.output).unwrap();
    let json = figure_json(&html);
    let frames = json["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["name"], "Bronze Age");
    assert_eq!(frames[1]["name"], "Roman");
    assert_eq!(frames[1]["data"][0]["customdata"][0][0], "CM001");
    assert_eq!(json["layout"]["updatemenus"][0]["buttons"][0]["label"], "Play");
    assert!(!json.to_string().contains("Mound"));
}

#[test]
fn unknown_rows_never_reach_the_figure() {
    let dir = tempfile::tempdir().unwrap();
    let mut csv = String::from("SAMNumber,Name,SiteType,Period,lon,lat\n");
    for i in 0..20 {
        let period = if i % 4 == 0 { "Unknown" } else { "Medieval" };
        csv.push_str(&format!("ID{i},Site {i},Castle,{period},-3.5,52.0\n"));
    }
    let config = config_in(dir.path(), &csv);

    let summary = monument_map::run(&config).unwrap();
    assert_eq!(summary.rows_loaded, 20);
    assert_eq!(summary.records_plotted, 15);
    assert_eq!(summary.frames, ["Medieval"]);
}

#[test]
fn missing_column_fails_before_anything_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(
        dir.path(),
        "SAMNumber,Name,SiteType,Period,lat\nCM001,Fort,Roman fort,Roman,52.3\n",
    );

    let err = monument_map::run(&config).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::MissingColumn("lon"))));
    assert!(!config.output.exists());
}

#[test]
fn unrecognized_period_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(
        dir.path(),
        "SAMNumber,Name,SiteType,Period,lon,lat\nCM001,Fort,Fort,Tudor,-4.1,52.3\n",
    );

    let err = monument_map::run(&config).unwrap_err();
    assert!(matches!(
        err,
        Error::Normalize(NormalizeError::UnrecognizedPeriod { row: 1, .. })
    ));
    assert!(!config.output.exists());
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("nowhere.csv"),
        output: dir.path().join("index.html"),
        ..Config::default()
    };

    let err = monument_map::run(&config).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::NotFound(_))));
}

#[test]
fn rerun_replaces_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let header = "SAMNumber,Name,SiteType,Period,lon,lat\n";

    let first = config_in(dir.path(), &format!("{header}A1,Llanfair,Chapel,Medieval,-4.0,53.0\n"));
    monument_map::run(&first).unwrap();
    let second = config_in(dir.path(), &format!("{header}B2,Caerwent,Town,Roman,-2.8,51.6\n"));
    monument_map::run(&second).unwrap();

    let html = std::fs::read_to_string(&second.output).unwrap();
    assert!(html.contains("Caerwent"));
    assert!(!html.contains("Llanfair"));
}

#[test]
fn default_output_works_offline() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(
        dir.path(),
        "SAMNumber,Name,SiteType,Period,lon,lat\nCM001,Fort,Roman fort,Roman,-4.1,52.3\n",
    );
    assert_eq!(config.plotly_js, PlotlyJs::Embedded);

    monument_map::run(&config).unwrap();
    let html = std::fs::read_to_string(&config.output).unwrap();

    assert!(!html.contains("<script src="));
    assert!(html.len() > 1_000_000);
    assert_eq!(figure_json(&html)["frames"][0]["name"], "Roman");
}

#[test]
fn unknown_rows_may_lack_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(
        dir.path(),
        "SAMNumber,Name,SiteType,Period,lon,lat\n\
         A1,Fort,Fort,Roman,-4.1,52.3\n\
         A2,Lost,Cairn,Unknown,,\n",
    );

    let summary = monument_map::run(&config).unwrap();
    assert_eq!(summary.rows_loaded, 2);
    assert_eq!(summary.records_plotted, 1);
}

#[test]
fn known_row_without_coordinates_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(
        dir.path(),
        "SAMNumber,Name,SiteType,Period,lon,lat\nA1,Fort,Fort,Roman,,52.3\n",
    );

    let err = monument_map::run(&config).unwrap_err();
    assert!(matches!(
        err,
        Error::Normalize(NormalizeError::InvalidCoordinate { row: 1, column: "lon", .. })
    ));
    assert!(!config.output.exists());
}
