//! Integration tests for the CSV series store

use std::fs;

use featurelab::indicators::compute_indicators;
use featurelab::regime::classify_regimes;
use featurelab::store::file::PROCESSED_HEADERS;
use featurelab::store::{CsvSeriesStore, SeriesStore};
use featurelab::{Error, SeriesError};
use tempfile::TempDir;

use crate::support::{constant_closes, series_from_closes, wavy_closes};

fn temp_store() -> (TempDir, CsvSeriesStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = CsvSeriesStore::new(dir.path()).expect("store");
    (dir, store)
}

fn write_raw(store: &CsvSeriesStore, symbol: &str, contents: &str) {
    fs::write(store.raw_path(symbol), contents).expect("write raw file");
}

#[test]
fn store_round_trips_raw_series() {
    let (_dir, store) = temp_store();
    let series = series_from_closes(&wavy_closes(30));

    store.write_series("AAPL", &series).unwrap();
    assert_eq!(store.load("AAPL").unwrap(), series);
}

#[test]
fn missing_symbol_is_not_found() {
    let (_dir, store) = temp_store();
    match store.load("NOPE") {
        Err(Error::NotFound { symbol }) => assert_eq!(symbol, "NOPE"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn accepts_provider_headers_and_extra_columns() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "^GSPC",
        "Date,Open,High,Low,Close,Adj Close,Volume\n\
         2020-01-02 00:00:00-05:00,10.0,11.0,9.5,10.5,10.4,1000\n\
         2020-01-03 00:00:00-05:00,10.5,12.0,10.0,11.5,11.4,0\n",
    );

    let series = store.load("^GSPC").unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.closes(), vec![10.5, 11.5]);
    assert_eq!(series.bars()[1].volume, 0.0);
    assert_eq!(series.first_date().unwrap().to_string(), "2020-01-02");
}

#[test]
fn lowercase_headers_in_any_order() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "BTC-USD",
        "volume,close,low,high,open,date\n5,2.0,1.0,3.0,1.5,2021-06-01\n",
    );
    let series = store.load("BTC-USD").unwrap();
    assert_eq!(series.bars()[0].open, 1.5);
    assert_eq!(series.bars()[0].close, 2.0);
}

#[test]
fn missing_column_is_malformed() {
    let (_dir, store) = temp_store();
    write_raw(&store, "TSLA", "Date,Open,High,Low,Volume\n2020-01-02,1,1,1,1\n");

    match store.load("TSLA") {
        Err(Error::MalformedData { symbol, reason }) => {
            assert_eq!(symbol, "TSLA");
            assert_eq!(reason, SeriesError::MissingColumn("close".to_string()));
        }
        other => panic!("expected MalformedData, got {:?}", other),
    }
}

#[test]
fn unordered_dates_are_malformed() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "AMZN",
        "Date,Open,High,Low,Close,Volume\n\
         2020-01-03,1,1,1,1,1\n\
         2020-01-02,1,1,1,1,1\n",
    );
    assert!(matches!(
        store.load("AMZN"),
        Err(Error::MalformedData {
            reason: SeriesError::NonIncreasingDate { row: 1, .. },
            ..
        })
    ));
}

#[test]
fn unparseable_values_are_malformed() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "GOOGL",
        "Date,Open,High,Low,Close,Volume\n2020-01-02,1,1,1,null,1\n",
    );
    assert!(matches!(
        store.load("GOOGL"),
        Err(Error::MalformedData {
            reason: SeriesError::InvalidValue { row: 0, field: "close", .. },
            ..
        })
    ));

    write_raw(
        &store,
        "GOOGL",
        "Date,Open,High,Low,Close,Volume\nyesterday,1,1,1,1,1\n",
    );
    assert!(matches!(
        store.load("GOOGL"),
        Err(Error::MalformedData {
            reason: SeriesError::InvalidDate { row: 0, .. },
            ..
        })
    ));
}

#[test]
fn ragged_rows_are_malformed() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "CL=F",
        "Date,Open,High,Low,Close,Volume\n2020-01-02,1,1,1,1\n",
    );
    assert!(matches!(
        store.load("CL=F"),
        Err(Error::MalformedData {
            reason: SeriesError::Decode(_),
            ..
        })
    ));
}

#[test]
fn saved_table_layout() {
    let (_dir, store) = temp_store();
    let table = classify_regimes(compute_indicators(series_from_closes(&wavy_closes(60))));
    store.save("AAPL", &table).unwrap();

    let mut reader = csv::Reader::from_path(store.processed_path("AAPL")).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, PROCESSED_HEADERS.to_vec());

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 60);

    // warm-up rows are empty, not zero
    assert_eq!(&records[0][0], "2020-01-01");
    assert_eq!(&records[0][6], "");
    assert_eq!(&records[0][8], "");
    assert_eq!(&records[0][12], "");
    assert_eq!(&records[0][13], "");

    let last = &records[59];
    let sma: f64 = last[6].parse().unwrap();
    assert!((sma - table.indicators().row(59).unwrap().sma_50.unwrap()).abs() < 1e-9);
    assert!(matches!(&last[12], "1" | "-1"));
    assert!(matches!(&last[13], "Low" | "Medium" | "High"));
}

#[test]
fn save_overwrites_previous_table() {
    let (_dir, store) = temp_store();
    let long = classify_regimes(compute_indicators(series_from_closes(&wavy_closes(60))));
    let short = classify_regimes(compute_indicators(series_from_closes(&constant_closes(5, 1.0))));

    store.save("EURUSD=X", &long).unwrap();
    store.save("EURUSD=X", &short).unwrap();

    let mut reader = csv::Reader::from_path(store.processed_path("EURUSD=X")).unwrap();
    assert_eq!(reader.records().count(), 5);
}

#[test]
fn empty_table_still_has_header() {
    let (_dir, store) = temp_store();
    let table = classify_regimes(compute_indicators(series_from_closes(&[])));
    store.save("EMPTY", &table).unwrap();

    let contents = fs::read_to_string(store.processed_path("EMPTY")).unwrap();
    assert_eq!(contents.trim_end(), PROCESSED_HEADERS.join(","));
}

#[test]
fn symbols_lists_raw_series_only() {
    let (_dir, store) = temp_store();
    store.write_series("TSLA", &series_from_closes(&[1.0])).unwrap();
    store.write_series("AAPL", &series_from_closes(&[1.0])).unwrap();
    let table = classify_regimes(compute_indicators(series_from_closes(&[1.0])));
    store.save("AAPL", &table).unwrap();
    fs::write(store.data_dir().join("notes.txt"), "ignore me").unwrap();

    assert_eq!(store.symbols().unwrap(), vec!["AAPL", "TSLA"]);
}

#[test]
fn failed_save_leaves_no_staging_file() {
    let (_dir, store) = temp_store();
    let table = classify_regimes(compute_indicators(series_from_closes(&wavy_closes(30))));
    let target = store.processed_path("MSFT");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("occupied"), "x").unwrap();

    assert!(matches!(store.save("MSFT", &table), Err(Error::Io(_))));
    assert!(!target.with_extension("csv.tmp").exists());
    assert!(target.is_dir());
}

#[test]
fn symbols_with_path_components_are_rejected() {
    let (dir, store) = temp_store();
    let series = series_from_closes(&wavy_closes(5));
    let table = classify_regimes(compute_indicators(series.clone()));

    for symbol in ["../AAPL", "a/b", "a\\b", "..", ".", ""] {
        assert!(matches!(store.load(symbol), Err(Error::Config(_))), "load {:?}", symbol);
        assert!(matches!(store.save(symbol, &table), Err(Error::Config(_))), "save {:?}", symbol);
        assert!(
            matches!(store.write_series(symbol, &series), Err(Error::Config(_))),
            "write {:?}",
            symbol
        );
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn dotted_symbols_are_still_valid() {
    let (_dir, store) = temp_store();
    let series = series_from_closes(&wavy_closes(5));
    store.write_series("BRK.B", &series).unwrap();
    assert_eq!(store.load("BRK.B").unwrap(), series);
}
