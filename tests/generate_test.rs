use cockroachdb_metrics_gen::catalog::overlay::OVERLAY;
use cockroachdb_metrics_gen::{run, GenerateOptions, GeneratorError};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const HEADER: &str = "metric_name,metric_type,interval,unit_name,per_unit_name,description,orientation,integration,short_name,curated_metric";

fn metric_row(name: &str, description: &str, metric_type: &str, unit: &str) -> String {
    format!(
        "<tr><td>APPLICATION</td><td><div>{}</div></td><td>{}</td><td>Label</td><td>{}</td><td>{}</td><td>AVG</td><td>NONE</td></tr>",
        name, description, metric_type, unit
    )
}

fn metrics_html(rows: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><body><table>\n<thead><tr><th>Layer</th><th>Metric</th><th>Description</th><th>Y-Axis Label</th><th>Type</th><th>Unit</th><th>Aggregation</th><th>Derivative</th></tr></thead>\n<tbody>\n{}\n</tbody></table></body></html>",
        rows.join("\n")
    )
}

fn setup(html: &str) -> (TempDir, GenerateOptions) {
    let dir = tempdir().unwrap();
    let input = dir.path().join("metrics.html");
    fs::write(&input, html).unwrap();
    let options = GenerateOptions {
        input,
        metadata_output: dir.path().join("metadata.csv"),
        mapping_output: dir.path().join("mapping.txt"),
    };
    (dir, options)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_counter_end_to_end() {
    let (_dir, options) = setup(&metrics_html(&[metric_row(
        "sql.query.count",
        "Number of SQL queries",
        "COUNTER",
        "COUNT",
    )]));

    let summary = run(&options).unwrap();
    assert_eq!(summary.metrics, 1 + OVERLAY.len());
    assert_eq!(summary.histograms, 0);
    assert_eq!(summary.metadata_rows, 1 + OVERLAY.len());

    let metadata = read(&options.metadata_output);
    let mut lines = metadata.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert!(metadata
        .lines()
        .any(|line| line == "cockroachdb.sql.query.count,counter,,count,,Number of SQL queries,0,cockroachdb,,"));

    let mapping = read(&options.mapping_output);
    assert!(mapping.starts_with("METRIC_MAP = {\n"));
    assert!(mapping.ends_with(",\n}"));
    assert!(mapping
        .lines()
        .any(|line| line == "    'sql_query_count': 'sql.query.count',"));
}

#[test]
fn test_histogram_end_to_end() {
    let (_dir, options) = setup(&metrics_html(&[
        metric_row("exec.latency", "Latency of batch KV requests", "HISTOGRAM", "NANOSECONDS"),
        // Sorts between the parent and its .sum sub-metric
        metric_row("exec.latency.p99", "", "GAUGE", "NANOSECONDS"),
    ]));

    let summary = run(&options).unwrap();
    assert_eq!(summary.histograms, 1);
    assert_eq!(summary.metadata_rows, 2 + 3 + OVERLAY.len());
    assert_eq!(summary.mapping_entries, summary.metadata_rows);

    let metadata = read(&options.metadata_output);
    let names: Vec<&str> = metadata
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .filter(|name| name.starts_with("cockroachdb.exec."))
        .collect();
    assert_eq!(
        names,
        vec![
            "cockroachdb.exec.latency",
            "cockroachdb.exec.latency.bucket",
            "cockroachdb.exec.latency.count",
            "cockroachdb.exec.latency.sum",
            "cockroachdb.exec.latency.p99",
        ]
    );

    let mapping = read(&options.mapping_output);
    let expected = "    'exec_latency': 'exec.latency',\n\
                    \x20   'exec_latency_bucket': 'exec.latency.bucket',\n\
                    \x20   'exec_latency_count': 'exec.latency.count',\n\
                    \x20   'exec_latency_sum': 'exec.latency.sum',\n\
                    \x20   'exec_latency_p99': 'exec.latency.p99',\n";
    assert!(mapping.contains(expected));
}

#[test]
fn test_output_is_sorted_and_includes_overlay() {
    let (_dir, options) = setup(&metrics_html(&[
        metric_row("sys.uptime", "Process uptime", "GAUGE", "SECONDS"),
        metric_row("admission.admitted.kv", "Number of requests admitted", "COUNTER", "COUNT"),
    ]));
    run(&options).unwrap();

    let metadata = read(&options.metadata_output);
    let names: Vec<&str> = metadata
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    for entry in OVERLAY {
        let expected = format!("cockroachdb.{}", entry.name.replace('-', "_"));
        assert!(names.contains(&expected.as_str()), "missing overlay metric {}", entry.name);
    }
    assert!(names.contains(&"cockroachdb.sys.uptime"));
}

#[test]
fn test_duplicates_fail_without_output() {
    let (_dir, options) = setup(&metrics_html(&[
        metric_row("sql.query.count", "first", "COUNTER", "COUNT"),
        metric_row("sys.uptime", "", "GAUGE", "SECONDS"),
        metric_row("sql.query.count", "second", "COUNTER", "COUNT"),
    ]));

    match run(&options) {
        Err(GeneratorError::DuplicateMetrics { names }) => {
            assert_eq!(names, vec!["sql.query.count"]);
        }
        other => panic!("expected duplicate error, got {:?}", other),
    }
    assert!(!options.metadata_output.exists());
    assert!(!options.mapping_output.exists());
}

#[test]
fn test_malformed_row_fails_without_output() {
    for cells in [7usize, 9] {
        let tds: String = (0..cells).map(|i| format!("<td>c{}</td>", i)).collect();
        let (_dir, options) = setup(&metrics_html(&[
            metric_row("sql.query.count", "", "COUNTER", "COUNT"),
            format!("<tr>{}</tr>", tds),
        ]));

        let err = run(&options).unwrap_err();
        match &err {
            GeneratorError::MalformedRow { cells: found, row } => {
                assert_eq!(*found, cells);
                assert!(row.contains("<td>c0</td>"));
            }
            other => panic!("expected malformed row, got {:?}", other),
        }
        assert!(!options.metadata_output.exists());
        assert!(!options.mapping_output.exists());
    }
}

#[test]
fn test_missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let options = GenerateOptions {
        input: dir.path().join("nope.html"),
        metadata_output: dir.path().join("metadata.csv"),
        mapping_output: dir.path().join("mapping.txt"),
    };

    let err = run(&options).unwrap_err();
    assert!(matches!(err, GeneratorError::Input { .. }));
    assert!(err.to_string().contains("nope.html"));
    assert!(!options.metadata_output.exists());
}

#[test]
fn test_unwritable_output_is_reported() {
    let (dir, mut options) = setup(&metrics_html(&[metric_row("sys.uptime", "", "GAUGE", "SECONDS")]));
    options.metadata_output = dir.path().join("missing-dir").join("metadata.csv");

    let err = run(&options).unwrap_err();
    assert!(matches!(err, GeneratorError::Output { .. }));
    assert!(!options.mapping_output.exists());
}

#[test]
fn test_rerun_is_byte_identical() {
    let html = metrics_html(&[
        metric_row("b.metric", "B", "GAUGE", "BYTES"),
        metric_row("a.metric", "A", "HISTOGRAM", "NANOSECONDS"),
    ]);
    let (_dir, options) = setup(&html);

    run(&options).unwrap();
    let first = (read(&options.metadata_output), read(&options.mapping_output));
    run(&options).unwrap();
    let second = (read(&options.metadata_output), read(&options.mapping_output));
    assert_eq!(first, second);
}
