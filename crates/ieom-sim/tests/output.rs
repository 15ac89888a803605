use std::fs;
use std::path::Path;

use ieom_core::IeomError;
use ieom_sim::output::{derived_path, provenance, write_json, MatrixFile};
use ieom_sim::{checkpoint_path, parse_checkpoint_step, Checkpoint, OutputFile, SimulationConfig};
use num_complex::Complex64;

#[test]
fn checkpoint_names_carry_the_step() {
    let out = Path::new("runs/chain.txt");
    let path = checkpoint_path(out, 1200);
    assert_eq!(path, Path::new("runs/chain_checkpoint_1200.bin"));
    assert_eq!(parse_checkpoint_step(&path), Some(1200));

    assert_eq!(parse_checkpoint_step(Path::new("a_checkpoint_.bin")), None);
    assert_eq!(parse_checkpoint_step(Path::new("a_checkpoint_12x.bin")), None);
    assert_eq!(parse_checkpoint_step(Path::new("a_checkpoint_12.json")), None);
    assert_eq!(parse_checkpoint_step(Path::new("a_checkpoint_3_checkpoint_9.bin")), Some(9));
    assert_eq!(derived_path(out, "_matrix.json"), Path::new("runs/chain_matrix.json"));
}

#[test]
fn checkpoint_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chain.txt");
    let checkpoint = Checkpoint {
        step: 300,
        time: 3.0,
        coefficients: vec![Complex64::new(0.25, -0.5), Complex64::new(0.0, 1.0)],
    };
    let path = checkpoint_path(&out, checkpoint.step);
    checkpoint.store(&path).unwrap();
    assert_eq!(Checkpoint::load(&path).unwrap(), checkpoint);

    let renamed = checkpoint_path(&out, 400);
    fs::rename(&path, &renamed).unwrap();
    let err = Checkpoint::load(&renamed).unwrap_err();
    assert!(matches!(err, IeomError::Io(_)));
    assert_eq!(err.info().code, "checkpoint-mismatch");

    let unnamed = dir.path().join("state.bin");
    fs::rename(&renamed, &unnamed).unwrap();
    assert_eq!(Checkpoint::load(&unnamed).unwrap_err().info().code, "checkpoint-name");
}

#[test]
fn resumed_output_drops_rows_from_the_resume_time_on() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chain.txt");
    let mut output = OutputFile::create(&path).unwrap();
    for step in 0..5 {
        output.write_row(step as f64 * 0.5, &[step as f64]).unwrap();
    }
    output.flush().unwrap();
    drop(output);

    let mut output = OutputFile::resume(&path, 1.0).unwrap();
    output.write_row(1.0, &[10.0]).unwrap();
    output.flush().unwrap();
    drop(output);

    let contents = fs::read_to_string(&path).unwrap();
    let header = contents.lines().filter(|line| line.starts_with('#')).count();
    assert_eq!(header, 4);
    let rows: Vec<&str> = contents.lines().filter(|line| !line.starts_with('#')).collect();
    assert_eq!(rows, vec!["0\t0", "0.5\t1", "1\t10"]);
}

#[test]
fn resume_starts_fresh_only_when_the_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.txt");
    let mut output = OutputFile::resume(&path, 2.0).unwrap();
    output.write_row(2.0, &[1.0]).unwrap();
    output.flush().unwrap();
    drop(output);
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().filter(|line| line.starts_with('#')).count(), 4);
    assert_eq!(contents.lines().last(), Some("2\t1"));

    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let err = OutputFile::resume(&blocker.join("chain.txt"), 1.0).unwrap_err();
    assert!(matches!(err, IeomError::Io(_)));
    assert_eq!(err.info().code, "output-open");
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[test]
fn matrix_file_records_provenance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("matrix.json");
    let config = SimulationConfig::default();
    let file = MatrixFile {
        provenance: provenance("test-program", &config).unwrap(),
        rows: 2,
        cols: 2,
        triplets: vec![(0usize, 1usize, 0.5f64)],
    };
    write_json(&path, &file).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["rows"], 2);
    assert_eq!(value["provenance"]["program"], "test-program");
    assert_eq!(value["provenance"]["input_hash"], config.hash().unwrap());
}
