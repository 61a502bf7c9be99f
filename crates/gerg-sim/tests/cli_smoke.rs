use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

const STATE: &str = r#"{
  "network": [
    [0.0, 0.4, 0.6, 0.2],
    [0.3, 0.0, 0.7, 0.5],
    [0.8, 0.1, 0.0, 0.9],
    [0.25, 0.35, 0.45, 0.0]
  ]
}"#;

const CONFIG: &str = r#"
iterations: 6
proposal_sigma: 0.1
snapshot_interval: 2
model:
  terms:
    - statistic: edges
      theta: -0.5
    - statistic: recip
      theta: 0.25
seed_policy:
  master_seed: 5
"#;

fn gerg_sim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gerg-sim"))
}

fn write_inputs(dir: &Path) {
    fs::write(dir.join("state.json"), STATE).unwrap();
    fs::write(dir.join("run.yaml"), CONFIG).unwrap();
}

#[test]
fn sample_writes_every_artefact() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());
    let out = dir.path().join("run");

    let status = gerg_sim()
        .arg("sample")
        .arg("--config")
        .arg(dir.path().join("run.yaml"))
        .arg("--in")
        .arg(dir.path().join("state.json"))
        .arg("--out")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    for name in [
        "summary.json",
        "snapshots.csv",
        "accept_trace.csv",
        "networks.json",
        "final_network.json",
        "manifest.json",
    ] {
        assert!(out.join(name).exists(), "missing {name}");
    }

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["iterations"], 6);
    assert_eq!(summary["snapshots_recorded"], 3);

    let networks: Vec<Vec<Vec<f64>>> =
        serde_json::from_str(&fs::read_to_string(out.join("networks.json")).unwrap()).unwrap();
    assert_eq!(networks.len(), 3);
    assert!(networks.iter().all(|net| net.len() == 4));

    let trace = fs::read_to_string(out.join("accept_trace.csv")).unwrap();
    assert_eq!(trace.lines().count(), 7);
}

#[test]
fn sample_is_reproducible_for_a_seed() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());
    let mut finals = Vec::new();
    for run in ["a", "b"] {
        let out = dir.path().join(run);
        let status = gerg_sim()
            .args(["sample", "--seed", "19", "--config"])
            .arg(dir.path().join("run.yaml"))
            .arg("--in")
            .arg(dir.path().join("state.json"))
            .arg("--out")
            .arg(&out)
            .status()
            .unwrap();
        assert!(status.success());
        finals.push(fs::read_to_string(out.join("final_network.json")).unwrap());
    }
    assert_eq!(finals[0], finals[1]);
}

#[test]
fn stats_prints_named_statistics() {
    let dir = tempdir().unwrap();
    let state = r#"{"network": [[0.0, 0.4], [0.4, 0.0]]}"#;
    fs::write(dir.path().join("pair.json"), state).unwrap();

    let output = gerg_sim()
        .arg("stats")
        .arg("--in")
        .arg(dir.path().join("pair.json"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["nodes"], 2);
    let edges = report["statistics"]["edges"].as_f64().unwrap();
    let recip = report["statistics"]["recip"].as_f64().unwrap();
    assert!((edges - 0.8).abs() < 1e-12);
    assert!((recip - 0.16).abs() < 1e-12);
    assert_eq!(report["statistics"]["ttriads"].as_f64(), Some(0.0));
}

#[test]
fn invalid_sigma_fails_the_command() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());
    fs::write(
        dir.path().join("bad.yaml"),
        "iterations: 2\nproposal_sigma: -1.0\n",
    )
    .unwrap();
    let output = gerg_sim()
        .arg("sample")
        .arg("--config")
        .arg(dir.path().join("bad.yaml"))
        .arg("--in")
        .arg(dir.path().join("state.json"))
        .arg("--out")
        .arg(dir.path().join("bad"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sigma-non-positive"));
}
