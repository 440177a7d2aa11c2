use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_ne!(v["outcome"], "InProgress");
    assert_eq!(v["board"].as_array().map(|b| b.len()), Some(9));
    assert_eq!(v["notices"].as_array().map(|n| n.len()), Some(1));
}

#[test]
fn sim_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["42", "4"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn sim_rejects_bad_size() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "0"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
