use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    let output = Command::new("rustc")
        .arg("--version")
        .output()
        .expect("Failed to execute rustc");
    let version = String::from_utf8_lossy(&output.stdout);
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("rustc_version.rs");
    fs::write(
        &dest,
        format!("pub const RUSTC_VERSION: &str = {:?};", version.trim()),
    )
    .unwrap();
}
