use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // The dashboard has no fallback dataset: a missing fixture fails the build.
    let data_src = Path::new("../fixtures/SP500_data_.csv");
    if !data_src.exists() {
        panic!(
            "market data not found at {}; the dashboard embeds it at compile time",
            data_src.display()
        );
    }
    fs::copy(data_src, Path::new(&out_dir).join("SP500_data_.csv")).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/SP500_data_.csv");
}
