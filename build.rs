use chrono::{Datelike, Utc};

fn main() {
    // Stamp the build so the footer can show when the site was generated
    let now = Utc::now();
    println!("cargo:rustc-env=BUILD_TIME={}", now.format("%Y-%m-%d %H:%M UTC"));
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
