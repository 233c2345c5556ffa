// File: crates/stream-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs for text rendering.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW used by the font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
