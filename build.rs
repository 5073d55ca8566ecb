fn main() {
    #[cfg(feature = "runtime")]
    tauri_build::build();
}
