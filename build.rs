#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Assicurati che res/rattendance.ico esista
    let mut res = WindowsResource::new();
    res.set_icon("res/rattendance.ico")
        .set("FileDescription", "rAttendance CLI")
        .set("ProductName", "rAttendance")
        .set("OriginalFilename", "rattendance.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
