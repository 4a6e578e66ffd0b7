#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Only embed the icon when it is shipped alongside the sources
    if !std::path::Path::new("res/rservicelog.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/rservicelog.ico")
        .set("FileDescription", "rServicelog CLI")
        .set("ProductName", "rServicelog")
        .set("OriginalFilename", "rservicelog.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
