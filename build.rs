// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the application icon into the executable
//! so it appears in the taskbar and file explorer.

fn main() {
    // Only run on Windows, and only when branding assets are present
    #[cfg(target_os = "windows")]
    {
        let icon = "assets/branding/powerswitch.ico";
        if std::path::Path::new(icon).exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon(icon);
            res.compile().expect("Failed to compile Windows resources");
        }
    }
}
