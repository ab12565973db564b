//! Freedesktop `.desktop` entries shared by the Linux recipes.

/// Lines of a desktop entry launching `exec` with `icon`.
///
/// Paths are taken as given; snap uses root-relative paths, deb uses
/// installed paths.
pub fn desktop_entry(name: &str, version: &str, exec: &str, icon: &str) -> Vec<String> {
    vec![
        "[Desktop Entry]".to_string(),
        "Encoding=UTF-8".to_string(),
        format!("Version={version}"),
        "Type=Application".to_string(),
        "Terminal=false".to_string(),
        format!("Exec={exec}"),
        format!("Name={name}"),
        format!("Icon={icon}"),
    ]
}
