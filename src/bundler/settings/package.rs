//! Package metadata.

/// Project metadata consumed by the packaging recipes.
///
/// Usually built from the project's `pubspec.yaml` via
/// [`ProjectMetadata`](crate::metadata::ProjectMetadata).
///
/// # Examples
///
/// ```
/// use hover_packaging::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     name: "myapp".into(),
///     version: "1.2.3".into(),
///     description: "demo".into(),
///     author: None,
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageSettings {
    /// Project name; also the name of the compiled executable.
    pub name: String,

    /// Version string, e.g. "1.2.3".
    pub version: String,

    /// One-line description used in manifests and control files.
    pub description: String,

    /// Package author.
    ///
    /// When absent the Debian maintainer falls back to the current OS user.
    pub author: Option<String>,
}
