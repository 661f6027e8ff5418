/// Strip the double quotes a build script may leave around a version string
#[must_use]
pub fn clean_version(version: &str) -> String {
    version.replace('"', "")
}
