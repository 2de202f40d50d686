pub const APP_VERSION: &str = "1.0.5";
pub const RELEASE_TAG: &str = "v1.0.5";
pub const APK_FILENAME: &str = "Tanaw.v1.0.5.apk";

const RELEASE_HOST: &str = "https://github.com/jules-pecaoco/tanaw";

/// Address of the downloadable Android release artifact.
pub fn release_url() -> String {
    format!("{RELEASE_HOST}/releases/download/{RELEASE_TAG}/{APK_FILENAME}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_url_points_at_current_artifact() {
        let url = release_url();
        assert!(url.contains(APP_VERSION));
        assert!(url.ends_with(APK_FILENAME));
        assert!(url.starts_with("https://"));
    }
}
