use crate::download::Platform;

/// One card in the feature grid.
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const FEATURES: [FeatureItem; 3] = [
    FeatureItem {
        title: "Intuitive Interface",
        description: "Navigate with ease through our carefully designed user \
                      experience that puts functionality first.",
        accent: "orange",
    },
    FeatureItem {
        title: "Real-time Updates",
        description: "Stay informed with instant notifications and live data, \
                      keeping you connected to what matters most.",
        accent: "slate",
    },
    FeatureItem {
        title: "Privacy Focused",
        description: "Your data belongs to you. We implement industry-leading \
                      security measures to protect your information.",
        accent: "red",
    },
];

pub const SHOWCASE_HIGHLIGHTS: [&str; 4] = [
    "Quick and responsive interface",
    "Personalized recommendations",
    "Offline capabilities for use anywhere",
    "Regular updates with new features",
];

/// One platform card in the download section.
pub struct PlatformCard {
    pub platform: Platform,
    pub name: &'static str,
    pub blurb: &'static str,
    pub status_label: &'static str,
    pub status_value: &'static str,
    pub action_label: &'static str,
}

pub const PLATFORM_CARDS: [PlatformCard; 2] = [
    PlatformCard {
        platform: Platform::Android,
        name: "Android",
        blurb: "Get the latest version for your Android device and enjoy all features.",
        status_label: "Current Version",
        status_value: crate::config::APP_VERSION,
        action_label: "Download Now",
    },
    PlatformCard {
        platform: Platform::Ios,
        name: "iOS",
        blurb: "iOS version coming soon. Join our waitlist to be notified when \
                it's available.",
        status_label: "Status",
        status_value: "Coming Soon",
        action_label: "Not Yet Available",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_card_advertises_the_shipped_version() {
        let android = PLATFORM_CARDS
            .iter()
            .find(|card| card.platform == Platform::Android)
            .unwrap();
        assert_eq!(android.status_value, crate::config::APP_VERSION);
        assert!(android.platform.release_href().is_some());
    }

    #[test]
    fn ios_card_has_no_artifact() {
        let ios = PLATFORM_CARDS
            .iter()
            .find(|card| card.platform == Platform::Ios)
            .unwrap();
        assert!(ios.platform.release_href().is_none());
    }
}
