use yew::prelude::*;

use crate::config;
use crate::notify::NoticeKind;

/// Target operating system for the advertised app. Anything that is not
/// Android is treated as iOS, which is not shipped yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub fn from_id(id: &str) -> Self {
        match id {
            "android" => Platform::Android,
            _ => Platform::Ios,
        }
    }

    /// Release artifact to navigate to, if the platform has one.
    pub fn release_href(&self) -> Option<String> {
        match self {
            Platform::Android => Some(config::release_url()),
            Platform::Ios => None,
        }
    }
}

pub struct Notice {
    pub message: AttrValue,
    pub kind: NoticeKind,
}

/// Notification shown when a download call-to-action is pressed. Navigation
/// itself is left to the anchor element so browser-native download handling
/// applies.
pub fn download_notice(platform: Platform) -> Notice {
    match platform {
        Platform::Android => Notice {
            message: AttrValue::from(format!(
                "Preparing download for Tanaw v{} (Android)...",
                config::APP_VERSION
            )),
            kind: NoticeKind::Success,
        },
        Platform::Ios => Notice {
            message: AttrValue::Static("iOS version coming soon!"),
            kind: NoticeKind::Info,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_ids_fall_back_to_ios() {
        assert_eq!(Platform::from_id("android"), Platform::Android);
        assert_eq!(Platform::from_id("ios"), Platform::Ios);
        assert_eq!(Platform::from_id("windows"), Platform::Ios);
        assert_eq!(Platform::from_id(""), Platform::Ios);
    }

    #[test]
    fn android_notice_names_the_current_version() {
        let notice = download_notice(Platform::Android);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.message.contains(config::APP_VERSION));
        assert_eq!(
            notice.message.as_str(),
            "Preparing download for Tanaw v1.0.5 (Android)..."
        );
    }

    #[test]
    fn other_platforms_get_an_informational_coming_soon() {
        let notice = download_notice(Platform::Ios);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.message.to_lowercase().contains("coming soon"));
    }

    #[test]
    fn only_android_navigates() {
        let href = Platform::Android.release_href().unwrap();
        assert!(href.ends_with(config::APK_FILENAME));
        assert_eq!(Platform::Ios.release_href(), None);
    }
}
