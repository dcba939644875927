use dioxus::prelude::*;

use crate::components::navigation::icons::{IconKind, NavIcon};

const LOGO: Asset = asset!("/assets/logo.svg");

const ICON_SIZE: u32 = 28;

/// One clickable sidebar item: a label and glyph paired with a destination.
struct NavEntry {
    label: &'static str,
    target: NavTarget,
    icon: IconKind,
}

/// Destination classification. Internal paths go through the client-side
/// router; external addresses are followed by the browser directly.
#[derive(Clone, Copy)]
enum NavTarget {
    Internal(&'static str),
    External(&'static str),
}

/// Sidebar entries in display order. The list is fixed at compile time and
/// never changes at runtime.
static NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry {
        label: "친환경지도",
        target: NavTarget::Internal("/"),
        icon: IconKind::Map,
    },
    NavEntry {
        label: "마이페이지",
        target: NavTarget::Internal("/mypage"),
        icon: IconKind::User,
    },
    NavEntry {
        label: "서비스소개",
        target: NavTarget::Internal("/Aboutus"),
        icon: IconKind::Leaf,
    },
    NavEntry {
        label: "오픈채팅",
        target: NavTarget::External("https://open.kakao.com/o/g8FLpt1e"),
        icon: IconKind::Comment,
    },
    // 오류제보 still points at an empty path; a real destination is pending upstream.
    NavEntry {
        label: "오류제보",
        target: NavTarget::Internal(""),
        icon: IconKind::Bug,
    },
];

/// Fixed sidebar: the logo linking back to the root, then one item per
/// entry in `NAV_ENTRIES`. Stateless, takes no props.
#[component]
pub fn Nav() -> Element {
    rsx! {
        nav { class: "side-nav",
            ul {
                li { class: "logo",
                    Link { to: "/", class: "logo",
                        img { src: LOGO, alt: "EcoGreenSeoul Logo" }
                    }
                }
                for entry in NAV_ENTRIES.iter() {
                    li {
                        {entry_link(entry)}
                    }
                }
            }
        }
    }
}

fn entry_link(entry: &NavEntry) -> Element {
    match entry.target {
        NavTarget::Internal(path) => rsx! {
            Link { to: path,
                NavIcon { kind: entry.icon, size: ICON_SIZE }
                span { "{entry.label}" }
            }
        },
        NavTarget::External(url) => rsx! {
            a { href: url,
                NavIcon { kind: entry.icon, size: ICON_SIZE }
                span { "{entry.label}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_fixed_order() {
        let labels: Vec<&str> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["친환경지도", "마이페이지", "서비스소개", "오픈채팅", "오류제보"]
        );
    }

    #[test]
    fn exactly_one_entry_is_external() {
        let external: Vec<&str> = NAV_ENTRIES
            .iter()
            .filter(|e| matches!(e.target, NavTarget::External(_)))
            .map(|e| e.label)
            .collect();
        assert_eq!(external, ["오픈채팅"]);
    }

    #[test]
    fn open_chat_leaves_the_app() {
        let entry = NAV_ENTRIES.iter().find(|e| e.label == "오픈채팅").unwrap();
        match entry.target {
            NavTarget::External(url) => {
                assert_eq!(url, "https://open.kakao.com/o/g8FLpt1e")
            }
            NavTarget::Internal(_) => panic!("open chat must not use the router"),
        }
    }

    #[test]
    fn internal_destinations_match_route_table() {
        let internal: Vec<&str> = NAV_ENTRIES
            .iter()
            .filter_map(|e| match e.target {
                NavTarget::Internal(path) => Some(path),
                NavTarget::External(_) => None,
            })
            .collect();
        assert_eq!(internal, ["/", "/mypage", "/Aboutus", ""]);

        // The non-empty paths are exactly what the Route enum prints.
        assert_eq!(crate::Route::Home {}.to_string(), "/");
        assert_eq!(crate::Route::MyPage {}.to_string(), "/mypage");
        assert_eq!(crate::Route::AboutUs {}.to_string(), "/Aboutus");
    }

    #[test]
    fn bug_report_keeps_empty_destination() {
        let entry = NAV_ENTRIES.iter().find(|e| e.label == "오류제보").unwrap();
        assert!(matches!(entry.target, NavTarget::Internal("")));
    }

    #[test]
    fn every_entry_carries_its_table_icon() {
        let icons: Vec<IconKind> = NAV_ENTRIES.iter().map(|e| e.icon).collect();
        assert_eq!(
            icons,
            [
                IconKind::Map,
                IconKind::User,
                IconKind::Leaf,
                IconKind::Comment,
                IconKind::Bug
            ]
        );
    }
}
