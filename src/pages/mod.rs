use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page",
            h2 { "친환경지도" }
            div { class: "map-placeholder",
                p { "서울의 친환경 시설을 지도에서 찾아보세요." }
            }
        }
    }
}

#[component]
pub fn MyPage() -> Element {
    rsx! {
        section { class: "page",
            h2 { "마이페이지" }
        }
    }
}

#[component]
pub fn AboutUs() -> Element {
    rsx! {
        section { class: "page",
            h2 { "서비스소개" }
        }
    }
}
