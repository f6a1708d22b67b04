//! Home page - hero, about timeline, skills and certificates.

use devblog_core::{RevealTracker, SkillBars};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{
    next_frame, skill_bar_id, skill_item_id, use_reveal, BackToTop, CredlyQr, NavHeader,
    NavLocation, SkillBar,
};
use crate::context::{use_site_config, use_skills};

/// `(id, period, title, text)` entries of the about timeline.
const TIMELINE: [(&str, &str, &str, &str); 3] = [
    (
        "timeline-study",
        "2019 - 2023",
        "Kỹ sư phần mềm",
        "Học hệ thống, mạng máy tính và lập trình hướng đối tượng.",
    ),
    (
        "timeline-intern",
        "2023",
        "Thực tập DevOps",
        "Dựng pipeline CI/CD và giám sát dịch vụ container hóa.",
    ),
    (
        "timeline-engineer",
        "2024 - nay",
        "Backend / DevOps Engineer",
        "Vận hành cụm Kubernetes và viết dịch vụ backend bằng Rust.",
    ),
];

/// Home page component.
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let config = use_site_config();
    let skills = use_skills();

    let mut revealed = use_signal(RevealTracker::default);
    let mut bars = use_signal(SkillBars::default);

    use_reveal(".reveal", 0.1, move |id| {
        let mut next = revealed.peek().clone();
        if next.reveal(&id) {
            revealed.set(next);
        }
    });

    let bar_targets: Vec<(String, String)> = skills
        .iter()
        .map(|s| (skill_bar_id(&s.name), s.width.clone()))
        .collect();
    use_reveal(".skill-progress", 0.3, move |id| {
        let Some((_, width)) = bar_targets.iter().find(|(bar, _)| *bar == id) else {
            tracing::debug!(%id, "Reveal for unknown skill bar");
            return;
        };
        bars.write().reveal(&id, width);
        spawn(async move {
            next_frame().await;
            let applied = bars.write().before_render();
            tracing::trace!(applied, "Skill bar widths applied");
        });
    });

    let reveal_class = move |id: &str| {
        if revealed.read().is_revealed(id) {
            "reveal fade-in"
        } else {
            "reveal"
        }
    };
    let current_bars = bars.read().clone();
    let qr_class = reveal_class("certificates-qr");

    rsx! {
        NavHeader { current: NavLocation::Home }

        main {
            section { id: "home", class: "hero",
                div { class: "container hero-content",
                    h1 { class: "hero-title", "Xin chào, mình là Nhật" }
                    p { class: "hero-subtitle",
                        "Backend & DevOps Engineer. Viết về container, cloud và Rust."
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            navigator.push(Route::Blog {});
                        },
                        "Đọc blog"
                    }
                }
            }

            section { id: "about", class: "about",
                div { class: "container",
                    div { class: "section-header",
                        h2 { class: "section-title", "Giới thiệu" }
                    }
                    div { class: "timeline",
                        for (id, period, title, text) in TIMELINE {
                            div { key: "{id}", id: "{id}", class: "timeline-item {reveal_class(id)}",
                                span { class: "timeline-period", "{period}" }
                                h3 { class: "timeline-title", "{title}" }
                                p { class: "timeline-text", "{text}" }
                            }
                        }
                    }
                }
            }

            section { id: "skills", class: "skills",
                div { class: "container",
                    div { class: "section-header",
                        h2 { class: "section-title", "Kỹ năng" }
                    }
                    div { class: "skills-list",
                        for skill in skills.iter() {
                            SkillBar {
                                key: "{skill.name}",
                                name: skill.name.clone(),
                                target: skill.width.clone(),
                                width: current_bars.width(&skill_bar_id(&skill.name)).to_string(),
                                revealed: revealed.read().is_revealed(&skill_item_id(&skill.name)),
                            }
                        }
                    }
                }
            }

            section { id: "certificates", class: "certificates",
                div { class: "container",
                    div { class: "section-header",
                        h2 { class: "section-title", "Chứng chỉ" }
                        p { class: "section-subtitle", "Xem toàn bộ chứng chỉ trên Credly" }
                    }
                    div { id: "certificates-qr", class: "{qr_class}",
                        CredlyQr { target: config.qr_target.clone(), size: config.qr_size }
                    }
                }
            }
        }

        footer { class: "footer",
            div { class: "container", p { "© 2024 DevBlog" } }
        }

        BackToTop {}
    }
}
