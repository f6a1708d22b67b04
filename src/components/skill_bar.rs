//! Skill progress bar.

use dioxus::prelude::*;

/// Element id for a skill's bar, used to match reveal reports.
pub fn skill_bar_id(name: &str) -> String {
    slugged("skill", name)
}

/// Element id for the row holding a skill, which fades in once seen.
pub fn skill_item_id(name: &str) -> String {
    slugged("skill-item", name)
}

fn slugged(prefix: &str, name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let mut id = String::from(prefix);
    for part in slug.split('-').filter(|p| !p.is_empty()) {
        id.push('-');
        id.push_str(part);
    }
    id
}

#[derive(Props, Clone, PartialEq)]
pub struct SkillBarProps {
    pub name: String,
    /// Target width shown as the percentage label
    pub target: String,
    /// Current CSS width of the fill
    pub width: String,
    /// Row has scrolled into view
    #[props(default)]
    pub revealed: bool,
}

#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let id = skill_bar_id(&props.name);
    let item_id = skill_item_id(&props.name);
    let class = if props.revealed {
        "skill-item reveal fade-in"
    } else {
        "skill-item reveal"
    };

    rsx! {
        div { id: "{item_id}", class: "{class}",
            div { class: "skill-info",
                span { class: "skill-name", "{props.name}" }
                span { class: "skill-percent", "{props.target}" }
            }
            div { class: "skill-bar",
                div {
                    id: "{id}",
                    class: "skill-progress",
                    "data-width": "{props.target}",
                    style: "width: {props.width}",
                }
            }
        }
    }
}
