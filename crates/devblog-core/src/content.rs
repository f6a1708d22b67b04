//! Built-in site content and the posts file loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::RawCard;
use crate::error::{SiteError, SiteResult};

fn post(
    category: &str,
    title: &str,
    excerpt: &str,
    date: &str,
    read_time: &str,
    slug: &str,
) -> RawCard {
    RawCard {
        category: category.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        link: format!("/blog/{}", slug),
    }
}

/// Posts shown on the blog page when no posts file is given.
pub fn default_posts() -> Vec<RawCard> {
    vec![
        post(
            "devops",
            "Docker cho người mới bắt đầu",
            "Container, image và volume: những khái niệm cần nắm trước khi triển khai ứng dụng đầu tiên.",
            "12/03/2024",
            "8 phút đọc",
            "docker-basics",
        ),
        post(
            "backend",
            "Thiết kế REST API gọn gàng",
            "Đặt tên tài nguyên, mã trạng thái và phân trang sao cho client dễ dùng.",
            "28/02/2024",
            "6 phút đọc",
            "rest-api-design",
        ),
        post(
            "devops",
            "CI/CD với GitHub Actions",
            "Tự động build, test và deploy mỗi lần push mà không cần server riêng.",
            "05/04/2024",
            "10 phút đọc",
            "github-actions",
        ),
        post(
            "frontend",
            "CSS Grid trong thực tế",
            "Bố cục thẻ bài viết dạng lưới và danh sách chỉ với vài dòng CSS.",
            "17/01/2024",
            "5 phút đọc",
            "css-grid",
        ),
        post(
            "backend",
            "Ownership trong Rust",
            "Mượn, sở hữu và vòng đời: vì sao trình biên dịch từ chối đoạn code của bạn.",
            "21/05/2024",
            "12 phút đọc",
            "rust-ownership",
        ),
        post(
            "cloud",
            "Kubernetes: Pod, Service và Ingress",
            "Ba tài nguyên cơ bản để đưa một ứng dụng container ra Internet.",
            "09/05/2024",
            "9 phút đọc",
            "kubernetes-basics",
        ),
    ]
}

/// Read a JSON array of rendered cards.
pub fn load_posts(path: &Path) -> SiteResult<Vec<RawCard>> {
    let json = std::fs::read_to_string(path)?;
    parse_posts(&json)
}

/// Parse a JSON array of rendered cards.
pub fn parse_posts(json: &str) -> SiteResult<Vec<RawCard>> {
    let posts: Vec<RawCard> = serde_json::from_str(json)?;
    if let Some(index) = posts.iter().position(|p| p.link.trim().is_empty()) {
        return Err(SiteError::InvalidPosts(format!(
            "post {} has no detail link",
            index
        )));
    }
    Ok(posts)
}

/// A skill shown with a progress bar on the CV page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// CSS width the bar grows to, e.g. "85%"
    pub width: String,
}

pub fn default_skills() -> Vec<Skill> {
    [
        ("Rust", "80%"),
        ("Docker / Kubernetes", "85%"),
        ("Linux", "90%"),
        ("JavaScript", "75%"),
        ("SQL", "70%"),
    ]
    .into_iter()
    .map(|(name, width)| Skill {
        name: name.to_string(),
        width: width.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    #[test]
    fn default_posts_parse_cleanly() {
        let cards: Vec<Card> = default_posts().into_iter().map(Card::from_raw).collect();
        assert_eq!(cards.len(), 6);
        assert!(cards.iter().all(|c| c.published.is_some()));
        assert!(cards.iter().all(|c| c.read_minutes > 0));
    }

    #[test]
    fn parse_posts_reads_json_array() {
        let json = r#"[
            {
                "category": "rust",
                "title": "Traits",
                "excerpt": "Shared behavior",
                "date": "01/02/2024",
                "read_time": "4 min",
                "link": "/blog/traits"
            }
        ]"#;
        let posts = parse_posts(json).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Traits");
    }

    #[test]
    fn parse_posts_requires_links() {
        let json = r#"[{ "category": "x", "title": "t", "excerpt": "", "date": "", "read_time": "", "link": " " }]"#;
        let err = parse_posts(json).unwrap_err();
        assert!(matches!(err, SiteError::InvalidPosts(_)));
    }

    #[test]
    fn default_skills_have_widths() {
        let skills = default_skills();
        assert_eq!(skills.len(), 5);
        assert!(skills.iter().all(|s| s.width.ends_with('%')));
    }
}
