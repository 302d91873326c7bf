//! Section fragment builders
//!
//! One pure function per section: document data in, markup out. Field values
//! are inserted as-is; the document is author-controlled, not user input.

use crate::document::{
    Contact, EducationEntry, ExperienceEntry, Footer, Profile, Project, Skills, TechStack,
};

/// Base URL GitHub usernames are appended to
pub const GITHUB_BASE_URL: &str = "https://github.com/";

/// Skill categories in display order
pub const SKILL_CATEGORIES: [&str; 4] = [
    "Frameworks & Libraries",
    "Tools & IDEs",
    "Languages",
    "Infrastructure & Databases",
];

const CONTACT_GREETING: &str = "언제든지 편하게 연락주세요.";

/// Header subtitle text
pub fn header_subtitle(last_updated: &str) -> String {
    format!("최종 업데이트: {}", last_updated)
}

/// Footer text for the given year
pub fn footer_line(year: i32, footer: &Footer) -> String {
    format!("© {} {}. All rights reserved.", year, footer.copyright)
}

pub fn profile(profile: &Profile) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"profile-body\">");
    html.push_str("<div class=\"profile-text\">");
    html.push_str(&format!("<p><strong>이름:</strong> {}</p>", profile.name));
    html.push_str(&format!(
        "<p><strong>이메일:</strong> <a href=\"mailto:{0}\">{0}</a></p>",
        profile.email
    ));
    html.push_str(&format!(
        "<p><strong>GitHub:</strong> <a href=\"{0}{1}\" target=\"_blank\">github.com/{1}</a></p>",
        GITHUB_BASE_URL, profile.github
    ));
    html.push_str("</div>");
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"프로필 사진\" class=\"profile-pic\">",
        profile.image
    ));
    html.push_str("</div>");
    html
}

/// One `<p>` per blank-line separated paragraph; single newlines become `<br>`
pub fn introduce(text: &str) -> String {
    text.split("\n\n")
        .map(|paragraph| format!("<p>{}</p>", paragraph.replace('\n', "<br>")))
        .collect()
}

pub fn skills(skills: &Skills) -> String {
    let lists = [
        &skills.frameworks_libraries,
        &skills.tools_ides,
        &skills.languages,
        &skills.infrastructure_databases,
    ];

    let mut html = String::from("<div class=\"skills-grid\">");
    for (label, items) in SKILL_CATEGORIES.iter().zip(lists) {
        html.push_str("<div class=\"skill-category\">");
        html.push_str(&format!("<h3>{}</h3>", label));
        html.push_str(&list(items));
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

pub fn experience(entries: &[ExperienceEntry]) -> String {
    let mut html = String::new();
    for entry in entries {
        html.push_str("<div class=\"experience-item\">");
        html.push_str(&format!("<h3>{}</h3>", entry.company));
        html.push_str(&format!(
            "<p><strong>{}</strong> | {}</p>",
            entry.period, entry.role
        ));
        if let Some(description) = entry.description() {
            html.push_str(&format!("<h4>{}</h4>", description));
        }
        if let Some(details) = entry.details() {
            html.push_str(&list(details));
        }
        html.push_str("</div>");
    }
    html
}

pub fn projects(projects: &[Project]) -> String {
    let mut html = String::new();
    for project in projects {
        html.push_str("<div class=\"project-item\">");
        html.push_str(&format!("<h3>{}</h3>", project.name));
        html.push_str(&format!(
            "<p><strong>프로젝트 요약:</strong> {}</p>",
            project.summary
        ));
        html.push_str(&format!("<p><strong>담당 역할:</strong> {}</p>", project.role));
        html.push_str("<p><strong>주요 활동 및 성과:</strong></p>");
        html.push_str(&list(&project.achievements));
        html.push_str(&format!(
            "<p><strong>사용 기술:</strong><br>{}</p>",
            tech_stack(&project.tech_stack)
        ));
        if let (Some(url), Some(text)) = (project.link.url(), project.link.display_text()) {
            html.push_str(&format!(
                "<p><a href=\"{}\" target=\"_blank\">{}</a></p>",
                url, text
            ));
        }
        html.push_str("</div>");
    }
    html
}

/// `category: skills` pairs joined by line breaks, in document order
pub fn tech_stack(stack: &TechStack) -> String {
    stack
        .iter()
        .map(|(category, skills)| format!("<strong>{}:</strong> {}", category, skills))
        .collect::<Vec<_>>()
        .join("<br>")
}

pub fn education(entries: &[EducationEntry]) -> String {
    let mut html = String::new();
    for entry in entries {
        html.push_str("<div class=\"education-item\">");
        html.push_str(&format!("<h3>{}</h3>", entry.school));
        html.push_str(&format!(
            "<p><strong>{}</strong> | {}</p>",
            entry.major, entry.period
        ));
        if let Some(details) = entry.details() {
            html.push_str(&list(details));
        }
        html.push_str("</div>");
    }
    html
}

pub fn contact(contact: &Contact) -> String {
    format!(
        "<p>{0}</p><p><strong>이메일:</strong> <a href=\"mailto:{1}\">{1}</a></p>",
        CONTACT_GREETING, contact.email
    )
}

fn list(items: &[String]) -> String {
    let mut html = String::from("<ul>");
    for item in items {
        html.push_str(&format!("<li>{}</li>", item));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ProjectLink;

    fn project(link: ProjectLink) -> Project {
        Project {
            name: "Settlement Engine".into(),
            summary: "Daily settlement".into(),
            role: "Lead".into(),
            achievements: vec!["2M tx/day".into(), "No downtime".into()],
            tech_stack: TechStack::new()
                .with("Backend", "Kotlin")
                .with("Database", "MySQL"),
            link,
        }
    }

    #[test]
    fn test_profile_golden() {
        let html = profile(&Profile {
            name: "Jiwoo".into(),
            email: "j@example.com".into(),
            github: "jiwoo".into(),
            image: "me.png".into(),
        });

        assert_eq!(
            html,
            "<div class=\"profile-body\"><div class=\"profile-text\">\
             <p><strong>이름:</strong> Jiwoo</p>\
             <p><strong>이메일:</strong> <a href=\"mailto:j@example.com\">j@example.com</a></p>\
             <p><strong>GitHub:</strong> <a href=\"https://github.com/jiwoo\" target=\"_blank\">github.com/jiwoo</a></p>\
             </div><img src=\"me.png\" alt=\"프로필 사진\" class=\"profile-pic\"></div>"
        );
    }

    #[test]
    fn test_introduce_paragraphs() {
        let html = introduce("first line\nsecond line\n\nnext\n\nlast");
        assert_eq!(
            html,
            "<p>first line<br>second line</p><p>next</p><p>last</p>"
        );
        assert_eq!(html.matches("<p>").count(), 3);
    }

    #[test]
    fn test_introduce_single_paragraph() {
        assert_eq!(introduce("just one"), "<p>just one</p>");
    }

    #[test]
    fn test_skills_fixed_order() {
        let html = skills(&Skills {
            frameworks_libraries: vec!["Spring".into()],
            tools_ides: vec![],
            languages: vec!["Rust".into(), "Kotlin".into()],
            infrastructure_databases: vec!["AWS".into()],
        });

        let positions: Vec<usize> = SKILL_CATEGORIES
            .iter()
            .map(|label| html.find(&format!("<h3>{}</h3>", label)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<ul><li>Rust</li><li>Kotlin</li></ul>"));
        assert!(html.contains("<h3>Tools & IDEs</h3><ul></ul>"));
    }

    #[test]
    fn test_experience_optional_parts() {
        let full = ExperienceEntry {
            company: "Paygate".into(),
            period: "2021 - Present".into(),
            role: "Backend".into(),
            description: Some("Settlement team".into()),
            details: Some(vec!["Batch pipeline".into()]),
        };
        let bare = ExperienceEntry {
            company: "Shoply".into(),
            period: "2019".into(),
            role: "Junior".into(),
            description: None,
            details: Some(vec![]),
        };

        assert_eq!(
            experience(std::slice::from_ref(&full)),
            "<div class=\"experience-item\"><h3>Paygate</h3>\
             <p><strong>2021 - Present</strong> | Backend</p>\
             <h4>Settlement team</h4><ul><li>Batch pipeline</li></ul></div>"
        );

        let html = experience(&[bare]);
        assert!(!html.contains("<h4>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_project_link_named() {
        let html = projects(&[project(ProjectLink {
            url: Some("https://example.com/repo".into()),
            name: Some("Repository".into()),
        })]);
        assert!(html.contains(
            "<p><a href=\"https://example.com/repo\" target=\"_blank\">Repository</a></p>"
        ));
    }

    #[test]
    fn test_project_link_falls_back_to_url() {
        let html = projects(&[project(ProjectLink {
            url: Some("https://example.com/repo".into()),
            name: None,
        })]);
        assert!(html.contains(
            "<a href=\"https://example.com/repo\" target=\"_blank\">https://example.com/repo</a>"
        ));
    }

    #[test]
    fn test_project_without_url_has_no_link() {
        for link in [
            ProjectLink::default(),
            ProjectLink {
                url: Some(String::new()),
                name: Some("Hidden".into()),
            },
        ] {
            let html = projects(&[project(link)]);
            assert!(!html.contains("<a "));
            assert!(!html.contains("Hidden"));
        }
    }

    #[test]
    fn test_project_achievements_and_stack() {
        let html = projects(&[project(ProjectLink::default())]);
        assert!(html.contains("<ul><li>2M tx/day</li><li>No downtime</li></ul>"));
        assert!(html.contains(
            "<p><strong>사용 기술:</strong><br><strong>Backend:</strong> Kotlin<br><strong>Database:</strong> MySQL</p>"
        ));
    }

    #[test]
    fn test_project_empty_achievements_still_lists() {
        let mut p = project(ProjectLink::default());
        p.achievements.clear();
        assert!(projects(&[p]).contains("<ul></ul>"));
    }

    #[test]
    fn test_education_details() {
        let with = EducationEntry {
            school: "Hanbit".into(),
            major: "CS".into(),
            period: "2013 - 2019".into(),
            details: Some(vec!["Honors".into()]),
        };
        let without = EducationEntry {
            details: None,
            ..with.clone()
        };

        assert_eq!(
            education(&[with]),
            "<div class=\"education-item\"><h3>Hanbit</h3>\
             <p><strong>CS</strong> | 2013 - 2019</p><ul><li>Honors</li></ul></div>"
        );
        assert!(!education(&[without]).contains("<ul>"));
    }

    #[test]
    fn test_contact_and_footer() {
        assert_eq!(
            contact(&Contact {
                email: "j@example.com".into()
            }),
            "<p>언제든지 편하게 연락주세요.</p>\
             <p><strong>이메일:</strong> <a href=\"mailto:j@example.com\">j@example.com</a></p>"
        );
        assert_eq!(
            footer_line(
                2026,
                &Footer {
                    copyright: "Jiwoo Han".into()
                }
            ),
            "© 2026 Jiwoo Han. All rights reserved."
        );
        assert_eq!(header_subtitle("2024.05.01"), "최종 업데이트: 2024.05.01");
    }

    #[test]
    fn test_empty_lists_render_nothing() {
        assert_eq!(experience(&[]), "");
        assert_eq!(projects(&[]), "");
        assert_eq!(education(&[]), "");
    }
}
