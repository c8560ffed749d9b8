use chrono::NaiveDate;

use super::escape::escape_html;
use super::sections::{
    render_about, render_contact, render_education, render_experience, render_header,
    render_honors, render_projects, render_skills,
};
use crate::cv::models::CvData;

/// Renders the whole CV as a standalone HTML document.
///
/// Sections with no content are left out entirely.
pub fn render_page(cv: &CvData, today: NaiveDate) -> String {
    let title = cv
        .profile
        .as_ref()
        .map(|p| escape_html(&p.name))
        .unwrap_or_else(|| "CV".to_string());

    let sections = [
        ("about", "About", render_about(&cv.about)),
        (
            "experience",
            "Experience",
            render_experience(&cv.experience, today),
        ),
        ("projects", "Projects", render_projects(&cv.projects)),
        ("skills", "Skills", render_skills(cv)),
        ("education", "Education", render_education(cv)),
        ("honors", "Honors & Awards", render_honors(&cv.honors)),
        ("contact", "Contact", render_contact(cv.contact.as_ref())),
    ];

    let mut body = render_header(cv.profile.as_ref());
    for (id, heading, content) in sections {
        if content.is_empty() {
            continue;
        }
        body.push_str(&format!(
            "<section id=\"{id}\" class=\"section\">\n<h2>{}</h2>\n<div class=\"content\">\n{content}\n</div>\n</section>\n",
            escape_html(heading)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}
