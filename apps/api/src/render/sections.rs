//! Per-section HTML fragments. Every interpolated value goes through `escape_html`.

use chrono::NaiveDate;

use super::escape::escape_html;
use crate::cv::models::{Contact, CvData, ExperienceRecord, Honor, Profile, Project};
use crate::duration::{compute_own_duration, group_by_employer};

pub fn render_header(profile: Option<&Profile>) -> String {
    let Some(profile) = profile else {
        return String::new();
    };

    format!(
        "<header>\n<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n<p class=\"location\">{}</p>\n</header>\n",
        escape_html(&profile.name),
        escape_html(&profile.title),
        escape_html(&profile.location),
    )
}

/// Contact lines. Independent of the profile header.
pub fn render_contact(contact: Option<&Contact>) -> String {
    let Some(contact) = contact else {
        return String::new();
    };

    let mut html = String::from("<div class=\"contact-info\">\n");
    if let Some(email) = &contact.email {
        let email = escape_html(email);
        html.push_str(&format!(
            "<p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>\n"
        ));
    }
    if let Some(phone) = &contact.phone {
        html.push_str(&format!(
            "<p><strong>Phone:</strong> {}</p>\n",
            escape_html(phone)
        ));
    }
    if let Some(location) = &contact.location {
        html.push_str(&format!(
            "<p><strong>Location:</strong> {}</p>\n",
            escape_html(location)
        ));
    }
    if let Some(linkedin) = &contact.linkedin {
        html.push_str(&format!(
            "<p><strong>LinkedIn:</strong> {}</p>\n",
            external_link(linkedin, &strip_scheme(linkedin), None)
        ));
    }
    if let Some(website) = &contact.website {
        html.push_str(&format!(
            "<p><strong>Website:</strong> {}</p>\n",
            external_link(website, &strip_scheme(website), None)
        ));
    }
    html.push_str("</div>\n");
    html
}

pub fn render_about(paragraphs: &[String]) -> String {
    paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Experience grouped by employer. Multi-role employers get a shared header
/// carrying the combined tenure; every position shows its own duration.
pub fn render_experience(experience: &[ExperienceRecord], today: NaiveDate) -> String {
    let mut html = String::new();

    for group in group_by_employer(experience) {
        let multi_role = group.is_multi_role();

        if multi_role {
            let company = match group.company_url() {
                Some(url) => external_link(url, group.employer, Some("company-name")),
                None => format!(
                    "<span class=\"company-name\">{}</span>",
                    escape_html(group.employer)
                ),
            };
            let total = group
                .aggregate_tenure(today)
                .map(|t| format!("<span class=\"company-duration\">{t}</span>"))
                .unwrap_or_default();
            html.push_str(&format!(
                "<div class=\"experience-group\">\n<div class=\"company-header\">{company}{total}</div>\n"
            ));
        }

        for record in &group.records {
            html.push_str(&render_position(record, !multi_role, today));
        }

        if multi_role {
            html.push_str("</div>\n");
        }
    }

    html
}

fn render_position(record: &ExperienceRecord, show_company: bool, today: NaiveDate) -> String {
    let period = match compute_own_duration(&record.period, today) {
        Some(duration) => format!("{} · {duration}", escape_html(&record.period)),
        None => escape_html(&record.period),
    };

    let company = match (show_company, record.company_url.as_deref()) {
        (false, _) => String::new(),
        (true, Some(url)) => external_link(url, &record.company, Some("company")),
        (true, None) => format!(
            "<span class=\"company\">{}</span>",
            escape_html(&record.company)
        ),
    };

    let mut html = format!(
        "<div class=\"experience-item\">\n<div class=\"experience-header\">\n<h3>{}</h3>{company}<span class=\"period\">{period}</span>\n</div>\n<p class=\"location-text\">{}</p>\n<div class=\"experience-content\">",
        escape_html(&record.title),
        escape_html(&record.location),
    );

    if let Some(description) = &record.description {
        html.push_str(&format!("<p>{}</p>", escape_html(description)));
    }
    if !record.bullets.is_empty() {
        html.push_str("<ul>");
        for bullet in &record.bullets {
            html.push_str(&format!("<li>{}</li>", escape_html(bullet)));
        }
        html.push_str("</ul>");
    }
    if let Some(tech) = &record.technologies {
        html.push_str(&tech_stack(tech));
    }

    html.push_str("</div>\n</div>\n");
    html
}

pub fn render_projects(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|project| {
            let mut html = format!(
                "<div class=\"project-item\">\n<div class=\"project-header\"><h3>{}</h3><span class=\"project-period\">{}</span></div>\n<div class=\"project-content\">",
                escape_html(&project.title),
                escape_html(&project.period),
            );
            for paragraph in project.description.as_slice() {
                html.push_str(&format!("<p>{}</p>", escape_html(paragraph)));
            }
            if let Some(tech) = &project.technologies {
                html.push_str(&tech_stack(tech));
            }
            html.push_str("</div>\n</div>");
            html
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_skills(cv: &CvData) -> String {
    if cv.skills.is_empty() {
        return String::new();
    }
    let categories = cv
        .skills
        .iter()
        .map(|s| {
            format!(
                "<div class=\"skill-category\"><h3>{}</h3><p>{}</p></div>",
                escape_html(&s.category),
                escape_html(&s.items)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<div class=\"skills-grid\">\n{categories}\n</div>")
}

pub fn render_education(cv: &CvData) -> String {
    cv.education
        .iter()
        .map(|edu| {
            format!(
                "<div class=\"education-item\"><h3>{}</h3><p class=\"school\">{}</p><p class=\"period\">{}</p></div>",
                escape_html(&edu.degree),
                escape_html(&edu.school),
                escape_html(&edu.period)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_honors(honors: &[Honor]) -> String {
    honors
        .iter()
        .map(|honor| {
            let mut html = format!(
                "<div class=\"honor-item\"><h3>{}</h3><p class=\"honor-details\">Issued by {} · {}</p>",
                escape_html(&honor.title),
                escape_html(&honor.issuer),
                escape_html(&honor.date),
            );
            if let Some(assoc) = &honor.associated_with {
                html.push_str(&format!(
                    "<p class=\"honor-association\">Associated with {}</p>",
                    escape_html(assoc)
                ));
            }
            if let Some(description) = &honor.description {
                html.push_str(&format!(
                    "<p class=\"honor-description\">{}</p>",
                    escape_html(description)
                ));
            }
            html.push_str("</div>");
            html
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn tech_stack(tech: &str) -> String {
    format!(
        "<p class=\"tech-stack\"><strong>Technologies:</strong> {}</p>",
        escape_html(tech)
    )
}

fn external_link(url: &str, text: &str, class: Option<&str>) -> String {
    let class = class
        .map(|c| format!(" class=\"{c}\""))
        .unwrap_or_default();
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"{class}>{}</a>",
        escape_html(url),
        escape_html(text)
    )
}

fn strip_scheme(url: &str) -> String {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
        .to_string()
}
