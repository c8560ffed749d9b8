use serde::{Deserialize, Serialize};

/// The authored CV document, deserialized from `data.json`.
///
/// Every section is optional on the wire; a missing section renders as nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub honors: Vec<Honor>,
    #[serde(default)]
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub social: Social,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

/// One position. `company` is the grouping key: exact string match, no normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    #[serde(default)]
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub company_url: Option<String>,
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub technologies: Option<String>,
}

impl ExperienceRecord {
    #[cfg(test)]
    pub fn new(company: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            period: period.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paragraphs {
    One(String),
    Many(Vec<String>),
}

impl Paragraphs {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Paragraphs::One(p) => std::slice::from_ref(p),
            Paragraphs::Many(ps) => ps,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub period: String,
    pub description: Paragraphs,
    #[serde(default)]
    pub technologies: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Honor {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub associated_with: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub email: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "experience": [{
                "title": "Engineer",
                "company": "Acme",
                "companyUrl": "https://acme.example",
                "period": "June 2011 - August 2012",
                "location": "Remote",
                "bullets": ["Shipped 3 releases"]
            }],
            "honors": [{
                "title": "Award",
                "issuer": "Org",
                "date": "May 2020",
                "associatedWith": "Acme"
            }]
        }"#;
        let cv: CvData = serde_json::from_str(json).unwrap();
        assert_eq!(cv.experience.len(), 1);
        assert_eq!(
            cv.experience[0].company_url.as_deref(),
            Some("https://acme.example")
        );
        assert_eq!(cv.honors[0].associated_with.as_deref(), Some("Acme"));
        assert!(cv.profile.is_none());
        assert!(cv.projects.is_empty());
    }

    #[test]
    fn test_project_description_string_or_list() {
        let one: Project =
            serde_json::from_str(r#"{"title": "A", "description": "single"}"#).unwrap();
        assert_eq!(one.description.as_slice(), ["single".to_string()]);

        let many: Project =
            serde_json::from_str(r#"{"title": "B", "description": ["x", "y"]}"#).unwrap();
        assert_eq!(many.description.as_slice().len(), 2);
    }
}
