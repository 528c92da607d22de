use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name shown when the data source cannot be read or parsed.
pub const MISSING_NAME: &str = "Missing resume.json";

/// Root of the resume JSON document.
///
/// Every field is optional. A field that is absent, `null`, or of the wrong
/// shape deserializes to its default instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub contact: Contact,
    #[serde(deserialize_with = "lenient_seq")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient_seq")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "lenient_seq")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient")]
    pub skills: SkillSet,
}

impl ResumeDocument {
    /// Document substituted when loading fails: only `name` is set.
    pub fn fallback() -> Self {
        ResumeDocument {
            name: MISSING_NAME.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient")]
    pub institution: String,
    #[serde(deserialize_with = "lenient")]
    pub location: String,
    #[serde(deserialize_with = "lenient")]
    pub degree: String,
    #[serde(deserialize_with = "lenient")]
    pub graduation_date: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub concentration: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub company: String,
    #[serde(deserialize_with = "lenient")]
    pub location: String,
    #[serde(deserialize_with = "lenient")]
    pub dates: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub achievements: Vec<String>,
}

/// A portfolio project. `tags` drive the tag filter; `name`, `tech` and
/// `achievements` are searchable text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub dates: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub repo: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub demo: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub embed_url: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub tech: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub achievements: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub media: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    #[serde(deserialize_with = "lenient_seq")]
    pub programming_languages: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub databases: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub web_software: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub tools_platforms: Vec<String>,
}

impl SkillSet {
    /// Labeled skill groups in display order, skipping empty ones.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Programming Languages", self.programming_languages.as_slice()),
            ("Databases", self.databases.as_slice()),
            ("Web & Software", self.web_software.as_slice()),
            ("Tools & Platforms", self.tools_platforms.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }
}

/// Deserializes `T`, falling back to `T::default()` when the value has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserializes a sequence element by element, dropping elements of the wrong
/// shape. Anything other than an array yields an empty vec.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
