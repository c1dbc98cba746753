//! Lesson request input and validation
//!
//! A [`RequestForm`] holds the fields exactly as the user typed them.
//! [`RequestForm::validate`] turns it into a [`LessonRequest`] or a
//! [`ValidationError`] before any network call is made.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while validating a request form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Class time left empty
    #[error("Please provide a value for class time.")]
    MissingTime,

    /// Class time is not a whole number
    #[error("Time must be a valid integer number.")]
    InvalidTime(String),

    /// Topic, outcomes or age group left empty
    #[error("Please fill in all fields.")]
    MissingField(&'static str),

    /// Unknown language or output type name
    #[error("Unknown {kind}: {value}")]
    UnknownChoice {
        /// What was being chosen
        kind: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Kind of content to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Open-ended STEAM integration ideas
    #[default]
    Ideas,
    /// A 5E-model lesson plan
    LessonPlan,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Ideas => write!(f, "Ideas"),
            OutputType::LessonPlan => write!(f, "Lesson Plan"),
        }
    }
}

impl FromStr for OutputType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "ideas" => Ok(OutputType::Ideas),
            "lessonplan" | "plan" => Ok(OutputType::LessonPlan),
            _ => Err(ValidationError::UnknownChoice {
                kind: "output type",
                value: s.to_string(),
            }),
        }
    }
}

/// Output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Generated text is used as is
    #[default]
    English,
    /// Generated text is machine-translated
    Nepali,
}

impl Language {
    /// Translation target code, `None` when no translation is needed
    pub fn translation_code(self) -> Option<&'static str> {
        match self {
            Language::English => None,
            Language::Nepali => Some("ne"),
        }
    }

    /// Display label, as recorded in the history
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Nepali => "Nepali",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "nepali" | "ne" => Ok(Language::Nepali),
            _ => Err(ValidationError::UnknownChoice {
                kind: "language",
                value: s.to_string(),
            }),
        }
    }
}

/// Raw form fields
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    /// Lesson topic
    pub topic: String,
    /// Comma separated learning outcomes
    pub outcomes: String,
    /// Learner age group
    pub age_group: String,
    /// Content kind
    pub output_type: OutputType,
    /// Class time in minutes, as typed
    pub time_minutes: String,
    /// Optional location name
    pub location: String,
    /// Output language
    pub language: Language,
}

/// A validated lesson request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRequest {
    /// Lesson topic
    pub topic: String,
    /// Learning outcomes, trimmed, no empties
    pub outcomes: Vec<String>,
    /// Learner age group
    pub age_group: String,
    /// Content kind
    pub output_type: OutputType,
    /// Class time in minutes
    pub time_minutes: u32,
    /// Location name, if given
    pub location: Option<String>,
    /// Output language
    pub language: Language,
}

impl RequestForm {
    /// Validate the form
    ///
    /// Class time is checked first, then the required text fields.
    pub fn validate(&self) -> Result<LessonRequest, ValidationError> {
        let time = self.time_minutes.trim();
        if time.is_empty() {
            return Err(ValidationError::MissingTime);
        }
        let time_minutes = time
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidTime(time.to_string()))?;

        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::MissingField("topic"));
        }

        let outcomes = split_outcomes(&self.outcomes);
        if outcomes.is_empty() {
            return Err(ValidationError::MissingField("outcomes"));
        }

        let age_group = self.age_group.trim();
        if age_group.is_empty() {
            return Err(ValidationError::MissingField("age group"));
        }

        let location = Some(self.location.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        Ok(LessonRequest {
            topic: topic.to_string(),
            outcomes,
            age_group: age_group.to_string(),
            output_type: self.output_type,
            time_minutes,
            location,
            language: self.language,
        })
    }
}

/// Split a comma separated outcome list, dropping empty items
pub fn split_outcomes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RequestForm {
        RequestForm {
            topic: "Photosynthesis".to_string(),
            outcomes: "light, energy ,, plants".to_string(),
            age_group: "10-12".to_string(),
            output_type: OutputType::Ideas,
            time_minutes: " 45 ".to_string(),
            location: String::new(),
            language: Language::English,
        }
    }

    #[test]
    fn test_valid_form() {
        let req = form().validate().unwrap();
        assert_eq!(req.outcomes, vec!["light", "energy", "plants"]);
        assert_eq!(req.time_minutes, 45);
        assert_eq!(req.location, None);
    }

    #[test]
    fn test_missing_time_checked_first() {
        let mut f = form();
        f.time_minutes = String::new();
        f.topic = String::new();
        assert_eq!(f.validate(), Err(ValidationError::MissingTime));
    }

    #[test]
    fn test_non_numeric_time() {
        let mut f = form();
        f.time_minutes = "forty".to_string();
        let err = f.validate().unwrap_err();
        assert_eq!(err.to_string(), "Time must be a valid integer number.");
    }

    #[test]
    fn test_missing_fields() {
        let mut f = form();
        f.outcomes = " , ".to_string();
        assert_eq!(f.validate(), Err(ValidationError::MissingField("outcomes")));

        let mut f = form();
        f.age_group = "  ".to_string();
        let err = f.validate().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }

    #[test]
    fn test_location_kept_when_given() {
        let mut f = form();
        f.location = " Kathmandu ".to_string();
        assert_eq!(f.validate().unwrap().location.as_deref(), Some("Kathmandu"));
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("Nepali".parse::<Language>().unwrap(), Language::Nepali);
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert!("klingon".parse::<Language>().is_err());
        assert_eq!(
            "Lesson Plan".parse::<OutputType>().unwrap(),
            OutputType::LessonPlan
        );
        assert_eq!(
            "lesson-plan".parse::<OutputType>().unwrap(),
            OutputType::LessonPlan
        );
    }

    #[test]
    fn test_translation_codes() {
        assert_eq!(Language::Nepali.translation_code(), Some("ne"));
        assert_eq!(Language::English.translation_code(), None);
    }
}
