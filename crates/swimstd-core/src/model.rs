use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SwimStdError;

/// Pool format a standard applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "SCY")]
    Scy,
    #[serde(rename = "SCM")]
    Scm,
    #[serde(rename = "LCM")]
    Lcm,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Scy, Course::Scm, Course::Lcm];
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Course::Scy => write!(f, "SCY"),
            Course::Scm => write!(f, "SCM"),
            Course::Lcm => write!(f, "LCM"),
        }
    }
}

/// Qualification tier within a course, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
}

impl Tier {
    /// Tier order of the three cells in a course column triple.
    pub const ALL: [Tier; 3] = [Tier::A, Tier::BPlus, Tier::B];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::A => write!(f, "A"),
            Tier::BPlus => write!(f, "B+"),
            Tier::B => write!(f, "B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Girls,
    Boys,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Girls => write!(f, "Girls"),
            Gender::Boys => write!(f, "Boys"),
        }
    }
}

/// Qualifying times of one course. `None` means no standard is published.
///
/// Times are opaque text, e.g. "1:05.39".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTimes {
    #[serde(rename = "A")]
    pub a: Option<String>,
    #[serde(rename = "B+")]
    pub b_plus: Option<String>,
    #[serde(rename = "B")]
    pub b: Option<String>,
}

impl TierTimes {
    pub fn get(&self, tier: Tier) -> Option<&str> {
        match tier {
            Tier::A => self.a.as_deref(),
            Tier::BPlus => self.b_plus.as_deref(),
            Tier::B => self.b.as_deref(),
        }
    }

    pub fn set(&mut self, tier: Tier, time: Option<String>) {
        match tier {
            Tier::A => self.a = time,
            Tier::BPlus => self.b_plus = time,
            Tier::B => self.b = time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    #[serde(rename = "SCY")]
    pub scy: TierTimes,
    #[serde(rename = "SCM")]
    pub scm: TierTimes,
    #[serde(rename = "LCM")]
    pub lcm: TierTimes,
}

impl EventRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scy: TierTimes::default(),
            scm: TierTimes::default(),
            lcm: TierTimes::default(),
        }
    }

    pub fn course(&self, course: Course) -> &TierTimes {
        match course {
            Course::Scy => &self.scy,
            Course::Scm => &self.scm,
            Course::Lcm => &self.lcm,
        }
    }

    pub fn course_mut(&mut self, course: Course) -> &mut TierTimes {
        match course {
            Course::Scy => &mut self.scy,
            Course::Scm => &mut self.scm,
            Course::Lcm => &mut self.lcm,
        }
    }

    pub fn time(&self, course: Course, tier: Tier) -> Option<&str> {
        self.course(course).get(tier)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderBucket {
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genders {
    #[serde(rename = "Girls")]
    pub girls: GenderBucket,
    #[serde(rename = "Boys")]
    pub boys: GenderBucket,
}

impl Genders {
    pub fn get(&self, gender: Gender) -> &GenderBucket {
        match gender {
            Gender::Girls => &self.girls,
            Gender::Boys => &self.boys,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroup {
    /// Label as printed in the source, e.g. "8 & Under" or "11-12".
    pub age: String,
    pub genders: Genders,
}

impl AgeGroup {
    pub fn event_count(&self) -> usize {
        self.genders.girls.events.len()
    }
}

/// Caller-supplied provenance of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub source_url: String,
    pub generated_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub source_url: String,
    pub generated_on: NaiveDate,
    pub age_groups: Vec<AgeGroup>,
}

impl Document {
    pub fn new(meta: DocumentMeta, age_groups: Vec<AgeGroup>) -> Self {
        Self {
            title: meta.title,
            source_url: meta.source_url,
            generated_on: meta.generated_on,
            age_groups,
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, SwimStdError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
