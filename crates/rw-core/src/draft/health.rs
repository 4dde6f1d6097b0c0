use serde::{Deserialize, Serialize};

use crate::FieldName;

/// Ordered, duplicate-free set of checked tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Add when newly checked, remove when newly unchecked. Repeats are no-ops.
    pub fn toggle(&mut self, tag: &str, checked: bool) {
        let present = self.contains(tag);
        if checked && !present {
            self.0.push(tag.to_string());
        } else if !checked && present {
            self.0.retain(|t| t != tag);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::default();
        for tag in iter {
            set.toggle(&tag.into(), true);
        }
        set
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDetails {
    pub blood_group: String,
    pub height: String,
    pub weight: String,
    pub has_disability: bool,
    pub chronic_conditions: TagSet,
    pub vaccinations: TagSet,
    pub prior_diseases: String,
}

impl HealthDetails {
    pub(crate) fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::BloodGroup => &self.blood_group,
            FieldName::Height => &self.height,
            FieldName::Weight => &self.weight,
            FieldName::PriorDiseases => &self.prior_diseases,
            _ => return None,
        };
        Some(value)
    }

    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let value = match field {
            FieldName::BloodGroup => &mut self.blood_group,
            FieldName::Height => &mut self.height,
            FieldName::Weight => &mut self.weight,
            FieldName::PriorDiseases => &mut self.prior_diseases,
            _ => return None,
        };
        Some(value)
    }

    pub(crate) fn tags_mut(&mut self, field: FieldName) -> Option<&mut TagSet> {
        match field {
            FieldName::ChronicConditions => Some(&mut self.chronic_conditions),
            FieldName::Vaccinations => Some(&mut self.vaccinations),
            _ => None,
        }
    }

    pub(crate) fn tags(&self, field: FieldName) -> Option<&TagSet> {
        match field {
            FieldName::ChronicConditions => Some(&self.chronic_conditions),
            FieldName::Vaccinations => Some(&self.vaccinations),
            _ => None,
        }
    }
}
