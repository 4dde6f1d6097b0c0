//! Read-only summary shown on the Review step.
//!
//! Sections depend on the active role: health details only for roles that
//! fill them, and a role section titled after the role.

use serde::Serialize;
use std::fmt;

use crate::draft::{Draft, TagSet};
use crate::{FieldName, Role};

const MASK: &str = "••••••";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSection {
    pub title: String,
    pub entries: Vec<ReviewEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub sections: Vec<ReviewSection>,
}

impl ReviewSummary {
    pub fn build(draft: &Draft) -> Self {
        let mut sections = Vec::new();
        let Some(role) = draft.role() else {
            return Self { sections };
        };

        sections.push(ReviewSection {
            title: "Role".to_string(),
            entries: vec![entry(FieldName::Role, role.label().to_string())],
        });

        let mut basic: Vec<ReviewEntry> = [
            FieldName::Name,
            FieldName::Gender,
            FieldName::DateOfBirth,
            FieldName::NationalId,
            FieldName::Mobile,
            FieldName::Email,
            FieldName::NativeRegion,
            FieldName::Address,
            FieldName::District,
            FieldName::PostalCode,
        ]
        .into_iter()
        .filter_map(|field| text_entry(draft, field))
        .collect();
        if let Some(photo) = draft.photo() {
            basic.push(entry(
                FieldName::Photo,
                format!("{} ({} KB)", photo.file_name, photo.size_bytes().div_ceil(1024)),
            ));
        }
        sections.push(ReviewSection {
            title: "Basic information".to_string(),
            entries: basic,
        });

        if role.requires_health_details() {
            let health = draft.health();
            let mut entries: Vec<ReviewEntry> =
                [FieldName::BloodGroup, FieldName::Height, FieldName::Weight]
                    .into_iter()
                    .filter_map(|field| text_entry(draft, field))
                    .collect();
            entries.push(entry(
                FieldName::HasDisability,
                if health.has_disability { "Yes" } else { "No" }.to_string(),
            ));
            entries.extend(tag_entry(FieldName::ChronicConditions, &health.chronic_conditions));
            entries.extend(tag_entry(FieldName::Vaccinations, &health.vaccinations));
            entries.extend(text_entry(draft, FieldName::PriorDiseases));
            sections.push(ReviewSection {
                title: "Health details".to_string(),
                entries,
            });
        }

        if let Some(profile) = draft.profile() {
            let entries: Vec<ReviewEntry> = profile
                .fields()
                .iter()
                .filter_map(|field| text_entry(draft, *field))
                .collect();
            if !entries.is_empty() {
                sections.push(ReviewSection {
                    title: role_section_title(role).to_string(),
                    entries,
                });
            }
        }

        sections.push(ReviewSection {
            title: "Account".to_string(),
            entries: vec![entry(
                FieldName::Password,
                if draft.credentials().password.is_empty() {
                    String::new()
                } else {
                    MASK.to_string()
                },
            )],
        });

        Self { sections }
    }
}

fn role_section_title(role: Role) -> &'static str {
    match role {
        Role::Worker => "Employment details",
        Role::Doctor => "Professional details",
        Role::Patient => "Patient details",
        Role::Employer => "Company details",
        Role::KioskOperator => "Kiosk center details",
    }
}

fn entry(field: FieldName, value: String) -> ReviewEntry {
    ReviewEntry {
        label: field.label(),
        value,
    }
}

fn text_entry(draft: &Draft, field: FieldName) -> Option<ReviewEntry> {
    let value = draft.text_value(field)?.trim();
    (!value.is_empty()).then(|| entry(field, value.to_string()))
}

fn tag_entry(field: FieldName, tags: &TagSet) -> Option<ReviewEntry> {
    (!tags.is_empty()).then(|| entry(field, tags.iter().collect::<Vec<_>>().join(", ")))
}

impl fmt::Display for ReviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "== {} ==", section.title)?;
            for entry in &section.entries {
                writeln!(f, "  {:<22} {}", format!("{}:", entry.label), entry.value)?;
            }
        }
        Ok(())
    }
}
