//! Answers file: a scripted set of wizard inputs.
//!
//! ```toml
//! role = "worker"
//! photo = "anu.png"          # relative to the answers file
//!
//! [fields]
//! name = "Anu Thomas"
//! mobile = "9876543210"
//! hasDisability = false
//! vaccinations = ["COVID-19", "Tetanus"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use rw_core::field::UnknownField;
use rw_core::role::UnknownRole;
use rw_core::{FieldName, FieldValue, Role};

#[derive(Debug, Error)]
pub enum AnswersError {
    #[error(transparent)]
    UnknownRole(#[from] UnknownRole),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("{field} cannot be set from the fields table")]
    NotAField { field: FieldName },

    #[error("unsupported value for {field}: {value}")]
    UnsupportedValue { field: FieldName, value: String },
}

#[derive(Debug, Deserialize)]
struct AnswersFile {
    role: Option<String>,
    photo: Option<PathBuf>,
    /// Keeps file order (`preserve_order`).
    #[serde(default)]
    fields: toml::Table,
}

/// Parsed answers, ready to feed the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    pub role: Option<Role>,
    pub photo: Option<PathBuf>,
    /// Field updates in file order; tag lists expand to one checked tag each.
    pub entries: Vec<(FieldName, FieldValue)>,
}

impl Answers {
    /// Parse answers text. Relative photo paths are resolved against `base_dir`.
    pub fn parse(text: &str, base_dir: &Path) -> anyhow::Result<Self> {
        let file: AnswersFile = toml::from_str(text).context("Failed to parse answers file")?;

        let role = file.role.as_deref().map(str::parse::<Role>).transpose()?;
        let photo = file.photo.map(|path| {
            if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            }
        });

        let mut entries = Vec::new();
        for (key, value) in file.fields {
            let field: FieldName = key.parse().map_err(AnswersError::from)?;
            if matches!(field, FieldName::Role | FieldName::Photo) {
                return Err(AnswersError::NotAField { field }.into());
            }
            entries.extend(field_values(field, value)?);
        }

        Ok(Self {
            role,
            photo,
            entries,
        })
    }
}

fn field_values(field: FieldName, value: toml::Value) -> Result<Vec<(FieldName, FieldValue)>, AnswersError> {
    let unsupported = |value: &toml::Value| AnswersError::UnsupportedValue {
        field,
        value: value.to_string(),
    };
    let values = match value {
        toml::Value::String(text) => vec![FieldValue::Text(text)],
        toml::Value::Integer(n) => vec![FieldValue::Text(n.to_string())],
        toml::Value::Float(n) => vec![FieldValue::Text(n.to_string())],
        toml::Value::Boolean(flag) => vec![FieldValue::Flag(flag)],
        toml::Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(FieldValue::checked)
                    .ok_or_else(|| unsupported(item))
            })
            .collect::<Result<_, _>>()?,
        other => return Err(unsupported(&other)),
    };
    Ok(values.into_iter().map(|value| (field, value)).collect())
}

/// Read and parse an answers file.
pub async fn load_answers(path: &Path) -> anyhow::Result<Answers> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Answers::parse(&text, base_dir).with_context(|| format!("Invalid answers file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_role_fields_flags_and_tags() {
        let answers = Answers::parse(
            r#"
                role = "patient"
                photo = "me.png"

                [fields]
                name = "Ravi"
                height = 172
                hasDisability = true
                chronicConditions = ["Asthma", "Diabetes"]
            "#,
            Path::new("/data"),
        )
        .unwrap();

        assert_eq!(answers.role, Some(Role::Patient));
        assert_eq!(answers.photo, Some(PathBuf::from("/data/me.png")));
        assert!(answers
            .entries
            .contains(&(FieldName::Name, FieldValue::text("Ravi"))));
        assert!(answers
            .entries
            .contains(&(FieldName::Height, FieldValue::text("172"))));
        assert!(answers
            .entries
            .contains(&(FieldName::HasDisability, FieldValue::Flag(true))));
        assert!(answers
            .entries
            .contains(&(FieldName::ChronicConditions, FieldValue::checked("Diabetes"))));
    }

    #[test]
    fn entries_follow_file_order() {
        let answers = Answers::parse(
            r#"
                role = "worker"

                [fields]
                password = "secret1"
                name = "Ravi"
                vaccinations = ["Polio", "MMR"]
                confirmPassword = "secret1"
            "#,
            Path::new("."),
        )
        .unwrap();

        let fields: Vec<_> = answers.entries.iter().map(|(field, _)| *field).collect();
        assert_eq!(
            fields,
            vec![
                FieldName::Password,
                FieldName::Name,
                FieldName::Vaccinations,
                FieldName::Vaccinations,
                FieldName::ConfirmPassword,
            ]
        );
        assert_eq!(answers.entries[2].1, FieldValue::checked("Polio"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Answers::parse("[fields]\nnickname = \"x\"\n", Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("nickname"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Answers::parse("role = \"admin\"\n", Path::new(".")).is_err());
    }

    #[test]
    fn photo_in_fields_table_is_rejected() {
        assert!(Answers::parse("[fields]\nphoto = \"me.png\"\n", Path::new(".")).is_err());
    }

    #[tokio::test]
    async fn load_resolves_photo_next_to_answers_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.toml");
        std::fs::write(&path, "role = \"doctor\"\nphoto = \"face.jpg\"\n").unwrap();

        let answers = load_answers(&path).await.unwrap();

        assert_eq!(answers.role, Some(Role::Doctor));
        assert_eq!(answers.photo, Some(dir.path().join("face.jpg")));
        assert!(answers.entries.is_empty());
    }
}
