//! Localized Markdown templates

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Languages with a built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ja,
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            other => Err(Error::UnknownLanguage {
                lang: other.to_string(),
            }),
        }
    }
}

/// Text of a Markdown report.
///
/// `success` and `failure` may contain `{missing_count}` and
/// `{dangling_count}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub success: String,
    pub failure: String,
    pub header_status: String,
    pub header_file_path: String,
    pub status_missing: String,
    pub status_dangling: String,
}

impl Template {
    /// Built-in template for `lang`.
    pub fn builtin(lang: Lang) -> Self {
        let fields = match lang {
            Lang::En => [
                "No missing or dangling .meta files found.",
                "Found {missing_count} missing and {dangling_count} dangling .meta files. Please commit the missing ones and remove the dangling ones.",
                "Status",
                "File",
                "Not committed",
                "Not removed",
            ],
            Lang::Ja => [
                "不足している .meta ファイルや不要な .meta ファイルはありません。",
                "コミットされていない .meta ファイルが {missing_count} 件、削除されていない .meta ファイルが {dangling_count} 件あります。修正してください。",
                "状態",
                "ファイル",
                "コミットされていない",
                "削除されていない",
            ],
        };
        let [success, failure, header_status, header_file_path, status_missing, status_dangling] =
            fields.map(String::from);
        Self {
            success,
            failure,
            header_status,
            header_file_path,
            status_missing,
            status_dangling,
        }
    }

    /// Read a custom template from a JSON file and validate it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = meta_fs::io::read_text(path)?;
        let template: Self = serde_json::from_str(&content).map_err(|e| Error::TemplateParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        template.validate()?;
        tracing::debug!(path = %path.display(), "Loaded custom template");
        Ok(template)
    }

    /// Fail on the first empty field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("success", &self.success),
            ("failure", &self.failure),
            ("header_status", &self.header_status),
            ("header_file_path", &self.header_file_path),
            ("status_missing", &self.status_missing),
            ("status_dangling", &self.status_dangling),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(Error::EmptyTemplateField { field: *field }),
            None => Ok(()),
        }
    }
}
