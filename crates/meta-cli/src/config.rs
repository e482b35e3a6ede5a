//! Run configuration
//!
//! A run can be described by a configuration file whose fields mirror the
//! inputs of the CI action. Command-line flags are merged on top of it.

use std::path::{Path, PathBuf};

use meta_check::{DeclaredTargetType, Glob};
use meta_fs::ConfigStore;
use meta_report::{Lang, Template};
use serde::{Deserialize, Deserializer};

use crate::cli::ScanArgs;
use crate::error::{CliError, Result};

/// Contents of a run configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    #[serde(deserialize_with = "empty_as_none")]
    pub target_path: Option<PathBuf>,
    pub target_type: Option<DeclaredTargetType>,
    #[serde(deserialize_with = "stringly_bool")]
    pub ignore_dangling: bool,
    #[serde(deserialize_with = "stringly_bool")]
    pub ignore_case: bool,
    #[serde(deserialize_with = "stringly_bool")]
    pub ignore_submodules_and_nested: bool,
    #[serde(deserialize_with = "empty_as_none")]
    pub ignored_file_path: Option<PathBuf>,
    #[serde(deserialize_with = "stringly_bool")]
    pub enable_autofix: bool,
    #[serde(deserialize_with = "glob_list")]
    pub autofix_globs: Vec<String>,
    #[serde(deserialize_with = "stringly_bool")]
    pub enable_junit: bool,
    #[serde(deserialize_with = "empty_as_none")]
    pub junit_xml_path: Option<PathBuf>,
    #[serde(deserialize_with = "stringly_bool")]
    pub enable_pr_comment: bool,
    #[serde(deserialize_with = "empty_as_none")]
    pub pr_comment_lang: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub pr_comment_tmpl_file: Option<PathBuf>,
}

/// Accepts `true`, `false`, `"true"` and `"false"`.
fn stringly_bool<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(value) => Ok(value),
        Raw::Str(s) => match s.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected \"true\" or \"false\", got {other:?}"
            ))),
        },
    }
}

/// Reads an empty string as an unset value.
fn empty_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()).map(T::from))
}

/// Accepts a list of globs or a single comma-separated string.
fn glob_list<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Joined(String),
    }

    let items = match Raw::deserialize(deserializer)? {
        Raw::List(items) => items,
        Raw::Joined(joined) => joined.split(',').map(str::to_string).collect(),
    };
    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

impl RunConfig {
    /// Load a configuration file, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config: Self = ConfigStore::new().load(path)?;
                tracing::debug!(path = %path.display(), "Loaded run configuration");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Merge scan flags over this configuration.
    ///
    /// Flags win for values; a boolean is on if either source turns it on.
    pub fn scan_settings(&self, args: &ScanArgs) -> Result<ScanSettings> {
        let target_type = match &args.target_type {
            Some(raw) => raw.parse::<DeclaredTargetType>()?,
            None => self.target_type.unwrap_or_default(),
        };
        Ok(ScanSettings {
            root: args
                .root
                .clone()
                .or_else(|| self.target_path.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            target_type,
            ignore_case: args.ignore_case || self.ignore_case,
            ignore_dangling: args.ignore_dangling || self.ignore_dangling,
            ignore_submodules_and_nested: args.ignore_submodules_and_nested
                || self.ignore_submodules_and_nested,
            ignore_file: args
                .ignore_file
                .clone()
                .or_else(|| self.ignored_file_path.clone()),
        })
    }

    /// Where to write JUnit XML, if anywhere.
    pub fn junit_path(&self, flag: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = flag {
            return Ok(Some(path.to_path_buf()));
        }
        if !self.enable_junit {
            return Ok(None);
        }
        match &self.junit_xml_path {
            Some(path) => Ok(Some(path.clone())),
            None => Err(CliError::user(
                "enable_junit is set but junit_xml_path is missing",
            )),
        }
    }

    /// The Markdown template to render with, if Markdown output is on.
    pub fn markdown_template(
        &self,
        enabled: bool,
        lang: Option<&str>,
        template_file: Option<&Path>,
    ) -> Result<Option<Template>> {
        if !enabled && !self.enable_pr_comment {
            return Ok(None);
        }
        let template_file = template_file.or(self.pr_comment_tmpl_file.as_deref());
        let template = match template_file {
            Some(path) => Template::from_file(path)?,
            None => {
                let lang: Lang = lang
                    .or(self.pr_comment_lang.as_deref())
                    .unwrap_or_default()
                    .parse()?;
                Template::builtin(lang)
            }
        };
        Ok(Some(template))
    }

    /// Allow-list for a fix run: flag globs followed by configured ones.
    pub fn allowed_globs(&self, flags: &[String]) -> Result<Vec<Glob>> {
        let globs = flags
            .iter()
            .chain(&self.autofix_globs)
            .map(|pattern| Glob::new(pattern))
            .collect::<meta_check::Result<Vec<_>>>()?;
        Ok(globs)
    }
}

/// Fully resolved scan options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub root: PathBuf,
    pub target_type: DeclaredTargetType,
    pub ignore_case: bool,
    pub ignore_dangling: bool,
    pub ignore_submodules_and_nested: bool,
    pub ignore_file: Option<PathBuf>,
}
