//! Tooltip options.
//!
//! [`TooltipOptions`] is the loosely specified record callers hand in, either
//! built in code or loaded from JSON. Every field is optional; `resolve`
//! merges it over the defaults into the typed [`Options`] the controller
//! works with. `image_base` is the only field without a default.

use crate::error::{Error, Result};
use crate::widget::Gravity;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which pointer events show and hide the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    /// Show on pointer enter, hide on pointer leave.
    #[default]
    MouseEnter,
    /// Toggle on click.
    Click,
    /// Only explicit show/hide calls.
    Manual,
}

impl Trigger {
    /// Parse a trigger name. Anything unrecognized never matches an event.
    pub fn normalize(s: &str) -> Self {
        match s {
            "mouseenter" => Self::MouseEnter,
            "click" => Self::Click,
            "manual" | "none" => Self::Manual,
            other => {
                tracing::warn!("Unrecognized trigger {:?}, tooltip will only respond to explicit calls", other);
                Self::Manual
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MouseEnter => "mouseenter",
            Self::Click => "click",
            Self::Manual => "manual",
        }
    }
}

/// Caller-supplied options. Unset fields take the defaults in [`Options`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    /// Log construction and positioning details.
    pub debug: Option<bool>,
    /// Extra class added to the tooltip box.
    #[serde(alias = "className")]
    pub class_name: Option<String>,
    /// Directory the arrow images are served from.
    #[serde(alias = "imageBase")]
    pub image_base: Option<String>,
    pub content: Option<String>,
    #[serde(alias = "headerContent")]
    pub header_content: Option<String>,
    #[serde(alias = "headerClassName")]
    pub header_class_name: Option<String>,
    pub gravity: Option<String>,
    pub trigger: Option<String>,
    #[serde(alias = "roundedCorners")]
    pub rounded_corners: Option<bool>,
    /// Signed pixels along the pointing axis.
    pub offset: Option<i32>,
    pub enabled: Option<bool>,
    #[serde(alias = "autoShow")]
    pub auto_show: Option<bool>,
    /// Fixed outer width of the tooltip box.
    pub width: Option<f32>,
    /// Fixed outer height of the tooltip box.
    pub height: Option<f32>,
}

impl TooltipOptions {
    pub fn new(image_base: impl Into<String>) -> Self {
        Self {
            image_base: Some(image_base.into()),
            ..Self::default()
        }
    }

    /// Load options from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    #[must_use]
    pub fn gravity(mut self, gravity: &str) -> Self {
        self.gravity = Some(gravity.to_string());
        self
    }

    #[must_use]
    pub fn trigger(mut self, trigger: &str) -> Self {
        self.trigger = Some(trigger.to_string());
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: i32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn auto_show(mut self, auto_show: bool) -> Self {
        self.auto_show = Some(auto_show);
        self
    }

    #[must_use]
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    #[must_use]
    pub fn header(mut self, header: &str) -> Self {
        self.header_content = Some(header.to_string());
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Merge over the defaults.
    pub fn resolve(&self) -> Result<Options> {
        let image_base = self
            .image_base
            .clone()
            .ok_or(Error::MissingRequiredOption("image_base"))?;
        Ok(Options {
            debug: self.debug.unwrap_or(false),
            class_name: self.class_name.clone(),
            image_base,
            content: self.content.clone(),
            header_content: self.header_content.clone(),
            header_class_name: self.header_class_name.clone(),
            gravity: self.gravity.as_deref().map(Gravity::normalize).unwrap_or_default(),
            trigger: self.trigger.as_deref().map(Trigger::normalize).unwrap_or_default(),
            rounded_corners: self.rounded_corners.unwrap_or(true),
            offset: self.offset.unwrap_or(0),
            enabled: self.enabled.unwrap_or(true),
            auto_show: self.auto_show.unwrap_or(false),
            width: self.width,
            height: self.height,
        })
    }
}

/// Resolved options of one tooltip instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub debug: bool,
    pub class_name: Option<String>,
    pub image_base: String,
    pub content: Option<String>,
    pub header_content: Option<String>,
    pub header_class_name: Option<String>,
    pub gravity: Gravity,
    pub trigger: Trigger,
    pub rounded_corners: bool,
    pub offset: i32,
    pub enabled: bool,
    pub auto_show: bool,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let options = TooltipOptions::new("/img").resolve().unwrap();
        assert_eq!(options.image_base, "/img");
        assert_eq!(options.gravity, Gravity::N);
        assert_eq!(options.trigger, Trigger::MouseEnter);
        assert_eq!(options.offset, 0);
        assert!(options.enabled);
        assert!(!options.auto_show);
        assert!(options.rounded_corners);
        assert!(!options.debug);
        assert_eq!(options.class_name, None);
    }

    #[test]
    fn test_missing_image_base() {
        let err = TooltipOptions::default().gravity("s").resolve().unwrap_err();
        assert!(matches!(err, Error::MissingRequiredOption("image_base")));
    }

    #[test]
    fn test_invalid_values_normalize() {
        let options = TooltipOptions::new("/img")
            .gravity("xyz")
            .trigger("hover")
            .resolve()
            .unwrap();
        assert_eq!(options.gravity, Gravity::N);
        assert_eq!(options.trigger, Trigger::Manual);
    }

    #[test]
    fn test_parse_json_with_camel_case() {
        let json = r#"{
            "imageBase": "/assets",
            "gravity": "ws",
            "trigger": "click",
            "offset": -4,
            "autoShow": true,
            "roundedCorners": false,
            "headerContent": "Title"
        }"#;
        let raw: TooltipOptions = serde_json::from_str(json).unwrap();
        let options = raw.resolve().unwrap();
        assert_eq!(options.image_base, "/assets");
        assert_eq!(options.gravity, Gravity::WS);
        assert_eq!(options.trigger, Trigger::Click);
        assert_eq!(options.offset, -4);
        assert!(options.auto_show);
        assert!(!options.rounded_corners);
        assert_eq!(options.header_content.as_deref(), Some("Title"));
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tooltip.json");
        fs::write(&path, r#"{"image_base": "/img", "gravity": "e", "width": 80}"#).unwrap();

        let options = TooltipOptions::from_path(&path).unwrap().resolve().unwrap();
        assert_eq!(options.gravity, Gravity::E);
        assert_eq!(options.width, Some(80.0));
        assert_eq!(options.height, None);
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempdir().unwrap();
        let missing = TooltipOptions::from_path(&dir.path().join("absent.json"));
        assert!(matches!(missing, Err(Error::Io(_))));

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(TooltipOptions::from_path(&path), Err(Error::Json(_))));
    }
}
