//! Theme override tables and the JSON deep merge that applies them.
//!
//! A theme is a map from element-type name to style-property overrides. It is
//! merged onto the serialized [`Options`] once at startup: objects merge key by
//! key, every other value replaces what was there.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde_json::{Value, json};

use crate::options::Options;

/// Built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// No overrides.
    #[default]
    Default,
    /// Canvas renderer with dark point outlines and red lines.
    Gui,
}

impl Theme {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Gui => "gui",
        }
    }

    /// The override table for this theme.
    #[must_use]
    pub fn overrides(self) -> Value {
        match self {
            Self::Default => json!({}),
            Self::Gui => gui(),
        }
    }

    /// Return `base` with this theme's overrides merged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged document no longer fits the `Options` shape.
    pub fn apply(self, base: &Options) -> Result<Options, serde_json::Error> {
        apply_overrides(base, &self.overrides())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "gui" => Ok(Self::Gui),
            other => Err(other.to_string()),
        }
    }
}

/// Override table of the "gui" theme.
#[must_use]
pub fn gui() -> Value {
    json!({
        "renderer": "canvas",
        "glider": {
            "fillColor": "#ffff00",
            "measureColor": "orange"
        },
        "intersection": {
            "fillColor": "#ffffff"
        },
        "line": {
            "strokeColor": "#ff0000"
        },
        "point": {
            "strokeColor": "#000000",
            "fillColor": "#cc0000"
        }
    })
}

/// Merge `overrides` into `base` in place.
pub fn deep_merge(base: &mut Value, overrides: &Value) {
    let Some(incoming) = overrides.as_object() else {
        *base = overrides.clone();
        return;
    };

    if !base.is_object() {
        *base = json!({});
    }

    if let Some(existing) = base.as_object_mut() {
        for (k, v) in incoming {
            if v.is_object() {
                if let Some(slot) = existing.get_mut(k) {
                    deep_merge(slot, v);
                    continue;
                }
            }
            existing.insert(k.clone(), v.clone());
        }
    }
}

/// Merge an arbitrary override table onto `base`.
///
/// # Errors
///
/// Returns an error if `base` fails to serialize or the merged document no
/// longer deserializes as `Options` (for example a number where a color
/// string is expected).
pub fn apply_overrides(base: &Options, overrides: &Value) -> Result<Options, serde_json::Error> {
    let mut doc = serde_json::to_value(base)?;
    deep_merge(&mut doc, overrides);
    serde_json::from_value(doc)
}
