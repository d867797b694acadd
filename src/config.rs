//! Shell configuration.
//!
//! A [`ShellConfig`] is the serializable form of a [`ShellLayout`]. Every
//! field has a default, so an empty JSON object describes the stock shell:
//!
//! ```json
//! {
//!   "breakpoints": { "sm": 576, "md": 768, "lg": 992, "xl": 1200, "xxl": 1400 },
//!   "aside_above": "lg",
//!   "templates": {
//!     "base": { "areas": "\"nav\" \"main\"" },
//!     "lg": { "areas": "\"nav nav\" \"aside main\"" }
//!   },
//!   "aside_fill": "gold",
//!   "main_fill": "coral",
//!   "nav_height": 60
//! }
//! ```

use std::{fs, path::Path};

use peniko::{
    Color,
    color::{Srgb, parse_color},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    app::{AREA_ASIDE, AREA_MAIN, AREA_NAV, ShellLayout},
    error::{Result, ShellError},
    grid_template::{GridTemplate, TrackSize},
    responsive::{GridBreakpoints, ScreenSizeBp},
    viewport::BreakpointValues,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    pub areas: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<TrackSize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<TrackSize>>,
}

impl TemplateConfig {
    pub fn new(areas: impl Into<String>) -> Self {
        Self {
            areas: areas.into(),
            columns: None,
            rows: None,
        }
    }

    fn template(self) -> Result<GridTemplate> {
        let mut template = GridTemplate::parse(&self.areas)?;
        if let Some(columns) = self.columns {
            template = template.with_columns(columns)?;
        }
        if let Some(rows) = self.rows {
            template = template.with_rows(rows)?;
        }
        Ok(template)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub breakpoints: GridBreakpoints,
    /// The narrowest tier that shows the aside.
    pub aside_above: ScreenSizeBp,
    pub templates: BreakpointValues<TemplateConfig>,
    pub aside_fill: String,
    pub main_fill: String,
    pub nav_height: f32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            breakpoints: GridBreakpoints::default(),
            aside_above: ScreenSizeBp::Lg,
            templates: BreakpointValues::new(TemplateConfig::new(r#""nav" "main""#))
                .with(ScreenSizeBp::Lg, TemplateConfig::new(r#""nav nav" "aside main""#)),
            aside_fill: "gold".to_string(),
            main_fill: "coral".to_string(),
            nav_height: 60.0,
        }
    }
}

fn color(value: &str) -> Result<Color> {
    parse_color(value)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|err| ShellError::InvalidColor {
            value: value.to_string(),
            reason: format!("{err:?}"),
        })
}

impl ShellConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading shell configuration");
        let json = fs::read_to_string(path).map_err(|source| ShellError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout().map(|_| ())
    }

    /// Resolve the configuration into a checked layout.
    ///
    /// Besides parsing each piece, this checks that every tier's template has
    /// the nav and main areas, and that the aside area appears exactly in the
    /// tiers at or above `aside_above`. That keeps the template and the aside's
    /// visibility on the same breakpoint definition.
    pub fn layout(&self) -> Result<ShellLayout> {
        self.breakpoints.validate()?;
        if !self.nav_height.is_finite() || self.nav_height < 0.0 {
            return Err(ShellError::InvalidNavHeight(self.nav_height));
        }

        let templates = self.templates.clone().try_map(TemplateConfig::template)?;
        for bp in ScreenSizeBp::ALL {
            let template = templates.resolve(bp);
            let missing = |reason: String| ShellError::InvalidTemplate {
                template: template.to_string(),
                reason,
            };
            for area in [AREA_NAV, AREA_MAIN] {
                if !template.contains_area(area) {
                    return Err(missing(format!("tier {bp} has no `{area}` area")));
                }
            }
            let wants_aside = bp >= self.aside_above;
            if template.contains_area(AREA_ASIDE) != wants_aside {
                return Err(missing(if wants_aside {
                    format!("tier {bp} shows the aside but has no `{AREA_ASIDE}` area")
                } else {
                    format!("tier {bp} hides the aside but has an `{AREA_ASIDE}` area")
                }));
            }
        }

        Ok(ShellLayout {
            breakpoints: self.breakpoints.clone(),
            aside_above: self.aside_above,
            templates,
            aside_fill: color(&self.aside_fill)?,
            main_fill: color(&self.main_fill)?,
            nav_height: self.nav_height,
        })
    }
}
