//! Per-view style.
//!
//! Only the properties the shell needs are modelled: fill, grid placement,
//! sizing and flex direction. Every property is optional so a decorator style
//! can be layered over the style a view sets for itself.

use peniko::Color;
use taffy::style::{Dimension, FlexDirection, LengthPercentage};
use taffy::style_helpers::{length, percent};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Pct(f32),
}

impl Length {
    fn to_dimension(self) -> Dimension {
        match self {
            Length::Px(px) => length(px),
            Length::Pct(pct) => percent(pct / 100.0),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Style {
    background: Option<Color>,
    grid_area: Option<String>,
    width: Option<Length>,
    height: Option<Length>,
    flex_direction: Option<FlexDirection>,
    padding: Option<f32>,
    gap: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Place the view in the named area of its parent grid.
    pub fn grid_area(mut self, area: impl Into<String>) -> Self {
        self.grid_area = Some(area.into());
        self
    }

    pub fn width(mut self, px: f32) -> Self {
        self.width = Some(Length::Px(px));
        self
    }

    pub fn height(mut self, px: f32) -> Self {
        self.height = Some(Length::Px(px));
        self
    }

    pub fn width_pct(mut self, pct: f32) -> Self {
        self.width = Some(Length::Pct(pct));
        self
    }

    pub fn height_pct(mut self, pct: f32) -> Self {
        self.height = Some(Length::Pct(pct));
        self
    }

    pub fn width_full(self) -> Self {
        self.width_pct(100.0)
    }

    pub fn height_full(self) -> Self {
        self.height_pct(100.0)
    }

    pub fn size_full(self) -> Self {
        self.width_full().height_full()
    }

    pub fn flex_row(mut self) -> Self {
        self.flex_direction = Some(FlexDirection::Row);
        self
    }

    pub fn flex_col(mut self) -> Self {
        self.flex_direction = Some(FlexDirection::Column);
        self
    }

    pub fn padding(mut self, px: f32) -> Self {
        self.padding = Some(px);
        self
    }

    pub fn gap(mut self, px: f32) -> Self {
        self.gap = Some(px);
        self
    }

    pub fn get_background(&self) -> Option<Color> {
        self.background
    }

    pub fn get_grid_area(&self) -> Option<&str> {
        self.grid_area.as_deref()
    }

    pub fn get_width(&self) -> Option<Length> {
        self.width
    }

    pub fn get_height(&self) -> Option<Length> {
        self.height
    }

    /// Layer `over` on top of `self`; properties set in `over` win.
    pub fn apply(self, over: Style) -> Style {
        Style {
            background: over.background.or(self.background),
            grid_area: over.grid_area.or(self.grid_area),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            flex_direction: over.flex_direction.or(self.flex_direction),
            padding: over.padding.or(self.padding),
            gap: over.gap.or(self.gap),
        }
    }

    pub(crate) fn to_taffy(&self) -> taffy::style::Style {
        let mut style = taffy::style::Style::default();
        if let Some(width) = self.width {
            style.size.width = width.to_dimension();
        }
        if let Some(height) = self.height {
            style.size.height = height.to_dimension();
        }
        if let Some(direction) = self.flex_direction {
            style.flex_direction = direction;
        }
        if let Some(padding) = self.padding {
            let padding: LengthPercentage = length(padding);
            style.padding = taffy::geometry::Rect {
                left: padding,
                right: padding,
                top: padding,
                bottom: padding,
            };
        }
        if let Some(gap) = self.gap {
            let gap: LengthPercentage = length(gap);
            style.gap = taffy::geometry::Size {
                width: gap,
                height: gap,
            };
        }
        style
    }
}
