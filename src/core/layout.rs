use crate::core::{LaunchTable, PayloadRange, SiteSelection, ALL_SITES};
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_PLACEHOLDER: &str = "Select a Launch Site here";
pub const MAX_SLIDER_MARKS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: &'static str,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub title: &'static str,
    pub site_dropdown: Dropdown,
    pub payload_slider: RangeSlider,
    pub pie_chart_id: &'static str,
    pub scatter_chart_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            step: 1000.0,
        }
    }
}

impl SliderSettings {
    /// One mark per step from `min` up to and including `max`, capped at
    /// `MAX_SLIDER_MARKS`. Non-finite settings produce no marks.
    pub fn marks(&self) -> Vec<SliderMark> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite())
            || self.step <= 0.0
            || self.max < self.min
        {
            return Vec::new();
        }
        let count = ((self.max - self.min) / self.step).floor() as usize;
        (0..=count.min(MAX_SLIDER_MARKS - 1))
            .map(|i| {
                let value = self.min + self.step * i as f64;
                SliderMark {
                    value,
                    label: format!("{}", value),
                }
            })
            .collect()
    }
}

impl PageLayout {
    pub fn build(table: &LaunchTable, slider: SliderSettings) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(table.launch_sites().into_iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        // The initial range spans the data, not the slider track.
        let (lo, hi) = table.payload_bounds().unwrap_or((slider.min, slider.max));

        Self {
            title: DASHBOARD_TITLE,
            site_dropdown: Dropdown {
                id: "site-dropdown",
                options,
                value: SiteSelection::All,
                placeholder: SITE_PLACEHOLDER,
                searchable: true,
            },
            payload_slider: RangeSlider {
                id: "payload-slider",
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks: slider.marks(),
                value: PayloadRange::new(lo, hi),
            },
            pie_chart_id: "success-pie-chart",
            scatter_chart_id: "success-payload-scatter-chart",
        }
    }
}
