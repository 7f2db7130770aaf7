use crate::core::charts::{pie_chart, scatter_chart, Figure};
use crate::core::filter::{filter_by_site, filter_records};
use crate::core::{LaunchTable, PayloadRange, SiteSelection};
use crate::utils::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    SuccessPayloadScatterChart,
}

impl InputId {
    pub const ALL: [InputId; 2] = [InputId::SiteDropdown, InputId::PayloadSlider];

    pub fn as_str(self) -> &'static str {
        match self {
            InputId::SiteDropdown => "site-dropdown",
            InputId::PayloadSlider => "payload-slider",
        }
    }

    pub fn parse(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == id)
            .ok_or_else(|| DashError::UnknownComponentError { id: id.to_string() })
    }
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every input control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

pub type ComputeFn = fn(&LaunchTable, &ControlState) -> Figure;

pub struct Callback {
    pub output: OutputId,
    pub inputs: Vec<InputId>,
    compute: ComputeFn,
}

impl Callback {
    pub fn depends_on(&self, input: InputId) -> bool {
        self.inputs.contains(&input)
    }

    pub fn compute(&self, table: &LaunchTable, state: &ControlState) -> Figure {
        (self.compute)(table, state)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

/// The pie chart only follows the site dropdown; the payload slider does not
/// narrow it.
pub fn site_pie_callback(table: &LaunchTable, state: &ControlState) -> Figure {
    let rows = filter_by_site(table, &state.site);
    pie_chart(&state.site, &rows)
}

pub fn payload_scatter_callback(table: &LaunchTable, state: &ControlState) -> Figure {
    let rows = filter_records(table, &state.site, &state.payload_range);
    scatter_chart(&state.site, &rows)
}

/// Declarative wiring from input controls to chart outputs. Each output has
/// exactly one callback.
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the dashboard's two chart callbacks.
    pub fn with_default_callbacks() -> Self {
        let mut registry = Self::new();
        registry.callbacks.push(Callback {
            output: OutputId::SuccessPieChart,
            inputs: vec![InputId::SiteDropdown],
            compute: site_pie_callback,
        });
        registry.callbacks.push(Callback {
            output: OutputId::SuccessPayloadScatterChart,
            inputs: vec![InputId::SiteDropdown, InputId::PayloadSlider],
            compute: payload_scatter_callback,
        });
        registry
    }

    pub fn register(&mut self, output: OutputId, inputs: Vec<InputId>, compute: ComputeFn) -> Result<()> {
        if self.callbacks.iter().any(|c| c.output == output) {
            return Err(DashError::ConfigError {
                message: format!("output '{}' already has a callback", output),
            });
        }
        if inputs.is_empty() {
            return Err(DashError::ConfigError {
                message: format!("callback for '{}' has no inputs", output),
            });
        }
        self.callbacks.push(Callback {
            output,
            inputs,
            compute,
        });
        Ok(())
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    pub fn outputs_for(&self, input: InputId) -> Vec<OutputId> {
        self.callbacks
            .iter()
            .filter(|c| c.depends_on(input))
            .map(|c| c.output)
            .collect()
    }

    /// Recomputes the outputs bound to `changed`, in registration order.
    pub fn dispatch(
        &self,
        table: &LaunchTable,
        changed: InputId,
        state: &ControlState,
    ) -> Vec<(OutputId, Figure)> {
        tracing::debug!(input = %changed, site = %state.site, "Dispatching callbacks");
        self.callbacks
            .iter()
            .filter(|c| c.depends_on(changed))
            .map(|c| (c.output, c.compute(table, state)))
            .collect()
    }

    pub fn render_all(&self, table: &LaunchTable, state: &ControlState) -> Vec<(OutputId, Figure)> {
        self.callbacks
            .iter()
            .map(|c| (c.output, c.compute(table, state)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LaunchRecord, Outcome};

    fn table() -> LaunchTable {
        LaunchTable::new(vec![
            LaunchRecord {
                launch_site: "CCAFS LC-40".to_string(),
                payload_mass_kg: 500.0,
                booster_version_category: "v1.1".to_string(),
                outcome: Outcome::Failure,
            },
            LaunchRecord {
                launch_site: "KSC LC-39A".to_string(),
                payload_mass_kg: 6000.0,
                booster_version_category: "FT".to_string(),
                outcome: Outcome::Success,
            },
        ])
    }

    fn state(site: SiteSelection, min: f64, max: f64) -> ControlState {
        ControlState {
            site,
            payload_range: PayloadRange::new(min, max),
        }
    }

    #[test]
    fn test_slider_change_only_recomputes_scatter() {
        let registry = CallbackRegistry::with_default_callbacks();
        let outputs = registry.dispatch(&table(), InputId::PayloadSlider, &state(SiteSelection::All, 0.0, 1000.0));
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].0, OutputId::SuccessPayloadScatterChart);
        assert_eq!(outputs[0].1.point_count(), 1);
    }

    #[test]
    fn test_site_change_recomputes_both_charts() {
        let registry = CallbackRegistry::with_default_callbacks();
        let outputs = registry.dispatch(
            &table(),
            InputId::SiteDropdown,
            &state(SiteSelection::Site("KSC LC-39A".to_string()), 0.0, 10000.0),
        );
        let ids: Vec<OutputId> = outputs.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]);
    }

    #[test]
    fn test_pie_ignores_payload_range() {
        let registry = CallbackRegistry::with_default_callbacks();
        let outputs = registry.render_all(&table(), &state(SiteSelection::All, 0.0, 100.0));
        let (_, pie) = &outputs[0];
        let (_, scatter) = &outputs[1];
        assert_eq!(pie.slice_total(), 2);
        assert_eq!(scatter.point_count(), 0);
    }

    #[test]
    fn test_register_rejects_duplicate_output() {
        let mut registry = CallbackRegistry::with_default_callbacks();
        let err = registry
            .register(OutputId::SuccessPieChart, vec![InputId::SiteDropdown], site_pie_callback)
            .unwrap_err();
        assert!(matches!(err, DashError::ConfigError { .. }));
    }

    #[test]
    fn test_register_rejects_callback_without_inputs() {
        let mut registry = CallbackRegistry::new();
        assert!(registry
            .register(OutputId::SuccessPieChart, vec![], site_pie_callback)
            .is_err());
        assert!(registry
            .register(OutputId::SuccessPieChart, vec![InputId::SiteDropdown], site_pie_callback)
            .is_ok());
        assert!(registry.outputs_for(InputId::PayloadSlider).is_empty());
    }

    #[test]
    fn test_input_id_parse() {
        assert_eq!(InputId::parse("payload-slider").unwrap(), InputId::PayloadSlider);
        assert!(matches!(
            InputId::parse("payload"),
            Err(DashError::UnknownComponentError { .. })
        ));
    }
}
