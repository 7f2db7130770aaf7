use crate::core::callbacks::{CallbackRegistry, ControlState, InputId, OutputId};
use crate::core::charts::Figure;
use crate::core::dataset::load_launch_table;
use crate::core::layout::{PageLayout, SliderSettings};
use crate::core::{ConfigProvider, LaunchTable, SiteSelection, Storage};
use crate::utils::error::Result;
use std::sync::Arc;

/// The loaded dataset plus the layout and callbacks that render it.
#[derive(Debug)]
pub struct Dashboard {
    table: Arc<LaunchTable>,
    layout: PageLayout,
    callbacks: CallbackRegistry,
}

impl Dashboard {
    pub fn new(table: LaunchTable, slider: SliderSettings) -> Self {
        let layout = PageLayout::build(&table, slider);
        Self {
            table: Arc::new(table),
            layout,
            callbacks: CallbackRegistry::with_default_callbacks(),
        }
    }

    pub async fn load<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Result<Self> {
        tracing::info!("Loading launch dataset...");
        let table = load_launch_table(storage, config.data_path()).await?;

        tracing::info!("Building dashboard layout...");
        let (min, max, step) = config.slider();
        let dashboard = Self::new(table, SliderSettings { min, max, step });
        tracing::debug!(
            options = dashboard.layout.site_dropdown.options.len(),
            callbacks = dashboard.callbacks.callbacks().len(),
            "Dashboard ready"
        );

        Ok(dashboard)
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Control values the page starts with.
    pub fn initial_state(&self) -> ControlState {
        ControlState {
            site: SiteSelection::All,
            payload_range: self.layout.payload_slider.value,
        }
    }

    pub fn dispatch(&self, changed: InputId, state: &ControlState) -> Vec<(OutputId, Figure)> {
        self.callbacks.dispatch(&self.table, changed, state)
    }

    pub fn render_all(&self, state: &ControlState) -> Vec<(OutputId, Figure)> {
        self.callbacks.render_all(&self.table, state)
    }
}
