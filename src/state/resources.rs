use crate::shared::types::Resource;
use crate::state::status::ViewStatus;
use crate::utils::format::{format_currency, format_utilization, utilization_class, CELL_PLACEHOLDER};

pub const EMPTY_MESSAGE: &str = "No cloud resources found.";

/// One rendered table row, every cell already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRow {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub provider: String,
    pub cpu_text: String,
    pub cpu_class: &'static str,
    pub memory_text: String,
    pub memory_class: &'static str,
    pub storage_text: String,
    pub cost_text: String,
}

impl From<&Resource> for ResourceRow {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            kind: r.kind.clone(),
            provider: r.provider.clone(),
            cpu_text: format_utilization(r.cpu_utilization),
            cpu_class: utilization_class(r.cpu_utilization),
            memory_text: format_utilization(r.memory_utilization),
            memory_class: utilization_class(r.memory_utilization),
            storage_text: r
                .storage_gb
                .map(|gb| gb.to_string())
                .unwrap_or_else(|| CELL_PLACEHOLDER.to_string()),
            cost_text: format_currency(r.monthly_cost),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceTable {
    Loading,
    Failed(String),
    Empty,
    Rows(Vec<ResourceRow>),
}

impl ResourceTable {
    pub fn from_status(status: &ViewStatus<Vec<Resource>>) -> Self {
        match status {
            ViewStatus::Loading => ResourceTable::Loading,
            ViewStatus::Error(e) => ResourceTable::Failed(e.clone()),
            ViewStatus::Loaded(list) if list.is_empty() => ResourceTable::Empty,
            ViewStatus::Loaded(list) => {
                ResourceTable::Rows(list.iter().map(ResourceRow::from).collect())
            }
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            ResourceTable::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format::{UtilizationBand, NEUTRAL_CLASS};

    fn vm(id: i64, cpu: Option<f64>, mem: Option<f64>) -> Resource {
        Resource {
            id,
            name: format!("vm-{id}"),
            kind: "instance".into(),
            provider: "aws".into(),
            instance_type: Some("m5.large".into()),
            size: None,
            cpu_utilization: cpu,
            memory_utilization: mem,
            storage_gb: None,
            monthly_cost: 70.08,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn empty_list_renders_empty_state_and_no_rows() {
        let t = ResourceTable::from_status(&ViewStatus::Loaded(vec![]));
        assert_eq!(t, ResourceTable::Empty);
        assert_eq!(t.row_count(), 0);
        assert_eq!(EMPTY_MESSAGE, "No cloud resources found.");
    }

    #[test]
    fn loading_and_error_render_no_rows() {
        assert_eq!(ResourceTable::from_status(&ViewStatus::Loading), ResourceTable::Loading);
        let t = ResourceTable::from_status(&ViewStatus::Error("timeout".into()));
        assert_eq!(t, ResourceTable::Failed("timeout".into()));
        assert_eq!(t.row_count(), 0);
    }

    #[test]
    fn rows_carry_band_classes_and_currency() {
        let t = ResourceTable::from_status(&ViewStatus::Loaded(vec![
            vm(1, Some(12.0), Some(75.0)),
            vm(2, None, Some(93.5)),
        ]));
        let ResourceTable::Rows(rows) = t else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cpu_text, "12%");
        assert_eq!(rows[0].cpu_class, UtilizationBand::Nominal.class());
        assert_eq!(rows[0].memory_class, UtilizationBand::Elevated.class());
        assert_eq!(rows[0].cost_text, "$70.08");
        assert_eq!(rows[0].storage_text, "-");
        assert_eq!(rows[1].cpu_text, "-");
        assert_eq!(rows[1].cpu_class, NEUTRAL_CLASS);
        assert_eq!(rows[1].memory_class, UtilizationBand::Critical.class());
    }
}
