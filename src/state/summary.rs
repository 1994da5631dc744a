use crate::shared::types::Summary;
use crate::state::status::ViewStatus;
use crate::utils::format::{format_count_opt, format_currency_opt, format_percent_1};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTile {
    pub label: &'static str,
    pub value: String,
    pub caption: Option<String>,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryTiles {
    /// Four pulsing placeholders.
    Loading,
    Failed(String),
    Tiles([SummaryTile; 4]),
}

impl SummaryTiles {
    pub const COUNT: usize = 4;

    /// Renders whatever the payload states; nothing is recomputed from the
    /// recommendation list.
    pub fn from_status(status: &ViewStatus<Summary>) -> Self {
        match status {
            ViewStatus::Loading => SummaryTiles::Loading,
            ViewStatus::Error(e) => SummaryTiles::Failed(e.clone()),
            ViewStatus::Loaded(s) => SummaryTiles::Tiles(tiles(s)),
        }
    }
}

fn tiles(s: &Summary) -> [SummaryTile; 4] {
    [
        SummaryTile {
            label: "Total Resources",
            value: format_count_opt(s.total_resources),
            caption: None,
            accent: "text-white",
        },
        SummaryTile {
            label: "Monthly Cost",
            value: format_currency_opt(s.total_monthly_cost),
            caption: None,
            accent: "text-red-400",
        },
        SummaryTile {
            label: "Potential Savings",
            value: format_currency_opt(s.total_potential_savings),
            caption: s.savings_percentage.map(|p| format!("{} of spend", format_percent_1(p))),
            accent: "text-green-400",
        },
        SummaryTile {
            label: "Opportunities",
            value: format_count_opt(s.open_recommendations),
            caption: None,
            accent: "text-purple-400",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format::PLACEHOLDER;

    #[test]
    fn loading_yields_placeholders_error_yields_no_tiles() {
        assert_eq!(SummaryTiles::from_status(&ViewStatus::Loading), SummaryTiles::Loading);
        assert_eq!(
            SummaryTiles::from_status(&ViewStatus::Error("down".into())),
            SummaryTiles::Failed("down".into())
        );
    }

    #[test]
    fn currency_tiles_equal_fixed2_of_raw_fields() {
        let s = Summary {
            total_resources: Some(12),
            total_monthly_cost: Some(1523.625),
            total_potential_savings: Some(310.1),
            open_recommendations: Some(2),
            savings_percentage: Some(20.36),
        };
        let SummaryTiles::Tiles(t) = SummaryTiles::from_status(&ViewStatus::Loaded(s)) else {
            panic!("expected tiles");
        };
        assert_eq!(t[0].value, "12");
        assert_eq!(t[1].value, "$1523.63");
        assert_eq!(t[2].value, "$310.10");
        assert_eq!(t[2].caption.as_deref(), Some("20.4% of spend"));
        assert_eq!(t[3].value, "2");
    }

    #[test]
    fn absent_fields_fall_back_to_placeholder() {
        let SummaryTiles::Tiles(t) =
            SummaryTiles::from_status(&ViewStatus::Loaded(Summary::default()))
        else {
            panic!("expected tiles");
        };
        assert!(t.iter().all(|tile| tile.value == PLACEHOLDER));
        assert!(t[2].caption.is_none());
    }
}
