pub mod crash_screen;
pub mod nav_bar;
pub mod recommendation_card;
pub mod recommendations_panel;
pub mod resources_table;
pub mod status_card;
pub mod summary_header;
pub mod toast;

pub use crash_screen::CrashScreen;
pub use nav_bar::NavBar;
pub use recommendation_card::RecommendationCard;
pub use recommendations_panel::RecommendationsPanel;
pub use resources_table::ResourcesTable;
pub use status_card::StatusCard;
pub use summary_header::SummaryHeader;
pub use toast::Toast;
