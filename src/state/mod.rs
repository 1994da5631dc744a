//! Renderer-independent view models. Components hold these in signals and
//! render from them; nothing here touches the network.

pub mod health;
pub mod notice;
pub mod recommendations;
pub mod resources;
pub mod status;
pub mod summary;

pub use health::HealthState;
pub use notice::{Notice, NoticeKind, NoticeSlot, NOTICE_DISMISS_MS};
pub use recommendations::{FollowUp, ItemState, ListPhase, RecommendationBoard};
pub use resources::ResourceTable;
pub use status::ViewStatus;
pub use summary::SummaryTiles;
