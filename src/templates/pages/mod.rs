pub mod bonuses;
pub mod jobs;
pub mod notifications;
pub mod referrals;
pub mod track;

pub use bonuses::bonuses_page;
pub use jobs::jobs_page;
pub use notifications::notification_badge;
pub use referrals::referrals_page;
pub use track::track_page;
