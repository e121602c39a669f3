pub mod history;
pub mod progress;
pub mod referral;
pub mod status;
pub mod timeline;

pub use referral::ReferralRecord;
pub use timeline::{derive_timeline, DerivedStep, StepState, TimelineView};
