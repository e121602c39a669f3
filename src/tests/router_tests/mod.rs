mod bonus_tests;
mod job_tests;
mod notification_tests;
mod referral_tests;
