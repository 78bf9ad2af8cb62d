pub mod billing_cycle;
pub mod daily;
pub mod daylight_saving;
pub mod feed;
pub mod hour_label;
pub mod peak;
pub mod site;
pub mod summary;
