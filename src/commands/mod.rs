pub mod configure;
pub mod format;
pub mod show;
pub mod update;
