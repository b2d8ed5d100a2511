pub mod env;
pub mod envs;
pub mod get;
pub mod show;
