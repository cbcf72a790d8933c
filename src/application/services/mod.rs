pub mod rotation;
pub mod snapshots;
pub mod update;
