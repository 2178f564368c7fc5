pub mod csi;
pub mod registry;
pub mod translator;
pub mod types;
