mod asset;

pub use asset::{Asset, ASSET_COLLECTION};
