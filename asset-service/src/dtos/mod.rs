mod assets;

pub use assets::{AssetResponse, CreateAssetRequest, UpdateAssetRequest};
