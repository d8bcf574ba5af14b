pub mod assets;
pub mod health;

pub use assets::{create_asset, delete_asset, list_assets, seed_assets, update_asset};
pub use health::{diagnostics, root};
