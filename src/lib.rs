pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod images;
pub mod logging;
pub mod render;
pub mod view;

pub mod util {
    pub mod env;
}

pub use catalog::product::Product;
pub use catalog::repository::CatalogRepository;
pub use catalog::store::CatalogStore;
pub use config::SiteConfig;
pub use view::ViewState;
