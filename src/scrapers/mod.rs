pub mod browser;
pub mod extract;

pub use browser::StoreMapScraper;
pub use extract::{parse_region_page, RegionPage};
