pub mod navigation;
pub mod site_urls;
