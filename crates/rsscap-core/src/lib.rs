pub mod config;
pub mod logging;

pub mod capture;
pub mod checksum;
pub mod feed_xml;
pub mod fetch_feed;
pub mod notify;
pub mod run;
pub mod safe_path;
pub mod targets;
