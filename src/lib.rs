pub mod relay;
pub mod utils;
pub mod web;

use once_cell::sync::Lazy;

pub const FUNCTION_NAME: &str = "touchnet-salesforce-default";

// downstream Apex REST service
pub const RELAY_HOST: &str = "salesforce-site-domain.my.site.com";
pub const RELAY_PORT: u16 = 443;
pub const RELAY_PATH: &str = "/services/apexrest/upaypaymentreceive";

pub static ENDPOINT_URL: Lazy<String> =
    Lazy::new(|| format!("https://{}:{}{}", RELAY_HOST, RELAY_PORT, RELAY_PATH));

pub const GIT_HASH: &str = env!("GIT_HASH");
