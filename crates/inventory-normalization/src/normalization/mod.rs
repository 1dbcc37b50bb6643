//! Per-field normalizers.

pub mod device;
pub mod ip;
pub mod mac;
pub mod names;
pub mod owner;
pub mod site;

pub use device::{DEVICE_HINT_RULES, DeviceClassification, DeviceHintRule, classify_device};
pub use ip::{
    Ipv4Class, IpNormalization, address_text, classify_ipv4, default_subnet, normalize_ip,
    reverse_pointer,
};
pub use mac::{MacNormalization, normalize_mac};
pub use names::{NameNormalization, is_valid_fqdn, is_valid_label, normalize_names};
pub use owner::{OwnerParse, parse_owner};
pub use site::{SITE_ALIASES, SiteNormalization, normalize_site};
