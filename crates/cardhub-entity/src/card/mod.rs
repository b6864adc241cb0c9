//! Contact card entities.

pub mod birthday;
pub mod model;

pub use birthday::normalize_birthday;
pub use model::{Card, CardFields, CardUpdate, NewCard};

/// Public URL prefix under which avatar files are served.
pub const AVATAR_URL_PREFIX: &str = "/static/avatars/";

/// Public URL prefix under which vCard exports are served.
pub const VCF_URL_PREFIX: &str = "/static/vcf/";
