//! Stable identifiers: tag keys and issue category keys.
//!
//! Tag keys are part of the wire contract with the issue tracker; renaming one splits every
//! aggregation that uses it.

// Device tags, always present.
pub const TAG_DEVICE_CLASSIFICATION: &str = "device_classification";
pub const TAG_DEVICE_LOCALE: &str = "device_locale";
pub const TAG_DEVICE_MANUFACTURER: &str = "device_manufacturer";
pub const TAG_DEVICE_MODEL: &str = "device_model";
pub const TAG_DEVICE_OS_NAME: &str = "device_os_name";
pub const TAG_DEVICE_OS_VERSION: &str = "device_os_version";

// Present only when known.
pub const TAG_DEVICE_OS_BUILD_NUMBER: &str = "device_os_build_number";

/// Tags emitted for every occurrence, in wire order.
pub const REQUIRED_DEVICE_TAGS: [&str; 6] = [
    TAG_DEVICE_CLASSIFICATION,
    TAG_DEVICE_LOCALE,
    TAG_DEVICE_MANUFACTURER,
    TAG_DEVICE_MODEL,
    TAG_DEVICE_OS_NAME,
    TAG_DEVICE_OS_VERSION,
];

// Issue category keys
pub const ISSUE_BLOCKING_MAIN_THREAD: &str = "blocking_main_thread";
