use crate::profile::ProfileMetadata;
use occurrence_types::ids;
use std::collections::BTreeMap;

/// Searchable tags for an occurrence.
///
/// The six device dimensions are always present (even when empty) so issues aggregate
/// across devices on a fixed key set. The build number is high-cardinality and only
/// emitted when known.
pub fn build_occurrence_tags(metadata: &ProfileMetadata) -> BTreeMap<String, String> {
    let mut tags: BTreeMap<String, String> = [
        (
            ids::TAG_DEVICE_CLASSIFICATION,
            &metadata.device_classification,
        ),
        (ids::TAG_DEVICE_LOCALE, &metadata.device_locale),
        (ids::TAG_DEVICE_MANUFACTURER, &metadata.device_manufacturer),
        (ids::TAG_DEVICE_MODEL, &metadata.device_model),
        (ids::TAG_DEVICE_OS_NAME, &metadata.device_os_name),
        (ids::TAG_DEVICE_OS_VERSION, &metadata.device_os_version),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.clone()))
    .collect();

    if !metadata.device_os_build_number.is_empty() {
        tags.insert(
            ids::TAG_DEVICE_OS_BUILD_NUMBER.to_string(),
            metadata.device_os_build_number.clone(),
        );
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::android_metadata;

    #[test]
    fn empty_metadata_still_has_required_tags() {
        let tags = build_occurrence_tags(&ProfileMetadata::default());
        assert_eq!(tags.len(), ids::REQUIRED_DEVICE_TAGS.len());
        for key in ids::REQUIRED_DEVICE_TAGS {
            assert_eq!(tags.get(key).map(String::as_str), Some(""), "{key}");
        }
        assert!(!tags.contains_key(ids::TAG_DEVICE_OS_BUILD_NUMBER));
    }

    #[test]
    fn build_number_only_when_known() {
        let mut md = android_metadata();
        md.device_os_build_number = String::new();
        assert_eq!(build_occurrence_tags(&md).len(), 6);

        md.device_os_build_number = "19H2".to_string();
        let tags = build_occurrence_tags(&md);
        assert_eq!(tags.len(), 7);
        assert_eq!(tags[ids::TAG_DEVICE_OS_BUILD_NUMBER], "19H2");
    }

    #[test]
    fn values_are_copied_verbatim() {
        let tags = build_occurrence_tags(&android_metadata());
        assert_eq!(tags[ids::TAG_DEVICE_CLASSIFICATION], "high");
        assert_eq!(tags[ids::TAG_DEVICE_LOCALE], "en_US");
        assert_eq!(tags[ids::TAG_DEVICE_MANUFACTURER], "Google");
        assert_eq!(tags[ids::TAG_DEVICE_MODEL], "Pixel 7");
        assert_eq!(tags[ids::TAG_DEVICE_OS_NAME], "android");
        assert_eq!(tags[ids::TAG_DEVICE_OS_VERSION], "14");
    }
}
