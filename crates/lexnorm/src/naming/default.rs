use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Identifiers whose canonical form the boundary rules would get wrong.
static BUILTIN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for (raw, canon) in [
        ("ETag", "etag"),
        ("s3Bucket", "s3_bucket"),
        ("s3Key", "s3_key"),
        ("Ec2KeyName", "ec2_key_name"),
        ("Ec2SubnetId", "ec2_subnet_id"),
        ("Ec2VolumeId", "ec2_volume_id"),
        ("Ec2InstanceId", "ec2_instance_id"),
        ("ElastiCache", "elasticache"),
        ("NotificationARNs", "notification_arns"),
        ("SentLast24Hours", "sent_last_24_hours"),
        ("Max24HourSend", "max_24_hour_send"),
        ("AuthenticationCode1", "authentication_code_1"),
        ("AuthenticationCode2", "authentication_code_2"),
        ("SwapEnvironmentCNAMEs", "swap_environment_cnames"),
    ] {
        m.insert(raw, canon);
    }

    // Storage gateway volume shapes all spell iSCSI with a lowercase lead.
    for (raw, canon) in [
        ("CachediSCSIVolume", "cached_iscsi_volume"),
        ("CachediSCSIVolumeInformation", "cached_iscsi_volume_information"),
        ("CachediSCSIVolumes", "cached_iscsi_volumes"),
        ("CreateCachediSCSIVolume", "create_cached_iscsi_volume"),
        ("CreateCachediSCSIVolumeInput", "create_cached_iscsi_volume_input"),
        ("CreateCachediSCSIVolumeOutput", "create_cached_iscsi_volume_output"),
        ("CreateStorediSCSIVolume", "create_stored_iscsi_volume"),
        ("CreateStorediSCSIVolumeInput", "create_stored_iscsi_volume_input"),
        ("CreateStorediSCSIVolumeOutput", "create_stored_iscsi_volume_output"),
        ("DescribeCachediSCSIVolumes", "describe_cached_iscsi_volumes"),
        ("DescribeCachediSCSIVolumesInput", "describe_cached_iscsi_volumes_input"),
        ("DescribeCachediSCSIVolumesOutput", "describe_cached_iscsi_volumes_output"),
        ("DescribeStorediSCSIVolumes", "describe_stored_iscsi_volumes"),
        ("DescribeStorediSCSIVolumesInput", "describe_stored_iscsi_volumes_input"),
        ("DescribeStorediSCSIVolumesOutput", "describe_stored_iscsi_volumes_output"),
        ("DeviceiSCSIAttributes", "device_iscsi_attributes"),
        ("StorediSCSIVolume", "stored_iscsi_volume"),
        ("StorediSCSIVolumeInformation", "stored_iscsi_volume_information"),
        ("StorediSCSIVolumes", "stored_iscsi_volumes"),
        ("VolumeiSCSIAttributes", "volume_iscsi_attributes"),
    ] {
        m.insert(raw, canon);
    }

    m
});

/// The built-in override table, keyed by exact identifier.
pub fn builtin_overrides() -> &'static HashMap<&'static str, &'static str> {
    &BUILTIN
}

/// Exact, case-sensitive lookup in the built-in table.
pub fn builtin_override(identifier: &str) -> Option<&'static str> {
    BUILTIN.get(identifier).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(builtin_override("ETag"), Some("etag"));
        assert_eq!(builtin_override("Etag"), None);
        assert_eq!(builtin_override("etag"), None);
    }

    #[test]
    fn lookup_matches_whole_string_only() {
        assert_eq!(builtin_override("ETags"), None);
        assert_eq!(builtin_override("GetETag"), None);
    }

    #[test]
    fn table_has_every_iscsi_shape() {
        let iscsi = builtin_overrides()
            .keys()
            .filter(|k| k.contains("iSCSI"))
            .count();
        assert_eq!(iscsi, 20);
        assert_eq!(builtin_overrides().len(), 34);
    }
}
