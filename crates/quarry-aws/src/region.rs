//! Region name validation.
//!
//! The SDK's `Region::new` accepts any string and defers failure to the
//! first request. Deployments want a bad region rejected up front, so
//! names are checked against the public AWS region set here.

use aws_config::Region;

use crate::error::AwsError;

/// Public AWS regions (commercial, GovCloud, and China partitions).
const KNOWN_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ap-southeast-7",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "mx-central-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

/// Resolve a region name, failing on anything outside the known set.
pub fn resolve(name: &str) -> Result<Region, AwsError> {
    if KNOWN_REGIONS.contains(&name) {
        Ok(Region::new(name.to_string()))
    } else {
        Err(AwsError::UnknownRegion(name.to_string()))
    }
}
