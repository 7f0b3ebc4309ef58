use anyhow::Context;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

/// Generate a URL for a presigned GET request.
pub async fn get_presigned_url(
    client: &Client,
    bucket: &str,
    key: &str,
    expires_in: Duration,
) -> anyhow::Result<String> {
    let config = PresigningConfig::expires_in(expires_in)
        .context(format!("invalid presign expiry {expires_in:?}"))?;

    let presigned_request = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(config)
        .await
        .context(format!("could not presign {key} in bucket {bucket}"))?;

    Ok(presigned_request.uri().to_string())
}
