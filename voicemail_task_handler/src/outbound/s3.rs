use crate::domain::{models::AccessLink, ports::RecordingStore};
use s3_client::S3;
use std::time::Duration;

impl RecordingStore for S3 {
    type Err = anyhow::Error;

    async fn presigned_link(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> anyhow::Result<AccessLink> {
        let url = self.get_presigned_url(bucket, key, expires_in).await?;
        Ok(AccessLink(url))
    }
}
