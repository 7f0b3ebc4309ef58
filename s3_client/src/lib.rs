use std::time::Duration;

mod presign;

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Issues a presigned GET url for the provided key which stays valid for `expires_in`.
    /// The key must already be decoded.
    #[tracing::instrument(skip(self))]
    pub async fn get_presigned_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> anyhow::Result<String> {
        presign::get_presigned_url(&self.inner, bucket, key, expires_in).await
    }
}
