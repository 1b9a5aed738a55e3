use anyhow::{Context as _, anyhow};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::domain::repository::ImageStore;
use crate::error::ComplaintsServiceError;

/// Image store backed by a Cloudinary-compatible upload API.
///
/// Credentials are optional: a deployment without them still serves every
/// listing endpoint, and uploads fail with `UPLOAD_NOT_CONFIGURED` at
/// request time. Placeholder values left over from an env template count
/// as absent.
#[derive(Clone)]
pub struct CdnImageStore {
    client: reqwest::Client,
    credentials: Option<CdnCredentials>,
}

#[derive(Clone)]
struct CdnCredentials {
    cloud_name: String,
    upload_preset: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CdnImageStore {
    pub fn new(cloud_name: Option<String>, upload_preset: Option<String>) -> Self {
        let credentials = match (filled(cloud_name), filled(upload_preset)) {
            (Some(cloud_name), Some(upload_preset)) => Some(CdnCredentials {
                cloud_name,
                upload_preset,
            }),
            _ => None,
        };
        Self {
            client: reqwest::Client::new(),
            credentials,
        }
    }
}

/// Treat empty strings and `your_*` env-template placeholders as unset.
fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && !v.starts_with("your_"))
}

impl ImageStore for CdnImageStore {
    async fn upload(
        &self,
        bytes: Bytes,
        filename: &str,
    ) -> Result<String, ComplaintsServiceError> {
        let Some(credentials) = &self.credentials else {
            return Err(ComplaintsServiceError::UploadNotConfigured);
        };

        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            credentials.cloud_name
        );
        let form = Form::new()
            .text("upload_preset", credentials.upload_preset.clone())
            .part("file", Part::stream(bytes).file_name(filename.to_owned()));

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ComplaintsServiceError::UploadFailed(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ComplaintsServiceError::UploadFailed(anyhow!(
                "upload rejected with {status}: {body}"
            )));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| ComplaintsServiceError::UploadFailed(e.into()))?;
        Ok(parsed.secure_url)
    }

    async fn delete(&self, url: &str) -> Result<(), ComplaintsServiceError> {
        // Nothing was uploaded if the store was never configured.
        let Some(credentials) = &self.credentials else {
            return Ok(());
        };
        let public_id =
            public_id_from_url(url).ok_or_else(|| anyhow!("unrecognized image url: {url}"))?;

        // Unsigned deployments reject destroy calls; callers treat a failed
        // delete as non-fatal and only log it.
        let destroy = format!(
            "https://api.cloudinary.com/v1_1/{}/image/destroy",
            credentials.cloud_name
        );
        let response = self
            .client
            .post(&destroy)
            .form(&[("public_id", public_id)])
            .send()
            .await
            .context("destroy image")?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("destroy rejected with {status}").into());
        }
        Ok(())
    }
}

/// Extract the public id from an issued delivery URL:
/// `.../image/upload/v1700000000/folder/name.jpg` → `folder/name`.
fn public_id_from_url(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("/upload/")?;
    let rest = match rest.split_once('/') {
        Some((version, tail)) if is_version_segment(version) => tail,
        _ => rest,
    };
    if rest.is_empty() {
        return None;
    }
    Some(rest.rsplit_once('.').map_or(rest, |(id, _)| id))
}

fn is_version_segment(segment: &str) -> bool {
    segment.len() > 1
        && segment.starts_with('v')
        && segment[1..].bytes().all(|b| b.is_ascii_digit())
}
