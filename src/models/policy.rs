/// Storage policy records
use serde::{Deserialize, Serialize};

const LOCAL_UPLOAD_PATH: &str = "/api/v3/file/upload";
const SLAVE_UPLOAD_PATH: &str = "/api/v3/slave/upload";
const UPYUN_API: &str = "https://v0.api.upyun.com";

/// Storage backend behind a policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    #[default]
    Local,
    Remote,
    Oss,
    Qiniu,
    Upyun,
    Cos,
    Onedrive,
    S3,
}

impl PolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Local => "local",
            PolicyType::Remote => "remote",
            PolicyType::Oss => "oss",
            PolicyType::Qiniu => "qiniu",
            PolicyType::Upyun => "upyun",
            PolicyType::Cos => "cos",
            PolicyType::Onedrive => "onedrive",
            PolicyType::S3 => "s3",
        }
    }
}

/// Where and how an account's files are stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    /// Endpoint of the storage backend
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub bucket_name: String,
    /// Largest single object in bytes, 0 for unlimited
    pub max_size: u64,
    #[serde(default)]
    pub is_origin_link_enable: bool,
    #[serde(default)]
    pub options: PolicyOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyOptions {
    /// Allowed file extensions, empty for any
    pub file_type: Vec<String>,
    pub region: String,
}

impl Policy {
    /// Endpoint clients upload to under this policy
    pub fn upload_url(&self) -> String {
        match self.policy_type {
            PolicyType::Local | PolicyType::Onedrive => LOCAL_UPLOAD_PATH.to_string(),
            PolicyType::Remote => format!("{}{}", origin_of(&self.server), SLAVE_UPLOAD_PATH),
            PolicyType::Oss => format!("https://{}.{}", self.bucket_name, self.server),
            PolicyType::Cos | PolicyType::Qiniu => self.server.clone(),
            PolicyType::Upyun => format!("{}/{}", UPYUN_API, self.bucket_name),
            PolicyType::S3 if self.server.is_empty() => format!(
                "https://{}.s3.{}.amazonaws.com/",
                self.bucket_name, self.options.region
            ),
            PolicyType::S3 => format!(
                "{}/{}",
                self.server.trim_end_matches('/'),
                self.bucket_name
            ),
        }
    }
}

/// Scheme and authority of `server`, dropping any path
fn origin_of(server: &str) -> &str {
    match server.find("://") {
        Some(scheme_end) => {
            let authority_start = scheme_end + 3;
            match server[authority_start..].find('/') {
                Some(path_start) => &server[..authority_start + path_start],
                None => server,
            }
        }
        None => server.trim_end_matches('/'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(policy_type: PolicyType, server: &str, bucket: &str) -> Policy {
        Policy {
            policy_type,
            server: server.to_string(),
            bucket_name: bucket.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_local_upload_url() {
        assert_eq!(policy(PolicyType::Local, "", "").upload_url(), "/api/v3/file/upload");
        assert_eq!(
            policy(PolicyType::Onedrive, "https://graph.microsoft.com", "").upload_url(),
            "/api/v3/file/upload"
        );
    }

    #[test]
    fn test_remote_upload_url_replaces_path() {
        assert_eq!(
            policy(PolicyType::Remote, "https://slave.example.com/node/", "").upload_url(),
            "https://slave.example.com/api/v3/slave/upload"
        );
        assert_eq!(
            policy(PolicyType::Remote, "http://10.0.0.2:5212", "").upload_url(),
            "http://10.0.0.2:5212/api/v3/slave/upload"
        );
    }

    #[test]
    fn test_bucket_upload_urls() {
        assert_eq!(
            policy(PolicyType::Oss, "oss-cn-shanghai.aliyuncs.com", "media").upload_url(),
            "https://media.oss-cn-shanghai.aliyuncs.com"
        );
        assert_eq!(
            policy(PolicyType::Upyun, "", "media").upload_url(),
            "https://v0.api.upyun.com/media"
        );
        assert_eq!(
            policy(PolicyType::Cos, "https://media-1250000000.cos.ap-shanghai.myqcloud.com", "")
                .upload_url(),
            "https://media-1250000000.cos.ap-shanghai.myqcloud.com"
        );
    }

    #[test]
    fn test_s3_upload_url() {
        let mut aws = policy(PolicyType::S3, "", "media");
        aws.options.region = "us-east-1".to_string();
        assert_eq!(aws.upload_url(), "https://media.s3.us-east-1.amazonaws.com/");

        let minio = policy(PolicyType::S3, "https://minio.internal/", "media");
        assert_eq!(minio.upload_url(), "https://minio.internal/media");
    }

    #[test]
    fn test_policy_type_serde() {
        let parsed: PolicyType = serde_json::from_str("\"onedrive\"").unwrap();
        assert_eq!(parsed, PolicyType::Onedrive);
        assert_eq!(parsed.as_str(), "onedrive");
    }
}
