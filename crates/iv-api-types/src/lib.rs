use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wish {
    pub name: String,
    pub message: String,
    pub created_at_formatted: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }
}

/// Body of `GET get_wishes?page=N`.
///
/// Error responses usually carry only `status` and `message`, so the list and
/// pagination fields fall back to empty values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishesResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Wish>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl WishesResponse {
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }
}

/// Body returned by both `submit_wish` and `submit_rsvp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wishes_page() -> anyhow::Result<()> {
        let raw = r#"{
            "status": "success",
            "data": [
                {"name": "Ana", "message": "Congrats", "created_at_formatted": "1 Jan 2026"}
            ],
            "pagination": {"current_page": 2, "total_pages": 5}
        }"#;

        let resp: WishesResponse = serde_json::from_str(raw)?;
        assert!(resp.is_success());
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].name, "Ana");
        assert_eq!(resp.data[0].created_at_formatted, "1 Jan 2026");
        assert_eq!(
            resp.pagination,
            Pagination {
                current_page: 2,
                total_pages: 5
            }
        );
        Ok(())
    }

    #[test]
    fn error_body_without_data_still_decodes() -> anyhow::Result<()> {
        let resp: WishesResponse =
            serde_json::from_str(r#"{"status": "error", "message": "db down"}"#)?;
        assert!(!resp.is_success());
        assert_eq!(resp.message.as_deref(), Some("db down"));
        assert!(resp.data.is_empty());
        assert_eq!(resp.pagination, Pagination::default());
        Ok(())
    }

    #[test]
    fn submit_response_status() -> anyhow::Result<()> {
        let ok: SubmitResponse =
            serde_json::from_str(r#"{"status": "success", "message": "Thanks!"}"#)?;
        assert!(ok.is_success());
        assert_eq!(ok.message, "Thanks!");

        let rejected: SubmitResponse =
            serde_json::from_str(r#"{"status": "error", "message": "Name required"}"#)?;
        assert!(!rejected.is_success());
        Ok(())
    }

    #[test]
    fn unknown_status_is_a_decode_error() {
        let result = serde_json::from_str::<SubmitResponse>(r#"{"status": "pending"}"#);
        assert!(result.is_err());
    }
}
