//! Wire types for the mock REST API.

use serde::Deserialize;

/// A photo record from `GET /photos`, the raw material for catalog seeding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub id: i64,
    pub album_id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Response of `POST /posts`.
///
/// The mock backend echoes back an id; it is logged but never treated as
/// authoritative - local order ids are assigned independently.
#[derive(Debug, Clone, Deserialize)]
pub struct PostReceipt {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_record_deserializes_from_wire_shape() {
        let json = r#"{
            "albumId": 1,
            "id": 2,
            "title": "reprehenderit est deserunt velit ipsam",
            "url": "https://via.placeholder.com/600/771796",
            "thumbnailUrl": "https://via.placeholder.com/150/771796"
        }"#;

        let photo: PhotoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(photo.id, 2);
        assert_eq!(photo.album_id, 1);
        assert!(photo.thumbnail_url.starts_with("https://"));
    }

    #[test]
    fn test_post_receipt() {
        let receipt: PostReceipt = serde_json::from_str(r#"{ "id": 101 }"#).unwrap();
        assert_eq!(receipt.id, 101);
    }
}
