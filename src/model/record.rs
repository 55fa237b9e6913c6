//! User and post record shapes.
//!
//! All leaf fields default to empty strings so records with missing or
//! blank fields deserialize (and render) as empty rather than failing.
//! No validation beyond shape: the remote source owns data quality.

use crate::model::{PostId, UserId};
use serde::Deserialize;

/// One user record as returned by the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct User {
    /// Unique within the fetched set; row identity for selection and delete.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login-style handle; one of the filterable fields.
    pub username: String,
    /// Contact email, rendered as a `mailto:` line in the detail overlay.
    pub email: String,
    /// Postal address group.
    pub address: Address,
    /// Free-text phone number.
    pub phone: String,
    /// Website URL, rendered as text (never a select trigger).
    pub website: String,
    /// Employer group.
    pub company: Company,
}

/// Postal address sub-record of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// Suite or apartment line; often blank.
    pub suite: String,
    /// City name.
    pub city: String,
    /// Postal code, kept as text.
    pub zipcode: String,
    /// Coordinates, kept as the strings the source sends.
    pub geo: Geo,
}

/// Geographic coordinates of an [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Geo {
    /// Latitude as text.
    pub lat: String,
    /// Longitude as text.
    pub lng: String,
}

/// Employer sub-record of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    /// Company name; one of the filterable fields.
    pub name: String,
    /// Marketing tagline.
    pub catch_phrase: String,
    /// Line of business.
    pub bs: String,
}

/// One post record as returned by the posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    /// Unique post id; expansion identity in the posts pane.
    pub id: PostId,
    /// Foreign reference to a user's id. Not enforced here; the remote
    /// source guarantees referential validity.
    pub user_id: UserId,
    /// Post title, always visible in the list.
    pub title: String,
    /// Post body, visible only while the post is expanded.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_full_payload() {
        let raw = serde_json::json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        });
        let user: User = serde_json::from_value(raw).unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.address.geo.lng, "81.1496");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let user: User = serde_json::from_value(serde_json::json!({ "id": 3 })).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.address.suite, "");
        assert_eq!(user.company.name, "");
    }

    #[test]
    fn post_maps_camel_case_user_id() {
        let raw = serde_json::json!({ "id": 9, "userId": 2, "title": "t", "body": "b" });
        let post: Post = serde_json::from_value(raw).unwrap();
        assert_eq!(post.user_id, UserId::new(2));
    }
}
