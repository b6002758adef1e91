use axum::{Json, debug_handler};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{ALL_GOOD, ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutProfile {
    pub name: String,
    pub location: String,
    pub education: String,
    pub bio: Vec<String>,
    pub interests: Vec<String>,
    pub currently_playing: Vec<String>,
    pub image_url: String,
}

/// Built fresh from constants on every request; nothing here is persisted.
pub fn about_profile() -> AboutProfile {
    AboutProfile {
        name: "Cyryl Zhang".to_owned(),
        location: "New York, NY".to_owned(),
        education: "Junior studying Game Design and Computer Science at NYU".to_owned(),
        bio: vec![
            "Hi! I'm Cyryl Zhang from Vancouver, Canada. Currently, I'm in my junior year at NYU, \
             where I'm pursuing a dual focus in Game Design and Computer Science."
                .to_owned(),
            "Recently, I've been deeply engaged with games like Hades 2 and Papers Please. Hades \
             2's incredible art style and roguelike mechanics have been inspiring my own game \
             design philosophy, while Papers Please's unique approach to storytelling through \
             bureaucratic gameplay has shown me how powerful minimalist design can be."
                .to_owned(),
            "When I'm not coding or designing games, you'll find me exploring new indie games, \
             travelling with my family, or exploring the latest gelato place."
                .to_owned(),
            "This MERN stack project is part of my Agile Software Development and DevOps class, \
             where I'm learning to build full-stack applications using modern web technologies."
                .to_owned(),
        ],
        interests: vec![
            "Game Design".to_owned(),
            "Matcha".to_owned(),
            "Indie Games".to_owned(),
            "Traveling".to_owned(),
            "Some movies and all the animes".to_owned(),
        ],
        currently_playing: vec!["Hades 2".to_owned(), "Papers Please".to_owned()],
        image_url: "/images/cyryl-photo.jpg".to_owned(),
    }
}

/// The envelope status rides inside the profile object itself here,
/// flattened rather than wrapped.
#[debug_handler]
pub(crate) async fn about() -> ApiResult<Json<Value>> {
    let profile = about_profile();

    // cannot fail for a payload built from constants, but the 500 path stays
    let mut body = serde_json::to_value(&profile).map_err(ApiError::About)?;
    body["status"] = json!(ALL_GOOD);

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::Value;

    use super::{about, about_profile};

    #[test]
    fn profile_is_deterministic() {
        let profile = about_profile();

        assert_eq!(profile, about_profile());
        assert_eq!(profile.name, "Cyryl Zhang");
        assert_eq!(profile.bio.len(), 4);
        assert_eq!(profile.currently_playing, ["Hades 2", "Papers Please"]);
    }

    #[tokio::test]
    async fn about_flattens_status_into_the_profile() {
        let response = about().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], "all good");
        assert_eq!(body["name"], "Cyryl Zhang");
        assert_eq!(body["currentlyPlaying"].as_array().unwrap().len(), 2);
        assert_eq!(body["imageUrl"], "/images/cyryl-photo.jpg");
        assert_eq!(body["bio"].as_array().unwrap().len(), 4);
    }
}
