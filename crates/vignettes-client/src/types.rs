//! Wire types for the vignettes backend

use serde::{Deserialize, Serialize};

/// Direction of a vignette's score trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A tracked item within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VignetteData {
    pub category: String,
    pub brand_name: String,
    pub public_url: String,
    pub nb_insights: u32,
    pub score: f64,
    pub trend: Trend,
    pub subtitle: String,
}

/// Response body of `GET /vignettes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VignettesResponse {
    pub vignettes: Vec<VignetteData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vignettes_response_deserialization() {
        let json = r#"{
            "vignettes": [
                {
                    "category": "WINE",
                    "brand_name": "Test",
                    "public_url": "u",
                    "nb_insights": 3,
                    "score": 8.2,
                    "trend": "up",
                    "subtitle": "s"
                }
            ]
        }"#;

        let response: VignettesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.vignettes.len(), 1);
        let v = &response.vignettes[0];
        assert_eq!(v.category, "WINE");
        assert_eq!(v.brand_name, "Test");
        assert_eq!(v.nb_insights, 3);
        assert_eq!(v.trend, Trend::Up);
    }

    #[test]
    fn test_trend_serialization() {
        assert_eq!(serde_json::to_string(&Trend::Down).unwrap(), r#""down""#);
        assert!(serde_json::from_str::<Trend>(r#""sideways""#).is_err());
    }
}
