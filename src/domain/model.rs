use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarsPhoto {
    pub id: u64,
    pub img_src: String,
    pub earth_date: NaiveDate,
    pub sol: u32,
    pub camera: Camera,
    pub rover: Rover,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: u64,
    pub name: String,
    pub rover_id: u64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rover {
    pub id: u64,
    pub name: String,
    pub landing_date: NaiveDate,
    pub launch_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarsPhotosResponse {
    pub photos: Vec<MarsPhoto>,
}

/// The rovers the photo API can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(try_from = "String", into = "String")]
pub enum RoverName {
    #[default]
    Curiosity,
    Opportunity,
    Spirit,
}

impl RoverName {
    pub const ALL: [RoverName; 3] = [RoverName::Curiosity, RoverName::Opportunity, RoverName::Spirit];

    /// Lowercase path segment used by the API.
    pub fn slug(&self) -> &'static str {
        match self {
            RoverName::Curiosity => "curiosity",
            RoverName::Opportunity => "opportunity",
            RoverName::Spirit => "spirit",
        }
    }
}

impl fmt::Display for RoverName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoverName::Curiosity => "Curiosity",
            RoverName::Opportunity => "Opportunity",
            RoverName::Spirit => "Spirit",
        };
        f.write_str(name)
    }
}

impl FromStr for RoverName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoverName::ALL
            .into_iter()
            .find(|rover| rover.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown rover '{}', expected one of: curiosity, opportunity, spirit",
                    s
                )
            })
    }
}

impl TryFrom<String> for RoverName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoverName> for String {
    fn from(rover: RoverName) -> Self {
        rover.slug().to_string()
    }
}

/// What the repository does when the remote fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Substitute the generated placeholder photos and report success.
    #[default]
    #[serde(rename = "placeholder")]
    Placeholder,
    /// Report the failure as an error state.
    #[serde(rename = "error")]
    Surface,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarsUiState {
    Loading,
    Success(Vec<MarsPhoto>),
    Error(String),
}

impl MarsUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, MarsUiState::Loading)
    }

    pub fn photos(&self) -> Option<&[MarsPhoto]> {
        match self {
            MarsUiState::Success(photos) => Some(photos),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rover_name_parses_case_insensitively() {
        assert_eq!("Curiosity".parse::<RoverName>().unwrap(), RoverName::Curiosity);
        assert_eq!(" SPIRIT ".parse::<RoverName>().unwrap(), RoverName::Spirit);
        assert_eq!("opportunity".parse::<RoverName>().unwrap(), RoverName::Opportunity);
        assert!("perseverance".parse::<RoverName>().is_err());
        assert_eq!(RoverName::Spirit.to_string(), "Spirit");
    }

    #[test]
    fn test_deserialize_api_photo() {
        let payload = serde_json::json!({
            "photos": [{
                "id": 102693,
                "sol": 1000,
                "camera": {"id": 20, "name": "FHAZ", "rover_id": 5, "full_name": "Front Hazard Avoidance Camera"},
                "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/FLB_486265257EDR_F0481570FHAZ00323M_.JPG",
                "earth_date": "2015-05-30",
                "rover": {
                    "id": 5, "name": "Curiosity",
                    "landing_date": "2012-08-06", "launch_date": "2011-11-26",
                    "status": "active", "max_sol": 4102, "total_photos": 695670
                }
            }]
        });

        let response: MarsPhotosResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.photos.len(), 1);
        let photo = &response.photos[0];
        assert_eq!(photo.camera.name, "FHAZ");
        assert_eq!(photo.earth_date, NaiveDate::from_ymd_opt(2015, 5, 30).unwrap());
        assert_eq!(photo.rover.status, "active");
    }

    #[test]
    fn test_failure_policy_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            on_failure: FailurePolicy,
        }
        let parsed: Wrapper = toml::from_str("on_failure = \"error\"").unwrap();
        assert_eq!(parsed.on_failure, FailurePolicy::Surface);
        let parsed: Wrapper = toml::from_str("on_failure = \"placeholder\"").unwrap();
        assert_eq!(parsed.on_failure, FailurePolicy::Placeholder);
    }
}
