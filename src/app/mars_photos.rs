use crate::domain::model::{
    Camera, FailurePolicy, MarsPhoto, MarsPhotosResponse, Rover, RoverName,
};
use crate::domain::ports::{GalleryConfigProvider, PhotoSource};
use crate::utils::error::{CourseError, Result};
use chrono::NaiveDate;
use reqwest::Client;
use url::Url;

pub const PLACEHOLDER_COUNT: u64 = 20;

const PLACEHOLDER_IMAGES: [&str; 4] = [
    "https://mars.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/fcam/FLB_486265257EDR_F0481570FHAZ00323M_.JPG",
    "https://mars.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/fcam/FRB_486265257EDR_F0481570FHAZ00323M_.JPG",
    "https://mars.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/rcam/RLB_486265291EDR_F0481570RHAZ00323M_.JPG",
    "https://mars.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/rcam/RRB_486265291EDR_F0481570RHAZ00323M_.JPG",
];

pub const PLACEHOLDER_CAMERAS: [(&str, &str); 4] = [
    ("FHAZ", "Front Hazard Avoidance Camera"),
    ("RHAZ", "Rear Hazard Avoidance Camera"),
    ("NAVCAM", "Navigation Camera"),
    ("MARDI", "Mars Descent Imager"),
];

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Deterministic stand-in photos used when the API cannot be reached.
pub fn placeholder_photos(rover: RoverName, sol: u32) -> Vec<MarsPhoto> {
    let rover_record = Rover {
        id: 1,
        name: rover.to_string(),
        landing_date: ymd(2012, 8, 5),
        launch_date: ymd(2011, 11, 26),
        status: "active".to_string(),
    };

    (1..=PLACEHOLDER_COUNT)
        .map(|index| {
            let slot = (index % 4) as usize;
            let (name, full_name) = PLACEHOLDER_CAMERAS[slot];
            MarsPhoto {
                id: index,
                img_src: PLACEHOLDER_IMAGES[slot].to_string(),
                earth_date: ymd(2015, 5, 30),
                sol,
                camera: Camera {
                    id: index,
                    name: name.to_string(),
                    rover_id: 1,
                    full_name: full_name.to_string(),
                },
                rover: rover_record.clone(),
            }
        })
        .collect()
}

/// Mars rover photo client backed by the NASA photo API.
pub struct MarsPhotosRepository<C: GalleryConfigProvider> {
    config: C,
    client: Client,
}

impl<C: GalleryConfigProvider> MarsPhotosRepository<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// `{base}rovers/{rover}/photos?sol=..&api_key=..`
    pub fn photos_url(&self, rover: RoverName, sol: u32) -> Result<Url> {
        let base = self.config.base_url();
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{}/", base))?
        };

        let mut url = base.join(&format!("rovers/{}/photos", rover.slug()))?;
        url.query_pairs_mut()
            .append_pair("sol", &sol.to_string())
            .append_pair("api_key", self.config.api_key());
        Ok(url)
    }

    /// Fetches from the API without any fallback.
    pub async fn fetch_remote(&self, rover: RoverName, sol: u32) -> Result<Vec<MarsPhoto>> {
        let url = self.photos_url(rover, sol)?;

        tracing::debug!("Requesting photos for {} sol {} from {}", rover, sol, self.config.base_url());
        // reqwest errors carry the request URL, which holds the api_key.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CourseError::Http(e.without_url()))?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            let mut redacted = url;
            redacted.set_query(Some(&format!("sol={}", sol)));
            return Err(CourseError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: redacted.to_string(),
            });
        }

        let body: MarsPhotosResponse = response
            .json()
            .await
            .map_err(|e| CourseError::Http(e.without_url()))?;
        Ok(body.photos)
    }
}

#[async_trait::async_trait]
impl<C: GalleryConfigProvider> PhotoSource for MarsPhotosRepository<C> {
    async fn fetch_photos(&self, rover: RoverName, sol: u32) -> Result<Vec<MarsPhoto>> {
        match self.fetch_remote(rover, sol).await {
            Ok(photos) => Ok(photos),
            Err(e) => match self.config.failure_policy() {
                FailurePolicy::Placeholder => {
                    tracing::warn!("Photo API unavailable ({}), generating placeholder photos", e);
                    Ok(placeholder_photos(rover, sol))
                }
                FailurePolicy::Surface => Err(e),
            },
        }
    }
}
