use crate::domain::model::{MarsPhoto, MarsUiState, RoverName};
use crate::domain::ports::PhotoSource;
use crate::utils::error::Result;
use std::fmt::Write;

pub const DEFAULT_SOL: u32 = 1000;

/// Identifies one issued fetch. Only the most recent ticket may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub rover: RoverName,
    pub sol: u32,
}

/// Mars photo gallery state: Loading, Success or Error, plus the active filter.
pub struct MarsGallery<P: PhotoSource> {
    source: P,
    state: MarsUiState,
    selected_rover: RoverName,
    selected_sol: u32,
    selected_photo: Option<u64>,
    generation: u64,
}

impl<P: PhotoSource> MarsGallery<P> {
    pub fn new(source: P, rover: RoverName, sol: u32) -> Self {
        Self {
            source,
            state: MarsUiState::Loading,
            selected_rover: rover,
            selected_sol: sol,
            selected_photo: None,
            generation: 0,
        }
    }

    /// Creates the gallery and performs the initial load.
    pub async fn open(source: P, rover: RoverName, sol: u32) -> Self {
        let mut gallery = Self::new(source, rover, sol);
        gallery.refresh().await;
        gallery
    }

    pub fn state(&self) -> &MarsUiState {
        &self.state
    }

    pub fn selected_rover(&self) -> RoverName {
        self.selected_rover
    }

    pub fn selected_sol(&self) -> u32 {
        self.selected_sol
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    /// The photo whose detail view is open, if it is still in the loaded set.
    pub fn selected_photo(&self) -> Option<&MarsPhoto> {
        let id = self.selected_photo?;
        self.state.photos()?.iter().find(|photo| photo.id == id)
    }

    /// Opens the detail view for a loaded photo. Returns false for unknown ids.
    pub fn select_photo(&mut self, id: u64) -> bool {
        let found = self
            .state
            .photos()
            .is_some_and(|photos| photos.iter().any(|photo| photo.id == id));
        if found {
            self.selected_photo = Some(id);
        } else {
            tracing::debug!("Photo #{} is not in the current result", id);
        }
        found
    }

    pub fn close_detail(&mut self) {
        self.selected_photo = None;
    }

    /// Moves to Loading and issues a ticket for the current filter.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = MarsUiState::Loading;
        self.selected_photo = None;
        tracing::debug!(
            "Fetch #{} issued for {} sol {}",
            self.generation,
            self.selected_rover,
            self.selected_sol
        );
        FetchTicket {
            generation: self.generation,
            rover: self.selected_rover,
            sol: self.selected_sol,
        }
    }

    /// Applies a fetch result. Returns false when a newer fetch superseded it.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<MarsPhoto>>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale fetch #{} (current #{})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(photos) => {
                tracing::info!("Loaded {} photos from {} sol {}", photos.len(), ticket.rover, ticket.sol);
                MarsUiState::Success(photos)
            }
            Err(e) => {
                tracing::warn!("Photo fetch failed: {}", e);
                MarsUiState::Error(format!("Failed to load Mars photos: {}", e))
            }
        };
        true
    }

    pub async fn refresh(&mut self) {
        let ticket = self.begin_fetch();
        let result = self.source.fetch_photos(ticket.rover, ticket.sol).await;
        self.complete(ticket, result);
    }

    /// Reloads only when the gallery is showing an error.
    pub async fn retry(&mut self) -> bool {
        if !matches!(self.state, MarsUiState::Error(_)) {
            return false;
        }
        self.refresh().await;
        true
    }

    pub async fn update_rover(&mut self, rover: RoverName) {
        self.selected_rover = rover;
        self.refresh().await;
    }

    pub async fn update_sol(&mut self, sol: u32) {
        self.selected_sol = sol;
        self.refresh().await;
    }

    pub fn render(&self) -> String {
        let mut out = format!("Mars Photos\n{} • Sol {}\n", self.selected_rover, self.selected_sol);

        if let Some(photo) = self.selected_photo() {
            out.push_str(&render_detail(photo));
            return out;
        }

        match &self.state {
            MarsUiState::Loading => {
                out.push_str("Loading Mars Photos...\nConnecting to NASA API");
            }
            MarsUiState::Error(message) => {
                let _ = write!(out, "Houston, we have a problem!\n{}\nTry Again", message);
            }
            MarsUiState::Success(photos) if photos.is_empty() => {
                out.push_str("No photos for this sol");
            }
            MarsUiState::Success(photos) => {
                for photo in photos {
                    let _ = writeln!(
                        out,
                        "#{:<8} {:<7} Sol {} ({}) {}",
                        photo.id, photo.camera.name, photo.sol, photo.earth_date, photo.img_src
                    );
                }
                out.pop();
            }
        }

        out
    }
}

/// Detail card for one photo, closed with the Close button.
pub fn render_detail(photo: &MarsPhoto) -> String {
    let mut out = format!("{}\n{}\n", photo.img_src, photo.camera.full_name);
    let rows = [
        ("Rover", photo.rover.name.clone()),
        ("Sol", photo.sol.to_string()),
        ("Earth Date", photo.earth_date.to_string()),
        ("Camera", photo.camera.name.clone()),
        ("Status", capitalize_first(&photo.rover.status)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{:<12}{}", label, value);
    }
    out.push_str("Close");
    out
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
