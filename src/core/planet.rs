use crate::utils::error::{CourseError, Result};
use crate::utils::format::fixed_half_up;
use crate::utils::validation::{parse_non_negative_decimal, validate_range};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub name: &'static str,
    pub gravity_ratio: f64,
}

pub const PLANETS: [Planet; 6] = [
    Planet { name: "Venus", gravity_ratio: 0.78 },
    Planet { name: "Mars", gravity_ratio: 0.39 },
    Planet { name: "Jupiter", gravity_ratio: 2.65 },
    Planet { name: "Saturn", gravity_ratio: 1.17 },
    Planet { name: "Uranus", gravity_ratio: 1.05 },
    Planet { name: "Neptune", gravity_ratio: 1.23 },
];

pub const INVALID_WEIGHT_MESSAGE: &str = "Please enter a valid weight and select a planet.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetWeight {
    pub planet: Planet,
    pub weight: f64,
}

impl PlanetWeight {
    pub fn formatted(&self) -> String {
        fixed_half_up(self.weight, 2)
    }

    pub fn message(&self) -> String {
        format!("Your weight on {} is {} pounds", self.planet.name, self.formatted())
    }
}

/// Looks up a planet by its 1-based menu position.
pub fn planet_at(selection: usize) -> Result<Planet> {
    validate_range("planet", selection, 1, PLANETS.len())?;
    Ok(PLANETS[selection - 1])
}

pub fn planet_weight(earth_weight: f64, selection: usize) -> Result<PlanetWeight> {
    if !earth_weight.is_finite() || earth_weight < 0.0 {
        return Err(CourseError::invalid_input(
            "weight",
            &earth_weight.to_string(),
            "weight must be a finite, non-negative number",
        ));
    }
    let planet = planet_at(selection)?;
    Ok(PlanetWeight {
        planet,
        weight: earth_weight * planet.gravity_ratio,
    })
}

/// Screen handler: renders the result line or the validation message.
pub fn render_weight(input: &str, selection: usize) -> String {
    match parse_non_negative_decimal("weight", input)
        .and_then(|weight| planet_weight(weight, selection))
    {
        Ok(result) => result.message(),
        Err(e) => {
            tracing::debug!("Rejected weight input: {}", e);
            INVALID_WEIGHT_MESSAGE.to_string()
        }
    }
}
