pub const MIN_RADIUS_MILES: f64 = 1.0;
pub const MAX_RADIUS_MILES: f64 = 25.0;
pub const DEFAULT_RADIUS_MILES: f64 = 5.0;

/// Radii offered as one-tap choices
pub const QUICK_PICK_RADII: [f64; 6] = [1.0, 3.0, 5.0, 10.0, 15.0, 25.0];

/// What the user is searching for
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPreferences {
    radius_miles: f64,
    cuisine: Option<String>,
}

impl SearchPreferences {
    pub fn new(radius_miles: f64) -> Self {
        let mut preferences = Self::default();
        preferences.set_radius(radius_miles);
        preferences
    }

    pub fn radius_miles(&self) -> f64 {
        self.radius_miles
    }

    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    /// Sets the radius, clamped to the selectable range
    pub fn set_radius(&mut self, radius_miles: f64) {
        self.radius_miles = if radius_miles.is_nan() {
            DEFAULT_RADIUS_MILES
        } else {
            radius_miles.clamp(MIN_RADIUS_MILES, MAX_RADIUS_MILES)
        };
    }

    pub fn set_cuisine(&mut self, cuisine: Option<String>) {
        self.cuisine = cuisine.filter(|c| !c.trim().is_empty());
    }
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            radius_miles: DEFAULT_RADIUS_MILES,
            cuisine: None,
        }
    }
}
