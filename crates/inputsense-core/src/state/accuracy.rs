// Inputsense Accuracy Tracker
// Largest contact geometry observed during the current modality session

/// Round a measurement to one decimal place.
///
/// Uses round-half-away-from-zero, which for the non-negative heights the
/// tracker accepts is round-half-up.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Tracks the maximum contact-geometry size reported by pointer devices.
///
/// The maximum is kept per device session: a reading from a device whose
/// label differs from the previous reading's replaces the value even if it
/// is smaller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccuracyTracker {
    current: Option<f64>,
    last_label: Option<String>,
}

impl AccuracyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current accuracy, if any measurement arrived this session
    pub fn current(&self) -> Option<f64> {
        self.current
    }

    /// Record a contact-geometry measurement.
    ///
    /// # Arguments
    /// * `height` - Raw height reported by the device (already validated)
    /// * `label` - Device-reported pointer type label
    ///
    /// # Returns
    /// * `Some(accuracy)` if the stored accuracy changed
    pub fn observe(&mut self, height: f64, label: Option<&str>) -> Option<f64> {
        let candidate = round_to_tenth(height);
        let new_session = self.last_label.as_deref() != label;
        let larger = self.current.map_or(true, |current| candidate > current);

        self.last_label = label.map(str::to_string);

        if larger || new_session {
            let changed = self.current != Some(candidate);
            self.current = Some(candidate);
            if changed {
                return Some(candidate);
            }
        }
        None
    }

    /// Forget the current measurement (the device label is kept)
    pub fn reset(&mut self) {
        self.current = None;
    }
}
