use serde::{Deserialize, Serialize};

use crate::error::{CrosshairError, CrosshairResult};

/// Linear mapping between one axis domain and a pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    inverted: bool,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> CrosshairResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(CrosshairError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            inverted: false,
        })
    }

    /// Maps `domain_start` to the far end of the extent (vertical axes).
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.inverted
    }

    /// Non-finite input yields a non-finite output; callers filter it.
    #[must_use]
    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        if self.inverted {
            (1.0 - normalized) * extent_px
        } else {
            normalized * extent_px
        }
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64, extent_px: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = pixel / extent_px;
        let normalized = if self.inverted {
            1.0 - normalized
        } else {
            normalized
        };
        self.domain_start + normalized * span
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn degenerate_domain_is_rejected() {
        assert!(LinearScale::new(1.0, 1.0).is_err());
        assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn inverted_scale_maps_domain_start_to_bottom() {
        let scale = LinearScale::new(0.0, 100.0).expect("scale").inverted();
        assert_eq!(scale.domain_to_pixel(0.0, 400.0), 400.0);
        assert_eq!(scale.domain_to_pixel(100.0, 400.0), 0.0);
        assert_eq!(scale.pixel_to_domain(100.0, 400.0), 75.0);
    }
}
