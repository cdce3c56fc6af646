//! BSDF Sample

use super::*;

/// Stores evaluation of BSDF samples.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BSDFSample {
    /// The sampled outgoing direction.
    pub wo: Vector3f,

    /// The value of the PDF.
    pub pdf: Float,

    /// The cosine-weighted density `eval(wi, wo)`.
    pub value: Float,
}

impl BSDFSample {
    /// Create a new `BSDFSample`.
    ///
    /// * `wo`    - The sampled outgoing direction.
    /// * `pdf`   - The value of the PDF.
    /// * `value` - The cosine-weighted density.
    pub fn new(wo: Vector3f, pdf: Float, value: Float) -> Self {
        Self { wo, pdf, value }
    }

    /// Returns the importance sampling weight `value / pdf`, 0 when the PDF
    /// vanishes.
    pub fn weight(&self) -> Float {
        if self.pdf > 0.0 {
            self.value / self.pdf
        } else {
            0.0
        }
    }
}
