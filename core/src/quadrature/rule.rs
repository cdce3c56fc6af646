//! Quadrature Rules

use super::tables::*;
use crate::math::*;

/// Whether a rule includes the interval end points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuadratureKind {
    /// Abscissas lie strictly inside (0, 1).
    Open,

    /// First and last abscissas are exactly 0 and 1.
    Closed,
}

/// A fixed rule of (abscissa, weight) pairs over [0, 1].
#[derive(Copy, Clone, Debug)]
pub struct QuadratureRule {
    /// Abscissas in increasing order.
    xs: &'static [Float],

    /// Weights as tabulated.
    ws: &'static [Float],

    /// Factor applied to the tabulated weights so they sum to 1.
    weight_scale: Float,

    /// Open or closed rule.
    kind: QuadratureKind,
}

/// 100-node Gauss-Legendre rule over [0, 1].
pub const GAUSS_100: QuadratureRule = QuadratureRule {
    xs: &GAUSS_100_XS,
    ws: &GAUSS_100_WS,
    weight_scale: 1.0,
    kind: QuadratureKind::Open,
};

/// 100-node Gauss-Lobatto rule over [0, 1].
pub const LOBATTO_100: QuadratureRule = QuadratureRule {
    xs: &LOBATTO_100_XS,
    ws: &LOBATTO_100_WS,
    weight_scale: 0.5,
    kind: QuadratureKind::Closed,
};

impl QuadratureRule {
    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` if the rule has no nodes.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns whether the rule is open or closed.
    pub fn kind(&self) -> QuadratureKind {
        self.kind
    }

    /// Returns the (abscissa, weight) pairs with the weights normalized to
    /// [0, 1].
    pub fn nodes(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.xs
            .iter()
            .zip(self.ws.iter())
            .map(move |(&x, &w)| (x, w * self.weight_scale))
    }

    /// Integrate a function over [0, 1].
    ///
    /// * `f` - The integrand.
    pub fn integrate<F>(&self, f: F) -> Float
    where
        F: Fn(Float) -> Float,
    {
        self.nodes().map(|(x, w)| w * f(x)).sum()
    }

    /// Integrate a function over [a, b].
    ///
    /// * `a` - Lower limit.
    /// * `b` - Upper limit.
    /// * `f` - The integrand.
    pub fn integrate_range<F>(&self, a: Float, b: Float, f: F) -> Float
    where
        F: Fn(Float) -> Float,
    {
        (b - a) * self.integrate(|x| f(lerp(x, a, b)))
    }

    /// Integrate a function over [0, 1]² with the tensor product of this rule
    /// with itself.
    ///
    /// * `f` - The integrand.
    pub fn integrate_2d<F>(&self, f: F) -> Float
    where
        F: Fn(Float, Float) -> Float,
    {
        self.nodes()
            .map(|(x, wx)| wx * self.integrate(|y| f(x, y)))
            .sum()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
