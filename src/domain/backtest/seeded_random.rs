/// Seeded pseudo-random source for synthetic price paths.
///
/// The generator is a pure function of its seed: callers walk a sequence by
/// passing `base + offset + step` instead of mutating hidden state, which keeps
/// every simulated path reproducible for a given symbol/strategy pair.
pub struct SeededRandom;

impl SeededRandom {
    const SCALE: f64 = 10_000.0;

    /// Draw a value in `[0, 1)` for `seed` (`frac(sin(seed) * 10000)`).
    ///
    /// Non-finite seeds map to `0.0`.
    pub fn draw(seed: f64) -> f64 {
        if !seed.is_finite() {
            return 0.0;
        }
        unit_fract(seed.sin() * Self::SCALE)
    }

    /// Base seed for a symbol/strategy pair: sum of the first UTF-16 code unit
    /// of each identifier. Empty identifiers contribute nothing.
    pub fn base_seed(symbol: &str, strategy: &str) -> f64 {
        f64::from(first_code_unit(symbol)) + f64::from(first_code_unit(strategy))
    }
}

fn first_code_unit(s: &str) -> u16 {
    s.encode_utf16().next().unwrap_or(0)
}

/// Fractional part folded into `[0, 1)`.
///
/// `x - floor(x)` rounds up to exactly 1.0 for tiny negative `x`.
fn unit_fract(x: f64) -> f64 {
    let f = x - x.floor();
    if (0.0..1.0).contains(&f) { f } else { 0.0 }
}
