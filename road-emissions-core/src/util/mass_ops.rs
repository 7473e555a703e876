use uom::si::f64::Mass;
use uom::si::mass::{gigagram, gram, megagram};

/// grams of CO2e to kilotonnes (one kilotonne is a gigagram).
pub fn grams_to_kilotonnes(grams: f64) -> f64 {
    Mass::new::<gram>(grams).get::<gigagram>()
}

/// metric tonnes of CO2e to kilotonnes.
pub fn tonnes_to_kilotonnes(tonnes: f64) -> f64 {
    Mass::new::<megagram>(tonnes).get::<gigagram>()
}

pub fn kilotonnes_to_grams(kilotonnes: f64) -> f64 {
    Mass::new::<gigagram>(kilotonnes).get::<gram>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_conversions() {
        assert!(approx(grams_to_kilotonnes(2.5e9), 2.5));
        assert!(approx(tonnes_to_kilotonnes(1500.0), 1.5));
        assert!(approx(kilotonnes_to_grams(0.75), 7.5e8));
    }
}
