pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;
pub const LITERS_PER_GALLON: f64 = 3.78541;

#[inline]
pub fn kilograms_to_pounds(kilograms: f64) -> f64 {
    kilograms * POUNDS_PER_KILOGRAM
}

#[inline]
pub fn liters_to_gallons(liters: f64) -> f64 {
    liters / LITERS_PER_GALLON
}
