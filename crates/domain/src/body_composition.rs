use std::fmt;

use crate::ValidationError;

const HEALTHY_BMI_MIN: f32 = 18.5;
const HEALTHY_BMI_MAX: f32 = 24.9;

pub trait BodyCompositionService {
    fn validate_weight(&self, weight: &str) -> Result<f32, ValidationError> {
        match weight.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_weight) => {
                if parsed_weight > 0.0 && parsed_weight.is_finite() {
                    Ok(parsed_weight)
                } else {
                    Err(ValidationError::Other(
                        "Weight must be a positive decimal number".into(),
                    ))
                }
            }
            Err(_) => Err(ValidationError::Other(
                "Weight must be a decimal number".into(),
            )),
        }
    }

    fn validate_height(&self, height: &str) -> Result<f32, ValidationError> {
        match height.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_height) => {
                if parsed_height > 0.0 && parsed_height.is_finite() {
                    Ok(parsed_height)
                } else {
                    Err(ValidationError::Other(
                        "Height must be a positive decimal number".into(),
                    ))
                }
            }
            Err(_) => Err(ValidationError::Other(
                "Height must be a decimal number".into(),
            )),
        }
    }

    fn validate_age(&self, age: &str) -> Result<u8, ValidationError> {
        match age.trim().parse::<u8>() {
            Ok(parsed_age) if (1..=120).contains(&parsed_age) => Ok(parsed_age),
            _ => Err(ValidationError::Other(
                "Age must be a number between 1 and 120".into(),
            )),
        }
    }

    fn bmi(&self, weight: &str, height: &str) -> Result<Bmi, ValidationError> {
        let weight = self.validate_weight(weight)?;
        let height = self.validate_height(height)?;
        Bmi::new(weight, height).map_err(|err| ValidationError::Other(err.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sex::FEMALE => write!(f, "female"),
            Sex::MALE => write!(f, "male"),
        }
    }
}

/// Body mass index in kg/m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi(f32);

impl Bmi {
    pub fn new(weight: f32, height: f32) -> Result<Self, BmiError> {
        if !(weight > 0.0 && weight.is_finite()) {
            return Err(BmiError::InvalidWeight(weight));
        }

        if !(height > 0.0 && height.is_finite()) {
            return Err(BmiError::InvalidHeight(height));
        }

        let height_m = height / 100.;

        Ok(Self(weight / (height_m * height_m)))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn category(self) -> BmiCategory {
        match self.0 {
            x if x < 18.5 => BmiCategory::Underweight,
            x if x < 25.0 => BmiCategory::Normal,
            x if x < 30.0 => BmiCategory::Overweight,
            _ => BmiCategory::Obese,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BmiError {
    #[error("Weight must be a positive number ({0})")]
    InvalidWeight(f32),
    #[error("Height must be a positive number ({0})")]
    InvalidHeight(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Normal => write!(f, "Normal weight"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

/// Lower and upper weight in kg for which the BMI at the given height in cm is considered healthy.
#[must_use]
pub fn healthy_weight_range(height: f32) -> (f32, f32) {
    let height_m = height / 100.;
    (
        HEALTHY_BMI_MIN * height_m * height_m,
        HEALTHY_BMI_MAX * height_m * height_m,
    )
}

#[must_use]
pub fn fat_mass(weight: f32, body_fat: f32) -> f32 {
    weight * body_fat / 100.
}

#[must_use]
pub fn lean_mass(weight: f32, body_fat: f32) -> f32 {
    weight - fat_mass(weight, body_fat)
}

/// Skinfold thicknesses in mm.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Skinfolds {
    pub chest: Option<u8>,
    pub abdominal: Option<u8>,
    pub thigh: Option<u8>,
    pub tricep: Option<u8>,
    pub subscapular: Option<u8>,
    pub suprailiac: Option<u8>,
    pub midaxillary: Option<u8>,
}

impl Skinfolds {
    #[must_use]
    pub fn jp3(&self, sex: Sex, age: u8) -> Option<f32> {
        match sex {
            Sex::FEMALE => Some(Self::jackson_pollock(
                f32::from(self.tricep?) + f32::from(self.suprailiac?) + f32::from(self.thigh?),
                age,
                1.099_492_1,
                0.000_992_9,
                0.000_002_3,
                0.000_139_2,
            )),
            Sex::MALE => Some(Self::jackson_pollock(
                f32::from(self.chest?) + f32::from(self.abdominal?) + f32::from(self.thigh?),
                age,
                1.109_38,
                0.000_826_7,
                0.000_001_6,
                0.000_257_4,
            )),
        }
    }

    #[must_use]
    pub fn jp7(&self, sex: Sex, age: u8) -> Option<f32> {
        let sum = f32::from(self.chest?)
            + f32::from(self.abdominal?)
            + f32::from(self.thigh?)
            + f32::from(self.tricep?)
            + f32::from(self.subscapular?)
            + f32::from(self.suprailiac?)
            + f32::from(self.midaxillary?);
        match sex {
            Sex::FEMALE => Some(Self::jackson_pollock(
                sum,
                age,
                1.097,
                0.000_469_71,
                0.000_000_56,
                0.000_128_28,
            )),
            Sex::MALE => Some(Self::jackson_pollock(
                sum,
                age,
                1.112,
                0.000_434_99,
                0.000_000_55,
                0.000_288_26,
            )),
        }
    }

    /// Body density after Jackson and Pollock, converted to body fat percentage with Siri's
    /// equation.
    fn jackson_pollock(sum: f32, age: u8, k0: f32, k1: f32, k2: f32, ka: f32) -> f32 {
        let age = f32::from(age);
        (495. / (k0 - (k1 * sum) + (k2 * sum * sum) - (ka * age))) - 450.
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    struct Calculator;

    impl BodyCompositionService for Calculator {}

    #[rstest]
    #[case(70.0, 175.0, 22.857_143, BmiCategory::Normal)]
    #[case(50.0, 180.0, 15.432_099, BmiCategory::Underweight)]
    #[case(85.0, 170.0, 29.411_764, BmiCategory::Overweight)]
    #[case(120.0, 175.0, 39.183_674, BmiCategory::Obese)]
    fn test_bmi(
        #[case] weight: f32,
        #[case] height: f32,
        #[case] expected_value: f32,
        #[case] expected_category: BmiCategory,
    ) {
        let bmi = Bmi::new(weight, height).unwrap();
        assert_approx_eq!(bmi.value(), expected_value, 0.001);
        assert_eq!(bmi.category(), expected_category);
    }

    #[rstest]
    #[case(0.0, 175.0, BmiError::InvalidWeight(0.0))]
    #[case(-70.0, 175.0, BmiError::InvalidWeight(-70.0))]
    #[case(70.0, 0.0, BmiError::InvalidHeight(0.0))]
    #[case(70.0, f32::INFINITY, BmiError::InvalidHeight(f32::INFINITY))]
    fn test_bmi_invalid(#[case] weight: f32, #[case] height: f32, #[case] expected: BmiError) {
        assert_eq!(Bmi::new(weight, height), Err(expected));
    }

    #[rstest]
    #[case(18.4, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.9, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    fn test_bmi_category_boundaries(#[case] value: f32, #[case] expected: BmiCategory) {
        assert_eq!(Bmi(value).category(), expected);
    }

    #[test]
    fn test_bmi_category_display() {
        assert_eq!(BmiCategory::Normal.to_string(), "Normal weight");
        assert_eq!(BmiCategory::Obese.to_string(), "Obese");
    }

    #[test]
    fn test_healthy_weight_range() {
        let (min, max) = healthy_weight_range(175.0);
        assert_approx_eq!(min, 56.656_25, 0.001);
        assert_approx_eq!(max, 76.256_25, 0.001);
    }

    #[test]
    fn test_fat_and_lean_mass() {
        assert_approx_eq!(fat_mass(80.0, 15.0), 12.0, 0.001);
        assert_approx_eq!(lean_mass(80.0, 15.0), 68.0, 0.001);
        assert_approx_eq!(lean_mass(80.0, 0.0), 80.0, 0.001);
    }

    #[rstest]
    #[case::female_none(Skinfolds::default(), Sex::FEMALE, None, None)]
    #[case::female_jp3(
        Skinfolds {
            thigh: Some(20),
            tricep: Some(15),
            suprailiac: Some(5),
            ..Skinfolds::default()
        },
        Sex::FEMALE,
        Some(17.298_523),
        None
    )]
    #[case::female_jp7(
        Skinfolds {
            chest: Some(5),
            abdominal: Some(10),
            thigh: Some(20),
            tricep: Some(15),
            subscapular: Some(5),
            suprailiac: Some(5),
            midaxillary: Some(5),
        },
        Sex::FEMALE,
        Some(17.298_523),
        Some(14.794_678)
    )]
    #[case::male_none(Skinfolds::default(), Sex::MALE, None, None)]
    #[case::male_jp3(
        Skinfolds {
            chest: Some(5),
            abdominal: Some(15),
            thigh: Some(15),
            ..Skinfolds::default()
        },
        Sex::MALE,
        Some(10.600_708),
        None
    )]
    #[case::male_jp7(
        Skinfolds {
            chest: Some(5),
            abdominal: Some(15),
            thigh: Some(15),
            tricep: Some(15),
            subscapular: Some(10),
            suprailiac: Some(10),
            midaxillary: Some(10),
        },
        Sex::MALE,
        Some(10.600_708),
        Some(11.722_29)
    )]
    fn test_skinfolds_jp(
        #[case] skinfolds: Skinfolds,
        #[case] sex: Sex,
        #[case] expected_jp3: Option<f32>,
        #[case] expected_jp7: Option<f32>,
    ) {
        for (actual, expected) in [
            (skinfolds.jp3(sex, 30), expected_jp3),
            (skinfolds.jp7(sex, 30), expected_jp7),
        ] {
            match (actual, expected) {
                (Some(actual), Some(expected)) => assert_approx_eq!(actual, expected, 0.001),
                (actual, expected) => assert_eq!(actual, expected),
            }
        }
    }

    #[test]
    fn test_skinfolds_jp3_increases_with_age() {
        let skinfolds = Skinfolds {
            chest: Some(5),
            abdominal: Some(15),
            thigh: Some(15),
            ..Skinfolds::default()
        };
        assert!(skinfolds.jp3(Sex::MALE, 50) > skinfolds.jp3(Sex::MALE, 20));
    }

    #[rstest]
    #[case("80", Ok(80.0))]
    #[case(" 80,5 ", Ok(80.5))]
    #[case("80.5", Ok(80.5))]
    #[case("0", Err("Weight must be a positive decimal number"))]
    #[case("-1", Err("Weight must be a positive decimal number"))]
    #[case("abc", Err("Weight must be a decimal number"))]
    fn test_validate_weight(#[case] weight: &str, #[case] expected: Result<f32, &str>) {
        assert_eq!(
            Calculator
                .validate_weight(weight)
                .map_err(|err| err.to_string()),
            expected.map_err(str::to_string)
        );
    }

    #[rstest]
    #[case("175", Ok(175.0))]
    #[case("175,5", Ok(175.5))]
    #[case("0", Err("Height must be a positive decimal number"))]
    #[case("", Err("Height must be a decimal number"))]
    fn test_validate_height(#[case] height: &str, #[case] expected: Result<f32, &str>) {
        assert_eq!(
            Calculator
                .validate_height(height)
                .map_err(|err| err.to_string()),
            expected.map_err(str::to_string)
        );
    }

    #[rstest]
    #[case("30", Ok(30))]
    #[case(" 1 ", Ok(1))]
    #[case("0", Err("Age must be a number between 1 and 120"))]
    #[case("121", Err("Age must be a number between 1 and 120"))]
    #[case("300", Err("Age must be a number between 1 and 120"))]
    #[case("x", Err("Age must be a number between 1 and 120"))]
    fn test_validate_age(#[case] age: &str, #[case] expected: Result<u8, &str>) {
        assert_eq!(
            Calculator.validate_age(age).map_err(|err| err.to_string()),
            expected.map_err(str::to_string)
        );
    }

    #[test]
    fn test_service_bmi() {
        assert_approx_eq!(
            Calculator.bmi("70", "175").unwrap().value(),
            22.857_143,
            0.001
        );
        assert_eq!(
            Calculator
                .bmi("70", "-175")
                .map_err(|err| err.to_string()),
            Err("Height must be a positive decimal number".to_string())
        );
    }

    #[test]
    fn test_sex_display() {
        assert_eq!(Sex::FEMALE.to_string(), "female");
        assert_eq!(Sex::MALE.to_string(), "male");
    }
}
