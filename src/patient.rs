//! Patient information form model.

use crate::consts::cli_consts::form;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn next(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Other,
            Gender::Other => Gender::Male,
        }
    }
}

/// Transient form input. Exists only to compute BMI on submission; numeric
/// edits clamp at the widget bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub weight_kg: u16,
    pub height_cm: u16,
}

impl Default for PatientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            gender: Gender::default(),
            weight_kg: form::WEIGHT_DEFAULT,
            height_cm: form::HEIGHT_DEFAULT,
        }
    }
}

impl PatientForm {
    pub fn adjust_age(&mut self, delta: i16) {
        self.age = shift_u8(self.age, delta, form::AGE_RANGE);
    }

    pub fn adjust_weight(&mut self, delta: i16) {
        self.weight_kg = shift_u16(self.weight_kg, delta, form::WEIGHT_RANGE);
    }

    pub fn adjust_height(&mut self, delta: i16) {
        self.height_cm = shift_u16(self.height_cm, delta, form::HEIGHT_RANGE);
    }

    pub fn push_name_char(&mut self, c: char) {
        self.name.push(c);
    }

    pub fn pop_name_char(&mut self) {
        self.name.pop();
    }

    /// BMI = weight / (height/100)², rounded to two decimals.
    pub fn bmi(&self) -> f64 {
        let meters = f64::from(self.height_cm) / 100.0;
        round2(f64::from(self.weight_kg) / (meters * meters))
    }
}

/// Outcome of a form submission, displayed until the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiReport {
    pub name: String,
    pub bmi: f64,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn shift_u8(value: u8, delta: i16, (min, max): (u8, u8)) -> u8 {
    let shifted = i16::from(value) + delta;
    shifted.clamp(i16::from(min), i16::from(max)) as u8
}

fn shift_u16(value: u16, delta: i16, (min, max): (u16, u16)) -> u16 {
    let shifted = i32::from(value) + i32::from(delta);
    shifted.clamp(i32::from(min), i32::from(max)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_for_default_form_is_24_22() {
        let form = PatientForm::default();
        assert_eq!(form.weight_kg, 70);
        assert_eq!(form.height_cm, 170);
        assert_eq!(form.bmi(), 24.22);
    }

    #[test]
    fn bmi_is_rounded_to_two_decimals() {
        let form = PatientForm {
            weight_kg: 80,
            height_cm: 183,
            ..PatientForm::default()
        };
        // 80 / 1.83^2 = 23.8884...
        assert_eq!(form.bmi(), 23.89);
    }

    #[test]
    fn numeric_edits_clamp_at_widget_bounds() {
        let mut form = PatientForm::default();
        form.adjust_age(200);
        assert_eq!(form.age, 120);
        form.adjust_age(-300);
        assert_eq!(form.age, 0);

        form.adjust_weight(1000);
        assert_eq!(form.weight_kg, 150);
        form.adjust_weight(-1000);
        assert_eq!(form.weight_kg, 30);

        form.adjust_height(1000);
        assert_eq!(form.height_cm, 220);
        form.adjust_height(-1000);
        assert_eq!(form.height_cm, 100);
    }

    #[test]
    fn gender_selection_cycles() {
        assert_eq!(Gender::Male.next(), Gender::Female);
        assert_eq!(Gender::Female.next(), Gender::Other);
        assert_eq!(Gender::Other.next(), Gender::Male);
        assert_eq!(Gender::Other.to_string(), "Other");
    }

    #[test]
    fn name_editing_appends_and_removes() {
        let mut form = PatientForm::default();
        for c in "Ada".chars() {
            form.push_name_char(c);
        }
        assert_eq!(form.name, "Ada");
        form.pop_name_char();
        assert_eq!(form.name, "Ad");
    }
}
