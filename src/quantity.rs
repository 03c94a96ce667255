/// Unit of measurement attached to an ingredient quantity.
///
/// Scraped recipes use Norwegian abbreviations (`ss`, `ts`, `stk`), the admin
/// forms use English ones. Both parse to the same variant and are displayed
/// with the English symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Measurement {
    Grams,
    Kilograms,
    Liters,
    Deciliters,
    Tablespoons,
    Teaspoons,
    Count,
    /// Unit text we don't recognize; shown back verbatim.
    Other(String),
}

impl Measurement {
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "g" => Measurement::Grams,
            "kg" => Measurement::Kilograms,
            "L" | "l" => Measurement::Liters,
            "dl" => Measurement::Deciliters,
            "Tb." | "tbsp" | "ss" => Measurement::Tablespoons,
            "tsp" | "ts" => Measurement::Teaspoons,
            "" | "stk" | "båt" => Measurement::Count,
            other => Measurement::Other(other.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Measurement::Grams => "g",
            Measurement::Kilograms => "kg",
            Measurement::Liters => "L",
            Measurement::Deciliters => "dl",
            Measurement::Tablespoons => "tbsp",
            Measurement::Teaspoons => "tsp",
            Measurement::Count => "",
            Measurement::Other(text) => text,
        }
    }
}

/// A quantity label as read from the page: an optional numeric amount and
/// an optional unit. `amount` is `None` when the label isn't a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: Option<f64>,
    pub unit: Option<Measurement>,
}

impl Quantity {
    #[cfg(test)]
    pub fn new(amount: f64, unit: Option<Measurement>) -> Self {
        Self {
            amount: Some(amount),
            unit,
        }
    }

    /// Parse label text such as `"2"`, `"2,5 dl"`, `"2.5dl"`, `"1½"` or
    /// `"1 ½ ss"`: a leading number, then whatever follows as the unit.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let number_end = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .unwrap_or(text.len());
        let (number, mut rest) = text.split_at(number_end);
        let mut amount = parse_decimal(number);

        // "1½" and "1 ½" both mean one and a half
        let mut after = rest.trim_start().chars();
        if let Some(frac) = after.next().and_then(vulgar_fraction) {
            match amount {
                None if number.is_empty() => {
                    amount = Some(frac);
                    rest = after.as_str();
                }
                Some(whole) if whole.fract() == 0.0 => {
                    amount = Some(whole + frac);
                    rest = after.as_str();
                }
                _ => {}
            }
        }

        if amount.is_none() {
            return Self {
                amount: None,
                unit: None,
            };
        }

        let unit_text = rest.trim();
        let unit = if unit_text.is_empty() {
            None
        } else {
            Some(Measurement::parse(unit_text))
        };

        Self { amount, unit }
    }

    /// Render as label text. Non-finite or missing amounts render as an
    /// empty string.
    pub fn label(&self) -> String {
        let Some(amount) = self.amount.filter(|a| a.is_finite()) else {
            return String::new();
        };

        let number = format_amount(amount);
        match self.unit.as_ref().map(Measurement::symbol) {
            Some(symbol) if !symbol.is_empty() => format!("{} {}", number, symbol),
            _ => number,
        }
    }
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Shortest decimal form: `3.0` -> `"3"`, `1.5` -> `"1.5"`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("{}", value)
}

fn parse_decimal(text: &str) -> Option<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn vulgar_fraction(c: char) -> Option<f64> {
    let value = match c {
        '¼' => 1.0 / 4.0,
        '½' => 1.0 / 2.0,
        '¾' => 3.0 / 4.0,
        '⅐' => 1.0 / 7.0,
        '⅑' => 1.0 / 9.0,
        '⅒' => 1.0 / 10.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '⅕' => 1.0 / 5.0,
        '⅖' => 2.0 / 5.0,
        '⅗' => 3.0 / 5.0,
        '⅘' => 4.0 / 5.0,
        '⅙' => 1.0 / 6.0,
        '⅚' => 5.0 / 6.0,
        '⅛' => 1.0 / 8.0,
        '⅜' => 3.0 / 8.0,
        '⅝' => 5.0 / 8.0,
        '⅞' => 7.0 / 8.0,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_and_comma_decimals() {
        assert_eq!(Quantity::parse("2").amount, Some(2.0));
        assert_eq!(Quantity::parse("2.5").amount, Some(2.5));
        assert_eq!(Quantity::parse(" 2,5 ").amount, Some(2.5));
    }

    #[test]
    fn test_parses_vulgar_fractions() {
        assert_eq!(Quantity::parse("½").amount, Some(0.5));
        assert_eq!(Quantity::parse("1½").amount, Some(1.5));
        assert_eq!(Quantity::parse("1 ¾").amount, Some(1.75));
        assert_eq!(Quantity::parse("⅛").amount, Some(0.125));
    }

    #[test]
    fn test_parses_unit_suffix() {
        let q = Quantity::parse("2,5 ss");
        assert_eq!(q.amount, Some(2.5));
        assert_eq!(q.unit, Some(Measurement::Tablespoons));

        let q = Quantity::parse("1 ½ dl");
        assert_eq!(q.amount, Some(1.5));
        assert_eq!(q.unit, Some(Measurement::Deciliters));
    }

    #[test]
    fn test_parses_unit_glued_to_number() {
        let q = Quantity::parse("2.5dl");
        assert_eq!(q.amount, Some(2.5));
        assert_eq!(q.unit, Some(Measurement::Deciliters));

        let q = Quantity::parse("200g");
        assert_eq!(q.amount, Some(200.0));
        assert_eq!(q.unit, Some(Measurement::Grams));

        let q = Quantity::parse("3stk");
        assert_eq!(q.amount, Some(3.0));
        assert_eq!(q.unit, Some(Measurement::Count));

        let q = Quantity::parse("½ts");
        assert_eq!(q.amount, Some(0.5));
        assert_eq!(q.unit, Some(Measurement::Teaspoons));

        let q = Quantity::parse("1½Tb.");
        assert_eq!(q.amount, Some(1.5));
        assert_eq!(q.unit, Some(Measurement::Tablespoons));
    }

    #[test]
    fn test_glued_unit_scales_instead_of_blanking() {
        assert_eq!(Quantity::parse("2.5dl").label(), "2.5 dl");
        assert_eq!(Quantity::parse("3stk").label(), "3");
    }

    #[test]
    fn test_non_numeric_is_absent() {
        assert_eq!(Quantity::parse("a pinch").amount, None);
        assert_eq!(Quantity::parse("").amount, None);
        assert_eq!(Quantity::parse("NaN").amount, None);
        assert_eq!(Quantity::parse("inf").amount, None);
        assert_eq!(Quantity::parse("1.2.3 dl").amount, None);
        assert_eq!(Quantity::parse("salt 2"), Quantity { amount: None, unit: None });
    }

    #[test]
    fn test_measurement_accepts_both_languages() {
        assert_eq!(Measurement::parse("ts"), Measurement::Teaspoons);
        assert_eq!(Measurement::parse("tsp"), Measurement::Teaspoons);
        assert_eq!(Measurement::parse("stk"), Measurement::Count);
        assert_eq!(Measurement::parse("båt"), Measurement::Count);
        assert_eq!(Measurement::parse("Tb."), Measurement::Tablespoons);
        assert_eq!(
            Measurement::parse("cups"),
            Measurement::Other("cups".to_string())
        );
    }

    #[test]
    fn test_label_formatting() {
        assert_eq!(Quantity::new(3.0, None).label(), "3");
        assert_eq!(Quantity::new(1.5, Some(Measurement::Deciliters)).label(), "1.5 dl");
        assert_eq!(Quantity::new(4.0, Some(Measurement::Count)).label(), "4");
        assert_eq!(Quantity::new(f64::NAN, None).label(), "");
        assert_eq!(
            Quantity {
                amount: None,
                unit: Some(Measurement::Grams)
            }
            .label(),
            ""
        );
    }

    #[test]
    fn test_round_to_tenth_rounds_half_up() {
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(1.04), 1.0);
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(format_amount(round_to_tenth(0.75)), "0.8");
    }
}
