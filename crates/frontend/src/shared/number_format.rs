//! Утилиты форматирования чисел для карточек и таблиц

/// Форматирует число с разделителем тысяч (запятая) и указанным
/// количеством знаков после точки
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    // Разделяем целую и дробную части
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежное значение с двумя знаками и символом валюты
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number_with_decimals(-value, 2))
    } else {
        format!("${}", format_number_with_decimals(value, 2))
    }
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Процент с одним знаком после точки
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(98765.0), "$98,765.00");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-1234.56), "-$1,234.56");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(12450.0), "12,450");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(-2.1), "-2.1%");
    }
}
