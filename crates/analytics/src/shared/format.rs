/// Округляет денежное значение до двух знаков
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Разделители тысяч (точки) для целой части денежных сумм
///
/// # Примеры
/// ```
/// use analytics::shared::format::format_number;
/// assert_eq!(format_number(9876543), "9.876.543");
/// assert_eq!(format_number(500), "500");
/// ```
pub fn format_number(n: usize) -> String {
    let digits: Vec<char> = n.to_string().chars().rev().collect();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(*ch);
    }
    result.chars().rev().collect()
}

/// Денежный формат для таблицы отчёта: разделители тысяч и два знака
pub fn format_money(value: f64) -> String {
    let cents_total = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents_total > 0 { "-" } else { "" };
    format!(
        "{}{}.{:02}",
        sign,
        format_number((cents_total / 100) as usize),
        cents_total % 100
    )
}
