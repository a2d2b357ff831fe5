/// Render `value` with exactly `digits` fractional digits.
///
/// The nearest decimal wins and an exact tie rounds away from zero
/// (`0.125` → `"0.13"`). `format!` alone resolves such ties to even, which
/// shows up on counts like 1 paper over 8 faculty.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || digits >= 40 {
        return format!("{value:.digits$}");
    }

    // f64 has at most ~60 fractional digits for magnitudes where a tie at
    // two or fewer digits is possible, so this expansion is exact.
    let exact = format!("{:.80}", value.abs());
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        return format!("{value:.digits$}");
    };
    let tail = &frac_part[digits..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{value:.digits$}");
    }

    let mut buf: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..digits].bytes())
        .collect();
    increment_decimal(&mut buf);

    let split = buf.len() - digits;
    let sign = if value < 0.0 { "-" } else { "" };
    // Only ASCII digits were pushed into `buf`.
    let (whole, frac) = buf.split_at(split);
    let whole = String::from_utf8_lossy(whole);
    if digits == 0 {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{}", String::from_utf8_lossy(frac))
    }
}

/// Add one unit in the last place to a string of ASCII digits.
fn increment_decimal(buf: &mut Vec<u8>) {
    for d in buf.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    buf.insert(0, b'1');
}

/// Round to the nearest integer, ties upward. Only called with non-negative
/// ratios, where half away from zero is the same thing.
pub fn round_half_up(value: f64) -> f64 {
    value.round()
}
