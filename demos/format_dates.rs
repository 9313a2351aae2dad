use cadastro::datetime::*;
use chrono::{NaiveDate, NaiveTime};

fn main() {
    let ms = 1_714_584_600_000_i64;

    println!("=== Default zone (America/Sao_Paulo) ===");
    println!("  date:      {}", format_date(ms).unwrap_or_else(|e| e.to_string()));
    println!("  time:      {}", format_time(ms).unwrap_or_else(|e| e.to_string()));
    println!("  date/time: {}", format_date_time(ms).unwrap_or_else(|e| e.to_string()));

    match to_timestamp("01/05/2024 14:30") {
        Ok(back) => println!("  to_timestamp(\"01/05/2024 14:30\") = {back}"),
        Err(e) => println!("  parse failed: {e}"),
    }
    match to_timestamp("31/02/2024 14:30") {
        Ok(back) => println!("  unexpected: {back}"),
        Err(e) => println!("  parse failed: {e}"),
    }

    let (Some(date), Some(time)) = (
        NaiveDate::from_ymd_opt(2024, 5, 1),
        NaiveTime::from_hms_opt(14, 30, 0),
    ) else {
        return;
    };
    println!("  wire:      {}", combine_date_time_string(&date, &time));

    println!("\n=== Other offset (UTC-05:00) ===");
    if let Ok(fmt) = DateFormatter::with_offset_hours(-5) {
        println!("  date/time: {}", fmt.format_date_time(ms).unwrap_or_else(|e| e.to_string()));
        println!("  wire:      {}", fmt.combine_date_time_string(&date, &time));
    }

    println!("\n=== Ranges ===");
    let fmt = DateFormatter::default();
    println!("  today:            {}", fmt.today());
    match is_at_least_18_years_old(date - chrono::Months::new(216)) {
        Ok(adult) => println!("  2006-05-01 adult: {adult}"),
        Err(e) => println!("  age check failed: {e}"),
    }
    match is_future_date("2024-05-02T02:00:00Z") {
        Ok(future) => println!("  2024-05-02T02:00Z is in the future: {future}"),
        Err(e) => println!("  range check failed: {e}"),
    }
}
