use cadastro::forms::*;
use chrono::{NaiveDate, NaiveTime};

fn main() {
    let rules = FormRules::default();

    // ── 1. Volunteer with several mistakes: every error is reported ───
    println!("=== Volunteer ===");
    let form = VolunteerRegistration {
        name: "Jo".into(),
        email: "jo@exemplo".into(),
        cpf: "529.982.247-26".into(),
        phone: "+55 (42) 3333-4444".into(),
        birth_date: NaiveDate::from_ymd_opt(2015, 3, 10).unwrap(),
    };
    for e in validate_volunteer(&form, &rules) {
        println!("  {e}");
    }

    // ── 2. Organization through the builder ───────────────────────────
    println!("\n=== Organization ===");
    match OrganizationBuilder::new("Instituto Mãos Dadas", "contato@maosdadas.org.br")
        .cnpj("11.222.333/0001-81")
        .cep("80000-000")
        .phone("+55 42 99999-9999")
        .build()
    {
        Ok(org) => println!("  registered {} ({})", org.name, org.cnpj),
        Err(e) => println!("  rejected: {e}"),
    }

    // ── 3. Event draft rendered for the API ───────────────────────────
    println!("\n=== Event ===");
    let date = rules.formatter.today() + chrono::Days::new(7);
    let (Some(start), Some(end)) = (
        NaiveTime::from_hms_opt(9, 0, 0),
        NaiveTime::from_hms_opt(12, 0, 0),
    ) else {
        return;
    };
    match EventBuilder::new("Mutirão de limpeza", date)
        .starts(start)
        .ends(end)
        .cep("80000-000")
        .build()
    {
        Ok(event) => {
            println!("  starts_at: {}", event.starts_at(&rules.formatter));
            println!("  ends_at:   {}", event.ends_at(&rules.formatter));
        }
        Err(e) => println!("  rejected: {e}"),
    }
}
