use cadastro::contact::{check_phone, valid_email};
use cadastro::core::{mask_cnpj, mask_cpf};
use cadastro::documents::{check_cnpj, check_cpf, valid_cep};

fn main() {
    // ── 1. CPF / CNPJ with stage-level errors ─────────────────────────
    println!("=== Documents ===");
    for input in ["529.982.247-25", "529.982.247-26", "111.111.111-11", "1234"] {
        match check_cpf(input) {
            Ok(cpf) => println!("  CPF  {input:<20} ok ({cpf})"),
            Err(e) => println!("  CPF  {input:<20} {e}"),
        }
    }
    for input in ["11222333000181", "11.222.333/0001-82"] {
        match check_cnpj(input) {
            Ok(cnpj) => println!("  CNPJ {input:<20} ok ({cnpj})"),
            Err(e) => println!("  CNPJ {input:<20} {e}"),
        }
    }
    println!("  CEP  80000-000 valid: {}", valid_cep("80000-000"));

    // ── 2. Progressive masks as the user types ────────────────────────
    println!("\n=== Masks ===");
    let typed = "11222333000181";
    for n in [2, 5, 8, 12, 14] {
        println!("  {:<14} -> {}", &typed[..n], mask_cnpj(&typed[..n]));
    }
    println!("  {:<14} -> {}", "5299822", mask_cpf("5299822"));

    // ── 3. Contact ────────────────────────────────────────────────────
    println!("\n=== Contact ===");
    for input in ["+55 (42) 99999-9999", "+55 (42) 3333-4444", "42999999999"] {
        match check_phone(input) {
            Ok(phone) => println!("  {input:<22} ok ({})", phone.as_str()),
            Err(e) => println!("  {input:<22} [{}] {e}", e.code()),
        }
    }
    for input in ["a@b.com", "a@b", "a.com"] {
        println!("  {input:<22} email valid: {}", valid_email(input));
    }
}
